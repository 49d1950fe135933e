use crate::janggi::Color;
use derive_more::Display;

/// Whether a game is still being played, and who won otherwise.
#[derive(Debug, Display, Default, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum GameState {
    #[default]
    #[display(fmt = "UNFINISHED")]
    Unfinished,
    #[display(fmt = "RED_WON")]
    RedWon,
    #[display(fmt = "BLUE_WON")]
    BlueWon,
}

impl GameState {
    /// The state of a game won by the given [`Color`].
    #[inline(always)]
    pub fn won_by(c: Color) -> Self {
        match c {
            Color::Red => GameState::RedWon,
            Color::Blue => GameState::BlueWon,
        }
    }

    /// The winner, if any.
    #[inline(always)]
    pub fn winner(&self) -> Option<Color> {
        match self {
            GameState::Unfinished => None,
            GameState::RedWon => Some(Color::Red),
            GameState::BlueWon => Some(Color::Blue),
        }
    }

    /// Whether no more moves can be played.
    #[inline(always)]
    pub fn is_finished(&self) -> bool {
        *self != GameState::Unfinished
    }
}
