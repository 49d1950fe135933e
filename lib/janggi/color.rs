use crate::util::Integer;
use derive_more::Display;
use std::ops::Not;

/// The color of a Janggi [`Piece`][`crate::janggi::Piece`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
pub enum Color {
    #[display(fmt = "red")]
    Red,
    #[display(fmt = "blue")]
    Blue,
}

impl Color {
    /// The single letter prefix used in piece identities.
    #[inline(always)]
    pub fn letter(self) -> char {
        match self {
            Color::Red => 'r',
            Color::Blue => 'b',
        }
    }

    /// The rank direction this color's soldiers advance towards.
    #[inline(always)]
    pub fn forward(self) -> i8 {
        match self {
            Color::Red => 1,
            Color::Blue => -1,
        }
    }
}

unsafe impl Integer for Color {
    type Repr = u8;
    const MIN: Self::Repr = Color::Red as _;
    const MAX: Self::Repr = Color::Blue as _;
}

impl Not for Color {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        match self {
            Color::Red => Color::Blue,
            Color::Blue => Color::Red,
        }
    }
}
