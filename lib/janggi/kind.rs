use crate::util::Integer;
use std::fmt::{self, Formatter};

/// The kind of a Janggi [`Piece`][`crate::janggi::Piece`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
pub enum Kind {
    Soldier,
    Cannon,
    Chariot,
    Elephant,
    Horse,
    Guard,
    General,
}

/// How a piece's path must look for a move to be possible.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Blocking {
    /// Every intermediate cell must be empty.
    Clear,
    /// Exactly one intermediate cell must be occupied, and not by a cannon.
    Screen,
}

impl Kind {
    /// The rule governing intermediate cells for this kind.
    #[inline(always)]
    pub fn blocking(self) -> Blocking {
        match self {
            Kind::Cannon => Blocking::Screen,
            _ => Blocking::Clear,
        }
    }

    /// Whether pieces of this kind are confined to their own palace.
    #[inline(always)]
    pub fn is_confined(self) -> bool {
        matches!(self, Kind::Guard | Kind::General)
    }
}

unsafe impl Integer for Kind {
    type Repr = u8;
    const MIN: Self::Repr = Kind::Soldier as _;
    const MAX: Self::Repr = Kind::General as _;
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Soldier => f.write_str("so"),
            Kind::Cannon => f.write_str("ca"),
            Kind::Chariot => f.write_str("ch"),
            Kind::Elephant => f.write_str("el"),
            Kind::Horse => f.write_str("ho"),
            Kind::Guard => f.write_str("gu"),
            Kind::General => f.write_str("ge"),
        }
    }
}
