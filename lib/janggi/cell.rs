use crate::janggi::{File, ParseFileError, ParseRankError, Perspective, Rank};
use crate::util::Integer;
use derive_more::{Display, Error, From};
use std::{fmt, str::FromStr};

/// A cell on the Janggi board.
///
/// Pieces stand on the intersections of the board lines, which we call cells.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(i8)]
#[rustfmt::skip]
pub enum Cell {
    A1, B1, C1, D1, E1, F1, G1, H1, I1,
    A2, B2, C2, D2, E2, F2, G2, H2, I2,
    A3, B3, C3, D3, E3, F3, G3, H3, I3,
    A4, B4, C4, D4, E4, F4, G4, H4, I4,
    A5, B5, C5, D5, E5, F5, G5, H5, I5,
    A6, B6, C6, D6, E6, F6, G6, H6, I6,
    A7, B7, C7, D7, E7, F7, G7, H7, I7,
    A8, B8, C8, D8, E8, F8, G8, H8, I8,
    A9, B9, C9, D9, E9, F9, G9, H9, I9,
    A10, B10, C10, D10, E10, F10, G10, H10, I10,
}

impl Cell {
    /// The number of cells on the board.
    pub const COUNT: usize = 90;

    const FILES: i8 = File::MAX + 1;

    /// Constructs [`Cell`] from a pair of [`File`] and [`Rank`].
    #[inline(always)]
    pub fn new(f: File, r: Rank) -> Self {
        <Self as Integer>::new(f.get() + r.get() * Self::FILES)
    }

    /// This cell's [`File`].
    #[inline(always)]
    pub fn file(&self) -> File {
        File::new(self.get() % Self::FILES)
    }

    /// This cell's [`Rank`].
    #[inline(always)]
    pub fn rank(&self) -> Rank {
        Rank::new(self.get() / Self::FILES)
    }

    /// This cell's position in a board-sized array.
    #[inline(always)]
    pub fn index(&self) -> usize {
        self.get() as usize
    }

    /// The cell `df` files and `dr` ranks away, if it's on the board.
    #[inline(always)]
    pub fn offset(&self, df: i8, dr: i8) -> Option<Self> {
        let f = (self.file().get() + df).convert()?;
        let r = (self.rank().get() + dr).convert()?;
        Some(Cell::new(f, r))
    }
}

unsafe impl Integer for Cell {
    type Repr = i8;
    const MIN: Self::Repr = Cell::A1 as _;
    const MAX: Self::Repr = Cell::I10 as _;
}

impl Perspective for Cell {
    /// Flips this cell's [`Rank`].
    #[inline(always)]
    fn flip(&self) -> Self {
        Cell::new(self.file(), self.rank().flip())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.file(), f)?;
        fmt::Display::fmt(&self.rank(), f)?;
        Ok(())
    }
}

/// The reason why parsing [`Cell`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParseCellError {
    #[display(fmt = "failed to parse cell; {}", _0)]
    InvalidFile(ParseFileError),
    #[display(fmt = "failed to parse cell; {}", _0)]
    InvalidRank(ParseRankError),
}

impl FromStr for Cell {
    type Err = ParseCellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let i = s.char_indices().nth(1).map_or_else(|| s.len(), |(i, _)| i);
        Ok(Cell::new(s[..i].parse()?, s[i..].parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;
    use test_strategy::proptest;

    #[test]
    fn cell_guarantees_zero_value_optimization() {
        assert_eq!(size_of::<Option<Cell>>(), size_of::<Cell>());
    }

    #[test]
    fn board_has_ninety_cells() {
        assert_eq!(Cell::iter().count(), Cell::COUNT);
    }

    #[proptest]
    fn new_constructs_cell_from_pair_of_file_and_rank(c: Cell) {
        assert_eq!(Cell::new(c.file(), c.rank()), c);
    }

    #[proptest]
    fn cell_index_is_unique(a: Cell, b: Cell) {
        assert_eq!(a == b, a.index() == b.index());
    }

    #[proptest]
    fn flipping_cell_preserves_file_and_flips_rank(c: Cell) {
        assert_eq!(c.flip(), Cell::new(c.file(), c.rank().flip()));
    }

    #[proptest]
    fn offset_moves_by_files_and_ranks(
        c: Cell,
        #[strategy(-8i8..=8)] df: i8,
        #[strategy(-9i8..=9)] dr: i8,
    ) {
        match c.offset(df, dr) {
            Some(d) => {
                assert_eq!(d.file() - c.file(), df);
                assert_eq!(d.rank() - c.rank(), dr);
            }

            None => {
                let f = c.file().get() + df;
                let r = c.rank().get() + dr;
                assert!(!File::in_range(f) || !Rank::in_range(r));
            }
        }
    }

    #[test]
    fn offset_fails_beyond_the_edges() {
        assert_eq!(Cell::A1.offset(-1, 0), None);
        assert_eq!(Cell::A1.offset(0, -1), None);
        assert_eq!(Cell::I10.offset(1, 0), None);
        assert_eq!(Cell::I10.offset(0, 1), None);
        assert_eq!(Cell::E5.offset(1, 1), Some(Cell::F6));
    }

    #[proptest]
    fn parsing_printed_cell_is_an_identity(c: Cell) {
        assert_eq!(c.to_string().parse(), Ok(c));
    }

    #[test]
    fn parsing_cell_accepts_two_digit_ranks() {
        assert_eq!("a10".parse(), Ok(Cell::A10));
        assert_eq!("e2".parse(), Ok(Cell::E2));
    }

    #[proptest]
    fn parsing_cell_fails_if_file_invalid(
        #[filter(!('a'..='i').contains(&#c))] c: char,
        r: Rank,
    ) {
        assert_eq!(
            [c.to_string(), r.to_string()].concat().parse::<Cell>(),
            Err(ParseCellError::InvalidFile(ParseFileError))
        );
    }

    #[proptest]
    fn parsing_cell_fails_if_rank_invalid(f: File, #[filter(!('1'..='9').contains(&#c))] c: char) {
        assert_eq!(
            [f.to_string(), c.to_string()].concat().parse::<Cell>(),
            Err(ParseCellError::InvalidRank(ParseRankError))
        );
    }

    #[test]
    fn parsing_cell_fails_for_malformed_input() {
        assert!("".parse::<Cell>().is_err());
        assert!("e".parse::<Cell>().is_err());
        assert!("e0".parse::<Cell>().is_err());
        assert!("e11".parse::<Cell>().is_err());
        assert!("j5".parse::<Cell>().is_err());
        assert!("E5".parse::<Cell>().is_err());
        assert!("e5 ".parse::<Cell>().is_err());
    }
}
