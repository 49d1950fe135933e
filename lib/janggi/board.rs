use crate::janggi::{opening, Cell, Color, File, Kind, Palace, PieceId, Rank};
use crate::util::Integer;
use derive_more::{Display, Error};
use std::fmt::{self, Write};
use std::ops::Index;

/// The reason why a placement of pieces can't start a game.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum InvalidSetup {
    #[display(fmt = "the {} side has no general", _0)]
    MissingGeneral(#[error(not(source))] Color),
    #[display(fmt = "the {} side has more than one general", _0)]
    TooManyGenerals(#[error(not(source))] Color),
    #[display(fmt = "`{}` must stand inside its palace", _0)]
    OutsidePalace(#[error(not(source))] PieceId),
    #[display(fmt = "more than one piece on `{}`", _0)]
    OccupiedCell(#[error(not(source))] Cell),
    #[display(fmt = "`{}` is placed more than once", _0)]
    DuplicatePiece(#[error(not(source))] PieceId),
    #[display(fmt = "the {} side is in check but it's not its turn", _0)]
    OppositeCheck(#[error(not(source))] Color),
}

/// The Janggi board.
///
/// Maps every [`Cell`] to the piece standing on it, if any.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    cells: [Option<PieceId>; Cell::COUNT],
    generals: [Cell; 2],
}

impl Default for Board {
    /// The standard opening layout.
    fn default() -> Self {
        let mut board = Board {
            cells: [None; Cell::COUNT],
            generals: [Cell::E2, Cell::E9],
        };

        for (id, cell) in opening() {
            board.place(id, cell);
        }

        board
    }
}

impl Board {
    /// Places pieces on an empty board.
    ///
    /// Each side needs exactly one general, and generals and guards must stand
    /// inside their own palace.
    pub fn new<I: IntoIterator<Item = (PieceId, Cell)>>(pieces: I) -> Result<Self, InvalidSetup> {
        let mut cells = [None; Cell::COUNT];
        let mut generals = [None; 2];
        let mut placed = Vec::new();

        for (id, cell) in pieces {
            if cells[cell.index()].is_some() {
                return Err(InvalidSetup::OccupiedCell(cell));
            } else if placed.contains(&id) {
                return Err(InvalidSetup::DuplicatePiece(id));
            } else if id.kind().is_confined() && !Palace::of(id.color()).contains(cell) {
                return Err(InvalidSetup::OutsidePalace(id));
            }

            if id.kind() == Kind::General && generals[id.color() as usize].replace(cell).is_some() {
                return Err(InvalidSetup::TooManyGenerals(id.color()));
            }

            cells[cell.index()] = Some(id);
            placed.push(id);
        }

        let [Some(red), Some(blue)] = generals else {
            let missing = if generals[0].is_none() { Color::Red } else { Color::Blue };
            return Err(InvalidSetup::MissingGeneral(missing));
        };

        Ok(Board {
            cells,
            generals: [red, blue],
        })
    }

    /// The piece on the given [`Cell`], if any.
    #[inline(always)]
    pub fn occupant_at(&self, cell: Cell) -> Option<PieceId> {
        self.cells[cell.index()]
    }

    /// The [`Cell`] occupied by the general of the given [`Color`].
    #[inline(always)]
    pub fn general(&self, side: Color) -> Cell {
        self.generals[side as usize]
    }

    /// Records where the general of the given [`Color`] stands.
    #[inline(always)]
    pub(crate) fn set_general(&mut self, side: Color, cell: Cell) {
        self.generals[side as usize] = cell;
    }

    /// Moves the piece on `from` to `to`, returning the piece previously on `to`.
    ///
    /// No rules are checked here.
    pub(crate) fn move_piece(&mut self, from: Cell, to: Cell) -> Option<PieceId> {
        let piece = self.cells[from.index()].take();
        let captured = std::mem::replace(&mut self.cells[to.index()], piece);

        if let Some(p) = piece.filter(|p| p.kind() == Kind::General) {
            self.set_general(p.color(), to);
        }

        captured
    }

    /// Puts a piece on an empty [`Cell`].
    pub(crate) fn place(&mut self, id: PieceId, cell: Cell) {
        debug_assert!(self.cells[cell.index()].is_none());
        self.cells[cell.index()] = Some(id);

        if id.kind() == Kind::General {
            self.set_general(id.color(), cell);
        }
    }

    /// An iterator over all pieces on the board.
    pub fn iter(&self) -> impl Iterator<Item = (PieceId, Cell)> + '_ {
        self.cells().filter_map(|(cell, id)| Some((id?, cell)))
    }

    /// An iterator over every [`Cell`] of the board and its occupant.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, Option<PieceId>)> + '_ {
        Cell::iter().map(|c| (c, self[c]))
    }
}

/// Retrieves the piece on a given [`Cell`], if any.
impl Index<Cell> for Board {
    type Output = Option<PieceId>;

    #[inline(always)]
    fn index(&self, cell: Cell) -> &Self::Output {
        &self.cells[cell.index()]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("   ")?;
        for file in File::iter() {
            write!(f, "  {}   ", file)?;
        }

        for rank in Rank::iter().rev() {
            write!(f, "\n{:>2} ", rank.to_string())?;
            for file in File::iter() {
                match self[Cell::new(file, rank)] {
                    Some(id) => write!(f, " {} ", id)?,
                    None => f.write_str(" ---- ")?,
                }
            }
        }

        f.write_char('\n')
    }
}
