use crate::janggi::{Cell, Color, File, Perspective, Rank};
use arrayvec::ArrayVec;

/// The 3×3 fortress of a [`Color`], where its general and guards live.
///
/// The four corners are joined to the center by the palace diagonals.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Palace(Color);

impl Palace {
    /// The palace of the given [`Color`].
    #[inline(always)]
    pub fn of(c: Color) -> Self {
        Palace(c)
    }

    /// The palace containing the given [`Cell`], if any.
    #[inline(always)]
    pub fn containing(cell: Cell) -> Option<Self> {
        [Palace(Color::Red), Palace(Color::Blue)]
            .into_iter()
            .find(|p| p.contains(cell))
    }

    /// The cell where the palace diagonals cross.
    #[inline(always)]
    pub fn center(&self) -> Cell {
        Cell::E2.perspective(self.0)
    }

    /// The four corners, in no particular order.
    #[inline(always)]
    pub fn corners(&self) -> [Cell; 4] {
        [Cell::D1, Cell::F1, Cell::D3, Cell::F3].map(|c| c.perspective(self.0))
    }

    /// Whether the [`Cell`] lies inside this palace.
    #[inline(always)]
    pub fn contains(&self, cell: Cell) -> bool {
        let rank = cell.rank().perspective(self.0);
        (File::D..=File::F).contains(&cell.file()) && (Rank::First..=Rank::Third).contains(&rank)
    }

    /// Whether the [`Cell`] is one of the four corners.
    #[inline(always)]
    pub fn is_corner(&self, cell: Cell) -> bool {
        self.corners().contains(&cell)
    }

    /// The corner diagonally across the center from the given corner.
    #[inline(always)]
    pub fn opposite(&self, corner: Cell) -> Option<Cell> {
        if !self.is_corner(corner) {
            return None;
        }

        let center = self.center();
        center.offset(center.file() - corner.file(), center.rank() - corner.rank())
    }

    /// Cells one diagonal step away along the palace lines.
    ///
    /// From the center these are the four corners, from a corner it's the center,
    /// and from anywhere else there are none.
    pub fn diagonal_steps(&self, cell: Cell) -> ArrayVec<Cell, 4> {
        if cell == self.center() {
            ArrayVec::from(self.corners())
        } else if self.is_corner(cell) {
            ArrayVec::from_iter([self.center()])
        } else {
            ArrayVec::new()
        }
    }
}
