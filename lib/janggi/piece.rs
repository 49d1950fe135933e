use crate::janggi::{pattern, Blocking, Board, Cell, Color, Kind, Moves, Palace, Path};
use derive_more::Display;
use std::collections::BTreeSet;

/// The identity of a Janggi piece.
///
/// Pieces of the same [`Color`] and [`Kind`] are told apart by an index, counted from 1.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{}{}{}", "color.letter()", kind, index)]
pub struct PieceId {
    color: Color,
    kind: Kind,
    #[cfg_attr(test, strategy(1u8..=5))]
    index: u8,
}

impl PieceId {
    /// Constructs [`PieceId`] from its parts.
    #[inline(always)]
    pub fn new(color: Color, kind: Kind, index: u8) -> Self {
        PieceId { color, kind, index }
    }

    /// This piece's [`Color`].
    #[inline(always)]
    pub fn color(&self) -> Color {
        self.color
    }

    /// This piece's [`Kind`].
    #[inline(always)]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// This piece's index among pieces of the same color and kind.
    #[inline(always)]
    pub fn index(&self) -> u8 {
        self.index
    }
}

/// A piece on the board, together with the moves it can currently make.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Piece {
    id: PieceId,
    cell: Cell,
    pattern: Moves,
    legal: Moves,
    threats: BTreeSet<Cell>,
    path_to_general: Option<Path>,
}

impl Piece {
    /// Places a piece on a [`Cell`].
    ///
    /// Its legal moves are unknown until [`Piece::update_allowed_moves`] is called.
    pub fn new(id: PieceId, cell: Cell) -> Self {
        Piece {
            id,
            cell,
            pattern: pattern(id.kind(), id.color(), cell),
            legal: Moves::new(),
            threats: BTreeSet::new(),
            path_to_general: None,
        }
    }

    /// This piece's identity.
    #[inline(always)]
    pub fn id(&self) -> PieceId {
        self.id
    }

    /// This piece's [`Color`].
    #[inline(always)]
    pub fn color(&self) -> Color {
        self.id.color()
    }

    /// This piece's [`Kind`].
    #[inline(always)]
    pub fn kind(&self) -> Kind {
        self.id.kind()
    }

    /// The [`Cell`] this piece stands on.
    #[inline(always)]
    pub fn cell(&self) -> Cell {
        self.cell
    }

    /// Moves this piece could make on an empty board.
    #[inline(always)]
    pub fn pattern_moves(&self) -> &Moves {
        &self.pattern
    }

    /// Moves this piece can make given the occupancy of the board.
    ///
    /// This doesn't account for whether the move would leave its general in check.
    #[inline(always)]
    pub fn legal_moves(&self) -> &Moves {
        &self.legal
    }

    /// Cells of the opponent's palace this piece attacks.
    #[inline(always)]
    pub fn palace_destinations(&self) -> &BTreeSet<Cell> {
        &self.threats
    }

    /// The cells between this piece and the opponent's general, if checking it.
    #[inline(always)]
    pub fn path_to_general(&self) -> Option<&Path> {
        self.path_to_general.as_ref()
    }

    /// Moves this piece to another [`Cell`].
    pub(crate) fn relocate(&mut self, cell: Cell) {
        self.cell = cell;
        self.pattern = pattern(self.kind(), self.color(), cell);
    }

    /// Recomputes the legal moves from the occupancy of the [`Board`].
    pub fn update_allowed_moves(&mut self, board: &Board) {
        self.legal = self
            .pattern
            .iter()
            .filter(|&(&to, path)| self.can_reach(board, to, path))
            .map(|(&to, path)| (to, path.clone()))
            .collect();
    }

    /// Recomputes which cells of the opponent's palace this piece attacks.
    ///
    /// The opponent's general is seen through, so it can neither shield itself
    /// nor serve as a cannon's screen, and defended pieces count as attacked.
    pub fn update_palace_destinations(&mut self, board: &Board) {
        self.threats.clear();

        if self.kind().is_confined() {
            return;
        }

        let palace = Palace::of(!self.color());
        let general = board.general(!self.color());

        self.threats = self
            .pattern
            .iter()
            .filter(|&(&to, path)| palace.contains(to) && self.is_open(board, path, Some(general)))
            .map(|(&to, _)| to)
            .collect();
    }

    /// Restricts the moves of a general to those that don't walk into an attack.
    pub(crate) fn update_guarded_moves(&mut self, board: &Board, threats: &BTreeSet<Cell>) {
        self.legal = self
            .pattern
            .iter()
            .filter(|&(to, _)| !threats.contains(to))
            .filter(|&(&to, _)| board[to].map_or(true, |p| p.color() != self.color()))
            .map(|(&to, path)| (to, path.clone()))
            .collect();
    }

    /// Whether this piece can capture the general standing on the given [`Cell`].
    ///
    /// If so, the path of that capture is remembered as [`Piece::path_to_general`].
    pub fn is_checking(&mut self, general: Cell) -> bool {
        self.path_to_general = self.legal.get(&general).cloned();
        self.path_to_general.is_some()
    }

    fn can_reach(&self, board: &Board, to: Cell, path: &Path) -> bool {
        match board[to] {
            Some(p) if p.color() == self.color() => false,
            Some(p) if self.kind().blocking() == Blocking::Screen && p.kind() == Kind::Cannon => {
                false
            }
            _ => self.is_open(board, path, None),
        }
    }

    fn is_open(&self, board: &Board, path: &Path, transparent: Option<Cell>) -> bool {
        let mut occupants = path
            .iter()
            .filter(|&&c| Some(c) != transparent)
            .filter_map(|&c| board[c]);

        match self.kind().blocking() {
            Blocking::Clear => occupants.next().is_none(),
            Blocking::Screen => matches!(
                (occupants.next(), occupants.next()),
                (Some(screen), None) if screen.kind() != Kind::Cannon
            ),
        }
    }
}
