use crate::janggi::{Board, Cell, Color, Kind, Piece, PieceId};
use std::collections::{BTreeMap, BTreeSet};

/// The pieces of one [`Color`] and the cells they reach.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Player {
    color: Color,
    pieces: BTreeMap<PieceId, Piece>,
    allowed: BTreeSet<Cell>,
    palace: BTreeSet<Cell>,
    checking: Vec<PieceId>,
}

impl Player {
    /// Collects the pieces of the given [`Color`] from the [`Board`].
    ///
    /// Their moves are unknown until [`Player::update_pieces`] is called.
    pub fn new(color: Color, board: &Board) -> Self {
        Player {
            color,
            pieces: board
                .iter()
                .filter(|(id, _)| id.color() == color)
                .map(|(id, cell)| (id, Piece::new(id, cell)))
                .collect(),
            allowed: BTreeSet::new(),
            palace: BTreeSet::new(),
            checking: Vec::new(),
        }
    }

    /// This player's [`Color`].
    #[inline(always)]
    pub fn color(&self) -> Color {
        self.color
    }

    /// An iterator over this player's pieces still on the board.
    #[inline(always)]
    pub fn pieces(&self) -> impl ExactSizeIterator<Item = &Piece> {
        self.pieces.values()
    }

    /// The piece with the given identity, unless captured.
    #[inline(always)]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(&id)
    }

    #[inline(always)]
    pub(crate) fn piece_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.pieces.get_mut(&id)
    }

    /// This player's general.
    pub fn general(&self) -> Option<&Piece> {
        self.pieces().find(|p| p.kind() == Kind::General)
    }

    /// Every cell some piece of this player can move to.
    #[inline(always)]
    pub fn allowed_destinations(&self) -> &BTreeSet<Cell> {
        &self.allowed
    }

    /// Every cell of the opponent's palace this player attacks.
    #[inline(always)]
    pub fn allowed_palace_destinations(&self) -> &BTreeSet<Cell> {
        &self.palace
    }

    /// The pieces currently checking the opponent's general.
    pub fn pieces_checking(&self) -> impl Iterator<Item = &Piece> {
        self.checking.iter().filter_map(|&id| self.piece(id))
    }

    /// Returns a piece to this player.
    pub fn add_piece(&mut self, piece: Piece) {
        debug_assert_eq!(piece.color(), self.color);
        self.pieces.insert(piece.id(), piece);
    }

    /// Takes a piece away from this player.
    pub fn remove_piece(&mut self, id: PieceId) -> Option<Piece> {
        self.pieces.remove(&id)
    }

    /// Recomputes the moves of every piece from the occupancy of the [`Board`].
    pub fn update_pieces(&mut self, board: &Board) {
        let general = board.general(!self.color);

        self.palace.clear();
        self.checking.clear();

        for p in self.pieces.values_mut() {
            p.update_allowed_moves(board);
            p.update_palace_destinations(board);

            self.palace.extend(p.palace_destinations());
            if p.is_checking(general) {
                self.checking.push(p.id());
            }
        }

        self.refresh_allowed_destinations();
    }

    /// Keeps the general from stepping onto cells the opponent attacks.
    pub fn update_general(&mut self, board: &Board, threats: &BTreeSet<Cell>) {
        if let Some(id) = self.general().map(Piece::id) {
            if let Some(g) = self.pieces.get_mut(&id) {
                g.update_guarded_moves(board, threats);
            }
        }

        self.refresh_allowed_destinations();
    }

    fn refresh_allowed_destinations(&mut self) {
        self.allowed = self
            .pieces
            .values()
            .flat_map(|p| p.legal_moves().keys())
            .copied()
            .collect();
    }
}
