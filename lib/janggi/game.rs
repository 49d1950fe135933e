use crate::janggi::{Board, Cell, Color, GameState, InvalidSetup, Kind, Moves};
use crate::janggi::{ParseCellError, Piece, PieceId, Player};
use derive_more::{Display, Error, From};
use proptest::sample::{Selector, SelectorStrategy};
use proptest::{prelude::*, strategy::Map};
use std::collections::BTreeSet;
use std::ops::{Deref, Range};
use tracing::{debug, info, instrument};

/// The reason why a move was rejected.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum MoveError {
    #[display(fmt = "invalid coordinates")]
    InvalidCell(ParseCellError),
    #[display(fmt = "the game is over, {}", _0)]
    #[from(ignore)]
    GameOver(#[error(not(source))] GameState),
    #[display(fmt = "can't pass the turn while in check")]
    #[from(ignore)]
    PassInCheck,
    #[display(fmt = "no piece on `{}`", _0)]
    #[from(ignore)]
    EmptySource(#[error(not(source))] Cell),
    #[display(fmt = "`{}` belongs to the opponent", _0)]
    #[from(ignore)]
    OpponentPiece(#[error(not(source))] PieceId),
    #[display(fmt = "`{}` can't move to `{}`", piece, to)]
    #[from(ignore)]
    IllegalDestination { piece: PieceId, to: Cell },
    #[display(fmt = "moving `{}` leaves the general in check", _0)]
    #[from(ignore)]
    SelfCheck(#[error(not(source))] PieceId),
}

/// What it takes to take back a move.
#[derive(Debug)]
struct Undo {
    from: Cell,
    to: Cell,
    captured: Option<PieceId>,
}

/// A tentatively played move, taken back when dropped unless committed.
struct Speculation<'a> {
    game: &'a mut Game,
    undo: Option<Undo>,
}

impl Speculation<'_> {
    fn commit(mut self) {
        self.undo = None;
    }
}

impl Deref for Speculation<'_> {
    type Target = Game;

    fn deref(&self) -> &Game {
        &*self.game
    }
}

impl Drop for Speculation<'_> {
    fn drop(&mut self) {
        if let Some(undo) = self.undo.take() {
            self.game.revert(undo);
        }
    }
}

/// A game of Janggi.
///
/// Every mutation goes through [`Game::play`], which only accepts legal moves,
/// so a game is always in a reachable state.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Game {
    board: Board,
    players: [Player; 2],
    turn: Color,
    turns: u32,
    state: GameState,
}

impl Default for Game {
    /// A game in the opening layout with blue to move.
    fn default() -> Self {
        Game::from_board(Board::default(), Color::Blue)
    }
}

impl Arbitrary for Game {
    type Parameters = ();
    type Strategy = Map<(Range<usize>, SelectorStrategy), fn((usize, Selector)) -> Game>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (0..64, any::<Selector>()).prop_map(|(moves, selector)| {
            let mut game = Game::default();

            for _ in 0..moves {
                let mut candidates: Vec<_> = game.moves().collect();

                loop {
                    match selector.try_select(candidates.iter().copied()) {
                        None => return game,
                        Some(m) if game.play(m.0, m.1).is_ok() => break,
                        Some(m) => candidates.retain(|&c| c != m),
                    }
                }

                if game.state().is_finished() {
                    break;
                }
            }

            game
        })
    }
}

impl Game {
    /// Starts a game from an arbitrary placement of pieces.
    ///
    /// The side not to move can't be in check. If the side to move is
    /// checkmated, the game starts finished.
    #[instrument(level = "debug", skip(pieces), err)]
    pub fn with_setup<I>(turn: Color, pieces: I) -> Result<Self, InvalidSetup>
    where
        I: IntoIterator<Item = (PieceId, Cell)>,
    {
        let mut game = Game::from_board(Board::new(pieces)?, turn);

        if game.is_in_check(!turn) {
            return Err(InvalidSetup::OppositeCheck(!turn));
        }

        if game.is_in_check(turn) && game.is_checkmate(turn) {
            game.state = GameState::won_by(!turn);
            info!(state = %game.state, "game starts finished");
        }

        Ok(game)
    }

    fn from_board(board: Board, turn: Color) -> Self {
        let players = [Player::new(Color::Red, &board), Player::new(Color::Blue, &board)];

        let mut game = Game {
            board,
            players,
            turn,
            turns: 1,
            state: GameState::default(),
        };

        game.refresh();
        game
    }

    /// The [`Board`].
    #[inline(always)]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The [`Player`] of the given [`Color`].
    #[inline(always)]
    pub fn player(&self, c: Color) -> &Player {
        &self.players[c as usize]
    }

    /// The [`Player`] to move.
    #[inline(always)]
    pub fn current_player(&self) -> &Player {
        self.player(self.turn)
    }

    /// The side to move.
    #[inline(always)]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// The current turn number.
    ///
    /// It starts at 1 and is incremented after every move or pass.
    #[inline(always)]
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Whether the game is still being played.
    #[inline(always)]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Whether the general of the given [`Color`] is in check.
    pub fn is_in_check(&self, c: Color) -> bool {
        self.player(!c).pieces_checking().next().is_some()
    }

    /// The moves available to the piece on the given [`Cell`], if any.
    ///
    /// Moves that leave the mover's general in check are included,
    /// see [`Game::legal_destinations`].
    pub fn legal_moves(&self, cell: Cell) -> Option<&Moves> {
        let id = self.board[cell]?;
        Some(self.player(id.color()).piece(id)?.legal_moves())
    }

    /// An iterator over the moves available to the side to move.
    ///
    /// Moves that leave the mover's general in check are included.
    pub fn moves(&self) -> impl Iterator<Item = (Cell, Cell)> + '_ {
        self.current_player()
            .pieces()
            .flat_map(|p| p.legal_moves().keys().map(move |&to| (p.cell(), to)))
    }

    /// The destinations the piece on the given [`Cell`] can move to without
    /// leaving its general in check.
    ///
    /// Empty unless the piece belongs to the side to move.
    pub fn legal_destinations(&mut self, cell: Cell) -> Vec<Cell> {
        let Some(id) = self.board[cell] else {
            return Vec::new();
        };

        let candidates: Vec<Cell> = self
            .legal_moves(cell)
            .into_iter()
            .flat_map(Moves::keys)
            .copied()
            .collect();

        candidates
            .into_iter()
            .filter(|&to| {
                self.simulate(cell, to, |g| !g.is_in_check(id.color()))
                    .unwrap_or(false)
            })
            .collect()
    }

    /// Plays a move tentatively, inspects the resulting game, and takes the move back.
    ///
    /// Only the side to move may be simulated, and the move must be legal for the piece.
    pub fn simulate<T, F>(&mut self, from: Cell, to: Cell, f: F) -> Result<T, MoveError>
    where
        F: FnOnce(&Game) -> T,
    {
        let id = self.board[from].ok_or(MoveError::EmptySource(from))?;

        if id.color() != self.turn {
            return Err(MoveError::OpponentPiece(id));
        }

        self.check_destination(id, to)?;
        let speculation = self.speculate(from, to);
        Ok(f(&speculation))
    }

    /// Plays a move given in coordinate notation, e.g. `"e7"` to `"e6"`.
    pub fn make_move(&mut self, from: &str, to: &str) -> Result<(), MoveError> {
        self.play(from.parse()?, to.parse()?)
    }

    /// Plays a move if legal.
    ///
    /// Moving a piece onto its own cell passes the turn.
    #[instrument(level = "debug", skip(self), err)]
    pub fn play(&mut self, from: Cell, to: Cell) -> Result<(), MoveError> {
        if self.state.is_finished() {
            return Err(MoveError::GameOver(self.state));
        } else if from == to {
            return self.pass();
        }

        let id = self.board[from].ok_or(MoveError::EmptySource(from))?;

        if id.color() != self.turn {
            return Err(MoveError::OpponentPiece(id));
        }

        self.check_destination(id, to)?;

        let speculation = self.speculate(from, to);
        if speculation.is_in_check(id.color()) {
            debug!(piece = %id, %from, %to, "move reverted");
            return Err(MoveError::SelfCheck(id));
        }

        speculation.commit();

        let opponent = !self.turn;
        if self.is_in_check(opponent) && self.is_checkmate(opponent) {
            self.state = GameState::won_by(self.turn);
            info!(state = %self.state, turns = self.turns, "checkmate");
        }

        self.turn = opponent;
        self.turns += 1;

        Ok(())
    }

    /// Passes the turn, unless in check.
    pub fn pass(&mut self) -> Result<(), MoveError> {
        if self.state.is_finished() {
            return Err(MoveError::GameOver(self.state));
        } else if self.is_in_check(self.turn) {
            return Err(MoveError::PassInCheck);
        }

        debug!(side = %self.turn, "turn passed");
        self.turn = !self.turn;
        self.turns += 1;

        Ok(())
    }

    fn check_destination(&self, id: PieceId, to: Cell) -> Result<(), MoveError> {
        match self.player(id.color()).piece(id) {
            Some(p) if p.legal_moves().contains_key(&to) => Ok(()),
            _ => Err(MoveError::IllegalDestination { piece: id, to }),
        }
    }

    fn speculate(&mut self, from: Cell, to: Cell) -> Speculation<'_> {
        let undo = self.apply(from, to);
        Speculation {
            game: self,
            undo: Some(undo),
        }
    }

    fn apply(&mut self, from: Cell, to: Cell) -> Undo {
        let captured = self.board.move_piece(from, to);

        if let Some(c) = captured {
            self.players[c.color() as usize].remove_piece(c);
        }

        if let Some(id) = self.board[to] {
            if let Some(p) = self.players[id.color() as usize].piece_mut(id) {
                p.relocate(to);
            }
        }

        self.refresh();
        Undo { from, to, captured }
    }

    fn revert(&mut self, undo: Undo) {
        let Undo { from, to, captured } = undo;
        self.board.move_piece(to, from);

        if let Some(id) = self.board[from] {
            if let Some(p) = self.players[id.color() as usize].piece_mut(id) {
                p.relocate(from);
            }
        }

        if let Some(c) = captured {
            self.board.place(c, to);
            self.players[c.color() as usize].add_piece(Piece::new(c, to));
        }

        self.refresh();
    }

    fn refresh(&mut self) {
        for p in &mut self.players {
            p.update_pieces(&self.board);
        }

        let [red, blue] = &mut self.players;
        red.update_general(&self.board, blue.allowed_palace_destinations());
        blue.update_general(&self.board, red.allowed_palace_destinations());
    }

    /// Whether the given side, assumed to be in check, is checkmated.
    ///
    /// Mate is declared unless the general can step away, the only checker
    /// can be captured, the screen of a lone checking cannon can move, or some
    /// piece can block every non-soldier checker.
    fn is_checkmate(&self, side: Color) -> bool {
        let defender = self.player(side);

        if defender.general().map_or(false, |g| !g.legal_moves().is_empty()) {
            debug!(%side, "general can escape");
            return false;
        }

        let checkers = Vec::from_iter(self.player(!side).pieces_checking());

        if let &[checker] = checkers.as_slice() {
            if defender.allowed_destinations().contains(&checker.cell()) {
                debug!(%side, checker = %checker.id(), "checker can be captured");
                return false;
            }

            // Moving the screen away isn't verified to lift the check.
            if checker.kind() == Kind::Cannon && self.can_move_screen(defender, checker) {
                debug!(%side, checker = %checker.id(), "cannon screen can move");
                return false;
            }
        }

        let blocks = checkers
            .iter()
            .filter(|p| p.kind() != Kind::Soldier)
            .filter_map(|p| p.path_to_general())
            .map(|path| BTreeSet::from_iter(path.iter().copied()))
            .reduce(|a, b| &a & &b)
            .unwrap_or_default();

        if !blocks.is_disjoint(defender.allowed_destinations()) {
            debug!(%side, "check can be blocked");
            return false;
        }

        true
    }

    fn can_move_screen(&self, defender: &Player, cannon: &Piece) -> bool {
        cannon
            .path_to_general()
            .into_iter()
            .flatten()
            .filter_map(|&c| defender.piece(self.board[c]?))
            .any(|p| !p.legal_moves().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::janggi::{ParseFileError, Palace};
    use test_strategy::proptest;

    fn red(kind: Kind, index: u8) -> PieceId {
        PieceId::new(Color::Red, kind, index)
    }

    fn blue(kind: Kind, index: u8) -> PieceId {
        PieceId::new(Color::Blue, kind, index)
    }

    #[test]
    fn game_starts_in_the_opening_layout() {
        let g = Game::default();
        assert_eq!(g.board(), &Board::default());
        assert_eq!(g.board().cells().count(), 90);
        assert_eq!(g.board()[Cell::A1], Some(red(Kind::Chariot, 1)));
        assert_eq!(g.board()[Cell::E2], Some(red(Kind::General, 1)));
        assert_eq!(g.board()[Cell::E9], Some(blue(Kind::General, 1)));
        assert_eq!(g.board()[Cell::A10], Some(blue(Kind::Chariot, 1)));
        assert_eq!(g.turn(), Color::Blue);
        assert_eq!(g.turns(), 1);
        assert_eq!(g.state(), GameState::Unfinished);
        assert!(!g.is_in_check(Color::Red));
        assert!(!g.is_in_check(Color::Blue));
    }

    #[test]
    fn soldiers_advance_in_turn() {
        let mut g = Game::default();
        assert_eq!(g.make_move("e7", "e6"), Ok(()));
        assert_eq!(g.turn(), Color::Red);
        assert_eq!(g.make_move("e4", "e5"), Ok(()));
        assert_eq!(g.turn(), Color::Blue);
        assert_eq!(g.turns(), 3);
        assert_eq!(g.board()[Cell::E6], Some(blue(Kind::Soldier, 3)));
        assert_eq!(g.board()[Cell::E5], Some(red(Kind::Soldier, 3)));
    }

    #[test]
    fn moving_the_opponents_piece_is_rejected() {
        let mut g = Game::default();
        assert_eq!(
            g.make_move("e4", "e5"),
            Err(MoveError::OpponentPiece(red(Kind::Soldier, 3)))
        );
        assert_eq!(g, Game::default());
    }

    #[test]
    fn moving_from_an_empty_cell_is_rejected() {
        let mut g = Game::default();
        assert_eq!(g.make_move("e5", "e6"), Err(MoveError::EmptySource(Cell::E5)));
    }

    #[test]
    fn malformed_coordinates_are_rejected() {
        let mut g = Game::default();
        assert_eq!(
            g.make_move("z7", "e6"),
            Err(MoveError::InvalidCell(ParseCellError::InvalidFile(ParseFileError)))
        );
        assert_eq!(g, Game::default());
    }

    #[test]
    fn moving_to_an_unreachable_cell_is_rejected() {
        let mut g = Game::default();
        assert_eq!(
            g.make_move("a10", "b9"),
            Err(MoveError::IllegalDestination {
                piece: blue(Kind::Chariot, 1),
                to: Cell::B9
            })
        );
    }

    #[test]
    fn passing_advances_the_turn() {
        let mut g = Game::default();
        assert_eq!(g.make_move("e9", "e9"), Ok(()));
        assert_eq!(g.turn(), Color::Red);
        assert_eq!(g.turns(), 2);
        assert_eq!(g.board(), &Board::default());
    }

    #[test]
    fn moving_into_self_check_is_rejected() {
        let mut g = Game::with_setup(
            Color::Red,
            [
                (red(Kind::General, 1), Cell::E2),
                (red(Kind::Chariot, 1), Cell::E4),
                (blue(Kind::Chariot, 1), Cell::E7),
                (blue(Kind::General, 1), Cell::D9),
            ],
        )
        .unwrap();

        let before = g.clone();
        assert_eq!(
            g.play(Cell::E4, Cell::A4),
            Err(MoveError::SelfCheck(red(Kind::Chariot, 1)))
        );
        assert_eq!(g, before);
        assert_eq!(g.play(Cell::E4, Cell::E7), Ok(()));
    }

    #[test]
    fn capturing_the_sole_checker_clears_check() {
        let mut g = Game::with_setup(
            Color::Red,
            [
                (red(Kind::General, 1), Cell::E2),
                (red(Kind::Chariot, 1), Cell::A5),
                (blue(Kind::Chariot, 1), Cell::E5),
                (blue(Kind::General, 1), Cell::D10),
            ],
        )
        .unwrap();

        assert!(g.is_in_check(Color::Red));
        assert_eq!(g.play(Cell::E2, Cell::E2), Err(MoveError::PassInCheck));

        assert_eq!(g.play(Cell::A5, Cell::E5), Ok(()));
        assert!(!g.is_in_check(Color::Red));
        assert_eq!(g.player(Color::Blue).pieces().len(), 1);
        assert_eq!(g.state(), GameState::Unfinished);
    }

    fn mating_setup() -> Vec<(PieceId, Cell)> {
        vec![
            (red(Kind::General, 1), Cell::E2),
            (red(Kind::Chariot, 1), Cell::B1),
            (red(Kind::Chariot, 2), Cell::A9),
            (blue(Kind::General, 1), Cell::D10),
            (blue(Kind::Soldier, 1), Cell::I5),
        ]
    }

    #[test]
    fn checkmate_ends_the_game() {
        let mut g = Game::with_setup(Color::Red, mating_setup()).unwrap();
        assert_eq!(g.play(Cell::B1, Cell::B10), Ok(()));
        assert!(g.is_in_check(Color::Blue));
        assert_eq!(g.state(), GameState::RedWon);
        assert_eq!(
            g.play(Cell::I5, Cell::I4),
            Err(MoveError::GameOver(GameState::RedWon))
        );
    }

    #[test]
    fn check_that_can_be_blocked_is_not_mate() {
        let mut pieces = mating_setup();
        pieces.push((blue(Kind::Chariot, 1), Cell::C1));

        let mut g = Game::with_setup(Color::Red, pieces).unwrap();
        assert_eq!(g.play(Cell::B1, Cell::B10), Ok(()));
        assert!(g.is_in_check(Color::Blue));
        assert_eq!(g.state(), GameState::Unfinished);
        assert_eq!(g.legal_destinations(Cell::C1), vec![Cell::C10]);
    }

    #[test]
    fn check_that_can_be_answered_by_a_capture_is_not_mate() {
        let mut pieces = mating_setup();
        pieces.push((blue(Kind::Horse, 1), Cell::C8));

        let mut g = Game::with_setup(Color::Red, pieces).unwrap();
        assert_eq!(g.play(Cell::B1, Cell::B10), Ok(()));
        assert!(g.is_in_check(Color::Blue));
        assert_eq!(g.state(), GameState::Unfinished);
        assert_eq!(g.legal_destinations(Cell::C8), vec![Cell::B10]);
    }

    #[test]
    fn check_the_general_can_step_out_of_is_not_mate() {
        let mut pieces = mating_setup();
        pieces.retain(|&(id, _)| id != red(Kind::Chariot, 2));

        let mut g = Game::with_setup(Color::Red, pieces).unwrap();
        assert_eq!(g.play(Cell::B1, Cell::B10), Ok(()));
        assert!(g.is_in_check(Color::Blue));
        assert_eq!(g.state(), GameState::Unfinished);
        assert_eq!(g.legal_destinations(Cell::D10), vec![Cell::D9, Cell::E9]);
    }

    fn double_check_setup() -> Vec<(PieceId, Cell)> {
        vec![
            (red(Kind::General, 1), Cell::E2),
            (red(Kind::Chariot, 1), Cell::B10),
            (red(Kind::Chariot, 2), Cell::A9),
            (red(Kind::Soldier, 1), Cell::E10),
            (blue(Kind::General, 1), Cell::D10),
            (blue(Kind::Soldier, 1), Cell::I5),
        ]
    }

    #[test]
    fn capturing_one_of_two_checkers_is_not_enough() {
        let mut pieces = double_check_setup();
        pieces.push((blue(Kind::Guard, 1), Cell::F10));

        let g = Game::with_setup(Color::Blue, pieces).unwrap();
        assert_eq!(g.player(Color::Red).pieces_checking().count(), 2);
        assert!(g.player(Color::Blue).allowed_destinations().contains(&Cell::E10));
        assert_eq!(g.state(), GameState::RedWon);
    }

    #[test]
    fn soldiers_are_ignored_when_looking_for_blocks() {
        let mut pieces = double_check_setup();
        pieces.push((blue(Kind::Chariot, 1), Cell::C1));

        let g = Game::with_setup(Color::Blue, pieces).unwrap();
        assert_eq!(g.player(Color::Red).pieces_checking().count(), 2);
        assert_eq!(g.state(), GameState::Unfinished);
    }

    #[test]
    fn game_may_start_checkmated() {
        let mut pieces = mating_setup();
        pieces[1].1 = Cell::B10;
        let g = Game::with_setup(Color::Blue, pieces).unwrap();
        assert_eq!(g.state(), GameState::RedWon);
    }

    #[test]
    fn side_not_to_move_cannot_start_in_check() {
        let mut pieces = mating_setup();
        pieces[1].1 = Cell::B10;
        assert_eq!(
            Game::with_setup(Color::Red, pieces),
            Err(InvalidSetup::OppositeCheck(Color::Blue))
        );
    }

    #[test]
    fn screen_of_a_checking_cannon_is_assumed_to_escape() {
        let mut g = Game::with_setup(
            Color::Red,
            [
                (red(Kind::General, 1), Cell::E2),
                (red(Kind::Soldier, 1), Cell::C5),
                (red(Kind::Cannon, 1), Cell::A5),
                (blue(Kind::General, 1), Cell::E10),
                (blue(Kind::Guard, 1), Cell::D10),
                (blue(Kind::Guard, 2), Cell::F10),
                (blue(Kind::Soldier, 1), Cell::E9),
                (blue(Kind::Horse, 1), Cell::D9),
                (blue(Kind::Horse, 2), Cell::F9),
                (blue(Kind::Elephant, 1), Cell::D8),
                (blue(Kind::Elephant, 2), Cell::F8),
            ],
        )
        .unwrap();

        assert_eq!(g.play(Cell::A5, Cell::E5), Ok(()));
        assert!(g.is_in_check(Color::Blue));
        assert_eq!(g.state(), GameState::Unfinished);

        let blues = Vec::from_iter(g.player(Color::Blue).pieces().map(Piece::cell));
        for cell in blues {
            assert_eq!(g.legal_destinations(cell), Vec::<Cell>::new());
        }
    }

    #[test]
    fn setup_rejects_invalid_placements() {
        assert_eq!(
            Game::with_setup(Color::Red, [(red(Kind::General, 1), Cell::E2)]),
            Err(InvalidSetup::MissingGeneral(Color::Blue))
        );
    }

    #[test]
    fn legal_destinations_of_an_empty_cell_is_empty() {
        assert!(Game::default().legal_destinations(Cell::E5).is_empty());
    }

    #[test]
    fn legal_destinations_of_an_opponent_piece_is_empty() {
        let mut g = Game::default();
        assert!(g.legal_moves(Cell::E4).is_some());
        assert!(g.legal_destinations(Cell::E4).is_empty());
    }

    #[test]
    fn simulating_an_opponent_move_fails() {
        let mut g = Game::default();
        let before = g.clone();
        let id = g.board()[Cell::E4].unwrap();

        assert_eq!(
            g.simulate(Cell::E4, Cell::E5, |_| ()),
            Err(MoveError::OpponentPiece(id))
        );

        assert_eq!(g, before);
    }

    #[test]
    fn legal_moves_of_the_opening() {
        let g = Game::default();
        let moves = g.legal_moves(Cell::E7).unwrap();
        assert_eq!(Vec::from_iter(moves.keys().copied()), vec![Cell::E6, Cell::D7, Cell::F7]);
        assert_eq!(g.legal_moves(Cell::E5), None);
    }

    #[proptest]
    fn board_always_holds_one_general_per_side(g: Game, c: Color) {
        let general = g.board().general(c);
        assert_eq!(g.board()[general].map(|p| p.kind()), Some(Kind::General));
        assert!(Palace::of(c).contains(general));
        assert_eq!(
            g.board().iter().filter(|(p, _)| p.kind() == Kind::General && p.color() == c).count(),
            1
        );
    }

    #[proptest]
    fn players_mirror_the_board(g: Game) {
        for (id, cell) in g.board().iter() {
            assert_eq!(g.player(id.color()).piece(id).map(Piece::cell), Some(cell));
        }

        assert_eq!(
            g.player(Color::Red).pieces().len() + g.player(Color::Blue).pieces().len(),
            g.board().iter().count()
        );
    }

    #[proptest]
    fn side_to_move_never_leaves_the_opponent_in_check(g: Game) {
        if !g.state().is_finished() {
            assert!(!g.is_in_check(!g.turn()));
        }
    }

    #[proptest]
    fn moves_are_listed_for_the_side_to_move(g: Game) {
        for (from, _) in g.moves() {
            assert_eq!(g.board()[from].map(|p| p.color()), Some(g.turn()));
        }
    }

    #[proptest]
    fn simulating_a_move_restores_the_game(mut g: Game, selector: Selector) {
        let moves = Vec::from_iter(g.moves());
        if let Some((from, to)) = selector.try_select(moves) {
            let before = g.clone();
            let vacated = g.simulate(from, to, |s| s.board()[from]).unwrap();
            assert_eq!(vacated, None);
            assert_eq!(g, before);
        }
    }

    #[proptest]
    fn legal_destinations_is_idempotent(mut g: Game, c: Cell) {
        let first = g.legal_destinations(c);
        assert_eq!(g.legal_destinations(c), first);
    }

    #[proptest]
    fn legal_destinations_are_playable(
        #[filter(!#g.state().is_finished())] mut g: Game,
        selector: Selector,
    ) {
        let cells = Vec::from_iter(g.current_player().pieces().map(Piece::cell));
        let from = selector.select(cells);
        for to in g.legal_destinations(from) {
            assert_eq!(g.clone().play(from, to), Ok(()));
        }
    }

    #[proptest]
    fn rejected_moves_leave_the_game_unchanged(mut g: Game, from: Cell, to: Cell) {
        let before = g.clone();
        if g.play(from, to).is_err() {
            assert_eq!(g, before);
        }
    }
}
