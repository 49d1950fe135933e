use crate::janggi::{Cell, Color, Kind, Perspective, PieceId};

/// Red's half of the opening layout, from red's perspective.
///
/// Blue's pieces are placed on the same cells with ranks flipped.
#[rustfmt::skip]
const OPENING: [(Kind, u8, Cell); 16] = [
    (Kind::Chariot, 1, Cell::A1), (Kind::Elephant, 1, Cell::B1), (Kind::Horse, 1, Cell::C1),
    (Kind::Guard, 1, Cell::D1), (Kind::Guard, 2, Cell::F1),
    (Kind::Elephant, 2, Cell::G1), (Kind::Horse, 2, Cell::H1), (Kind::Chariot, 2, Cell::I1),
    (Kind::General, 1, Cell::E2),
    (Kind::Cannon, 1, Cell::B3), (Kind::Cannon, 2, Cell::H3),
    (Kind::Soldier, 1, Cell::A4), (Kind::Soldier, 2, Cell::C4), (Kind::Soldier, 3, Cell::E4),
    (Kind::Soldier, 4, Cell::G4), (Kind::Soldier, 5, Cell::I4),
];

/// The standard opening layout of both sides.
pub fn opening() -> impl Iterator<Item = (PieceId, Cell)> {
    [Color::Red, Color::Blue].into_iter().flat_map(|c| {
        OPENING
            .into_iter()
            .map(move |(k, i, cell)| (PieceId::new(c, k, i), cell.perspective(c)))
    })
}
