use crate::janggi::{Cell, Color, Kind, Palace};
use crate::util::Integer;
use arrayvec::ArrayVec;
use std::collections::BTreeMap;

/// The cells a piece crosses on its way to a destination, in order.
pub type Path = ArrayVec<Cell, 8>;

/// A set of destinations, each with the [`Path`] that leads to it.
pub type Moves = BTreeMap<Cell, Path>;

type Generator = fn(Color, Cell, &mut Moves);

/// Pattern generators indexed by [`Kind`].
const GENERATORS: [Generator; 7] = [
    soldier, cannon, chariot, elephant, horse, confined, confined,
];

const ORTHOGONAL: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// The moves a piece of the given [`Kind`] and [`Color`] could make from a [`Cell`]
/// on an empty board.
pub fn pattern(kind: Kind, color: Color, cell: Cell) -> Moves {
    let mut moves = Moves::new();
    GENERATORS[kind.get() as usize](color, cell, &mut moves);
    moves
}

fn perpendicular((df, _): (i8, i8)) -> [(i8, i8); 2] {
    if df == 0 {
        [(1, 0), (-1, 0)]
    } else {
        [(0, 1), (0, -1)]
    }
}

fn soldier(color: Color, cell: Cell, moves: &mut Moves) {
    let forward = color.forward();
    for (df, dr) in [(0, forward), (1, 0), (-1, 0)] {
        if let Some(to) = cell.offset(df, dr) {
            moves.insert(to, Path::new());
        }
    }

    if let Some(palace) = Palace::containing(cell) {
        for to in palace.diagonal_steps(cell) {
            if (to.rank() - cell.rank()) * forward > 0 {
                moves.insert(to, Path::new());
            }
        }
    }
}

fn confined(color: Color, cell: Cell, moves: &mut Moves) {
    let palace = Palace::of(color);

    for (df, dr) in ORTHOGONAL {
        match cell.offset(df, dr) {
            Some(to) if palace.contains(to) => {
                moves.insert(to, Path::new());
            }

            _ => {}
        }
    }

    for to in palace.diagonal_steps(cell) {
        moves.insert(to, Path::new());
    }
}

fn chariot(_: Color, cell: Cell, moves: &mut Moves) {
    for (df, dr) in ORTHOGONAL {
        let mut path = Path::new();
        let mut next = cell.offset(df, dr);
        while let Some(to) = next {
            moves.insert(to, path.clone());
            next = to.offset(df, dr);
            if next.is_some() {
                path.push(to);
            }
        }
    }

    if let Some(palace) = Palace::containing(cell) {
        for to in palace.diagonal_steps(cell) {
            moves.insert(to, Path::new());

            if let Some(beyond) = palace.opposite(cell).filter(|_| to == palace.center()) {
                moves.insert(beyond, Path::from_iter([to]));
            }
        }
    }
}

fn cannon(_: Color, cell: Cell, moves: &mut Moves) {
    for (df, dr) in ORTHOGONAL {
        let mut path = Path::new();
        let mut next = cell.offset(df, dr);
        while let Some(to) = next {
            if !path.is_empty() {
                moves.insert(to, path.clone());
            }

            next = to.offset(df, dr);
            if next.is_some() {
                path.push(to);
            }
        }
    }

    if let Some(palace) = Palace::containing(cell) {
        if let Some(beyond) = palace.opposite(cell) {
            moves.insert(beyond, Path::from_iter([palace.center()]));
        }
    }
}

fn horse(_: Color, cell: Cell, moves: &mut Moves) {
    for (df, dr) in ORTHOGONAL {
        let Some(step) = cell.offset(df, dr) else {
            continue;
        };

        for (pf, pr) in perpendicular((df, dr)) {
            if let Some(to) = step.offset(df + pf, dr + pr) {
                moves.insert(to, Path::from_iter([step]));
            }
        }
    }
}

fn elephant(_: Color, cell: Cell, moves: &mut Moves) {
    for (df, dr) in ORTHOGONAL {
        let Some(step) = cell.offset(df, dr) else {
            continue;
        };

        for (pf, pr) in perpendicular((df, dr)) {
            let Some(diagonal) = step.offset(df + pf, dr + pr) else {
                continue;
            };

            if let Some(to) = diagonal.offset(df + pf, dr + pr) {
                moves.insert(to, Path::from_iter([step, diagonal]));
            }
        }
    }
}
