use anyhow::{bail, Context, Error as Anyhow};
use clap::Parser;
use lib::janggi::{Cell, Game};
use tracing::{info, instrument};

/// Replays a sequence of moves from the opening and prints the resulting board.
#[derive(Debug, Default, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Replay {
    /// List the cells the piece standing on this cell can move to, if it is its turn.
    #[clap(long)]
    highlight: Option<Cell>,

    /// Coordinates consumed in pairs, each pair being the origin and destination of a move.
    ///
    /// Moving a piece onto its own cell passes the turn.
    cells: Vec<Cell>,
}

impl Replay {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        if self.cells.len() % 2 != 0 {
            bail!("expected an even number of coordinates, got {}", self.cells.len());
        }

        let mut game = Game::default();

        for (n, m) in self.cells.chunks_exact(2).enumerate() {
            game.play(m[0], m[1])
                .with_context(|| format!("move #{} `{}{}` was rejected", n + 1, m[0], m[1]))?;
        }

        info!(turn = %game.turn(), turns = game.turns(), state = %game.state());

        print!("{}", game.board());
        println!("{}", game.state());

        if let Some(cell) = self.highlight {
            let destinations: Vec<_> = game
                .legal_destinations(cell)
                .into_iter()
                .map(|c| c.to_string())
                .collect();

            println!("{}: {}", cell, destinations.join(" "));
        }

        Ok(())
    }
}
