mod board;
mod cell;
mod color;
mod file;
mod game;
mod kind;
mod layout;
mod palace;
mod pattern;
mod perspective;
mod piece;
mod player;
mod rank;
mod state;

pub use board::*;
pub use cell::*;
pub use color::*;
pub use file::*;
pub use game::*;
pub use kind::*;
pub use layout::*;
pub use palace::*;
pub use pattern::*;
pub use perspective::*;
pub use piece::*;
pub use player::*;
pub use rank::*;
pub use state::*;
