//! Two-player hot-seat naval combat with save/resume.
//!
//! The engine (boards, placement validation, combat resolution, the turn
//! state machine, persistence) is terminal-free: it consumes input lines
//! and returns typed replies. The interactive driver in the binary owns
//! all prompting and printing.

mod bitgrid;
mod board;
mod combat;
mod config;
mod coord;
mod game;
mod logging;
mod placement;
mod player;
pub mod render;
mod save;
mod ship;

pub use bitgrid::{BitGrid, BitGridError};
pub use board::*;
pub use combat::*;
pub use config::*;
pub use coord::*;
pub use game::*;
pub use logging::init_logging;
pub use placement::*;
pub use player::*;
pub use save::*;
pub use ship::*;
