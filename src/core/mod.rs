//! Core game state and logic.

pub mod board;
pub mod config;
pub mod constants;
pub mod engine;
pub mod game_state;
pub mod scheduler;

pub use board::*;
pub use config::*;
pub use constants::*;
pub use engine::*;
pub use game_state::*;
