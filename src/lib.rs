//! Resource Explorer - terminal board game about renewable resources.
//!
//! The player classifies resources as renewable or non-renewable and moves
//! along a 25-cell board with ladders and snakes. This library exposes the
//! catalog, the game engine, and the terminal UI for the binary and tests.

pub mod catalog;
pub mod core;
pub mod input;
pub mod ui;
pub mod utils;

pub use crate::catalog::{Resource, ResourceKind};
pub use crate::core::config::GameConfig;
pub use crate::core::engine::{EngineEvent, GameEngine};
pub use crate::core::game_state::{GameState, GameStatus, Phase};
