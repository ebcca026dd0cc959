//! Resource catalog.
//!
//! A fixed set of ten resources, each labelled renewable or non-renewable.
//! The engine draws its questions from here.

pub mod data;
pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
