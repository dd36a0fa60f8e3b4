//! Core value types: positions, players, walls, RNG.
//!
//! These are the fundamental building blocks shared by the rules engine and
//! the search subsystem. The grid size is always a parameter, never a global.

pub mod player;
pub mod position;
pub mod rng;
pub mod wall;

pub use player::{Player, PlayerMap};
pub use position::{Position, Step};
pub use rng::EngineRng;
pub use wall::{Edge, Orientation, Wall};
