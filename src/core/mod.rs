//! Core types: marks, players, RNG.
//!
//! These are the leaf building blocks the board and session layers compose.

pub mod mark;
pub mod player;
pub mod rng;

pub use mark::Mark;
pub use player::{Player, PlayerId, PlayerKind};
pub use rng::MatchRng;
