//! # gridworks
//!
//! A generalized N-in-a-row board game rules engine.
//!
//! ## Design Principles
//!
//! 1. **Rules only**: no rendering, no input loop, no process bootstrap.
//!    The presentation layer observes state and submits resolved `(row, col)`
//!    moves; this crate decides legality and terminal conditions.
//!
//! 2. **Generalized win detection**: a win is three-or-more-in-a-row anywhere
//!    on the board - on any row, column, diagonal, or anti-diagonal - not a
//!    full-length line, so boards from 3x3 up to 255x255 play the same game.
//!
//! 3. **Configuration over convention**: board size, the empty sentinel, the
//!    mark pool, and the roster are assembled once per match via
//!    `SessionConfigBuilder` and owned by the session.
//!
//! ## Modules
//!
//! - `core`: marks, players, RNG
//! - `board`: cell storage, bounds-checked mutation, line detection
//! - `session`: configuration, turn sequencing, the match state machine
//! - `host`: process-wide session lifecycle
//! - `error`: failure kinds

pub mod board;
pub mod core;
pub mod error;
pub mod host;
pub mod session;

// Re-export commonly used types
pub use crate::core::{Mark, MatchRng, Player, PlayerId, PlayerKind};

pub use crate::board::{Board, MIN_SIDE, WIN_RUN};

pub use crate::error::GameError;

pub use crate::session::{
    MatchOutcome, MatchSession, MatchState, MoveHistory, MoveRecord, SessionConfig,
    SessionConfigBuilder, TurnSequencer,
};

pub use crate::host::SessionHost;
