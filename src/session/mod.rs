//! Match sessions: configuration, turn sequencing, and the state machine.

pub mod config;
pub mod machine;
pub mod record;
pub mod turns;

pub use config::{SessionConfig, SessionConfigBuilder};
pub use machine::{MatchOutcome, MatchSession, MatchState};
pub use record::{MoveHistory, MoveRecord};
pub use turns::TurnSequencer;
