//! Match state machine: lifecycle from setup through moves to win or draw.
//!
//! A [`MatchSession`] owns its configuration (board + roster), a turn
//! sequencer, and the move history. All transitions run through the
//! operations here; every mutating operation either fully applies or leaves
//! the session unchanged.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info, trace, warn};

use super::config::SessionConfig;
use super::record::{MoveHistory, MoveRecord};
use super::turns::TurnSequencer;
use crate::board::Board;
use crate::core::{Mark, MatchRng, Player, PlayerId};
use crate::error::GameError;

/// Lifecycle state of a match.
///
/// `Paused` is reserved for suspension and intentionally inert: no operation
/// transitions into or out of it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchState {
    #[default]
    NotStarted,
    InProgress,
    Paused,
    GameOver,
}

/// Terminal result of a match. Absent while the match is undecided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// A single winner.
    Win(PlayerId),
    /// Full board, no winner.
    Draw,
}

impl MatchOutcome {
    /// The winner, if this outcome has one.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            MatchOutcome::Win(id) => Some(*id),
            MatchOutcome::Draw => None,
        }
    }

    /// Check whether a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner() == Some(player)
    }
}

/// One match from setup to its terminal state.
///
/// Construction performs the initial full setup, so a fresh session is always
/// ready for [`MatchSession::start_match`]. Re-running
/// [`MatchSession::setup_match`] resets everything for a rematch - players
/// survive, marks are re-dealt.
#[derive(Clone, Debug)]
pub struct MatchSession {
    config: SessionConfig,
    sequencer: TurnSequencer,
    state: MatchState,
    outcome: Option<MatchOutcome>,
    history: MoveHistory,
    randomize_turn_order: bool,
    rng: MatchRng,
}

impl MatchSession {
    /// Create a session with entropy-seeded turn-order randomization.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self::with_rng(config, MatchRng::from_entropy())
    }

    /// Create a session with a fixed RNG seed, for reproducible matches.
    #[must_use]
    pub fn with_seed(config: SessionConfig, seed: u64) -> Self {
        Self::with_rng(config, MatchRng::new(seed))
    }

    fn with_rng(config: SessionConfig, rng: MatchRng) -> Self {
        let mut session = Self {
            config,
            sequencer: TurnSequencer::new(),
            state: MatchState::NotStarted,
            outcome: None,
            history: MoveHistory::new(),
            randomize_turn_order: true,
            rng,
        };
        session.setup_match();
        session
    }

    /// Choose whether the next [`MatchSession::setup_match`] shuffles the
    /// mark pool before dealing. Defaults to on.
    pub fn set_randomize_turn_order(&mut self, randomize: bool) {
        self.randomize_turn_order = randomize;
    }

    /// Full reset: clear the outcome, board, history, and turn counters, then
    /// re-deal marks and recompute the turn order.
    pub fn setup_match(&mut self) {
        self.state = MatchState::NotStarted;
        self.outcome = None;

        info!(name = %self.config.name(), "setting up match");
        trace!(description = %self.config.description(), "match description");

        trace!("resetting board");
        self.config.board_mut().reset();

        trace!("resetting turns");
        self.sequencer.reset();
        self.history.clear();

        trace!("setting up players");
        let pool: SmallVec<[Mark; 2]> = SmallVec::from_slice(self.config.mark_pool());
        self.sequencer
            .setup(
                self.config.players_mut(),
                &pool,
                self.randomize_turn_order,
                &mut self.rng,
            )
            .expect("roster size validated by SessionConfigBuilder");
    }

    /// Transition `NotStarted -> InProgress` and log the computed turn order.
    ///
    /// Outside `NotStarted` this is a no-op with a warning; re-run
    /// [`MatchSession::setup_match`] first to restart a finished match.
    pub fn start_match(&mut self) {
        if self.state != MatchState::NotStarted {
            warn!(state = ?self.state, "start_match ignored: match is not in setup state");
            return;
        }

        info!(name = %self.config.name(), "starting match");
        self.state = MatchState::InProgress;

        trace!(board = %self.config.board(), "initial board");
        for id in self.sequencer.turn_order() {
            if let Some(player) = self.config.player(*id) {
                debug!(player = %player, "turn order entry");
            }
        }
    }

    /// Apply the current player's move at `(row, col)`.
    ///
    /// Fails with [`GameError::InvalidMove`] - leaving the session unchanged -
    /// when the match is not in progress, the coordinates are out of range, or
    /// the cell is occupied. On success the move is recorded and terminal
    /// conditions are evaluated for the just-written mark: a win ends the
    /// match for the mover; otherwise a full board is a draw; otherwise the
    /// turn rotates.
    pub fn apply_move(&mut self, row: u8, col: u8) -> Result<(), GameError> {
        if self.state != MatchState::InProgress {
            warn!(row, col, state = ?self.state, "move rejected: match not in progress");
            return Err(GameError::InvalidMove { row, col });
        }

        let mover = self.sequencer.current_player();
        let mark = self.current_player().mark().expect("marks dealt at setup");
        trace!(player = %self.current_player().name(), row, col, "applying move");

        // Occupancy is the session's rule: check before the write.
        let existing = self
            .config
            .board()
            .get(row, col)
            .map_err(|_| GameError::InvalidMove { row, col })?;
        if existing != self.config.board().empty_mark() {
            warn!(row, col, occupied_by = %existing, "move rejected: cell occupied");
            return Err(GameError::InvalidMove { row, col });
        }

        self.config
            .board_mut()
            .set(row, col, mark)
            .expect("coordinates bounds-checked above");
        self.history.push(MoveRecord::new(
            mover,
            mark,
            row,
            col,
            self.sequencer.total_turns(),
        ));
        trace!(board = %self.config.board(), "board after move");

        if self.config.board().has_any_run(mark) {
            self.state = MatchState::GameOver;
            self.outcome = Some(MatchOutcome::Win(mover));
            info!(winner = %self.current_player().name(), "match won");
        } else if self.config.board().is_full() {
            // Only reached with the win ruled out: a board-filling winning
            // move is always reported as a win.
            self.state = MatchState::GameOver;
            self.outcome = Some(MatchOutcome::Draw);
            info!("match drawn");
        } else {
            self.sequencer.advance();
            trace!(player = %self.current_player().name(), "next to move");
        }

        Ok(())
    }

    /// Exchange the first two roster entries and the first two turn slots.
    ///
    /// Fails with [`GameError::UnsupportedPlayerCount`] unless the match has
    /// exactly two players.
    pub fn swap_player_positions(&mut self) -> Result<(), GameError> {
        self.sequencer.swap_first_two()?;
        self.config.players_mut().swap(0, 1);
        debug!("player positions swapped");
        Ok(())
    }

    /// Resize the board (discarding its contents) and re-run the full match
    /// setup. Convenience path for presentation-layer dimension changes.
    ///
    /// Panics if either dimension is below [`crate::board::MIN_SIDE`].
    pub fn resize_board(&mut self, rows: u8, cols: u8) {
        let fill = self.config.board().empty_mark();
        self.config.board_mut().resize(rows, cols, fill);
        info!(rows, cols, "board resized");
        self.setup_match();
    }

    // === Observation ===

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> MatchState {
        self.state
    }

    /// Terminal outcome, absent while undecided.
    #[must_use]
    pub fn outcome(&self) -> Option<MatchOutcome> {
        self.outcome
    }

    /// The winning player, if the match ended in a win.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        match self.outcome {
            Some(MatchOutcome::Win(id)) => self.config.player(id),
            _ => None,
        }
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        self.config
            .player(self.sequencer.current_player())
            .expect("sequencer only holds configured player ids")
    }

    /// The owned board, for rendering and per-cell reads.
    #[must_use]
    pub fn board(&self) -> &Board {
        self.config.board()
    }

    /// The match configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The computed turn order.
    #[must_use]
    pub fn turn_order(&self) -> &[PlayerId] {
        self.sequencer.turn_order()
    }

    /// Applied moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Turns taken since the last setup.
    #[must_use]
    pub fn total_turns(&self) -> u64 {
        self.sequencer.total_turns()
    }
}
