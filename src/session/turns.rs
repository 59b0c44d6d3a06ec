//! Turn sequencing: mark assignment, ordering, rotation.
//!
//! The sequencer owns the turn order as a list of [`PlayerId`]s and two
//! counters. Marks are assigned to the roster in storage order, then the
//! order is stable-sorted so whoever holds the pool's first mark goes first.

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::{Mark, MatchRng, Player, PlayerId};
use crate::error::GameError;

/// Orders players, assigns marks, and rotates whose turn it is.
///
/// Constructed once per match configuration; [`TurnSequencer::setup`] is
/// re-run on every match (re)setup and may reshuffle marks.
#[derive(Clone, Debug, Default)]
pub struct TurnSequencer {
    order: SmallVec<[PlayerId; 2]>,
    current: usize,
    total_turns: u64,
}

impl TurnSequencer {
    /// Create an empty sequencer. [`TurnSequencer::setup`] populates it.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign marks and compute the turn order.
    ///
    /// Fails with [`GameError::InsufficientPlayers`] for fewer than two
    /// players. Marks are taken from `mark_pool` - shuffled first when
    /// `randomize` is set - and dealt as `pool[i % pool.len()]` to player `i`
    /// in roster order. The order is then stable-sorted so players holding
    /// the pool's *first* mark (the one that goes first) come before the
    /// rest; ties keep roster order.
    ///
    /// Panics if `mark_pool` is empty.
    pub fn setup(
        &mut self,
        players: &mut [Player],
        mark_pool: &[Mark],
        randomize: bool,
        rng: &mut MatchRng,
    ) -> Result<(), GameError> {
        if players.len() < 2 {
            return Err(GameError::InsufficientPlayers {
                found: players.len(),
            });
        }
        assert!(!mark_pool.is_empty(), "Mark pool must be non-empty");

        let first_mark = mark_pool[0];

        if randomize {
            let mut shuffled: SmallVec<[Mark; 2]> = SmallVec::from_slice(mark_pool);
            rng.shuffle(&mut shuffled);
            for (i, player) in players.iter_mut().enumerate() {
                player.assign_mark(shuffled[i % shuffled.len()]);
            }
        } else {
            for (i, player) in players.iter_mut().enumerate() {
                player.assign_mark(mark_pool[i % mark_pool.len()]);
            }
        }

        for player in players.iter() {
            trace!(player = %player.name(), mark = %player.mark().map(|m| m.symbol()).unwrap_or('-'), "mark assigned");
        }

        self.order = players.iter().map(Player::id).collect();
        // Stable: holders of the first-mover mark float to the front, ties
        // keep roster order.
        self.order.sort_by_key(|id| {
            let holds_first = players
                .iter()
                .find(|p| p.id() == *id)
                .is_some_and(|p| p.mark() == Some(first_mark));
            !holds_first
        });

        debug!(order = ?self.order, "turn order computed");
        Ok(())
    }

    /// Reset the rotation counters. Mark assignment is untouched.
    pub fn reset(&mut self) {
        self.current = 0;
        self.total_turns = 0;
    }

    /// Advance to the next player, wrapping without bound.
    pub fn advance(&mut self) {
        self.current = (self.current + 1) % self.order.len();
        self.total_turns += 1;
    }

    /// The player whose turn it is.
    ///
    /// Panics if [`TurnSequencer::setup`] has not run.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.order[self.current]
    }

    /// Exchange the first two turn slots.
    ///
    /// Fails with [`GameError::UnsupportedPlayerCount`] unless exactly two
    /// players are sequenced.
    pub fn swap_first_two(&mut self) -> Result<(), GameError> {
        if self.order.len() != 2 {
            return Err(GameError::UnsupportedPlayerCount {
                found: self.order.len(),
            });
        }
        self.order.swap(0, 1);
        Ok(())
    }

    /// The computed turn order.
    #[must_use]
    pub fn turn_order(&self) -> &[PlayerId] {
        &self.order
    }

    /// Index of the current turn within the order.
    #[must_use]
    pub fn current_turn(&self) -> usize {
        self.current
    }

    /// Total turns taken since the last reset.
    #[must_use]
    pub fn total_turns(&self) -> u64 {
        self.total_turns
    }

    /// Number of sequenced players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True before the first [`TurnSequencer::setup`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
