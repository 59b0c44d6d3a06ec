//! Move records: the session's audit trail.
//!
//! Every applied move is appended to a persistent vector, so observers can
//! take O(1) snapshots of the history without blocking further play.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Mark, PlayerId};

/// One applied move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who moved.
    pub player: PlayerId,

    /// The mark placed.
    pub mark: Mark,

    /// Target cell.
    pub row: u8,
    pub col: u8,

    /// Turn counter at the time of the move (0-based).
    pub turn: u64,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(player: PlayerId, mark: Mark, row: u8, col: u8, turn: u64) -> Self {
        Self {
            player,
            mark,
            row,
            col,
            turn,
        }
    }
}

/// Append-only history of applied moves with O(1) clone.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveHistory {
    moves: Vector<MoveRecord>,
}

impl MoveHistory {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record.
    pub fn push(&mut self, record: MoveRecord) {
        self.moves.push_back(record);
    }

    /// Drop all records.
    pub fn clear(&mut self) {
        self.moves.clear();
    }

    /// Number of recorded moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// True when no move has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// The most recent record.
    #[must_use]
    pub fn last(&self) -> Option<&MoveRecord> {
        self.moves.back()
    }

    /// Iterate over records in application order.
    pub fn iter(&self) -> impl Iterator<Item = &MoveRecord> {
        self.moves.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_iterate_in_order() {
        let mut history = MoveHistory::new();
        history.push(MoveRecord::new(PlayerId::new(0), Mark::X, 0, 0, 0));
        history.push(MoveRecord::new(PlayerId::new(1), Mark::O, 1, 1, 1));

        assert_eq!(history.len(), 2);
        let cells: Vec<_> = history.iter().map(|r| (r.row, r.col)).collect();
        assert_eq!(cells, vec![(0, 0), (1, 1)]);
        assert_eq!(history.last().unwrap().mark, Mark::O);
    }

    #[test]
    fn test_clear() {
        let mut history = MoveHistory::new();
        history.push(MoveRecord::new(PlayerId::new(0), Mark::X, 2, 2, 0));
        history.clear();

        assert!(history.is_empty());
        assert_eq!(history.last(), None);
    }

    #[test]
    fn test_snapshot_clone_is_independent() {
        let mut history = MoveHistory::new();
        history.push(MoveRecord::new(PlayerId::new(0), Mark::X, 0, 0, 0));

        let snapshot = history.clone();
        history.push(MoveRecord::new(PlayerId::new(1), Mark::O, 0, 1, 1));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut history = MoveHistory::new();
        history.push(MoveRecord::new(PlayerId::new(0), Mark::X, 1, 2, 0));

        let json = serde_json::to_string(&history).unwrap();
        let back: MoveHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, history);
    }
}
