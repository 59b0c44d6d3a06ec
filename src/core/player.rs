//! Player identity and per-match mark assignment.
//!
//! ## PlayerId
//!
//! Stable identity tag supporting up to 255 players per match. The id is
//! assigned once at configuration build and travels with the player through
//! roster reorderings - it is *not* a roster index.
//!
//! ## Player
//!
//! Name, human/automated kind, and the mark slot the sequencer (re)fills on
//! every match setup. Players survive match resets; only their mark changes.

use serde::{Deserialize, Serialize};

use super::mark::Mark;

/// Stable player identifier, assigned at configuration build.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw id value.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Who is driving this player's moves. Behavior-neutral at this layer: the
/// rules engine treats both kinds identically.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerKind {
    #[default]
    Human,
    Automated,
}

impl std::fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerKind::Human => write!(f, "Human"),
            PlayerKind::Automated => write!(f, "Automated"),
        }
    }
}

/// A match participant.
///
/// Within one match the name is unique and, once the sequencer has run, the
/// assigned mark is unique among active players.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    kind: PlayerKind,
    mark: Option<Mark>,
}

impl Player {
    /// Create a player. The id is normally assigned by
    /// [`SessionConfigBuilder`](crate::session::SessionConfigBuilder).
    ///
    /// Panics if `name` is empty.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, kind: PlayerKind) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "Player name must be non-empty");
        Self {
            id,
            name,
            kind,
            mark: None,
        }
    }

    /// Stable identity of this player.
    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Player name (identity within a match).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human or automated.
    #[must_use]
    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    /// The mark assigned for the current match, if setup has run.
    #[must_use]
    pub fn mark(&self) -> Option<Mark> {
        self.mark
    }

    /// Assign the mark for this match. Called by the turn sequencer on every
    /// setup; earlier assignments are overwritten.
    pub fn assign_mark(&mut self, mark: Mark) {
        self.mark = Some(mark);
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.mark {
            Some(mark) => write!(f, "{} | {} | {}", self.name, self.kind, mark),
            None => write!(f, "{} | {} | -", self.name, self.kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    fn test_player_creation() {
        let player = Player::new(PlayerId::new(0), "Ada", PlayerKind::Human);
        assert_eq!(player.name(), "Ada");
        assert_eq!(player.kind(), PlayerKind::Human);
        assert_eq!(player.mark(), None);
    }

    #[test]
    fn test_mark_assignment_overwrites() {
        let mut player = Player::new(PlayerId::new(1), "Bot", PlayerKind::Automated);
        player.assign_mark(Mark::O);
        assert_eq!(player.mark(), Some(Mark::O));

        player.assign_mark(Mark::X);
        assert_eq!(player.mark(), Some(Mark::X));
    }

    #[test]
    fn test_display() {
        let mut player = Player::new(PlayerId::new(0), "Ada", PlayerKind::Human);
        assert_eq!(format!("{}", player), "Ada | Human | -");

        player.assign_mark(Mark::X);
        assert_eq!(format!("{}", player), "Ada | Human | X");
    }

    #[test]
    #[should_panic(expected = "Player name must be non-empty")]
    fn test_empty_name_panics() {
        let _ = Player::new(PlayerId::new(0), "", PlayerKind::Human);
    }
}
