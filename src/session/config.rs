//! Match configuration: the immutable descriptor a session is built from.
//!
//! Assembled once per match through [`SessionConfigBuilder`], which validates
//! the roster before any match can start. The configuration owns the board
//! and the players for the lifetime of the session.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::info;

use crate::board::Board;
use crate::core::{Mark, Player, PlayerId, PlayerKind};
use crate::error::GameError;

/// Immutable match descriptor: identity, board, roster, mark pool.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    name: String,
    description: String,
    board: Board,
    max_players: usize,
    players: Vec<Player>,
    by_name: FxHashMap<String, PlayerId>,
    mark_pool: SmallVec<[Mark; 2]>,
}

impl SessionConfig {
    /// Start assembling a configuration.
    #[must_use]
    pub fn builder() -> SessionConfigBuilder {
        SessionConfigBuilder::new()
    }

    /// Match name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Match description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The owned board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Configured roster ceiling.
    #[must_use]
    pub fn max_players(&self) -> usize {
        self.max_players
    }

    /// Roster in storage order (mark-assignment order).
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub(crate) fn players_mut(&mut self) -> &mut Vec<Player> {
        &mut self.players
    }

    /// Look up a player by stable id.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    /// Look up a player by name.
    #[must_use]
    pub fn player_by_name(&self, name: &str) -> Option<&Player> {
        self.by_name.get(name).and_then(|id| self.player(*id))
    }

    /// Ordered mark pool; the first entry goes first.
    #[must_use]
    pub fn mark_pool(&self) -> &[Mark] {
        &self.mark_pool
    }
}

/// Staged builder for [`SessionConfig`].
///
/// ```
/// use gridworks::core::PlayerKind;
/// use gridworks::session::SessionConfig;
///
/// let config = SessionConfig::builder()
///     .name("TicTacToe")
///     .description("Best of one")
///     .board(3, 3)
///     .max_players(2)
///     .player("Ada", PlayerKind::Human)
///     .player("Bob", PlayerKind::Automated)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.players().len(), 2);
/// ```
#[derive(Debug)]
pub struct SessionConfigBuilder {
    name: String,
    description: String,
    board: Option<Board>,
    max_players: usize,
    entries: Vec<(String, PlayerKind)>,
    mark_pool: SmallVec<[Mark; 2]>,
}

impl Default for SessionConfigBuilder {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            board: None,
            max_players: 2,
            entries: Vec::new(),
            mark_pool: SmallVec::from_slice(&[Mark::X, Mark::O]),
        }
    }
}

impl SessionConfigBuilder {
    /// Create a builder with the defaults: 2-player ceiling, `[X, O]` pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the match name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the match description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set board dimensions with the conventional `'.'` sentinel.
    #[must_use]
    pub fn board(mut self, rows: u8, cols: u8) -> Self {
        self.board = Some(Board::new(rows, cols));
        self
    }

    /// Set board dimensions with an explicit fill/sentinel mark.
    #[must_use]
    pub fn board_with_fill(mut self, rows: u8, cols: u8, fill: Mark) -> Self {
        self.board = Some(Board::with_fill(rows, cols, fill));
        self
    }

    /// Set the roster ceiling.
    #[must_use]
    pub fn max_players(mut self, max_players: usize) -> Self {
        self.max_players = max_players;
        self
    }

    /// Add a player. Ids are assigned in call order at build time.
    #[must_use]
    pub fn player(mut self, name: impl Into<String>, kind: PlayerKind) -> Self {
        self.entries.push((name.into(), kind));
        self
    }

    /// Replace the mark pool. The first entry is the mark that goes first.
    ///
    /// Panics if `pool` is empty.
    #[must_use]
    pub fn mark_pool(mut self, pool: &[Mark]) -> Self {
        assert!(!pool.is_empty(), "Mark pool must be non-empty");
        self.mark_pool = SmallVec::from_slice(pool);
        self
    }

    /// Validate and assemble the configuration.
    ///
    /// Fails with [`GameError::InsufficientPlayers`] for fewer than two
    /// players, [`GameError::PlayerLimitExceeded`] when the roster is larger
    /// than the ceiling, and [`GameError::DuplicatePlayerName`] when two
    /// entries share a name. A missing board defaults to 3x3.
    pub fn build(self) -> Result<SessionConfig, GameError> {
        if self.entries.len() < 2 {
            return Err(GameError::InsufficientPlayers {
                found: self.entries.len(),
            });
        }
        if self.entries.len() > self.max_players {
            return Err(GameError::PlayerLimitExceeded {
                found: self.entries.len(),
                max: self.max_players,
            });
        }

        let mut players = Vec::with_capacity(self.entries.len());
        let mut by_name = FxHashMap::default();
        for (i, (name, kind)) in self.entries.into_iter().enumerate() {
            let id = PlayerId::new(i as u8);
            if by_name.insert(name.clone(), id).is_some() {
                return Err(GameError::DuplicatePlayerName { name });
            }
            players.push(Player::new(id, name, kind));
        }

        let board = self.board.unwrap_or_else(|| Board::new(3, 3));

        info!(
            name = %self.name,
            rows = board.rows(),
            cols = board.cols(),
            players = players.len(),
            "session configuration assembled"
        );

        Ok(SessionConfig {
            name: self.name,
            description: self.description,
            board,
            max_players: self.max_players,
            players,
            by_name,
            mark_pool: self.mark_pool,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_player_builder() -> SessionConfigBuilder {
        SessionConfig::builder()
            .name("TicTacToe")
            .description("TicTacToe Game")
            .board(3, 3)
            .max_players(2)
            .player("Ada", PlayerKind::Human)
            .player("Bob", PlayerKind::Automated)
    }

    #[test]
    fn test_build_assigns_sequential_ids() {
        let config = two_player_builder().build().unwrap();

        assert_eq!(config.name(), "TicTacToe");
        assert_eq!(config.players().len(), 2);
        assert_eq!(config.players()[0].id(), PlayerId::new(0));
        assert_eq!(config.players()[1].id(), PlayerId::new(1));
        assert_eq!(config.players()[0].kind(), PlayerKind::Human);
        assert_eq!(config.players()[1].kind(), PlayerKind::Automated);
    }

    #[test]
    fn test_build_rejects_single_player() {
        let result = SessionConfig::builder()
            .board(3, 3)
            .player("Ada", PlayerKind::Human)
            .build();

        assert_eq!(
            result.map(|_| ()),
            Err(GameError::InsufficientPlayers { found: 1 })
        );
    }

    #[test]
    fn test_build_rejects_roster_over_limit() {
        let result = SessionConfig::builder()
            .board(3, 3)
            .max_players(2)
            .player("Ada", PlayerKind::Human)
            .player("Bob", PlayerKind::Human)
            .player("Cleo", PlayerKind::Human)
            .build();

        assert_eq!(
            result.map(|_| ()),
            Err(GameError::PlayerLimitExceeded { found: 3, max: 2 })
        );
    }

    #[test]
    fn test_build_rejects_duplicate_names() {
        let result = SessionConfig::builder()
            .board(3, 3)
            .player("Ada", PlayerKind::Human)
            .player("Ada", PlayerKind::Automated)
            .build();

        assert_eq!(
            result.map(|_| ()),
            Err(GameError::DuplicatePlayerName {
                name: "Ada".to_string()
            })
        );
    }

    #[test]
    fn test_lookup_by_id_and_name() {
        let config = two_player_builder().build().unwrap();

        assert_eq!(config.player(PlayerId::new(1)).unwrap().name(), "Bob");
        assert_eq!(
            config.player_by_name("Ada").unwrap().id(),
            PlayerId::new(0)
        );
        assert!(config.player_by_name("Zoe").is_none());
        assert!(config.player(PlayerId::new(9)).is_none());
    }

    #[test]
    fn test_default_board_and_pool() {
        let config = SessionConfig::builder()
            .player("Ada", PlayerKind::Human)
            .player("Bob", PlayerKind::Human)
            .build()
            .unwrap();

        assert_eq!(config.board().dimensions(), (3, 3));
        assert_eq!(config.mark_pool(), &[Mark::X, Mark::O]);
        assert_eq!(config.max_players(), 2);
    }

    #[test]
    fn test_custom_board_fill_and_pool() {
        let config = SessionConfig::builder()
            .board_with_fill(5, 4, Mark::new('_'))
            .max_players(3)
            .mark_pool(&[Mark::new('A'), Mark::new('B'), Mark::new('C')])
            .player("Ada", PlayerKind::Human)
            .player("Bob", PlayerKind::Human)
            .player("Cleo", PlayerKind::Human)
            .build()
            .unwrap();

        assert_eq!(config.board().empty_mark(), Mark::new('_'));
        assert_eq!(config.mark_pool().len(), 3);
    }
}
