//! Process-wide session lifecycle.
//!
//! One match session is active per process at a time. The host is an explicit
//! object the bootstrap owns and passes by reference - there is no global
//! mutable state. A mutex guards the create/destroy pair so exactly one
//! initializer runs at a time; installing over an active session replaces it
//! (last writer wins). Ordinary in-match operations go through
//! [`SessionHost::with_session`] and carry no additional locking concern of
//! their own.

use parking_lot::Mutex;
use tracing::{debug, info};

use crate::session::MatchSession;

/// Holder of the process-wide active session.
#[derive(Debug, Default)]
pub struct SessionHost {
    slot: Mutex<Option<MatchSession>>,
}

impl SessionHost {
    /// Create an empty host.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a session, replacing any active one. Returns the session it
    /// displaced, if any.
    pub fn install(&self, session: MatchSession) -> Option<MatchSession> {
        let mut slot = self.slot.lock();
        let displaced = slot.replace(session);
        if displaced.is_some() {
            debug!("active session replaced");
        } else {
            info!("session installed");
        }
        displaced
    }

    /// Tear down the active session, returning it to the caller for final
    /// observation. No-op when nothing is installed.
    pub fn destroy(&self) -> Option<MatchSession> {
        let mut slot = self.slot.lock();
        let removed = slot.take();
        if removed.is_some() {
            info!("session destroyed");
        }
        removed
    }

    /// True while a session is installed.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.slot.lock().is_some()
    }

    /// Run `f` against the active session, or return `None` when there is
    /// none.
    pub fn with_session<R>(&self, f: impl FnOnce(&mut MatchSession) -> R) -> Option<R> {
        let mut slot = self.slot.lock();
        slot.as_mut().map(f)
    }
}
