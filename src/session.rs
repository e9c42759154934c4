//! Session/identity context injected into the board.
//!
//! The identity provider itself is an external collaborator; the core only
//! sees an opaque user id and an authenticated/unauthenticated flag, so it
//! stays testable without a live session.

/// Current session as seen by the board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user_id: Option<String>,
}

impl Session {
    /// An authenticated session for the given opaque user id.
    pub fn authenticated(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
        }
    }

    /// A signed-out session. Board operations that touch the store are inert
    /// under it.
    pub fn anonymous() -> Self {
        Self { user_id: None }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }

    /// Opaque user id attached to inserted rows.
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }
}
