//! User and session domain types.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A registered user, as returned by the auth backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub avatar: Option<String>,
}

/// Type-safe identifier for Sessions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub u32);

impl From<u32> for SessionId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "session_{}", self.0)
    }
}

/// The session's identity slot: who is logged in, if anyone.
///
/// Managed by the session actor (see [`crate::session_actor`]); created
/// empty, filled by `SetUser`, emptied again by `Logout`.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: SessionId,
    pub user: Option<User>,
}

impl Session {
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }
}

/// Payload for creating a new (anonymous) session.
#[derive(Debug, Clone)]
pub struct SessionCreate;
