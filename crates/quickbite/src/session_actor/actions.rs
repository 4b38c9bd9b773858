//! Custom actions for the Session actor.

use crate::model::User;

/// Identity operations on a session.
#[derive(Debug, Clone)]
pub enum SessionAction {
    /// Replace the current identity unconditionally.
    SetUser(User),
    /// Clear the current identity.
    Logout,
}
