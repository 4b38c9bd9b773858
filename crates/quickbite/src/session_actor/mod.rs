//! # Session Actor
//!
//! The Session actor holds the current identity for the session: a single
//! `Option<User>` slot that `SetUser` fills and `Logout` empties. It is the
//! source of truth for "is anyone logged in", which drives which top-level
//! surface a frontend shows.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`Session`]
//! - [`actions`] - [`SessionAction`] identity operations
//! - [`error`] - [`SessionError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Session;
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new Session actor and its generic client.
pub fn new() -> (ResourceActor<Session>, ResourceClient<Session>) {
    ResourceActor::new(32)
}
