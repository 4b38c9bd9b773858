//! # Cart Actor
//!
//! The Cart actor owns the session's cart. All mutations — add, remove,
//! set-quantity, clear — arrive as [`CartAction`] messages and are applied
//! sequentially, so readers never observe a half-applied mutation and the
//! at-most-one-entry-per-item invariant cannot race.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`Cart`]
//! - [`actions`] - [`CartAction`] mutations
//! - [`error`] - [`CartError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Cart;
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new Cart actor and its generic client.
pub fn new() -> (ResourceActor<Cart>, ResourceClient<Cart>) {
    ResourceActor::new(32)
}
