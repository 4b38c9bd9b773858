//! # Order Actor
//!
//! The Order actor owns the session's order history: an append-only store
//! where each order is created atomically from a cart snapshot and then only
//! ever changes status. Because the actor processes one message at a time,
//! two concurrent checkouts are serialized without locks — the
//! at-most-one-writer discipline the order store requires.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`Order`]
//! - [`actions`] - [`OrderAction`] for status transitions
//! - [`error`] - [`OrderError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Status lifecycle
//!
//! `pending → preparing → ready → completed`, forward only; `completed`
//! accepts no further transitions. Validation failures during creation
//! (empty snapshot, zero quantity) happen before the order enters the
//! store, so a failed create leaves no trace.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Order;
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new Order actor and its generic client.
pub fn new() -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(32)
}
