//! Error types for the Order actor.

use crate::model::{OrderId, OrderStatus};
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// Checkout was attempted with an empty cart snapshot.
    #[error("Cannot create an order from an empty cart")]
    EmptyCart,

    /// A line in the snapshot carried an invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// The order is completed; its status can no longer change.
    #[error("{0} is already completed")]
    AlreadyCompleted(OrderId),

    /// The requested status move would go backward in the lifecycle.
    #[error("Invalid status transition: {from} -> {to}")]
    InvalidTransition {
        from: OrderStatus,
        to: OrderStatus,
    },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}
