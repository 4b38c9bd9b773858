//! Order domain types.
//!
//! An [`Order`] is an immutable snapshot of a cart taken at checkout time;
//! only its status changes afterwards, and only forward through the
//! [`OrderStatus`] lifecycle. Orders implement the
//! [`ActorEntity`](resource_actor::ActorEntity) trait (see
//! [`crate::order_actor`]).

use crate::model::CartItem;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Order lifecycle: `Pending → Preparing → Ready → Completed`.
///
/// Variant order matters: the derived `Ord` is what makes "no backward
/// moves" checkable with a comparison.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Preparing,
    Ready,
    Completed,
}

impl OrderStatus {
    /// `Completed` accepts no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Completed)
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Completed => "completed",
        };
        write!(f, "{}", s)
    }
}

/// A placed order.
///
/// `items` and `total` are fixed at creation; later cart mutations do not
/// affect them. `total` is computed inside the order actor from the item
/// snapshot — there is no field for a caller-supplied total.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: OrderId,
    pub items: Vec<CartItem>,
    pub total: u64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    /// Estimated preparation time in minutes, assigned at creation.
    pub estimated_minutes: u32,
}

/// Payload for creating a new order: the cart snapshot, nothing more.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub items: Vec<CartItem>,
}
