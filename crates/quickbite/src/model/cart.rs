//! Cart domain types.
//!
//! A [`Cart`] is the session-scoped collection of selected items awaiting
//! checkout. It implements the
//! [`ActorEntity`](resource_actor::ActorEntity) trait (see
//! [`crate::cart_actor`]), so all mutations go through the cart actor and
//! are serialized.

use crate::model::{ItemId, MenuItem};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Carts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CartId(pub u32);

impl From<u32> for CartId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cart_{}", self.0)
    }
}

/// A menu item plus the quantity the customer selected.
///
/// Invariant: within a cart there is at most one `CartItem` per menu item
/// id; adding the same item again merges into the existing entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub item: MenuItem,
    pub quantity: u32,
}

impl CartItem {
    pub fn line_total(&self) -> u64 {
        self.item.price * self.quantity as u64
    }
}

#[derive(Debug, Clone)]
pub struct Cart {
    pub id: CartId,
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Sum of price × quantity over all entries. Always recomputed from the
    /// current entries, never cached, so it cannot diverge from the items.
    pub fn total(&self) -> u64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn position(&self, item_id: &ItemId) -> Option<usize> {
        self.items.iter().position(|entry| &entry.item.id == item_id)
    }
}

/// Payload for creating a new (empty) cart.
#[derive(Debug, Clone)]
pub struct CartCreate;
