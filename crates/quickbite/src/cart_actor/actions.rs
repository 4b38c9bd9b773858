//! Custom actions for the Cart actor.
//!
//! Every cart mutation is an action; there is no partial-update DTO because
//! the cart's contract is expressed in operations, not field patches.

use crate::model::{ItemId, MenuItem};

/// Mutations accepted by a cart.
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Add `quantity` of an item. Merges into an existing entry for the
    /// same item id; rejects a zero quantity.
    AddItem { item: MenuItem, quantity: u32 },
    /// Remove the entry for an item id. No-op if absent.
    RemoveItem(ItemId),
    /// Replace an entry's quantity. Zero behaves exactly like `RemoveItem`.
    SetQuantity { item_id: ItemId, quantity: u32 },
    /// Empty the cart.
    Clear,
}
