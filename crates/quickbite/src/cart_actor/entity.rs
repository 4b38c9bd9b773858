//! Entity trait implementation for the Cart domain type.

use super::actions::CartAction;
use super::error::CartError;
use crate::model::{Cart, CartCreate, CartId, CartItem};
use async_trait::async_trait;
use resource_actor::ActorEntity;

#[async_trait]
impl ActorEntity for Cart {
    type Id = CartId;
    type Create = CartCreate;
    type Update = ();
    type Action = CartAction;
    type ActionResult = ();
    type Context = ();
    type Error = CartError;

    fn from_create_params(id: CartId, _params: CartCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            items: Vec::new(),
        })
    }

    async fn on_update(&mut self, _update: (), _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies a cart mutation.
    ///
    /// # Actions
    /// - `AddItem`: merges into an existing entry for the same item id,
    ///   otherwise appends; zero quantities are rejected.
    /// - `RemoveItem`: drops the entry, no-op for unknown ids.
    /// - `SetQuantity`: replaces (not increments) the quantity; zero removes.
    /// - `Clear`: empties the cart.
    async fn handle_action(
        &mut self,
        action: CartAction,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        match action {
            CartAction::AddItem { item, quantity } => {
                if quantity == 0 {
                    return Err(CartError::InvalidQuantity(quantity));
                }
                match self.position(&item.id) {
                    Some(index) => self.items[index].quantity += quantity,
                    None => self.items.push(CartItem { item, quantity }),
                }
                Ok(())
            }
            CartAction::RemoveItem(item_id) => {
                self.items.retain(|entry| entry.item.id != item_id);
                Ok(())
            }
            CartAction::SetQuantity { item_id, quantity } => {
                if quantity == 0 {
                    self.items.retain(|entry| entry.item.id != item_id);
                } else if let Some(index) = self.position(&item_id) {
                    self.items[index].quantity = quantity;
                }
                Ok(())
            }
            CartAction::Clear => {
                self.items.clear();
                Ok(())
            }
        }
    }
}
