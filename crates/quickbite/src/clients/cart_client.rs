//! # Cart Client
//!
//! High-level API for the session's cart. The client pins the id of the
//! cart created for this session, so consumers never handle cart ids — they
//! see the add/remove/update/clear contract and derived reads.

use crate::cart_actor::{CartAction, CartError};
use crate::model::{Cart, CartCreate, CartId, CartItem, ItemId, MenuItem};
use resource_actor::{FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the session's Cart.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<Cart>,
    id: CartId,
}

impl CartClient {
    pub fn new(inner: ResourceClient<Cart>, id: CartId) -> Self {
        Self { inner, id }
    }

    /// Creates a fresh cart on the actor and returns a client pinned to it.
    pub async fn open(inner: ResourceClient<Cart>) -> Result<Self, CartError> {
        let id = inner.create(CartCreate).await.map_err(Self::map_error)?;
        Ok(Self { inner, id })
    }

    pub fn id(&self) -> &CartId {
        &self.id
    }

    fn map_error(e: FrameworkError) -> CartError {
        match e {
            FrameworkError::NotFound(id) => CartError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<CartError>() {
                Ok(domain) => *domain,
                Err(other) => CartError::ActorCommunicationError(other.to_string()),
            },
            other => CartError::ActorCommunicationError(other.to_string()),
        }
    }

    async fn perform(&self, action: CartAction) -> Result<(), CartError> {
        self.inner
            .perform_action(self.id.clone(), action)
            .await
            .map_err(Self::map_error)
    }

    /// Add `quantity` of an item; merges with an existing entry for the
    /// same item id. Zero quantities are rejected with
    /// [`CartError::InvalidQuantity`].
    #[instrument(skip(self, item), fields(item_id = %item.id))]
    pub async fn add_item(&self, item: MenuItem, quantity: u32) -> Result<(), CartError> {
        debug!("Sending request");
        self.perform(CartAction::AddItem { item, quantity }).await
    }

    /// Remove an item's entry. No-op for unknown ids.
    #[instrument(skip(self))]
    pub async fn remove_item(&self, item_id: ItemId) -> Result<(), CartError> {
        debug!("Sending request");
        self.perform(CartAction::RemoveItem(item_id)).await
    }

    /// Replace an entry's quantity; zero behaves exactly like `remove_item`.
    #[instrument(skip(self))]
    pub async fn update_quantity(&self, item_id: ItemId, quantity: u32) -> Result<(), CartError> {
        debug!("Sending request");
        self.perform(CartAction::SetQuantity { item_id, quantity })
            .await
    }

    /// Empty the cart.
    #[instrument(skip(self))]
    pub async fn clear(&self) -> Result<(), CartError> {
        debug!("Sending request");
        self.perform(CartAction::Clear).await
    }

    /// The current cart state. The session's cart always exists; absence
    /// means the actor state was torn down underneath us.
    pub async fn snapshot(&self) -> Result<Cart, CartError> {
        match self.inner.get(self.id.clone()).await.map_err(Self::map_error)? {
            Some(cart) => Ok(cart),
            None => Err(CartError::NotFound(self.id.to_string())),
        }
    }

    pub async fn items(&self) -> Result<Vec<CartItem>, CartError> {
        Ok(self.snapshot().await?.items)
    }

    /// Current total, recomputed from the entries on every call.
    pub async fn total(&self) -> Result<u64, CartError> {
        Ok(self.snapshot().await?.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_menu;
    use resource_actor::mock::{create_mock_client, expect_action};

    #[tokio::test]
    async fn test_add_item_sends_merge_action() {
        let (client, mut receiver) = create_mock_client::<Cart>(10);
        let cart_client = CartClient::new(client, CartId(1));
        let item = default_menu().remove(0);
        let expected_id = item.id.clone();

        let add_task = tokio::spawn(async move { cart_client.add_item(item, 2).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, CartId(1));
        match action {
            CartAction::AddItem { item, quantity } => {
                assert_eq!(item.id, expected_id);
                assert_eq!(quantity, 2);
            }
            other => panic!("Expected AddItem action, got {:?}", other),
        }
        responder.send(Ok(())).unwrap();

        assert!(add_task.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn test_entity_errors_surface_typed() {
        let (client, mut receiver) = create_mock_client::<Cart>(10);
        let cart_client = CartClient::new(client, CartId(1));
        let item = default_menu().remove(0);

        let add_task = tokio::spawn(async move { cart_client.add_item(item, 0).await });

        let (_, _, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        responder
            .send(Err(resource_actor::FrameworkError::EntityError(Box::new(
                CartError::InvalidQuantity(0),
            ))))
            .unwrap();

        let result = add_task.await.unwrap();
        assert_eq!(result, Err(CartError::InvalidQuantity(0)));
    }
}
