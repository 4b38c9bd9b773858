//! Entity trait implementation for the Order domain type.

use super::actions::OrderAction;
use super::error::OrderError;
use crate::model::{Order, OrderCreate, OrderId, OrderStatus};
use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;
use resource_actor::ActorEntity;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = ();
    type Action = OrderAction;
    type ActionResult = Order;
    type Context = ();
    type Error = OrderError;

    /// Creates a new Order from a cart snapshot.
    ///
    /// The total is computed here, from the snapshot's prices and
    /// quantities; callers cannot supply one. An empty snapshot or a zero
    /// quantity fails creation before the order reaches the store.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        if params.items.is_empty() {
            return Err(OrderError::EmptyCart);
        }
        if let Some(line) = params.items.iter().find(|line| line.quantity == 0) {
            return Err(OrderError::InvalidQuantity(line.quantity));
        }

        let total = params.items.iter().map(|line| line.line_total()).sum();
        let estimated_minutes = rand::thread_rng().gen_range(15..25);

        Ok(Self {
            id,
            items: params.items,
            total,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
            estimated_minutes,
        })
    }

    async fn on_update(&mut self, _update: (), _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handles status transitions.
    ///
    /// `completed` is terminal and backward moves are rejected; otherwise
    /// the status is overwritten and the updated order returned.
    async fn handle_action(
        &mut self,
        action: OrderAction,
        _ctx: &Self::Context,
    ) -> Result<Order, Self::Error> {
        match action {
            OrderAction::UpdateStatus(next) => {
                if self.status.is_terminal() {
                    return Err(OrderError::AlreadyCompleted(self.id.clone()));
                }
                if next < self.status {
                    return Err(OrderError::InvalidTransition {
                        from: self.status,
                        to: next,
                    });
                }
                self.status = next;
                Ok(self.clone())
            }
        }
    }
}
