//! # Order Client
//!
//! High-level API for the order store: create from a snapshot, read back,
//! advance status, and watch a single order's progress. The polling loop
//! behind [`OrderWatch`] is the Rust rendition of the app's interval-based
//! status refresh — a cancellable timer tied to the watcher's lifetime
//! feeding a `tokio::sync::watch` channel.

use crate::model::{CartItem, Order, OrderCreate, OrderId, OrderStatus};
use crate::order_actor::{OrderAction, OrderError};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<OrderError>() {
                Ok(domain) => *domain,
                Err(other) => OrderError::ActorCommunicationError(other.to_string()),
            },
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl OrderClient {
    /// Create an order from a cart snapshot and return it.
    ///
    /// Validation (non-empty snapshot, positive quantities) and the total
    /// happen inside the order actor; a rejected create leaves the store
    /// untouched.
    #[instrument(skip(self, items), fields(lines = items.len()))]
    pub async fn create_order(&self, items: Vec<CartItem>) -> Result<Order, OrderError> {
        debug!("Sending request");
        info!("Sending create_order to actor");
        let id = self
            .inner
            .create(OrderCreate { items })
            .await
            .map_err(Self::map_error)?;
        match self.get(id.clone()).await? {
            Some(order) => Ok(order),
            // Only possible if the store was torn down between the two calls
            None => Err(OrderError::NotFound(id.to_string())),
        }
    }

    /// All orders for the session, newest first.
    #[instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        let mut orders = self.list().await?;
        orders.reverse();
        Ok(orders)
    }

    /// Orders still moving through the lifecycle, newest first.
    pub async fn active_orders(&self) -> Result<Vec<Order>, OrderError> {
        let mut orders = self.list_orders().await?;
        orders.retain(|order| !order.status.is_terminal());
        Ok(orders)
    }

    /// Completed orders, newest first.
    pub async fn past_orders(&self) -> Result<Vec<Order>, OrderError> {
        let mut orders = self.list_orders().await?;
        orders.retain(|order| order.status.is_terminal());
        Ok(orders)
    }

    /// Advance an order's status. Rejected for completed orders and for
    /// backward moves; unknown ids report [`OrderError::NotFound`].
    #[instrument(skip(self))]
    pub async fn update_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, OrderAction::UpdateStatus(status))
            .await
            .map_err(Self::map_error)
    }

    /// Start watching one order's status by bounded polling.
    ///
    /// Polls immediately, then every `period`; publishes each status change
    /// and stops on its own once the order completes or disappears.
    /// Dropping the returned [`OrderWatch`] cancels the poller.
    pub fn watch_order(&self, id: OrderId, period: Duration) -> OrderWatch {
        let inner = self.inner.clone();
        let (tx, rx) = watch::channel(None);

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            let mut last_seen: Option<OrderStatus> = None;
            loop {
                ticker.tick().await;
                match inner.get(id.clone()).await {
                    Ok(Some(order)) => {
                        if last_seen == Some(order.status) {
                            continue;
                        }
                        last_seen = Some(order.status);
                        let finished = order.status.is_terminal();
                        if tx.send(Some(order)).is_err() || finished {
                            break;
                        }
                    }
                    Ok(None) => {
                        warn!(%id, "Watched order disappeared");
                        break;
                    }
                    Err(_) => break,
                }
            }
        });

        OrderWatch { rx, task }
    }
}

/// A live view over one order, fed by a background poller.
pub struct OrderWatch {
    rx: watch::Receiver<Option<Order>>,
    task: JoinHandle<()>,
}

impl OrderWatch {
    /// The most recently observed state, if any poll has landed yet.
    pub fn current(&self) -> Option<Order> {
        self.rx.borrow().clone()
    }

    /// Wait for the next status change. Returns `None` once the watch has
    /// ended (order completed, disappeared, or the store shut down).
    pub async fn changed(&mut self) -> Option<Order> {
        self.rx.changed().await.ok()?;
        self.rx.borrow_and_update().clone()
    }
}

impl Drop for OrderWatch {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resource_actor::mock::MockClient;

    #[tokio::test]
    async fn test_entity_errors_surface_typed() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_action(OrderId(7))
            .return_err(FrameworkError::EntityError(Box::new(
                OrderError::AlreadyCompleted(OrderId(7)),
            )));

        let client = OrderClient::new(mock.client());
        let result = client
            .update_status(OrderId(7), OrderStatus::Preparing)
            .await;
        assert_eq!(result.unwrap_err(), OrderError::AlreadyCompleted(OrderId(7)));
        mock.verify();
    }

    #[tokio::test]
    async fn test_unknown_id_maps_to_not_found() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_action(OrderId(99))
            .return_err(FrameworkError::NotFound("order_99".to_string()));

        let client = OrderClient::new(mock.client());
        let result = client.update_status(OrderId(99), OrderStatus::Ready).await;
        assert_eq!(
            result.unwrap_err(),
            OrderError::NotFound("order_99".to_string())
        );
        mock.verify();
    }
}
