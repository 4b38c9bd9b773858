//! Custom actions for the Order actor.

use crate::model::OrderStatus;

/// Domain operations on a placed order.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Move the order to a new status.
    ///
    /// # Errors
    /// Fails if the order is already `completed` or the move would go
    /// backward in the lifecycle.
    UpdateStatus(OrderStatus),
}
