//! # Kitchen Simulation
//!
//! Nothing in this system actually cooks: status transitions are simulated,
//! exactly as the source application drives them from timers. This module
//! is the stand-in kitchen — it walks a placed order forward through
//! `preparing → ready → completed` with a fixed pause between steps.

use crate::clients::OrderClient;
use crate::model::{OrderId, OrderStatus};
use crate::order_actor::OrderError;
use std::time::Duration;
use tokio::time::sleep;
use tracing::info;

/// Advance an order through the full lifecycle, pausing `step` between
/// transitions. Fails if the order is unknown or already completed.
pub async fn simulate_preparation(
    orders: OrderClient,
    id: OrderId,
    step: Duration,
) -> Result<(), OrderError> {
    for status in [
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Completed,
    ] {
        sleep(step).await;
        let order = orders.update_status(id.clone(), status).await?;
        info!(order_id = %order.id, status = %order.status, "Kitchen advanced order");
    }
    Ok(())
}
