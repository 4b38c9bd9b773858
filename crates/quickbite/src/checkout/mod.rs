//! # Checkout Orchestrator
//!
//! Converts the session's cart into an order: snapshot → charge → create →
//! clear. The ordering is the contract — payment is attempted only against
//! a non-empty snapshot, the order is created only after the charge
//! succeeds, and the cart is cleared exactly once, only after the order
//! exists. A failed charge therefore leaves the cart intact and the order
//! store untouched, so the customer can retry.

use crate::cart_actor::CartError;
use crate::clients::{CartClient, OrderClient};
use crate::model::Order;
use crate::order_actor::OrderError;
use crate::payment::{PaymentError, PaymentGateway};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, instrument};

/// Errors surfaced by checkout.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Checkout was attempted with an empty cart. Validation error.
    #[error("Cannot check out an empty cart")]
    EmptyCart,

    /// The charge failed. Retryable — the cart is untouched.
    #[error("Payment failed: {0}")]
    Payment(#[from] PaymentError),

    #[error(transparent)]
    Cart(#[from] CartError),

    #[error(transparent)]
    Order(#[from] OrderError),
}

/// Orchestrates cart → payment → order → cleared cart.
#[derive(Clone)]
pub struct Checkout {
    cart: CartClient,
    orders: OrderClient,
    gateway: Arc<dyn PaymentGateway>,
}

impl Checkout {
    pub fn new(cart: CartClient, orders: OrderClient, gateway: Arc<dyn PaymentGateway>) -> Self {
        Self {
            cart,
            orders,
            gateway,
        }
    }

    /// Place an order from the current cart contents.
    #[instrument(skip(self))]
    pub async fn place_order(&self) -> Result<Order, CheckoutError> {
        let cart = self.cart.snapshot().await?;
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let total = cart.total();
        let receipt = self.gateway.charge(total).await?;
        info!(reference = %receipt.reference, amount = receipt.amount, "Payment confirmed");

        let order = self.orders.create_order(cart.items).await?;
        self.cart.clear().await?;
        info!(order_id = %order.id, total = order.total, "Order placed");

        Ok(order)
    }
}
