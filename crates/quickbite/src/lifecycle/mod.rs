//! # System Lifecycle & Orchestration
//!
//! Individual actors are simple; wiring them together is where the
//! complexity lives. [`Storefront`] is the conductor: it spawns the cart,
//! order and session actors, creates the session-scoped entities, hands the
//! boundary collaborators to the pieces that need them, and coordinates a
//! graceful shutdown.
//!
//! ## Startup order
//!
//! 1. Create all actors (no dependencies yet).
//! 2. Spawn each actor's run loop in its own Tokio task.
//! 3. Create the session's cart and session entities and pin their clients.
//! 4. Assemble the checkout orchestrator from the clients plus the payment
//!    gateway.
//!
//! ## Graceful Shutdown
//!
//! Dropping every client closes the channels; each actor's `recv()` then
//! returns `None`, the loop drains and exits, and `shutdown()` awaits all
//! the task handles. No messages are lost and no task is left dangling.

use crate::auth::AuthBackend;
use crate::cart_actor::{self, CartError};
use crate::catalog::MenuCatalog;
use crate::checkout::Checkout;
use crate::clients::{CartClient, OrderClient, SessionClient};
use crate::order_actor;
use crate::payment::PaymentGateway;
use crate::session_actor::{self, SessionError};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

/// Errors raised while assembling the system.
#[derive(Debug, Error)]
pub enum StartError {
    #[error(transparent)]
    Cart(#[from] CartError),
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// The assembled storefront: every store and boundary, constructed once per
/// session/process and injected into whatever needs them.
pub struct Storefront {
    /// Read-only menu boundary.
    pub catalog: Arc<dyn MenuCatalog>,

    /// OTP auth boundary.
    pub auth: Arc<dyn AuthBackend>,

    /// Client for the session's cart.
    pub cart: CartClient,

    /// Client for the order store.
    pub orders: OrderClient,

    /// Client for the session identity.
    pub session: SessionClient,

    /// Cart → payment → order orchestrator.
    pub checkout: Checkout,

    /// Task handles for all running actors (used for graceful shutdown).
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Storefront {
    /// Spawns all actors, creates the session-scoped entities, and wires
    /// the clients together.
    pub async fn start(
        catalog: Arc<dyn MenuCatalog>,
        auth: Arc<dyn AuthBackend>,
        gateway: Arc<dyn PaymentGateway>,
    ) -> Result<Self, StartError> {
        let (cart_actor, cart_resource_client) = cart_actor::new();
        let (order_actor, order_resource_client) = order_actor::new();
        let (session_actor, session_resource_client) = session_actor::new();

        // None of the entities here depend on other actors, so every
        // context is ().
        let cart_handle = tokio::spawn(cart_actor.run(()));
        let order_handle = tokio::spawn(order_actor.run(()));
        let session_handle = tokio::spawn(session_actor.run(()));

        let cart = CartClient::open(cart_resource_client).await?;
        let session = SessionClient::open(session_resource_client).await?;
        let orders = OrderClient::new(order_resource_client);
        let checkout = Checkout::new(cart.clone(), orders.clone(), gateway);

        info!(cart_id = %cart.id(), session_id = %session.id(), "Storefront started");

        Ok(Self {
            catalog,
            auth,
            cart,
            orders,
            session,
            checkout,
            handles: vec![cart_handle, order_handle, session_handle],
        })
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Drops every client (checkout first, since it holds clones of the
    /// others), waits for all actor tasks to finish, and reports any task
    /// that panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down storefront...");

        drop(self.checkout);
        drop(self.cart);
        drop(self.orders);
        drop(self.session);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Storefront shutdown complete.");
        Ok(())
    }
}
