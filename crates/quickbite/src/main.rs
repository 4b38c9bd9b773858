//! # Quickbite Demo
//!
//! Walks the full storefront flow end to end: OTP login, menu browse,
//! cart building, checkout with simulated payment, and watching the order
//! move through the kitchen until it completes.
//!
//! ```bash
//! RUST_LOG=info cargo run      # compact logs
//! RUST_LOG=debug cargo run     # full payloads
//! ```

use quickbite::auth::{AuthBackend, MockAuth};
use quickbite::catalog::{MenuCatalog, MockCatalog};
use quickbite::kitchen;
use quickbite::lifecycle::Storefront;
use quickbite::payment::MockGateway;
use resource_actor::tracing::setup_tracing;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting quickbite storefront");

    let catalog: Arc<dyn MenuCatalog> = Arc::new(MockCatalog::default());
    let auth: Arc<dyn AuthBackend> = Arc::new(MockAuth::default());
    let gateway = Arc::new(MockGateway::default());

    let storefront = Storefront::start(catalog.clone(), auth.clone(), gateway)
        .await
        .map_err(|e| e.to_string())?;

    // --- Login ---
    let phone = "+919876543210";
    let span = tracing::info_span!("login");
    let user = async {
        info!("Requesting OTP");
        auth.send_otp(phone).await.map_err(|e| e.to_string())?;
        // Any well-formed 4-digit code passes the mock
        auth.verify_otp(phone, "4242").await.map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    storefront
        .session
        .set_user(user.clone())
        .await
        .map_err(|e| e.to_string())?;
    info!(user_id = %user.id, "Logged in");

    // --- Browse the menu ---
    let menu = catalog.menu_items().await.map_err(|e| e.to_string())?;
    info!(items = menu.len(), "Menu loaded");

    let snacks = catalog
        .items_by_category("Snacks")
        .await
        .map_err(|e| e.to_string())?;
    let samosa = snacks
        .iter()
        .find(|item| item.name == "Samosa")
        .cloned()
        .ok_or("Samosa missing from menu")?;
    let tea = catalog
        .search("tea")
        .await
        .map_err(|e| e.to_string())?
        .into_iter()
        .next()
        .ok_or("Tea missing from menu")?;

    // --- Build the cart ---
    storefront
        .cart
        .add_item(samosa, 2)
        .await
        .map_err(|e| e.to_string())?;
    storefront
        .cart
        .add_item(tea, 1)
        .await
        .map_err(|e| e.to_string())?;
    let total = storefront.cart.total().await.map_err(|e| e.to_string())?;
    info!(total, "Cart ready");

    // --- Checkout ---
    let span = tracing::info_span!("order_processing");
    let order = async {
        info!("Placing order through checkout");
        storefront.checkout.place_order().await.map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;
    info!(
        order_id = %order.id,
        total = order.total,
        estimated_minutes = order.estimated_minutes,
        "Order placed"
    );

    // --- Watch it being prepared ---
    let kitchen_task = tokio::spawn(kitchen::simulate_preparation(
        storefront.orders.clone(),
        order.id.clone(),
        Duration::from_millis(400),
    ));

    let mut watch = storefront
        .orders
        .watch_order(order.id.clone(), Duration::from_millis(150));
    while let Some(update) = watch.changed().await {
        info!(order_id = %update.id, status = %update.status, "Order status");
        if update.status.is_terminal() {
            break;
        }
    }
    drop(watch);

    kitchen_task
        .await
        .map_err(|e| e.to_string())?
        .map_err(|e| e.to_string())?;

    let past = storefront
        .orders
        .past_orders()
        .await
        .map_err(|e| e.to_string())?;
    info!(completed_orders = past.len(), "Session order history");

    // Shutdown system gracefully
    storefront.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
