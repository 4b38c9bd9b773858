//! Full end-to-end integration tests with all real actors and zero-delay
//! mock boundaries: login → browse → cart → checkout → kitchen → history.

use quickbite::auth::{AuthBackend, MockAuth};
use quickbite::catalog::{MenuCatalog, MockCatalog};
use quickbite::kitchen;
use quickbite::lifecycle::Storefront;
use quickbite::model::{CartItem, OrderStatus};
use quickbite::payment::MockGateway;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

async fn start_storefront() -> Storefront {
    let catalog: Arc<dyn MenuCatalog> = Arc::new(MockCatalog::new(Duration::ZERO));
    let auth: Arc<dyn AuthBackend> = Arc::new(MockAuth::new(Duration::ZERO));
    let gateway = Arc::new(MockGateway::new(Duration::ZERO));
    Storefront::start(catalog, auth, gateway)
        .await
        .expect("Failed to start storefront")
}

#[tokio::test]
async fn test_full_storefront_flow() {
    let storefront = start_storefront().await;

    // Anonymous until the OTP round-trip completes
    assert!(!storefront.session.is_logged_in().await.unwrap());

    storefront.auth.send_otp("+919876543210").await.unwrap();
    let user = storefront
        .auth
        .verify_otp("+919876543210", "1234")
        .await
        .unwrap();
    storefront.session.set_user(user.clone()).await.unwrap();
    assert!(storefront.session.is_logged_in().await.unwrap());

    // Browse and search the menu
    let menu = storefront.catalog.menu_items().await.unwrap();
    assert_eq!(menu.len(), 10);
    let samosa = storefront
        .catalog
        .search("samosa")
        .await
        .unwrap()
        .into_iter()
        .next()
        .expect("Search should find the samosa");

    // Build the cart and check out
    storefront.cart.add_item(samosa.clone(), 2).await.unwrap();
    storefront.cart.add_item(samosa, 1).await.unwrap();
    assert_eq!(storefront.cart.total().await.unwrap(), 90);

    let order = storefront.checkout.place_order().await.unwrap();
    assert_eq!(order.total, 90);
    assert_eq!(order.status, OrderStatus::Pending);
    assert!(storefront.cart.items().await.unwrap().is_empty());

    // Kitchen advances the order; the watcher observes it complete
    let kitchen_task = tokio::spawn(kitchen::simulate_preparation(
        storefront.orders.clone(),
        order.id.clone(),
        Duration::from_millis(20),
    ));
    let mut watch = storefront
        .orders
        .watch_order(order.id.clone(), Duration::from_millis(5));

    let completed = timeout(Duration::from_secs(5), async {
        while let Some(update) = watch.changed().await {
            if update.status.is_terminal() {
                return Some(update);
            }
        }
        None
    })
    .await
    .expect("Watch timed out")
    .expect("Watch ended before completion");
    assert_eq!(completed.status, OrderStatus::Completed);
    drop(watch);
    kitchen_task.await.unwrap().unwrap();

    // History reflects the completed order
    let past = storefront.orders.past_orders().await.unwrap();
    assert_eq!(past.len(), 1);
    assert_eq!(past[0].id, order.id);

    // Logout clears the identity but the session survives
    storefront.session.logout().await.unwrap();
    assert!(!storefront.session.is_logged_in().await.unwrap());

    storefront
        .shutdown()
        .await
        .expect("Failed to shutdown storefront");
}

/// Concurrent order creation: the order actor serializes all writers, so
/// every checkout succeeds and every order gets a distinct id.
#[tokio::test]
async fn test_concurrent_order_creation_is_serialized() {
    let storefront = start_storefront().await;
    let menu = storefront.catalog.menu_items().await.unwrap();
    let tea = menu.into_iter().next().unwrap();

    let mut handles = vec![];
    for _ in 0..10 {
        let orders = storefront.orders.clone();
        let item = tea.clone();
        handles.push(tokio::spawn(async move {
            orders
                .create_order(vec![CartItem { item, quantity: 1 }])
                .await
        }));
    }

    let mut ids = vec![];
    for handle in handles {
        let order = handle.await.unwrap().expect("Concurrent create failed");
        ids.push(order.id);
    }
    ids.sort_by_key(|id| id.0);
    ids.dedup();
    assert_eq!(ids.len(), 10, "Every order must get a distinct id");

    let all = storefront.orders.list_orders().await.unwrap();
    assert_eq!(all.len(), 10);

    storefront.shutdown().await.unwrap();
}

/// A failed checkout must not wedge the session: the same cart can retry
/// once the gateway recovers.
#[tokio::test]
async fn test_failed_checkout_is_retryable() {
    let catalog: Arc<dyn MenuCatalog> = Arc::new(MockCatalog::new(Duration::ZERO));
    let auth: Arc<dyn AuthBackend> = Arc::new(MockAuth::new(Duration::ZERO));
    let gateway = Arc::new(MockGateway::declining(Duration::ZERO));
    let storefront = Storefront::start(catalog, auth, gateway).await.unwrap();

    let menu = storefront.catalog.menu_items().await.unwrap();
    let item = menu.into_iter().next().unwrap();
    storefront.cart.add_item(item, 1).await.unwrap();

    assert!(storefront.checkout.place_order().await.is_err());

    // Retry through a fresh orchestrator against a healthy gateway; the
    // cart contents survived the failure.
    let retry = quickbite::checkout::Checkout::new(
        storefront.cart.clone(),
        storefront.orders.clone(),
        Arc::new(MockGateway::new(Duration::ZERO)),
    );
    let order = retry.place_order().await.unwrap();
    assert_eq!(order.items.len(), 1);

    // The retry orchestrator holds client clones; release them so shutdown
    // can drain the actors.
    drop(retry);
    storefront.shutdown().await.unwrap();
}
