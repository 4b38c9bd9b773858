//! Checkout orchestration tests.
//!
//! The cart-clearing contract is checked two ways: with real actors for the
//! end state, and with a mocked cart client whose expectation queue proves
//! the exact call sequence — one snapshot, one clear, nothing else.

use quickbite::cart_actor;
use quickbite::catalog::default_menu;
use quickbite::checkout::{Checkout, CheckoutError};
use quickbite::clients::{CartClient, OrderClient};
use quickbite::model::{Cart, CartId, CartItem, MenuItem, OrderStatus};
use quickbite::order_actor;
use quickbite::payment::MockGateway;
use resource_actor::mock::MockClient;
use std::sync::Arc;
use std::time::Duration;

fn menu_item(name: &str) -> MenuItem {
    default_menu()
        .into_iter()
        .find(|item| item.name == name)
        .unwrap_or_else(|| panic!("{name} missing from default menu"))
}

fn start_order_store() -> OrderClient {
    let (actor, resource_client) = order_actor::new();
    tokio::spawn(actor.run(()));
    OrderClient::new(resource_client)
}

async fn open_cart() -> CartClient {
    let (actor, resource_client) = cart_actor::new();
    tokio::spawn(actor.run(()));
    CartClient::open(resource_client).await.unwrap()
}

#[tokio::test]
async fn test_successful_checkout_places_order_and_empties_cart() {
    let cart = open_cart().await;
    let orders = start_order_store();
    let checkout = Checkout::new(
        cart.clone(),
        orders.clone(),
        Arc::new(MockGateway::new(Duration::ZERO)),
    );

    cart.add_item(menu_item("Tea"), 2).await.unwrap();
    cart.add_item(menu_item("Brownie"), 1).await.unwrap();

    let order = checkout.place_order().await.unwrap();

    assert_eq!(order.total, 180);
    assert_eq!(order.status, OrderStatus::Pending);
    assert!(cart.items().await.unwrap().is_empty());
    assert_eq!(orders.list_orders().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_checkout_clears_cart_exactly_once() {
    // Mocked cart: the expectation queue is the proof — exactly one
    // snapshot read and one Clear, consumed in order.
    let mut cart_mock = MockClient::<Cart>::new();
    let snapshot = Cart {
        id: CartId(1),
        items: vec![CartItem {
            item: menu_item("Samosa"),
            quantity: 3,
        }],
    };
    cart_mock.expect_get(CartId(1)).return_ok(Some(snapshot));
    cart_mock.expect_action(CartId(1)).return_ok(());

    let cart = CartClient::new(cart_mock.client(), CartId(1));
    let orders = start_order_store();
    let checkout = Checkout::new(
        cart,
        orders.clone(),
        Arc::new(MockGateway::new(Duration::ZERO)),
    );

    let order = checkout.place_order().await.unwrap();
    assert_eq!(order.total, 90);

    cart_mock.verify();
}

#[tokio::test]
async fn test_declined_payment_leaves_cart_and_store_untouched() {
    let cart = open_cart().await;
    let orders = start_order_store();
    let checkout = Checkout::new(
        cart.clone(),
        orders.clone(),
        Arc::new(MockGateway::declining(Duration::ZERO)),
    );

    cart.add_item(menu_item("Coffee"), 1).await.unwrap();

    let result = checkout.place_order().await;
    assert!(matches!(result, Err(CheckoutError::Payment(_))));

    // The cart survives for a retry and no order was recorded
    assert_eq!(cart.items().await.unwrap().len(), 1);
    assert!(orders.list_orders().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_empty_cart_fails_before_payment() {
    let cart = open_cart().await;
    let orders = start_order_store();
    // A declining gateway would fail the test if checkout ever charged it
    let checkout = Checkout::new(
        cart.clone(),
        orders,
        Arc::new(MockGateway::declining(Duration::ZERO)),
    );

    let result = checkout.place_order().await;
    assert!(matches!(result, Err(CheckoutError::EmptyCart)));
}
