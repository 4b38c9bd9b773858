//! Order actor tests: a real actor driven through the `OrderClient`,
//! checking creation atomicity, server-side totals, and the status
//! lifecycle rules.

use quickbite::catalog::default_menu;
use quickbite::clients::OrderClient;
use quickbite::model::{CartItem, MenuItem, OrderId, OrderStatus};
use quickbite::order_actor::{self, OrderError};
use resource_actor::ActorClient;

fn start_order_store() -> OrderClient {
    let (actor, resource_client) = order_actor::new();
    tokio::spawn(actor.run(()));
    OrderClient::new(resource_client)
}

fn menu_item(name: &str) -> MenuItem {
    default_menu()
        .into_iter()
        .find(|item| item.name == name)
        .unwrap_or_else(|| panic!("{name} missing from default menu"))
}

fn line(name: &str, quantity: u32) -> CartItem {
    CartItem {
        item: menu_item(name),
        quantity,
    }
}

#[tokio::test]
async fn test_create_computes_total_and_starts_pending() {
    let orders = start_order_store();

    // Tea is 50, Samosa is 30: 50×2 + 30×1 = 130
    let order = orders
        .create_order(vec![line("Tea", 2), line("Samosa", 1)])
        .await
        .unwrap();

    assert_eq!(order.total, 130);
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.items.len(), 2);
    assert!((15..25).contains(&order.estimated_minutes));
}

#[tokio::test]
async fn test_empty_create_fails_without_mutating_store() {
    let orders = start_order_store();

    let result = orders.create_order(vec![]).await;
    assert_eq!(result.unwrap_err(), OrderError::EmptyCart);

    assert!(orders.list_orders().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_zero_quantity_line_fails_creation() {
    let orders = start_order_store();

    let result = orders.create_order(vec![line("Tea", 0)]).await;
    assert_eq!(result.unwrap_err(), OrderError::InvalidQuantity(0));
}

#[tokio::test]
async fn test_completed_is_terminal() {
    let orders = start_order_store();
    let order = orders.create_order(vec![line("Tea", 1)]).await.unwrap();

    orders
        .update_status(order.id.clone(), OrderStatus::Completed)
        .await
        .unwrap();

    let result = orders
        .update_status(order.id.clone(), OrderStatus::Preparing)
        .await;
    assert_eq!(
        result.unwrap_err(),
        OrderError::AlreadyCompleted(order.id.clone())
    );

    // Even re-asserting Completed is refused once terminal
    let result = orders
        .update_status(order.id.clone(), OrderStatus::Completed)
        .await;
    assert_eq!(result.unwrap_err(), OrderError::AlreadyCompleted(order.id));
}

#[tokio::test]
async fn test_backward_transition_is_rejected() {
    let orders = start_order_store();
    let order = orders.create_order(vec![line("Tea", 1)]).await.unwrap();

    orders
        .update_status(order.id.clone(), OrderStatus::Ready)
        .await
        .unwrap();

    let result = orders
        .update_status(order.id.clone(), OrderStatus::Preparing)
        .await;
    assert_eq!(
        result.unwrap_err(),
        OrderError::InvalidTransition {
            from: OrderStatus::Ready,
            to: OrderStatus::Preparing,
        }
    );

    // The failed transition left the status untouched
    let current = orders.get(order.id).await.unwrap().unwrap();
    assert_eq!(current.status, OrderStatus::Ready);
}

#[tokio::test]
async fn test_unknown_ids_are_routine() {
    let orders = start_order_store();

    // Reads return None rather than failing
    assert!(orders.get(OrderId(999)).await.unwrap().is_none());

    // Writes report not-found
    let result = orders
        .update_status(OrderId(999), OrderStatus::Preparing)
        .await;
    assert!(matches!(result, Err(OrderError::NotFound(_))));
}

#[tokio::test]
async fn test_listing_is_newest_first() {
    let orders = start_order_store();

    let first = orders.create_order(vec![line("Tea", 1)]).await.unwrap();
    let second = orders.create_order(vec![line("Samosa", 1)]).await.unwrap();

    let all = orders.list_orders().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, second.id);
    assert_eq!(all[1].id, first.id);

    // Active/past split follows the terminal flag
    orders
        .update_status(first.id.clone(), OrderStatus::Completed)
        .await
        .unwrap();
    let active = orders.active_orders().await.unwrap();
    let past = orders.past_orders().await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, second.id);
    assert_eq!(past.len(), 1);
    assert_eq!(past[0].id, first.id);
}
