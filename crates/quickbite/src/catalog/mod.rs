//! # Menu Catalog Provider
//!
//! The menu is sourced from an external service and is read-only from the
//! storefront's point of view. The [`MenuCatalog`] trait is the boundary
//! contract; [`MockCatalog`] is the in-process implementation, serving a
//! fixed menu after a bounded simulated delay so callers exercise the same
//! async suspension points a real backend would impose. A real HTTP-backed
//! catalog can be substituted without touching any store logic.

use crate::model::{Category, ItemId, MenuItem};
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use tokio::time::sleep;
use tracing::debug;

/// Default simulated network latency for mock services.
pub const MOCK_DELAY: Duration = Duration::from_millis(500);

/// Errors from the menu catalog boundary.
///
/// Transient by nature — callers may retry or surface a dismissible notice;
/// a failed menu fetch must never take the session down.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("Menu service unavailable: {0}")]
    Unavailable(String),
}

/// Boundary contract for the menu data source.
#[async_trait]
pub trait MenuCatalog: Send + Sync {
    /// All orderable items.
    async fn menu_items(&self) -> Result<Vec<MenuItem>, CatalogError>;

    /// A single item by id; `None` for unknown ids.
    async fn menu_item(&self, id: &ItemId) -> Result<Option<MenuItem>, CatalogError>;

    /// Case-insensitive substring match over name, description and category.
    async fn search(&self, query: &str) -> Result<Vec<MenuItem>, CatalogError>;

    /// All known categories.
    async fn categories(&self) -> Result<Vec<Category>, CatalogError>;

    /// Items whose category matches `category` (case-insensitive).
    async fn items_by_category(&self, category: &str) -> Result<Vec<MenuItem>, CatalogError>;
}

/// In-memory catalog with simulated latency.
pub struct MockCatalog {
    items: Vec<MenuItem>,
    categories: Vec<Category>,
    delay: Duration,
}

impl MockCatalog {
    /// Catalog serving the default menu with the given simulated delay.
    pub fn new(delay: Duration) -> Self {
        Self::with_menu(default_menu(), default_categories(), delay)
    }

    pub fn with_menu(items: Vec<MenuItem>, categories: Vec<Category>, delay: Duration) -> Self {
        Self {
            items,
            categories,
            delay,
        }
    }

    /// Single-item and category lookups resolve faster than full listings.
    fn half_delay(&self) -> Duration {
        self.delay / 2
    }
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::new(MOCK_DELAY)
    }
}

#[async_trait]
impl MenuCatalog for MockCatalog {
    async fn menu_items(&self) -> Result<Vec<MenuItem>, CatalogError> {
        sleep(self.delay).await;
        debug!(count = self.items.len(), "Serving menu");
        Ok(self.items.clone())
    }

    async fn menu_item(&self, id: &ItemId) -> Result<Option<MenuItem>, CatalogError> {
        sleep(self.half_delay()).await;
        Ok(self.items.iter().find(|item| &item.id == id).cloned())
    }

    async fn search(&self, query: &str) -> Result<Vec<MenuItem>, CatalogError> {
        sleep(self.delay).await;
        let needle = query.to_lowercase();
        let matches: Vec<MenuItem> = self
            .items
            .iter()
            .filter(|item| {
                item.name.to_lowercase().contains(&needle)
                    || item.description.to_lowercase().contains(&needle)
                    || item.category.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect();
        debug!(query, count = matches.len(), "Search");
        Ok(matches)
    }

    async fn categories(&self) -> Result<Vec<Category>, CatalogError> {
        sleep(self.half_delay()).await;
        Ok(self.categories.clone())
    }

    async fn items_by_category(&self, category: &str) -> Result<Vec<MenuItem>, CatalogError> {
        sleep(self.delay).await;
        Ok(self
            .items
            .iter()
            .filter(|item| item.category.eq_ignore_ascii_case(category))
            .cloned()
            .collect())
    }
}

fn item(
    id: &str,
    name: &str,
    description: &str,
    price: u64,
    category: &str,
    rating: f32,
    reviews: u32,
    prep_minutes: u32,
    image: &str,
) -> MenuItem {
    MenuItem {
        id: ItemId::new(id),
        name: name.to_string(),
        description: description.to_string(),
        price,
        category: category.to_string(),
        rating,
        reviews,
        prep_minutes,
        discount_percent: None,
        image: Some(image.to_string()),
    }
}

/// The default canteen menu.
pub fn default_menu() -> Vec<MenuItem> {
    vec![
        item(
            "1",
            "Tea",
            "Refreshing hot tea with aromatic flavors",
            50,
            "Drinks",
            4.5,
            200,
            2,
            "https://images.unsplash.com/photo-1544787219-7f47ccb76574?w=400&h=400&fit=crop",
        ),
        item(
            "2",
            "Coffee",
            "Rich and bold brewed coffee",
            80,
            "Drinks",
            4.7,
            350,
            3,
            "https://images.unsplash.com/photo-1509042239860-f550ce710b93?w=400&h=400&fit=crop",
        ),
        item(
            "3",
            "Milk",
            "Fresh cold milk, pure and wholesome",
            40,
            "Drinks",
            4.3,
            150,
            1,
            "https://images.unsplash.com/photo-1550583724-b2692b85b150?w=400&h=400&fit=crop",
        ),
        item(
            "4",
            "Paneer Puffs",
            "Crispy puffs filled with spiced paneer",
            60,
            "Snacks",
            4.6,
            280,
            3,
            "https://images.unsplash.com/photo-1601050690597-df0568f70950?w=400&h=400&fit=crop",
        ),
        item(
            "5",
            "Samosa",
            "Golden fried pastry with potato filling",
            30,
            "Snacks",
            4.8,
            400,
            2,
            "https://images.unsplash.com/photo-1601050690597-df0568f70950?w=400&h=400&fit=crop",
        ),
        item(
            "6",
            "Cutlet",
            "Spicy vegetable cutlet, crispy and delicious",
            50,
            "Snacks",
            4.5,
            220,
            3,
            "https://images.unsplash.com/photo-1565299624946-b28f40a0ca4b?w=400&h=400&fit=crop",
        ),
        item(
            "7",
            "Donut",
            "Sweet glazed donut, soft and fluffy",
            40,
            "Desserts",
            4.5,
            320,
            1,
            "https://images.unsplash.com/photo-1551024601-bec78aea704b?w=400&h=400&fit=crop",
        ),
        item(
            "8",
            "Brownie",
            "Rich chocolate brownie, fudgy and decadent",
            80,
            "Desserts",
            4.8,
            450,
            1,
            "https://images.unsplash.com/photo-1607478900766-efe13248b125?w=400&h=400&fit=crop",
        ),
        item(
            "9",
            "Chocolate Cake",
            "Moist chocolate cake with rich frosting",
            150,
            "Cakes",
            4.9,
            500,
            5,
            "https://images.unsplash.com/photo-1578985545062-69928b1d9587?w=400&h=400&fit=crop",
        ),
        item(
            "10",
            "White Forest Cake",
            "Classic white forest cake with cherries",
            180,
            "Cakes",
            4.7,
            380,
            5,
            "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=400&h=400&fit=crop",
        ),
    ]
}

/// The default categories.
pub fn default_categories() -> Vec<Category> {
    let category = |id: &str, name: &str, icon: &str| Category {
        id: id.to_string(),
        name: name.to_string(),
        icon: Some(icon.to_string()),
    };
    vec![
        category("1", "Drinks", "🧃"),
        category("2", "Snacks", "🍪"),
        category("3", "Desserts", "🍰"),
        category("4", "Cakes", "🎂"),
    ]
}
