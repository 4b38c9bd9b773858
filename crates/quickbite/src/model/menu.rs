//! Menu catalog data types.
//!
//! Menu items and categories are read-only: they are loaded from the
//! [`MenuCatalog`](crate::catalog::MenuCatalog) boundary and never mutated by
//! the storefront.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Identifier for a menu item, assigned by the catalog backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// An orderable item as served by the menu catalog.
///
/// `price` is in the smallest currency unit. `discount_percent`, when
/// present, is display metadata in the 0–100 range; cart and order math use
/// `price` as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub price: u64,
    pub category: String,
    pub rating: f32,
    pub reviews: u32,
    /// Preparation time shown on the menu card, in minutes.
    pub prep_minutes: u32,
    pub discount_percent: Option<u8>,
    pub image: Option<String>,
}

/// A menu category, e.g. "Drinks" or "Snacks".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: Option<String>,
}
