//! Menu structures: persisted rows and the remote catalog document.

use serde::{Deserialize, Serialize};

/// A persisted menu row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Storage-assigned, never reused.
    pub id: i64,
    pub name: String,
    /// Two-decimal text form, e.g. "12.50".
    pub price: String,
    pub description: String,
    /// Image filename, see [`crate::image_url`].
    pub image: String,
    pub category: String,
}

/// A menu item before it has been assigned an id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMenuItem {
    pub name: String,
    pub price: String,
    pub description: String,
    pub image: String,
    pub category: String,
}

/// The remote catalog document: `{ "menu": [ ... ] }`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatalogPayload {
    pub menu: Vec<CatalogEntry>,
}

/// One entry of the remote catalog. `price` arrives as a number.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub price: f64,
    pub description: String,
    pub image: String,
    pub category: String,
}

impl CatalogEntry {
    /// Convert into an insertable item, fixing the price to two decimals.
    pub fn into_new_item(self) -> NewMenuItem {
        NewMenuItem {
            name: self.name,
            price: format!("{:.2}", self.price),
            description: self.description,
            image: self.image,
            category: self.category,
        }
    }
}

impl CatalogPayload {
    /// Parse a catalog document from JSON text.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Flatten into insertable items, preserving document order.
    pub fn into_new_items(self) -> Vec<NewMenuItem> {
        self.menu
            .into_iter()
            .map(CatalogEntry::into_new_item)
            .collect()
    }
}

impl From<MenuItem> for NewMenuItem {
    fn from(item: MenuItem) -> Self {
        Self {
            name: item.name,
            price: item.price,
            description: item.description,
            image: item.image,
            category: item.category,
        }
    }
}
