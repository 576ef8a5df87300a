//! Catalog snapshot and slide selection types.
//!
//! The catalog (groups with products) is owned by an external data source;
//! the engine consumes an immutable snapshot of it per render cycle and
//! never mutates it.

use serde::{Deserialize, Serialize};

/// Identifier of a product in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub String);

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        ProductId(s.to_string())
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        ProductId(s)
    }
}

/// Identifier of a product group in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupId(pub String);

impl From<&str> for GroupId {
    fn from(s: &str) -> Self {
        GroupId(s.to_string())
    }
}

impl From<String> for GroupId {
    fn from(s: String) -> Self {
        GroupId(s)
    }
}

/// A single product as it appears on the board.
///
/// The price is display data consumed by the rendering layer; layout only
/// counts products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub price: Option<f64>,
}

impl Product {
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: None,
        }
    }

    /// Set the display price.
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }
}

/// A product group with its products, as delivered by the catalog source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductGroup {
    pub id: GroupId,
    pub name: String,
    pub products: Vec<Product>,
}

impl ProductGroup {
    pub fn new(id: impl Into<GroupId>, name: impl Into<String>, products: Vec<Product>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            products,
        }
    }
}

/// Sort position used for selections that carry no explicit display order.
pub const DEFAULT_DISPLAY_ORDER: u32 = 999;

/// One group's selection within a menu slide: which of its products are
/// shown and where the group sorts on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupSelection {
    pub group_id: GroupId,
    /// Ids of the products to show; unique, membership only (products keep
    /// catalog order on the board).
    pub product_ids: Vec<ProductId>,
    /// Ascending sort position of the group; missing sorts last
    /// ([`DEFAULT_DISPLAY_ORDER`]).
    #[serde(default)]
    pub display_order: Option<u32>,
}

impl GroupSelection {
    pub fn new(group_id: impl Into<GroupId>, product_ids: Vec<ProductId>) -> Self {
        Self {
            group_id: group_id.into(),
            product_ids,
            display_order: None,
        }
    }

    /// Set the display order.
    pub fn with_display_order(mut self, order: u32) -> Self {
        self.display_order = Some(order);
        self
    }
}

/// A menu-board slide: the group selections to lay out plus the product
/// whose image fills the slide background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuSlide {
    pub slide_id: String,
    pub group_selections: Vec<GroupSelection>,
    #[serde(default)]
    pub background_product_id: Option<ProductId>,
}

impl MenuSlide {
    pub fn new(slide_id: impl Into<String>, group_selections: Vec<GroupSelection>) -> Self {
        Self {
            slide_id: slide_id.into(),
            group_selections,
            background_product_id: None,
        }
    }

    /// Set the background product.
    pub fn with_background(mut self, id: impl Into<ProductId>) -> Self {
        self.background_product_id = Some(id.into());
        self
    }
}
