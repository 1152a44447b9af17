//! Storefront Domain Models
//!
//! This module contains the catalogue, customer and order records held by
//! the mock store, together with the inputs accepted by its operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

pub type Timestamp = DateTime<Utc>;

// =============================================================================
// Catalogue Models
// =============================================================================

/// A purchasable configuration of a product
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Variant {
    /// Unique within the owning product
    pub id: String,

    pub name: String,

    pub stock: u32,

    /// Option name to value, e.g. `Size` -> `M`
    #[serde(default)]
    pub options: BTreeMap<String, String>,
}

/// A catalogue product. Prices are integer minor units.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub tagline: String,

    #[serde(default)]
    pub description: String,

    pub price: i64,

    #[serde(default)]
    pub discount: i64,

    pub image_url: String,

    #[serde(default)]
    pub images: Vec<String>,

    #[serde(default)]
    pub collection_ids: Vec<String>,

    /// Never empty
    pub variants: Vec<Variant>,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

impl Product {
    pub fn in_collection(&self, collection_id: &str) -> bool {
        self.collection_ids.iter().any(|id| id == collection_id)
    }

    pub fn variant(&self, variant_id: &str) -> Option<&Variant> {
        self.variants.iter().find(|v| v.id == variant_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: String,
    pub name: String,
    pub description: String,
    pub slug: String,
    pub image_url: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

/// A collection as returned by a single lookup. `products` is never filled.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CollectionWithProducts {
    #[serde(flatten)]
    pub collection: Collection,

    pub products: Vec<Product>,
}

// =============================================================================
// Product Query
// =============================================================================

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Price,
    Name,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// `ids` filter, accepted as a single id or a list
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum IdFilter {
    One(String),
    Many(Vec<String>),
}

impl IdFilter {
    pub fn contains(&self, id: &str) -> bool {
        match self {
            IdFilter::One(one) => one == id,
            IdFilter::Many(many) => many.iter().any(|m| m == id),
        }
    }
}

impl From<&str> for IdFilter {
    fn from(id: &str) -> Self {
        IdFilter::One(id.to_string())
    }
}

impl From<Vec<&str>> for IdFilter {
    fn from(ids: Vec<&str>) -> Self {
        IdFilter::Many(ids.into_iter().map(String::from).collect())
    }
}

/// Query section of `list_products`
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuery {
    pub collection_id: Option<String>,
    pub ids: Option<IdFilter>,
    pub sort: Option<SortKey>,
    pub order: Option<SortOrder>,
}

impl ProductQuery {
    pub fn in_collection(mut self, collection_id: impl Into<String>) -> Self {
        self.collection_id = Some(collection_id.into());
        self
    }

    pub fn with_ids(mut self, ids: impl Into<IdFilter>) -> Self {
        self.ids = Some(ids.into());
        self
    }

    pub fn sorted(mut self, sort: SortKey, order: SortOrder) -> Self {
        self.sort = Some(sort);
        self.order = Some(order);
        self
    }
}

// =============================================================================
// Customer Models
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerInput {
    pub id: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,

    /// Any other caller fields, passed through unchanged
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,

    #[serde(flatten)]
    pub extra: HashMap<String, Value>,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

// =============================================================================
// Order Models
// =============================================================================

/// Address as supplied by the caller; every field is optional
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressInput {
    pub line1: Option<String>,
    pub line2: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub province: Option<String>,
    pub postal: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Normalized address stored on an order
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub line1: String,
    pub line2: String,
    pub city: String,
    pub country: String,
    pub province: String,
    pub postal: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemInput {
    pub product_variant_id: String,

    pub quantity: u32,

    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl LineItemInput {
    pub fn new(product_variant_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            product_variant_id: product_variant_id.into(),
            quantity,
            extra: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderInput {
    pub line_items: Vec<LineItemInput>,
    pub billing_address: Option<AddressInput>,
    pub shipping_address: Option<AddressInput>,

    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// A variant joined with its owning product at order time
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProductVariant {
    #[serde(flatten)]
    pub variant: Variant,

    pub product: Product,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: String,
    pub product_variant_id: String,
    pub quantity: u32,

    #[serde(flatten)]
    pub extra: HashMap<String, Value>,

    pub product_variant: ProductVariant,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub number: u64,
    pub line_items: Vec<LineItem>,
    pub billing_address: Address,
    pub shipping_address: Address,

    #[serde(flatten)]
    pub extra: HashMap<String, Value>,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}
