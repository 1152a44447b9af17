//! Storefront State Management
//!
//! This module owns the store's tables and the strategy used to number new
//! orders.

use super::{
    models::{Collection, Order, Product},
    seed,
};
use chrono::Utc;
use dashmap::DashMap;
use std::str::FromStr;
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};
use thiserror::Error;
use uuid::Uuid;

// =============================================================================
// Order Numbering
// =============================================================================

/// Order id used by the fixed numbering strategy
pub const FIXED_ORDER_ID: &str = "dk3fd0sak3d";
/// Order number used by the fixed numbering strategy, and the first
/// sequential number
pub const FIRST_ORDER_NUMBER: u64 = 1001;

/// Hands out the id and display number for each created order
pub trait OrderNumbering: Send + Sync {
    fn next(&self) -> (String, u64);
}

/// Every order gets the same id and number. Repeated creates overwrite
/// each other in the order table.
#[derive(Debug, Clone)]
pub struct FixedOrderNumbering {
    pub id: String,
    pub number: u64,
}

impl Default for FixedOrderNumbering {
    fn default() -> Self {
        Self {
            id: FIXED_ORDER_ID.to_string(),
            number: FIRST_ORDER_NUMBER,
        }
    }
}

impl OrderNumbering for FixedOrderNumbering {
    fn next(&self) -> (String, u64) {
        (self.id.clone(), self.number)
    }
}

/// Random ids with monotonically increasing numbers
#[derive(Debug)]
pub struct SequentialOrderNumbering {
    next_number: AtomicU64,
}

impl Default for SequentialOrderNumbering {
    fn default() -> Self {
        Self::starting_at(FIRST_ORDER_NUMBER)
    }
}

impl SequentialOrderNumbering {
    pub fn starting_at(number: u64) -> Self {
        Self {
            next_number: AtomicU64::new(number),
        }
    }
}

impl OrderNumbering for SequentialOrderNumbering {
    fn next(&self) -> (String, u64) {
        let number = self.next_number.fetch_add(1, Ordering::Relaxed);
        (Uuid::new_v4().simple().to_string(), number)
    }
}

/// Selects a numbering strategy by name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrderIdMode {
    #[default]
    Fixed,
    Sequential,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown order id mode {0:?}, expected \"fixed\" or \"sequential\"")]
pub struct UnknownOrderIdMode(pub String);

impl FromStr for OrderIdMode {
    type Err = UnknownOrderIdMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fixed" => Ok(OrderIdMode::Fixed),
            "sequential" => Ok(OrderIdMode::Sequential),
            _ => Err(UnknownOrderIdMode(s.to_string())),
        }
    }
}

impl OrderIdMode {
    pub fn numbering(self) -> Box<dyn OrderNumbering> {
        match self {
            OrderIdMode::Fixed => Box::new(FixedOrderNumbering::default()),
            OrderIdMode::Sequential => Box::new(SequentialOrderNumbering::default()),
        }
    }
}

// =============================================================================
// Store State
// =============================================================================

/// Shared store handle that can be safely passed between tasks
pub type SharedStore = Arc<Store>;

/// In-memory storefront tables
pub struct Store {
    /// Seed products, in declaration order
    pub products: Vec<Product>,

    /// Seed collections, in declaration order
    pub collections: Vec<Collection>,

    /// Created orders keyed by order id.
    /// DashMap allows concurrent access without external Mutexes.
    pub orders: DashMap<String, Order>,

    pub(crate) numbering: Box<dyn OrderNumbering>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Creates a seeded store that numbers every order the same way
    pub fn new() -> Self {
        Self::with_numbering(Box::new(FixedOrderNumbering::default()))
    }

    /// Creates a seeded store with the given order numbering strategy
    pub fn with_numbering(numbering: Box<dyn OrderNumbering>) -> Self {
        let now = Utc::now();
        let products = seed::products(now);
        let collections = seed::collections(now);

        tracing::debug!(
            products = products.len(),
            collections = collections.len(),
            "seeded storefront"
        );

        Self {
            products,
            collections,
            orders: DashMap::new(),
            numbering,
        }
    }

    pub fn shared(self) -> SharedStore {
        Arc::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_numbering_repeats() {
        let fixed = FixedOrderNumbering::default();
        assert_eq!(fixed.next(), ("dk3fd0sak3d".to_string(), 1001));
        assert_eq!(fixed.next(), fixed.next());
    }

    #[test]
    fn test_sequential_numbering_advances() {
        let sequential = SequentialOrderNumbering::default();
        let (first_id, first) = sequential.next();
        let (second_id, second) = sequential.next();
        assert_eq!(first, 1001);
        assert_eq!(second, 1002);
        assert_ne!(first_id, second_id);
    }

    #[test]
    fn test_order_id_mode_from_str() {
        assert_eq!("fixed".parse::<OrderIdMode>(), Ok(OrderIdMode::Fixed));
        assert_eq!("Sequential".parse::<OrderIdMode>(), Ok(OrderIdMode::Sequential));
        assert_eq!(
            "random".parse::<OrderIdMode>(),
            Err(UnknownOrderIdMode("random".into()))
        );
    }

    #[test]
    fn test_new_store_is_seeded_and_empty_of_orders() {
        let store = Store::new();
        assert_eq!(store.products.len(), 9);
        assert_eq!(store.collections.len(), 3);
        assert!(store.orders.is_empty());
    }
}
