//! Mock Storefront Module
//!
//! This module contains the in-memory storefront, including:
//! - Domain models (products, collections, customers, orders, inputs)
//! - Seed catalogue
//! - Business logic helpers (filtering, sorting, address defaults)
//! - Store state and order numbering
//! - Query and create operations

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod seed;
pub mod state;

// Re-export commonly used types for convenience
pub use handlers::DEFAULT_CUSTOMER_ID;
pub use state::{
    FixedOrderNumbering, OrderIdMode, OrderNumbering, SequentialOrderNumbering, SharedStore,
    Store, UnknownOrderIdMode,
};
