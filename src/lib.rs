//! Mock Storefront Library
//!
//! This library provides an in-memory stand-in for a remote ecommerce API:
//! seeded products and collections, customer and order creation, and a
//! price formatter for minor-unit amounts.

// Domain modules
pub mod client;
pub mod currency;
pub mod store;

// Infrastructure
pub mod config;
pub mod error;
