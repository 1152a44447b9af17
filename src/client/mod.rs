//! Client Envelope Module
//!
//! This module contains the request/response shapes every store operation
//! speaks:
//! - Request options (parameters plus the `throw_on_error` flag)
//! - The result wrapper carrying either data or an error
//! - The single-page list shape

pub mod helpers;
pub mod models;

// Re-export commonly used types for convenience
pub use models::{ApiError, ApiResult, Body, ErrorCode, IdPath, Options, Page};
