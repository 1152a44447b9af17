//! Client Envelope Models
//!
//! Request options, result wrapper and list page shapes shared by every
//! store operation. They mirror the calling convention of a generated
//! HTTP client so the store can stand in for one.

use serde::{Deserialize, Serialize};

// =============================================================================
// Constants
// =============================================================================

/// Placeholder URL attached to every request metadata block
pub const PLACEHOLDER_URL: &str = "https://example.com";

// =============================================================================
// Request Options
// =============================================================================

/// Per-call options: the operation's parameters plus error handling mode
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Options<T> {
    /// Query, path or body section of the request
    #[serde(flatten)]
    pub params: T,

    /// Raise not-found as a fault instead of returning it in the envelope
    #[serde(default)]
    pub throw_on_error: bool,
}

impl<T> Options<T> {
    pub fn new(params: T) -> Self {
        Self {
            params,
            throw_on_error: false,
        }
    }

    /// Opts this call into raising recoverable errors
    pub fn throw_on_error(mut self) -> Self {
        self.throw_on_error = true;
        self
    }
}

/// Path section for lookups by id
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IdPath {
    pub id: String,
}

impl IdPath {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Body section for create operations; `None` means no body was sent
#[derive(Debug, Clone, Deserialize)]
pub struct Body<B> {
    pub body: Option<B>,
}

impl<B> Default for Body<B> {
    fn default() -> Self {
        Self { body: None }
    }
}

impl<B> Body<B> {
    pub fn new(body: B) -> Self {
        Self { body: Some(body) }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

// =============================================================================
// Response Envelope
// =============================================================================

/// Error codes surfaced in the envelope's error slot
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorCode {
    NotFound,
}

/// Tagged error payload, serialized as `{"error": "not-found"}`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ApiError {
    pub error: ErrorCode,
}

/// Placeholder request metadata
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RequestMeta {
    pub method: &'static str,
    pub url: &'static str,
}

/// Placeholder response metadata
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ResponseMeta {
    pub status: u16,
}

/// Result wrapper holding exactly one of `data` or `error`
#[derive(Debug, Clone, Serialize)]
pub struct ApiResult<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ApiError>,

    pub request: RequestMeta,
    pub response: ResponseMeta,
}

impl<T> ApiResult<T> {
    pub(crate) fn from_data(data: T, method: &'static str) -> Self {
        Self {
            data: Some(data),
            error: None,
            request: RequestMeta {
                method,
                url: PLACEHOLDER_URL,
            },
            response: ResponseMeta { status: 200 },
        }
    }

    pub(crate) fn from_error(error: ApiError, method: &'static str) -> Self {
        Self {
            data: None,
            error: Some(error),
            request: RequestMeta {
                method,
                url: PLACEHOLDER_URL,
            },
            response: ResponseMeta { status: 200 },
        }
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }

    pub fn is_ok(&self) -> bool {
        self.data.is_some()
    }
}

/// A single page of results. Pagination is not implemented, so `next` is
/// always `null`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next: Option<String>,
}

impl<T> Page<T> {
    pub fn single(items: Vec<T>) -> Self {
        Self { items, next: None }
    }
}
