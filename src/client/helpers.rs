//! Client Envelope Helpers
//!
//! Small constructors used by store operations to build their replies.

use super::models::{ApiError, ApiResult, ErrorCode};
use crate::error::{StoreError, StoreResult};

/// Wraps a successful payload in the result envelope.
pub fn as_result<T>(data: T, method: &'static str) -> ApiResult<T> {
    ApiResult::from_data(data, method)
}

/// Wraps an error payload in the result envelope.
pub fn as_error<T>(error: ApiError, method: &'static str) -> ApiResult<T> {
    ApiResult::from_error(error, method)
}

/// Builds the not-found reply for a lookup.
///
/// Returns the error in the envelope, or raises it as a fault when the caller
/// set `throw_on_error`.
pub fn not_found<T>(
    throw_on_error: bool,
    resource: &'static str,
    id: &str,
    method: &'static str,
) -> StoreResult<ApiResult<T>> {
    tracing::warn!(resource, id, "lookup missed");
    if throw_on_error {
        return Err(StoreError::NotFound {
            resource,
            id: id.to_string(),
        });
    }
    Ok(as_error(
        ApiError {
            error: ErrorCode::NotFound,
        },
        method,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelopes_hold_one_slot() {
        let ok = as_result(json!({"id": "a"}), "GET");
        let value = serde_json::to_value(&ok).unwrap();
        assert_eq!(value["data"]["id"], "a");
        assert!(value.get("error").is_none());
        assert_eq!(value["request"]["url"], "https://example.com");
        assert_eq!(value["response"]["status"], 200);

        let missing: ApiResult<()> = not_found(false, "order", "x", "GET").unwrap();
        let value = serde_json::to_value(&missing).unwrap();
        assert_eq!(value["error"], json!({"error": "not-found"}));
        assert!(value.get("data").is_none());
    }

    #[test]
    fn test_not_found_raises_when_asked() {
        let raised = not_found::<()>(true, "order", "x", "GET").unwrap_err();
        assert_eq!(
            raised,
            StoreError::NotFound {
                resource: "order",
                id: "x".into()
            }
        );
    }
}
