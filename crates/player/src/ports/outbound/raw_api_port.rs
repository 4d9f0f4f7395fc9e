//! Raw API Port - Object-safe HTTP boundary
//!
//! Services store the adapter behind `Arc<dyn RawApiPort>` and do their own
//! typed (de)serialization on top of `serde_json::Value`.

use serde_json::Value;

use super::ApiError;

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait::async_trait]
pub trait RawApiPort: Send + Sync {
    /// GET a JSON document; `Ok(None)` when the server answers 404.
    async fn get_optional_json(&self, path: &str) -> Result<Option<Value>, ApiError>;

    /// POST a JSON body and return the JSON response (Null for empty bodies).
    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;
}
