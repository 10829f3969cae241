use crate::handlers::{ProductHandlers, internal_error};
use crate::id::IdGenerator;
use crate::response::{ApiResponse, build_response};
use crate::store::RecordStore;

use serde_json::json;

/// Message returned when the scan fails.
pub const LIST_FAILED: &str = "List products failed";

impl<S: RecordStore, G: IdGenerator> ProductHandlers<S, G> {
    /// `GET /products`: every stored record, in store order.
    pub async fn list(&self) -> ApiResponse {
        match self.store.scan_all().await {
            Ok(items) => {
                tracing::debug!(count = items.len(), "listed products");
                build_response(200, &json!({ "items": items }))
            }
            Err(error) => {
                tracing::error!(%error, "list products failed");
                internal_error(LIST_FAILED, error)
            }
        }
    }
}
