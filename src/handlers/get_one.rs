use crate::handlers::{ProductHandlers, bad_request, internal_error};
use crate::id::IdGenerator;
use crate::request::ProductRequest;
use crate::response::{ApiResponse, build_response};
use crate::store::RecordStore;

use serde_json::json;

/// Message returned when no record is stored under the requested id.
pub const NOT_FOUND: &str = "Product not found";

/// Message returned when the lookup fails.
pub const GET_FAILED: &str = "Get product failed";

impl<S: RecordStore, G: IdGenerator> ProductHandlers<S, G> {
    /// `GET /products/{id}`: the stored record, or `404`.
    pub async fn get_one(&self, request: ProductRequest) -> ApiResponse {
        let id = match request.require_path_id() {
            Ok(id) => id,
            Err(error) => return bad_request(error),
        };
        match self.store.get_one(id).await {
            Ok(Some(record)) => build_response(200, &record),
            Ok(None) => build_response(404, &json!({ "message": NOT_FOUND })),
            Err(error) => {
                tracing::error!(%error, %id, "get product failed");
                internal_error(GET_FAILED, error)
            }
        }
    }
}
