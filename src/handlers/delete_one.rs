use crate::handlers::{ProductHandlers, bad_request, internal_error};
use crate::id::IdGenerator;
use crate::request::ProductRequest;
use crate::response::{ApiResponse, build_response};
use crate::store::RecordStore;

use serde_json::json;

/// Message returned once the record is gone.
pub const DELETED: &str = "Product deleted";

/// Message returned when the delete fails.
pub const DELETE_FAILED: &str = "Delete product failed";

impl<S: RecordStore, G: IdGenerator> ProductHandlers<S, G> {
    /// `DELETE /products/{id}`: idempotent removal.
    pub async fn delete_one(&self, request: ProductRequest) -> ApiResponse {
        let id = match request.require_path_id() {
            Ok(id) => id,
            Err(error) => return bad_request(error),
        };
        match self.store.delete(id).await {
            Ok(()) => {
                tracing::debug!(%id, "deleted product");
                build_response(200, &json!({ "message": DELETED }))
            }
            Err(error) => {
                tracing::error!(%error, %id, "delete product failed");
                internal_error(DELETE_FAILED, error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::handlers::tests::{FailingStore, body, handlers, seeded};
    use crate::request::ProductRequest;

    use serde_json::json;

    #[tokio::test]
    async fn test_delete_existing_and_absent() {
        let handlers = seeded(&[json!({"itemId": "a"})]).await;
        let first = handlers.delete_one(ProductRequest::with_path_id("a")).await;
        let second = handlers.delete_one(ProductRequest::with_path_id("a")).await;
        assert_eq!(first, second);
        assert_eq!(first.status_code, 200);
        assert_eq!(body(&first), json!({"message": super::DELETED}));
        assert!(handlers.store().is_empty());
    }

    #[tokio::test]
    async fn test_delete_requires_id() {
        let response = handlers().delete_one(ProductRequest::empty()).await;
        assert_eq!(response.status_code, 400);
    }

    #[tokio::test]
    async fn test_delete_store_failure() {
        let response = FailingStore::handlers()
            .delete_one(ProductRequest::with_path_id("a"))
            .await;
        assert_eq!(response.status_code, 500);
        assert_eq!(body(&response)["message"], json!(super::DELETE_FAILED));
    }
}
