use crate::handlers::{ProductHandlers, bad_request, internal_error};
use crate::id::IdGenerator;
use crate::request::ProductRequest;
use crate::response::{ApiResponse, build_response};
use crate::store::RecordStore;

use serde_json::{Value, json};

/// Message returned with the stored record.
pub const CREATED: &str = "Product created";

/// Message returned when the put fails.
pub const CREATE_FAILED: &str = "Create product failed";

impl<S: RecordStore, G: IdGenerator> ProductHandlers<S, G> {
    /// `POST /products`: stores the body under a freshly generated id.
    ///
    /// Any primary-key value supplied by the caller is replaced.
    pub async fn create(&self, request: ProductRequest) -> ApiResponse {
        let mut record = match request.body.into_record() {
            Ok(record) => record,
            Err(error) => return bad_request(error),
        };
        let id = self.ids.generate();
        record.insert(self.config.primary_key.clone(), Value::String(id.clone()));
        match self.store.put(record.clone()).await {
            Ok(()) => {
                tracing::debug!(%id, "created product");
                build_response(201, &json!({ "message": CREATED, "product": record }))
            }
            Err(error) => {
                tracing::error!(%error, %id, "create product failed");
                internal_error(CREATE_FAILED, error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CREATE_FAILED, CREATED};
    use crate::handlers::tests::{FailingStore, body, handlers};
    use crate::request::{ProductRequest, RequestBody};
    use crate::store::RecordStore;

    use rstest::rstest;
    use serde_json::{Value, json};

    #[rstest]
    #[case::text(RequestBody::Text(r#"{"name":"widget","itemId":"mine"}"#.to_string()))]
    #[case::structured(RequestBody::Structured(json!({"name": "widget", "itemId": "mine"})))]
    #[tokio::test]
    async fn test_create_overwrites_primary_key(#[case] request_body: RequestBody) {
        let handlers = handlers();
        let response = handlers
            .create(ProductRequest::with_body(request_body))
            .await;
        assert_eq!(response.status_code, 201);
        let created = body(&response);
        assert_eq!(created["message"], json!(CREATED));
        assert_eq!(created["product"], json!({"name": "widget", "itemId": "fixed-id-0"}));
        let stored = handlers.store().get_one("fixed-id-0").await.unwrap().unwrap();
        assert_eq!(stored.get("itemId"), Some(&json!("fixed-id-0")));
        assert_eq!(handlers.store().get_one("mine").await.unwrap(), None);
    }

    #[rstest]
    #[case::absent(RequestBody::Absent)]
    #[case::empty_text(RequestBody::Text(String::new()))]
    #[case::malformed(RequestBody::Text("{".to_string()))]
    #[case::not_an_object(RequestBody::Structured(json!(["a"])))]
    #[tokio::test]
    async fn test_create_rejects_body(#[case] request_body: RequestBody) {
        let handlers = handlers();
        let response = handlers
            .create(ProductRequest::with_body(request_body))
            .await;
        assert_eq!(response.status_code, 400);
        assert!(handlers.store().is_empty());
    }

    #[tokio::test]
    async fn test_create_missing_body_message() {
        let response = handlers().create(ProductRequest::empty()).await;
        assert_eq!(
            body(&response),
            json!({"message": "invalid request, you are missing the parameter body"})
        );
    }

    #[tokio::test]
    async fn test_create_store_failure_echoes_error() {
        let response = FailingStore::handlers()
            .create(ProductRequest::with_body(RequestBody::Structured(
                json!({"name": "widget"}),
            )))
            .await;
        assert_eq!(response.status_code, 500);
        let failure = body(&response);
        assert_eq!(failure["message"], json!(CREATE_FAILED));
        assert!(matches!(&failure["errorMsg"], Value::String(message) if message.contains("unavailable")));
    }
}
