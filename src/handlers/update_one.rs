use crate::error::StoreError;
use crate::handlers::{ProductHandlers, bad_request, internal_error};
use crate::id::IdGenerator;
use crate::request::{ProductRequest, RequestError};
use crate::response::{ApiResponse, build_response};
use crate::store::{Record, RecordStore};

use serde_json::json;

/// Message returned when an attribute name is a reserved word of the store.
pub const RESERVED_RESPONSE: &str = "Error: You're using AWS reserved keywords as attributes";

/// Message returned for any other update failure.
pub const DYNAMODB_EXECUTION_ERROR: &str =
    "Error: Execution update, caused a Dynamodb error, please take a look at your CloudWatch Logs.";

impl<S: RecordStore, G: IdGenerator> ProductHandlers<S, G> {
    /// `PATCH /products/{id}`: assigns the body's attributes on the stored record.
    pub async fn update_one(&self, request: ProductRequest) -> ApiResponse {
        let (id, attributes) = match self.validate_update(request) {
            Ok(validated) => validated,
            Err(error) => return bad_request(error),
        };
        match self.store.update_attributes(&id, attributes).await {
            Ok(updated) => {
                tracing::debug!(%id, attributes = updated.len(), "updated product");
                build_response(
                    200,
                    &json!({
                        "Operation": "UPDATE",
                        "Message": "SUCCESS",
                        "UpdatedAttributes": { "Attributes": updated },
                    }),
                )
            }
            Err(error) => {
                tracing::error!(%error, %id, "update product failed");
                let message = match &error {
                    StoreError::ReservedKeyword(_) => RESERVED_RESPONSE,
                    _ => DYNAMODB_EXECUTION_ERROR,
                };
                internal_error(message, error)
            }
        }
    }

    // body, then path id, then attribute checks
    fn validate_update(&self, request: ProductRequest) -> Result<(String, Record), RequestError> {
        if !request.body.is_present() {
            return Err(RequestError::MissingBody);
        }
        let id = request.require_path_id()?.to_string();
        let attributes = request.body.into_record()?;
        if attributes.is_empty() {
            return Err(RequestError::NoAttributes);
        }
        if attributes.contains_key(&self.config.primary_key) {
            return Err(RequestError::PrimaryKeyUpdate(
                self.config.primary_key.clone(),
            ));
        }
        if attributes.keys().any(String::is_empty) {
            return Err(RequestError::EmptyAttributeName);
        }
        Ok((id, attributes))
    }
}
