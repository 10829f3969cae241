//! CRUD handlers.
//!
//! Each handler validates one [`ProductRequest`], issues at most one store call and turns
//! every outcome, failures included, into an [`ApiResponse`].

/// Create handler.
pub mod create;

/// Delete-one handler.
pub mod delete_one;

/// Get-one handler.
pub mod get_one;

/// List handler.
pub mod list;

/// Update-one handler.
pub mod update_one;

use crate::config::ServiceConfig;
use crate::id::{IdGenerator, RandomIdGenerator};
use crate::request::{ProductRequest, RequestError};
use crate::response::{ApiResponse, build_response};
use crate::routes::Operation;
use crate::store::RecordStore;

use serde_json::json;

/// Handlers sharing one store, one configuration and one identifier source.
#[derive(Debug)]
pub struct ProductHandlers<S, G = RandomIdGenerator> {
    store: S,
    config: ServiceConfig,
    ids: G,
}

impl<S: RecordStore> ProductHandlers<S> {
    /// Creates handlers that draw new identifiers from [`RandomIdGenerator`].
    pub fn new(store: S, config: ServiceConfig) -> Self {
        Self::with_id_generator(store, config, RandomIdGenerator)
    }
}

impl<S: RecordStore, G: IdGenerator> ProductHandlers<S, G> {
    /// Creates handlers with an explicit identifier source.
    pub fn with_id_generator(store: S, config: ServiceConfig, ids: G) -> Self {
        Self { store, config, ids }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The process configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Runs the handler for `operation`.
    pub async fn dispatch(&self, operation: Operation, request: ProductRequest) -> ApiResponse {
        match operation {
            Operation::List => self.list().await,
            Operation::Create => self.create(request).await,
            Operation::GetOne => self.get_one(request).await,
            Operation::UpdateOne => self.update_one(request).await,
            Operation::DeleteOne => self.delete_one(request).await,
        }
    }
}

fn bad_request(error: RequestError) -> ApiResponse {
    tracing::debug!(%error, "request rejected");
    build_response(400, &json!({ "message": error.to_string() }))
}

fn internal_error(message: &str, error: impl std::fmt::Display) -> ApiResponse {
    build_response(
        500,
        &json!({
            "message": message,
            "errorMsg": error.to_string(),
        }),
    )
}
