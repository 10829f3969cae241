#![deny(missing_docs)]

//! # Inventory CRUD
//!
//! A serverless product service: five HTTP handlers over a single DynamoDB table, keyed by one
//! string partition key.
//!
//! ## Overview
//!
//! Requests arrive through an API gateway and reach one of five handlers:
//! - `GET /products` lists every product
//! - `POST /products` creates a product under a freshly generated identifier
//! - `GET /products/{id}` fetches one product
//! - `PATCH /products/{id}` assigns the attributes in the body
//! - `DELETE /products/{id}` removes one product
//!
//! Every outcome, failures included, is answered with a JSON body and a status code. The
//! handlers talk to storage through [`store::RecordStore`], so they run the same against
//! DynamoDB and against the in-memory store used by the tests.
//!
//! ## Quick Example
//!
//! ```no_run
//! use inventory_crud::config::ServiceConfig;
//! use inventory_crud::handlers::ProductHandlers;
//! use inventory_crud::request::{ProductRequest, RequestBody};
//! use inventory_crud::routes::Operation;
//! use inventory_crud::store::memory::InMemoryRecordStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServiceConfig::new("dev-items", "itemId")?;
//! let handlers = ProductHandlers::new(InMemoryRecordStore::new("itemId"), config);
//! let response = handlers
//!     .dispatch(
//!         Operation::Create,
//!         ProductRequest::with_body(RequestBody::Text(r#"{"name":"widget"}"#.to_string())),
//!     )
//!     .await;
//! assert_eq!(response.status_code, 201);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`mod@common`], [`mod@read`] and [`mod@write`] - typed DynamoDB operations
//! - [`mod@store`] - the record store seam and its two implementations
//! - [`mod@handlers`] - the five CRUD handlers
//! - [`mod@lambda`] - the Lambda runtime adapter

/// Common utilities for keys, conditions and expression placeholders.
pub mod common;

/// Process and AWS configuration read from the environment.
pub mod config;

/// Error types.
pub mod error;

/// CRUD handlers over a [`store::RecordStore`].
pub mod handlers;

/// Identifier generation for new products.
pub mod id;

/// Lambda runtime adapter.
pub mod lambda;

/// Deployment description of the table, functions and routes.
pub mod provisioning;

/// Read operations for retrieving data from DynamoDB tables.
///
/// This module provides operations for:
/// - Getting individual items by key
/// - Scanning entire tables
pub mod read;

/// Transport-independent request model.
pub mod request;

/// Response envelope shared by every handler.
pub mod response;

/// Verb and path routing.
pub mod routes;

/// Record storage.
pub mod store;

/// Write operations for modifying data in DynamoDB tables.
///
/// This module provides operations for:
/// - Putting new items or replacing existing ones
/// - Assigning attributes of existing items
/// - Deleting items by key
pub mod write;
