//! AWS Lambda integration: request conversion, dispatch and start-up wiring.

use crate::config::{AwsConfig, ServiceConfig};
use crate::handlers::ProductHandlers;
use crate::id::IdGenerator;
use crate::request::{ProductRequest, RequestBody};
use crate::response::{ApiResponse, build_response};
use crate::routes::{Operation, Route};
use crate::store::RecordStore;
use crate::store::dynamo::DynamoRecordStore;

use lambda_http::{Body, Error, Request, RequestExt, Response};
use serde_json::json;

/// Converts a `lambda_http` request into the handler request model.
pub fn product_request(event: Request) -> ProductRequest {
    let path_id = event.path_parameters().first("id").map(str::to_string);
    let body = match event.into_body() {
        Body::Empty => RequestBody::Absent,
        Body::Text(text) => RequestBody::Text(text),
        Body::Binary(bytes) => RequestBody::Text(String::from_utf8_lossy(&bytes).into_owned()),
    };
    ProductRequest { path_id, body }
}

/// Handles `event` with the handler for `operation`, for functions bound to one route.
pub async fn function_handler<S: RecordStore, G: IdGenerator>(
    handlers: &ProductHandlers<S, G>,
    operation: Operation,
    event: Request,
) -> Result<Response<Body>, Error> {
    let response = handlers.dispatch(operation, product_request(event)).await;
    Ok(response.try_into()?)
}

/// Routes `event` through the route table, for a single function serving every route.
pub async fn router_handler<S: RecordStore, G: IdGenerator>(
    handlers: &ProductHandlers<S, G>,
    event: Request,
) -> Result<Response<Body>, Error> {
    let response = route(handlers, event).await;
    Ok(response.try_into()?)
}

async fn route<S: RecordStore, G: IdGenerator>(
    handlers: &ProductHandlers<S, G>,
    event: Request,
) -> ApiResponse {
    let path = match event.raw_http_path() {
        "" => event.uri().path(),
        raw => raw,
    };
    match Route::resolve(event.method(), path) {
        Route::Matched { operation, id } => {
            let mut request = product_request(event);
            if request.path_id.is_none() {
                request.path_id = id;
            }
            handlers.dispatch(operation, request).await
        }
        Route::MethodNotAllowed => build_response(405, &json!({ "message": "Method not allowed" })),
        Route::NotFound => build_response(404, &json!({ "message": "Route not found" })),
    }
}

/// Builds DynamoDB-backed handlers from the process environment.
pub async fn dynamo_handlers() -> Result<ProductHandlers<DynamoRecordStore>, Error> {
    let config = ServiceConfig::from_env()?;
    let aws_config = AwsConfig::from_env();
    let client = aws_config.dynamodb_client().await;
    tracing::info!(
        table = %config.table_name,
        primary_key = %config.primary_key,
        endpoint = ?aws_config.endpoint_url,
        "product handlers configured"
    );
    let store = DynamoRecordStore::new(client, config.clone());
    Ok(ProductHandlers::new(store, config))
}

/// Runs a Lambda function serving `operation` until the runtime shuts down.
pub async fn run_function(operation: Operation) -> Result<(), Error> {
    lambda_http::tracing::init_default_subscriber();
    let handlers = dynamo_handlers().await?;
    lambda_http::run(lambda_http::service_fn(|event| {
        function_handler(&handlers, operation, event)
    }))
    .await
}
