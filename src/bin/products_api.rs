//! Serves every product route from a single function.

use inventory_crud::lambda;

use lambda_http::{Error, run, service_fn, tracing};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();
    let handlers = lambda::dynamo_handlers().await?;
    run(service_fn(|event| lambda::router_handler(&handlers, event))).await
}
