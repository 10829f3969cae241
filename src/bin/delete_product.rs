//! Deletes one product.

use inventory_crud::lambda;
use inventory_crud::routes::Operation;

#[tokio::main]
async fn main() -> Result<(), lambda_http::Error> {
    lambda::run_function(Operation::DeleteOne).await
}
