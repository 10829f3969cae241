//! Declarative description of the deployed service (pure data, no I/O).
//!
//! Describes the table, the functions and their environment, the grants between them and the
//! REST API routes. Applying it is left to the deployment tooling.

use crate::config::{PRIMARY_KEY_VAR, TABLE_NAME_VAR};
use crate::routes::Operation;

use lambda_http::http::Method;
use std::collections;

/// Partition key attribute of the items table.
pub const PRIMARY_KEY_ATTRIBUTE: &str = "itemId";

/// Name of the REST API.
pub const REST_API_NAME: &str = "Product Service";

/// DynamoDB attribute types usable in a key.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AttributeType {
    /// `S`
    String,
}

/// What happens to the table when the stack is removed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RemovalPolicy {
    /// The table is deleted with the stack.
    Destroy,
}

/// Autoscaling bounds for one capacity dimension.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CapacityBounds {
    /// Lower bound in capacity units.
    pub min: u32,
    /// Upper bound in capacity units.
    pub max: u32,
}

impl Default for CapacityBounds {
    fn default() -> Self {
        Self { min: 1, max: 1 }
    }
}

/// Capacity overrides for [`ServiceDefinition::with_capacity`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CapacityProps {
    /// Read autoscaling bounds.
    pub read: CapacityBounds,
    /// Write autoscaling bounds.
    pub write: CapacityBounds,
}

/// The items table.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TableDefinition {
    /// Physical table name.
    pub table_name: String,
    /// Partition key attribute name.
    pub partition_key: String,
    /// Partition key attribute type.
    pub partition_key_type: AttributeType,
    /// Provisioned read capacity.
    pub read_capacity: u32,
    /// Provisioned write capacity.
    pub write_capacity: u32,
    /// Read autoscaling bounds.
    pub read_scaling: CapacityBounds,
    /// Write autoscaling bounds.
    pub write_scaling: CapacityBounds,
    /// Removal policy.
    pub removal_policy: RemovalPolicy,
}

/// Function architecture.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Architecture {
    /// `arm64`
    Arm64,
}

/// One Lambda function backing one route.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FunctionDefinition {
    /// Logical function name.
    pub name: String,
    /// Cargo binary implementing the function.
    pub binary: &'static str,
    /// Operation the function serves.
    pub operation: Operation,
    /// Environment passed to the function.
    pub environment: collections::BTreeMap<String, String>,
    /// Function architecture.
    pub architecture: Architecture,
    /// Whether active tracing is enabled.
    pub tracing: bool,
}

/// Table access granted to a function.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Grant {
    /// Read and write data access.
    ReadWriteData,
}

/// A route of the REST API and the function it integrates with.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RouteDefinition {
    /// HTTP verb.
    pub method: Method,
    /// Resource path.
    pub path: &'static str,
    /// Name of the integrated function.
    pub function: String,
}

/// The complete deployment description.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServiceDefinition {
    /// Deployment environment, e.g. `dev`.
    pub environment: String,
    /// The items table.
    pub table: TableDefinition,
    /// One function per operation.
    pub functions: Vec<FunctionDefinition>,
    /// `(function name, grant)` pairs on the table.
    pub grants: Vec<(String, Grant)>,
    /// REST API name.
    pub api_name: &'static str,
    /// REST API routes.
    pub routes: Vec<RouteDefinition>,
}

impl ServiceDefinition {
    /// Declares the service for `environment` with default capacity bounds.
    pub fn for_environment(environment: impl Into<String>) -> Self {
        Self::with_capacity(environment, CapacityProps::default())
    }

    /// Declares the service for `environment` with explicit capacity bounds.
    pub fn with_capacity(environment: impl Into<String>, capacity: CapacityProps) -> Self {
        let environment = environment.into();
        let table = TableDefinition {
            table_name: format!("{environment}-items"),
            partition_key: PRIMARY_KEY_ATTRIBUTE.to_string(),
            partition_key_type: AttributeType::String,
            read_capacity: 1,
            write_capacity: 1,
            read_scaling: capacity.read,
            write_scaling: capacity.write,
            removal_policy: RemovalPolicy::Destroy,
        };
        let function_environment = collections::BTreeMap::from([
            (PRIMARY_KEY_VAR.to_string(), table.partition_key.clone()),
            (TABLE_NAME_VAR.to_string(), table.table_name.clone()),
        ]);
        let functions: Vec<FunctionDefinition> = Operation::ALL
            .into_iter()
            .map(|operation| {
                let (name, binary) = function_names(operation);
                FunctionDefinition {
                    name: name.to_string(),
                    binary,
                    operation,
                    environment: function_environment.clone(),
                    architecture: Architecture::Arm64,
                    tracing: true,
                }
            })
            .collect();
        let grants = functions
            .iter()
            .map(|function| (function.name.clone(), Grant::ReadWriteData))
            .collect();
        let routes = functions
            .iter()
            .map(|function| RouteDefinition {
                method: function.operation.method(),
                path: function.operation.path(),
                function: function.name.clone(),
            })
            .collect();
        Self {
            environment,
            table,
            functions,
            grants,
            api_name: REST_API_NAME,
            routes,
        }
    }

    /// The function serving `operation`.
    pub fn function(&self, operation: Operation) -> Option<&FunctionDefinition> {
        self.functions
            .iter()
            .find(|function| function.operation == operation)
    }
}

fn function_names(operation: Operation) -> (&'static str, &'static str) {
    match operation {
        Operation::List => ("getAllProductsFunction", "list-products"),
        Operation::Create => ("createProductFunction", "create-product"),
        Operation::GetOne => ("getOneProductFunction", "get-product"),
        Operation::UpdateOne => ("updateProductFunction", "update-product"),
        Operation::DeleteOne => ("deleteProductFunction", "delete-product"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::ServiceConfig;
    use crate::routes::Route;

    #[test]
    fn test_table_for_environment() {
        let definition = ServiceDefinition::for_environment("dev");
        assert_eq!(
            definition.table,
            TableDefinition {
                table_name: "dev-items".to_string(),
                partition_key: "itemId".to_string(),
                partition_key_type: AttributeType::String,
                read_capacity: 1,
                write_capacity: 1,
                read_scaling: CapacityBounds { min: 1, max: 1 },
                write_scaling: CapacityBounds { min: 1, max: 1 },
                removal_policy: RemovalPolicy::Destroy,
            }
        );
        assert_eq!(definition.api_name, "Product Service");
    }

    #[test]
    fn test_capacity_overrides() {
        let definition = ServiceDefinition::with_capacity(
            "prod",
            CapacityProps {
                read: CapacityBounds { min: 2, max: 10 },
                write: CapacityBounds { min: 1, max: 5 },
            },
        );
        assert_eq!(definition.table.read_scaling, CapacityBounds { min: 2, max: 10 });
        assert_eq!(definition.table.write_scaling, CapacityBounds { min: 1, max: 5 });
    }

    #[test]
    fn test_function_environment_is_a_valid_service_config() {
        let definition = ServiceDefinition::for_environment("dev");
        for function in &definition.functions {
            let config = ServiceConfig::new(
                function.environment[TABLE_NAME_VAR].clone(),
                function.environment[PRIMARY_KEY_VAR].clone(),
            )
            .unwrap();
            assert_eq!(config.table_name, definition.table.table_name);
            assert_eq!(config.primary_key, definition.table.partition_key);
        }
    }

    #[test]
    fn test_every_function_is_granted_and_routed() {
        let definition = ServiceDefinition::for_environment("dev");
        assert_eq!(definition.functions.len(), 5);
        for function in &definition.functions {
            assert!(
                definition
                    .grants
                    .contains(&(function.name.clone(), Grant::ReadWriteData))
            );
            let route = definition
                .routes
                .iter()
                .find(|route| route.function == function.name)
                .unwrap();
            let path = route.path.replace("{id}", "x");
            assert!(matches!(
                Route::resolve(&route.method, &path),
                Route::Matched { operation, .. } if operation == function.operation
            ));
        }
        assert_eq!(
            definition.function(Operation::UpdateOne).map(|f| f.binary),
            Some("update-product")
        );
    }
}
