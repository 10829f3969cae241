//! Process configuration read once at start-up.

use crate::error::ConfigError;

/// Environment variable naming the table.
pub const TABLE_NAME_VAR: &str = "TABLE_NAME";

/// Environment variable naming the primary-key attribute.
pub const PRIMARY_KEY_VAR: &str = "PRIMARY_KEY";

/// Table and key configuration shared by every handler in the process.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServiceConfig {
    /// Name of the table holding the records.
    pub table_name: String,
    /// Name of the attribute that identifies a record.
    pub primary_key: String,
}

impl ServiceConfig {
    /// Builds a configuration, rejecting empty values.
    pub fn new(
        table_name: impl Into<String>,
        primary_key: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let table_name = table_name.into();
        if table_name.trim().is_empty() {
            return Err(ConfigError::Empty(TABLE_NAME_VAR));
        }
        let primary_key = primary_key.into();
        if primary_key.trim().is_empty() {
            return Err(ConfigError::Empty(PRIMARY_KEY_VAR));
        }
        Ok(Self {
            table_name,
            primary_key,
        })
    }

    /// Reads `TABLE_NAME` and `PRIMARY_KEY` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let table_name = lookup(TABLE_NAME_VAR).ok_or(ConfigError::Missing(TABLE_NAME_VAR))?;
        let primary_key = lookup(PRIMARY_KEY_VAR).ok_or(ConfigError::Missing(PRIMARY_KEY_VAR))?;
        Self::new(table_name, primary_key)
    }
}

/// AWS client configuration.
#[derive(Debug, Clone, Default)]
pub struct AwsConfig {
    /// Custom endpoint URL (for local DynamoDB).
    pub endpoint_url: Option<String>,
    /// AWS region; the SDK default chain is used when unset.
    pub region: Option<String>,
}

impl AwsConfig {
    /// Reads `AWS_ENDPOINT_URL` and `AWS_REGION` from the process environment.
    pub fn from_env() -> Self {
        Self {
            endpoint_url: std::env::var("AWS_ENDPOINT_URL").ok(),
            region: std::env::var("AWS_REGION").ok(),
        }
    }

    /// Creates a DynamoDB client with this configuration.
    pub async fn dynamodb_client(&self) -> aws_sdk_dynamodb::Client {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(region) = &self.region {
            loader = loader.region(aws_config::Region::new(region.clone()));
        }
        if let Some(endpoint) = &self.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }
        let sdk_config = loader.load().await;
        aws_sdk_dynamodb::Client::new(&sdk_config)
    }
}
