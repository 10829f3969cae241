use crate::config::ServiceConfig;
use crate::error::{StoreError, StoreResult};
use crate::store::{Record, RecordStore};
use crate::{common, read, write};

use async_trait::async_trait;
use aws_sdk_dynamodb::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_dynamodb::operation::update_item::UpdateItemError;
use aws_sdk_dynamodb::{Client, types};
use serde_dynamo::{from_item, from_items};

/// Error code DynamoDB uses for rejected requests, including reserved-word collisions.
const VALIDATION_EXCEPTION: &str = "ValidationException";

/// [`RecordStore`] over a DynamoDB table.
#[derive(Clone, Debug)]
pub struct DynamoRecordStore {
    client: Client,
    config: ServiceConfig,
}

impl DynamoRecordStore {
    /// Creates a store over the table and key named in `config`.
    pub fn new(client: Client, config: ServiceConfig) -> Self {
        Self { client, config }
    }

    fn key(&self, value: &str) -> common::key::Key<String> {
        common::key::Key {
            name: self.config.primary_key.clone(),
            value: value.to_string(),
        }
    }

    fn write_args(&self) -> write::common::WriteArgs {
        write::common::WriteArgs {
            table_name: self.config.table_name.clone(),
            ..Default::default()
        }
    }
}

fn is_reserved_keyword(code: Option<&str>, message: Option<&str>) -> bool {
    code == Some(VALIDATION_EXCEPTION)
        && message.is_some_and(|message| message.contains("reserved keyword"))
}

fn execution_error<E>(error: SdkError<E>) -> StoreError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
{
    if is_reserved_keyword(error.code(), error.message()) {
        return StoreError::ReservedKeyword(error.message().unwrap_or_default().to_string());
    }
    StoreError::Execution(DisplayErrorContext(&error).to_string())
}

// the existence condition failing means nothing is stored under the key
fn update_error(error: SdkError<UpdateItemError>, key: &str) -> StoreError {
    let missing = error
        .as_service_error()
        .is_some_and(UpdateItemError::is_conditional_check_failed_exception);
    if missing {
        return StoreError::KeyNotFound(key.to_string());
    }
    execution_error(error)
}

#[async_trait]
impl RecordStore for DynamoRecordStore {
    #[tracing::instrument(
        name = "inventory_crud.put",
        skip(self, record),
        fields(table = %self.config.table_name),
        err
    )]
    async fn put(&self, record: Record) -> StoreResult<()> {
        write::put_item::PutItem {
            item: record,
            write_args: self.write_args(),
        }
        .send(&self.client)
        .await
        .map_err(execution_error)?;
        Ok(())
    }

    #[tracing::instrument(
        name = "inventory_crud.get_one",
        skip(self),
        fields(table = %self.config.table_name),
        err
    )]
    async fn get_one(&self, key: &str) -> StoreResult<Option<Record>> {
        let output = read::get_item::GetItem {
            key: self.key(key),
            single_read_args: read::common::SingleReadArgs {
                table_name: self.config.table_name.clone(),
                ..Default::default()
            },
        }
        .send(&self.client)
        .await
        .map_err(execution_error)?;
        let record = output.item.map(from_item).transpose()?;
        Ok(record)
    }

    #[tracing::instrument(
        name = "inventory_crud.scan_all",
        skip(self),
        fields(table = %self.config.table_name),
        err
    )]
    async fn scan_all(&self) -> StoreResult<Vec<Record>> {
        let output = read::scan::Scan {
            multiple_read_args: read::common::MultipleReadArgs {
                table_name: self.config.table_name.clone(),
                ..Default::default()
            },
        }
        .send(&self.client)
        .await
        .map_err(execution_error)?;
        tracing::debug!(
            pages = output.pages,
            scanned_count = output.scanned_count,
            "scan complete"
        );
        let records = from_items(output.items)?;
        Ok(records)
    }

    #[tracing::instrument(
        name = "inventory_crud.update_attributes",
        skip(self, attributes),
        fields(table = %self.config.table_name, attributes = attributes.len()),
        err
    )]
    async fn update_attributes(&self, key: &str, attributes: Record) -> StoreResult<Record> {
        let must_exist = common::condition::ConditionMap(vec![common::condition::KeyCondition {
            condition: common::condition::Condition::AttributeExists,
            name: self.config.primary_key.clone(),
        }]);
        let output = write::update_item::UpdateItem {
            key: self.key(key),
            set_attributes: write::update_item::SetAttributes(attributes.into_iter().collect()),
            write_args: write::common::WriteArgs {
                condition: Some(must_exist),
                return_values: Some(types::ReturnValue::UpdatedNew),
                ..self.write_args()
            },
        }
        .send(&self.client)
        .await
        .map_err(|error| update_error(error, key))?;
        let updated = output
            .attributes
            .map(from_item)
            .transpose()?
            .unwrap_or_default();
        Ok(updated)
    }

    #[tracing::instrument(
        name = "inventory_crud.delete",
        skip(self),
        fields(table = %self.config.table_name),
        err
    )]
    async fn delete(&self, key: &str) -> StoreResult<()> {
        write::delete_item::DeleteItem {
            key: self.key(key),
            write_args: self.write_args(),
        }
        .send(&self.client)
        .await
        .map_err(execution_error)?;
        Ok(())
    }
}
