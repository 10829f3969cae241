use crate::read;

use aws_sdk_dynamodb::{Client, error, operation, types};
use std::collections;

/// Items collected from every page of a scan.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScanOutput {
    /// All items, in the order DynamoDB returned them.
    pub items: Vec<collections::HashMap<String, types::AttributeValue>>,
    /// Number of pages that were requested.
    pub pages: usize,
    /// Total number of items evaluated before any filtering.
    pub scanned_count: i32,
}

impl ScanOutput {
    fn push_page(&mut self, page: operation::scan::ScanOutput) {
        self.pages += 1;
        self.scanned_count += page.scanned_count;
        if let Some(items) = page.items {
            self.items.extend(items);
        }
    }
}

/// Scan operation.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use inventory_crud::read;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let scan = read::scan::Scan {
///     multiple_read_args: read::common::MultipleReadArgs {
///         table_name: "dev-items".to_string(),
///         ..Default::default()
///     },
/// };
/// let output = scan.send(client).await?;
/// println!("{} items", output.items.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Scan {
    /// Additional read operation arguments (table name, page size, consistent read).
    pub multiple_read_args: read::common::MultipleReadArgs,
}

impl Scan {
    /// Execute the scan operation, following `LastEvaluatedKey` until the table is exhausted.
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<ScanOutput, error::SdkError<operation::scan::ScanError>> {
        let builder = client.scan();
        let mut paginator = crate::apply_multiple_read_operation!(builder, self.multiple_read_args)
            .into_paginator()
            .send();
        let mut output = ScanOutput::default();
        while let Some(page) = paginator.next().await {
            output.push_page(page?);
        }
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_page_accumulates_items() {
        let item = |id: &str| {
            collections::HashMap::from([(
                "itemId".to_string(),
                types::AttributeValue::S(id.to_string()),
            )])
        };
        let mut output = ScanOutput::default();
        output.push_page(
            operation::scan::ScanOutput::builder()
                .items(item("a"))
                .items(item("b"))
                .scanned_count(2)
                .last_evaluated_key("itemId", types::AttributeValue::S("b".to_string()))
                .build(),
        );
        output.push_page(
            operation::scan::ScanOutput::builder()
                .items(item("c"))
                .scanned_count(1)
                .build(),
        );
        output.push_page(operation::scan::ScanOutput::builder().build());
        assert_eq!(output.items, vec![item("a"), item("b"), item("c")]);
        assert_eq!(output.pages, 3);
        assert_eq!(output.scanned_count, 3);
    }
}
