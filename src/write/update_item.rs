use crate::{common, write};

use aws_sdk_dynamodb::{Client, error, operation, types};
use serde::Serialize;
use serde_dynamo::{Error, Result, to_attribute_value};
use std::collections;

/// Attribute assignments merged into an existing item.
///
/// Every pair becomes one clause of a single `SET` expression, in order. Attributes
/// that are not named keep their stored value.
///
/// ```rust
/// use inventory_crud::write::update_item;
///
/// let set = update_item::SetAttributes(vec![
///     ("name".to_string(), "widget".to_string()),
///     ("colour".to_string(), "blue".to_string()),
/// ]);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SetAttributes<T>(pub Vec<(String, T)>);

impl<T: Serialize> TryFrom<SetAttributes<T>> for common::ExpressionInput {
    type Error = Error;

    fn try_from(set_attributes: SetAttributes<T>) -> Result<Self> {
        let mut operations = Vec::with_capacity(set_attributes.0.len());
        for (index, (name, value)) in set_attributes.0.into_iter().enumerate() {
            let (name_placeholder, value_placeholder) = common::placeholders("set", index);
            let value = to_attribute_value(value)?;
            let operation = common::ExpressionInput {
                expression: format!("{name_placeholder} = {value_placeholder}"),
                expression_attribute_names: collections::HashMap::from([(name_placeholder, name)]),
                expression_attribute_values: collections::HashMap::from([(
                    value_placeholder,
                    value,
                )]),
            };
            operations.push(operation);
        }
        let mut operation = common::ExpressionInput::merge(", ", operations);
        operation.expression = format!("SET {}", operation.expression);
        Ok(operation)
    }
}

/// update item operation
#[derive(Clone, Debug, Default, PartialEq)]
struct UpdateItemInput {
    key: collections::HashMap<String, types::AttributeValue>,
    update_expression: String,
    write_operation: write::common::WriteInput,
}

/// Update item operation.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use inventory_crud::{common, write};
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let update_item = write::update_item::UpdateItem {
///     key: common::key::Key {
///         name: "itemId".to_string(),
///         value: "1".to_string(),
///     },
///     set_attributes: write::update_item::SetAttributes(vec![
///         ("name".to_string(), "widget".to_string()),
///     ]),
///     write_args: write::common::WriteArgs {
///         table_name: "dev-items".to_string(),
///         ..Default::default()
///     },
/// };
/// update_item.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateItem<K, V> {
    /// The primary key of the item to update.
    pub key: common::key::Key<K>,
    /// The attributes to assign.
    pub set_attributes: SetAttributes<V>,
    /// Additional write operation arguments (table name, condition, return values).
    pub write_args: write::common::WriteArgs,
}

impl<K: Serialize, V: Serialize> TryFrom<UpdateItem<K, V>> for UpdateItemInput {
    type Error = Error;

    fn try_from(update_item: UpdateItem<K, V>) -> Result<Self> {
        let key = update_item.key.try_into()?;
        let mut write_operation: write::common::WriteInput = update_item.write_args.into();
        let operation = update_item.set_attributes.try_into()?;
        let update_expression = write_operation.merge_expression(operation);
        let operation = Self {
            key,
            update_expression,
            write_operation,
        };
        Ok(operation)
    }
}

impl<K: Serialize, V: Serialize> UpdateItem<K, V> {
    /// Execute the update item operation.
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::update_item::UpdateItemOutput,
        error::SdkError<operation::update_item::UpdateItemError>,
    > {
        let update_item: UpdateItemInput = self.try_into().map_err(error::BuildError::other)?;
        let builder = client
            .update_item()
            .set_key(Some(update_item.key))
            .update_expression(update_item.update_expression);
        crate::apply_write_operation!(builder, update_item.write_operation)
            .send()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;
    use serde_json::{Value, json};

    #[rstest]
    #[case::single(
        SetAttributes(
            vec![
                (
                    "attr".to_string(),
                    Value::String(
                        "val".to_string()
                    )
                ),
            ]
        ),
        common::ExpressionInput {
            expression: "SET #set0 = :set0".to_string(),
            expression_attribute_names: collections::HashMap::from(
                [
                    ("#set0".to_string(), "attr".to_string()),
                ]
            ),
            expression_attribute_values: collections::HashMap::from(
                [
                    (
                        ":set0".to_string(),
                        types::AttributeValue::S(
                            "val".to_string()
                        )
                    ),
                ]
            ),
        }
    )]
    #[case::every_attribute_in_order(
        SetAttributes(
            vec![
                (
                    "name".to_string(),
                    Value::String(
                        "widget".to_string()
                    )
                ),
                (
                    "price".to_string(),
                    Value::Number(
                        5.into()
                    )
                ),
                (
                    "tags".to_string(),
                    json!(["a"])
                ),
            ]
        ),
        common::ExpressionInput {
            expression: "SET #set0 = :set0, #set1 = :set1, #set2 = :set2".to_string(),
            expression_attribute_names: collections::HashMap::from(
                [
                    ("#set0".to_string(), "name".to_string()),
                    ("#set1".to_string(), "price".to_string()),
                    ("#set2".to_string(), "tags".to_string()),
                ]
            ),
            expression_attribute_values: collections::HashMap::from(
                [
                    (
                        ":set0".to_string(),
                        types::AttributeValue::S(
                            "widget".to_string()
                        )
                    ),
                    (
                        ":set1".to_string(),
                        types::AttributeValue::N(
                            "5".to_string()
                        )
                    ),
                    (
                        ":set2".to_string(),
                        types::AttributeValue::L(
                            vec![
                                types::AttributeValue::S(
                                    "a".to_string()
                                )
                            ]
                        )
                    ),
                ]
            ),
        }
    )]
    #[case::reserved_word_and_symbols(
        SetAttributes(
            vec![
                (
                    "size = :x, #y".to_string(),
                    Value::Bool(
                        false
                    )
                ),
            ]
        ),
        common::ExpressionInput {
            expression: "SET #set0 = :set0".to_string(),
            expression_attribute_names: collections::HashMap::from(
                [
                    ("#set0".to_string(), "size = :x, #y".to_string()),
                ]
            ),
            expression_attribute_values: collections::HashMap::from(
                [
                    (
                        ":set0".to_string(),
                        types::AttributeValue::Bool(
                            false
                        )
                    ),
                ]
            ),
        }
    )]
    fn test_set_attributes(
        #[case] args: SetAttributes<Value>,
        #[case] expected: common::ExpressionInput,
    ) {
        let actual: common::ExpressionInput = args.try_into().unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_update_item_with_existence_condition() {
        let update_item = UpdateItem {
            key: common::key::Key {
                name: "itemId".to_string(),
                value: "k1".to_string(),
            },
            set_attributes: SetAttributes(vec![("b".to_string(), json!(99))]),
            write_args: write::common::WriteArgs {
                condition: Some(common::condition::ConditionMap(vec![
                    common::condition::KeyCondition {
                        condition: common::condition::Condition::AttributeExists,
                        name: "itemId".to_string(),
                    },
                ])),
                return_values: Some(types::ReturnValue::UpdatedNew),
                table_name: "dev-items".to_string(),
            },
        };
        let expected = UpdateItemInput {
            key: collections::HashMap::from([(
                "itemId".to_string(),
                types::AttributeValue::S("k1".to_string()),
            )]),
            update_expression: "SET #set0 = :set0".to_string(),
            write_operation: write::common::WriteInput {
                condition_expression: Some("attribute_exists(#cond0)".to_string()),
                expression_attribute_names: Some(collections::HashMap::from([
                    ("#cond0".to_string(), "itemId".to_string()),
                    ("#set0".to_string(), "b".to_string()),
                ])),
                expression_attribute_values: Some(collections::HashMap::from([(
                    ":set0".to_string(),
                    types::AttributeValue::N("99".to_string()),
                )])),
                return_values: Some(types::ReturnValue::UpdatedNew),
                table_name: "dev-items".to_string(),
            },
        };
        let actual: UpdateItemInput = update_item.try_into().unwrap();
        assert_eq!(actual, expected);
    }
}
