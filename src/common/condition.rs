use crate::common;

use std::collections;

/// Existence check usable as a write condition.
///
/// ```rust
/// use inventory_crud::common::condition;
///
/// let must_exist = condition::Condition::AttributeExists;
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Condition {
    /// The attribute must be present on the stored item.
    AttributeExists,
}

impl Condition {
    fn get_expression(self, name_placeholder: &str) -> String {
        match self {
            Self::AttributeExists => format!("attribute_exists({name_placeholder})"),
        }
    }
}

/// Condition applied to an attribute.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KeyCondition {
    /// The condition to apply to the attribute.
    pub condition: Condition,
    /// The name of the attribute to apply the condition to.
    pub name: String,
}

/// Conditions that must all hold for a write to succeed.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ConditionMap(pub Vec<KeyCondition>);

impl From<ConditionMap> for common::ExpressionInput {
    fn from(condition_map: ConditionMap) -> Self {
        let operations = condition_map
            .0
            .into_iter()
            .enumerate()
            .map(|(index, key_condition)| {
                let (name_placeholder, _) = common::placeholders("cond", index);
                let expression = key_condition.condition.get_expression(&name_placeholder);
                common::ExpressionInput {
                    expression,
                    expression_attribute_names: collections::HashMap::from([(
                        name_placeholder,
                        key_condition.name,
                    )]),
                    ..Default::default()
                }
            })
            .collect();
        common::ExpressionInput::merge(" AND ", operations)
    }
}
