use crate::expr;

use aws_sdk_dynamodb::types;
use serde::Serialize;
use serde_dynamo::{Error, Result, to_attribute_value};
use std::{collections, ops};

/// Logical operator combining the conditions of a [`ConditionList`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LogicalOperator {
    /// All conditions must hold.
    And,
    /// At least one condition must hold.
    Or,
}

impl ops::Deref for LogicalOperator {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        match self {
            Self::And => " AND ",
            Self::Or => " OR ",
        }
    }
}

/// A single condition over one attribute.
#[derive(Clone, Debug, PartialEq)]
pub enum Condition<T> {
    /// The attribute value is less than the given value.
    LessThan(T),
    /// The attribute does not exist.
    Null,
}

impl<T: Serialize> Condition<T> {
    fn get_expression(
        self,
        key: &str,
        key_placeholder: &str,
        index: &mut usize,
    ) -> Result<(String, collections::HashMap<String, types::AttributeValue>)> {
        let mut expression_attribute_values = collections::HashMap::new();
        let expression = match self {
            Self::LessThan(value) => {
                let value = to_attribute_value(value)?;
                let value_placeholder = format!(":{key}_lt{index}");
                *index += 1;
                let expression = format!("{key_placeholder} < {value_placeholder}");
                expression_attribute_values.insert(value_placeholder, value);
                expression
            }
            Self::Null => {
                format!("attribute_not_exists({key_placeholder})")
            }
        };
        Ok((expression, expression_attribute_values))
    }
}

/// A condition applied to a named attribute.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyCondition<T> {
    /// The condition to apply.
    pub condition: Condition<T>,
    /// The attribute to apply it to.
    pub name: String,
}

/// A flat list of attribute conditions joined by one logical operator.
///
/// ```rust
/// use picol_admin::expr::condition;
///
/// let not_present = condition::ConditionList {
///     operator: condition::LogicalOperator::And,
///     conditions: vec![condition::KeyCondition {
///         name: "Id".to_string(),
///         condition: condition::Condition::<i64>::Null,
///     }],
/// };
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ConditionList<T> {
    /// How the conditions are combined.
    pub operator: LogicalOperator,
    /// The conditions, in expression order.
    pub conditions: Vec<KeyCondition<T>>,
}

impl<T> ConditionList<T> {
    /// A list holding a single condition.
    pub fn single(name: impl Into<String>, condition: Condition<T>) -> Self {
        Self {
            operator: LogicalOperator::And,
            conditions: vec![KeyCondition {
                name: name.into(),
                condition,
            }],
        }
    }
}

impl<T: Serialize> TryFrom<ConditionList<T>> for expr::ExpressionInput {
    type Error = Error;

    fn try_from(list: ConditionList<T>) -> Result<Self> {
        let mut operations = Vec::with_capacity(list.conditions.len());
        let mut index = 0;
        for key_condition in list.conditions {
            let placeholder = expr::placeholder(&key_condition.name);
            let (expression, expression_attribute_values) = key_condition
                .condition
                .get_expression(&key_condition.name, &placeholder, &mut index)?;
            let expression_attribute_names =
                collections::HashMap::from([(placeholder, key_condition.name)]);
            operations.push(expr::ExpressionInput {
                expression,
                expression_attribute_names,
                expression_attribute_values,
            });
        }
        Ok(expr::ExpressionInput::merge(&list.operator, operations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::not_present(
        ConditionList::single("Id", Condition::<i64>::Null),
        expr::ExpressionInput {
            expression: "attribute_not_exists(#Id)".to_string(),
            expression_attribute_names: collections::HashMap::from([(
                "#Id".to_string(),
                "Id".to_string(),
            )]),
            ..Default::default()
        }
    )]
    #[case::less_than(
        ConditionList::single("NextId", Condition::LessThan(6)),
        expr::ExpressionInput {
            expression: "#NextId < :NextId_lt0".to_string(),
            expression_attribute_names: collections::HashMap::from([(
                "#NextId".to_string(),
                "NextId".to_string(),
            )]),
            expression_attribute_values: collections::HashMap::from([(
                ":NextId_lt0".to_string(),
                types::AttributeValue::N("6".to_string()),
            )]),
        }
    )]
    #[case::sequence_guard(
        ConditionList {
            operator: LogicalOperator::Or,
            conditions: vec![
                KeyCondition {
                    name: "SequenceName".to_string(),
                    condition: Condition::Null,
                },
                KeyCondition {
                    name: "NextId".to_string(),
                    condition: Condition::LessThan(9),
                },
            ],
        },
        expr::ExpressionInput {
            expression: "attribute_not_exists(#SequenceName) OR #NextId < :NextId_lt0"
                .to_string(),
            expression_attribute_names: collections::HashMap::from([
                ("#SequenceName".to_string(), "SequenceName".to_string()),
                ("#NextId".to_string(), "NextId".to_string()),
            ]),
            expression_attribute_values: collections::HashMap::from([(
                ":NextId_lt0".to_string(),
                types::AttributeValue::N("9".to_string()),
            )]),
        }
    )]
    fn test_condition_list_to_expression_input(
        #[case] list: ConditionList<i64>,
        #[case] expected: expr::ExpressionInput,
    ) {
        let actual: expr::ExpressionInput = list.try_into().unwrap();
        assert_eq!(actual, expected);
    }
}
