use crate::expr;

use aws_sdk_dynamodb::types;
use std::collections;

/// An update expression over pre-encoded attribute values.
///
/// Values are [`types::AttributeValue`]s built with the [`crate::attr`]
/// constructors rather than going through serde, because the `ADD` clause
/// operates on DynamoDB number sets, which serde cannot express.
///
/// ```rust
/// use picol_admin::{attr, expr::update};
///
/// let upsert = update::Update::Combined(vec![
///     update::Update::Set(vec![
///         ("Name".to_string(), attr::string("Wheat")),
///         ("Code".to_string(), attr::string("WHET")),
///     ]),
///     update::Update::Remove(vec!["Notes".to_string()]),
/// ]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Update {
    /// `SET` clauses assigning values to attributes.
    Set(Vec<(String, types::AttributeValue)>),
    /// `REMOVE` clauses clearing attributes.
    Remove(Vec<String>),
    /// `ADD` clauses extending number or set attributes.
    Add(Vec<(String, types::AttributeValue)>),
    /// Several clauses combined into one expression.
    Combined(Vec<Update>),
}

impl Update {
    fn get_expression_recursive(self, index: &mut usize) -> expr::ExpressionInput {
        match self {
            Self::Set(assignments) => {
                let operations = assignments
                    .into_iter()
                    .map(|(key, value)| {
                        let placeholder = expr::placeholder(&key);
                        let value_placeholder = format!(":set{index}");
                        *index += 1;
                        expr::ExpressionInput {
                            expression: format!("{placeholder} = {value_placeholder}"),
                            expression_attribute_names: collections::HashMap::from([(
                                placeholder,
                                key,
                            )]),
                            expression_attribute_values: collections::HashMap::from([(
                                value_placeholder,
                                value,
                            )]),
                        }
                    })
                    .collect();
                let mut operation = expr::ExpressionInput::merge(", ", operations);
                operation.expression = format!("SET {}", operation.expression);
                operation
            }
            Self::Remove(keys) => {
                let operations = keys
                    .into_iter()
                    .map(|key| {
                        let placeholder = expr::placeholder(&key);
                        expr::ExpressionInput {
                            expression: placeholder.clone(),
                            expression_attribute_names: collections::HashMap::from([(
                                placeholder,
                                key,
                            )]),
                            ..Default::default()
                        }
                    })
                    .collect();
                let mut operation = expr::ExpressionInput::merge(", ", operations);
                operation.expression = format!("REMOVE {}", operation.expression);
                operation
            }
            Self::Add(additions) => {
                let operations = additions
                    .into_iter()
                    .map(|(key, value)| {
                        let placeholder = expr::placeholder(&key);
                        let value_placeholder = format!(":add{index}");
                        *index += 1;
                        expr::ExpressionInput {
                            expression: format!("{placeholder} {value_placeholder}"),
                            expression_attribute_names: collections::HashMap::from([(
                                placeholder,
                                key,
                            )]),
                            expression_attribute_values: collections::HashMap::from([(
                                value_placeholder,
                                value,
                            )]),
                        }
                    })
                    .collect();
                let mut operation = expr::ExpressionInput::merge(", ", operations);
                operation.expression = format!("ADD {}", operation.expression);
                operation
            }
            Self::Combined(updates) => {
                let operations = updates
                    .into_iter()
                    .map(|update| update.get_expression_recursive(index))
                    .collect();
                expr::ExpressionInput::merge(" ", operations)
            }
        }
    }
}

impl From<Update> for expr::ExpressionInput {
    fn from(update: Update) -> Self {
        let mut index = 0;
        update.get_expression_recursive(&mut index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::attr;

    use rstest::rstest;

    #[rstest]
    #[case::set_single(
        Update::Set(vec![("Name".to_string(), attr::string("Aphid"))]),
        expr::ExpressionInput {
            expression: "SET #Name = :set0".to_string(),
            expression_attribute_names: collections::HashMap::from([(
                "#Name".to_string(),
                "Name".to_string(),
            )]),
            expression_attribute_values: collections::HashMap::from([(
                ":set0".to_string(),
                types::AttributeValue::S("Aphid".to_string()),
            )]),
        }
    )]
    #[case::set_multiple(
        Update::Set(vec![
            ("Name".to_string(), attr::string("Wheat")),
            ("Code".to_string(), attr::string("WHET")),
        ]),
        expr::ExpressionInput {
            expression: "SET #Name = :set0, #Code = :set1".to_string(),
            expression_attribute_names: collections::HashMap::from([
                ("#Name".to_string(), "Name".to_string()),
                ("#Code".to_string(), "Code".to_string()),
            ]),
            expression_attribute_values: collections::HashMap::from([
                (":set0".to_string(), types::AttributeValue::S("Wheat".to_string())),
                (":set1".to_string(), types::AttributeValue::S("WHET".to_string())),
            ]),
        }
    )]
    #[case::remove_multiple(
        Update::Remove(vec!["ManagementCode".to_string(), "Notes".to_string()]),
        expr::ExpressionInput {
            expression: "REMOVE #ManagementCode, #Notes".to_string(),
            expression_attribute_names: collections::HashMap::from([
                ("#ManagementCode".to_string(), "ManagementCode".to_string()),
                ("#Notes".to_string(), "Notes".to_string()),
            ]),
            ..Default::default()
        }
    )]
    #[case::add_number_set(
        Update::Add(vec![("Ingredients".to_string(), attr::number_set([17]))]),
        expr::ExpressionInput {
            expression: "ADD #Ingredients :add0".to_string(),
            expression_attribute_names: collections::HashMap::from([(
                "#Ingredients".to_string(),
                "Ingredients".to_string(),
            )]),
            expression_attribute_values: collections::HashMap::from([(
                ":add0".to_string(),
                types::AttributeValue::Ns(vec!["17".to_string()]),
            )]),
        }
    )]
    #[case::combined_shares_placeholder_index(
        Update::Combined(vec![
            Update::Set(vec![
                ("Name".to_string(), attr::string("Wheat")),
                ("Code".to_string(), attr::string("WHET")),
            ]),
            Update::Remove(vec!["Notes".to_string()]),
            Update::Add(vec![("Count".to_string(), attr::number(1))]),
        ]),
        expr::ExpressionInput {
            expression: "SET #Name = :set0, #Code = :set1 REMOVE #Notes ADD #Count :add2"
                .to_string(),
            expression_attribute_names: collections::HashMap::from([
                ("#Name".to_string(), "Name".to_string()),
                ("#Code".to_string(), "Code".to_string()),
                ("#Notes".to_string(), "Notes".to_string()),
                ("#Count".to_string(), "Count".to_string()),
            ]),
            expression_attribute_values: collections::HashMap::from([
                (":set0".to_string(), types::AttributeValue::S("Wheat".to_string())),
                (":set1".to_string(), types::AttributeValue::S("WHET".to_string())),
                (":add2".to_string(), types::AttributeValue::N("1".to_string())),
            ]),
        }
    )]
    fn test_update_to_expression_input(
        #[case] update: Update,
        #[case] expected: expr::ExpressionInput,
    ) {
        let actual: expr::ExpressionInput = update.into();
        assert_eq!(actual, expected);
    }
}
