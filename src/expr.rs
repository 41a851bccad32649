//! Typed builders for DynamoDB expressions.
//!
//! Expressions are assembled as [`ExpressionInput`]s: an expression string
//! plus the attribute-name and attribute-value placeholder maps it refers to.
//! Inputs from several sources (an update expression and a condition
//! expression, say) are merged into one request through
//! [`ExpressionInput::merge_into`].

/// Condition expression building for conditional writes.
pub mod condition;

/// Update expression building (SET / REMOVE / ADD).
pub mod update;

use aws_sdk_dynamodb::types;
use std::collections;

pub(crate) fn placeholder(identifier: &str) -> String {
    format!("#{identifier}")
}

fn join_expression(left: String, operator: &str, right: String) -> String {
    if left.is_empty() {
        right
    } else if right.is_empty() {
        left
    } else {
        format!("{left}{operator}{right}")
    }
}

/// An expression string together with its placeholder maps.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct ExpressionInput {
    pub(crate) expression: String,
    pub(crate) expression_attribute_names: collections::HashMap<String, String>,
    pub(crate) expression_attribute_values: collections::HashMap<String, types::AttributeValue>,
}

impl ExpressionInput {
    pub(crate) fn merge(operator: &str, items: Vec<Self>) -> Self {
        let mut merged = Self::default();
        for item in items {
            merged
                .expression_attribute_names
                .extend(item.expression_attribute_names);
            merged
                .expression_attribute_values
                .extend(item.expression_attribute_values);
            merged.expression = join_expression(merged.expression, operator, item.expression);
        }
        merged
    }

    /// Fold this input's placeholder maps into a request's accumulated maps
    /// and return the expression string.
    pub(crate) fn merge_into(
        self,
        names: &mut Option<collections::HashMap<String, String>>,
        values: &mut Option<collections::HashMap<String, types::AttributeValue>>,
    ) -> String {
        match names {
            Some(existing) => existing.extend(self.expression_attribute_names),
            None => *names = Some(self.expression_attribute_names),
        }
        if !self.expression_attribute_values.is_empty() {
            match values {
                Some(existing) => existing.extend(self.expression_attribute_values),
                None => *values = Some(self.expression_attribute_values),
            }
        }
        self.expression
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::both_empty("".to_string(), "".to_string(), "")]
    #[case::left_empty("".to_string(), "b".to_string(), "b")]
    #[case::right_empty("a".to_string(), "".to_string(), "a")]
    #[case::both_present("a".to_string(), "b".to_string(), "a, b")]
    fn test_join_expression(#[case] left: String, #[case] right: String, #[case] expected: &str) {
        assert_eq!(join_expression(left, ", ", right), expected);
    }

    #[rstest]
    fn test_merge_into_accumulates() {
        let first = ExpressionInput {
            expression: "SET #Name = :set0".to_string(),
            expression_attribute_names: collections::HashMap::from([(
                "#Name".to_string(),
                "Name".to_string(),
            )]),
            expression_attribute_values: collections::HashMap::from([(
                ":set0".to_string(),
                types::AttributeValue::S("Wheat".to_string()),
            )]),
        };
        let second = ExpressionInput {
            expression: "attribute_not_exists(#Id)".to_string(),
            expression_attribute_names: collections::HashMap::from([(
                "#Id".to_string(),
                "Id".to_string(),
            )]),
            ..Default::default()
        };

        let mut names = None;
        let mut values = None;
        let update = first.merge_into(&mut names, &mut values);
        let condition = second.merge_into(&mut names, &mut values);

        assert_eq!(update, "SET #Name = :set0");
        assert_eq!(condition, "attribute_not_exists(#Id)");
        assert_eq!(
            names,
            Some(collections::HashMap::from([
                ("#Name".to_string(), "Name".to_string()),
                ("#Id".to_string(), "Id".to_string()),
            ]))
        );
        assert_eq!(
            values,
            Some(collections::HashMap::from([(
                ":set0".to_string(),
                types::AttributeValue::S("Wheat".to_string()),
            )]))
        );
    }

    /// A value-free input must not turn an absent values map into an empty
    /// one; DynamoDB rejects empty ExpressionAttributeValues.
    #[rstest]
    fn test_merge_into_keeps_values_absent() {
        let input = ExpressionInput {
            expression: "attribute_not_exists(#Id)".to_string(),
            expression_attribute_names: collections::HashMap::from([(
                "#Id".to_string(),
                "Id".to_string(),
            )]),
            ..Default::default()
        };

        let mut names = None;
        let mut values = None;
        input.merge_into(&mut names, &mut values);

        assert!(names.is_some());
        assert_eq!(values, None);
    }
}
