//! Constructors for [`AttributeValue`]s.
//!
//! Scalar values could mostly go through [`serde_dynamo`], but DynamoDB sets
//! (`NS`) have no serde representation, so the importers build their update
//! values with these constructors instead.

use aws_sdk_dynamodb::types::AttributeValue;

/// A string (`S`) value.
pub fn string(value: impl Into<String>) -> AttributeValue {
    AttributeValue::S(value.into())
}

/// A number (`N`) value.
pub fn number(value: i64) -> AttributeValue {
    AttributeValue::N(value.to_string())
}

/// A number-set (`NS`) value.
pub fn number_set(values: impl IntoIterator<Item = i64>) -> AttributeValue {
    AttributeValue::Ns(values.into_iter().map(|value| value.to_string()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::string(string("WHET"), AttributeValue::S("WHET".to_string()))]
    #[case::number(number(42), AttributeValue::N("42".to_string()))]
    #[case::negative_number(number(-7), AttributeValue::N("-7".to_string()))]
    #[case::number_set(
        number_set([5, 6]),
        AttributeValue::Ns(vec!["5".to_string(), "6".to_string()])
    )]
    #[case::empty_number_set(number_set([]), AttributeValue::Ns(Vec::new()))]
    fn test_constructors(#[case] actual: AttributeValue, #[case] expected: AttributeValue) {
        assert_eq!(actual, expected);
    }
}
