use aws_sdk_dynamodb::{error::SdkError, operation::update_item::UpdateItemError};
use std::{fmt, io};

type DynamoUpdateError = SdkError<UpdateItemError>;

/// Import tool error.
#[derive(Debug)]
pub enum Error {
    /// Failed to open or read the input document.
    Io(io::Error),
    /// Failed to decode the input document as JSON.
    Decode(serde_json::Error),
    /// Failed to encode an expression value.
    Expression(serde_dynamo::Error),
    /// A DynamoDB UpdateItem call failed.
    Update(Box<DynamoUpdateError>),
}

impl Error {
    /// Whether this error is a DynamoDB `ConditionalCheckFailedException`.
    ///
    /// The sequence updater treats this case as a successful no-op: the
    /// stored counter is already at or beyond the candidate value, so the
    /// monotonicity invariant holds without the write.
    pub fn is_conditional_check_failed(&self) -> bool {
        matches!(self, Self::Update(error) if matches!(
            error.as_service_error(),
            Some(UpdateItemError::ConditionalCheckFailedException(_))
        ))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(error) => write!(f, "error reading input: {error}"),
            Self::Decode(error) => write!(f, "error decoding JSON: {error}"),
            Self::Expression(error) => write!(f, "error building expression: {error}"),
            Self::Update(error) => write!(f, "error writing item: {error}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(error) => Some(error),
            Self::Decode(error) => Some(error),
            Self::Expression(error) => Some(error),
            Self::Update(error) => Some(error.as_ref()),
        }
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Decode(error)
    }
}

impl From<serde_dynamo::Error> for Error {
    fn from(error: serde_dynamo::Error) -> Self {
        Self::Expression(error)
    }
}

impl From<DynamoUpdateError> for Error {
    fn from(error: DynamoUpdateError) -> Self {
        Self::Update(Box::new(error))
    }
}
