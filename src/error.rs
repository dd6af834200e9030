use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Malformed input: {0}")]
    MalformedInput(String),
    #[error("Missing required field `{field}` on {entity}")]
    MissingRequiredField {
        entity: &'static str,
        field: &'static str,
    },
    #[error("Value out of range for `{field}`: {value}")]
    OutOfRangeValue { field: &'static str, value: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),
    #[error("Configuration error: {0}")]
    Config(String),
}

impl GameError {
    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        GameError::MalformedInput(msg.into())
    }

    pub(crate) fn missing(entity: &'static str, field: &'static str) -> Self {
        GameError::MissingRequiredField { entity, field }
    }

    pub(crate) fn out_of_range(field: &'static str, value: impl ToString) -> Self {
        GameError::OutOfRangeValue {
            field,
            value: value.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
