use serde::de;
use std::fmt::Display;
use std::ops::RangeInclusive;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("missing required field '{0}'")]
    MissingField(&'static str),
    #[error("unrecognized value '{value}', expected one of: {}", .accepted.join(", "))]
    UnrecognizedValue { value: String, accepted: &'static [&'static str] },
    #[error("{0}")]
    Coercion(String),
    #[error("retrieve interval must be between {} and {} minutes, got {value}", .range.start(), .range.end())]
    RetrieveIntervalOutOfRange { value: i64, range: RangeInclusive<i64> },
    #[error("unknown record kind '{0}'")]
    UnknownKind(String),
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl de::Error for RecordError {
    fn custom<T: Display>(msg: T) -> Self {
        RecordError::Coercion(msg.to_string())
    }

    fn missing_field(field: &'static str) -> Self {
        RecordError::MissingField(field)
    }

    fn unknown_variant(variant: &str, expected: &'static [&'static str]) -> Self {
        RecordError::UnrecognizedValue {
            value: variant.to_owned(),
            accepted: expected,
        }
    }
}
