mod error;
mod payload;
pub mod registry;
pub mod render;

pub use error::RecordError;
pub use payload::Payload;
pub use record_macros::Record;
pub use render::RenderField;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Display;

pub type Field<'a> = (&'static str, &'a dyn RenderField);

/// One controller resource shape.
///
/// The serde attributes on the implementing struct are its field table: `rename` holds the
/// wire key, `default` the declared default and `Option` marks optional fields.
pub trait Record: Serialize + DeserializeOwned + Display {
    const NAME: &'static str;
    const KIND: &'static str;

    /// Fields in declaration order.
    fn fields(&self) -> Vec<Field<'_>>;

    fn validate(&self) -> Result<(), RecordError> {
        Ok(())
    }

    fn from_payload(payload: &Value) -> Result<Self, RecordError> {
        let record = <Self as Deserialize>::deserialize(Payload::new(payload))?;
        record.validate()?;
        Ok(record)
    }

    fn to_payload(&self) -> Result<Value, RecordError> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Splits a payload into record entries: a JSON array, the `data` array of a controller
/// response envelope, or a single object.
pub fn entries(payload: &Value) -> Vec<&Value> {
    match payload {
        Value::Array(items) => items.iter().collect(),
        Value::Object(envelope) => match envelope.get("data") {
            Some(Value::Array(items)) => items.iter().collect(),
            _ => vec![payload],
        },
        _ => vec![payload],
    }
}

pub fn from_payload_list<T: Record>(payload: &Value) -> Result<Vec<T>, RecordError> {
    entries(payload).into_iter().map(T::from_payload).collect()
}
