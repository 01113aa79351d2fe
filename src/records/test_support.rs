use crate::record::{Record, RecordError};
use pretty_assertions::assert_eq;
use serde_json::Value;
use std::fmt::Debug;

/// Constructs `T` from `payload` and checks that serializing it gives the payload back.
pub(crate) fn assert_round_trip<T: Record + Debug>(payload: Value) -> T {
    let record = T::from_payload(&payload).unwrap_or_else(|err| panic!("{} failed to construct: {}", T::NAME, err));
    assert_eq!(record.to_payload().unwrap(), payload);
    record
}

/// Removes every key of `payload` in turn; only the `required` keys may fail construction.
pub(crate) fn assert_required_fields<T: Record + Debug>(payload: &Value, required: &[&str]) {
    let entries = payload.as_object().expect("sample payload must be an object");
    for key in required {
        assert!(entries.contains_key(*key), "sample payload for {} lacks '{}'", T::NAME, key);
    }

    for key in entries.keys() {
        let mut reduced = entries.clone();
        reduced.remove(key);
        let result = T::from_payload(&Value::Object(reduced));
        if required.contains(&key.as_str()) {
            assert!(
                matches!(result, Err(RecordError::MissingField(field)) if field == key),
                "removing '{}' from {}: {:?}",
                key,
                T::NAME,
                result
            );
        } else {
            assert!(result.is_ok(), "removing optional '{}' from {}: {:?}", key, T::NAME, result);
        }
    }
}
