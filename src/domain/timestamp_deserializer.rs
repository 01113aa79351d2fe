use crate::domain::Timestamp;
use serde::de::{Error, Unexpected, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(TimestampVisitor)
    }
}

struct TimestampVisitor;

impl<'de> Visitor<'de> for TimestampVisitor {
    type Value = Timestamp;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("epoch milliseconds or an RFC 3339 timestamp")
    }

    fn visit_i64<E: Error>(self, value: i64) -> Result<Timestamp, E> {
        Timestamp::from_epoch_millis(value).ok_or_else(|| Error::invalid_value(Unexpected::Signed(value), &self))
    }

    fn visit_u64<E: Error>(self, value: u64) -> Result<Timestamp, E> {
        i64::try_from(value)
            .ok()
            .and_then(Timestamp::from_epoch_millis)
            .ok_or_else(|| Error::invalid_value(Unexpected::Unsigned(value), &self))
    }

    fn visit_str<E: Error>(self, value: &str) -> Result<Timestamp, E> {
        Timestamp::parse_rfc3339(value).map_err(|_| Error::invalid_value(Unexpected::Str(value), &self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TimestampFormat;
    use crate::record::{Payload, RecordError};
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(1680000000000u64), TimestampFormat::EpochMillis)]
    #[case(json!(-1000), TimestampFormat::EpochMillis)]
    #[case(json!("2023-03-28T10:40:00Z"), TimestampFormat::Rfc3339)]
    #[case(json!("2023-03-28T10:40:00.250+05:30"), TimestampFormat::Rfc3339)]
    fn deserializes_valid_timestamps(#[case] value: serde_json::Value, #[case] format: TimestampFormat) {
        let timestamp = Timestamp::deserialize(Payload::new(&value)).unwrap();
        assert_eq!(timestamp.format(), format);
    }

    #[rstest]
    #[case::date_only(json!("2023-03-28"))]
    #[case::free_text(json!("yesterday"))]
    #[case::boolean(json!(true))]
    #[case::out_of_range(json!(u64::MAX))]
    fn fails_for_an_invalid_timestamp(#[case] value: serde_json::Value) {
        let result = Timestamp::deserialize(Payload::new(&value));
        assert!(matches!(result, Err(RecordError::Coercion(_))));
    }
}
