use crate::record::RenderField;
use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

/// How a timestamp was written on the wire, so it can be written back the same way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimestampFormat {
    EpochMillis,
    Rfc3339,
}

#[derive(Clone, Copy, Debug)]
pub struct Timestamp {
    instant: DateTime<FixedOffset>,
    format: TimestampFormat,
}

impl Timestamp {
    pub fn from_epoch_millis(millis: i64) -> Option<Self> {
        DateTime::from_timestamp_millis(millis).map(|utc| Timestamp {
            instant: utc.fixed_offset(),
            format: TimestampFormat::EpochMillis,
        })
    }

    pub fn parse_rfc3339(value: &str) -> Result<Self, chrono::ParseError> {
        Ok(Timestamp {
            instant: DateTime::parse_from_rfc3339(value)?,
            format: TimestampFormat::Rfc3339,
        })
    }

    pub fn instant(&self) -> DateTime<Utc> {
        self.instant.with_timezone(&Utc)
    }

    pub fn format(&self) -> TimestampFormat {
        self.format
    }

    pub fn epoch_millis(&self) -> i64 {
        self.instant.timestamp_millis()
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(instant: DateTime<Utc>) -> Self {
        Timestamp {
            instant: instant.fixed_offset(),
            format: TimestampFormat::EpochMillis,
        }
    }
}

impl PartialEq for Timestamp {
    fn eq(&self, other: &Self) -> bool {
        self.instant == other.instant
    }
}

impl Eq for Timestamp {}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.format {
            TimestampFormat::EpochMillis => serializer.serialize_i64(self.epoch_millis()),
            TimestampFormat::Rfc3339 => serializer.serialize_str(&self.instant.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
        }
    }
}

impl RenderField for Timestamp {
    fn render(&self) -> String {
        self.instant.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }
}
