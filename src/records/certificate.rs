use crate::domain::ValidityPeriod;
use crate::record::{Record, RecordError};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Minutes between certificate retrievals.
pub const RETRIEVE_INTERVAL: RangeInclusive<i64> = 1..=60;

/// Controller certificate authority settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
#[record(validate = "Certificate::check_retrieve_interval")]
pub struct Certificate {
    #[serde(rename = "certificateSigning")]
    pub controller_certificate: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    #[serde(rename = "validityPeriod")]
    pub validity_period: ValidityPeriod,
    // Textual on the wire, holds an integer.
    #[serde(rename = "retrieveInterval")]
    retrieve_interval: String,
}

impl Certificate {
    pub fn new(
        controller_certificate: String,
        first_name: String,
        last_name: String,
        email: String,
        validity_period: ValidityPeriod,
        retrieve_interval: impl ToString,
    ) -> Result<Self, RecordError> {
        let certificate = Certificate {
            controller_certificate,
            first_name,
            last_name,
            email,
            validity_period,
            retrieve_interval: retrieve_interval.to_string(),
        };
        certificate.validate()?;
        Ok(certificate)
    }

    pub fn retrieve_interval(&self) -> &str {
        &self.retrieve_interval
    }

    pub fn set_retrieve_interval(&mut self, retrieve_interval: impl ToString) -> Result<(), RecordError> {
        let retrieve_interval = retrieve_interval.to_string();
        parse_retrieve_interval(&retrieve_interval)?;
        self.retrieve_interval = retrieve_interval;
        Ok(())
    }

    fn check_retrieve_interval(&self) -> Result<(), RecordError> {
        parse_retrieve_interval(&self.retrieve_interval).map(|_| ())
    }
}

fn parse_retrieve_interval(value: &str) -> Result<i64, RecordError> {
    let minutes = parse_minutes(value.trim())
        .ok_or_else(|| RecordError::Coercion(format!("retrieve interval '{}' is not an integer", value)))?;

    if !RETRIEVE_INTERVAL.contains(&minutes) {
        return Err(RecordError::RetrieveIntervalOutOfRange {
            value: minutes,
            range: RETRIEVE_INTERVAL,
        });
    }
    Ok(minutes)
}

/// Integers beyond `i64` saturate, so they still land outside the legal range.
fn parse_minutes(text: &str) -> Option<i64> {
    if let Ok(minutes) = text.parse::<i64>() {
        return Some(minutes);
    }

    let (negative, digits) = match text.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(if negative { i64::MIN } else { i64::MAX })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::test_support::{assert_required_fields, assert_round_trip};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::{Value, json};

    fn certificate_payload(retrieve_interval: Value) -> Value {
        json!({
            "certificateSigning": "enterprise",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "pki@example.net",
            "validityPeriod": "2Y",
            "retrieveInterval": retrieve_interval
        })
    }

    #[test]
    fn round_trips_a_textual_interval() {
        let certificate = assert_round_trip::<Certificate>(certificate_payload(json!("5")));
        assert_eq!(certificate.validity_period, ValidityPeriod::TwoYears);
        assert_eq!(certificate.retrieve_interval(), "5");
        assert_required_fields::<Certificate>(
            &certificate_payload(json!("5")),
            &["certificateSigning", "firstName", "lastName", "email", "validityPeriod", "retrieveInterval"],
        );
    }

    #[rstest]
    #[case(json!(1))]
    #[case(json!(30))]
    #[case(json!("60"))]
    fn accepts_intervals_in_range(#[case] retrieve_interval: Value) {
        let certificate = Certificate::from_payload(&certificate_payload(retrieve_interval.clone())).unwrap();
        let expected = match retrieve_interval {
            Value::String(text) => text,
            other => other.to_string(),
        };
        assert_eq!(certificate.retrieve_interval(), expected);
    }

    #[rstest]
    #[case(json!(0), 0)]
    #[case(json!(61), 61)]
    #[case(json!(-5), -5)]
    #[case(json!("120"), 120)]
    fn rejects_intervals_out_of_range(#[case] retrieve_interval: Value, #[case] expected: i64) {
        let result = Certificate::from_payload(&certificate_payload(retrieve_interval));
        assert!(matches!(
            result,
            Err(RecordError::RetrieveIntervalOutOfRange { value, range }) if value == expected && range == (1..=60)
        ));
    }

    #[rstest]
    #[case("99999999999999999999", i64::MAX)]
    #[case("-99999999999999999999", i64::MIN)]
    fn oversized_intervals_are_out_of_range(#[case] retrieve_interval: &str, #[case] expected: i64) {
        let result = Certificate::from_payload(&certificate_payload(json!(retrieve_interval)));
        assert!(matches!(
            result,
            Err(RecordError::RetrieveIntervalOutOfRange { value, .. }) if value == expected
        ));
    }

    #[rstest]
    #[case("every hour")]
    #[case("1.5")]
    #[case("-")]
    fn rejects_non_integer_text(#[case] retrieve_interval: &str) {
        let result = Certificate::from_payload(&certificate_payload(json!(retrieve_interval)));
        assert!(matches!(result, Err(RecordError::Coercion(_))));
    }

    #[test]
    fn rejects_an_unknown_validity_period() {
        let mut payload = certificate_payload(json!("5"));
        payload["validityPeriod"] = json!("7Y");
        assert!(matches!(Certificate::from_payload(&payload), Err(RecordError::UnrecognizedValue { .. })));
    }

    #[test]
    fn new_validates_the_interval() {
        let build = |interval: i64| {
            Certificate::new(
                "enterprise".to_string(),
                "Ada".to_string(),
                "Lovelace".to_string(),
                "pki@example.net".to_string(),
                ValidityPeriod::OneYear,
                interval,
            )
        };

        assert_eq!(build(15).unwrap().to_payload().unwrap()["retrieveInterval"], json!("15"));
        assert!(matches!(build(0), Err(RecordError::RetrieveIntervalOutOfRange { .. })));
    }

    #[test]
    fn set_retrieve_interval_keeps_the_old_value_on_error() {
        let mut certificate = Certificate::from_payload(&certificate_payload(json!("5"))).unwrap();

        assert!(certificate.set_retrieve_interval(90).is_err());
        assert_eq!(certificate.retrieve_interval(), "5");

        certificate.set_retrieve_interval("45").unwrap();
        assert_eq!(certificate.retrieve_interval(), "45");
    }
}
