use crate::domain::wire_enum::wire_enum;

wire_enum! {
    /// Lifetime of certificates signed by the controller CA.
    ValidityPeriod {
        OneYear => "1Y",
        TwoYears => "2Y",
        ThreeYears => "3Y",
        FiveYears => "5Y",
        TenYears => "10Y",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(ValidityPeriod::OneYear, "1Y")]
    #[case(ValidityPeriod::TenYears, "10Y")]
    fn serializes_to_the_wire_string(#[case] period: ValidityPeriod, #[case] expected: &str) {
        assert_eq!(serde_json::to_value(period).unwrap(), json!(expected));
    }

    #[rstest]
    #[case("1Y", ValidityPeriod::OneYear)]
    #[case("2Y", ValidityPeriod::TwoYears)]
    #[case("3Y", ValidityPeriod::ThreeYears)]
    #[case("5Y", ValidityPeriod::FiveYears)]
    #[case("10Y", ValidityPeriod::TenYears)]
    fn parses_every_accepted_period(#[case] wire: &str, #[case] expected: ValidityPeriod) {
        assert_eq!(wire.parse::<ValidityPeriod>().unwrap(), expected);
        assert_eq!(expected.as_str(), wire);
    }

    #[test]
    fn accepted_set_lists_every_period() {
        assert_eq!(ValidityPeriod::ACCEPTED, &["1Y", "2Y", "3Y", "5Y", "10Y"]);
    }

    #[test]
    fn rejects_unlisted_periods() {
        assert!("4Y".parse::<ValidityPeriod>().is_err());
    }
}
