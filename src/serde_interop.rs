use core::fmt;

use serde::de::{self, Deserialize};
use serde::ser::{self, Serialize};

use crate::TimePoint;

/// TimePoints persist as their display string; collaborators store that and
/// re-parse on load. Dated values with a four-digit year round-trip exactly.
/// Relative keywords were already resolved before serialization, so
/// deserialization reading the clock only affects strings that default their
/// year.
impl Serialize for TimePoint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

struct TimePointVisitor;

impl<'de> de::Visitor<'de> for TimePointVisitor {
    type Value = TimePoint;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "a date/time string")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        // parse is total, so deserialization never fails on content.
        Ok(TimePoint::parse(value))
    }
}

impl<'de> Deserialize<'de> for TimePoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as de::Deserializer<'de>>::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_str(TimePointVisitor)
    }
}

#[test]
fn test_serde() {
    use chrono::NaiveDate;
    use serde_test::{assert_tokens, Token};

    let date = NaiveDate::from_ymd_opt(2025, 10, 12).unwrap();
    assert_tokens(&TimePoint::Date(date), &[Token::String("Oct 12 2025")]);
    assert_tokens(
        &TimePoint::DateTime(date.and_hms_opt(9, 5, 0).unwrap()),
        &[Token::String("9:05 Oct 12 2025")],
    );
    assert_tokens(
        &TimePoint::Opaque("after the offsite".into()),
        &[Token::String("after the offsite")],
    );
}
