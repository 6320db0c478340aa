// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use core::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::common::MONTH_DISPLAY;
use crate::TimePointParser;

/// A point in time as a person typed it: a calendar date, a date with a
/// time-of-day, or an opaque string that could not be read as either.
///
/// `Date` and `DateTime` are only ever constructed from validated
/// [chrono::NaiveDate] / [chrono::NaiveDateTime] values, so an invalid
/// combination like April 31 is unrepresentable. A failed construction
/// surfaces as `Opaque` instead.
///
/// ### Equality
///
/// Equality is structural per variant. In particular a `Date` never equals a
/// `DateTime`, even at midnight of the same day; use
/// [TimePoint::is_same_day_as] for calendar-day comparison.
///
/// ```
/// use timepoint::TimePoint;
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2025, 10, 12).unwrap();
/// let date = TimePoint::from(day);
/// let midnight = TimePoint::from(day.and_hms_opt(0, 0, 0).unwrap());
/// assert_ne!(date, midnight);
/// assert!(date.is_same_day_as(&midnight));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum TimePoint {
    /// The original input, case-preserved, with no temporal meaning attached.
    Opaque(String),
    /// A valid proleptic-Gregorian calendar date.
    Date(NaiveDate),
    /// A calendar date with a time-of-day, minute precision.
    DateTime(NaiveDateTime),
}

impl TimePoint {
    /// Parses `input` against the local clock. Shorthand for
    /// [TimePointParser::new] followed by [TimePointParser::parse]; prefer
    /// holding a parser when resolving several inputs against the same "now".
    pub fn parse(input: &str) -> Self {
        TimePointParser::new().parse(input)
    }

    /// The stored text, if this is an `Opaque`.
    pub fn as_opaque(&self) -> Option<&str> {
        match self {
            TimePoint::Opaque(text) => Some(text),
            _ => None,
        }
    }

    /// The stored date, if this is a `Date`.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            TimePoint::Date(date) => Some(*date),
            _ => None,
        }
    }

    /// The stored date-time, if this is a `DateTime`.
    pub fn as_date_time(&self) -> Option<NaiveDateTime> {
        match self {
            TimePoint::DateTime(date_time) => Some(*date_time),
            _ => None,
        }
    }

    /// Day of month, 1..=31. `None` for `Opaque`.
    pub fn day(&self) -> Option<u32> {
        self.calendar_date().map(|d| d.day())
    }

    /// Month of year, 1..=12. `None` for `Opaque`.
    pub fn month(&self) -> Option<u32> {
        self.calendar_date().map(|d| d.month())
    }

    /// Calendar year. `None` for `Opaque`.
    pub fn year(&self) -> Option<i32> {
        self.calendar_date().map(|d| d.year())
    }

    /// Hour of day, 0..=23. `None` unless this is a `DateTime`.
    pub fn hour(&self) -> Option<u32> {
        self.as_date_time().map(|dt| dt.hour())
    }

    /// Minute of hour, 0..=59. `None` unless this is a `DateTime`.
    pub fn minute(&self) -> Option<u32> {
        self.as_date_time().map(|dt| dt.minute())
    }

    /// The calendar-date component of either dated variant.
    fn calendar_date(&self) -> Option<NaiveDate> {
        match self {
            TimePoint::Opaque(_) => None,
            TimePoint::Date(date) => Some(*date),
            TimePoint::DateTime(date_time) => Some(date_time.date()),
        }
    }

    /// Both variants as an instant, a `Date` standing for midnight of its day.
    fn instant(&self) -> Option<NaiveDateTime> {
        match self {
            TimePoint::Opaque(_) => None,
            TimePoint::Date(date) => date.and_hms_opt(0, 0, 0),
            TimePoint::DateTime(date_time) => Some(*date_time),
        }
    }

    /// Whether `self` is chronologically before `other`.
    ///
    /// A `Date` compares as midnight of its day. Returns `false` whenever
    /// either operand is `Opaque`: with no temporal information there is no
    /// "before", and that is not an error.
    pub fn is_before(&self, other: &TimePoint) -> bool {
        match (self.instant(), other.instant()) {
            (Some(this), Some(that)) => this < that,
            _ => false,
        }
    }

    /// Whether `self` is chronologically after `other`. The mirror of
    /// [TimePoint::is_before], with the same treatment of `Opaque` operands.
    pub fn is_after(&self, other: &TimePoint) -> bool {
        match (self.instant(), other.instant()) {
            (Some(this), Some(that)) => this > that,
            _ => false,
        }
    }

    /// Whether both operands fall on the same calendar day, ignoring any
    /// time-of-day. Always `false` when either operand is `Opaque`.
    pub fn is_same_day_as(&self, other: &TimePoint) -> bool {
        match (self.calendar_date(), other.calendar_date()) {
            (Some(this), Some(that)) => this == that,
            _ => false,
        }
    }
}

impl From<NaiveDate> for TimePoint {
    fn from(date: NaiveDate) -> Self {
        TimePoint::Date(date)
    }
}

impl From<NaiveDateTime> for TimePoint {
    fn from(date_time: NaiveDateTime) -> Self {
        TimePoint::DateTime(date_time)
    }
}

impl fmt::Display for TimePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimePoint::Opaque(text) => f.write_str(text),
            TimePoint::Date(date) => write!(
                f,
                "{} {} {}",
                MONTH_DISPLAY[date.month0() as usize],
                date.day(),
                date.year()
            ),
            TimePoint::DateTime(dt) => write!(
                f,
                "{}:{:02} {} {} {}",
                dt.hour(),
                dt.minute(),
                MONTH_DISPLAY[dt.month0() as usize],
                dt.day(),
                dt.year()
            ),
        }
    }
}

impl fmt::Debug for TimePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        <Self as fmt::Display>::fmt(self, f)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> TimePoint {
        TimePoint::Date(NaiveDate::from_ymd_opt(year, month, day).unwrap())
    }

    fn date_time(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> TimePoint {
        TimePoint::DateTime(
            NaiveDate::from_ymd_opt(year, month, day)
                .unwrap()
                .and_hms_opt(hour, minute, 0)
                .unwrap(),
        )
    }

    fn opaque(text: &str) -> TimePoint {
        TimePoint::Opaque(text.into())
    }

    #[test]
    fn display() {
        assert_eq!(date(2025, 10, 12).to_string(), "Oct 12 2025");
        assert_eq!(date(2025, 1, 1).to_string(), "Jan 1 2025");
        assert_eq!(date_time(2025, 10, 12, 9, 5).to_string(), "9:05 Oct 12 2025");
        assert_eq!(date_time(2025, 12, 31, 23, 59).to_string(), "23:59 Dec 31 2025");
        assert_eq!(date_time(2025, 7, 4, 0, 0).to_string(), "0:00 Jul 4 2025");
        assert_eq!(opaque("next-ish friday").to_string(), "next-ish friday");
    }

    #[test]
    fn equality_is_per_variant() {
        assert_eq!(date(2024, 1, 1), date(2024, 1, 1));
        assert_ne!(date(2024, 1, 1), date(2024, 1, 2));
        assert_eq!(date_time(2024, 1, 1, 8, 30), date_time(2024, 1, 1, 8, 30));
        assert_ne!(date_time(2024, 1, 1, 8, 30), date_time(2024, 1, 1, 8, 31));
        assert_eq!(opaque("soon"), opaque("soon"));
        assert_ne!(opaque("soon"), opaque("SOON"));
    }

    /// A Date and a DateTime at midnight of the same day overlap as instants
    /// but are deliberately NOT equal. Calendar-day identity is a separate
    /// question, answered by is_same_day_as.
    #[test]
    fn date_never_equals_date_time() {
        let day = date(2024, 5, 10);
        let midnight = date_time(2024, 5, 10, 0, 0);
        assert_ne!(day, midnight);
        assert!(day.is_same_day_as(&midnight));
        // The same pair is also unordered: neither side is strictly earlier.
        assert!(!day.is_before(&midnight));
        assert!(!day.is_after(&midnight));
    }

    #[test]
    fn ordering_dates() {
        assert!(date(2000, 1, 1).is_before(&date(2000, 1, 2)));
        assert!(date(2000, 1, 2).is_after(&date(2000, 1, 1)));
        assert!(!date(2000, 1, 1).is_before(&date(2000, 1, 1)));
        assert!(!date(2000, 1, 1).is_after(&date(2000, 1, 1)));
    }

    #[test]
    fn ordering_promotes_date_to_midnight() {
        // 23:34 on the 1st is before the plain 2nd, after the plain 1st.
        let late_first = date_time(2024, 5, 1, 23, 34);
        assert!(date(2024, 5, 2).is_after(&late_first));
        assert!(late_first.is_before(&date(2024, 5, 2)));
        assert!(late_first.is_after(&date(2024, 5, 1)));
        assert!(date(2024, 5, 1).is_before(&late_first));
    }

    #[test]
    fn ordering_date_times() {
        let earlier = date_time(2000, 5, 1, 0, 0);
        let later = date_time(2000, 5, 1, 23, 59);
        assert!(earlier.is_before(&later));
        assert!(later.is_after(&earlier));
        assert!(!earlier.is_after(&later));
    }

    #[test]
    fn opaque_operands_never_order() {
        let a = opaque("abc");
        let b = opaque("def");
        assert!(!a.is_before(&b));
        assert!(!a.is_after(&b));
        // One opaque side is just as uninformative as two.
        assert!(!a.is_before(&date(2024, 1, 1)));
        assert!(!date(2024, 1, 1).is_after(&a));
    }

    #[test]
    fn trichotomy_over_dated_values() {
        let points = [
            date(2024, 5, 10),
            date(2024, 5, 11),
            date_time(2024, 5, 10, 0, 1),
            date_time(2024, 5, 10, 12, 0),
            date_time(2024, 5, 11, 0, 1),
        ];
        for a in &points {
            for b in &points {
                let holds = [a.is_before(b), *a == *b, a.is_after(b)];
                assert_eq!(
                    holds.iter().filter(|h| **h).count(),
                    1,
                    "expected exactly one of before/equal/after for {:?} vs {:?}",
                    a,
                    b
                );
                assert_eq!(a.is_before(b), b.is_after(a));
            }
        }
    }

    #[test]
    fn same_day() {
        assert!(date(2024, 5, 10).is_same_day_as(&date(2024, 5, 10)));
        assert!(!date(2024, 5, 10).is_same_day_as(&date(2024, 5, 11)));
        assert!(date(2025, 10, 10).is_same_day_as(&date_time(2025, 10, 10, 12, 34)));
        assert!(date_time(2025, 10, 10, 12, 34).is_same_day_as(&date(2025, 10, 10)));
        assert!(!date_time(2026, 10, 10, 10, 0).is_same_day_as(&date_time(2026, 10, 11, 0, 0)));
        assert!(!opaque("2024 Oct 10").is_same_day_as(&date(2024, 10, 10)));
        assert!(!date(2024, 10, 10).is_same_day_as(&opaque("2024 Oct 10")));
        assert!(!opaque("x").is_same_day_as(&opaque("x")));
    }

    #[test]
    fn accessors() {
        let d = date(2025, 10, 12);
        assert_eq!((d.year(), d.month(), d.day()), (Some(2025), Some(10), Some(12)));
        assert_eq!(d.hour(), None);
        assert_eq!(d.minute(), None);

        let dt = date_time(2025, 10, 12, 9, 5);
        assert_eq!(dt.day(), Some(12));
        assert_eq!((dt.hour(), dt.minute()), (Some(9), Some(5)));

        let o = opaque("whenever");
        assert_eq!((o.year(), o.month(), o.day()), (None, None, None));
        assert_eq!(o.as_opaque(), Some("whenever"));
        assert_eq!(o.as_date(), None);
        assert_eq!(o.as_date_time(), None);
    }
}
