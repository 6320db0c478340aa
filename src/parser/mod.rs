// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The template-driven parse engine. Input is normalized once, then tried
//! against a fixed, ordered list of field layouts; the first layout that
//! yields a valid calendar construction wins and later layouts are never
//! consulted. Day/month ambiguity is resolved by that ordering alone: `D/M`
//! is listed before `M/D`, so `12/12` reads day-first while `12/13` falls
//! through to month-first because no month 13 exists.

mod relative;
mod time;

use chrono::{Datelike, Local, NaiveDate, NaiveTime};

use crate::common::{day_number, month_number, year_number};
use crate::TimePoint;
use time::{time_of_day, TimeOfDay};

/// One field code of a layout. `Time` covers a whole time-of-day token, the
/// rest are single calendar components.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Field {
    Year,
    Month,
    Day,
    Time,
}

use Field::{Day, Month, Time, Year};

/// Every layout the engine knows, in match order. All of them contain a day
/// and a month; year and time are optional extras in either position.
const TEMPLATES: &[&[Field]] = &[
    &[Day, Month],
    &[Month, Day],
    &[Day, Month, Year],
    &[Month, Day, Year],
    &[Year, Month, Day],
    &[Year, Day, Month],
    &[Time, Day, Month],
    &[Time, Month, Day],
    &[Day, Month, Time],
    &[Month, Day, Time],
    &[Time, Day, Month, Year],
    &[Time, Month, Day, Year],
    &[Time, Year, Month, Day],
    &[Time, Year, Day, Month],
    &[Day, Month, Year, Time],
    &[Month, Day, Year, Time],
    &[Year, Month, Day, Time],
    &[Year, Day, Month, Time],
];

/// Characters that may separate adjacent fields. Any of them delimits the
/// next segment; they can be mixed freely within one input.
const SEPARATORS: [char; 4] = ['/', ' ', '-', '\\'];

/// Converts raw strings into [TimePoint]s against a fixed "today".
///
/// The clock is read once, at construction, so every relative keyword and
/// defaulted year inside a single parser resolves against the same day.
/// [TimePointParser::with_today] pins the day explicitly, which tests and
/// deterministic replays want.
///
/// ```
/// use timepoint::TimePointParser;
/// use chrono::NaiveDate;
///
/// let parser = TimePointParser::with_today(NaiveDate::from_ymd_opt(2025, 10, 12).unwrap());
/// assert_eq!(parser.parse("Oct 12").to_string(), "Oct 12 2025");
/// assert_eq!(parser.parse("tomorrow 9AM").to_string(), "9:00 Oct 13 2025");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TimePointParser {
    today: NaiveDate,
}

impl Default for TimePointParser {
    fn default() -> Self {
        Self::new()
    }
}

impl TimePointParser {
    /// A parser anchored at the local calendar day.
    pub fn new() -> Self {
        Self::with_today(Local::now().date_naive())
    }

    /// A parser anchored at an explicit day.
    pub fn with_today(today: NaiveDate) -> Self {
        TimePointParser { today }
    }

    /// The day this parser resolves relative keywords and omitted years
    /// against.
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Parses `input` into a [TimePoint]. Total: anything that no template
    /// reads as a valid calendar point comes back as
    /// [TimePoint::Opaque] wrapping the original, case-preserved input.
    pub fn parse(&self, input: &str) -> TimePoint {
        let normalized = relative::normalize(input, self.today);
        for template in TEMPLATES {
            if let Some(point) = self.apply(&normalized, template) {
                return point;
            }
        }
        TimePoint::Opaque(input.to_owned())
    }

    /// Tries one layout. `None` means "this template did not match", whether
    /// the failure was segmentation, a field interpreter, or calendar
    /// construction.
    fn apply(&self, normalized: &str, template: &[Field]) -> Option<TimePoint> {
        let mut segments = Segments::new(normalized);
        let mut day = None;
        let mut month = None;
        let mut year = None;
        let mut time: Option<TimeOfDay> = None;
        let last = template.len() - 1;
        for (index, field) in template.iter().enumerate() {
            let segment = if index == last {
                segments.rest()?
            } else {
                segments.next()?
            };
            match field {
                Field::Year => year = Some(year_number(segment)?),
                Field::Month => month = Some(month_number(segment)?),
                Field::Day => day = Some(day_number(segment)?),
                Field::Time => time = Some(time_of_day(segment)?),
            }
        }
        // Templates without a year field default it, template-wide.
        let year = match year {
            Some(year) => year,
            None => self.today.year(),
        };
        let date = NaiveDate::from_ymd_opt(year, month?, day?)?;
        match time {
            None => Some(TimePoint::Date(date)),
            Some(TimeOfDay { hh, mm }) => {
                let time = NaiveTime::from_hms_opt(hh as u32, mm as u32, 0)?;
                Some(TimePoint::DateTime(date.and_time(time)))
            }
        }
    }
}

/// Greedy left-to-right segmentation: each call to `next` takes everything up
/// to the first separator; `rest` hands over whatever remains, unsplit, for
/// the final field.
struct Segments<'a> {
    remain: &'a str,
    exhausted: bool,
}

impl<'a> Segments<'a> {
    fn new(input: &'a str) -> Self {
        Segments {
            remain: input,
            exhausted: false,
        }
    }

    fn next(&mut self) -> Option<&'a str> {
        if self.exhausted {
            return None;
        }
        let index = self.remain.find(&SEPARATORS[..])?;
        let segment = &self.remain[..index];
        self.remain = &self.remain[index + 1..];
        Some(segment)
    }

    fn rest(&mut self) -> Option<&'a str> {
        if self.exhausted {
            return None;
        }
        self.exhausted = true;
        Some(self.remain)
    }
}
