// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The normalization pre-pass: trim, uppercase, and rewrite relative-time
//! keywords into absolute dates in the canonical `D-MMM-Y` token form
//! (`12-OCT-2025`), which the template list then matches like any other
//! input. Longer aliases are listed before their prefixes (`TUESDAY` before
//! `TUES` before `TUE`) so a substitution never leaves a partial keyword
//! behind.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::common::MONTH_ABBREVS;

const WEEKDAYS: [(Weekday, &[&str]); 7] = [
    (Weekday::Mon, &["MONDAY", "MON"]),
    (Weekday::Tue, &["TUESDAY", "TUES", "TUE"]),
    (Weekday::Wed, &["WEDNESDAY", "WED"]),
    (Weekday::Thu, &["THURSDAY", "THURS", "THUR", "THU"]),
    (Weekday::Fri, &["FRIDAY", "FRI"]),
    (Weekday::Sat, &["SATURDAY", "SAT"]),
    (Weekday::Sun, &["SUNDAY", "SUN"]),
];

/// Produces the uppercased, keyword-substituted copy of `input` that template
/// matching runs on. The original string is kept by the caller for the
/// opaque fallback.
pub(crate) fn normalize(input: &str, today: NaiveDate) -> String {
    let mut text = input.trim().to_uppercase();
    text = substitute(&text, &["TODAY", "TDY"], &canonical(today));
    text = substitute(&text, &["TOMORROW", "TMRW", "TMR"], &canonical(plus_days(today, 1)));
    text = substitute(&text, &["NEXT WEEK"], &canonical(plus_days(today, 7)));
    for (weekday, aliases) in WEEKDAYS.iter() {
        text = substitute(&text, aliases, &canonical(next_weekday(today, *weekday)));
    }
    text
}

/// Replaces every occurrence of any alias, in listed order.
fn substitute(text: &str, aliases: &[&str], replacement: &str) -> String {
    let mut out = text.to_owned();
    for alias in aliases {
        out = out.replace(alias, replacement);
    }
    out
}

/// `12-OCT-2025`. Unambiguous under the template list regardless of what
/// surrounds it, since the month is spelled out.
fn canonical(date: NaiveDate) -> String {
    format!(
        "{}-{}-{}",
        date.day(),
        MONTH_ABBREVS[date.month0() as usize],
        date.year()
    )
}

fn plus_days(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days)).unwrap_or(date)
}

/// The next occurrence of `weekday` strictly after `today`. Naming today's
/// own weekday means a week from now, not today.
fn next_weekday(today: NaiveDate, weekday: Weekday) -> NaiveDate {
    let ahead = (weekday.num_days_from_monday() + 7 - today.weekday().num_days_from_monday()) % 7;
    let ahead = if ahead == 0 { 7 } else { ahead };
    plus_days(today, ahead as u64)
}
