// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The time-of-day segment interpreter. A segment is a whole token between
//! separators, so every alternative must consume its input completely; the
//! accepted shapes are a 4-digit `HHMM` block, an `AM`/`PM`-suffixed 12-hour
//! reading, and a colon-separated 24-hour pair.

#[allow(unused_imports)]
use nom::{
    branch as nb, bytes::complete as nbc, character::complete as ncc, combinator as nc,
    sequence as ns, Parser,
};

use crate::common::{take_n_digits, StrResult};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct TimeOfDay {
    pub hh: u8,
    pub mm: u8,
}

/// Interprets one segment as a time of day, or `None` if it has no valid
/// reading. `None` fails the surrounding template.
pub(crate) fn time_of_day(segment: &str) -> Option<TimeOfDay> {
    nb::alt((hhmm_block, twelve_hour, colon_pair))(segment)
        .ok()
        .map(|(_, time)| time)
}

/// `0930`, `2359`. Exactly four digits read as HH then MM.
fn hhmm_block(remain: &str) -> StrResult<TimeOfDay> {
    nc::map_opt(nc::all_consuming(take_n_digits(4)), |four: &str| {
        let hh: u8 = four[..2].parse().ok()?;
        let mm: u8 = four[2..].parse().ok()?;
        in_day_range(hh, mm)
    })(remain)
}

/// `6PM`, `12AM`, `8:30PM`. A bare hour or an `HH:MM` pair, hour 1..=12,
/// converted with the usual wraparound: 12AM is midnight, 12PM is noon.
fn twelve_hour(remain: &str) -> StrResult<TimeOfDay> {
    nc::map_opt(
        nc::all_consuming(ns::tuple((
            ncc::u8,
            nc::opt(ns::preceded(ncc::char(':'), ncc::u8)),
            nb::alt((nbc::tag("AM"), nbc::tag("PM"))),
        ))),
        |(hour, minute, meridiem)| {
            if !(1..=12).contains(&hour) {
                return None;
            }
            let mm = minute.unwrap_or(0);
            if mm > 59 {
                return None;
            }
            let hh = match (meridiem, hour) {
                ("AM", 12) => 0,
                ("AM", hour) => hour,
                ("PM", 12) => 12,
                (_, hour) => hour + 12,
            };
            Some(TimeOfDay { hh, mm })
        },
    )(remain)
}

/// `9:05`, `23:59`. Hours and minutes validated independently.
fn colon_pair(remain: &str) -> StrResult<TimeOfDay> {
    nc::map_opt(
        nc::all_consuming(ns::separated_pair(ncc::u8, ncc::char(':'), ncc::u8)),
        |(hh, mm)| in_day_range(hh, mm),
    )(remain)
}

fn in_day_range(hh: u8, mm: u8) -> Option<TimeOfDay> {
    if hh <= 23 && mm <= 59 {
        Some(TimeOfDay { hh, mm })
    } else {
        None
    }
}
