use nom::IResult;

/// Full month names, uppercased to match normalized input.
pub(crate) const MONTH_NAMES: [&str; 12] = [
    "JANUARY",
    "FEBRUARY",
    "MARCH",
    "APRIL",
    "MAY",
    "JUNE",
    "JULY",
    "AUGUST",
    "SEPTEMBER",
    "OCTOBER",
    "NOVEMBER",
    "DECEMBER",
];

/// Three-letter abbreviations, uppercased. Also the month spelling used in the
/// canonical `D-MMM-Y` form that relative keywords are rewritten into.
pub(crate) const MONTH_ABBREVS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Title-case abbreviations for display output.
pub(crate) const MONTH_DISPLAY: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub(crate) type StrResult<'a, T> = IResult<&'a str, T>;

pub(crate) fn is_all_digits(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

pub(crate) fn take_n_digits(n: usize) -> impl FnMut(&str) -> StrResult<&str> {
    move |remain| nom::bytes::complete::take_while_m_n(n, n, |x: char| x.is_ascii_digit())(remain)
}

/// A year segment is exactly four digits, nothing else. `"600"` and `"02025"`
/// both fail the template they appear in.
pub(crate) fn year_number(segment: &str) -> Option<i32> {
    if is_all_digits(segment) && segment.len() == 4 {
        segment.parse().ok()
    } else {
        None
    }
}

/// A day segment is any pure-digit string. No 1..=31 bound is applied here:
/// out-of-range days are rejected by calendar construction, so that `"123"`
/// fails a template only because no month has 123 days. Tightening this would
/// change which template wins for some inputs.
pub(crate) fn day_number(segment: &str) -> Option<u32> {
    if is_all_digits(segment) {
        segment.parse().ok()
    } else {
        None
    }
}

/// A month segment is an integer 1..=12, a full English month name, or its
/// three-letter abbreviation. Input arrives already uppercased.
pub(crate) fn month_number(segment: &str) -> Option<u32> {
    if is_all_digits(segment) {
        let month: u32 = segment.parse().ok()?;
        if (1..=12).contains(&month) {
            return Some(month);
        }
        return None;
    }
    for (index, (name, abbrev)) in MONTH_NAMES.iter().zip(MONTH_ABBREVS.iter()).enumerate() {
        if segment == *name || segment == *abbrev {
            return Some(index as u32 + 1);
        }
    }
    None
}
