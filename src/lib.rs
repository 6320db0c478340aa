//! Forgiving parser for human-typed dates and times.
//!
//! People do not type ISO 8601 at a task tracker. They type `tomorrow 5pm`,
//! `12/13`, `aPR-23/12:34` or `next week`, and expect the other end to cope.
//! This crate turns such strings into a [TimePoint]: a calendar date, a date
//! with a time-of-day, or, when no reading of the input yields a valid
//! calendar point, the original string held opaquely. Parsing never fails;
//! unparseable input is a first-class outcome, not an error.
//!
//! ```
//! use timepoint::{TimePoint, TimePointParser};
//! use chrono::NaiveDate;
//!
//! // Pin "today" so the example is reproducible. `TimePointParser::new()`
//! // reads the local clock instead.
//! let today = NaiveDate::from_ymd_opt(2025, 10, 12).unwrap();
//! let parser = TimePointParser::with_today(today);
//!
//! assert_eq!(parser.parse("aPR-23/12:34").to_string(), "12:34 Apr 23 2025");
//! assert_eq!(parser.parse("12/13").to_string(), "Dec 13 2025");
//! assert_eq!(parser.parse("lunch with sam").to_string(), "lunch with sam");
//!
//! let deadline = parser.parse("Oct 20 2025");
//! let event = parser.parse("Oct 13 2025 9AM");
//! assert!(event.is_before(&deadline));
//! ```
//!
//! Ambiguous day/month order is resolved by a fixed template list rather than
//! heuristics: `12/13` is tried day-first, fails (no month 13 exists), then
//! succeeds month-first. The winning template is deterministic for any input
//! and any clock.

pub(crate) mod common;
mod parser;
mod timepoint;

#[cfg(feature = "serde")]
mod serde_interop;

pub use parser::TimePointParser;
pub use timepoint::TimePoint;
