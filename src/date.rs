//! Optional calendar dates for todo.txt lines.
//!
//! Creation, completion and due dates are all optional, and the grammar
//! requires that a malformed date token never aborts a parse. [`NullDate`]
//! carries that "value plus validity" semantic: an invalid cell displays as
//! an empty string and compares as absent.

use chrono::NaiveDate;

/// The `YYYY-MM-DD` format used by todo.txt.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// An optional calendar date. Invalid means "absent", not "zero date".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NullDate(Option<NaiveDate>);

impl NullDate {
    /// The absent date cell.
    pub const fn invalid() -> Self {
        NullDate(None)
    }

    pub const fn valid(date: NaiveDate) -> Self {
        NullDate(Some(date))
    }

    /// Today's date as a valid cell, in local time.
    pub fn today() -> Self {
        NullDate(Some(chrono::Local::now().date_naive()))
    }

    /// Strict `YYYY-MM-DD` parse. Anything else — wrong separators, short
    /// digit runs, trailing time-of-day components, impossible calendar
    /// dates — yields the invalid cell rather than an error.
    pub fn parse(s: &str) -> Self {
        let bytes = s.as_bytes();
        if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return NullDate(None);
        }
        let digits_ok = bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
        if !digits_ok {
            return NullDate(None);
        }

        match NaiveDate::parse_from_str(s, DATE_FORMAT) {
            Ok(date) => NullDate(Some(date)),
            Err(_) => NullDate(None),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_some()
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.0
    }

    /// Renders `YYYY-MM-DD` when valid, the empty string when not.
    pub fn display(&self) -> String {
        match self.0 {
            Some(date) => date.format(DATE_FORMAT).to_string(),
            None => String::new(),
        }
    }
}
