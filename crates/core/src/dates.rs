//! Observation date parsing
//!
//! Dates travel through the system as `YYYY-MM-DD` text: that is what the
//! source CSVs contain, what SQLite stores, and what the API accepts in
//! paths. Lexicographic order of the stored text matches chronological
//! order, which the range queries depend on.

use time::{format_description::BorrowedFormatItem, macros::format_description, Date};

/// The one date format the system understands.
pub const DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

/// Parse a `YYYY-MM-DD` string into a [`Date`].
pub fn parse_date(input: &str) -> Result<Date, time::error::Parse> {
    Date::parse(input, DATE_FORMAT)
}

/// Format a [`Date`] back to its `YYYY-MM-DD` storage form.
pub fn format_date(date: Date) -> Result<String, time::error::Format> {
    date.format(DATE_FORMAT)
}
