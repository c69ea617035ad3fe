//! Timestamp rendering for exported transcripts.

use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// Suffix appended to the timestamp to form the transcript file name.
pub const SESSION_FILE_SUFFIX: &str = "_session.md";

/// Renders the wall-clock time of `at` in the compact ISO 8601 basic form
/// (`YYYYMMDDTHHMMSS`), without separators or fractional seconds.
///
/// # Examples
///
/// ```
/// use chrono::{FixedOffset, TimeZone};
/// use session_export::export::domain::basic_timestamp;
///
/// let offset = FixedOffset::east_opt(2 * 3600).expect("valid offset");
/// let at = offset.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).single().expect("valid time");
/// assert_eq!(basic_timestamp(&at), "20240309T070501");
/// ```
#[must_use]
pub fn basic_timestamp<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    at.format("%Y%m%dT%H%M%S").to_string()
}

/// Returns the transcript file name for an export taking place at `at`.
#[must_use]
pub fn session_file_name<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!("{}{SESSION_FILE_SUFFIX}", basic_timestamp(at))
}

/// Renders the human-readable "Exported" label shown in the transcript
/// header, e.g. `Mar 09, 2024, 07:05:01 UTC+02:00`.
#[must_use]
pub fn exported_label<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    at.format("%b %d, %Y, %H:%M:%S UTC%:z").to_string()
}
