//! Human readable Unix time stamps

use std::fmt::Display;

use chrono::{Local, TimeZone};

/// Describe `unixtime` in time zone `tz`
///
/// Returns `None` if the time cannot be represented as a calendar date.
///
/// ```
/// use chrono::Utc;
/// use toolshed::uxtime::describe_in;
///
/// assert_eq!(
///     describe_in(1_000_000_000, &Utc).unwrap(),
///     "Unix time 1000000000 is 2001-09-09 01:46:40 UTC"
/// );
/// ```
pub fn describe_in<Tz>(unixtime: i64, tz: &Tz) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let time = tz.timestamp_opt(unixtime, 0).single()?;
    Some(format!(
        "Unix time {unixtime} is {}",
        time.format("%Y-%m-%d %H:%M:%S %Z")
    ))
}

/// Describe `unixtime` in the local time zone
pub fn describe(unixtime: i64) -> Option<String> {
    describe_in(unixtime, &Local)
}

/// The current Unix time
pub fn now() -> i64 {
    chrono::Utc::now().timestamp()
}
