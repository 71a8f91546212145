//! Parsing the build start time typed at the prompt

use crate::error::{Error, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y/%m/%d", "%Y-%m-%d"];

const TIME_FORMATS: &[&str] = &["%H:%M:%S", "%H:%M"];

/// Parse the build start time
///
/// Empty input means `now`. Times without a date are taken as today in
/// `now`'s time zone, and dates without a time as midnight. Inputs with an
/// explicit offset (RFC 3339) are used as given.
///
/// Examples of accepted input: `12:30`, `2019/1/23 9:30`,
/// `2019-01-23 09:30:00`, `2019-01-23T09:30:00+09:00`.
pub fn parse_build_start<Tz: TimeZone>(input: &str, now: &DateTime<Tz>) -> Result<DateTime<Utc>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(now.with_timezone(&Utc));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }

    let naive = DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(input, fmt).ok())
                .map(|date| date.and_time(NaiveTime::MIN))
        })
        .or_else(|| {
            TIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveTime::parse_from_str(input, fmt).ok())
                .map(|time| now.date_naive().and_time(time))
        })
        .ok_or_else(|| Error::UserInput(format!("'{input}' is not a date/time")))?;

    now.timezone()
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| Error::UserInput(format!("'{input}' does not exist in the local time zone")))
}
