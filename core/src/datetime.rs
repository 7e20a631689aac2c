// SPDX-FileCopyrightText: 2026 Open Baby contributors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::offset::LocalResult;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

/// Calendar date format used by form date fields.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Wall-clock format used by form time fields, 24-hour, zero-padded.
pub const TIME_FORMAT: &str = "%H:%M";

/// Errors raised while turning form date/time fields into an instant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateTimeError {
    /// The time field is not a parseable `HH:MM` value.
    #[error("invalid time {0:?}, expected HH:MM")]
    Time(String),

    /// The date field is not a parseable `YYYY-MM-DD` value.
    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    Date(String),

    /// The combined date-time falls into a local-timezone gap (e.g. a DST jump).
    #[error("{date} {time} does not exist in the local timezone")]
    NonexistentLocal {
        /// The date field as entered.
        date: String,
        /// The time field as entered.
        time: String,
    },
}

/// Renders the hour and minute of `instant` in the local timezone as `HH:MM`.
///
/// No timezone offset is embedded in the output; callers re-attach a date and
/// timezone context when reconstructing an absolute instant.
pub fn local_time_string(instant: DateTime<Utc>) -> String {
    instant.with_timezone(&Local).format(TIME_FORMAT).to_string()
}

/// Renders the calendar date of `instant` in the local timezone as `YYYY-MM-DD`.
pub fn local_date_string(instant: DateTime<Utc>) -> String {
    instant.with_timezone(&Local).format(DATE_FORMAT).to_string()
}

/// Combines separately edited date and time fields into a single UTC instant.
///
/// Both fields are interpreted in the local timezone of this process; no
/// timezone is stored anywhere in the form. Seconds and subseconds are zeroed.
pub fn combine_local(date: &str, time: &str) -> Result<DateTime<Utc>, DateTimeError> {
    let t = NaiveTime::parse_from_str(time, TIME_FORMAT)
        .map_err(|_| DateTimeError::Time(time.to_string()))?;
    let d = NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map_err(|_| DateTimeError::Date(date.to_string()))?;

    let naive = NaiveDateTime::new(d, t);
    let local = match Local.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(dt1, _) => {
            tracing::warn!(?naive, "ambiguous local time, picking earliest");
            dt1
        }
        LocalResult::None => {
            return Err(DateTimeError::NonexistentLocal {
                date: date.to_string(),
                time: time.to_string(),
            });
        }
    };
    Ok(local.with_timezone(&Utc))
}
