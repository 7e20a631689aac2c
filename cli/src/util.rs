// SPDX-FileCopyrightText: 2026 Open Baby contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use chrono::offset::LocalResult;
use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

/// Parses a `--start`/`--end` bound as a local calendar date or a full
/// RFC 3339 timestamp.
pub fn parse_instant(s: &str) -> Result<DateTime<Utc>, Box<dyn Error>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        let naive = date.and_hms_opt(0, 0, 0).ok_or("Failed to create time")?;
        return match Local.from_local_datetime(&naive) {
            LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
            LocalResult::Ambiguous(dt1, _) => {
                tracing::warn!(?naive, "ambiguous local time, picking earliest");
                Ok(dt1.with_timezone(&Utc))
            }
            LocalResult::None => Err("Invalid local time".into()),
        };
    }

    Err(format!("Invalid date format: {s}. Expected YYYY-MM-DD or RFC 3339").into())
}
