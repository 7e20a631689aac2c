// SPDX-FileCopyrightText: 2026 Open Baby contributors
//
// SPDX-License-Identifier: Apache-2.0

use clap::{Arg, ArgMatches, arg, value_parser};

use crate::util::OutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    pub fn output_format() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(OutputFormat))
            .default_value("table")
    }

    pub fn get_output_format(matches: &ArgMatches) -> OutputFormat {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(OutputFormat::Table)
    }

    pub fn limit() -> Arg {
        arg!(--limit <LIMIT> "Maximum number of events to return")
            .value_parser(value_parser!(i64))
            .default_value("100")
    }

    pub fn get_limit(matches: &ArgMatches) -> i64 {
        matches.get_one("limit").copied().unwrap_or(100)
    }

    pub fn offset() -> Arg {
        arg!(--offset <OFFSET> "Number of events to skip")
            .value_parser(value_parser!(i64))
            .default_value("0")
    }

    pub fn get_offset(matches: &ArgMatches) -> i64 {
        matches.get_one("offset").copied().unwrap_or(0)
    }
}

/// Arguments shared by every event form command.
#[derive(Debug, Clone, Copy)]
pub struct FormArgs;

impl FormArgs {
    pub fn id() -> Arg {
        arg!(id: <ID> "The id of the event to edit")
    }

    pub fn get_id(matches: &ArgMatches) -> String {
        matches
            .get_one::<String>("id")
            .cloned()
            .unwrap_or_default()
    }

    pub fn date() -> Arg {
        arg!(--date <DATE> "Event date (YYYY-MM-DD, local); defaults to today")
    }

    pub fn get_date(matches: &ArgMatches) -> Option<String> {
        matches.get_one("date").cloned()
    }

    pub fn time() -> Arg {
        arg!(--time <TIME> "Event time (HH:MM, local); defaults to now")
    }

    pub fn get_time(matches: &ArgMatches) -> Option<String> {
        matches.get_one("time").cloned()
    }

    pub fn notes() -> Arg {
        arg!(--notes <NOTES> "Free-form notes")
    }

    pub fn get_notes(matches: &ArgMatches) -> Option<String> {
        matches.get_one("notes").cloned()
    }
}
