// SPDX-FileCopyrightText: 2026 Open Baby contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg};
use colored::Colorize;
use openbaby_api::Api;

use crate::arg::CommonArgs;
use crate::cmd_event::parse_bounds;
use crate::event_formatter::EventFormatter;
use crate::util::OutputFormat;

#[derive(Debug, Clone)]
pub struct CmdStatsFeeds {
    pub start: Option<String>,
    pub end: Option<String>,
    pub output_format: OutputFormat,
}

impl CmdStatsFeeds {
    pub const NAME: &str = "feeds";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show bottle feed statistics")
            .arg(arg!(--start <START> "Start of the statistics window"))
            .arg(arg!(--end <END> "End of the statistics window"))
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            start: matches.get_one("start").cloned(),
            end: matches.get_one("end").cloned(),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, api: &Api) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "fetching feed statistics...");
        let (start, end) = parse_bounds(self.start.as_deref(), self.end.as_deref())?;

        let stats = api.stats().feed_stats(start, end).await?;
        if stats.is_empty() && self.output_format == OutputFormat::Table {
            println!("{}", "No feeds in this window".italic());
            return Ok(());
        }

        let formatter = EventFormatter::new(self.output_format);
        println!("{}", formatter.format(&stats));
        Ok(())
    }
}
