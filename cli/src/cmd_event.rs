// SPDX-FileCopyrightText: 2026 Open Baby contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use chrono::{DateTime, Utc};
use clap::{Arg, ArgMatches, Command, arg};
use colored::Colorize;
use openbaby_api::Api;

use crate::arg::{CommonArgs, FormArgs};
use crate::event_formatter::EventFormatter;
use crate::util::{OutputFormat, parse_instant};

#[derive(Debug, Clone)]
pub struct CmdEventList {
    pub limit: i64,
    pub offset: i64,
    pub start: Option<String>,
    pub end: Option<String>,
    pub output_format: OutputFormat,
}

impl CmdEventList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("List events of every kind")
            .arg(CommonArgs::limit())
            .arg(CommonArgs::offset())
            .arg(start_arg())
            .arg(end_arg())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            limit: CommonArgs::get_limit(matches),
            offset: CommonArgs::get_offset(matches),
            start: matches.get_one("start").cloned(),
            end: matches.get_one("end").cloned(),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, api: &Api) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing events...");
        let (start, end) = parse_bounds(self.start.as_deref(), self.end.as_deref())?;

        let events = api.events().list(self.limit, self.offset, start, end).await?;
        if events.is_empty() && self.output_format == OutputFormat::Table {
            println!("{}", "No events found".italic());
            return Ok(());
        }

        let formatter = EventFormatter::new(self.output_format);
        println!("{}", formatter.format(&events));
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventDelete {
    pub id: String,
}

impl CmdEventDelete {
    pub const NAME: &str = "delete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Delete an event")
            .arg(arg!(id: <ID> "The id of the event to delete"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: FormArgs::get_id(matches),
        }
    }

    pub async fn run(self, api: &Api) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "deleting event...");
        api.events().delete(&self.id).await?;
        println!("{} Event {} deleted", "✓".green(), self.id);
        Ok(())
    }
}

fn start_arg() -> Arg {
    arg!(--start <START> "Only events starting at or after this date or timestamp")
}

fn end_arg() -> Arg {
    arg!(--end <END> "Only events starting at or before this date or timestamp")
}

pub(crate) fn parse_bounds(
    start: Option<&str>,
    end: Option<&str>,
) -> Result<(Option<DateTime<Utc>>, Option<DateTime<Utc>>), Box<dyn Error>> {
    let start = start.map(parse_instant).transpose()?;
    let end = end.map(parse_instant).transpose()?;
    Ok((start, end))
}
