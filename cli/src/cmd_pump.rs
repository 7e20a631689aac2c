// SPDX-FileCopyrightText: 2026 Open Baby contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use clap::{Arg, ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use openbaby_api::Api;
use openbaby_core::{EditSelection, EventForm, ExistingEvent, PumpFields};

use crate::arg::{CommonArgs, FormArgs};
use crate::cmd_bottle::{apply_overrides, finish};
use crate::event_formatter::EventFormatter;
use crate::notifier::TermNotifier;
use crate::util::OutputFormat;

#[derive(Debug, Clone)]
pub struct CmdPumpNew {
    pub amount_ml: f64,
    pub date: Option<String>,
    pub time: Option<String>,
    pub notes: Option<String>,
}

impl CmdPumpNew {
    pub const NAME: &str = "new";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("add")
            .about("Record a pumping session")
            .arg(amount_arg().required(true))
            .arg(FormArgs::date())
            .arg(FormArgs::time())
            .arg(FormArgs::notes())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            amount_ml: matches
                .get_one("amount-ml")
                .copied()
                .expect("amount-ml is required"),
            date: FormArgs::get_date(matches),
            time: FormArgs::get_time(matches),
            notes: FormArgs::get_notes(matches),
        }
    }

    pub async fn run(self, api: &Api) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "recording pumping session...");

        let fields = PumpFields {
            amount_ml: self.amount_ml,
        };
        let mut form = EventForm::create(
            fields,
            self.notes,
            Utc::now(),
            api.pump(),
            TermNotifier::new(),
        );
        apply_overrides(form.state_mut(), self.date, self.time);

        finish(form.submit().await)
    }
}

#[derive(Debug, Clone)]
pub struct CmdPumpEdit {
    pub id: String,
    pub amount_ml: Option<f64>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub notes: Option<String>,
}

impl CmdPumpEdit {
    pub const NAME: &str = "edit";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Edit a pumping session")
            .arg(FormArgs::id())
            .arg(amount_arg())
            .arg(FormArgs::date())
            .arg(FormArgs::time())
            .arg(FormArgs::notes())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: FormArgs::get_id(matches),
            amount_ml: matches.get_one("amount-ml").copied(),
            date: FormArgs::get_date(matches),
            time: FormArgs::get_time(matches),
            notes: FormArgs::get_notes(matches),
        }
    }

    pub async fn run(self, api: &Api) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "editing pumping session...");

        let event = api.pump().get(&self.id).await?;
        let existing = ExistingEvent {
            id: event.id.clone(),
            time_start: event.time_start,
            notes: event.notes.clone(),
        };

        let selection = Arc::new(Mutex::new(EditSelection::new()));
        selection.lock().unwrap().select(existing.clone());

        let mut fields = PumpFields::from(&event);
        if let Some(amount) = self.amount_ml {
            fields.amount_ml = amount;
        }

        let cleared = selection.clone();
        let mut form = EventForm::edit(fields, existing, api.pump(), TermNotifier::new())
            .on_complete(move || cleared.lock().unwrap().clear());
        if self.notes.is_some() {
            form.state_mut().notes = self.notes;
        }
        apply_overrides(form.state_mut(), self.date, self.time);

        finish(form.submit().await)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdPumpList {
    pub limit: i64,
    pub offset: i64,
    pub output_format: OutputFormat,
}

impl CmdPumpList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("List pumping sessions")
            .arg(CommonArgs::limit())
            .arg(CommonArgs::offset())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            limit: CommonArgs::get_limit(matches),
            offset: CommonArgs::get_offset(matches),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, api: &Api) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing pumping sessions...");
        let events = api.pump().list(self.limit, self.offset).await?;
        if events.is_empty() && self.output_format == OutputFormat::Table {
            println!("{}", "No events found".italic());
            return Ok(());
        }

        let formatter = EventFormatter::new(self.output_format);
        println!("{}", formatter.format(&events));
        Ok(())
    }
}

fn amount_arg() -> Arg {
    arg!(--"amount-ml" <ML> "Amount pumped in milliliters").value_parser(value_parser!(f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_new() {
        let cmd = Command::new("test")
            .subcommand_required(true)
            .subcommand(CmdPumpNew::command());

        let matches = cmd
            .try_get_matches_from(["test", "new", "--amount-ml", "87.5"])
            .unwrap();
        let sub_matches = matches.subcommand_matches("new").unwrap();
        let parsed = CmdPumpNew::from(sub_matches);

        assert_eq!(parsed.amount_ml, 87.5);
    }

    #[test]
    fn test_parse_new_requires_amount() {
        let cmd = Command::new("test")
            .subcommand_required(true)
            .subcommand(CmdPumpNew::command());

        assert!(cmd.try_get_matches_from(["test", "new"]).is_err());
    }

    #[test]
    fn test_parse_edit() {
        let cmd = Command::new("test")
            .subcommand_required(true)
            .subcommand(CmdPumpEdit::command());

        let matches = cmd
            .try_get_matches_from(["test", "edit", "evt-4", "--date", "2024-03-01"])
            .unwrap();
        let sub_matches = matches.subcommand_matches("edit").unwrap();
        let parsed = CmdPumpEdit::from(sub_matches);

        assert_eq!(parsed.id, "evt-4");
        assert_eq!(parsed.amount_ml, None);
        assert_eq!(parsed.date.as_deref(), Some("2024-03-01"));
    }
}
