// SPDX-FileCopyrightText: 2026 Open Baby contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use clap::{Arg, ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use openbaby_api::Api;
use openbaby_core::{
    DiaperColor, DiaperConsistency, DiaperFields, DiaperSize, DiaperType, EditSelection,
    EventForm, ExistingEvent,
};

use crate::arg::{CommonArgs, FormArgs};
use crate::cmd_bottle::{apply_overrides, finish};
use crate::event_formatter::EventFormatter;
use crate::notifier::TermNotifier;
use crate::util::OutputFormat;

#[derive(Debug, Clone)]
pub struct CmdDiaperNew {
    pub diaper_type: DiaperType,
    pub color: Option<DiaperColor>,
    pub consistency: Option<DiaperConsistency>,
    pub size: Option<DiaperSize>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub notes: Option<String>,
}

impl CmdDiaperNew {
    pub const NAME: &str = "new";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("add")
            .about("Record a diaper change")
            .arg(type_arg().required(true))
            .arg(color_arg())
            .arg(consistency_arg())
            .arg(size_arg())
            .arg(FormArgs::date())
            .arg(FormArgs::time())
            .arg(FormArgs::notes())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            diaper_type: matches
                .get_one("type")
                .copied()
                .expect("type is required"),
            color: matches.get_one("color").copied(),
            consistency: matches.get_one("consistency").copied(),
            size: matches.get_one("size").copied(),
            date: FormArgs::get_date(matches),
            time: FormArgs::get_time(matches),
            notes: FormArgs::get_notes(matches),
        }
    }

    pub async fn run(self, api: &Api) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "recording diaper change...");

        let fields = DiaperFields {
            diaper_type: self.diaper_type,
            color: self.color,
            consistency: self.consistency,
            size: self.size,
        };
        let mut form = EventForm::create(
            fields,
            self.notes,
            Utc::now(),
            api.diaper(),
            TermNotifier::new(),
        );
        apply_overrides(form.state_mut(), self.date, self.time);

        finish(form.submit().await)
    }
}

#[derive(Debug, Clone)]
pub struct CmdDiaperEdit {
    pub id: String,
    pub diaper_type: Option<DiaperType>,
    pub color: Option<DiaperColor>,
    pub consistency: Option<DiaperConsistency>,
    pub size: Option<DiaperSize>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub notes: Option<String>,
}

impl CmdDiaperEdit {
    pub const NAME: &str = "edit";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Edit a diaper change")
            .arg(FormArgs::id())
            .arg(type_arg())
            .arg(color_arg())
            .arg(consistency_arg())
            .arg(size_arg())
            .arg(FormArgs::date())
            .arg(FormArgs::time())
            .arg(FormArgs::notes())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: FormArgs::get_id(matches),
            diaper_type: matches.get_one("type").copied(),
            color: matches.get_one("color").copied(),
            consistency: matches.get_one("consistency").copied(),
            size: matches.get_one("size").copied(),
            date: FormArgs::get_date(matches),
            time: FormArgs::get_time(matches),
            notes: FormArgs::get_notes(matches),
        }
    }

    pub async fn run(self, api: &Api) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "editing diaper change...");

        let event = api.diaper().get(&self.id).await?;
        let existing = ExistingEvent {
            id: event.id.clone(),
            time_start: event.time_start,
            notes: event.notes.clone(),
        };

        let selection = Arc::new(Mutex::new(EditSelection::new()));
        selection.lock().unwrap().select(existing.clone());

        let mut fields = DiaperFields::from(&event);
        if let Some(diaper_type) = self.diaper_type {
            fields.diaper_type = diaper_type;
        }
        if self.color.is_some() {
            fields.color = self.color;
        }
        if self.consistency.is_some() {
            fields.consistency = self.consistency;
        }
        if self.size.is_some() {
            fields.size = self.size;
        }

        let cleared = selection.clone();
        let mut form = EventForm::edit(fields, existing, api.diaper(), TermNotifier::new())
            .on_complete(move || cleared.lock().unwrap().clear());
        if self.notes.is_some() {
            form.state_mut().notes = self.notes;
        }
        apply_overrides(form.state_mut(), self.date, self.time);

        finish(form.submit().await)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdDiaperList {
    pub limit: i64,
    pub offset: i64,
    pub output_format: OutputFormat,
}

impl CmdDiaperList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("List diaper changes")
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
        tracing::debug!(?self, "listing diaper changes...");
        let events = api.diaper().list(self.limit, self.offset).await?;
        if events.is_empty() && self.output_format == OutputFormat::Table {
            println!("{}", "No events found".italic());
            return Ok(());
        }

        let formatter = EventFormatter::new(self.output_format);
        println!("{}", formatter.format(&events));
        Ok(())
    }
}

fn type_arg() -> Arg {
    arg!(--"type" <TYPE> "What the change found").value_parser(value_parser!(DiaperType))
}

fn color_arg() -> Arg {
    arg!(--color <COLOR> "Color of the contents").value_parser(value_parser!(DiaperColor))
}

fn consistency_arg() -> Arg {
    arg!(--consistency <CONSISTENCY> "Consistency of the contents")
        .value_parser(value_parser!(DiaperConsistency))
}

fn size_arg() -> Arg {
    arg!(--size <SIZE> "Size of the contents").value_parser(value_parser!(DiaperSize))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_new() {
        let cmd = Command::new("test")
            .subcommand_required(true)
            .subcommand(CmdDiaperNew::command());

        let matches = cmd
            .try_get_matches_from([
                "test",
                "new",
                "--type",
                "both",
                "--color",
                "yellow",
                "--consistency",
                "watery",
                "--size",
                "large",
            ])
            .unwrap();
        let sub_matches = matches.subcommand_matches("new").unwrap();
        let parsed = CmdDiaperNew::from(sub_matches);

        assert_eq!(parsed.diaper_type, DiaperType::Both);
        assert_eq!(parsed.color, Some(DiaperColor::Yellow));
        assert_eq!(parsed.consistency, Some(DiaperConsistency::Watery));
        assert_eq!(parsed.size, Some(DiaperSize::Large));
    }

    #[test]
    fn test_parse_new_requires_type() {
        let cmd = Command::new("test")
            .subcommand_required(true)
            .subcommand(CmdDiaperNew::command());

        assert!(cmd.try_get_matches_from(["test", "new"]).is_err());
    }

    #[test]
    fn test_parse_edit_all_optional() {
        let cmd = Command::new("test")
            .subcommand_required(true)
            .subcommand(CmdDiaperEdit::command());

        let matches = cmd
            .try_get_matches_from(["test", "edit", "evt-1", "--time", "18:00"])
            .unwrap();
        let sub_matches = matches.subcommand_matches("edit").unwrap();
        let parsed = CmdDiaperEdit::from(sub_matches);

        assert_eq!(parsed.id, "evt-1");
        assert_eq!(parsed.diaper_type, None);
        assert_eq!(parsed.time.as_deref(), Some("18:00"));
    }
}
