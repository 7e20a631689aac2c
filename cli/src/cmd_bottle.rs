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
    BottleFeedFields, EditSelection, EventForm, ExistingEvent, FormState, SubmitOutcome,
};

use crate::arg::{CommonArgs, FormArgs};
use crate::event_formatter::EventFormatter;
use crate::notifier::TermNotifier;
use crate::util::OutputFormat;

#[derive(Debug, Clone)]
pub struct CmdBottleNew {
    pub amount_ml: Option<i64>,
    pub formula: Option<bool>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub notes: Option<String>,
}

impl CmdBottleNew {
    pub const NAME: &str = "new";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("add")
            .about("Record a bottle feed")
            .arg(amount_arg())
            .arg(formula_arg())
            .arg(FormArgs::date())
            .arg(FormArgs::time())
            .arg(FormArgs::notes())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            amount_ml: matches.get_one("amount-ml").copied(),
            formula: matches.get_one("formula").copied(),
            date: FormArgs::get_date(matches),
            time: FormArgs::get_time(matches),
            notes: FormArgs::get_notes(matches),
        }
    }

    pub async fn run(self, api: &Api) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "recording bottle feed...");

        // Prefill from the most recent bottle feed, like the web form does.
        let mut fields = default_bottle_fields(api).await;
        if let Some(amount) = self.amount_ml {
            fields.amount_ml = amount;
        }
        if let Some(formula) = self.formula {
            fields.is_formula = formula;
        }

        let mut form = EventForm::create(
            fields,
            self.notes,
            Utc::now(),
            api.feed(),
            TermNotifier::new(),
        )
        .on_submitted(|state: &FormState<BottleFeedFields>| {
            println!(
                "  {} ml at {} {}",
                state.fields.amount_ml, state.date, state.time
            );
        });
        apply_overrides(form.state_mut(), self.date, self.time);

        finish(form.submit().await)
    }
}

#[derive(Debug, Clone)]
pub struct CmdBottleEdit {
    pub id: String,
    pub amount_ml: Option<i64>,
    pub formula: Option<bool>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub notes: Option<String>,
}

impl CmdBottleEdit {
    pub const NAME: &str = "edit";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Edit a bottle feed")
            .arg(FormArgs::id())
            .arg(amount_arg())
            .arg(formula_arg())
            .arg(FormArgs::date())
            .arg(FormArgs::time())
            .arg(FormArgs::notes())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: FormArgs::get_id(matches),
            amount_ml: matches.get_one("amount-ml").copied(),
            formula: matches.get_one("formula").copied(),
            date: FormArgs::get_date(matches),
            time: FormArgs::get_time(matches),
            notes: FormArgs::get_notes(matches),
        }
    }

    pub async fn run(self, api: &Api) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "editing bottle feed...");

        let event = api.feed().get_bottle(&self.id).await?;
        let existing = ExistingEvent {
            id: event.id.clone(),
            time_start: event.time_start,
            notes: event.notes.clone(),
        };

        let selection = Arc::new(Mutex::new(EditSelection::new()));
        selection.lock().unwrap().select(existing.clone());

        let mut fields = BottleFeedFields::from(&event);
        if let Some(amount) = self.amount_ml {
            fields.amount_ml = amount;
        }
        if let Some(formula) = self.formula {
            fields.is_formula = formula;
        }

        let cleared = selection.clone();
        let mut form = EventForm::edit(fields, existing, api.feed(), TermNotifier::new())
            .on_complete(move || cleared.lock().unwrap().clear());
        if self.notes.is_some() {
            form.state_mut().notes = self.notes;
        }
        apply_overrides(form.state_mut(), self.date, self.time);

        let outcome = form.submit().await;
        debug_assert!(
            outcome == SubmitOutcome::Failed || !selection.lock().unwrap().is_editing()
        );
        finish(outcome)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdBottleList {
    pub limit: i64,
    pub offset: i64,
    pub output_format: OutputFormat,
}

impl CmdBottleList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("List bottle feeds")
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
        tracing::debug!(?self, "listing bottle feeds...");
        let events = api.feed().list_bottle(self.limit, self.offset).await?;
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
    arg!(--"amount-ml" <ML> "Amount fed in milliliters").value_parser(value_parser!(i64))
}

fn formula_arg() -> Arg {
    arg!(--formula [FORMULA] "Formula instead of breast milk")
        .value_parser(value_parser!(bool))
        .num_args(0..=1)
        .default_missing_value("true")
}

/// Replaces the prefilled date/time fields with explicitly passed values.
pub(crate) fn apply_overrides<F>(
    state: &mut FormState<F>,
    date: Option<String>,
    time: Option<String>,
) {
    if let Some(date) = date {
        state.date = date;
    }
    if let Some(time) = time {
        state.time = time;
    }
}

/// Maps a form outcome to the command result; the notifier has already
/// reported the details.
pub(crate) fn finish(outcome: SubmitOutcome) -> Result<(), Box<dyn Error>> {
    match outcome {
        SubmitOutcome::Saved => Ok(()),
        SubmitOutcome::Failed => Err("submission failed".into()),
    }
}

/// The latest bottle feed as a prefill, falling back to the stock defaults.
async fn default_bottle_fields(api: &Api) -> BottleFeedFields {
    match api.feed().list_bottle(1, 0).await {
        Ok(events) => events.first().map(BottleFeedFields::from).unwrap_or_default(),
        Err(error) => {
            tracing::warn!(%error, "failed to fetch latest bottle feed, using defaults");
            BottleFeedFields::default()
        }
    }
}
