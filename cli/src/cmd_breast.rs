// SPDX-FileCopyrightText: 2026 Open Baby contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use chrono::Utc;
use clap::{ArgMatches, Command, arg, value_parser};
use openbaby_api::Api;
use openbaby_core::{BreastFeedFields, BreastSide, EventForm};

use crate::arg::FormArgs;
use crate::cmd_bottle::{apply_overrides, finish};
use crate::notifier::TermNotifier;

#[derive(Debug, Clone)]
pub struct CmdBreastNew {
    pub side: BreastSide,
    pub date: Option<String>,
    pub time: Option<String>,
    pub notes: Option<String>,
}

impl CmdBreastNew {
    pub const NAME: &str = "new";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("add")
            .about("Record a breastfeeding session")
            .arg(
                arg!(--side <SIDE> "Which side was used")
                    .value_parser(value_parser!(BreastSide))
                    .default_value("both"),
            )
            .arg(FormArgs::date())
            .arg(FormArgs::time())
            .arg(FormArgs::notes())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            side: matches.get_one("side").copied().unwrap_or_default(),
            date: FormArgs::get_date(matches),
            time: FormArgs::get_time(matches),
            notes: FormArgs::get_notes(matches),
        }
    }

    pub async fn run(self, api: &Api) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "recording breastfeeding session...");

        let fields = BreastFeedFields {
            side: self.side,
            description: String::new(),
        };
        let mut form = EventForm::create(
            fields,
            self.notes,
            Utc::now(),
            api.feed(),
            TermNotifier::new(),
        );
        apply_overrides(form.state_mut(), self.date, self.time);

        finish(form.submit().await)
    }
}
