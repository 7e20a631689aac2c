// SPDX-FileCopyrightText: 2026 Open Baby contributors
//
// SPDX-License-Identifier: Apache-2.0

mod arg;
mod cmd_bottle;
mod cmd_breast;
mod cmd_diaper;
mod cmd_event;
mod cmd_pump;
mod cmd_stats;
mod config;
mod event_formatter;
mod notifier;
mod util;

use std::{error::Error, ffi::OsString, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use futures::{FutureExt, future::BoxFuture};
use openbaby_api::Api;
use openbaby_core::APP_NAME;

use crate::cmd_bottle::{CmdBottleEdit, CmdBottleList, CmdBottleNew};
use crate::cmd_breast::CmdBreastNew;
use crate::cmd_diaper::{CmdDiaperEdit, CmdDiaperList, CmdDiaperNew};
use crate::cmd_event::{CmdEventDelete, CmdEventList};
use crate::cmd_pump::{CmdPumpEdit, CmdPumpList, CmdPumpNew};
use crate::cmd_stats::CmdStatsFeeds;
use crate::config::parse_config;

/// Run the Open Baby command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    };
    Ok(())
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Track feeds, diaper changes and pump sessions from the terminal.")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(true)
            .arg_required_else_help(true)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/openbaby/config.toml on Linux and \
MacOS, %LOCALAPPDATA%/openbaby/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(
                Command::new("bottle")
                    .alias("b")
                    .about("Manage bottle feeds")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdBottleNew::command())
                    .subcommand(CmdBottleEdit::command())
                    .subcommand(CmdBottleList::command()),
            )
            .subcommand(
                Command::new("breast")
                    .about("Manage breastfeeding sessions")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdBreastNew::command()),
            )
            .subcommand(
                Command::new("diaper")
                    .alias("d")
                    .about("Manage diaper changes")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdDiaperNew::command())
                    .subcommand(CmdDiaperEdit::command())
                    .subcommand(CmdDiaperList::command()),
            )
            .subcommand(
                Command::new("pump")
                    .alias("p")
                    .about("Manage pumping sessions")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdPumpNew::command())
                    .subcommand(CmdPumpEdit::command())
                    .subcommand(CmdPumpList::command()),
            )
            .subcommand(
                Command::new("event")
                    .alias("e")
                    .about("Manage the combined event list")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdEventList::command())
                    .subcommand(CmdEventDelete::command()),
            )
            .subcommand(
                Command::new("stats")
                    .about("Show statistics")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdStatsFeeds::command()),
            )
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some(("bottle", matches)) => match matches.subcommand() {
                Some((CmdBottleNew::NAME, matches)) => BottleNew(CmdBottleNew::from(matches)),
                Some((CmdBottleEdit::NAME, matches)) => BottleEdit(CmdBottleEdit::from(matches)),
                Some((CmdBottleList::NAME, matches)) => BottleList(CmdBottleList::from(matches)),
                _ => unreachable!(),
            },
            Some(("breast", matches)) => match matches.subcommand() {
                Some((CmdBreastNew::NAME, matches)) => BreastNew(CmdBreastNew::from(matches)),
                _ => unreachable!(),
            },
            Some(("diaper", matches)) => match matches.subcommand() {
                Some((CmdDiaperNew::NAME, matches)) => DiaperNew(CmdDiaperNew::from(matches)),
                Some((CmdDiaperEdit::NAME, matches)) => DiaperEdit(CmdDiaperEdit::from(matches)),
                Some((CmdDiaperList::NAME, matches)) => DiaperList(CmdDiaperList::from(matches)),
                _ => unreachable!(),
            },
            Some(("pump", matches)) => match matches.subcommand() {
                Some((CmdPumpNew::NAME, matches)) => PumpNew(CmdPumpNew::from(matches)),
                Some((CmdPumpEdit::NAME, matches)) => PumpEdit(CmdPumpEdit::from(matches)),
                Some((CmdPumpList::NAME, matches)) => PumpList(CmdPumpList::from(matches)),
                _ => unreachable!(),
            },
            Some(("event", matches)) => match matches.subcommand() {
                Some((CmdEventList::NAME, matches)) => EventList(CmdEventList::from(matches)),
                Some((CmdEventDelete::NAME, matches)) => {
                    EventDelete(CmdEventDelete::from(matches))
                }
                _ => unreachable!(),
            },
            Some(("stats", matches)) => match matches.subcommand() {
                Some((CmdStatsFeeds::NAME, matches)) => StatsFeeds(CmdStatsFeeds::from(matches)),
                _ => unreachable!(),
            },
            _ => unreachable!(),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Record a bottle feed
    BottleNew(CmdBottleNew),

    /// Edit a bottle feed
    BottleEdit(CmdBottleEdit),

    /// List bottle feeds
    BottleList(CmdBottleList),

    /// Record a breastfeeding session
    BreastNew(CmdBreastNew),

    /// Record a diaper change
    DiaperNew(CmdDiaperNew),

    /// Edit a diaper change
    DiaperEdit(CmdDiaperEdit),

    /// List diaper changes
    DiaperList(CmdDiaperList),

    /// Record a pumping session
    PumpNew(CmdPumpNew),

    /// Edit a pumping session
    PumpEdit(CmdPumpEdit),

    /// List pumping sessions
    PumpList(CmdPumpList),

    /// List events of every kind
    EventList(CmdEventList),

    /// Delete an event
    EventDelete(CmdEventDelete),

    /// Show bottle feed statistics
    StatsFeeds(CmdStatsFeeds),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            BottleNew(a)   => Self::run_with(config, |x| a.run(x).boxed()).await,
            BottleEdit(a)  => Self::run_with(config, |x| a.run(x).boxed()).await,
            BottleList(a)  => Self::run_with(config, |x| a.run(x).boxed()).await,
            BreastNew(a)   => Self::run_with(config, |x| a.run(x).boxed()).await,
            DiaperNew(a)   => Self::run_with(config, |x| a.run(x).boxed()).await,
            DiaperEdit(a)  => Self::run_with(config, |x| a.run(x).boxed()).await,
            DiaperList(a)  => Self::run_with(config, |x| a.run(x).boxed()).await,
            PumpNew(a)     => Self::run_with(config, |x| a.run(x).boxed()).await,
            PumpEdit(a)    => Self::run_with(config, |x| a.run(x).boxed()).await,
            PumpList(a)    => Self::run_with(config, |x| a.run(x).boxed()).await,
            EventList(a)   => Self::run_with(config, |x| a.run(x).boxed()).await,
            EventDelete(a) => Self::run_with(config, |x| a.run(x).boxed()).await,
            StatsFeeds(a)  => Self::run_with(config, |x| a.run(x).boxed()).await,
        }
    }

    async fn run_with<F>(config: Option<PathBuf>, f: F) -> Result<(), Box<dyn Error>>
    where
        F: for<'a> FnOnce(&'a Api) -> BoxFuture<'a, Result<(), Box<dyn Error>>>,
    {
        tracing::debug!("Parsing configuration...");
        let config = parse_config(config).await?;
        let api = Api::new(config.api)?;
        f(&api).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bottle_new() {
        let cli = Cli::try_parse_from(["openbaby", "bottle", "new", "--amount-ml", "120"]).unwrap();
        assert!(cli.config.is_none());
        match cli.command {
            Commands::BottleNew(cmd) => assert_eq!(cmd.amount_ml, Some(120)),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_group_alias() {
        let cli = Cli::try_parse_from(["openbaby", "d", "list"]).unwrap();
        assert!(matches!(cli.command, Commands::DiaperList(_)));
    }

    #[test]
    fn test_parse_config_flag() {
        let cli = Cli::try_parse_from([
            "openbaby",
            "--config",
            "/tmp/config.toml",
            "event",
            "list",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/config.toml")));
        assert!(matches!(cli.command, Commands::EventList(_)));
    }

    #[test]
    fn test_parse_requires_subcommand() {
        assert!(Cli::try_parse_from(["openbaby"]).is_err());
        assert!(Cli::try_parse_from(["openbaby", "bottle"]).is_err());
    }
}
