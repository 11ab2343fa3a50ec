// SPDX-FileCopyrightText: 2025-2026 Rentcal Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use futures::{FutureExt, future::BoxFuture};
use rentcal_core::{APP_NAME, Rentcal};
use tracing_subscriber::EnvFilter;

use crate::cmd_apartment::{CmdApartmentDelete, CmdApartmentList, CmdApartmentNew};
use crate::cmd_calendar::CmdCalendar;
use crate::cmd_family::{CmdFamilyDelete, CmdFamilyList, CmdFamilyNew, CmdFamilyPassport};
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_guest::{
    CmdGuestDelete, CmdGuestList, CmdGuestNew, CmdGuestNotes, CmdGuestPassport, CmdGuestShow,
};
use crate::config::parse_config;

/// Run the RENTCAL command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
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
            .about("Bookings, guests and occupancy calendars for your holiday rentals.")
            .author("Rentcal Developers")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to calendar
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/rentcal/config.toml on Linux and MacOS, \
%LOCALAPPDATA%/rentcal/config.toml on Windows. Built-in defaults apply when no file exists.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdCalendar::command())
            .subcommand(
                Command::new("apartment")
                    .alias("a")
                    .about("Manage your apartments")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdApartmentNew::command())
                    .subcommand(CmdApartmentList::command())
                    .subcommand(CmdApartmentDelete::command()),
            )
            .subcommand(
                Command::new("guest")
                    .alias("g")
                    .about("Manage guests and their bookings")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdGuestNew::command())
                    .subcommand(CmdGuestList::command())
                    .subcommand(CmdGuestShow::command())
                    .subcommand(CmdGuestNotes::command())
                    .subcommand(CmdGuestPassport::command())
                    .subcommand(CmdGuestDelete::command()),
            )
            .subcommand(
                Command::new("family")
                    .alias("f")
                    .about("Manage family members travelling with a guest")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdFamilyNew::command())
                    .subcommand(CmdFamilyList::command())
                    .subcommand(CmdFamilyPassport::command())
                    .subcommand(CmdFamilyDelete::command()),
            )
            .subcommand(CmdGenerateCompletion::command())
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
            Some((CmdCalendar::NAME, matches)) => Calendar(CmdCalendar::from(matches)),
            Some(("apartment", matches)) => match matches.subcommand() {
                Some((CmdApartmentNew::NAME, matches)) => {
                    ApartmentNew(CmdApartmentNew::from(matches))
                }
                Some((CmdApartmentList::NAME, matches)) => {
                    ApartmentList(CmdApartmentList::from(matches))
                }
                Some((CmdApartmentDelete::NAME, matches)) => {
                    ApartmentDelete(CmdApartmentDelete::from(matches))
                }
                _ => unreachable!(),
            },
            Some(("guest", matches)) => match matches.subcommand() {
                Some((CmdGuestNew::NAME, matches)) => GuestNew(CmdGuestNew::from(matches)),
                Some((CmdGuestList::NAME, matches)) => GuestList(CmdGuestList::from(matches)),
                Some((CmdGuestShow::NAME, matches)) => GuestShow(CmdGuestShow::from(matches)),
                Some((CmdGuestNotes::NAME, matches)) => GuestNotes(CmdGuestNotes::from(matches)),
                Some((CmdGuestPassport::NAME, matches)) => {
                    GuestPassport(CmdGuestPassport::from(matches)?)
                }
                Some((CmdGuestDelete::NAME, matches)) => {
                    GuestDelete(CmdGuestDelete::from(matches))
                }
                _ => unreachable!(),
            },
            Some(("family", matches)) => match matches.subcommand() {
                Some((CmdFamilyNew::NAME, matches)) => FamilyNew(CmdFamilyNew::from(matches)),
                Some((CmdFamilyList::NAME, matches)) => FamilyList(CmdFamilyList::from(matches)),
                Some((CmdFamilyPassport::NAME, matches)) => {
                    FamilyPassport(CmdFamilyPassport::from(matches)?)
                }
                Some((CmdFamilyDelete::NAME, matches)) => {
                    FamilyDelete(CmdFamilyDelete::from(matches))
                }
                _ => unreachable!(),
            },
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            None => Calendar(CmdCalendar::default()),
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
    /// Show the occupancy calendar
    Calendar(CmdCalendar),

    /// Add an apartment
    ApartmentNew(CmdApartmentNew),

    /// List apartments
    ApartmentList(CmdApartmentList),

    /// Delete apartments
    ApartmentDelete(CmdApartmentDelete),

    /// Book a guest
    GuestNew(CmdGuestNew),

    /// List guests
    GuestList(CmdGuestList),

    /// Show one guest with family
    GuestShow(CmdGuestShow),

    /// Replace the notes of a guest
    GuestNotes(CmdGuestNotes),

    /// Attach or remove a guest passport
    GuestPassport(CmdGuestPassport),

    /// Delete guests with their family members
    GuestDelete(CmdGuestDelete),

    /// Add a family member
    FamilyNew(CmdFamilyNew),

    /// List family members
    FamilyList(CmdFamilyList),

    /// Attach or remove a family member passport
    FamilyPassport(CmdFamilyPassport),

    /// Delete family members
    FamilyDelete(CmdFamilyDelete),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Calendar(a)        => Self::run_with(config, |x| a.run(x).boxed()).await,
            ApartmentNew(a)    => Self::run_with(config, |x| a.run(x).boxed()).await,
            ApartmentList(a)   => Self::run_with(config, |x| a.run(x).boxed()).await,
            ApartmentDelete(a) => Self::run_with(config, |x| a.run(x).boxed()).await,
            GuestNew(a)        => Self::run_with(config, |x| a.run(x).boxed()).await,
            GuestList(a)       => Self::run_with(config, |x| a.run(x).boxed()).await,
            GuestShow(a)       => Self::run_with(config, |x| a.run(x).boxed()).await,
            GuestNotes(a)      => Self::run_with(config, |x| a.run(x).boxed()).await,
            GuestPassport(a)   => Self::run_with(config, |x| a.run(x).boxed()).await,
            GuestDelete(a)     => Self::run_with(config, |x| a.run(x).boxed()).await,
            FamilyNew(a)       => Self::run_with(config, |x| a.run(x).boxed()).await,
            FamilyList(a)      => Self::run_with(config, |x| a.run(x).boxed()).await,
            FamilyPassport(a)  => Self::run_with(config, |x| a.run(x).boxed()).await,
            FamilyDelete(a)    => Self::run_with(config, |x| a.run(x).boxed()).await,
            GenerateCompletion(a) => a.run(),
        }
    }

    async fn run_with<F>(config: Option<PathBuf>, f: F) -> Result<(), Box<dyn Error>>
    where
        F: for<'a> FnOnce(&'a Rentcal) -> BoxFuture<'a, Result<(), Box<dyn Error>>>,
    {
        tracing::debug!("parsing configuration...");
        let core_config = parse_config(config).await?;
        let rentcal = Rentcal::new(core_config).await?;

        let result = f(&rentcal).await;

        rentcal.close().await?;
        result
    }
}
