// SPDX-FileCopyrightText: 2025-2026 Rentcal Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, ValueHint, arg, value_parser};
use rentcal_core::RecordKind;

use crate::util::OutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    pub fn verbose() -> Arg {
        arg!(-v --verbose "Show more detailed information")
    }

    pub fn get_verbose(matches: &ArgMatches) -> bool {
        matches.get_flag("verbose")
    }

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

    pub fn email() -> Arg {
        arg!(--email <EMAIL> "Email address")
    }

    pub fn get_email(matches: &ArgMatches) -> String {
        matches.get_one("email").cloned().unwrap_or_default()
    }

    pub fn phone() -> Arg {
        arg!(--phone <PHONE> "Phone number")
    }

    pub fn get_phone(matches: &ArgMatches) -> String {
        matches.get_one("phone").cloned().unwrap_or_default()
    }
}

/// Id arguments naming the kind of record they refer to.
#[derive(Debug, Clone, Copy)]
pub struct IdArgs {
    kind: RecordKind,
}

impl IdArgs {
    pub const fn new(kind: RecordKind) -> Self {
        Self { kind }
    }

    pub fn id(self) -> Arg {
        let help = format!("The id, or a unique id prefix, of the {}", self.kind);
        arg!(id: <ID>).help(help)
    }

    pub fn get_id(matches: &ArgMatches) -> String {
        matches
            .get_one::<String>("id")
            .expect("id is required")
            .clone()
    }

    pub fn ids(self) -> Arg {
        let help = format!("The ids, or unique id prefixes, of the {}s", self.kind);
        arg!(id: <ID>).help(help).num_args(1..)
    }

    pub fn get_ids(matches: &ArgMatches) -> Vec<String> {
        matches
            .get_many::<String>("id")
            .expect("id is required")
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PassportArgs;

impl PassportArgs {
    /// Path of a passport scan to attach.
    pub fn passport(positional: bool) -> Arg {
        let arg = if positional {
            arg!(passport: [PATH] "Path to the scanned passport image")
        } else {
            arg!(passport: --passport <PATH> "Path to the scanned passport image")
        };
        arg.value_parser(value_parser!(PathBuf))
            .value_hint(ValueHint::FilePath)
    }

    pub fn get_passport(matches: &ArgMatches) -> Option<PathBuf> {
        matches.get_one("passport").cloned()
    }

    pub fn remove() -> Arg {
        arg!(--remove "Remove the stored passport image")
            .action(ArgAction::SetTrue)
            .conflicts_with("passport")
    }

    pub fn get_remove(matches: &ArgMatches) -> bool {
        matches.get_flag("remove")
    }
}
