// SPDX-FileCopyrightText: 2025-2026 Rentcal Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line interface of RENTCAL.

mod apartment_formatter;
mod arg;
mod cli;
mod cmd_apartment;
mod cmd_calendar;
mod cmd_family;
mod cmd_generate_completion;
mod cmd_guest;
mod config;
mod family_member_formatter;
mod guest_formatter;
mod table;
mod util;

pub use crate::cli::{Cli, Commands, run};
