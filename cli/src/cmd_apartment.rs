// SPDX-FileCopyrightText: 2025-2026 Rentcal Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg};
use colored::Colorize;
use rentcal_core::{Apartment, ApartmentDraft, RecordKind, Rentcal};

use crate::apartment_formatter::{ApartmentColumn, ApartmentFormatter};
use crate::arg::{CommonArgs, IdArgs};
use crate::util::{OutputFormat, short_id};

const ARGS: IdArgs = IdArgs::new(RecordKind::Apartment);

#[derive(Debug, Clone)]
pub struct CmdApartmentNew {
    pub title: String,
    pub address: String,
    pub price: String,
    pub max_guests: String,
    pub details: Option<String>,
    pub image: Option<String>,

    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdApartmentNew {
    pub const NAME: &str = "new";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("add")
            .about("Add a new apartment")
            .arg(arg!(title: <TITLE> "Title of the apartment"))
            .arg(arg!(--address <ADDRESS> "Street address").required(true))
            .arg(arg!(--price <PRICE> "Price per night, e.g. 89.90").required(true))
            .arg(arg!(--"max-guests" <COUNT> "Maximum number of guests").required(true))
            .arg(arg!(--details <DETAILS> "Free-form description"))
            .arg(arg!(--image <NAME> "Name of the illustration, defaults to `house`"))
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let get = |id: &str| matches.get_one::<String>(id).cloned();
        Self {
            title: get("title").unwrap_or_default(),
            address: get("address").unwrap_or_default(),
            price: get("price").unwrap_or_default(),
            max_guests: get("max-guests").unwrap_or_default(),
            details: get("details"),
            image: get("image"),

            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub async fn run(self, rentcal: &Rentcal) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "adding new apartment...");
        let draft = ApartmentDraft {
            title: self.title,
            address: self.address,
            price_per_night: self.price,
            details: self.details.unwrap_or_default(),
            image_name: self.image,
            max_guests: self.max_guests,
        };
        let apartment = rentcal.new_apartment(draft).await?;
        print_apartments(&[apartment], self.output_format, self.verbose);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdApartmentList {
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdApartmentList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List apartments")
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub async fn run(self, rentcal: &Rentcal) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing apartments...");
        let apartments = rentcal.list_apartments().await?;
        if apartments.is_empty() && self.output_format == OutputFormat::Table {
            println!("{}", "No apartments found".italic());
            return Ok(());
        }

        print_apartments(&apartments, self.output_format, self.verbose);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdApartmentDelete {
    pub ids: Vec<String>,
}

impl CmdApartmentDelete {
    pub const NAME: &str = "delete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Delete apartments, their guests are kept without an apartment")
            .arg(ARGS.ids())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            ids: IdArgs::get_ids(matches),
        }
    }

    pub async fn run(self, rentcal: &Rentcal) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "deleting apartments...");
        for id in &self.ids {
            let id = rentcal.resolve_apartment_id(id).await?;
            let apartment = rentcal.get_apartment(id).await?;
            rentcal.delete_apartment(id).await?;
            println!(
                "Deleted apartment {} {}",
                short_id(id).bold(),
                apartment.title
            );
        }
        Ok(())
    }
}

fn print_apartments(apartments: &[Apartment], output_format: OutputFormat, verbose: bool) {
    let columns = if verbose {
        vec![
            ApartmentColumn::Uid,
            ApartmentColumn::Title,
            ApartmentColumn::Address,
            ApartmentColumn::Price,
            ApartmentColumn::MaxGuests,
            ApartmentColumn::Image,
            ApartmentColumn::Details,
        ]
    } else {
        vec![
            ApartmentColumn::Id,
            ApartmentColumn::Title,
            ApartmentColumn::Price,
            ApartmentColumn::MaxGuests,
            ApartmentColumn::Address,
        ]
    };
    let formatter = ApartmentFormatter::new(columns).with_output_format(output_format);
    println!("{}", formatter.format(apartments));
}
