// SPDX-FileCopyrightText: 2025-2026 Rentcal Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::PathBuf;

use clap::{ArgMatches, Command, arg};
use colored::Colorize;
use rentcal_core::{Guest, GuestDraft, RecordKind, Rentcal};

use crate::arg::{CommonArgs, IdArgs, PassportArgs};
use crate::family_member_formatter::{FamilyMemberColumn, FamilyMemberFormatter};
use crate::guest_formatter::{GuestColumn, GuestFormatter, GuestRow};
use crate::util::{OutputFormat, format_datetime, parse_datetime, short_id};

const ARGS: IdArgs = IdArgs::new(RecordKind::Guest);

#[derive(Debug, Clone)]
pub struct CmdGuestNew {
    pub name: String,
    pub apartment: String,
    pub check_in: String,
    pub check_out: Option<String>,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub notes: Option<String>,
    pub passport: Option<PathBuf>,

    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdGuestNew {
    pub const NAME: &str = "new";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("add")
            .about("Book a new guest into an apartment")
            .arg(arg!(name: <NAME> "Full name of the guest"))
            .arg(
                arg!(-a --apartment <ID> "The id, or a unique id prefix, of the apartment")
                    .required(true),
            )
            .arg(
                arg!(--"check-in" <DATE> "Check-in, YYYY-MM-DD or YYYY-MM-DD HH:MM")
                    .required(true),
            )
            .arg(arg!(--"check-out" <DATE> "Check-out, defaults to the day after check-in"))
            .arg(CommonArgs::email())
            .arg(CommonArgs::phone())
            .arg(arg!(--address <ADDRESS> "Home address of the guest"))
            .arg(arg!(--notes <NOTES> "Free-form notes"))
            .arg(PassportArgs::passport(false))
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let get = |id: &str| matches.get_one::<String>(id).cloned();
        Self {
            name: get("name").unwrap_or_default(),
            apartment: get("apartment").unwrap_or_default(),
            check_in: get("check-in").unwrap_or_default(),
            check_out: get("check-out"),
            email: CommonArgs::get_email(matches),
            phone: CommonArgs::get_phone(matches),
            address: get("address"),
            notes: get("notes"),
            passport: PassportArgs::get_passport(matches),

            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub async fn run(self, rentcal: &Rentcal) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "adding new guest...");
        let check_in = parse_datetime(&self.check_in)?;
        let check_out = self.check_out.as_deref().map(parse_datetime).transpose()?;
        let apartment_id = rentcal.resolve_apartment_id(&self.apartment).await?;
        let passport_image = match &self.passport {
            Some(path) => Some(rentcal.load_image(path).await?),
            None => None,
        };

        let mut draft = GuestDraft::new(check_in);
        draft.full_name = self.name;
        draft.email = self.email;
        draft.phone_number = self.phone;
        draft.address = self.address.unwrap_or_default();
        draft.check_out = check_out;
        draft.apartment_id = Some(apartment_id);
        draft.passport_image = passport_image;
        draft.notes = self.notes.unwrap_or_default();

        let guest = rentcal.new_guest(draft).await?;
        print_guests(rentcal, &[guest], self.output_format, self.verbose).await
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdGuestList {
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdGuestList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List guests, most recently added first")
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
        tracing::debug!(?self, "listing guests...");
        let guests = rentcal.list_guests().await?;
        if guests.is_empty() && self.output_format == OutputFormat::Table {
            println!("{}", "No guests found".italic());
            return Ok(());
        }

        print_guests(rentcal, &guests, self.output_format, self.verbose).await
    }
}

#[derive(Debug, Clone)]
pub struct CmdGuestShow {
    pub id: String,
}

impl CmdGuestShow {
    pub const NAME: &str = "show";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show a guest with its family members")
            .arg(ARGS.id())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: IdArgs::get_id(matches),
        }
    }

    pub async fn run(self, rentcal: &Rentcal) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing guest...");
        let id = rentcal.resolve_guest_id(&self.id).await?;
        let guest = rentcal.get_guest(id).await?;
        let apartments = rentcal.list_apartments().await?;
        let apartment = guest
            .apartment_in(&apartments)
            .map_or_else(|| "-".dimmed().to_string(), |a| a.title.clone());

        println!("{}", guest.full_name.bold());
        let field = |name: &str, value: &str| {
            let value = if value.is_empty() { "-" } else { value };
            let name = format!("{name}:");
            println!("  {} {}", format!("{name:<10}").dimmed(), value);
        };
        field("ID", &guest.id.to_string());
        field("Apartment", &apartment);
        field("Check in", &format_datetime(guest.check_in));
        field("Check out", &format_datetime(guest.check_out));
        field("Nights", &guest.number_of_nights().to_string());
        field("People", &guest.total_people().to_string());
        field("Email", &guest.email);
        field("Phone", &guest.phone_number);
        field("Address", &guest.address);
        field("Passport", if guest.has_passport() { "yes" } else { "no" });
        field("Notes", &guest.notes);

        if !guest.family_members.is_empty() {
            println!();
            println!("{}", "Family members".bold());
            let columns = vec![
                FamilyMemberColumn::Id,
                FamilyMemberColumn::Name,
                FamilyMemberColumn::Relationship,
                FamilyMemberColumn::Passport,
            ];
            let formatter = FamilyMemberFormatter::new(columns);
            println!("{}", formatter.format(&guest.family_members));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdGuestDelete {
    pub ids: Vec<String>,
}

impl CmdGuestDelete {
    pub const NAME: &str = "delete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Delete guests together with their family members")
            .arg(ARGS.ids())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            ids: IdArgs::get_ids(matches),
        }
    }

    pub async fn run(self, rentcal: &Rentcal) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "deleting guests...");
        for id in &self.ids {
            let id = rentcal.resolve_guest_id(id).await?;
            let guest = rentcal.get_guest(id).await?;
            let removed = rentcal.delete_guest(id).await?;
            println!(
                "Deleted guest {} {} and {} family member(s)",
                short_id(id).bold(),
                guest.full_name,
                removed
            );
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdGuestNotes {
    pub id: String,
    pub notes: String,
}

impl CmdGuestNotes {
    pub const NAME: &str = "notes";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Replace the notes of a guest")
            .arg(ARGS.id())
            .arg(arg!(notes: <NOTES> "The new notes, empty to clear"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: IdArgs::get_id(matches),
            notes: matches.get_one::<String>("notes").cloned().unwrap_or_default(),
        }
    }

    pub async fn run(self, rentcal: &Rentcal) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "updating guest notes...");
        let id = rentcal.resolve_guest_id(&self.id).await?;
        let guest = rentcal.update_guest_notes(id, &self.notes).await?;
        print_guests(rentcal, &[guest], OutputFormat::Table, false).await
    }
}

#[derive(Debug, Clone)]
pub struct CmdGuestPassport {
    pub id: String,
    pub passport: Option<PathBuf>,
    pub remove: bool,
}

impl CmdGuestPassport {
    pub const NAME: &str = "passport";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Attach or remove the passport scan of a guest")
            .arg(ARGS.id())
            .arg(PassportArgs::passport(true))
            .arg(PassportArgs::remove())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let passport = PassportArgs::get_passport(matches);
        let remove = PassportArgs::get_remove(matches);
        if passport.is_none() && !remove {
            return Err("Either a passport image path or --remove is required".into());
        }

        Ok(Self {
            id: IdArgs::get_id(matches),
            passport,
            remove,
        })
    }

    pub async fn run(self, rentcal: &Rentcal) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "updating guest passport...");
        let id = rentcal.resolve_guest_id(&self.id).await?;
        let image = match &self.passport {
            Some(path) if !self.remove => Some(rentcal.load_image(path).await?),
            _ => None,
        };
        let guest = rentcal.set_guest_passport(id, image).await?;
        print_guests(rentcal, &[guest], OutputFormat::Table, false).await
    }
}

async fn print_guests(
    rentcal: &Rentcal,
    guests: &[Guest],
    output_format: OutputFormat,
    verbose: bool,
) -> Result<(), Box<dyn Error>> {
    let apartments = rentcal.list_apartments().await?;
    let rows = GuestRow::join(guests, &apartments);

    let columns = if verbose {
        vec![
            GuestColumn::Uid,
            GuestColumn::Name,
            GuestColumn::Apartment,
            GuestColumn::CheckIn,
            GuestColumn::CheckOut,
            GuestColumn::Nights,
            GuestColumn::People,
            GuestColumn::Passport,
            GuestColumn::Email,
            GuestColumn::Phone,
        ]
    } else {
        vec![
            GuestColumn::Id,
            GuestColumn::Name,
            GuestColumn::Apartment,
            GuestColumn::CheckIn,
            GuestColumn::CheckOut,
            GuestColumn::Nights,
            GuestColumn::People,
        ]
    };
    let formatter = GuestFormatter::new(columns).with_output_format(output_format);
    println!("{}", formatter.format(&rows));
    Ok(())
}
