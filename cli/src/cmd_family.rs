// SPDX-FileCopyrightText: 2025-2026 Rentcal Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::PathBuf;

use clap::{ArgMatches, Command, arg};
use colored::Colorize;
use rentcal_core::{FamilyMember, FamilyMemberDraft, RecordKind, Relationship, Rentcal};

use crate::arg::{CommonArgs, IdArgs, PassportArgs};
use crate::family_member_formatter::{FamilyMemberColumn, FamilyMemberFormatter};
use crate::util::{OutputFormat, short_id};

const ARGS: IdArgs = IdArgs::new(RecordKind::FamilyMember);

#[derive(Debug, Clone)]
pub struct CmdFamilyNew {
    pub guest: String,
    pub name: String,
    pub relationship: String,
    pub email: String,
    pub phone: String,
    pub passport: Option<PathBuf>,

    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdFamilyNew {
    pub const NAME: &str = "new";

    pub fn command() -> Command {
        let relationships: Vec<_> = Relationship::ALL.iter().map(|r| r.as_str()).collect();
        Command::new(Self::NAME)
            .alias("add")
            .about("Add a family member travelling with a guest")
            .arg(arg!(guest: <GUEST> "The id, or a unique id prefix, of the guest"))
            .arg(arg!(name: <NAME> "Full name of the family member"))
            .arg(
                arg!(-r --relationship <RELATIONSHIP> "Relationship to the guest")
                    .long_help(format!(
                        "Relationship to the guest, one of: {}",
                        relationships.join(", ")
                    ))
                    .default_value(Relationship::default().as_str()),
            )
            .arg(CommonArgs::email())
            .arg(CommonArgs::phone())
            .arg(PassportArgs::passport(false))
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let get = |id: &str| matches.get_one::<String>(id).cloned();
        Self {
            guest: get("guest").unwrap_or_default(),
            name: get("name").unwrap_or_default(),
            relationship: get("relationship").unwrap_or_default(),
            email: CommonArgs::get_email(matches),
            phone: CommonArgs::get_phone(matches),
            passport: PassportArgs::get_passport(matches),

            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub async fn run(self, rentcal: &Rentcal) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "adding new family member...");
        let guest_id = rentcal.resolve_guest_id(&self.guest).await?;
        let passport_image = match &self.passport {
            Some(path) => Some(rentcal.load_image(path).await?),
            None => None,
        };

        let mut draft = FamilyMemberDraft::new(guest_id);
        draft.full_name = self.name;
        draft.relationship = self.relationship;
        draft.email = self.email;
        draft.phone_number = self.phone;
        draft.passport_image = passport_image;

        let member = rentcal.new_family_member(draft).await?;
        print_family_members(&[member], self.output_format, self.verbose);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdFamilyList {
    pub guest: Option<String>,
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdFamilyList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List family members ordered by name")
            .arg(arg!(-g --guest <GUEST> "Only members travelling with this guest"))
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            guest: matches.get_one::<String>("guest").cloned(),
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub async fn run(self, rentcal: &Rentcal) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing family members...");
        let members = match &self.guest {
            Some(guest) => {
                let id = rentcal.resolve_guest_id(guest).await?;
                rentcal.get_guest(id).await?.family_members
            }
            None => rentcal.list_family_members().await?,
        };
        if members.is_empty() && self.output_format == OutputFormat::Table {
            println!("{}", "No family members found".italic());
            return Ok(());
        }

        print_family_members(&members, self.output_format, self.verbose);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdFamilyDelete {
    pub ids: Vec<String>,
}

impl CmdFamilyDelete {
    pub const NAME: &str = "delete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Delete family members")
            .arg(ARGS.ids())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            ids: IdArgs::get_ids(matches),
        }
    }

    pub async fn run(self, rentcal: &Rentcal) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "deleting family members...");
        for id in &self.ids {
            let id = rentcal.resolve_family_member_id(id).await?;
            let member = rentcal.get_family_member(id).await?;
            rentcal.delete_family_member(id).await?;
            println!(
                "Deleted family member {} {}",
                short_id(id).bold(),
                member.full_name
            );
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdFamilyPassport {
    pub id: String,
    pub passport: Option<PathBuf>,
    pub remove: bool,
}

impl CmdFamilyPassport {
    pub const NAME: &str = "passport";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Attach or remove the passport scan of a family member")
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
        tracing::debug!(?self, "updating family member passport...");
        let id = rentcal.resolve_family_member_id(&self.id).await?;
        let image = match &self.passport {
            Some(path) if !self.remove => Some(rentcal.load_image(path).await?),
            _ => None,
        };
        let member = rentcal.set_family_member_passport(id, image).await?;
        print_family_members(&[member], OutputFormat::Table, false);
        Ok(())
    }
}

fn print_family_members(members: &[FamilyMember], output_format: OutputFormat, verbose: bool) {
    let columns = if verbose {
        vec![
            FamilyMemberColumn::Uid,
            FamilyMemberColumn::Name,
            FamilyMemberColumn::Relationship,
            FamilyMemberColumn::Guest,
            FamilyMemberColumn::Passport,
            FamilyMemberColumn::Email,
            FamilyMemberColumn::Phone,
        ]
    } else {
        vec![
            FamilyMemberColumn::Id,
            FamilyMemberColumn::Name,
            FamilyMemberColumn::Relationship,
            FamilyMemberColumn::Guest,
        ]
    };
    let formatter = FamilyMemberFormatter::new(columns).with_output_format(output_format);
    println!("{}", formatter.format(members));
}
