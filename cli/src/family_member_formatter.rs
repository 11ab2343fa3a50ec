// SPDX-FileCopyrightText: 2025-2026 Rentcal Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use rentcal_core::FamilyMember;

use crate::table::{Table, TableColumn, TableStyleBasic, TableStyleJson};
use crate::util::{OutputFormat, short_id};

#[derive(Debug)]
pub struct FamilyMemberFormatter {
    columns: Vec<FamilyMemberColumn>,
    format: OutputFormat,
}

impl FamilyMemberFormatter {
    pub fn new(columns: Vec<FamilyMemberColumn>) -> Self {
        Self {
            columns,
            format: OutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, members: &'a [FamilyMember]) -> Display<'a> {
        Display {
            members,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    members: &'a [FamilyMember],
    formatter: &'a FamilyMemberFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = &self.formatter.columns;
        match self.formatter.format {
            OutputFormat::Json => write!(
                f,
                "{}",
                Table::new(TableStyleJson::new(), columns, self.members)
            ),
            OutputFormat::Table => write!(
                f,
                "{}",
                Table::new(TableStyleBasic::new(), columns, self.members)
            ),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum FamilyMemberColumn {
    Id,
    Uid,
    Name,
    Relationship,
    Guest,
    Passport,
    Email,
    Phone,
}

impl TableColumn<FamilyMember> for FamilyMemberColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            FamilyMemberColumn::Id => "ID",
            FamilyMemberColumn::Uid => "UID",
            FamilyMemberColumn::Name => "Name",
            FamilyMemberColumn::Relationship => "Relationship",
            FamilyMemberColumn::Guest => "Guest",
            FamilyMemberColumn::Passport => "Passport",
            FamilyMemberColumn::Email => "Email",
            FamilyMemberColumn::Phone => "Phone",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a FamilyMember) -> Cow<'a, str> {
        match self {
            FamilyMemberColumn::Id => short_id(data.id).into(),
            FamilyMemberColumn::Uid => data.id.to_string().into(),
            FamilyMemberColumn::Name => data.full_name.as_str().into(),
            FamilyMemberColumn::Relationship => data.relationship.as_str().into(),
            FamilyMemberColumn::Guest => match data.guest_id {
                Some(id) => short_id(id).into(),
                None => "-".into(),
            },
            FamilyMemberColumn::Passport => if data.has_passport() { "yes" } else { "no" }.into(),
            FamilyMemberColumn::Email => data.email.as_str().into(),
            FamilyMemberColumn::Phone => data.phone_number.as_str().into(),
        }
    }
}
