// SPDX-FileCopyrightText: 2025-2026 Rentcal Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::Color;
use rentcal_core::{Apartment, Guest};

use crate::table::{PaddingDirection, Table, TableColumn, TableStyleBasic, TableStyleJson};
use crate::util::{OutputFormat, format_datetime, short_id};

/// A guest together with the apartment it is booked into, if that still exists.
#[derive(Debug)]
pub struct GuestRow<'a> {
    pub guest: &'a Guest,
    pub apartment: Option<&'a Apartment>,
}

impl<'a> GuestRow<'a> {
    pub fn join(guests: &'a [Guest], apartments: &'a [Apartment]) -> Vec<Self> {
        guests
            .iter()
            .map(|guest| GuestRow {
                guest,
                apartment: guest.apartment_in(apartments),
            })
            .collect()
    }
}

#[derive(Debug)]
pub struct GuestFormatter {
    columns: Vec<GuestColumn>,
    format: OutputFormat,
}

impl GuestFormatter {
    pub fn new(columns: Vec<GuestColumn>) -> Self {
        Self {
            columns,
            format: OutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, rows: &'a [GuestRow<'a>]) -> Display<'a> {
        Display {
            rows,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    rows: &'a [GuestRow<'a>],
    formatter: &'a GuestFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = &self.formatter.columns;
        match self.formatter.format {
            OutputFormat::Json => write!(
                f,
                "{}",
                Table::new(TableStyleJson::new(), columns, self.rows)
            ),
            OutputFormat::Table => write!(
                f,
                "{}",
                Table::new(TableStyleBasic::new(), columns, self.rows)
            ),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum GuestColumn {
    Id,
    Uid,
    Name,
    Apartment,
    CheckIn,
    CheckOut,
    Nights,
    People,
    Passport,
    Email,
    Phone,
}

impl<'r> TableColumn<GuestRow<'r>> for GuestColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            GuestColumn::Id => "ID",
            GuestColumn::Uid => "UID",
            GuestColumn::Name => "Name",
            GuestColumn::Apartment => "Apartment",
            GuestColumn::CheckIn => "Check In",
            GuestColumn::CheckOut => "Check Out",
            GuestColumn::Nights => "Nights",
            GuestColumn::People => "People",
            GuestColumn::Passport => "Passport",
            GuestColumn::Email => "Email",
            GuestColumn::Phone => "Phone",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a GuestRow<'r>) -> Cow<'a, str> {
        let guest = data.guest;
        match self {
            GuestColumn::Id => short_id(guest.id).into(),
            GuestColumn::Uid => guest.id.to_string().into(),
            GuestColumn::Name => guest.full_name.as_str().into(),
            GuestColumn::Apartment => match data.apartment {
                Some(a) => a.title.as_str().into(),
                None => "-".into(),
            },
            GuestColumn::CheckIn => format_datetime(guest.check_in).into(),
            GuestColumn::CheckOut => format_datetime(guest.check_out).into(),
            GuestColumn::Nights => guest.number_of_nights().to_string().into(),
            GuestColumn::People => guest.total_people().to_string().into(),
            GuestColumn::Passport => if guest.has_passport() { "yes" } else { "no" }.into(),
            GuestColumn::Email => guest.email.as_str().into(),
            GuestColumn::Phone => guest.phone_number.as_str().into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            GuestColumn::Nights | GuestColumn::People => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn get_color(&self, data: &GuestRow<'r>) -> Option<Color> {
        match self {
            GuestColumn::Apartment if data.apartment.is_none() => Some(Color::BrightBlack),
            GuestColumn::Passport if !data.guest.has_passport() => Some(Color::Yellow),
            _ => None,
        }
    }
}
