// SPDX-FileCopyrightText: 2025-2026 Rentcal Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use rentcal_core::Apartment;

use crate::table::{PaddingDirection, Table, TableColumn, TableStyleBasic, TableStyleJson};
use crate::util::{OutputFormat, short_id};

#[derive(Debug)]
pub struct ApartmentFormatter {
    columns: Vec<ApartmentColumn>,
    format: OutputFormat,
}

impl ApartmentFormatter {
    pub fn new(columns: Vec<ApartmentColumn>) -> Self {
        Self {
            columns,
            format: OutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, apartments: &'a [Apartment]) -> Display<'a> {
        Display {
            apartments,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    apartments: &'a [Apartment],
    formatter: &'a ApartmentFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = &self.formatter.columns;
        match self.formatter.format {
            OutputFormat::Json => write!(
                f,
                "{}",
                Table::new(TableStyleJson::new(), columns, self.apartments)
            ),
            OutputFormat::Table => write!(
                f,
                "{}",
                Table::new(TableStyleBasic::new(), columns, self.apartments)
            ),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum ApartmentColumn {
    Id,
    Uid,
    Title,
    Address,
    Price,
    MaxGuests,
    Image,
    Details,
}

impl TableColumn<Apartment> for ApartmentColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            ApartmentColumn::Id => "ID",
            ApartmentColumn::Uid => "UID",
            ApartmentColumn::Title => "Title",
            ApartmentColumn::Address => "Address",
            ApartmentColumn::Price => "Price Per Night",
            ApartmentColumn::MaxGuests => "Max Guests",
            ApartmentColumn::Image => "Image",
            ApartmentColumn::Details => "Details",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a Apartment) -> Cow<'a, str> {
        match self {
            ApartmentColumn::Id => short_id(data.id).into(),
            ApartmentColumn::Uid => data.id.to_string().into(),
            ApartmentColumn::Title => data.title.as_str().into(),
            ApartmentColumn::Address => data.address.as_str().into(),
            ApartmentColumn::Price => format!("{}/night", data.price_per_night).into(),
            ApartmentColumn::MaxGuests => data.max_guests.to_string().into(),
            ApartmentColumn::Image => data.image_name.as_str().into(),
            ApartmentColumn::Details => data.details.as_str().into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            ApartmentColumn::Price | ApartmentColumn::MaxGuests => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }
}
