// SPDX-FileCopyrightText: 2025-2026 Rentcal Developers
//
// SPDX-License-Identifier: Apache-2.0

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::Result;
use crate::validate;

/// Image reference used when none is given.
pub const DEFAULT_IMAGE_NAME: &str = "house";

/// A rentable apartment. Apartments own nothing; guests point at them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Apartment {
    /// The unique identifier of the apartment.
    pub id: Uuid,

    /// Display title.
    pub title: String,

    /// Full postal address.
    pub address: String,

    /// Price per night.
    pub price_per_night: Decimal,

    /// Free-text description.
    pub details: String,

    /// Reference to the apartment image.
    pub image_name: String,

    /// Maximum number of guests the apartment sleeps.
    pub max_guests: u32,
}

/// Raw user input for a new apartment, validated by [`ApartmentDraft::validate`].
#[derive(Debug, Clone, Default)]
pub struct ApartmentDraft {
    pub title: String,
    pub address: String,
    /// Decimal text, e.g. `"150"` or `"89.90"`.
    pub price_per_night: String,
    pub details: String,
    pub image_name: Option<String>,
    /// Whole number text, e.g. `"4"`.
    pub max_guests: String,
}

impl ApartmentDraft {
    /// Checks every field, reporting the first one that fails.
    pub fn validate(&self) -> Result<()> {
        self.to_apartment(Uuid::nil()).map(|_| ())
    }

    pub(crate) fn to_apartment(&self, id: Uuid) -> Result<Apartment> {
        Ok(Apartment {
            id,
            title: validate::required("title", &self.title)?,
            address: validate::required("address", &self.address)?,
            price_per_night: validate::price("price_per_night", &self.price_per_night)?,
            details: self.details.trim().to_string(),
            image_name: self
                .image_name
                .as_deref()
                .map(str::trim)
                .filter(|a| !a.is_empty())
                .unwrap_or(DEFAULT_IMAGE_NAME)
                .to_string(),
            max_guests: validate::count("max_guests", &self.max_guests)?,
        })
    }
}

/// The two apartments inserted on first launch.
pub(crate) fn example_apartments() -> [Apartment; 2] {
    [
        Apartment {
            id: Uuid::new_v4(),
            title: "Gemütliche Loftwohnung".to_string(),
            address: "Musterstraße 123".to_string(),
            price_per_night: Decimal::from(150),
            details: "Moderne Loftwohnung im Stadtzentrum".to_string(),
            image_name: "loft".to_string(),
            max_guests: 4,
        },
        Apartment {
            id: Uuid::new_v4(),
            title: "Strandvilla".to_string(),
            address: "Strandweg 456".to_string(),
            price_per_night: Decimal::from(350),
            details: "Direkter Strandzugang mit Pool".to_string(),
            image_name: "villa".to_string(),
            max_guests: 6,
        },
    ]
}
