// SPDX-FileCopyrightText: 2025-2026 Rentcal Developers
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::{Date, DateTime};
use jiff::{Timestamp, ToSpan};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::{Apartment, FamilyMember, validate};

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// A booking: the primary guest of a stay and the people travelling with them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guest {
    /// The unique identifier of the guest.
    pub id: Uuid,

    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,

    /// Raw bytes of the scanned passport, if uploaded.
    pub passport_image: Option<Vec<u8>>,

    /// When the booking was entered.
    pub created_at: Timestamp,

    /// First day of the stay, in local wall-clock time.
    pub check_in: DateTime,

    /// Last day of the stay, in local wall-clock time.
    pub check_out: DateTime,

    /// Free-text booking notes.
    pub notes: String,

    /// The booked apartment. The guest does not own it.
    pub apartment_id: Option<Uuid>,

    /// People travelling with the guest, owned by the guest.
    pub family_members: Vec<FamilyMember>,
}

impl Guest {
    /// Whole days between check-in and check-out, ignoring any remainder.
    ///
    /// A check-in at 15:00 and a check-out at 10:00 four days later is three
    /// nights of 24 hours, so this returns 3.
    pub fn number_of_nights(&self) -> i64 {
        self.check_out.duration_since(self.check_in).as_secs() / SECONDS_PER_DAY
    }

    /// The guest plus every family member.
    pub fn total_people(&self) -> usize {
        1 + self.family_members.len()
    }

    /// Whether a passport image has been uploaded.
    pub fn has_passport(&self) -> bool {
        self.passport_image.is_some()
    }

    /// Check-in and check-out normalized to calendar days.
    pub fn stay_dates(&self) -> (Date, Date) {
        (self.check_in.date(), self.check_out.date())
    }

    /// Whether the stay covers `date`, both ends inclusive.
    pub fn covers(&self, date: Date) -> bool {
        let (check_in, check_out) = self.stay_dates();
        check_in <= date && date <= check_out
    }

    /// Whether the guest booked the given apartment.
    pub fn is_booked_at(&self, apartment_id: Uuid) -> bool {
        self.apartment_id == Some(apartment_id)
    }

    /// Resolves the apartment reference against a list of apartments.
    ///
    /// A reference to an apartment that no longer exists reads as `None`.
    pub fn apartment_in<'a>(&self, apartments: &'a [Apartment]) -> Option<&'a Apartment> {
        let id = self.apartment_id?;
        apartments.iter().find(|a| a.id == id)
    }
}

/// Raw user input for a new guest.
#[derive(Debug, Clone)]
pub struct GuestDraft {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,

    pub check_in: DateTime,

    /// Defaults to one day after check-in.
    pub check_out: Option<DateTime>,

    /// Required: a booking always targets an apartment.
    pub apartment_id: Option<Uuid>,

    pub passport_image: Option<Vec<u8>>,
    pub notes: String,
}

impl GuestDraft {
    /// Creates an empty draft checking in at the given time.
    pub fn new(check_in: DateTime) -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            phone_number: String::new(),
            address: String::new(),
            check_in,
            check_out: None,
            apartment_id: None,
            passport_image: None,
            notes: String::new(),
        }
    }

    /// The effective check-out: the given one, or the day after check-in.
    pub fn check_out(&self) -> Result<DateTime> {
        match self.check_out {
            Some(dt) => Ok(dt),
            None => self
                .check_in
                .checked_add(1.day())
                .map_err(|e| Error::validation("check_out", e.to_string())),
        }
    }

    /// Checks every field, reporting the first one that fails.
    pub fn validate(&self) -> Result<()> {
        self.to_guest(Uuid::nil(), Timestamp::UNIX_EPOCH).map(|_| ())
    }

    pub(crate) fn to_guest(&self, id: Uuid, created_at: Timestamp) -> Result<Guest> {
        let full_name = validate::required("full_name", &self.full_name)?;
        let apartment_id = self
            .apartment_id
            .ok_or_else(|| Error::validation("apartment", "an apartment must be selected"))?;

        let check_out = self.check_out()?;
        if check_out.date() < self.check_in.date() {
            return Err(Error::validation(
                "check_out",
                format!(
                    "{} is before check-in {}",
                    check_out.date(),
                    self.check_in.date()
                ),
            ));
        }

        Ok(Guest {
            id,
            full_name,
            email: self.email.trim().to_string(),
            phone_number: self.phone_number.trim().to_string(),
            address: self.address.trim().to_string(),
            passport_image: self.passport_image.clone(),
            created_at,
            check_in: self.check_in,
            check_out,
            notes: self.notes.trim().to_string(),
            apartment_id: Some(apartment_id),
            family_members: Vec::new(),
        })
    }
}
