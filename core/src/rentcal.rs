// SPDX-FileCopyrightText: 2025-2026 Rentcal Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use jiff::Timestamp;
use jiff::civil::{Date, Weekday};
use tokio::fs;
use uuid::Uuid;

use crate::apartment::example_apartments;
use crate::calendar::{self, CalendarDays, DoubleBooking};
use crate::error::{Error, RecordKind, Result};
use crate::localdb::LocalDb;
use crate::{
    Apartment, ApartmentDraft, Config, FamilyMember, FamilyMemberDraft, Guest, GuestDraft,
};

const DB_FILENAME: &str = "rentcal.db";

/// RENTCAL application core.
#[derive(Debug, Clone)]
pub struct Rentcal {
    config: Config,
    db: LocalDb,
}

impl Rentcal {
    /// Creates a new instance with the given configuration.
    ///
    /// Opens (or creates) the database and, on first launch, inserts the
    /// example apartments.
    pub async fn new(mut config: Config) -> Result<Self> {
        config.normalize()?;
        prepare(&config).await?;

        let filename = config.state_dir.as_ref().map(|a| a.join(DB_FILENAME));
        let db = LocalDb::open(filename.as_deref()).await?;

        let that = Self { config, db };
        if that.config.seed_examples {
            that.seed().await?;
        }
        Ok(that)
    }

    /// The effective configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// First column of the calendar grid.
    pub fn week_start(&self) -> Weekday {
        self.config.week_start.into()
    }

    async fn seed(&self) -> Result<()> {
        if self.db.apartments.count().await? > 0 {
            return Ok(());
        }

        tracing::info!("no apartments yet, inserting examples");
        for apartment in example_apartments() {
            self.db.apartments.insert(&apartment).await?;
        }
        Ok(())
    }

    /// Add a new apartment from the given draft.
    pub async fn new_apartment(&self, draft: ApartmentDraft) -> Result<Apartment> {
        let apartment = draft.to_apartment(Uuid::new_v4())?;
        tracing::debug!(id = %apartment.id, title = apartment.title, "adding apartment");
        self.db.apartments.insert(&apartment).await?;
        Ok(apartment)
    }

    /// All apartments ordered by title.
    pub async fn list_apartments(&self) -> Result<Vec<Apartment>> {
        self.db.apartments.list().await
    }

    pub async fn get_apartment(&self, id: Uuid) -> Result<Apartment> {
        self.db
            .apartments
            .get(id)
            .await?
            .ok_or_else(|| not_found(RecordKind::Apartment, id))
    }

    /// Deletes an apartment. Its guests stay, without an apartment.
    pub async fn delete_apartment(&self, id: Uuid) -> Result<()> {
        tracing::debug!(%id, "deleting apartment");
        match self.db.apartments.delete(id).await? {
            true => Ok(()),
            false => Err(not_found(RecordKind::Apartment, id)),
        }
    }

    /// Add a new guest from the given draft. The apartment must exist.
    pub async fn new_guest(&self, draft: GuestDraft) -> Result<Guest> {
        let guest = draft.to_guest(Uuid::new_v4(), now())?;
        if let Some(apartment_id) = guest.apartment_id {
            self.get_apartment(apartment_id).await?;
        }

        tracing::debug!(id = %guest.id, name = guest.full_name, "adding guest");
        self.db.guests.insert(&guest).await?;
        Ok(guest)
    }

    /// All guests with their family members, most recently created first.
    pub async fn list_guests(&self) -> Result<Vec<Guest>> {
        self.db.guests_with_family().await
    }

    /// One guest with its family members.
    pub async fn get_guest(&self, id: Uuid) -> Result<Guest> {
        self.db
            .guest(id)
            .await?
            .ok_or_else(|| not_found(RecordKind::Guest, id))
    }

    /// Deletes a guest and its family members, returning how many members
    /// were removed.
    pub async fn delete_guest(&self, id: Uuid) -> Result<u64> {
        tracing::debug!(%id, "deleting guest");
        self.db
            .guests
            .delete(id)
            .await?
            .ok_or_else(|| not_found(RecordKind::Guest, id))
    }

    pub async fn update_guest_notes(&self, id: Uuid, notes: &str) -> Result<Guest> {
        if !self.db.guests.update_notes(id, notes.trim()).await? {
            return Err(not_found(RecordKind::Guest, id));
        }
        self.get_guest(id).await
    }

    /// Replaces (or with `None`, removes) the guest's passport image.
    pub async fn set_guest_passport(&self, id: Uuid, image: Option<Vec<u8>>) -> Result<Guest> {
        if !self.db.guests.set_passport(id, image.as_deref()).await? {
            return Err(not_found(RecordKind::Guest, id));
        }
        self.get_guest(id).await
    }

    /// Add a family member to an existing guest.
    pub async fn new_family_member(&self, draft: FamilyMemberDraft) -> Result<FamilyMember> {
        let member = draft.to_family_member(Uuid::new_v4())?;
        self.get_guest(draft.guest_id).await?;

        tracing::debug!(id = %member.id, guest = %draft.guest_id, "adding family member");
        self.db.family_members.insert(&member).await?;
        Ok(member)
    }

    /// All family members ordered by name.
    pub async fn list_family_members(&self) -> Result<Vec<FamilyMember>> {
        self.db.family_members.list().await
    }

    pub async fn get_family_member(&self, id: Uuid) -> Result<FamilyMember> {
        self.db
            .family_members
            .get(id)
            .await?
            .ok_or_else(|| not_found(RecordKind::FamilyMember, id))
    }

    pub async fn delete_family_member(&self, id: Uuid) -> Result<()> {
        tracing::debug!(%id, "deleting family member");
        match self.db.family_members.delete(id).await? {
            true => Ok(()),
            false => Err(not_found(RecordKind::FamilyMember, id)),
        }
    }

    /// Replaces (or with `None`, removes) the member's passport image.
    pub async fn set_family_member_passport(
        &self,
        id: Uuid,
        image: Option<Vec<u8>>,
    ) -> Result<FamilyMember> {
        if !self.db.family_members.set_passport(id, image.as_deref()).await? {
            return Err(not_found(RecordKind::FamilyMember, id));
        }
        self.get_family_member(id).await
    }

    /// Reads an image file, e.g. a scanned passport.
    pub async fn load_image(&self, path: &Path) -> Result<Vec<u8>> {
        tracing::debug!(path = %path.display(), "loading image");
        let bytes = fs::read(path).await?;
        if bytes.is_empty() {
            return Err(Error::validation("passport", "image file is empty"));
        }
        Ok(bytes)
    }

    /// Fetches everything needed to draw the month containing `month`.
    ///
    /// With `apartment_id` set to `None` no occupancy is shown.
    pub async fn occupancy(
        &self,
        month: Date,
        apartment_id: Option<Uuid>,
    ) -> Result<OccupancyMonth> {
        let apartment = match apartment_id {
            Some(id) => Some(self.get_apartment(id).await?),
            None => None,
        };
        let guests = self.list_guests().await?;
        Ok(OccupancyMonth {
            month: calendar::first_of_month(month),
            week_start: self.week_start(),
            apartment,
            guests,
        })
    }

    /// Resolves a full id or a unique id prefix to an apartment id.
    pub async fn resolve_apartment_id(&self, input: &str) -> Result<Uuid> {
        let kind = RecordKind::Apartment;
        match check_id_input(kind, input)? {
            IdInput::Full(id) => Ok(id),
            IdInput::Prefix(prefix) => {
                unique(kind, prefix, self.db.apartments.ids_with_prefix(prefix, 2).await?)
            }
        }
    }

    /// Resolves a full id or a unique id prefix to a guest id.
    pub async fn resolve_guest_id(&self, input: &str) -> Result<Uuid> {
        let kind = RecordKind::Guest;
        match check_id_input(kind, input)? {
            IdInput::Full(id) => Ok(id),
            IdInput::Prefix(prefix) => {
                unique(kind, prefix, self.db.guests.ids_with_prefix(prefix, 2).await?)
            }
        }
    }

    /// Resolves a full id or a unique id prefix to a family member id.
    pub async fn resolve_family_member_id(&self, input: &str) -> Result<Uuid> {
        let kind = RecordKind::FamilyMember;
        match check_id_input(kind, input)? {
            IdInput::Full(id) => Ok(id),
            IdInput::Prefix(prefix) => {
                let ids = self.db.family_members.ids_with_prefix(prefix, 2).await?;
                unique(kind, prefix, ids)
            }
        }
    }

    /// Close the database connection.
    pub async fn close(self) -> Result<()> {
        self.db.close().await
    }
}

/// A month of bookings ready to be laid out with [`OccupancyMonth::days`].
#[derive(Debug, Clone)]
pub struct OccupancyMonth {
    month: Date,
    week_start: Weekday,
    apartment: Option<Apartment>,
    guests: Vec<Guest>,
}

impl OccupancyMonth {
    /// The first day of the month.
    pub fn month(&self) -> Date {
        self.month
    }

    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    /// Lays the month out with a different first column than the configured
    /// one.
    pub fn with_week_start(mut self, week_start: Weekday) -> Self {
        self.week_start = week_start;
        self
    }

    /// The selected apartment, if any.
    pub fn apartment(&self) -> Option<&Apartment> {
        self.apartment.as_ref()
    }

    /// The grid cells of the month.
    pub fn days(&self) -> CalendarDays<'_> {
        calendar::build_calendar(
            self.month,
            &self.guests,
            self.apartment.as_ref(),
            self.week_start,
        )
    }

    /// Guests of the selected apartment whose stay touches this month,
    /// ordered by check-in.
    pub fn guests(&self) -> Vec<&Guest> {
        let Some(apartment) = &self.apartment else {
            return Vec::new();
        };

        let first = self.month;
        let last = calendar::shift_month(first, 1)
            .yesterday()
            .unwrap_or(first);

        let mut guests: Vec<&Guest> = self
            .guests
            .iter()
            .filter(|g| g.is_booked_at(apartment.id))
            .filter(|g| {
                let (check_in, check_out) = g.stay_dates();
                check_in <= last && first <= check_out
            })
            .collect();
        guests.sort_by_key(|g| g.check_in);
        guests
    }

    /// Overlapping bookings of the selected apartment.
    pub fn double_bookings(&self) -> Vec<DoubleBooking<'_>> {
        match &self.apartment {
            Some(apartment) => calendar::double_bookings(&self.guests, apartment.id),
            None => Vec::new(),
        }
    }
}

enum IdInput<'a> {
    Full(Uuid),
    Prefix(&'a str),
}

fn check_id_input(kind: RecordKind, input: &str) -> Result<IdInput<'_>> {
    let input = input.trim();
    if let Ok(id) = Uuid::parse_str(input) {
        return Ok(IdInput::Full(id));
    }

    if input.is_empty() || !input.chars().all(|c| c.is_ascii_hexdigit() || c == '-') {
        return Err(Error::NotFound {
            kind,
            id: input.to_string(),
        });
    }
    Ok(IdInput::Prefix(input))
}

fn unique(kind: RecordKind, prefix: &str, ids: Vec<Uuid>) -> Result<Uuid> {
    match ids.as_slice() {
        [id] => Ok(*id),
        [] => Err(Error::NotFound {
            kind,
            id: prefix.to_string(),
        }),
        _ => Err(Error::Ambiguous {
            kind,
            prefix: prefix.to_string(),
        }),
    }
}

fn not_found(kind: RecordKind, id: Uuid) -> Error {
    Error::NotFound {
        kind,
        id: id.to_string(),
    }
}

/// Current time at the microsecond precision the store keeps.
fn now() -> Timestamp {
    let now = Timestamp::now();
    Timestamp::from_microsecond(now.as_microsecond()).unwrap_or(now)
}

async fn prepare(config: &Config) -> Result<()> {
    if let Some(parent) = &config.state_dir {
        tracing::debug!(path = %parent.display(), "ensuring state directory exists");
        fs::create_dir_all(parent).await?;
    }
    Ok(())
}
