// SPDX-FileCopyrightText: 2025-2026 Rentcal Developers
//
// SPDX-License-Identifier: Apache-2.0

use jiff::Timestamp;
use jiff::civil::DateTime;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::Guest;
use crate::error::{Error, RecordKind, Result};
use crate::localdb::parse_uuid;

const KIND: RecordKind = RecordKind::Guest;

/// Guest rows. Family members are not loaded here, see
/// [`LocalDb`](crate::localdb::LocalDb) for the assembled view.
#[derive(Debug, Clone)]
pub struct Guests {
    pool: SqlitePool,
}

impl Guests {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, guest: &Guest) -> Result<()> {
        const SQL: &str = "\
INSERT INTO guests (id, full_name, email, phone_number, address, passport_image,
                    created_at, check_in, check_out, notes, apartment_id)
VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?);
";

        sqlx::query(SQL)
            .bind(guest.id.to_string())
            .bind(&guest.full_name)
            .bind(&guest.email)
            .bind(&guest.phone_number)
            .bind(&guest.address)
            .bind(guest.passport_image.as_deref())
            .bind(guest.created_at.as_microsecond())
            .bind(guest.check_in.to_string())
            .bind(guest.check_out.to_string())
            .bind(&guest.notes)
            .bind(guest.apartment_id.map(|a| a.to_string()))
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<Guest>> {
        const SQL: &str = "\
SELECT id, full_name, email, phone_number, address, passport_image,
       created_at, check_in, check_out, notes, apartment_id
FROM guests
WHERE id = ?;
";

        let record: Option<GuestRecord> = sqlx::query_as(SQL)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        record.map(Guest::try_from).transpose()
    }

    /// All guests, most recently created first.
    pub async fn list(&self) -> Result<Vec<Guest>> {
        const SQL: &str = "\
SELECT id, full_name, email, phone_number, address, passport_image,
       created_at, check_in, check_out, notes, apartment_id
FROM guests
ORDER BY created_at DESC, rowid DESC;
";

        let records: Vec<GuestRecord> = sqlx::query_as(SQL).fetch_all(&self.pool).await?;
        records.into_iter().map(Guest::try_from).collect()
    }

    /// Ids starting with `prefix`, at most `limit` of them.
    pub async fn ids_with_prefix(&self, prefix: &str, limit: i64) -> Result<Vec<Uuid>> {
        let ids: Vec<(String,)> = sqlx::query_as("SELECT id FROM guests WHERE id LIKE ? LIMIT ?;")
            .bind(format!("{}%", prefix.to_lowercase()))
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        ids.iter().map(|(id,)| parse_uuid(KIND, id)).collect()
    }

    pub async fn update_notes(&self, id: Uuid, notes: &str) -> Result<bool> {
        let result = sqlx::query("UPDATE guests SET notes = ? WHERE id = ?;")
            .bind(notes)
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn set_passport(&self, id: Uuid, image: Option<&[u8]>) -> Result<bool> {
        let result = sqlx::query("UPDATE guests SET passport_image = ? WHERE id = ?;")
            .bind(image)
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Deletes the guest together with its family members in one transaction.
    ///
    /// Returns the number of family members removed, or `None` if the guest
    /// did not exist.
    pub async fn delete(&self, id: Uuid) -> Result<Option<u64>> {
        let id = id.to_string();
        let mut tx = self.pool.begin().await?;

        let members = sqlx::query("DELETE FROM family_members WHERE guest_id = ?;")
            .bind(&id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let guests = sqlx::query("DELETE FROM guests WHERE id = ?;")
            .bind(&id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if guests == 0 {
            tx.rollback().await?;
            return Ok(None);
        }

        tx.commit().await?;
        tracing::debug!(guest = %id, members, "deleted guest with family members");
        Ok(Some(members))
    }
}

#[derive(Debug, sqlx::FromRow)]
struct GuestRecord {
    id: String,
    full_name: String,
    email: String,
    phone_number: String,
    address: String,
    passport_image: Option<Vec<u8>>,
    created_at: i64,
    check_in: String,
    check_out: String,
    notes: String,
    apartment_id: Option<String>,
}

impl TryFrom<GuestRecord> for Guest {
    type Error = Error;

    fn try_from(record: GuestRecord) -> Result<Self> {
        Ok(Guest {
            id: parse_uuid(KIND, &record.id)?,
            full_name: record.full_name,
            email: record.email,
            phone_number: record.phone_number,
            address: record.address,
            passport_image: record.passport_image,
            created_at: Timestamp::from_microsecond(record.created_at)
                .map_err(|e| Error::corrupted(KIND, e))?,
            check_in: parse_datetime(&record.check_in)?,
            check_out: parse_datetime(&record.check_out)?,
            notes: record.notes,
            apartment_id: record
                .apartment_id
                .as_deref()
                .map(|a| parse_uuid(KIND, a))
                .transpose()?,
            family_members: Vec::new(),
        })
    }
}

fn parse_datetime(s: &str) -> Result<DateTime> {
    s.parse()
        .map_err(|e| Error::corrupted(KIND, format!("bad datetime `{s}`: {e}")))
}
