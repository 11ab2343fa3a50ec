// SPDX-FileCopyrightText: 2025-2026 Rentcal Developers
//
// SPDX-License-Identifier: Apache-2.0

use sqlx::SqlitePool;
use uuid::Uuid;

use crate::FamilyMember;
use crate::error::{Error, RecordKind, Result};
use crate::localdb::parse_uuid;

const KIND: RecordKind = RecordKind::FamilyMember;

// The back-reference is read through a join so that a member whose guest row
// is gone reports no guest instead of a dangling id.
const SELECT: &str = "\
SELECT f.id, f.full_name, f.email, f.phone_number, f.relationship, f.passport_image,
       g.id AS guest_id
FROM family_members f
LEFT JOIN guests g ON g.id = f.guest_id
";

#[derive(Debug, Clone)]
pub struct FamilyMembers {
    pool: SqlitePool,
}

impl FamilyMembers {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, member: &FamilyMember) -> Result<()> {
        const SQL: &str = "\
INSERT INTO family_members (id, full_name, email, phone_number, relationship, passport_image, guest_id)
VALUES (?, ?, ?, ?, ?, ?, ?);
";

        sqlx::query(SQL)
            .bind(member.id.to_string())
            .bind(&member.full_name)
            .bind(&member.email)
            .bind(&member.phone_number)
            .bind(member.relationship.as_str())
            .bind(member.passport_image.as_deref())
            .bind(member.guest_id.map(|a| a.to_string()))
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<FamilyMember>> {
        let sql = format!("{SELECT} WHERE f.id = ?;");
        let record: Option<FamilyMemberRecord> = sqlx::query_as(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        record.map(FamilyMember::try_from).transpose()
    }

    /// All family members ordered by name.
    pub async fn list(&self) -> Result<Vec<FamilyMember>> {
        let sql = format!("{SELECT} ORDER BY f.full_name ASC, f.id ASC;");
        let records: Vec<FamilyMemberRecord> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;
        records.into_iter().map(FamilyMember::try_from).collect()
    }

    /// Family members of one guest ordered by name.
    pub async fn list_by_guest(&self, guest_id: Uuid) -> Result<Vec<FamilyMember>> {
        let sql = format!("{SELECT} WHERE f.guest_id = ? ORDER BY f.full_name ASC, f.id ASC;");
        let records: Vec<FamilyMemberRecord> = sqlx::query_as(&sql)
            .bind(guest_id.to_string())
            .fetch_all(&self.pool)
            .await?;
        records.into_iter().map(FamilyMember::try_from).collect()
    }

    /// Ids starting with `prefix`, at most `limit` of them.
    pub async fn ids_with_prefix(&self, prefix: &str, limit: i64) -> Result<Vec<Uuid>> {
        let ids: Vec<(String,)> =
            sqlx::query_as("SELECT id FROM family_members WHERE id LIKE ? LIMIT ?;")
                .bind(format!("{}%", prefix.to_lowercase()))
                .bind(limit)
                .fetch_all(&self.pool)
                .await?;

        ids.iter().map(|(id,)| parse_uuid(KIND, id)).collect()
    }

    pub async fn set_passport(&self, id: Uuid, image: Option<&[u8]>) -> Result<bool> {
        let result = sqlx::query("UPDATE family_members SET passport_image = ? WHERE id = ?;")
            .bind(image)
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM family_members WHERE id = ?;")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[derive(Debug, sqlx::FromRow)]
struct FamilyMemberRecord {
    id: String,
    full_name: String,
    email: String,
    phone_number: String,
    relationship: String,
    passport_image: Option<Vec<u8>>,
    guest_id: Option<String>,
}

impl TryFrom<FamilyMemberRecord> for FamilyMember {
    type Error = Error;

    fn try_from(record: FamilyMemberRecord) -> Result<Self> {
        Ok(FamilyMember {
            id: parse_uuid(KIND, &record.id)?,
            full_name: record.full_name,
            email: record.email,
            phone_number: record.phone_number,
            relationship: record
                .relationship
                .parse()
                .map_err(|e| Error::corrupted(KIND, e))?,
            passport_image: record.passport_image,
            guest_id: record
                .guest_id
                .as_deref()
                .map(|a| parse_uuid(KIND, a))
                .transpose()?,
        })
    }
}
