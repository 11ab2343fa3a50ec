// SPDX-FileCopyrightText: 2025-2026 Rentcal Developers
//
// SPDX-License-Identifier: Apache-2.0

mod apartments;
mod family_members;
mod guests;

#[cfg(test)]
pub(crate) mod tests_utils;

use std::collections::HashMap;
use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use uuid::Uuid;

use crate::error::{Error, RecordKind, Result};
use crate::localdb::apartments::Apartments;
use crate::localdb::family_members::FamilyMembers;
use crate::localdb::guests::Guests;
use crate::{FamilyMember, Guest};

/// SQLite backed record store for apartments, guests and family members.
#[derive(Debug, Clone)]
pub struct LocalDb {
    pool: SqlitePool,

    pub apartments: Apartments,
    pub guests: Guests,
    pub family_members: FamilyMembers,
}

impl LocalDb {
    /// Opens a sqlite database connection.
    /// If `filename` is `None`, it opens an in-memory database.
    pub async fn open(filename: Option<&Path>) -> Result<Self> {
        let (options, pool_options) = if let Some(filename) = filename {
            tracing::info!(path = %filename.display(), "connecting to SQLite database");
            let options = SqliteConnectOptions::new()
                .filename(filename)
                .create_if_missing(true)
                .foreign_keys(true);
            (options, SqlitePoolOptions::new())
        } else {
            tracing::info!("connecting to in-memory SQLite database");
            // every connection would see its own empty database, so keep exactly one alive
            let options = SqliteConnectOptions::new().in_memory(true).foreign_keys(true);
            let pool_options = SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
            (options, pool_options)
        };

        let pool = pool_options.connect_with(options).await?;

        sqlx::migrate!("src/localdb/migrations") // relative path from the crate root
            .run(&pool)
            .await?;

        tracing::debug!("database ready");
        Ok(LocalDb {
            apartments: Apartments::new(pool.clone()),
            guests: Guests::new(pool.clone()),
            family_members: FamilyMembers::new(pool.clone()),
            pool,
        })
    }

    /// Fetches one guest with its family members.
    pub async fn guest(&self, id: Uuid) -> Result<Option<Guest>> {
        let Some(mut guest) = self.guests.get(id).await? else {
            return Ok(None);
        };
        guest.family_members = self.family_members.list_by_guest(id).await?;
        Ok(Some(guest))
    }

    /// Fetches every guest with its family members, newest first.
    pub async fn guests_with_family(&self) -> Result<Vec<Guest>> {
        let mut guests = self.guests.list().await?;

        let mut by_guest: HashMap<Uuid, Vec<FamilyMember>> = HashMap::new();
        for member in self.family_members.list().await? {
            if let Some(guest_id) = member.guest_id {
                by_guest.entry(guest_id).or_default().push(member);
            }
        }

        for guest in &mut guests {
            if let Some(members) = by_guest.remove(&guest.id) {
                guest.family_members = members;
            }
        }
        Ok(guests)
    }

    pub async fn close(self) -> Result<()> {
        tracing::debug!("closing database connection");
        self.pool.close().await;
        Ok(())
    }
}

pub(crate) fn parse_uuid(kind: RecordKind, s: &str) -> Result<Uuid> {
    Uuid::parse_str(s).map_err(|e| Error::corrupted(kind, format!("bad id `{s}`: {e}")))
}
