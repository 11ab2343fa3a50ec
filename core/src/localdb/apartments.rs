// SPDX-FileCopyrightText: 2025-2026 Rentcal Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::str::FromStr;

use rust_decimal::Decimal;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::Apartment;
use crate::error::{Error, RecordKind, Result};
use crate::localdb::parse_uuid;

#[derive(Debug, Clone)]
pub struct Apartments {
    pool: SqlitePool,
}

impl Apartments {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, apartment: &Apartment) -> Result<()> {
        const SQL: &str = "\
INSERT INTO apartments (id, title, address, price_per_night, details, image_name, max_guests)
VALUES (?, ?, ?, ?, ?, ?, ?);
";

        sqlx::query(SQL)
            .bind(apartment.id.to_string())
            .bind(&apartment.title)
            .bind(&apartment.address)
            .bind(apartment.price_per_night.to_string())
            .bind(&apartment.details)
            .bind(&apartment.image_name)
            .bind(i64::from(apartment.max_guests))
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<Apartment>> {
        const SQL: &str = "\
SELECT id, title, address, price_per_night, details, image_name, max_guests
FROM apartments
WHERE id = ?;
";

        let record: Option<ApartmentRecord> = sqlx::query_as(SQL)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        record.map(Apartment::try_from).transpose()
    }

    /// All apartments ordered by title.
    pub async fn list(&self) -> Result<Vec<Apartment>> {
        const SQL: &str = "\
SELECT id, title, address, price_per_night, details, image_name, max_guests
FROM apartments
ORDER BY title ASC, id ASC;
";

        let records: Vec<ApartmentRecord> = sqlx::query_as(SQL).fetch_all(&self.pool).await?;
        records.into_iter().map(Apartment::try_from).collect()
    }

    /// Ids starting with `prefix`, at most `limit` of them.
    pub async fn ids_with_prefix(&self, prefix: &str, limit: i64) -> Result<Vec<Uuid>> {
        let ids: Vec<(String,)> = sqlx::query_as("SELECT id FROM apartments WHERE id LIKE ? LIMIT ?;")
            .bind(format!("{}%", prefix.to_lowercase()))
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        ids.iter()
            .map(|(id,)| parse_uuid(RecordKind::Apartment, id))
            .collect()
    }

    pub async fn count(&self) -> Result<i64> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM apartments;")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.0)
    }

    /// Deletes the apartment. Guests referencing it keep existing without an
    /// apartment. Returns `false` if there was nothing to delete.
    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM apartments WHERE id = ?;")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ApartmentRecord {
    id: String,
    title: String,
    address: String,
    price_per_night: String,
    details: String,
    image_name: String,
    max_guests: i64,
}

impl TryFrom<ApartmentRecord> for Apartment {
    type Error = Error;

    fn try_from(record: ApartmentRecord) -> Result<Self> {
        const KIND: RecordKind = RecordKind::Apartment;
        Ok(Apartment {
            id: parse_uuid(KIND, &record.id)?,
            title: record.title,
            address: record.address,
            price_per_night: Decimal::from_str(&record.price_per_night)
                .map_err(|e| Error::corrupted(KIND, e))?,
            details: record.details,
            image_name: record.image_name,
            max_guests: u32::try_from(record.max_guests).map_err(|e| Error::corrupted(KIND, e))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::localdb::tests_utils::{setup_test_db, test_apartment};

    #[tokio::test]
    async fn apartments_insert_and_get() {
        // Arrange
        let db = setup_test_db().await;
        let apartment = test_apartment("Loft");

        // Act
        db.apartments.insert(&apartment).await.unwrap();

        // Assert
        let retrieved = db
            .apartments
            .get(apartment.id)
            .await
            .unwrap()
            .expect("Apartment not found");
        assert_eq!(retrieved, apartment);
    }

    #[tokio::test]
    async fn apartments_get_returns_none_for_missing_id() {
        let db = setup_test_db().await;
        let retrieved = db.apartments.get(Uuid::new_v4()).await.unwrap();
        assert!(retrieved.is_none());
    }

    #[tokio::test]
    async fn apartments_list_orders_by_title() {
        // Arrange
        let db = setup_test_db().await;
        for title in ["Villa", "Attic", "Loft"] {
            db.apartments.insert(&test_apartment(title)).await.unwrap();
        }

        // Act
        let list = db.apartments.list().await.unwrap();

        // Assert
        let titles: Vec<_> = list.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["Attic", "Loft", "Villa"]);
        assert_eq!(db.apartments.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn apartments_preserve_decimal_price() {
        let db = setup_test_db().await;
        let mut apartment = test_apartment("Loft");
        apartment.price_per_night = Decimal::new(8990, 2);
        db.apartments.insert(&apartment).await.unwrap();

        let retrieved = db.apartments.get(apartment.id).await.unwrap().unwrap();
        assert_eq!(retrieved.price_per_night, Decimal::new(8990, 2));
    }

    #[tokio::test]
    async fn apartments_delete_reports_existence() {
        let db = setup_test_db().await;
        let apartment = test_apartment("Loft");
        db.apartments.insert(&apartment).await.unwrap();

        assert!(db.apartments.delete(apartment.id).await.unwrap());
        assert!(!db.apartments.delete(apartment.id).await.unwrap());
        assert!(db.apartments.get(apartment.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn apartments_find_ids_by_prefix() {
        let db = setup_test_db().await;
        let apartment = test_apartment("Loft");
        db.apartments.insert(&apartment).await.unwrap();

        let prefix = &apartment.id.to_string()[..8];
        let ids = db.apartments.ids_with_prefix(prefix, 2).await.unwrap();
        assert_eq!(ids, vec![apartment.id]);
    }
}
