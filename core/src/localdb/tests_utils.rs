// SPDX-FileCopyrightText: 2025-2026 Rentcal Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Shared fixtures for the store unit tests.

use jiff::Timestamp;
use jiff::civil::DateTime;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::localdb::LocalDb;
use crate::{Apartment, FamilyMember, Guest, Relationship};

/// Opens a fresh in-memory database with migrations applied.
pub async fn setup_test_db() -> LocalDb {
    LocalDb::open(None)
        .await
        .expect("Failed to create test database")
}

pub fn test_apartment(title: &str) -> Apartment {
    Apartment {
        id: Uuid::new_v4(),
        title: title.to_string(),
        address: format!("{title} Street 1"),
        price_per_night: Decimal::from(100),
        details: String::new(),
        image_name: "house".to_string(),
        max_guests: 4,
    }
}

pub fn test_guest(
    full_name: &str,
    apartment_id: Option<Uuid>,
    check_in: DateTime,
    check_out: DateTime,
) -> Guest {
    Guest {
        id: Uuid::new_v4(),
        full_name: full_name.to_string(),
        email: "guest@example.com".to_string(),
        phone_number: "+49 30 123456".to_string(),
        address: "Somewhere 5".to_string(),
        passport_image: None,
        // whole seconds so the stored microseconds round-trip exactly
        created_at: Timestamp::from_second(1_717_200_000).expect("valid timestamp"),
        check_in,
        check_out,
        notes: String::new(),
        apartment_id,
        family_members: Vec::new(),
    }
}

pub fn test_family_member(full_name: &str, guest_id: Uuid, relationship: Relationship) -> FamilyMember {
    FamilyMember {
        id: Uuid::new_v4(),
        full_name: full_name.to_string(),
        email: String::new(),
        phone_number: String::new(),
        relationship,
        passport_image: None,
        guest_id: Some(guest_id),
    }
}
