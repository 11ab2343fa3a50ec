// SPDX-FileCopyrightText: 2025-2026 Rentcal Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Booking lifecycle workflow tests: apartments, guests and family members
//! from creation to deletion.

use jiff::civil::date;
use rentcal_core::{Error, RecordKind, Relationship, Rentcal};

use crate::common::{
    TestConfigBuilder, setup_temp_dirs, test_apartment_draft, test_family_member_draft,
    test_guest_draft,
};

#[tokio::test]
async fn booking_lifecycle_guest_with_family() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let config = TestConfigBuilder::new()
        .with_state_dir(&temp_dirs.state_dir)
        .build();
    let rentcal = Rentcal::new(config).await.unwrap();
    let loft = rentcal
        .new_apartment(test_apartment_draft("Loft"))
        .await
        .unwrap();

    // Act
    let draft = test_guest_draft("Jane Doe", loft.id, date(2024, 6, 1), date(2024, 6, 5));
    let guest = rentcal.new_guest(draft).await.unwrap();
    let spouse = test_family_member_draft("John Doe", guest.id, "spouse");
    let child = test_family_member_draft("Max Doe", guest.id, "kind");
    rentcal.new_family_member(spouse).await.unwrap();
    rentcal.new_family_member(child).await.unwrap();

    // Assert
    let guest = rentcal.get_guest(guest.id).await.unwrap();
    // afternoon arrival, morning departure
    assert_eq!(guest.number_of_nights(), 3);
    assert_eq!(guest.total_people(), 3);
    let relationships: Vec<_> = guest.family_members.iter().map(|m| m.relationship).collect();
    assert_eq!(relationships, vec![Relationship::Spouse, Relationship::Child]);
    assert_eq!(guest.apartment_in(&[loft.clone()]), Some(&loft));
}

#[tokio::test]
async fn booking_lifecycle_delete_guest_cascades_to_family() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let config = TestConfigBuilder::new()
        .with_state_dir(&temp_dirs.state_dir)
        .build();
    let rentcal = Rentcal::new(config).await.unwrap();
    let loft = rentcal
        .new_apartment(test_apartment_draft("Loft"))
        .await
        .unwrap();
    let draft = test_guest_draft("Jane Doe", loft.id, date(2024, 6, 1), date(2024, 6, 5));
    let jane = rentcal.new_guest(draft).await.unwrap();
    let draft = test_guest_draft("John Roe", loft.id, date(2024, 7, 1), date(2024, 7, 3));
    let john = rentcal.new_guest(draft).await.unwrap();
    for (name, guest) in [("Max Doe", &jane), ("Mia Doe", &jane), ("Ann Roe", &john)] {
        let draft = test_family_member_draft(name, guest.id, "child");
        rentcal.new_family_member(draft).await.unwrap();
    }

    // Act
    let removed = rentcal.delete_guest(jane.id).await.unwrap();

    // Assert
    assert_eq!(removed, 2);
    let members = rentcal.list_family_members().await.unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].guest_id, Some(john.id));
    assert!(matches!(
        rentcal.get_guest(jane.id).await,
        Err(Error::NotFound {
            kind: RecordKind::Guest,
            ..
        })
    ));
}

#[tokio::test]
async fn booking_lifecycle_delete_apartment_keeps_guests() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let config = TestConfigBuilder::new()
        .with_state_dir(&temp_dirs.state_dir)
        .build();
    let rentcal = Rentcal::new(config).await.unwrap();
    let loft = rentcal
        .new_apartment(test_apartment_draft("Loft"))
        .await
        .unwrap();
    let draft = test_guest_draft("Jane Doe", loft.id, date(2024, 6, 1), date(2024, 6, 5));
    let guest = rentcal.new_guest(draft).await.unwrap();

    // Act
    rentcal.delete_apartment(loft.id).await.unwrap();

    // Assert
    let guest = rentcal.get_guest(guest.id).await.unwrap();
    assert_eq!(guest.apartment_id, None);
    let apartments = rentcal.list_apartments().await.unwrap();
    assert_eq!(guest.apartment_in(&apartments), None);
    assert!(matches!(
        rentcal.delete_apartment(loft.id).await,
        Err(Error::NotFound { .. })
    ));
}

#[tokio::test]
async fn booking_lifecycle_guests_listed_newest_first() {
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let config = TestConfigBuilder::new()
        .with_state_dir(&temp_dirs.state_dir)
        .build();
    let rentcal = Rentcal::new(config).await.unwrap();
    let loft = rentcal
        .new_apartment(test_apartment_draft("Loft"))
        .await
        .unwrap();

    for name in ["First", "Second", "Third"] {
        let draft = test_guest_draft(name, loft.id, date(2024, 6, 1), date(2024, 6, 2));
        rentcal.new_guest(draft).await.unwrap();
    }

    let names: Vec<_> = rentcal
        .list_guests()
        .await
        .unwrap()
        .into_iter()
        .map(|g| g.full_name)
        .collect();
    assert_eq!(names, vec!["Third", "Second", "First"]);
}

#[tokio::test]
async fn booking_lifecycle_rejects_invalid_input() {
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let config = TestConfigBuilder::new()
        .with_state_dir(&temp_dirs.state_dir)
        .build();
    let rentcal = Rentcal::new(config).await.unwrap();

    let mut draft = test_apartment_draft("Loft");
    draft.price_per_night = "abc".to_string();
    let err = rentcal.new_apartment(draft).await.unwrap_err();
    assert!(err.is_validation());

    let mut draft = test_apartment_draft("  ");
    draft.max_guests = "0".to_string();
    assert!(rentcal.new_apartment(draft).await.unwrap_err().is_validation());

    let loft = rentcal
        .new_apartment(test_apartment_draft("Loft"))
        .await
        .unwrap();
    let draft = test_guest_draft("Jane Doe", loft.id, date(2024, 6, 5), date(2024, 6, 1));
    assert!(rentcal.new_guest(draft).await.unwrap_err().is_validation());

    let mut draft = test_guest_draft("Jane Doe", loft.id, date(2024, 6, 1), date(2024, 6, 5));
    draft.apartment_id = None;
    assert!(rentcal.new_guest(draft).await.unwrap_err().is_validation());

    assert!(rentcal.list_guests().await.unwrap().is_empty());
}

#[tokio::test]
async fn booking_lifecycle_passport_from_file() {
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let config = TestConfigBuilder::new()
        .with_state_dir(&temp_dirs.state_dir)
        .build();
    let rentcal = Rentcal::new(config).await.unwrap();
    let loft = rentcal
        .new_apartment(test_apartment_draft("Loft"))
        .await
        .unwrap();
    let draft = test_guest_draft("Jane Doe", loft.id, date(2024, 6, 1), date(2024, 6, 5));
    let guest = rentcal.new_guest(draft).await.unwrap();
    let member = test_family_member_draft("Max Doe", guest.id, "child");
    let member = rentcal.new_family_member(member).await.unwrap();

    let path = temp_dirs
        .create_file("scan.jpg", &[0xFF, 0xD8, 0xFF, 0xE0])
        .await
        .unwrap();
    let image = rentcal.load_image(&path).await.unwrap();
    let member = rentcal
        .set_family_member_passport(member.id, Some(image))
        .await
        .unwrap();

    assert!(member.has_passport());
    let guest = rentcal.get_guest(guest.id).await.unwrap();
    assert!(!guest.has_passport());
    assert!(guest.family_members[0].has_passport());
}
