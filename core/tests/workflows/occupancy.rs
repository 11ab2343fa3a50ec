// SPDX-FileCopyrightText: 2025-2026 Rentcal Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Occupancy calendar workflow tests: bookings stored through the facade and
//! laid out as a month grid.

use jiff::civil::date;
use rentcal_core::{CalendarDay, Rentcal};

use crate::common::{TestConfigBuilder, setup_temp_dirs, test_apartment_draft, test_guest_draft};

#[tokio::test]
async fn occupancy_jane_doe_in_the_loft() {
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
    let villa = rentcal
        .new_apartment(test_apartment_draft("Villa"))
        .await
        .unwrap();
    let draft = test_guest_draft("Jane Doe", loft.id, date(2024, 6, 10), date(2024, 6, 13));
    let jane = rentcal.new_guest(draft).await.unwrap();

    // Act
    let month = rentcal
        .occupancy(date(2024, 6, 15), Some(loft.id))
        .await
        .unwrap();
    let cells: Vec<CalendarDay<'_>> = month.days().collect();

    // Assert - June 2024 starts on a Saturday, six leading blanks with Sunday first
    assert_eq!(cells.len(), 36);
    assert!(cells[..6].iter().all(|c| c.as_day().is_none()));

    let day = |d: i8| cells[5 + d as usize].as_day().copied().unwrap();
    assert!(day(10).is_check_in && !day(10).is_check_out);
    assert!(day(11).is_stay && day(12).is_stay);
    assert!(day(13).is_check_out && !day(13).is_check_in);
    assert_eq!(day(11).guest.map(|g| g.id), Some(jane.id));
    assert!(!day(9).is_occupied());
    assert!(!day(14).is_occupied());

    // Same month for the villa is empty
    let month = rentcal
        .occupancy(date(2024, 6, 15), Some(villa.id))
        .await
        .unwrap();
    assert!(month.guests().is_empty());
    assert!(month.days().filter_map(|c| c.as_day().copied()).all(|c| !c.is_occupied()));
}

#[tokio::test]
async fn occupancy_stay_across_month_boundary() {
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let config = TestConfigBuilder::new()
        .with_state_dir(&temp_dirs.state_dir)
        .build();
    let rentcal = Rentcal::new(config).await.unwrap();
    let loft = rentcal
        .new_apartment(test_apartment_draft("Loft"))
        .await
        .unwrap();
    let draft = test_guest_draft("Jane Doe", loft.id, date(2024, 6, 28), date(2024, 7, 2));
    rentcal.new_guest(draft).await.unwrap();

    let july = rentcal
        .occupancy(date(2024, 7, 1), Some(loft.id))
        .await
        .unwrap();
    let days: Vec<_> = july.days().filter_map(|c| c.as_day().copied()).collect();

    assert_eq!(july.guests().len(), 1);
    assert!(days[0].is_stay);
    assert!(days[1].is_check_out);
    assert!(!days[2].is_occupied());
    assert!(days.iter().all(|d| !d.is_check_in));
}

#[tokio::test]
async fn occupancy_reports_double_bookings() {
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let config = TestConfigBuilder::new()
        .with_state_dir(&temp_dirs.state_dir)
        .build();
    let rentcal = Rentcal::new(config).await.unwrap();
    let loft = rentcal
        .new_apartment(test_apartment_draft("Loft"))
        .await
        .unwrap();
    let draft = test_guest_draft("Jane Doe", loft.id, date(2024, 6, 10), date(2024, 6, 13));
    rentcal.new_guest(draft).await.unwrap();
    let draft = test_guest_draft("John Roe", loft.id, date(2024, 6, 12), date(2024, 6, 15));
    rentcal.new_guest(draft).await.unwrap();

    let month = rentcal
        .occupancy(date(2024, 6, 1), Some(loft.id))
        .await
        .unwrap();

    let doubles = month.double_bookings();
    assert_eq!(doubles.len(), 1);
    assert_eq!(doubles[0].from, date(2024, 6, 12));
    assert_eq!(doubles[0].until, date(2024, 6, 13));

    let flagged: Vec<_> = month
        .days()
        .filter_map(|c| c.as_day().copied())
        .filter(|c| c.is_double_booked())
        .map(|c| c.date.day())
        .collect();
    assert_eq!(flagged, vec![12, 13]);
}
