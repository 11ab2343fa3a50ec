// SPDX-FileCopyrightText: 2025-2026 Rentcal Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration-driven behavior workflow tests.

use jiff::civil::{Weekday, date};
use rentcal_core::{Config, Rentcal, WeekStart};

use crate::common::{TestConfigBuilder, setup_temp_dirs, test_apartment_draft};

#[tokio::test]
async fn config_creates_missing_state_dir() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let state_dir = temp_dirs.state_dir.join("nested").join("deeper");

    // Act
    let config = TestConfigBuilder::new().with_state_dir(&state_dir).build();
    let rentcal = Rentcal::new(config).await.unwrap();
    rentcal.close().await.unwrap();

    // Assert
    assert!(state_dir.join("rentcal.db").exists());
}

#[tokio::test]
async fn config_data_survives_restart() {
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let config = TestConfigBuilder::new()
        .with_state_dir(&temp_dirs.state_dir)
        .build();

    let rentcal = Rentcal::new(config.clone()).await.unwrap();
    let loft = rentcal
        .new_apartment(test_apartment_draft("Loft"))
        .await
        .unwrap();
    rentcal.close().await.unwrap();

    let rentcal = Rentcal::new(config).await.unwrap();
    assert_eq!(rentcal.get_apartment(loft.id).await.unwrap(), loft);
}

#[tokio::test]
async fn config_seed_examples_only_on_empty_store() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let config = TestConfigBuilder::new()
        .with_state_dir(&temp_dirs.state_dir)
        .with_seed_examples(true)
        .build();

    // Act
    let rentcal = Rentcal::new(config.clone()).await.unwrap();
    let first = rentcal.list_apartments().await.unwrap();
    rentcal.close().await.unwrap();
    let rentcal = Rentcal::new(config).await.unwrap();
    let second = rentcal.list_apartments().await.unwrap();

    // Assert
    assert_eq!(first.len(), 2);
    assert_eq!(first, second);
    let villa = first.iter().find(|a| a.title == "Strandvilla").unwrap();
    assert_eq!(villa.max_guests, 6);
    assert_eq!(villa.image_name, "villa");
}

#[tokio::test]
async fn config_seed_skipped_when_user_added_apartments() {
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let config = TestConfigBuilder::new()
        .with_state_dir(&temp_dirs.state_dir)
        .build();
    let rentcal = Rentcal::new(config).await.unwrap();
    rentcal
        .new_apartment(test_apartment_draft("Own Flat"))
        .await
        .unwrap();
    rentcal.close().await.unwrap();

    let config = TestConfigBuilder::new()
        .with_state_dir(&temp_dirs.state_dir)
        .with_seed_examples(true)
        .build();
    let rentcal = Rentcal::new(config).await.unwrap();

    let titles: Vec<_> = rentcal
        .list_apartments()
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.title)
        .collect();
    assert_eq!(titles, vec!["Own Flat"]);
}

#[tokio::test]
async fn config_week_start_shifts_padding() {
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let config = TestConfigBuilder::new()
        .with_state_dir(&temp_dirs.state_dir)
        .with_week_start(WeekStart::Monday)
        .build();
    let rentcal = Rentcal::new(config).await.unwrap();
    assert_eq!(rentcal.week_start(), Weekday::Monday);

    // June 2024 starts on a Saturday
    let month = rentcal.occupancy(date(2024, 6, 1), None).await.unwrap();
    let padding = month.days().take_while(|d| d.as_day().is_none()).count();
    assert_eq!(padding, 5);
}

#[tokio::test]
async fn config_relative_state_dir_is_kept() {
    let mut config = Config {
        state_dir: Some("relative/state".into()),
        ..Config::default()
    };
    config.normalize().unwrap();
    assert_eq!(config.state_dir, Some("relative/state".into()));
}
