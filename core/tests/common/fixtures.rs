// SPDX-FileCopyrightText: 2025-2026 Rentcal Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use std::path::{Path, PathBuf};

use jiff::civil::Date;
use rentcal_core::{ApartmentDraft, Config, FamilyMemberDraft, GuestDraft, WeekStart};
use uuid::Uuid;

/// Creates an apartment draft with the given title and sensible defaults.
#[must_use]
pub fn test_apartment_draft(title: &str) -> ApartmentDraft {
    ApartmentDraft {
        title: title.to_string(),
        address: "Musterstraße 1".to_string(),
        price_per_night: "150".to_string(),
        details: String::new(),
        image_name: None,
        max_guests: "4".to_string(),
    }
}

/// Creates a guest draft staying at `apartment_id` from `check_in` until
/// `check_out`, arriving in the afternoon and leaving in the morning.
#[must_use]
pub fn test_guest_draft(
    name: &str,
    apartment_id: Uuid,
    check_in: Date,
    check_out: Date,
) -> GuestDraft {
    let mut draft = GuestDraft::new(check_in.at(15, 0, 0, 0));
    draft.full_name = name.to_string();
    draft.email = "guest@example.com".to_string();
    draft.phone_number = "+49 30 123456".to_string();
    draft.address = "Hauptstraße 5".to_string();
    draft.check_out = Some(check_out.at(10, 0, 0, 0));
    draft.apartment_id = Some(apartment_id);
    draft
}

/// Creates a family member draft for the given guest.
#[must_use]
pub fn test_family_member_draft(name: &str, guest_id: Uuid, relationship: &str) -> FamilyMemberDraft {
    let mut draft = FamilyMemberDraft::new(guest_id);
    draft.full_name = name.to_string();
    draft.email = "family@example.com".to_string();
    draft.phone_number = "+49 30 654321".to_string();
    draft.relationship = relationship.to_string();
    draft
}

/// Builder for creating test configurations with guaranteed temporary directories.
///
/// This builder ensures that `state_dir` is always provided, preventing tests
/// from accidentally creating files in the user's real state directory.
#[must_use]
pub struct TestConfigBuilder {
    state_dir: Option<PathBuf>,
    week_start: WeekStart,
    seed_examples: bool,
}

#[allow(dead_code)]
impl TestConfigBuilder {
    /// Creates a new builder. Seeding is off so tests start from an empty store.
    pub fn new() -> Self {
        Self {
            state_dir: None,
            week_start: WeekStart::Sunday,
            seed_examples: false,
        }
    }

    pub fn with_state_dir(mut self, path: &Path) -> Self {
        self.state_dir = Some(path.to_path_buf());
        self
    }

    pub fn with_week_start(mut self, week_start: WeekStart) -> Self {
        self.week_start = week_start;
        self
    }

    pub fn with_seed_examples(mut self, seed: bool) -> Self {
        self.seed_examples = seed;
        self
    }

    /// Builds the configuration.
    ///
    /// # Panics
    ///
    /// Panics if no state directory was set.
    pub fn build(self) -> Config {
        Config {
            state_dir: Some(
                self.state_dir
                    .expect("state_dir must be set so tests never touch the real state"),
            ),
            week_start: self.week_start,
            seed_examples: self.seed_examples,
        }
    }
}
