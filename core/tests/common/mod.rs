// SPDX-FileCopyrightText: 2025-2026 Rentcal Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - Test data factories (fixtures)
//! - Temporary directory management with auto-cleanup

mod fixtures;
mod temp_dir;

#[allow(unused_imports)]
pub use fixtures::{
    TestConfigBuilder, test_apartment_draft, test_family_member_draft, test_guest_draft,
};
pub use temp_dir::setup_temp_dirs;
