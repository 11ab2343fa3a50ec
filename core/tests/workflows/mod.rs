// SPDX-FileCopyrightText: 2025-2026 Rentcal Developers
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end workflow tests for the rentcal-core crate.
//!
//! These tests drive [`rentcal_core::Rentcal`] against a database file in a
//! temporary state directory.

mod booking_lifecycle;
mod config_driven;
mod occupancy;
