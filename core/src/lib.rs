// SPDX-FileCopyrightText: 2025-2026 Rentcal Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Core of RENTCAL: apartments, guests with their family members, and the
//! monthly occupancy calendar built from them.

mod apartment;
pub mod calendar;
mod config;
mod error;
mod family_member;
mod guest;
mod localdb;
mod rentcal;
mod validate;

pub use crate::apartment::{Apartment, ApartmentDraft, DEFAULT_IMAGE_NAME};
pub use crate::calendar::{CalendarDay, CalendarDays, DayCell, DoubleBooking, build_calendar};
pub use crate::config::{APP_NAME, Config, WeekStart};
pub use crate::error::{Error, RecordKind, Result};
pub use crate::family_member::{FamilyMember, FamilyMemberDraft, Relationship};
pub use crate::guest::{Guest, GuestDraft};
pub use crate::rentcal::{OccupancyMonth, Rentcal};
