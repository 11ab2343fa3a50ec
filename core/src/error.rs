// SPDX-FileCopyrightText: 2025-2026 Rentcal Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use thiserror::Error;

/// Errors returned by the rentcal core.
///
/// The calendar builder never fails; everything here comes from user input,
/// the record store or the filesystem.
#[derive(Debug, Error)]
pub enum Error {
    /// User-entered value failed to validate. Blocks the save action.
    #[error("invalid {field}: {message}")]
    Validation {
        /// Name of the offending field, e.g. `price_per_night`.
        field: &'static str,
        /// Human readable explanation.
        message: String,
    },

    /// The underlying store failed to read or commit.
    #[error("persistence error: {0}")]
    Persistence(#[from] sqlx::Error),

    /// Embedded migrations could not be applied.
    #[error("failed to run migrations: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A stored row could not be decoded into a record.
    #[error("corrupted {kind} record: {message}")]
    Corrupted { kind: RecordKind, message: String },

    /// No record with the given id.
    #[error("{kind} not found: {id}")]
    NotFound { kind: RecordKind, id: String },

    /// An id prefix matched more than one record.
    #[error("{kind} id prefix is ambiguous: {prefix}")]
    Ambiguous { kind: RecordKind, prefix: String },

    /// Filesystem failure, e.g. reading a passport image.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or unreadable configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Error::Validation {
            field,
            message: message.into(),
        }
    }

    pub(crate) fn corrupted(kind: RecordKind, message: impl fmt::Display) -> Self {
        Error::Corrupted {
            kind,
            message: message.to_string(),
        }
    }

    /// Whether the error was caused by user input rather than the system.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }
}

/// The three record types held by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Apartment,
    Guest,
    FamilyMember,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Apartment => write!(f, "apartment"),
            RecordKind::Guest => write!(f, "guest"),
            RecordKind::FamilyMember => write!(f, "family member"),
        }
    }
}

/// Result type used across the core.
pub type Result<T, E = Error> = std::result::Result<T, E>;
