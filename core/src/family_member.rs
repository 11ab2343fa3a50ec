// SPDX-FileCopyrightText: 2025-2026 Rentcal Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use crate::error::{Error, Result};
use crate::validate;

/// A person travelling with a guest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyMember {
    /// The unique identifier of the family member.
    pub id: Uuid,

    pub full_name: String,
    pub email: String,
    pub phone_number: String,

    /// How the member relates to the primary guest.
    pub relationship: Relationship,

    /// Raw bytes of the scanned passport, if uploaded.
    pub passport_image: Option<Vec<u8>>,

    /// The owning guest. `None` once the guest is gone.
    pub guest_id: Option<Uuid>,
}

impl FamilyMember {
    /// Whether a passport image has been uploaded.
    pub fn has_passport(&self) -> bool {
        self.passport_image.is_some()
    }
}

/// Relationship of a family member to the primary guest.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relationship {
    Spouse,
    Child,
    Parent,
    Sibling,
    #[default]
    Other,
}

impl Relationship {
    /// All relationships in display order.
    pub const ALL: [Relationship; 5] = [
        Relationship::Spouse,
        Relationship::Child,
        Relationship::Parent,
        Relationship::Sibling,
        Relationship::Other,
    ];

    /// Stable lowercase name used in storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Relationship::Spouse => "spouse",
            Relationship::Child => "child",
            Relationship::Parent => "parent",
            Relationship::Sibling => "sibling",
            Relationship::Other => "other",
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Relationship {
    type Err = Error;

    /// Accepts the English names as well as the German labels used on the
    /// paper booking forms, case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "spouse" | "ehepartner" => Ok(Relationship::Spouse),
            "child" | "kind" => Ok(Relationship::Child),
            "parent" | "elternteil" => Ok(Relationship::Parent),
            "sibling" | "geschwister" => Ok(Relationship::Sibling),
            "other" | "andere" | "family" => Ok(Relationship::Other),
            other => Err(Error::validation(
                "relationship",
                format!("unknown relationship `{other}`"),
            )),
        }
    }
}

/// Raw user input for a new family member.
#[derive(Debug, Clone)]
pub struct FamilyMemberDraft {
    /// The guest the member travels with.
    pub guest_id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub relationship: String,
    pub passport_image: Option<Vec<u8>>,
}

impl FamilyMemberDraft {
    /// Creates an empty draft attached to the given guest.
    pub fn new(guest_id: Uuid) -> Self {
        Self {
            guest_id,
            full_name: String::new(),
            email: String::new(),
            phone_number: String::new(),
            relationship: String::new(),
            passport_image: None,
        }
    }

    /// Checks every field, reporting the first one that fails.
    pub fn validate(&self) -> Result<()> {
        self.to_family_member(Uuid::nil()).map(|_| ())
    }

    pub(crate) fn to_family_member(&self, id: Uuid) -> Result<FamilyMember> {
        let full_name = validate::required("full_name", &self.full_name)?;
        let relationship = validate::required("relationship", &self.relationship)?.parse()?;
        Ok(FamilyMember {
            id,
            full_name,
            email: self.email.trim().to_string(),
            phone_number: self.phone_number.trim().to_string(),
            relationship,
            passport_image: self.passport_image.clone(),
            guest_id: Some(self.guest_id),
        })
    }
}
