// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Relation kinds carried by `persist::Relation(kind = "...")`.

use std::{fmt, str::FromStr};

use crate::error::MetadataError;

/// Kind of relationship between two entities.
///
/// Written in snake case inside annotations:
///
/// ```rust
/// use persist_core::RelationKind;
///
/// let kind: RelationKind = "many_to_one".parse().unwrap();
/// assert_eq!(kind, RelationKind::ManyToOne);
/// assert_eq!(RelationKind::Embedded.as_str(), "embedded");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RelationKind {
    /// One-to-one reference.
    OneToOne,
    /// One-to-many collection.
    OneToMany,
    /// Many-to-one reference.
    ManyToOne,
    /// Many-to-many collection.
    ManyToMany,
    /// Data stored inline in the owning entity.
    Embedded
}

impl RelationKind {
    /// Snake-case name used in annotation members.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneToOne => "one_to_one",
            Self::OneToMany => "one_to_many",
            Self::ManyToOne => "many_to_one",
            Self::ManyToMany => "many_to_many",
            Self::Embedded => "embedded"
        }
    }

    /// Check if the related data is stored inline.
    #[must_use]
    pub const fn is_embedded(self) -> bool {
        matches!(self, Self::Embedded)
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RelationKind {
    type Err = MetadataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "one_to_one" => Ok(Self::OneToOne),
            "one_to_many" => Ok(Self::OneToMany),
            "many_to_one" => Ok(Self::ManyToOne),
            "many_to_many" => Ok(Self::ManyToMany),
            "embedded" => Ok(Self::Embedded),
            other => Err(MetadataError::UnknownRelationKind(other.to_string()))
        }
    }
}
