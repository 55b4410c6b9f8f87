// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Internal classification stereotypes.
//!
//! External annotations (JPA-style) are rewritten into these by the
//! [`mapper`](crate::mapper) layer. The classifier only ever looks at
//! stereotypes, never at external annotation names.
//!
//! | Stereotype | Annotation name |
//! |------------|-----------------|
//! | `Id` | `persist::Id` |
//! | `Version` | `persist::Version` |
//! | `Transient` | `persist::Transient` |
//! | `Relation` | `persist::Relation` |
//! | `GeneratedValue` | `persist::GeneratedValue` |
//! | `Nullable` | `persist::Nullable` |

use std::fmt;

/// Member of `persist::Relation` carrying the [`RelationKind`](crate::RelationKind).
pub const RELATION_KIND_MEMBER: &str = "kind";

/// Closed set of internal stereotypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Stereotype {
    /// Part of the primary key.
    Id,
    /// Optimistic-concurrency version.
    Version,
    /// Not persisted.
    Transient,
    /// Relationship to another entity, with a `kind` member.
    Relation,
    /// Value assigned by the datastore.
    GeneratedValue,
    /// Exempt from null checks.
    Nullable
}

impl Stereotype {
    /// Every stereotype, in table order.
    pub const ALL: [Self; 6] = [
        Self::Id,
        Self::Version,
        Self::Transient,
        Self::Relation,
        Self::GeneratedValue,
        Self::Nullable
    ];

    /// Fully qualified name of the internal annotation.
    #[must_use]
    pub const fn annotation_name(self) -> &'static str {
        match self {
            Self::Id => "persist::Id",
            Self::Version => "persist::Version",
            Self::Transient => "persist::Transient",
            Self::Relation => "persist::Relation",
            Self::GeneratedValue => "persist::GeneratedValue",
            Self::Nullable => "persist::Nullable"
        }
    }

    /// Resolve an internal annotation name.
    #[must_use]
    pub fn from_annotation_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|stereotype| stereotype.annotation_name() == name)
    }
}

impl fmt::Display for Stereotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.annotation_name())
    }
}
