// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Errors raised while interpreting persistence metadata.
//!
//! The classifier in [`PersistentEntity::from_class`](crate::PersistentEntity::from_class)
//! never fails; these errors come from the strict entry points, from parsing
//! annotation members and from deserializing descriptors.

/// Metadata interpretation error.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum MetadataError {
    /// A `persist::Relation` kind that is not a [`RelationKind`](crate::RelationKind).
    #[error("unknown relation kind `{0}`, expected one of: one_to_one, one_to_many, many_to_one, many_to_many, embedded")]
    UnknownRelationKind(String),

    /// More than one version property on one entity.
    #[error("entity `{entity}` declares more than one version property: `{first}` and `{second}`")]
    DuplicateVersion {
        /// Entity name.
        entity: String,
        /// Version property seen first.
        first:  String,
        /// Version property seen second.
        second: String
    },

    /// A deserialized descriptor holding a property in a list its kind does
    /// not belong to, e.g. a version property among the identity.
    #[error("entity `{entity}`: property `{property}` does not belong in `{bucket}`")]
    MisplacedProperty {
        /// Entity name.
        entity:   String,
        /// Offending property.
        property: String,
        /// List the property was found in.
        bucket:   &'static str
    }
}
