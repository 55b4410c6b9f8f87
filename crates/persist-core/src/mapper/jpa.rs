// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! JPA-style annotation mappers.
//!
//! | External | Internal |
//! |----------|----------|
//! | `jpa::GeneratedValue` | `persist::GeneratedValue`, `persist::Nullable` |
//! | `jpa::Id` | `persist::Id` |
//! | `jpa::Version` | `persist::Version` |
//! | `jpa::Transient` | `persist::Transient` |
//! | `jpa::Embedded` | `persist::Relation(kind = "embedded")` |
//! | `jpa::OneToOne` etc. | `persist::Relation(kind = "one_to_one")` etc. |

use super::NamedAnnotationMapper;
use crate::{
    annotation::AnnotationValue,
    relation::RelationKind,
    stereotype::{RELATION_KIND_MEMBER, Stereotype}
};

/// Fully qualified names of the supported external annotations.
pub mod names {
    /// `jpa::GeneratedValue`
    pub const GENERATED_VALUE: &str = "jpa::GeneratedValue";
    /// `jpa::Id`
    pub const ID: &str = "jpa::Id";
    /// `jpa::Version`
    pub const VERSION: &str = "jpa::Version";
    /// `jpa::Transient`
    pub const TRANSIENT: &str = "jpa::Transient";
    /// `jpa::Embedded`
    pub const EMBEDDED: &str = "jpa::Embedded";
    /// `jpa::OneToOne`
    pub const ONE_TO_ONE: &str = "jpa::OneToOne";
    /// `jpa::OneToMany`
    pub const ONE_TO_MANY: &str = "jpa::OneToMany";
    /// `jpa::ManyToOne`
    pub const MANY_TO_ONE: &str = "jpa::ManyToOne";
    /// `jpa::ManyToMany`
    pub const MANY_TO_MANY: &str = "jpa::ManyToMany";
}

/// Maps `jpa::GeneratedValue` to the internal generated-value marker.
///
/// Generated properties also get `persist::Nullable`, so they are excluded
/// from null checks before the datastore assigns them. Members of the input
/// (`strategy`, `generator`) are not read.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeneratedValueMapper;

impl NamedAnnotationMapper for GeneratedValueMapper {
    fn name(&self) -> &str {
        names::GENERATED_VALUE
    }

    fn map(&self, _annotation: &AnnotationValue) -> Vec<AnnotationValue> {
        vec![
            AnnotationValue::of(Stereotype::GeneratedValue),
            AnnotationValue::of(Stereotype::Nullable)
        ]
    }
}

/// Maps a marker annotation one-to-one onto a stereotype.
#[derive(Debug, Clone, Copy)]
pub struct StereotypeMapper {
    name:   &'static str,
    target: Stereotype
}

impl StereotypeMapper {
    /// Create a mapper from `name` to `target`.
    #[must_use]
    pub const fn new(name: &'static str, target: Stereotype) -> Self {
        Self {
            name,
            target
        }
    }
}

impl NamedAnnotationMapper for StereotypeMapper {
    fn name(&self) -> &str {
        self.name
    }

    fn map(&self, _annotation: &AnnotationValue) -> Vec<AnnotationValue> {
        vec![AnnotationValue::of(self.target)]
    }
}

/// Maps a relationship annotation onto `persist::Relation(kind = ...)`.
#[derive(Debug, Clone, Copy)]
pub struct RelationMapper {
    name: &'static str,
    kind: RelationKind
}

impl RelationMapper {
    /// Create a mapper from `name` to a relation of `kind`.
    #[must_use]
    pub const fn new(name: &'static str, kind: RelationKind) -> Self {
        Self {
            name,
            kind
        }
    }
}

impl NamedAnnotationMapper for RelationMapper {
    fn name(&self) -> &str {
        self.name
    }

    fn map(&self, _annotation: &AnnotationValue) -> Vec<AnnotationValue> {
        vec![
            AnnotationValue::builder(Stereotype::Relation.annotation_name())
                .member(RELATION_KIND_MEMBER, self.kind.as_str())
                .build()
        ]
    }
}

/// Every JPA mapper shipped with the crate.
#[must_use]
pub fn jpa_mappers() -> Vec<Box<dyn NamedAnnotationMapper>> {
    vec![
        Box::new(GeneratedValueMapper),
        Box::new(StereotypeMapper::new(names::ID, Stereotype::Id)),
        Box::new(StereotypeMapper::new(names::VERSION, Stereotype::Version)),
        Box::new(StereotypeMapper::new(names::TRANSIENT, Stereotype::Transient)),
        Box::new(RelationMapper::new(names::EMBEDDED, RelationKind::Embedded)),
        Box::new(RelationMapper::new(names::ONE_TO_ONE, RelationKind::OneToOne)),
        Box::new(RelationMapper::new(names::ONE_TO_MANY, RelationKind::OneToMany)),
        Box::new(RelationMapper::new(names::MANY_TO_ONE, RelationKind::ManyToOne)),
        Box::new(RelationMapper::new(names::MANY_TO_MANY, RelationKind::ManyToMany))
    ]
}
