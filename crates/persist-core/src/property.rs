// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Persistent property descriptors.
//!
//! A [`PersistentProperty`] is a classified [`PropertyElement`]: the kind tag
//! is assigned once by the classifier and never recomputed from annotations.
//! [`Association`] and [`Embedded`] narrow a property to the relation kinds.

use std::ops::Deref;

use crate::{
    annotation::AnnotationMetadata,
    element::PropertyElement,
    relation::RelationKind,
    stereotype::Stereotype
};

/// Classification of a persistent property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PropertyKind {
    /// Part of the primary key.
    Identity,
    /// Optimistic-concurrency version.
    Version,
    /// Plain value column.
    Basic,
    /// Relationship to another entity.
    ///
    /// `None` when the relation annotation carries no recognizable kind.
    Association(Option<RelationKind>)
}

/// Descriptor of one persisted property.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersistentProperty {
    name:        String,
    type_name:   String,
    kind:        PropertyKind,
    generated:   bool,
    nullable:    bool,
    doc:         Option<String>,
    annotations: AnnotationMetadata
}

impl PersistentProperty {
    /// Build a descriptor from a source element and its assigned kind.
    #[must_use]
    pub fn new(element: &PropertyElement, kind: PropertyKind) -> Self {
        Self {
            name: element.name().to_string(),
            type_name: element.type_name().to_string(),
            kind,
            generated: element.has_stereotype(Stereotype::GeneratedValue),
            nullable: element.has_stereotype(Stereotype::Nullable)
                || is_option_type(element.type_name()),
            doc: element.documentation().map(str::to_string),
            annotations: element.annotation_metadata().clone()
        }
    }

    /// Property name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared type, as written in the source.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Kind assigned during classification.
    #[must_use]
    pub fn kind(&self) -> PropertyKind {
        self.kind
    }

    /// Check if this property is part of the primary key.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.kind == PropertyKind::Identity
    }

    /// Check if this is the version property.
    #[must_use]
    pub fn is_version(&self) -> bool {
        self.kind == PropertyKind::Version
    }

    /// Check if this property is a relationship.
    #[must_use]
    pub fn is_association(&self) -> bool {
        matches!(self.kind, PropertyKind::Association(_))
    }

    /// Relation kind, for associations.
    #[must_use]
    pub fn relation_kind(&self) -> Option<RelationKind> {
        match self.kind {
            PropertyKind::Association(kind) => kind,
            _ => None
        }
    }

    /// Check if this property is an embedded association.
    #[must_use]
    pub fn is_embedded(&self) -> bool {
        self.relation_kind().is_some_and(RelationKind::is_embedded)
    }

    /// Check if the datastore assigns the value.
    #[must_use]
    pub fn is_generated(&self) -> bool {
        self.generated
    }

    /// Check if the property may hold no value.
    ///
    /// True for `persist::Nullable` properties (which includes every
    /// generated property mapped from `jpa::GeneratedValue`) and for
    /// `Option<..>` types.
    #[must_use]
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Check if a missing value must be rejected before persisting.
    #[must_use]
    pub fn requires_null_check(&self) -> bool {
        !self.nullable
    }

    /// Documentation string, if any.
    #[must_use]
    pub fn documentation(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    /// Annotations attached to the source property.
    #[must_use]
    pub fn annotation_metadata(&self) -> &AnnotationMetadata {
        &self.annotations
    }
}

fn is_option_type(type_name: &str) -> bool {
    let path = type_name.strip_prefix("::").unwrap_or(type_name);
    ["Option<", "std::option::Option<", "core::option::Option<"]
        .iter()
        .any(|prefix| path.starts_with(prefix))
}

/// A property that references another entity.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Association {
    property: PersistentProperty
}

impl Association {
    /// Narrow a property to an association.
    ///
    /// Returns `None` unless the property kind is
    /// [`PropertyKind::Association`].
    #[must_use]
    pub fn from_property(property: &PersistentProperty) -> Option<Self> {
        property.is_association().then(|| Self {
            property: property.clone()
        })
    }

    /// Relation kind, if recognizable.
    #[must_use]
    pub fn kind(&self) -> Option<RelationKind> {
        self.property.relation_kind()
    }

    /// The underlying property.
    #[must_use]
    pub fn property(&self) -> &PersistentProperty {
        &self.property
    }
}

impl Deref for Association {
    type Target = PersistentProperty;

    fn deref(&self) -> &Self::Target {
        &self.property
    }
}

/// An association whose data is stored inline.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Embedded {
    association: Association
}

impl Embedded {
    /// Narrow an association to an embedded one.
    #[must_use]
    pub fn from_association(association: &Association) -> Option<Self> {
        association.is_embedded().then(|| Self {
            association: association.clone()
        })
    }

    /// The underlying association.
    #[must_use]
    pub fn association(&self) -> &Association {
        &self.association
    }
}

impl Deref for Embedded {
    type Target = Association;

    fn deref(&self) -> &Self::Target {
        &self.association
    }
}
