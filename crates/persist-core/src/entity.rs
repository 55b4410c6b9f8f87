// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Persistent entity descriptor and the property classifier.
//!
//! [`PersistentEntity::from_class`] scans a [`ClassElement`] once, in
//! declaration order:
//!
//! ```text
//! property
//! ├── read-only or #[transient]  → skipped
//! ├── persist::Id                → composite identity
//! ├── persist::Version           → version slot
//! └── otherwise                  → regular properties
//!     └── persist::Relation      → also an association
//!         └── kind = "embedded"  → also embedded
//! ```
//!
//! Identity is checked before version, so a property carrying both ends up in
//! the identity. Associations and embedded properties are derived once, at
//! construction.
//!
//! # Example
//!
//! ```rust
//! use persist_core::{ClassElement, PersistentEntity, PropertyElement, Stereotype};
//!
//! let class = ClassElement::new("Book")
//!     .property(PropertyElement::new("id", "i64").stereotype(Stereotype::Id))
//!     .property(PropertyElement::new("version", "i32").stereotype(Stereotype::Version))
//!     .property(PropertyElement::new("title", "String"));
//!
//! let entity = PersistentEntity::from_class(&class);
//! assert_eq!(entity.identity().map(|p| p.name()), Some("id"));
//! assert_eq!(entity.version().map(|p| p.name()), Some("version"));
//! assert_eq!(entity.persistent_property_names(), vec!["title"]);
//! ```

#[cfg(test)]
mod tests;

use crate::{
    annotation::AnnotationMetadata,
    element::{ClassElement, PropertyElement},
    error::MetadataError,
    property::{Association, Embedded, PersistentProperty, PropertyKind},
    relation::RelationKind,
    stereotype::{RELATION_KIND_MEMBER, Stereotype}
};

/// Descriptor of one persistable type.
///
/// Immutable once built.
///
/// With the `serde` feature, deserialization reads the name, annotations,
/// identity, version and regular properties, checks that each property sits in
/// the list its kind belongs to, and rebuilds associations and embedded
/// properties from the regular ones. Serialized `associations` and `embedded`
/// lists are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "EntityParts"))]
pub struct PersistentEntity {
    name:         String,
    annotations:  AnnotationMetadata,
    identity:     Vec<PersistentProperty>,
    version:      Option<PersistentProperty>,
    properties:   Vec<PersistentProperty>,
    associations: Vec<Association>,
    embedded:     Vec<Embedded>
}

/// Result of a single scan, before the duplicate-version policy is applied.
struct Scan {
    entity:            PersistentEntity,
    duplicate_version: Option<(String, String)>
}

impl PersistentEntity {
    /// Classify the properties of `class`.
    ///
    /// Never fails. When several properties carry `persist::Version`, the last
    /// one wins and a warning is logged; use
    /// [`try_from_class`](Self::try_from_class) to reject that instead.
    #[must_use]
    pub fn from_class(class: &ClassElement) -> Self {
        let scan = scan(class);
        if let Some((first, second)) = &scan.duplicate_version {
            tracing::warn!(
                entity = class.name(),
                first = first.as_str(),
                second = second.as_str(),
                "multiple version properties, keeping the last one"
            );
        }
        scan.entity
    }

    /// Classify the properties of `class`, rejecting more than one version
    /// property.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::DuplicateVersion`] naming the first two version
    /// properties found.
    pub fn try_from_class(class: &ClassElement) -> Result<Self, MetadataError> {
        let scan = scan(class);
        match scan.duplicate_version {
            Some((first, second)) => Err(MetadataError::DuplicateVersion {
                entity: class.name().to_string(),
                first,
                second
            }),
            None => Ok(scan.entity)
        }
    }

    /// Build a descriptor from classified buckets, deriving associations and
    /// embedded properties from the regular ones.
    fn assemble(
        name: String,
        annotations: AnnotationMetadata,
        identity: Vec<PersistentProperty>,
        version: Option<PersistentProperty>,
        properties: Vec<PersistentProperty>
    ) -> Self {
        let associations: Vec<Association> = properties
            .iter()
            .filter_map(Association::from_property)
            .collect();
        let embedded: Vec<Embedded> = associations
            .iter()
            .filter_map(Embedded::from_association)
            .collect();
        Self {
            name,
            annotations,
            identity,
            version,
            properties,
            associations,
            embedded
        }
    }

    /// Entity name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Class-level annotations.
    #[must_use]
    pub fn annotation_metadata(&self) -> &AnnotationMetadata {
        &self.annotations
    }

    /// All identity properties in declaration order. Empty when the entity has
    /// no identity.
    #[must_use]
    pub fn composite_identity(&self) -> &[PersistentProperty] {
        &self.identity
    }

    /// Primary identity: the first identity property.
    #[must_use]
    pub fn identity(&self) -> Option<&PersistentProperty> {
        self.identity.first()
    }

    /// Version property.
    #[must_use]
    pub fn version(&self) -> Option<&PersistentProperty> {
        self.version.as_ref()
    }

    /// Regular properties in declaration order.
    ///
    /// Excludes identity, version, read-only and transient properties.
    #[must_use]
    pub fn persistent_properties(&self) -> &[PersistentProperty] {
        &self.properties
    }

    /// Names of the regular properties in declaration order.
    #[must_use]
    pub fn persistent_property_names(&self) -> Vec<&str> {
        self.properties.iter().map(PersistentProperty::name).collect()
    }

    /// Regular properties that reference another entity.
    #[must_use]
    pub fn associations(&self) -> &[Association] {
        &self.associations
    }

    /// Associations stored inline.
    #[must_use]
    pub fn embedded(&self) -> &[Embedded] {
        &self.embedded
    }

    /// Regular property by name.
    ///
    /// Returns `None` for an empty name and for every name outside the
    /// regular properties, including identity and version properties.
    #[must_use]
    pub fn property_by_name(&self, name: &str) -> Option<&PersistentProperty> {
        if name.is_empty() {
            return None;
        }
        self.properties.iter().find(|p| p.name() == name)
    }

    /// Check whether this entity owns `owner`'s side of a relationship.
    ///
    /// Source entities always own their relationships.
    #[must_use]
    pub fn is_owning_entity(&self, _owner: &PersistentEntity) -> bool {
        true
    }

    /// Parent entity in an inheritance hierarchy. Source entities have none.
    #[must_use]
    pub fn parent_entity(&self) -> Option<&PersistentEntity> {
        None
    }
}

fn scan(class: &ClassElement) -> Scan {
    let mut identity = Vec::with_capacity(2);
    let mut version: Option<PersistentProperty> = None;
    let mut duplicate_version = None;
    let mut properties = Vec::with_capacity(class.properties().len());

    for element in class.properties() {
        if element.is_read_only() || element.has_stereotype(Stereotype::Transient) {
            tracing::trace!(
                entity = class.name(),
                property = element.name(),
                read_only = element.is_read_only(),
                "skipping property"
            );
            continue;
        }

        if element.has_stereotype(Stereotype::Id) {
            identity.push(PersistentProperty::new(element, PropertyKind::Identity));
        } else if element.has_stereotype(Stereotype::Version) {
            let next = PersistentProperty::new(element, PropertyKind::Version);
            if let Some(previous) = version.replace(next)
                && duplicate_version.is_none()
            {
                duplicate_version = Some((previous.name().to_string(), element.name().to_string()));
            }
        } else {
            properties.push(PersistentProperty::new(element, regular_kind(class, element)));
        }
    }

    let entity = PersistentEntity::assemble(
        class.name().to_string(),
        class.annotation_metadata().clone(),
        identity,
        version,
        properties
    );

    tracing::debug!(
        entity = entity.name(),
        identity = entity.identity.len(),
        version = entity.version.is_some(),
        properties = entity.properties.len(),
        associations = entity.associations.len(),
        embedded = entity.embedded.len(),
        "classified persistent entity"
    );

    Scan {
        entity,
        duplicate_version
    }
}

fn regular_kind(class: &ClassElement, element: &PropertyElement) -> PropertyKind {
    if !element.has_stereotype(Stereotype::Relation) {
        return PropertyKind::Basic;
    }
    let kind = element
        .annotation_metadata()
        .stereotype_value(Stereotype::Relation, RELATION_KIND_MEMBER)
        .and_then(|raw| match raw.parse::<RelationKind>() {
            Ok(kind) => Some(kind),
            Err(err) => {
                tracing::warn!(
                    entity = class.name(),
                    property = element.name(),
                    error = %err,
                    "ignoring relation kind"
                );
                None
            }
        });
    PropertyKind::Association(kind)
}

/// Serialized form of the classified buckets.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct EntityParts {
    name:        String,
    #[serde(default)]
    annotations: AnnotationMetadata,
    #[serde(default)]
    identity:    Vec<PersistentProperty>,
    #[serde(default)]
    version:     Option<PersistentProperty>,
    #[serde(default)]
    properties:  Vec<PersistentProperty>
}

#[cfg(feature = "serde")]
impl TryFrom<EntityParts> for PersistentEntity {
    type Error = MetadataError;

    fn try_from(parts: EntityParts) -> Result<Self, Self::Error> {
        let misplaced = parts
            .identity
            .iter()
            .find(|p| !p.is_identity())
            .map(|p| (p, "identity"))
            .or_else(|| {
                parts
                    .version
                    .iter()
                    .find(|p| !p.is_version())
                    .map(|p| (p, "version"))
            })
            .or_else(|| {
                parts
                    .properties
                    .iter()
                    .find(|p| p.is_identity() || p.is_version())
                    .map(|p| (p, "properties"))
            });
        if let Some((property, bucket)) = misplaced {
            return Err(MetadataError::MisplacedProperty {
                entity: parts.name.clone(),
                property: property.name().to_string(),
                bucket
            });
        }
        Ok(Self::assemble(
            parts.name,
            parts.annotations,
            parts.identity,
            parts.version,
            parts.properties
        ))
    }
}
