// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Source element model.
//!
//! [`ClassElement`] and [`PropertyElement`] describe a type as it was written:
//! names, declared types and the annotations attached to each element. The
//! derive macro builds these from a struct definition; tests and tools can
//! build them by hand.
//!
//! ```rust
//! use persist_core::{ClassElement, PropertyElement, Stereotype};
//!
//! let class = ClassElement::new("User")
//!     .property(PropertyElement::new("id", "i64").stereotype(Stereotype::Id))
//!     .property(PropertyElement::new("name", "String"));
//!
//! assert_eq!(class.properties().len(), 2);
//! ```

use crate::{
    annotation::{AnnotationMetadata, AnnotationValue},
    mapper::AnnotationMapperRegistry,
    stereotype::Stereotype
};

/// A single declared property.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertyElement {
    name:        String,
    type_name:   String,
    read_only:   bool,
    doc:         Option<String>,
    annotations: AnnotationMetadata
}

impl PropertyElement {
    /// Property with the given name and declared type.
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name:        name.into(),
            type_name:   type_name.into(),
            read_only:   false,
            doc:         None,
            annotations: AnnotationMetadata::empty()
        }
    }

    /// Mark the property read-only.
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Attach a documentation string.
    #[must_use]
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Attach an annotation.
    #[must_use]
    pub fn annotation(mut self, annotation: AnnotationValue) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Attach an internal stereotype annotation without members.
    #[must_use]
    pub fn stereotype(self, stereotype: Stereotype) -> Self {
        self.annotation(AnnotationValue::of(stereotype))
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

    /// Check whether the property cannot be written.
    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Documentation string, if any.
    #[must_use]
    pub fn documentation(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    /// Annotations attached to the property.
    #[must_use]
    pub fn annotation_metadata(&self) -> &AnnotationMetadata {
        &self.annotations
    }

    /// Check for an internal stereotype.
    #[must_use]
    pub fn has_stereotype(&self, stereotype: Stereotype) -> bool {
        self.annotations.has_stereotype(stereotype)
    }

    /// Copy of this property with every annotation passed through `registry`.
    #[must_use]
    pub fn mapped(&self, registry: &AnnotationMapperRegistry) -> Self {
        Self {
            annotations: registry.map_metadata(&self.annotations),
            ..self.clone()
        }
    }
}

/// A declared type and its properties, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassElement {
    name:        String,
    annotations: AnnotationMetadata,
    properties:  Vec<PropertyElement>
}

impl ClassElement {
    /// Class with the given name and no properties.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name:        name.into(),
            annotations: AnnotationMetadata::empty(),
            properties:  Vec::new()
        }
    }

    /// Append a property.
    #[must_use]
    pub fn property(mut self, property: PropertyElement) -> Self {
        self.properties.push(property);
        self
    }

    /// Attach a class-level annotation.
    #[must_use]
    pub fn annotation(mut self, annotation: AnnotationValue) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Class name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Class-level annotations.
    #[must_use]
    pub fn annotation_metadata(&self) -> &AnnotationMetadata {
        &self.annotations
    }

    /// Properties in declaration order.
    #[must_use]
    pub fn properties(&self) -> &[PropertyElement] {
        &self.properties
    }

    /// Copy of this class with every annotation, on the class and on each
    /// property, passed through `registry`.
    #[must_use]
    pub fn mapped(&self, registry: &AnnotationMapperRegistry) -> Self {
        Self {
            name:        self.name.clone(),
            annotations: registry.map_metadata(&self.annotations),
            properties:  self
                .properties
                .iter()
                .map(|p| p.mapped(registry))
                .collect()
        }
    }
}
