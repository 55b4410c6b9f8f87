// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Annotation values and per-element annotation metadata.
//!
//! An [`AnnotationValue`] is one occurrence of a named annotation, e.g.
//! `jpa::GeneratedValue(strategy = "identity")`. The annotations attached to a
//! single element are collected in [`AnnotationMetadata`], which preserves
//! declaration order.
//!
//! # Example
//!
//! ```rust
//! use persist_core::{AnnotationMetadata, AnnotationValue, Stereotype};
//!
//! let relation = AnnotationValue::builder("persist::Relation")
//!     .member("kind", "embedded")
//!     .build();
//! let metadata = AnnotationMetadata::from(vec![relation]);
//!
//! assert!(metadata.has_stereotype(Stereotype::Relation));
//! assert_eq!(metadata.value("persist::Relation", "kind"), Some("embedded"));
//! ```

use std::fmt;

use crate::stereotype::Stereotype;

/// A single annotation occurrence.
///
/// Members keep the order in which they were written. Values are stored as
/// strings; typed interpretation (e.g. [`RelationKind`](crate::RelationKind))
/// happens at the call site.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnotationValue {
    name:    String,
    members: Vec<(String, String)>
}

impl AnnotationValue {
    /// Create an annotation without members.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name:    name.into(),
            members: Vec::new()
        }
    }

    /// Start building an annotation with the given fully qualified name.
    pub fn builder(name: impl Into<String>) -> AnnotationValueBuilder {
        AnnotationValueBuilder {
            value: Self::new(name)
        }
    }

    /// Annotation for an internal stereotype, without members.
    #[must_use]
    pub fn of(stereotype: Stereotype) -> Self {
        Self::new(stereotype.annotation_name())
    }

    /// Fully qualified annotation name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value of a member, if present.
    #[must_use]
    pub fn get(&self, member: &str) -> Option<&str> {
        self.members
            .iter()
            .find(|(key, _)| key == member)
            .map(|(_, value)| value.as_str())
    }

    /// All members in declaration order.
    #[must_use]
    pub fn members(&self) -> &[(String, String)] {
        &self.members
    }

    /// Check whether the annotation carries no members.
    #[must_use]
    pub fn is_marker(&self) -> bool {
        self.members.is_empty()
    }

    /// The internal stereotype this annotation represents, if any.
    #[must_use]
    pub fn stereotype(&self) -> Option<Stereotype> {
        Stereotype::from_annotation_name(&self.name)
    }
}

impl fmt::Display for AnnotationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if self.members.is_empty() {
            return Ok(());
        }
        let members = self
            .members
            .iter()
            .map(|(key, value)| format!("{key} = {value:?}"))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "({members})")
    }
}

/// Builder for [`AnnotationValue`].
#[derive(Debug, Clone)]
pub struct AnnotationValueBuilder {
    value: AnnotationValue
}

impl AnnotationValueBuilder {
    /// Set a member. Setting the same member twice keeps the latest value.
    #[must_use]
    pub fn member(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.value.members.iter_mut().find(|(key, _)| *key == name) {
            Some(slot) => slot.1 = value,
            None => self.value.members.push((name, value))
        }
        self
    }

    /// Finish the annotation.
    #[must_use]
    pub fn build(self) -> AnnotationValue {
        self.value
    }
}

/// Ordered annotations attached to one element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AnnotationMetadata {
    annotations: Vec<AnnotationValue>
}

impl AnnotationMetadata {
    /// Metadata without annotations.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            annotations: Vec::new()
        }
    }

    /// Append an annotation.
    pub fn push(&mut self, annotation: AnnotationValue) {
        self.annotations.push(annotation);
    }

    /// All annotations in declaration order.
    #[must_use]
    pub fn annotations(&self) -> &[AnnotationValue] {
        &self.annotations
    }

    /// Check whether no annotations are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    /// First annotation with the given name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&AnnotationValue> {
        self.annotations.iter().find(|a| a.name() == name)
    }

    /// Check for an annotation by exact name.
    #[must_use]
    pub fn has_annotation(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Check for an internal stereotype.
    #[must_use]
    pub fn has_stereotype(&self, stereotype: Stereotype) -> bool {
        self.has_annotation(stereotype.annotation_name())
    }

    /// Member value of the first annotation with the given name.
    #[must_use]
    pub fn value(&self, name: &str, member: &str) -> Option<&str> {
        self.find(name).and_then(|a| a.get(member))
    }

    /// Member value of an internal stereotype annotation.
    #[must_use]
    pub fn stereotype_value(&self, stereotype: Stereotype, member: &str) -> Option<&str> {
        self.value(stereotype.annotation_name(), member)
    }
}

impl From<Vec<AnnotationValue>> for AnnotationMetadata {
    fn from(annotations: Vec<AnnotationValue>) -> Self {
        Self {
            annotations
        }
    }
}

impl FromIterator<AnnotationValue> for AnnotationMetadata {
    fn from_iter<I: IntoIterator<Item = AnnotationValue>>(iter: I) -> Self {
        Self {
            annotations: iter.into_iter().collect()
        }
    }
}

impl<'a> IntoIterator for &'a AnnotationMetadata {
    type Item = &'a AnnotationValue;
    type IntoIter = std::slice::Iter<'a, AnnotationValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.annotations.iter()
    }
}
