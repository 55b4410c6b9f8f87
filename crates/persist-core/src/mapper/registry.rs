// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Name-keyed dispatch over annotation mappers.

use std::fmt;

use super::{NamedAnnotationMapper, jpa::jpa_mappers};
use crate::annotation::{AnnotationMetadata, AnnotationValue};

/// Set of mappers, at most one per external annotation name.
///
/// # Example
///
/// ```rust
/// use persist_core::{AnnotationMapperRegistry, AnnotationValue};
///
/// let registry = AnnotationMapperRegistry::jpa();
///
/// let mapped = registry.map(&AnnotationValue::new("jpa::Id"));
/// assert_eq!(mapped[0].name(), "persist::Id");
///
/// // Unknown annotations pass through.
/// let column = AnnotationValue::new("jpa::Column");
/// assert_eq!(registry.map(&column), vec![column]);
/// ```
pub struct AnnotationMapperRegistry {
    mappers: Vec<Box<dyn NamedAnnotationMapper>>
}

impl AnnotationMapperRegistry {
    /// Registry without mappers; every annotation passes through.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            mappers: Vec::new()
        }
    }

    /// Registry with every JPA mapper.
    #[must_use]
    pub fn jpa() -> Self {
        jpa_mappers()
            .into_iter()
            .fold(Self::empty(), |registry, mapper| registry.with_boxed(mapper))
    }

    /// Add a mapper, replacing any mapper registered for the same name.
    #[must_use]
    pub fn with_mapper<M: NamedAnnotationMapper + 'static>(self, mapper: M) -> Self {
        self.with_boxed(Box::new(mapper))
    }

    /// Boxed form of [`with_mapper`](Self::with_mapper).
    #[must_use]
    pub fn with_boxed(mut self, mapper: Box<dyn NamedAnnotationMapper>) -> Self {
        match self.mappers.iter_mut().find(|m| m.name() == mapper.name()) {
            Some(slot) => *slot = mapper,
            None => self.mappers.push(mapper)
        }
        self
    }

    /// Mapper registered for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn NamedAnnotationMapper> {
        self.mappers
            .iter()
            .find(|m| m.name() == name)
            .map(|m| &**m)
    }

    /// Check whether a mapper targets `name`.
    #[must_use]
    pub fn handles(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of registered mappers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.mappers.len()
    }

    /// Check whether no mappers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mappers.is_empty()
    }

    /// Rewrite one annotation.
    ///
    /// Returns the mapper's output when one targets the annotation's name,
    /// otherwise the annotation itself.
    #[must_use]
    pub fn map(&self, annotation: &AnnotationValue) -> Vec<AnnotationValue> {
        match self.get(annotation.name()) {
            Some(mapper) => {
                let mapped = mapper.map(annotation);
                tracing::trace!(
                    annotation = annotation.name(),
                    produced = mapped.len(),
                    "mapped annotation"
                );
                mapped
            }
            None => vec![annotation.clone()]
        }
    }

    /// Rewrite every annotation on an element.
    ///
    /// Output keeps declaration order. When two annotations end up with the
    /// same name, the first one is kept.
    #[must_use]
    pub fn map_metadata(&self, metadata: &AnnotationMetadata) -> AnnotationMetadata {
        let mut result = AnnotationMetadata::empty();
        for annotation in metadata.annotations().iter().flat_map(|a| self.map(a)) {
            if !result.has_annotation(annotation.name()) {
                result.push(annotation);
            }
        }
        result
    }
}

impl Default for AnnotationMapperRegistry {
    fn default() -> Self {
        Self::jpa()
    }
}

impl fmt::Debug for AnnotationMapperRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.mappers.iter().map(|m| m.name()))
            .finish()
    }
}
