// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Annotation rewriting.
//!
//! A [`NamedAnnotationMapper`] targets one external annotation by its fully
//! qualified name and rewrites each occurrence into internal
//! [`Stereotype`](crate::Stereotype) annotations. The
//! [`AnnotationMapperRegistry`] dispatches by name and leaves unmatched
//! annotations untouched.
//!
//! # Module Structure
//!
//! ```text
//! mapper/
//! ├── jpa.rs      — JPA-style mappers (GeneratedValue, Id, Version, ...)
//! └── registry.rs — Name-keyed dispatch over a set of mappers
//! ```
//!
//! # Example
//!
//! ```rust
//! use persist_core::{AnnotationValue, NamedAnnotationMapper, mapper::GeneratedValueMapper};
//!
//! let mapper = GeneratedValueMapper;
//! let jpa = AnnotationValue::builder(mapper.name())
//!     .member("strategy", "identity")
//!     .build();
//!
//! let mapped = mapper.map(&jpa);
//! assert_eq!(mapped.len(), 2);
//! assert_eq!(mapped[0].name(), "persist::GeneratedValue");
//! assert_eq!(mapped[1].name(), "persist::Nullable");
//! ```

mod jpa;
mod registry;

pub use jpa::{
    GeneratedValueMapper, RelationMapper, StereotypeMapper, jpa_mappers, names as jpa_names
};
pub use registry::AnnotationMapperRegistry;

use crate::annotation::AnnotationValue;

/// Rewrites one external annotation into internal annotations.
pub trait NamedAnnotationMapper: Send + Sync {
    /// Fully qualified name of the external annotation this mapper targets.
    fn name(&self) -> &str;

    /// Produce the internal annotations equivalent to `annotation`.
    ///
    /// Only called for annotations whose name equals [`name`](Self::name).
    fn map(&self, annotation: &AnnotationValue) -> Vec<AnnotationValue>;
}
