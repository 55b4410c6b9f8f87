// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use persist_core::prelude::*;
//! ```

pub use crate::{
    AnnotationMapperRegistry, AnnotationMetadata, AnnotationValue, Association, ClassElement,
    Embedded, MetadataError, NamedAnnotationMapper, Persistent, PersistentEntity,
    PersistentProperty, PropertyElement, PropertyKind, RelationKind, Stereotype
};
