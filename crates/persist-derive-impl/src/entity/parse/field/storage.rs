// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Marker attributes that classify a field.
//!
//! ```rust,ignore
//! #[id]
//! #[generated]
//! pub id: i64,
//!
//! #[version]
//! pub version: i32,
//!
//! #[transient]
//! pub cached_total: i64,
//!
//! #[read_only]
//! pub created_by: String,
//! ```

use persist_core::{AnnotationValue, Stereotype};
use syn::Attribute;

/// Marker attributes found on one field.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// Primary key part (`#[id]`).
    pub is_id: bool,

    /// Optimistic-concurrency version (`#[version]`).
    pub is_version: bool,

    /// Not persisted (`#[transient]`).
    pub is_transient: bool,

    /// Cannot be written (`#[read_only]`). Excluded like `#[transient]`.
    pub is_read_only: bool,

    /// Assigned by the datastore (`#[generated]`).
    pub is_generated: bool,

    /// Exempt from null checks (`#[nullable]`).
    pub is_nullable: bool
}

impl StorageConfig {
    /// Record one marker attribute.
    ///
    /// Returns `Ok(false)` when the attribute is not a marker.
    ///
    /// # Errors
    ///
    /// Returns error if a marker is given arguments, e.g. `#[id(auto)]`.
    pub fn apply(&mut self, attr: &Attribute) -> darling::Result<bool> {
        let slot = if attr.path().is_ident("id") {
            &mut self.is_id
        } else if attr.path().is_ident("version") {
            &mut self.is_version
        } else if attr.path().is_ident("transient") {
            &mut self.is_transient
        } else if attr.path().is_ident("read_only") {
            &mut self.is_read_only
        } else if attr.path().is_ident("generated") {
            &mut self.is_generated
        } else if attr.path().is_ident("nullable") {
            &mut self.is_nullable
        } else {
            return Ok(false);
        };
        attr.meta.require_path_only()?;
        *slot = true;
        Ok(true)
    }

    /// Internal annotations for the markers, in a fixed order.
    ///
    /// `#[read_only]` has no annotation; it is a property of the element.
    pub fn annotations(&self) -> Vec<AnnotationValue> {
        [
            (self.is_id, Stereotype::Id),
            (self.is_version, Stereotype::Version),
            (self.is_transient, Stereotype::Transient),
            (self.is_generated, Stereotype::GeneratedValue),
            (self.is_nullable, Stereotype::Nullable)
        ]
        .into_iter()
        .filter(|(set, _)| *set)
        .map(|(_, stereotype)| AnnotationValue::of(stereotype))
        .collect()
    }
}
