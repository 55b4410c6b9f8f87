// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field-level attribute parsing.
//!
//! This module turns one struct field into a [`PropertyElement`] and delegates
//! to specialized submodules:
//!
//! - [`storage`] — marker attributes (`id`, `version`, `transient`, ...)
//! - [`relation`] — `#[relation(kind = "...")]`
//! - [`jpa`] — external `#[jpa(...)]` annotations
//!
//! # Architecture
//!
//! ```text
//! field.rs (coordinator)
//! ├── storage.rs  - Marker attributes
//! ├── relation.rs - Relationship kind
//! └── jpa.rs      - JPA-style annotations (mapped later)
//! ```

mod jpa;
mod relation;
mod storage;

pub use jpa::parse_jpa_attr;
use persist_core::{AnnotationMapperRegistry, AnnotationValue, PropertyElement};
pub use relation::RelationConfig;
pub use storage::StorageConfig;
use syn::{Field, Ident, Type, ext::IdentExt};

use crate::utils::{docs::extract_doc_comments, types::type_name};

/// Field definition with all parsed attributes.
///
/// # Example
///
/// ```rust,ignore
/// #[id]                                  // StorageConfig::is_id = true
/// #[generated]                           // StorageConfig::is_generated = true
/// pub id: i64,
///
/// #[relation(kind = "embedded")]         // RelationConfig
/// pub address: Address,
///
/// #[jpa(version)]                        // external, mapped to persist::Version
/// pub revision: i32,
/// ```
#[derive(Debug)]
pub struct FieldDef {
    /// Field identifier (e.g., `id`, `name`).
    pub ident: Ident,

    /// Field type (e.g., `i64`, `Option<String>`).
    pub ty: Type,

    /// Marker attributes.
    pub storage: StorageConfig,

    /// Relation attribute, if any.
    pub relation: Option<RelationConfig>,

    /// External annotations from `#[jpa(...)]`, not yet mapped.
    pub jpa: Vec<AnnotationValue>,

    /// Documentation comment from the field.
    pub doc: Option<String>
}

impl FieldDef {
    /// Parse field definition from syn's `Field`.
    ///
    /// All attribute errors on the field are reported together.
    ///
    /// # Errors
    ///
    /// - Tuple struct field (no identifier)
    /// - Marker attribute with arguments
    /// - Invalid `#[relation(...)]` or `#[jpa(...)]`
    pub fn from_field(field: &Field, registry: &AnnotationMapperRegistry) -> darling::Result<Self> {
        let ident = field.ident.clone().ok_or_else(|| {
            darling::Error::custom("Persistent fields must be named").with_span(field)
        })?;

        let mut errors = darling::Error::accumulator();
        let mut storage = StorageConfig::default();
        let mut relation = None;
        let mut jpa = Vec::new();

        for attr in &field.attrs {
            if errors.handle(storage.apply(attr)).unwrap_or(true) {
                continue;
            }
            if attr.path().is_ident("relation") {
                if relation.is_some() {
                    errors.push(
                        darling::Error::custom("duplicate #[relation] attribute").with_span(attr)
                    );
                    continue;
                }
                relation = errors.handle(RelationConfig::from_attr(attr));
            } else if attr.path().is_ident("jpa") {
                jpa.extend(errors.handle(parse_jpa_attr(attr, registry)).unwrap_or_default());
            }
        }

        errors.finish_with(Self {
            ident,
            ty: field.ty.clone(),
            storage,
            relation,
            jpa,
            doc: extract_doc_comments(&field.attrs)
        })
    }

    /// Get the field name as a string, without the `r#` prefix.
    #[must_use]
    pub fn name_str(&self) -> String {
        self.ident.unraw().to_string()
    }

    /// Source element for this field, before annotation mapping.
    ///
    /// Annotation order: markers, relation, then `#[jpa(...)]` entries.
    #[must_use]
    pub fn element(&self) -> PropertyElement {
        let mut element = PropertyElement::new(self.name_str(), type_name(&self.ty));
        if self.storage.is_read_only {
            element = element.read_only();
        }
        if let Some(doc) = &self.doc {
            element = element.doc(doc);
        }
        let annotations = self
            .storage
            .annotations()
            .into_iter()
            .chain(self.relation.map(|r| r.annotation()))
            .chain(self.jpa.iter().cloned());
        annotations.fold(element, PropertyElement::annotation)
    }
}
