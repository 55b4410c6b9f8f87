// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Entity-level parsing.
//!
//! [`EntityDef`] combines the darling-parsed `#[persist(...)]` attributes with
//! every field definition, maps the annotations through the JPA registry and
//! classifies the result once, so classification problems surface as compile
//! errors.
//!
//! # Module Structure
//!
//! ```text
//! entity/
//! ├── mod.rs   — EntityDef definition and parsing
//! ├── attrs.rs — EntityAttrs (darling parsing struct)
//! └── tests.rs — parse_quote! driven tests
//! ```

mod attrs;

pub use attrs::EntityAttrs;
use darling::FromDeriveInput;
use persist_core::{AnnotationMapperRegistry, ClassElement, MetadataError, PersistentEntity};
use syn::{DeriveInput, Generics, Ident};

use super::field::FieldDef;

/// Complete parsed entity definition.
#[derive(Debug)]
pub struct EntityDef {
    /// Struct identifier (e.g., `User`).
    pub ident: Ident,

    /// Struct generics.
    pub generics: Generics,

    /// Source model with annotations mapped to internal stereotypes.
    pub class: ClassElement,

    /// Classification of [`class`](Self::class).
    pub entity: PersistentEntity
}

impl EntityDef {
    /// Parse entity definition from syn's `DeriveInput`.
    ///
    /// 1. Parses `#[persist(...)]` using darling
    /// 2. Parses every field (errors are accumulated)
    /// 3. Maps annotations with [`AnnotationMapperRegistry::jpa`]
    /// 4. Classifies the mapped element, rejecting duplicate versions
    ///
    /// # Errors
    ///
    /// - Applied to non-struct (enum, union), tuple struct or unit struct
    /// - Invalid field attributes
    /// - More than one version property
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        let attrs = EntityAttrs::from_derive_input(input)?;
        let registry = AnnotationMapperRegistry::jpa();

        let named = match &input.data {
            syn::Data::Struct(data) => match &data.fields {
                syn::Fields::Named(named) => &named.named,
                _ => {
                    return Err(darling::Error::custom("Persistent requires named fields")
                        .with_span(&input.ident));
                }
            },
            _ => {
                return Err(
                    darling::Error::custom("Persistent can only be derived for structs")
                        .with_span(&input.ident)
                );
            }
        };

        let mut errors = darling::Error::accumulator();
        let fields: Vec<FieldDef> = named
            .iter()
            .filter_map(|field| errors.handle(FieldDef::from_field(field, &registry)))
            .collect();
        errors.finish()?;

        let name = attrs.name.unwrap_or_else(|| attrs.ident.to_string());
        let class = fields
            .iter()
            .fold(ClassElement::new(name), |class, field| class.property(field.element()))
            .mapped(&registry);

        let entity = PersistentEntity::try_from_class(&class)
            .map_err(|err| classification_error(err, &fields, &attrs.ident))?;

        Ok(Self {
            ident: attrs.ident,
            generics: attrs.generics,
            class,
            entity
        })
    }

    /// Entity name reported at runtime.
    #[must_use]
    pub fn name(&self) -> &str {
        self.entity.name()
    }
}

/// Point a classification error at the offending field.
fn classification_error(err: MetadataError, fields: &[FieldDef], ident: &Ident) -> darling::Error {
    let span_field = match &err {
        MetadataError::DuplicateVersion {
            second, ..
        } => fields.iter().find(|f| f.name_str() == *second),
        MetadataError::UnknownRelationKind(_) | MetadataError::MisplacedProperty { .. } => None
    };
    let error = darling::Error::custom(&err);
    match span_field {
        Some(field) => error.with_span(&field.ident),
        None => error.with_span(ident)
    }
}
