// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core types for persist-derive.
//!
//! This crate holds the metadata model behind `#[derive(Persistent)]`. It can
//! also be used standalone, e.g. by tools that build [`ClassElement`]s from
//! another source.
//!
//! # Overview
//!
//! - [`AnnotationValue`] / [`AnnotationMetadata`] — annotations on an element
//! - [`Stereotype`] — internal classification markers
//! - [`NamedAnnotationMapper`] / [`AnnotationMapperRegistry`] — rewriting
//!   external (JPA-style) annotations into stereotypes
//! - [`ClassElement`] / [`PropertyElement`] — the source model
//! - [`PersistentEntity`] — classified descriptor: identity, version,
//!   properties, associations, embedded
//! - [`Persistent`] — implemented by the derive macro
//!
//! # Pipeline
//!
//! ```text
//! ClassElement ──map──▶ ClassElement (stereotypes) ──classify──▶ PersistentEntity
//! ```
//!
//! ```rust
//! use persist_core::prelude::*;
//!
//! let class = ClassElement::new("Book")
//!     .property(PropertyElement::new("id", "i64").annotation(AnnotationValue::new("jpa::Id")))
//!     .property(PropertyElement::new("title", "String"));
//!
//! let entity = PersistentEntity::from_class(&class.mapped(&AnnotationMapperRegistry::jpa()));
//! assert_eq!(entity.identity().map(|p| p.name()), Some("id"));
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod annotation;
pub mod element;
pub mod entity;
pub mod error;
pub mod mapper;
pub mod prelude;
pub mod property;
pub mod relation;
pub mod stereotype;

pub use annotation::{AnnotationMetadata, AnnotationValue, AnnotationValueBuilder};
pub use element::{ClassElement, PropertyElement};
pub use entity::PersistentEntity;
pub use error::MetadataError;
pub use mapper::{AnnotationMapperRegistry, NamedAnnotationMapper};
pub use property::{Association, Embedded, PersistentProperty, PropertyKind};
pub use relation::RelationKind;
pub use stereotype::Stereotype;

/// A type with persistence metadata.
///
/// Implemented by `#[derive(Persistent)]`, which emits the source model with
/// annotations already mapped and caches the classified descriptor.
///
/// # Example
///
/// ```rust
/// use std::sync::OnceLock;
///
/// use persist_core::{ClassElement, Persistent, PersistentEntity, PropertyElement, Stereotype};
///
/// struct Tag {
///     id: i64
/// }
///
/// impl Persistent for Tag {
///     fn class_element() -> ClassElement {
///         ClassElement::new("Tag")
///             .property(PropertyElement::new("id", "i64").stereotype(Stereotype::Id))
///     }
///
///     fn persistent_entity() -> &'static PersistentEntity {
///         static ENTITY: OnceLock<PersistentEntity> = OnceLock::new();
///         ENTITY.get_or_init(|| PersistentEntity::from_class(&Self::class_element()))
///     }
/// }
///
/// assert_eq!(Tag::persistent_entity().composite_identity().len(), 1);
/// ```
pub trait Persistent {
    /// Source model of the type, with annotations already mapped.
    fn class_element() -> ClassElement;

    /// Classified descriptor, built on first use.
    fn persistent_entity() -> &'static PersistentEntity;
}
