// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! Proc-macro implementation of `#[derive(Persistent)]`.
//!
//! Use the `persist-derive` crate instead; it re-exports this macro together
//! with the runtime types it refers to.
//!
//! # Attribute Quick Reference
//!
//! ## Entity-Level `#[persist(...)]`
//!
//! ```rust,ignore
//! #[derive(Persistent)]
//! #[persist(name = "users")]   // Optional: entity name (default: struct name)
//! pub struct User { /* ... */ }
//! ```
//!
//! ## Field-Level Attributes
//!
//! ```rust,ignore
//! pub struct Order {
//!     #[id]                               // Part of the primary key
//!     #[generated]                        // Assigned by the datastore
//!     pub id: i64,
//!
//!     #[version]                          // Optimistic-concurrency version
//!     pub version: i32,
//!
//!     #[relation(kind = "many_to_one")]   // Association
//!     pub customer: Customer,
//!
//!     #[relation(kind = "embedded")]      // Association stored inline
//!     pub shipping: Address,
//!
//!     #[transient]                        // Not persisted
//!     pub total_cache: i64,
//!
//!     #[read_only]                        // Not writable, not persisted
//!     pub created_by: String,
//!
//!     #[nullable]                         // Exempt from null checks
//!     pub note: String,
//!
//!     #[jpa(one_to_many)]                 // JPA-style, mapped to the above
//!     pub lines: Vec<Line>,
//! }
//! ```
//!
//! # Classification
//!
//! Fields are classified once, at compile time, in declaration order:
//! read-only and transient fields are dropped; `#[id]` fields form the
//! (composite) identity; a `#[version]` field becomes the version; every other
//! field is a regular property. Declaring two version fields is a compile
//! error.

mod entity;
mod utils;

use proc_macro::TokenStream;

/// Derive macro implementing `Persistent` from field attributes.
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `#[id]` | Part of the primary key. Several fields form a composite key. |
/// | `#[version]` | Optimistic-concurrency version. At most one per entity. |
/// | `#[transient]` | Excluded from persistence. |
/// | `#[read_only]` | Not writable; excluded like `#[transient]`. |
/// | `#[generated]` | Value assigned by the datastore. |
/// | `#[nullable]` | Exempt from null checks. `Option<T>` fields are nullable anyway. |
/// | `#[relation(kind = "...")]` | Association: `one_to_one`, `one_to_many`, `many_to_one`, `many_to_many`, `embedded`. |
/// | `#[jpa(...)]` | JPA-style annotations: `id`, `version`, `transient`, `generated_value`, `embedded`, `one_to_one`, `one_to_many`, `many_to_one`, `many_to_many`. |
///
/// `#[jpa(generated_value)]` maps to both `#[generated]` and `#[nullable]`, so
/// generated keys pass null checks before the datastore assigns them.
///
/// # Example
///
/// ```rust,ignore
/// use persist_derive::{Persistent, PersistentEntity};
///
/// #[derive(Persistent)]
/// pub struct Book {
///     #[jpa(id, generated_value(strategy = "identity"))]
///     pub id: i64,
///     #[version]
///     pub version: i32,
///     pub title: String,
/// }
///
/// let entity = Book::persistent_entity();
/// assert_eq!(entity.identity().map(|p| p.name()), Some("id"));
/// assert_eq!(Book::PROPERTIES, &["title"]);
/// ```
#[proc_macro_derive(
    Persistent,
    attributes(persist, id, version, transient, read_only, generated, nullable, relation, jpa)
)]
pub fn derive_persistent(input: TokenStream) -> TokenStream {
    entity::derive(input)
}
