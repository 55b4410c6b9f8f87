// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! # persist-derive
//!
//! One crate, all features. Re-exports:
//! - [`Persistent`](macro@Persistent) derive macro from `persist-derive-impl`
//! - All types from `persist-core` ([`PersistentEntity`],
//!   [`AnnotationMapperRegistry`], [`ClassElement`], ...)
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use persist_derive::{Persistent, PersistentEntity};
//!
//! #[derive(Persistent)]
//! pub struct Customer {
//!     #[jpa(id, generated_value)]
//!     pub id: i64,
//!     #[version]
//!     pub version: i32,
//!     #[relation(kind = "embedded")]
//!     pub address: Address,
//!     #[relation(kind = "one_to_many")]
//!     pub orders: Vec<Order>,
//!     #[transient]
//!     pub cached_score: f64,
//! }
//!
//! let entity: &PersistentEntity = Customer::persistent_entity();
//! assert_eq!(entity.associations().len(), 2);
//! assert_eq!(entity.embedded()[0].name(), "address");
//! ```
//!
//! The generated code refers to `::persist_core`, so depend on both crates or
//! add `persist-core` alongside this one.

pub use persist_core::*;
pub use persist_derive_impl::Persistent;
