// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Persistent derive macro implementation.
//!
//! # Architecture
//!
//! ```text
//! entity.rs (orchestrator)
//! │
//! ├── parse/         → Attribute parsing, annotation mapping, classification
//! │
//! ├── element.rs     → Tokens rebuilding the mapped ClassElement
//! └── persistent.rs  → impl Persistent + inherent metadata constants
//! ```
//!
//! # Generated Code
//!
//! For an entity like:
//!
//! ```rust,ignore
//! #[derive(Persistent)]
//! pub struct User {
//!     #[id]
//!     pub id: i64,
//!     #[version]
//!     pub version: i32,
//!     pub name: String,
//! }
//! ```
//!
//! The macro generates:
//!
//! | Item | Purpose |
//! |------|---------|
//! | `impl Persistent for User` | `class_element()` and cached `persistent_entity()` |
//! | `User::ENTITY_NAME` | Entity name |
//! | `User::IDENTITY` | Identity property names, in declaration order |
//! | `User::VERSION` | Version property name, if any |
//! | `User::PROPERTIES` | Regular property names, in declaration order |

mod element;
pub mod parse;
mod persistent;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

use self::parse::EntityDef;

/// Main entry point for the Persistent derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match EntityDef::from_derive_input(&input) {
        Ok(entity) => persistent::generate(&entity).into(),
        Err(err) => err.write_errors().into()
    }
}
