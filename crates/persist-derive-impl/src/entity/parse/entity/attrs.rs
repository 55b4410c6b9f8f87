// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Entity-level attribute parsing with darling.
//!
//! | Attribute | Required | Default | Description |
//! |-----------|----------|---------|-------------|
//! | `name` | No | struct name | Entity name reported by `PersistentEntity::name()` |

use darling::FromDeriveInput;
use syn::{Generics, Ident};

/// Entity-level attributes parsed from `#[persist(...)]`.
///
/// The input shape is checked by [`EntityDef`](super::EntityDef), which
/// reports non-struct and tuple inputs at the type name.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Persistent)]
/// #[persist(name = "users")]
/// pub struct User { /* ... */ }
/// ```
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(persist))]
pub struct EntityAttrs {
    /// Struct identifier (e.g., `User`).
    pub ident: Ident,

    /// Struct generics, forwarded to the generated impls.
    pub generics: Generics,

    /// Entity name override.
    #[darling(default)]
    pub name: Option<String>
}
