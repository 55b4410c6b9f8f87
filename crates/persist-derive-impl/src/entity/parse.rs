// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Attribute parsing for the Persistent derive macro.
//!
//! Entity-level attributes (`#[persist(name = "...")]`) are parsed with
//! [`darling`]. Field-level attributes are marker-style (`#[id]`,
//! `#[version]`) or small lists (`#[relation(kind = "...")]`, `#[jpa(...)]`)
//! and are parsed by hand.
//!
//! # Architecture
//!
//! ```text
//! parse.rs (coordinator)
//! ├── entity/   - EntityDef: fields → ClassElement → PersistentEntity
//! └── field.rs  - FieldDef: one field → PropertyElement
//!     ├── storage.rs  - id, version, transient, read_only, generated, nullable
//!     ├── relation.rs - relation(kind = "...")
//!     └── jpa.rs      - jpa(...)
//! ```
//!
//! # Data Structures
//!
//! ```text
//! EntityDef
//! ├── ident: Ident               (struct name, e.g., "User")
//! ├── generics: Generics
//! ├── class: ClassElement        (mapped source model)
//! └── entity: PersistentEntity   (classified once at compile time)
//! ```

mod entity;
mod field;

pub use entity::EntityDef;
