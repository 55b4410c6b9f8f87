// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Shared utilities for attribute parsing.
//!
//! # Submodules
//!
//! - [`docs`] — Doc comment extraction
//! - [`types`] — Readable type names from `syn::Type`

pub mod docs;
pub mod types;
