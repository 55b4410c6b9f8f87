// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Readable type names.
//!
//! `quote!(#ty).to_string()` spaces out every token (`Option < String >`).
//! The element model stores the type as a developer would write it.

use quote::ToTokens;
use syn::Type;

const TIGHTEN: [(&str, &str); 8] = [
    (" < ", "<"),
    ("< ", "<"),
    (" <", "<"),
    (" >", ">"),
    (" :: ", "::"),
    (":: ", "::"),
    (" ,", ","),
    ("& ", "&")
];

/// Render a type without token spacing.
pub fn type_name(ty: &Type) -> String {
    let mut name = ty.to_token_stream().to_string();
    for (from, to) in TIGHTEN {
        while name.contains(from) {
            name = name.replace(from, to);
        }
    }
    name
}
