// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `Persistent` impl generation.
//!
//! The descriptor is classified lazily at runtime from the emitted element
//! model and cached in a `OnceLock`. The compile-time classification is
//! exported as inherent constants so callers can match on property names
//! without touching the descriptor.
//!
//! # Generated Code
//!
//! ```rust,ignore
//! impl ::persist_core::Persistent for User {
//!     fn class_element() -> ::persist_core::ClassElement { /* ... */ }
//!
//!     fn persistent_entity() -> &'static ::persist_core::PersistentEntity {
//!         static ENTITY: OnceLock<PersistentEntity> = OnceLock::new();
//!         ENTITY.get_or_init(|| PersistentEntity::from_class(&Self::class_element()))
//!     }
//! }
//!
//! impl User {
//!     pub const ENTITY_NAME: &'static str = "User";
//!     pub const IDENTITY: &'static [&'static str] = &["id"];
//!     pub const VERSION: Option<&'static str> = Some("version");
//!     pub const PROPERTIES: &'static [&'static str] = &["name"];
//! }
//! ```

use persist_core::PersistentProperty;
use proc_macro2::TokenStream;
use quote::quote;

use super::{element::class_tokens, parse::EntityDef};

/// Generate the `Persistent` impl and metadata constants.
pub fn generate(entity: &EntityDef) -> TokenStream {
    let ident = &entity.ident;
    let (impl_generics, ty_generics, where_clause) = entity.generics.split_for_impl();
    let class = class_tokens(&entity.class);

    let name = entity.name();
    let identity = entity
        .entity
        .composite_identity()
        .iter()
        .map(PersistentProperty::name);
    let version = match entity.entity.version() {
        Some(version) => {
            let version = version.name();
            quote!(::core::option::Option::Some(#version))
        }
        None => quote!(::core::option::Option::None)
    };
    let properties = entity.entity.persistent_property_names();

    let constants_doc = format!("Persistence metadata of `{name}`, resolved at compile time.");

    quote! {
        #[automatically_derived]
        impl #impl_generics ::persist_core::Persistent for #ident #ty_generics #where_clause {
            fn class_element() -> ::persist_core::ClassElement {
                #class
            }

            fn persistent_entity() -> &'static ::persist_core::PersistentEntity {
                static ENTITY: ::std::sync::OnceLock<::persist_core::PersistentEntity> =
                    ::std::sync::OnceLock::new();
                ENTITY.get_or_init(|| {
                    ::persist_core::PersistentEntity::from_class(
                        &<Self as ::persist_core::Persistent>::class_element()
                    )
                })
            }
        }

        #[doc = #constants_doc]
        impl #impl_generics #ident #ty_generics #where_clause {
            /// Entity name.
            pub const ENTITY_NAME: &'static str = #name;

            /// Identity property names, in declaration order.
            pub const IDENTITY: &'static [&'static str] = &[#(#identity),*];

            /// Version property name.
            pub const VERSION: ::core::option::Option<&'static str> = #version;

            /// Regular property names, in declaration order.
            pub const PROPERTIES: &'static [&'static str] = &[#(#properties),*];
        }
    }
}
