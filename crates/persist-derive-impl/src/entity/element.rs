// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Element model code generation.
//!
//! Emits builder calls that rebuild the mapped [`ClassElement`] at runtime:
//!
//! ```rust,ignore
//! ::persist_core::ClassElement::new("User")
//!     .property(
//!         ::persist_core::PropertyElement::new("id", "i64")
//!             .annotation(::persist_core::AnnotationValue::builder("persist::Id").build())
//!     )
//! ```

use persist_core::{AnnotationValue, ClassElement, PropertyElement};
use proc_macro2::TokenStream;
use quote::quote;

/// Tokens constructing `class`.
pub fn class_tokens(class: &ClassElement) -> TokenStream {
    let name = class.name();
    let annotations = class
        .annotation_metadata()
        .annotations()
        .iter()
        .map(annotation_tokens);
    let properties = class.properties().iter().map(property_tokens);

    quote! {
        ::persist_core::ClassElement::new(#name)
            #(.annotation(#annotations))*
            #(.property(#properties))*
    }
}

fn property_tokens(property: &PropertyElement) -> TokenStream {
    let name = property.name();
    let type_name = property.type_name();
    let read_only = property.is_read_only().then(|| quote!(.read_only()));
    let doc = property.documentation().map(|doc| quote!(.doc(#doc)));
    let annotations = property
        .annotation_metadata()
        .annotations()
        .iter()
        .map(annotation_tokens);

    quote! {
        ::persist_core::PropertyElement::new(#name, #type_name)
            #read_only
            #doc
            #(.annotation(#annotations))*
    }
}

fn annotation_tokens(annotation: &AnnotationValue) -> TokenStream {
    let name = annotation.name();
    let members = annotation
        .members()
        .iter()
        .map(|(key, value)| quote!(.member(#key, #value)));

    quote! {
        ::persist_core::AnnotationValue::builder(#name)
            #(#members)*
            .build()
    }
}
