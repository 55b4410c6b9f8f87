// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! JPA-style annotation parsing.
//!
//! `#[jpa(...)]` holds external annotations in snake case. Each entry becomes
//! a `jpa::PascalCase` annotation value, which the mapper registry later
//! rewrites into internal stereotypes:
//!
//! ```rust,ignore
//! #[jpa(id, generated_value(strategy = "identity"))]
//! pub id: i64,
//! // → jpa::Id, jpa::GeneratedValue(strategy = "identity")
//! // → persist::Id, persist::GeneratedValue, persist::Nullable
//! ```
//!
//! Only entries a mapper handles are accepted.

use convert_case::{Case, Casing};
use persist_core::{AnnotationMapperRegistry, AnnotationValue};
use syn::{Attribute, Expr, ExprLit, Lit, MetaNameValue, Token, punctuated::Punctuated, token};

const NAMESPACE: &str = "jpa::";

/// Parse one `#[jpa(...)]` attribute.
///
/// # Errors
///
/// - Entry not handled by `registry`
/// - Member value that is not a string, integer or boolean literal
pub fn parse_jpa_attr(
    attr: &Attribute,
    registry: &AnnotationMapperRegistry
) -> darling::Result<Vec<AnnotationValue>> {
    let mut annotations = Vec::new();

    attr.parse_nested_meta(|meta| {
        let ident = meta
            .path
            .get_ident()
            .ok_or_else(|| meta.error("expected a JPA annotation name"))?
            .to_string();
        let name = format!("{NAMESPACE}{}", ident.to_case(Case::Pascal));
        if !registry.handles(&name) {
            return Err(meta.error(format!(
                "unsupported JPA annotation `{ident}`, expected one of: {}",
                supported(registry).join(", ")
            )));
        }

        let mut annotation = AnnotationValue::builder(name);
        if meta.input.peek(token::Paren) {
            let content;
            syn::parenthesized!(content in meta.input);
            for member in Punctuated::<MetaNameValue, Token![,]>::parse_terminated(&content)? {
                let (key, value) = parse_member(&member)?;
                annotation = annotation.member(key, value);
            }
        }
        annotations.push(annotation.build());
        Ok(())
    })?;

    Ok(annotations)
}

fn parse_member(member: &MetaNameValue) -> syn::Result<(String, String)> {
    let key = member
        .path
        .get_ident()
        .ok_or_else(|| syn::Error::new_spanned(&member.path, "expected a member name"))?
        .to_string();
    let value = match &member.value {
        Expr::Lit(ExprLit {
            lit: Lit::Str(lit), ..
        }) => lit.value(),
        Expr::Lit(ExprLit {
            lit: Lit::Int(lit), ..
        }) => lit.base10_digits().to_string(),
        Expr::Lit(ExprLit {
            lit: Lit::Bool(lit), ..
        }) => lit.value.to_string(),
        other => {
            return Err(syn::Error::new_spanned(
                other,
                "expected a string, integer or boolean literal"
            ));
        }
    };
    Ok((key, value))
}

/// Snake-case entry names accepted by `registry`, sorted.
fn supported(registry: &AnnotationMapperRegistry) -> Vec<String> {
    let mut names: Vec<String> = persist_core::mapper::jpa_mappers()
        .iter()
        .map(|mapper| mapper.name())
        .filter(|name| registry.handles(name))
        .filter_map(|name| name.strip_prefix(NAMESPACE))
        .map(|name| name.to_case(Case::Snake))
        .collect();
    names.sort();
    names
}
