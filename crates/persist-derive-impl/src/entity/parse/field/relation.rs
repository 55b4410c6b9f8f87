// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Relation attribute parsing.
//!
//! ```rust,ignore
//! #[relation(kind = "many_to_one")]
//! pub author: Author,
//!
//! #[relation(kind = "embedded")]
//! pub address: Address,
//! ```

use darling::FromMeta;
use persist_core::{AnnotationValue, RelationKind, Stereotype, stereotype::RELATION_KIND_MEMBER};
use syn::{Attribute, LitStr};

/// Raw `#[relation(...)]` arguments.
#[derive(Debug, FromMeta)]
struct RelationArgs {
    kind: LitStr
}

/// Parsed `#[relation(kind = "...")]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationConfig {
    /// Relation kind.
    pub kind: RelationKind
}

impl RelationConfig {
    /// Parse from a `#[relation(...)]` attribute.
    ///
    /// # Errors
    ///
    /// - Missing `kind`
    /// - Unknown kind string (reported at the string literal)
    pub fn from_attr(attr: &Attribute) -> darling::Result<Self> {
        let args = RelationArgs::from_meta(&attr.meta)?;
        let kind = args
            .kind
            .value()
            .parse::<RelationKind>()
            .map_err(|err| darling::Error::custom(err).with_span(&args.kind))?;
        Ok(Self {
            kind
        })
    }

    /// The `persist::Relation` annotation for this relation.
    pub fn annotation(&self) -> AnnotationValue {
        AnnotationValue::builder(Stereotype::Relation.annotation_name())
            .member(RELATION_KIND_MEMBER, self.kind.as_str())
            .build()
    }
}
