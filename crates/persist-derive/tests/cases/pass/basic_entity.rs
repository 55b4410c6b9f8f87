// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use persist_derive::{Persistent, PersistentProperty};

#[derive(Persistent)]
pub struct Product {
    #[id]
    #[generated]
    pub id: i64,

    #[version]
    pub version: i32,

    pub name: String,

    pub price: Option<f64>,

    #[transient]
    pub cached_rank: u32,
}

fn main() {
    let entity = Product::persistent_entity();

    assert_eq!(entity.name(), "Product");
    assert_eq!(entity.identity().map(PersistentProperty::name), Some("id"));
    assert_eq!(entity.version().map(PersistentProperty::name), Some("version"));
    assert_eq!(entity.persistent_property_names(), vec!["name", "price"]);

    // generated but not nullable: still checked
    assert!(entity.identity().unwrap().is_generated());
    assert!(entity.identity().unwrap().requires_null_check());
    assert!(!entity.property_by_name("price").unwrap().requires_null_check());

    assert_eq!(Product::ENTITY_NAME, "Product");
    assert_eq!(Product::PROPERTIES, &["name", "price"]);
}
