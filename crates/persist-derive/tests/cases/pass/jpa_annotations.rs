// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use persist_derive::{Persistent, RelationKind, Stereotype};

pub struct Address;
pub struct Customer;
pub struct Line;
pub struct Tag;

#[derive(Persistent)]
pub struct Order {
    #[jpa(id, generated_value(strategy = "sequence", generator = "order_seq"))]
    pub id: i64,

    #[jpa(version)]
    pub revision: i64,

    #[jpa(many_to_one)]
    pub customer: Customer,

    #[jpa(one_to_many)]
    pub lines: Vec<Line>,

    #[jpa(many_to_many)]
    pub tags: Vec<Tag>,

    #[jpa(embedded)]
    pub shipping: Address,

    #[jpa(transient)]
    pub total_cache: i64,
}

fn main() {
    let class = Order::class_element();
    let id = &class.properties()[0];
    assert!(id.has_stereotype(Stereotype::Id));
    assert!(id.has_stereotype(Stereotype::GeneratedValue));
    assert!(id.has_stereotype(Stereotype::Nullable));

    let entity = Order::persistent_entity();
    assert!(!entity.identity().unwrap().requires_null_check());
    assert_eq!(Order::VERSION, Some("revision"));

    let kinds: Vec<_> = entity.associations().iter().map(|a| a.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            Some(RelationKind::ManyToOne),
            Some(RelationKind::OneToMany),
            Some(RelationKind::ManyToMany),
            Some(RelationKind::Embedded)
        ]
    );
    assert_eq!(entity.embedded().len(), 1);
    assert_eq!(entity.embedded()[0].name(), "shipping");
    assert!(entity.property_by_name("total_cache").is_none());
}
