// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use persist_derive::Persistent;

#[derive(Persistent)]
pub struct Envelope<T: Clone> {
    #[id]
    pub id: u64,

    #[read_only]
    pub received_by: String,

    pub payload: T,
}

fn main() {
    let entity = Envelope::<String>::persistent_entity();
    assert_eq!(entity.persistent_property_names(), vec!["payload"]);
    assert_eq!(entity.property_by_name("payload").unwrap().type_name(), "T");
    assert!(entity.property_by_name("received_by").is_none());
    assert_eq!(Envelope::<u8>::PROPERTIES, &["payload"]);
}
