// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Tests for property classification.
//!
//! | Category | Coverage |
//! |----------|----------|
//! | Identity | none, single, composite, precedence over version |
//! | Version | single, duplicate (lenient with warning, strict) |
//! | Exclusion | read-only, transient |
//! | Relations | association vs embedded, missing or unknown kind |
//! | Lookup | regular names, excluded names, empty name |
//! | Mapping | JPA annotations classified after registry rewrite |
//! | Serde | round trip, derived lists rebuilt, misplaced properties rejected |

use std::{
    io,
    sync::{Arc, Mutex}
};

use super::*;
use crate::{
    annotation::AnnotationValue,
    mapper::{AnnotationMapperRegistry, jpa_names}
};

fn relation(name: &str, kind: &str) -> PropertyElement {
    PropertyElement::new(name, "Other").annotation(
        AnnotationValue::builder("persist::Relation")
            .member("kind", kind)
            .build()
    )
}

/// Log sink shared with a `tracing_subscriber::fmt` writer.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn classify_with_logs(class: &ClassElement) -> (PersistentEntity, String) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .finish();
    let entity =
        tracing::subscriber::with_default(subscriber, || PersistentEntity::from_class(class));
    (entity, logs.contents())
}

fn names(properties: &[PersistentProperty]) -> Vec<&str> {
    properties.iter().map(PersistentProperty::name).collect()
}

#[test]
fn empty_class_degrades_to_empty_sets() {
    let entity = PersistentEntity::from_class(&ClassElement::new("Empty"));
    assert_eq!(entity.name(), "Empty");
    assert!(entity.composite_identity().is_empty());
    assert!(entity.identity().is_none());
    assert!(entity.version().is_none());
    assert!(entity.persistent_properties().is_empty());
    assert!(entity.associations().is_empty());
    assert!(entity.embedded().is_empty());
}

#[test]
fn no_identity_property() {
    let class = ClassElement::new("Log")
        .property(PropertyElement::new("message", "String"))
        .property(PropertyElement::new("level", "u8"));
    let entity = PersistentEntity::from_class(&class);
    assert!(entity.composite_identity().is_empty());
    assert!(entity.identity().is_none());
    assert_eq!(entity.persistent_property_names(), vec!["message", "level"]);
}

#[test]
fn composite_identity_keeps_declaration_order() {
    let class = ClassElement::new("Membership")
        .property(PropertyElement::new("group_id", "i64").stereotype(Stereotype::Id))
        .property(PropertyElement::new("role", "String"))
        .property(PropertyElement::new("user_id", "i64").stereotype(Stereotype::Id));
    let entity = PersistentEntity::from_class(&class);
    assert_eq!(names(entity.composite_identity()), vec!["group_id", "user_id"]);
    assert_eq!(entity.identity().map(PersistentProperty::name), Some("group_id"));
    assert!(entity.composite_identity().iter().all(PersistentProperty::is_identity));
    assert_eq!(entity.persistent_property_names(), vec!["role"]);
}

#[test]
fn identity_takes_precedence_over_version() {
    let class = ClassElement::new("Odd").property(
        PropertyElement::new("id", "i64")
            .stereotype(Stereotype::Version)
            .stereotype(Stereotype::Id)
    );
    let entity = PersistentEntity::from_class(&class);
    assert_eq!(names(entity.composite_identity()), vec!["id"]);
    assert!(entity.version().is_none());
}

#[test]
fn version_is_excluded_from_other_lists() {
    let class = ClassElement::new("Doc")
        .property(PropertyElement::new("id", "i64").stereotype(Stereotype::Id))
        .property(
            relation("revision", "embedded").stereotype(Stereotype::Version)
        )
        .property(PropertyElement::new("body", "String"));
    let entity = PersistentEntity::from_class(&class);
    let version = entity.version().unwrap();
    assert_eq!(version.name(), "revision");
    assert!(version.is_version());
    assert!(entity.property_by_name("revision").is_none());
    assert!(entity.associations().is_empty());
    assert!(entity.embedded().is_empty());
    assert_eq!(entity.persistent_property_names(), vec!["body"]);
}

#[test]
fn duplicate_version_keeps_last() {
    let class = ClassElement::new("Twice")
        .property(PropertyElement::new("v1", "i32").stereotype(Stereotype::Version))
        .property(PropertyElement::new("v2", "i32").stereotype(Stereotype::Version));
    let entity = PersistentEntity::from_class(&class);
    assert_eq!(entity.version().map(PersistentProperty::name), Some("v2"));
    assert!(entity.persistent_properties().is_empty());
}

#[test]
fn duplicate_version_rejected_by_strict_classification() {
    let class = ClassElement::new("Thrice")
        .property(PropertyElement::new("v1", "i32").stereotype(Stereotype::Version))
        .property(PropertyElement::new("v2", "i32").stereotype(Stereotype::Version))
        .property(PropertyElement::new("v3", "i32").stereotype(Stereotype::Version));
    let err = PersistentEntity::try_from_class(&class).unwrap_err();
    assert_eq!(err, MetadataError::DuplicateVersion {
        entity: "Thrice".to_string(),
        first:  "v1".to_string(),
        second: "v2".to_string()
    });
}

#[test]
fn strict_classification_matches_lenient_when_valid() {
    let class = ClassElement::new("Fine")
        .property(PropertyElement::new("id", "i64").stereotype(Stereotype::Id))
        .property(PropertyElement::new("version", "i32").stereotype(Stereotype::Version));
    assert_eq!(
        PersistentEntity::try_from_class(&class).unwrap(),
        PersistentEntity::from_class(&class)
    );
}

#[test]
fn read_only_and_transient_are_excluded_everywhere() {
    let class = ClassElement::new("Account")
        .property(
            PropertyElement::new("id", "i64")
                .stereotype(Stereotype::Id)
                .read_only()
        )
        .property(
            PropertyElement::new("version", "i32")
                .stereotype(Stereotype::Version)
                .stereotype(Stereotype::Transient)
        )
        .property(relation("owner", "many_to_one").read_only())
        .property(relation("address", "embedded").stereotype(Stereotype::Transient))
        .property(PropertyElement::new("cache", "Vec<u8>").stereotype(Stereotype::Transient))
        .property(PropertyElement::new("email", "String"));
    let entity = PersistentEntity::from_class(&class);

    assert!(entity.composite_identity().is_empty());
    assert!(entity.version().is_none());
    assert!(entity.associations().is_empty());
    assert!(entity.embedded().is_empty());
    assert_eq!(entity.persistent_property_names(), vec!["email"]);
    for excluded in ["id", "version", "owner", "address", "cache"] {
        assert!(entity.property_by_name(excluded).is_none(), "{excluded}");
    }
}

#[test]
fn embedded_relation_is_in_both_lists() {
    let class = ClassElement::new("Customer")
        .property(relation("address", "embedded"))
        .property(relation("orders", "one_to_many"))
        .property(relation("manager", "many_to_one"))
        .property(PropertyElement::new("name", "String"));
    let entity = PersistentEntity::from_class(&class);

    let associations: Vec<&str> = entity.associations().iter().map(|a| a.name()).collect();
    assert_eq!(associations, vec!["address", "orders", "manager"]);
    let embedded: Vec<&str> = entity.embedded().iter().map(|e| e.name()).collect();
    assert_eq!(embedded, vec!["address"]);

    assert_eq!(entity.associations()[1].kind(), Some(RelationKind::OneToMany));
    assert_eq!(
        entity.property_by_name("address").map(PersistentProperty::kind),
        Some(PropertyKind::Association(Some(RelationKind::Embedded)))
    );
    assert_eq!(
        entity.property_by_name("name").map(PersistentProperty::kind),
        Some(PropertyKind::Basic)
    );
}

#[test]
fn relation_without_recognizable_kind_is_plain_association() {
    let class = ClassElement::new("Loose")
        .property(PropertyElement::new("parent", "Loose").stereotype(Stereotype::Relation))
        .property(relation("child", "sideways"));
    let entity = PersistentEntity::from_class(&class);
    assert_eq!(entity.associations().len(), 2);
    assert!(entity.associations().iter().all(|a| a.kind().is_none()));
    assert!(entity.embedded().is_empty());
}

#[test]
fn derived_lists_are_stable_across_calls() {
    let class = ClassElement::new("Customer").property(relation("address", "embedded"));
    let entity = PersistentEntity::from_class(&class);
    assert!(std::ptr::eq(entity.associations(), entity.associations()));
    assert!(std::ptr::eq(&entity.embedded()[0], &entity.embedded()[0]));
}

#[test]
fn property_lookup() {
    let class = ClassElement::new("User")
        .property(PropertyElement::new("id", "i64").stereotype(Stereotype::Id))
        .property(PropertyElement::new("name", "String"));
    let entity = PersistentEntity::from_class(&class);
    assert_eq!(
        entity.property_by_name("name").map(PersistentProperty::type_name),
        Some("String")
    );
    assert!(entity.property_by_name("id").is_none());
    assert!(entity.property_by_name("missing").is_none());
    assert!(entity.property_by_name("").is_none());
}

#[test]
fn source_entities_own_and_have_no_parent() {
    let entity = PersistentEntity::from_class(&ClassElement::new("A"));
    let other = PersistentEntity::from_class(&ClassElement::new("B"));
    assert!(entity.is_owning_entity(&other));
    assert!(entity.parent_entity().is_none());
}

#[test]
fn jpa_annotations_classify_after_mapping() {
    let class = ClassElement::new("Invoice")
        .annotation(AnnotationValue::new("jpa::Entity"))
        .property(
            PropertyElement::new("id", "i64")
                .annotation(AnnotationValue::new(jpa_names::ID))
                .annotation(
                    AnnotationValue::builder(jpa_names::GENERATED_VALUE)
                        .member("strategy", "identity")
                        .build()
                )
        )
        .property(PropertyElement::new("version", "i32").annotation(AnnotationValue::new(jpa_names::VERSION)))
        .property(PropertyElement::new("billing", "Address").annotation(AnnotationValue::new(jpa_names::EMBEDDED)))
        .property(PropertyElement::new("lines", "Vec<Line>").annotation(AnnotationValue::new(jpa_names::ONE_TO_MANY)))
        .property(PropertyElement::new("draft", "bool").annotation(AnnotationValue::new(jpa_names::TRANSIENT)))
        .property(PropertyElement::new("total", "i64"));

    let unmapped = PersistentEntity::from_class(&class);
    assert!(unmapped.identity().is_none());

    let entity = PersistentEntity::from_class(&class.mapped(&AnnotationMapperRegistry::jpa()));
    let id = entity.identity().unwrap();
    assert_eq!(id.name(), "id");
    assert!(id.is_generated());
    assert!(!id.requires_null_check());
    assert_eq!(entity.version().map(PersistentProperty::name), Some("version"));
    assert_eq!(entity.persistent_property_names(), vec!["billing", "lines", "total"]);
    assert_eq!(entity.associations().len(), 2);
    assert_eq!(entity.embedded().len(), 1);
    assert_eq!(entity.embedded()[0].name(), "billing");
    assert!(entity.annotation_metadata().has_annotation("jpa::Entity"));
}

#[cfg(feature = "serde")]
#[test]
fn descriptor_serializes_to_json() {
    let class = ClassElement::new("User")
        .property(PropertyElement::new("id", "i64").stereotype(Stereotype::Id))
        .property(relation("address", "embedded"));
    let entity = PersistentEntity::from_class(&class);
    let json = serde_json::to_value(&entity).unwrap();
    assert_eq!(json["name"], "User");
    assert_eq!(json["identity"][0]["name"], "id");
    assert_eq!(json["properties"][0]["kind"]["association"], "embedded");
}

#[test]
fn duplicate_version_logs_warning() {
    let class = ClassElement::new("Doc")
        .property(PropertyElement::new("v1", "i32").stereotype(Stereotype::Version))
        .property(PropertyElement::new("v2", "i32").stereotype(Stereotype::Version));
    let (entity, logs) = classify_with_logs(&class);

    assert_eq!(entity.version().map(PersistentProperty::name), Some("v2"));
    assert!(logs.contains("WARN"), "{logs}");
    assert!(logs.contains("multiple version properties"), "{logs}");
    assert!(logs.contains("v1") && logs.contains("v2"), "{logs}");
}

#[test]
fn single_version_logs_nothing() {
    let class = ClassElement::new("Doc")
        .property(PropertyElement::new("version", "i32").stereotype(Stereotype::Version))
        .property(PropertyElement::new("body", "String"));
    let (_, logs) = classify_with_logs(&class);
    assert!(logs.is_empty(), "{logs}");
}

#[cfg(feature = "serde")]
fn customer() -> PersistentEntity {
    let class = ClassElement::new("Customer")
        .property(PropertyElement::new("id", "i64").stereotype(Stereotype::Id))
        .property(PropertyElement::new("version", "i32").stereotype(Stereotype::Version))
        .property(relation("account", "many_to_one"))
        .property(relation("address", "embedded"))
        .property(PropertyElement::new("name", "String"));
    PersistentEntity::from_class(&class)
}

#[cfg(feature = "serde")]
#[test]
fn descriptor_round_trips_through_json() {
    let entity = customer();
    let json = serde_json::to_value(&entity).unwrap();
    let back: PersistentEntity = serde_json::from_value(json).unwrap();
    assert_eq!(back, entity);
}

#[cfg(feature = "serde")]
#[test]
fn deserialization_rebuilds_derived_lists() {
    let mut json = serde_json::to_value(customer()).unwrap();
    json["embedded"] = json["associations"].clone();
    json["associations"] = serde_json::json!([]);

    let back: PersistentEntity = serde_json::from_value(json).unwrap();
    assert_eq!(back.associations().len(), 2);
    assert_eq!(back.embedded().len(), 1);
    assert_eq!(back.embedded()[0].name(), "address");
    assert!(back.embedded().iter().all(|e| e.is_embedded()));
}

#[cfg(feature = "serde")]
#[test]
fn deserialization_drops_lists_without_regular_properties() {
    let mut json = serde_json::to_value(customer()).unwrap();
    json["properties"] = serde_json::json!([]);

    let back: PersistentEntity = serde_json::from_value(json).unwrap();
    assert!(back.associations().is_empty());
    assert!(back.embedded().is_empty());
}

#[cfg(feature = "serde")]
#[test]
fn deserialization_rejects_misplaced_property() {
    let mut json = serde_json::to_value(customer()).unwrap();
    let id = json["identity"][0].clone();
    json["properties"].as_array_mut().unwrap().push(id);

    let err = serde_json::from_value::<PersistentEntity>(json).unwrap_err();
    assert!(err.to_string().contains("property `id` does not belong in `properties`"));
}

#[cfg(feature = "serde")]
#[test]
fn deserialization_rejects_identity_bucket_with_regular_property() {
    let mut json = serde_json::to_value(customer()).unwrap();
    json["identity"] = serde_json::json!([json["properties"][2].clone()]);

    let err = serde_json::from_value::<PersistentEntity>(json).unwrap_err();
    assert!(err.to_string().contains("does not belong in `identity`"));
}
