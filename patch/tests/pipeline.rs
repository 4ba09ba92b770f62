//! End-to-end pipeline tests driven from raw JSON request bodies.

use keel_core::{
    Document, FieldKind, IdKind, Linkage, QueryParams, Resource, ResourceId, ResourceLink,
    ResourcePath, Value,
};
use keel_patch::{PatchError, PatchExecutor};
use keel_registry::{FieldDef, RegistryBuilder, ResourceRegistry};
use keel_repository::{EmptyProvider, InMemoryRepository, JsonMap};
use serde_json::json;
use std::sync::Arc;

struct Fixture {
    registry: ResourceRegistry,
    articles: Arc<InMemoryRepository>,
}

fn fixture() -> Fixture {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let mut links = JsonMap::new();
    links.insert("self".to_string(), json!("/articles/42"));

    let articles = Arc::new(
        InMemoryRepository::with_resources(
            "articles",
            [Resource::new("articles", ResourceId::Long(42))
                .with_attr("title", Value::String("Old".to_string()))
                .with_attr("body", Value::String("unchanged".to_string()))
                .with_to_many(
                    "tags",
                    vec![
                        ResourceLink::new("tags", ResourceId::Long(1)),
                        ResourceLink::new("tags", ResourceId::Long(2)),
                        ResourceLink::new("tags", ResourceId::Long(3)),
                    ],
                )],
        )
        .with_links(links),
    );
    let people = InMemoryRepository::with_resources(
        "people",
        [Resource::new("people", ResourceId::Long(9))
            .with_attr("name", Value::String("Ann".to_string()))],
    );
    let tags = InMemoryRepository::with_resources(
        "tags",
        [
            Resource::new("tags", ResourceId::Long(1)),
            Resource::new("tags", ResourceId::Long(2)),
            Resource::new("tags", ResourceId::Long(3)),
        ],
    );

    let mut builder = RegistryBuilder::new();
    builder
        .add_resource("articles")
        .id_field("id", IdKind::Long)
        .attr(FieldDef::new("title", FieldKind::String))
        .attr(FieldDef::new("body", FieldKind::String))
        .to_one("author", "people")
        .to_many("tags", "tags")
        .repository(InMemoryRepository::shared_factory(Arc::clone(&articles)))
        .done()
        .unwrap();
    builder
        .add_resource("people")
        .id_field("id", IdKind::Long)
        .attr(FieldDef::new("name", FieldKind::String))
        .repository(people.into_factory())
        .done()
        .unwrap();
    builder
        .add_resource("tags")
        .id_field("id", IdKind::Long)
        .repository(tags.into_factory())
        .done()
        .unwrap();

    Fixture {
        registry: builder.build().unwrap(),
        articles,
    }
}

fn body(raw: serde_json::Value) -> Document {
    serde_json::from_value(raw).unwrap()
}

#[test]
fn patch_updates_supplied_attribute_and_keeps_the_rest() {
    // GIVEN an article {id: 42, title: "Old", body: "unchanged"}
    let fixture = fixture();
    let executor = PatchExecutor::new(&fixture.registry);
    let document = body(json!({
        "data": { "type": "articles", "attributes": { "title": "New Title" } }
    }));

    // WHEN
    let envelope = executor
        .handle(
            &ResourcePath::single("articles", "42"),
            &QueryParams::new(),
            &EmptyProvider,
            Some(&document),
        )
        .unwrap();

    // THEN the persisted instance is {id: 42, title: "New Title", body: "unchanged"}
    let stored = fixture.articles.get(&ResourceId::Long(42)).unwrap();
    assert_eq!(stored.get_attr("title"), Some(&Value::String("New Title".to_string())));
    assert_eq!(stored.get_attr("body"), Some(&Value::String("unchanged".to_string())));
    assert_eq!(envelope.data, stored);
    // and the repository's links capability shows up in the envelope
    assert_eq!(
        envelope.links.as_ref().and_then(|l| l.get("self")),
        Some(&json!("/articles/42"))
    );
}

#[test]
fn patch_with_foreign_body_type_is_a_type_mismatch() {
    // GIVEN
    let fixture = fixture();
    let executor = PatchExecutor::new(&fixture.registry);
    let document = body(json!({ "data": { "type": "people" } }));

    // WHEN
    let result = executor.handle(
        &ResourcePath::single("articles", "42"),
        &QueryParams::new(),
        &EmptyProvider,
        Some(&document),
    );

    // THEN the article is untouched
    assert!(matches!(
        result.unwrap_err(),
        PatchError::TypeMismatch { path_type, body_type }
            if path_type == "articles" && body_type == "people"
    ));
    let stored = fixture.articles.get(&ResourceId::Long(42)).unwrap();
    assert_eq!(stored.get_attr("title"), Some(&Value::String("Old".to_string())));
}

#[test]
fn patch_with_collection_body_is_rejected_before_any_fetch() {
    // GIVEN
    let fixture = fixture();
    let executor = PatchExecutor::new(&fixture.registry);
    let document = body(json!({ "data": [ { "type": "articles" } ] }));

    // WHEN
    let result = executor.handle(
        &ResourcePath::single("articles", "42"),
        &QueryParams::new(),
        &EmptyProvider,
        Some(&document),
    );

    // THEN
    assert!(matches!(
        result.unwrap_err(),
        PatchError::RequestBodyInvalid { reason, .. } if reason == "multiple data in body"
    ));
}

#[test]
fn patch_without_body_is_rejected() {
    let fixture = fixture();
    let executor = PatchExecutor::new(&fixture.registry);

    let result = executor.handle(
        &ResourcePath::single("articles", "42"),
        &QueryParams::new(),
        &EmptyProvider,
        None,
    );

    assert!(matches!(result.unwrap_err(), PatchError::RequestBodyMissing { .. }));
}

#[test]
fn patch_relationship_to_missing_person_fails_without_persisting() {
    // GIVEN no person with id 404
    let fixture = fixture();
    let executor = PatchExecutor::new(&fixture.registry);
    let document = body(json!({
        "data": {
            "type": "articles",
            "attributes": { "title": "Half done" },
            "relationships": { "author": { "data": { "type": "people", "id": "404" } } }
        }
    }));

    // WHEN
    let result = executor.handle(
        &ResourcePath::single("articles", "42"),
        &QueryParams::new(),
        &EmptyProvider,
        Some(&document),
    );

    // THEN the merge aborted and the stored article kept its old title
    assert!(matches!(
        result.unwrap_err(),
        PatchError::RelatedResourceNotFound { relationship, .. } if relationship == "author"
    ));
    let stored = fixture.articles.get(&ResourceId::Long(42)).unwrap();
    assert_eq!(stored.get_attr("title"), Some(&Value::String("Old".to_string())));
}

#[test]
fn patch_to_many_relationship_replaces_the_whole_collection() {
    // GIVEN an article tagged [1, 2, 3]
    let fixture = fixture();
    let executor = PatchExecutor::new(&fixture.registry);
    let document = body(json!({
        "data": {
            "type": "articles",
            "relationships": { "tags": { "data": [ { "type": "tags", "id": "2" } ] } }
        }
    }));

    // WHEN
    executor
        .handle(
            &ResourcePath::single("articles", "42"),
            &QueryParams::new(),
            &EmptyProvider,
            Some(&document),
        )
        .unwrap();

    // THEN the stored tags are exactly [2]
    let stored = fixture.articles.get(&ResourceId::Long(42)).unwrap();
    assert_eq!(
        stored.relationship("tags"),
        Some(&Linkage::ToMany(vec![ResourceLink::new(
            "tags",
            ResourceId::Long(2)
        )]))
    );
}

#[test]
fn patch_sets_and_clears_a_to_one_relationship() {
    // GIVEN
    let fixture = fixture();
    let executor = PatchExecutor::new(&fixture.registry);
    let path = ResourcePath::single("articles", "42");

    // WHEN the author is set
    let set_author = body(json!({
        "data": {
            "type": "articles",
            "relationships": { "author": { "data": { "type": "people", "id": "9" } } }
        }
    }));
    executor
        .handle(&path, &QueryParams::new(), &EmptyProvider, Some(&set_author))
        .unwrap();

    // THEN
    let stored = fixture.articles.get(&ResourceId::Long(42)).unwrap();
    assert_eq!(
        stored.relationship("author"),
        Some(&Linkage::ToOne(Some(ResourceLink::new(
            "people",
            ResourceId::Long(9)
        ))))
    );

    // WHEN the author is explicitly nulled
    let clear_author = body(json!({
        "data": {
            "type": "articles",
            "relationships": { "author": { "data": null } }
        }
    }));
    executor
        .handle(&path, &QueryParams::new(), &EmptyProvider, Some(&clear_author))
        .unwrap();

    // THEN
    let stored = fixture.articles.get(&ResourceId::Long(42)).unwrap();
    assert_eq!(stored.relationship("author"), Some(&Linkage::ToOne(None)));
}

#[test]
fn repeated_patch_yields_identical_state() {
    // GIVEN
    let fixture = fixture();
    let executor = PatchExecutor::new(&fixture.registry);
    let path = ResourcePath::single("articles", "42");
    let document = body(json!({
        "data": {
            "type": "articles",
            "attributes": { "title": "Stable" },
            "relationships": { "tags": { "data": [ { "type": "tags", "id": "3" } ] } }
        }
    }));

    // WHEN
    executor
        .handle(&path, &QueryParams::new(), &EmptyProvider, Some(&document))
        .unwrap();
    let after_first = fixture.articles.get(&ResourceId::Long(42)).unwrap();
    executor
        .handle(&path, &QueryParams::new(), &EmptyProvider, Some(&document))
        .unwrap();
    let after_second = fixture.articles.get(&ResourceId::Long(42)).unwrap();

    // THEN
    assert_eq!(after_first, after_second);
}

#[test]
fn envelope_serializes_to_the_wire_shape() {
    // GIVEN
    let fixture = fixture();
    let executor = PatchExecutor::new(&fixture.registry);
    let document = body(json!({
        "data": { "type": "articles", "attributes": { "title": "Wire" } }
    }));

    // WHEN
    let envelope = executor
        .handle(
            &ResourcePath::single("articles", "42"),
            &QueryParams::new(),
            &EmptyProvider,
            Some(&document),
        )
        .unwrap();
    let json = serde_json::to_value(&envelope).unwrap();

    // THEN
    assert_eq!(json["data"]["type"], "articles");
    assert_eq!(json["data"]["id"], "42");
    assert_eq!(json["data"]["attributes"]["title"], "Wire");
    assert_eq!(json["links"]["self"], "/articles/42");
    assert!(json.get("meta").is_none());
}
