//! End-to-end sessions: describe a schema, render it, submit it.

use cms_migrate::{
    EnumerableFieldArgs, EnumerationArgs, EnumerationValue, FieldValidations, Migration,
    MigrationBatch, MigrationError, MigrationOptions, ModelArgs, RangeValidation,
    RelationType, RelationalFieldArgs, RemoteConfigArgs, RemoteFieldArgs, SimpleFieldArgs,
    SimpleFieldType, Transport, UnionFieldArgs, UpdateSimpleFieldArgs,
};
use serde_json::{Value, json};

#[derive(Default)]
struct RecordingTransport {
    batches: Vec<MigrationBatch>,
}

impl Transport for RecordingTransport {
    type Response = usize;
    type Error = String;

    fn submit(&mut self, batch: &MigrationBatch) -> Result<usize, String> {
        self.batches.push(batch.clone());
        Ok(batch.changes.len())
    }
}

struct RejectingTransport;

impl Transport for RejectingTransport {
    type Response = ();
    type Error = String;

    fn submit(&mut self, _batch: &MigrationBatch) -> Result<(), String> {
        Err("backend unavailable".to_string())
    }
}

fn post_model() -> ModelArgs {
    ModelArgs {
        api_id: "Post".to_string(),
        api_id_plural: Some("Posts".to_string()),
        display_name: Some("Post".to_string()),
        ..Default::default()
    }
}

#[test]
fn simple_field_defaults_to_single_line() {
    let mut migration = Migration::new();
    migration
        .model("Post")
        .add_simple_field(SimpleFieldArgs::new("title", SimpleFieldType::String))
        .unwrap();

    assert_eq!(
        migration.dry_run(),
        vec![json!({"createSimpleField": {
            "modelApiId": "Post",
            "apiId": "title",
            "type": "STRING",
            "formRenderer": "GCMS_SINGLE_LINE",
        }})]
    );
}

#[test]
fn relational_field_synthesizes_reverse_side() {
    // The synthesized reverse side is named after the owning model.
    let args: RelationalFieldArgs = serde_json::from_value(json!({
        "apiId": "author",
        "model": "User",
        "relationType": "ManyToOne",
    }))
    .unwrap();

    let mut migration = Migration::new();
    migration.model("author").add_relational_field(args).unwrap();

    let changes = migration.dry_run();
    let change = &changes[0]["createRelationalField"];
    assert_eq!(change["type"], "RELATION");
    assert_eq!(change["isList"], false);
    assert_eq!(change["reverseField"]["apiId"], "relatedauthor");
    assert_eq!(change["reverseField"]["displayName"], "Related author");
    assert_eq!(change["reverseField"]["modelApiId"], "User");
    assert_eq!(change["reverseField"]["isList"], true);
    assert!(change.get("model").is_none());
    assert!(change.get("relationType").is_none());
    assert!(change.get("isRequired").is_none());
}

#[test]
fn empty_union_registers_nothing() {
    let mut migration = Migration::new();
    migration.create_model(post_model()).unwrap();
    let before = migration.changes().len();

    let args: UnionFieldArgs = serde_json::from_value(json!({"apiId": "content", "models": []})).unwrap();
    let mut page = migration.model("Post");
    let result = page.add_union_field(args);
    assert!(matches!(result, Err(MigrationError::EmptyUnionModels { .. })));

    assert_eq!(migration.changes().len(), before);
}

#[test]
fn remote_field_headers_and_method() {
    let args: RemoteFieldArgs = serde_json::from_value(json!({
        "apiId": "weather",
        "remoteConfig": {"headers": {"X-Key": "abc"}},
    }))
    .unwrap();

    let mut migration = Migration::new();
    migration.model("City").add_remote_field(args).unwrap();

    let changes = migration.dry_run();
    let change = &changes[0]["createRemoteField"];
    assert_eq!(change["type"], "REMOTE");
    assert_eq!(change["remoteConfig"]["headers"]["X-Key"], json!(["abc"]));
    assert_eq!(change["remoteConfig"]["method"], "GET");
    assert_eq!(change["remoteConfig"]["payloadFieldApiIds"], json!([]));

    // Already list-valued headers pass through unchanged.
    let again = RemoteFieldArgs {
        api_id: "weather2".to_string(),
        remote_config: RemoteConfigArgs {
            headers: Some(change["remoteConfig"]["headers"].clone()),
            ..Default::default()
        },
        ..Default::default()
    };
    migration.model("City").add_remote_field(again).unwrap();
    let changes = migration.dry_run();
    let second = &changes[1]["createRemoteField"];
    assert_eq!(second["remoteConfig"]["headers"], change["remoteConfig"]["headers"]);
}

#[test]
fn full_session_submits_in_order() {
    let mut migration = Migration::with_options(MigrationOptions::named("blog schema"));

    migration
        .create_enumeration(EnumerationArgs {
            api_id: "Status".to_string(),
            values: vec![EnumerationValue {
                api_id: "draft".to_string(),
                display_name: Some("Draft".to_string()),
            }],
            ..Default::default()
        })
        .unwrap();

    migration
        .create_model(post_model())
        .unwrap()
        .add_simple_field(SimpleFieldArgs {
            is_list: Some(true),
            validations: Some(FieldValidations {
                range: Some(RangeValidation {
                    min: Some(0.0),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..SimpleFieldArgs::new("ratings", SimpleFieldType::Int)
        })
        .unwrap()
        .add_enumerable_field(EnumerableFieldArgs {
            api_id: "status".to_string(),
            enumeration_api_id: Some("Status".to_string()),
            ..Default::default()
        })
        .unwrap()
        .add_relational_field(RelationalFieldArgs {
            api_id: "tags".to_string(),
            model: "Tag".to_string(),
            relation_type: Some(RelationType::ManyToMany),
            ..Default::default()
        })
        .unwrap()
        .update_simple_field(UpdateSimpleFieldArgs {
            api_id: "title".to_string(),
            data_type: Some(SimpleFieldType::String),
            ..Default::default()
        })
        .unwrap()
        .delete_field("legacy")
        .unwrap();

    assert_eq!(migration.changes().len(), 7);

    let mut transport = RecordingTransport::default();
    let submitted = migration.run(&mut transport).unwrap();
    assert_eq!(submitted, 7);

    let batch = &transport.batches[0];
    assert_eq!(batch.name.as_deref(), Some("blog schema"));
    let actions: Vec<&str> = batch
        .changes
        .iter()
        .map(|c| match c {
            Value::Object(map) => map.keys().next().map(String::as_str).unwrap_or(""),
            _ => "",
        })
        .collect();
    assert_eq!(
        actions,
        [
            "createEnumeration",
            "createModel",
            "createSimpleField",
            "createEnumerableField",
            "createRelationalField",
            "updateSimpleField",
            "deleteField",
        ]
    );

    assert_eq!(
        batch.changes[2]["createSimpleField"]["validations"],
        json!({"Int": {"range": {"min": 0}}})
    );
    let tags = &batch.changes[4]["createRelationalField"];
    assert_eq!(tags["isList"], true);
    assert_eq!(tags["reverseField"]["isList"], true);
    assert_eq!(
        batch.changes[5],
        json!({"updateSimpleField": {"modelApiId": "Post", "apiId": "title"}})
    );
}

#[test]
fn transport_errors_are_returned() {
    let mut migration = Migration::new();
    migration.create_model(post_model()).unwrap();
    assert_eq!(
        migration.run(&mut RejectingTransport),
        Err("backend unavailable".to_string())
    );
}
