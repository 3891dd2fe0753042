//! Describes a small blog schema and prints the batch that would be submitted.

use cms_migrate::{
    EnumerableFieldArgs, EnumerationArgs, EnumerationValue, FieldValidations, Migration,
    MigrationError, MigrationOptions, ModelArgs, PatternValidation, RelationType,
    RelationalFieldArgs, RemoteConfigArgs, RemoteFieldArgs, SimpleFieldArgs, SimpleFieldType,
    UnionFieldArgs,
};
use serde_json::json;

fn model(api_id: &str, plural: &str) -> ModelArgs {
    ModelArgs {
        api_id: api_id.to_string(),
        api_id_plural: Some(plural.to_string()),
        display_name: Some(api_id.to_string()),
        ..Default::default()
    }
}

fn main() -> Result<(), MigrationError> {
    let mut migration = Migration::with_options(MigrationOptions::named("blog schema"));

    migration.create_enumeration(EnumerationArgs {
        api_id: "PostStatus".to_string(),
        display_name: Some("Post status".to_string()),
        values: ["draft", "review", "published"]
            .into_iter()
            .map(|v| EnumerationValue {
                api_id: v.to_string(),
                display_name: None,
            })
            .collect(),
        ..Default::default()
    })?;

    migration.create_model(model("Author", "Authors"))?.add_simple_field(
        SimpleFieldArgs {
            is_title: Some(true),
            ..SimpleFieldArgs::new("name", SimpleFieldType::String)
        },
    )?;
    migration
        .create_model(model("Quote", "Quotes"))?
        .add_simple_field(SimpleFieldArgs::new("text", SimpleFieldType::RichText))?;

    migration
        .create_model(model("Post", "Posts"))?
        .add_simple_field(SimpleFieldArgs {
            is_required: Some(true),
            validations: Some(FieldValidations {
                matches: Some(PatternValidation {
                    regex: "^[a-z0-9-]+$".to_string(),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..SimpleFieldArgs::new("slug", SimpleFieldType::String)
        })?
        .add_enumerable_field(EnumerableFieldArgs {
            api_id: "status".to_string(),
            enumeration_api_id: Some("PostStatus".to_string()),
            ..Default::default()
        })?
        .add_relational_field(RelationalFieldArgs {
            api_id: "author".to_string(),
            model: "Author".to_string(),
            relation_type: Some(RelationType::ManyToOne),
            ..Default::default()
        })?
        .add_relational_field(RelationalFieldArgs {
            api_id: "cover".to_string(),
            model: "Asset".to_string(),
            ..Default::default()
        })?
        .add_union_field(UnionFieldArgs {
            api_id: "blocks".to_string(),
            models: vec!["Quote".to_string()],
            relation_type: Some(RelationType::OneToMany),
            ..Default::default()
        })?
        .add_remote_field(RemoteFieldArgs {
            api_id: "readingStats".to_string(),
            remote_config: RemoteConfigArgs {
                url: Some("https://stats.example.com/posts".to_string()),
                headers: Some(json!({"Authorization": "Bearer token"})),
                ..Default::default()
            },
            ..Default::default()
        })?;

    let batch = migration.into_batch();
    println!("{}", serde_json::to_string_pretty(&batch)?);
    Ok(())
}
