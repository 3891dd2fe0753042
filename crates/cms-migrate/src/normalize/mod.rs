//! Field descriptor normalization.
//!
//! Each field category has a pure function mapping the caller's arguments
//! (plus the owning model's api id) to a fully-resolved payload. Nothing
//! here touches the change log; a returned error means nothing was built.

pub mod relation;
pub mod remote;

pub use relation::{
    relational_field, relational_field_type, reverse_api_id, reverse_display_name, union_field,
    update_relational_field, update_union_field,
};
pub use remote::{normalize_headers, remote_field, update_remote_field};

use tracing::trace;

use crate::error::MigrationError;
use crate::model::{
    CreateEnumerableFieldInput, CreateSimpleFieldInput, EnumerableFieldArgs, EnumerationArgs,
    FormRenderer, SimpleFieldArgs, UpdateEnumerableFieldArgs, UpdateEnumerableFieldInput,
    UpdateSimpleFieldArgs, UpdateSimpleFieldInput,
};
use crate::validate::extract_validations;

/// Resolves a simple field create.
///
/// Text fields without a renderer get the single-line renderer; validations
/// are reshaped for the field's type.
pub fn simple_field(model_api_id: &str, args: &SimpleFieldArgs) -> Result<CreateSimpleFieldInput, MigrationError> {
    let form_renderer = match args.form_renderer {
        None if args.data_type.is_text() => {
            trace!(field = %args.api_id, "defaulting form renderer to single line");
            Some(FormRenderer::SingleLine)
        }
        renderer => renderer,
    };
    let validations = extract_validations(
        &args.api_id,
        args.data_type,
        args.is_list.unwrap_or(false),
        args.validations.as_ref(),
    )?;

    Ok(CreateSimpleFieldInput {
        model_api_id: model_api_id.to_string(),
        api_id: args.api_id.clone(),
        data_type: args.data_type,
        display_name: args.display_name.clone(),
        description: args.description.clone(),
        is_list: args.is_list,
        is_required: args.is_required,
        is_unique: args.is_unique,
        is_localized: args.is_localized,
        is_title: args.is_title,
        visibility: args.visibility,
        form_renderer,
        position: args.position,
        validations,
    })
}

/// Resolves a simple field update. The caller's `type` only shapes the
/// validations and is never part of the result.
pub fn update_simple_field(
    model_api_id: &str,
    args: &UpdateSimpleFieldArgs,
) -> Result<UpdateSimpleFieldInput, MigrationError> {
    let validations = match (&args.validations, args.data_type) {
        (None, _) => None,
        (Some(request), Some(data_type)) => extract_validations(
            &args.api_id,
            data_type,
            args.is_list.unwrap_or(false),
            Some(request),
        )?,
        (Some(_), None) => {
            return Err(MigrationError::ValidationTypeRequired {
                field: args.api_id.clone(),
            });
        }
    };

    Ok(UpdateSimpleFieldInput {
        model_api_id: model_api_id.to_string(),
        api_id: args.api_id.clone(),
        new_api_id: args.new_api_id.clone(),
        display_name: args.display_name.clone(),
        description: args.description.clone(),
        is_list: args.is_list,
        is_required: args.is_required,
        is_unique: args.is_unique,
        is_localized: args.is_localized,
        is_title: args.is_title,
        visibility: args.visibility,
        form_renderer: args.form_renderer,
        position: args.position,
        validations,
    })
}

/// Resolves an enumerable field create. The enumeration must be named.
pub fn enumerable_field(
    model_api_id: &str,
    args: &EnumerableFieldArgs,
) -> Result<CreateEnumerableFieldInput, MigrationError> {
    let enumeration_api_id = args
        .enumeration_api_id
        .clone()
        .ok_or_else(|| MigrationError::MissingEnumerationApiId {
            field: args.api_id.clone(),
        })?;

    Ok(CreateEnumerableFieldInput {
        model_api_id: model_api_id.to_string(),
        api_id: args.api_id.clone(),
        enumeration_api_id,
        display_name: args.display_name.clone(),
        description: args.description.clone(),
        is_list: args.is_list,
        is_required: args.is_required,
        is_unique: args.is_unique,
        is_localized: args.is_localized,
        is_title: args.is_title,
        visibility: args.visibility,
        position: args.position,
        initial_value: args.initial_value.clone(),
    })
}

pub fn update_enumerable_field(
    model_api_id: &str,
    args: &UpdateEnumerableFieldArgs,
) -> UpdateEnumerableFieldInput {
    UpdateEnumerableFieldInput {
        model_api_id: model_api_id.to_string(),
        api_id: args.api_id.clone(),
        new_api_id: args.new_api_id.clone(),
        display_name: args.display_name.clone(),
        description: args.description.clone(),
        is_list: args.is_list,
        is_required: args.is_required,
        is_unique: args.is_unique,
        is_localized: args.is_localized,
        is_title: args.is_title,
        visibility: args.visibility,
        position: args.position,
        initial_value: args.initial_value.clone(),
    }
}

/// Checks an enumeration create. Enumerations need at least one value.
pub fn check_enumeration(args: &EnumerationArgs) -> Result<(), MigrationError> {
    if args.values.is_empty() {
        return Err(MigrationError::EmptyEnumeration {
            enumeration: args.api_id.clone(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use serde_json::json;

    use super::*;
    use crate::model::SimpleFieldType;
    use crate::validate::{FieldValidations, RangeValidation};

    #[test]
    fn test_string_gets_single_line() {
        let input = simple_field("Post", &SimpleFieldArgs::new("title", SimpleFieldType::String)).unwrap();
        assert_eq!(input.form_renderer, Some(FormRenderer::SingleLine));
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({
                "modelApiId": "Post",
                "apiId": "title",
                "type": "STRING",
                "formRenderer": "GCMS_SINGLE_LINE",
            })
        );
    }

    #[test]
    fn test_explicit_renderer_kept() {
        let args = SimpleFieldArgs {
            form_renderer: Some(FormRenderer::Markdown),
            ..SimpleFieldArgs::new("body", SimpleFieldType::String)
        };
        assert_eq!(
            simple_field("Post", &args).unwrap().form_renderer,
            Some(FormRenderer::Markdown)
        );
    }

    #[test]
    fn test_non_text_has_no_renderer() {
        let input = simple_field("Post", &SimpleFieldArgs::new("views", SimpleFieldType::Int)).unwrap();
        assert_eq!(input.form_renderer, None);
    }

    #[test]
    fn test_validation_failure_propagates() {
        let args = SimpleFieldArgs {
            validations: Some(FieldValidations::default()),
            ..SimpleFieldArgs::new("published", SimpleFieldType::Boolean)
        };
        assert!(matches!(
            simple_field("Post", &args),
            Err(MigrationError::UnsupportedValidationType { .. })
        ));
    }

    #[test]
    fn test_update_needs_type_for_validations() {
        let args = UpdateSimpleFieldArgs {
            api_id: "views".to_string(),
            validations: Some(FieldValidations::default()),
            ..Default::default()
        };
        assert!(matches!(
            update_simple_field("Post", &args),
            Err(MigrationError::ValidationTypeRequired { .. })
        ));
    }

    #[test]
    fn test_update_extracts_validations() {
        let args = UpdateSimpleFieldArgs {
            api_id: "views".to_string(),
            data_type: Some(SimpleFieldType::Int),
            validations: Some(FieldValidations {
                range: Some(RangeValidation {
                    max: Some(100.0),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        };
        let value = serde_json::to_value(update_simple_field("Post", &args).unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "modelApiId": "Post",
                "apiId": "views",
                "validations": {"Int": {"range": {"max": 100}}},
            })
        );
    }

    #[test]
    fn test_enumerable_requires_enumeration() {
        let args = EnumerableFieldArgs {
            api_id: "status".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            enumerable_field("Post", &args),
            Err(MigrationError::MissingEnumerationApiId { .. })
        ));

        let args = EnumerableFieldArgs {
            enumeration_api_id: Some("Status".to_string()),
            ..args
        };
        assert_eq!(enumerable_field("Post", &args).unwrap().enumeration_api_id, "Status");
    }

    #[test]
    fn test_empty_enumeration() {
        let args = EnumerationArgs {
            api_id: "Status".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            check_enumeration(&args),
            Err(MigrationError::EmptyEnumeration { .. })
        ));
    }

    fn simple_type_strategy() -> impl Strategy<Value = SimpleFieldType> {
        prop_oneof![
            Just(SimpleFieldType::Id),
            Just(SimpleFieldType::String),
            Just(SimpleFieldType::RichText),
            Just(SimpleFieldType::Int),
            Just(SimpleFieldType::Float),
            Just(SimpleFieldType::Boolean),
            Just(SimpleFieldType::Json),
            Just(SimpleFieldType::Datetime),
            Just(SimpleFieldType::Date),
            Just(SimpleFieldType::Location),
            Just(SimpleFieldType::Color),
        ]
    }

    proptest! {
        #[test]
        fn prop_update_never_sends_type(
            data_type in proptest::option::of(simple_type_strategy()),
            name in proptest::option::of("[A-Za-z ]{1,20}"),
        ) {
            let args = UpdateSimpleFieldArgs {
                api_id: "f".to_string(),
                data_type,
                display_name: name,
                ..Default::default()
            };
            let value = serde_json::to_value(update_simple_field("M", &args).unwrap()).unwrap();
            prop_assert!(value.get("type").is_none());
        }
    }
}
