//! Relational and union field normalization.
//!
//! Both categories describe two sides: the forward field on the owning
//! model and a reverse field on the target side. When the caller gives no
//! reverse field one is synthesized from the owning model's api id.
//! List-ness of both sides always follows the [`RelationType`].

use tracing::trace;

use crate::error::MigrationError;
use crate::model::{
    ASSET_MODEL_API_ID, CreateRelationalFieldInput, CreateUnionFieldInput, RelationType,
    RelationalFieldArgs, RelationalFieldType, ReverseRelationalFieldInput, ReverseUnionFieldInput,
    UnionFieldArgs, UpdateRelationalFieldArgs, UpdateRelationalFieldInput,
    UpdateReverseUnionFieldInput, UpdateUnionFieldArgs, UpdateUnionFieldInput,
};

/// Api id of a synthesized reverse field.
pub fn reverse_api_id(model_api_id: &str) -> String {
    format!("related{model_api_id}")
}

/// Display name of a synthesized reverse field.
pub fn reverse_display_name(model_api_id: &str) -> String {
    format!("Related {model_api_id}")
}

/// Decides the wire kind of a relational field.
///
/// Naming the `Asset` model (in any case) or asking for the asset type
/// selects an asset relation.
pub fn relational_field_type(args: &RelationalFieldArgs) -> RelationalFieldType {
    if args.field_type == Some(RelationalFieldType::Asset)
        || args.model.eq_ignore_ascii_case(ASSET_MODEL_API_ID)
    {
        RelationalFieldType::Asset
    } else {
        RelationalFieldType::Relation
    }
}

/// Resolves a relational field create.
///
/// Asset relations default `isRequired` to false and always get a hidden,
/// list-valued reverse side. Plain relations never carry `isRequired` and
/// must name their target model.
pub fn relational_field(
    model_api_id: &str,
    args: &RelationalFieldArgs,
) -> Result<CreateRelationalFieldInput, MigrationError> {
    let field_type = relational_field_type(args);
    let relation_type = args.relation_type.unwrap_or_default();
    let is_asset = field_type == RelationalFieldType::Asset;

    let target = if !args.model.is_empty() {
        args.model.clone()
    } else if is_asset {
        ASSET_MODEL_API_ID.to_string()
    } else {
        return Err(MigrationError::MissingRelationTarget {
            field: args.api_id.clone(),
        });
    };

    let mut reverse_field = match &args.reverse_field {
        Some(reverse) => ReverseRelationalFieldInput {
            model_api_id: reverse.model_api_id.clone().unwrap_or(target),
            api_id: reverse.api_id.clone(),
            display_name: reverse
                .display_name
                .clone()
                .unwrap_or_else(|| reverse_display_name(model_api_id)),
            description: reverse.description.clone(),
            is_list: relation_type.reverse_is_list(),
            is_hidden: reverse.is_hidden,
        },
        None => {
            trace!(field = %args.api_id, model = model_api_id, "synthesizing reverse field");
            ReverseRelationalFieldInput {
                model_api_id: target,
                api_id: reverse_api_id(model_api_id),
                display_name: reverse_display_name(model_api_id),
                description: None,
                is_list: relation_type.reverse_is_list(),
                is_hidden: None,
            }
        }
    };

    let is_required = if is_asset {
        trace!(field = %args.api_id, "asset relation: reverse side forced to hidden list");
        reverse_field.is_list = true;
        reverse_field.is_hidden = Some(true);
        Some(args.is_required.unwrap_or(false))
    } else {
        None
    };

    Ok(CreateRelationalFieldInput {
        model_api_id: model_api_id.to_string(),
        api_id: args.api_id.clone(),
        field_type,
        display_name: args.display_name.clone(),
        description: args.description.clone(),
        is_list: relation_type.forward_is_list(),
        is_required,
        is_unique: args.is_unique,
        visibility: args.visibility,
        position: args.position,
        reverse_field,
    })
}

/// Resolves a relational field update.
pub fn update_relational_field(
    model_api_id: &str,
    args: &UpdateRelationalFieldArgs,
) -> UpdateRelationalFieldInput {
    UpdateRelationalFieldInput {
        model_api_id: model_api_id.to_string(),
        api_id: args.api_id.clone(),
        new_api_id: args.new_api_id.clone(),
        display_name: args.display_name.clone(),
        description: args.description.clone(),
        is_required: args.is_required,
        is_unique: args.is_unique,
        visibility: args.visibility,
        position: args.position,
        reverse_field: args.reverse_field.clone(),
    }
}

/// Resolves a union field create. Fails if no member model is given.
pub fn union_field(model_api_id: &str, args: &UnionFieldArgs) -> Result<CreateUnionFieldInput, MigrationError> {
    if args.models.is_empty() {
        return Err(MigrationError::EmptyUnionModels {
            field: args.api_id.clone(),
        });
    }
    let relation_type: RelationType = args.relation_type.unwrap_or_default();

    let reverse_field = match &args.reverse_field {
        Some(reverse) => ReverseUnionFieldInput {
            model_api_ids: args.models.clone(),
            api_id: reverse.api_id.clone(),
            display_name: reverse
                .display_name
                .clone()
                .unwrap_or_else(|| reverse_display_name(model_api_id)),
            description: reverse.description.clone(),
            is_list: relation_type.reverse_is_list(),
        },
        None => {
            trace!(field = %args.api_id, model = model_api_id, "synthesizing union reverse field");
            ReverseUnionFieldInput {
                model_api_ids: args.models.clone(),
                api_id: reverse_api_id(model_api_id),
                display_name: reverse_display_name(model_api_id),
                description: None,
                is_list: relation_type.reverse_is_list(),
            }
        }
    };

    Ok(CreateUnionFieldInput {
        model_api_id: model_api_id.to_string(),
        api_id: args.api_id.clone(),
        display_name: args.display_name.clone(),
        description: args.description.clone(),
        is_list: relation_type.forward_is_list(),
        visibility: args.visibility,
        position: args.position,
        reverse_field,
    })
}

/// Resolves a union field update, moving `models` under the reverse field.
pub fn update_union_field(model_api_id: &str, args: &UpdateUnionFieldArgs) -> UpdateUnionFieldInput {
    let reverse_field = match (&args.models, &args.reverse_field) {
        (None, None) => None,
        (models, reverse) => {
            let reverse = reverse.clone().unwrap_or_default();
            Some(UpdateReverseUnionFieldInput {
                model_api_ids: models.clone(),
                new_api_id: reverse.new_api_id,
                display_name: reverse.display_name,
                description: reverse.description,
                is_hidden: reverse.is_hidden,
            })
        }
    };

    UpdateUnionFieldInput {
        model_api_id: model_api_id.to_string(),
        api_id: args.api_id.clone(),
        new_api_id: args.new_api_id.clone(),
        display_name: args.display_name.clone(),
        description: args.description.clone(),
        visibility: args.visibility,
        position: args.position,
        reverse_field,
    }
}
