//! Caller-facing arguments for builder operations.
//!
//! These are the partially-specified inputs a migration author writes. They
//! are never modified; normalizers read them and produce the resolved
//! payloads in [`crate::model::input`]. None of them carries `modelApiId`:
//! the model builder supplies it.

use serde::{Deserialize, Serialize};

use crate::model::{FormRenderer, RelationType, RelationalFieldType, SimpleFieldType, VisibilityType};
use crate::validate::FieldValidations;

// =============================================================================
// Models
// =============================================================================

/// Arguments for creating a model.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModelArgs {
    pub api_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_id_plural: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Sparse update of a model. Only `api_id` is required.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateModelArgs {
    pub api_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_api_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_id_plural: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// =============================================================================
// Enumerations
// =============================================================================

/// A single enumeration value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnumerationValue {
    pub api_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// Arguments for creating an enumeration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnumerationArgs {
    pub api_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub values: Vec<EnumerationValue>,
}

/// Renames or relabels an existing enumeration value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateEnumerationValue {
    pub api_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_api_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// Sparse update of an enumeration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateEnumerationArgs {
    pub api_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_api_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub values_to_create: Vec<EnumerationValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub values_to_update: Vec<UpdateEnumerationValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub values_to_delete: Vec<String>,
}

// =============================================================================
// Simple fields
// =============================================================================

/// Arguments for creating a scalar field. The data type is mandatory.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleFieldArgs {
    pub api_id: String,
    #[serde(rename = "type")]
    pub data_type: SimpleFieldType,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_list: Option<bool>,
    #[serde(default)]
    pub is_required: Option<bool>,
    #[serde(default)]
    pub is_unique: Option<bool>,
    #[serde(default)]
    pub is_localized: Option<bool>,
    #[serde(default)]
    pub is_title: Option<bool>,
    #[serde(default)]
    pub visibility: Option<VisibilityType>,
    #[serde(default)]
    pub form_renderer: Option<FormRenderer>,
    #[serde(default)]
    pub position: Option<i32>,
    #[serde(default)]
    pub validations: Option<FieldValidations>,
}

impl SimpleFieldArgs {
    /// Creates arguments with only the identity and data type set.
    pub fn new(api_id: impl Into<String>, data_type: SimpleFieldType) -> Self {
        Self {
            api_id: api_id.into(),
            data_type,
            display_name: None,
            description: None,
            is_list: None,
            is_required: None,
            is_unique: None,
            is_localized: None,
            is_title: None,
            visibility: None,
            form_renderer: None,
            position: None,
            validations: None,
        }
    }
}

/// Sparse update of a scalar field.
///
/// `data_type` is only consulted to shape validations; it is never sent.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateSimpleFieldArgs {
    pub api_id: String,
    #[serde(rename = "type")]
    pub data_type: Option<SimpleFieldType>,
    pub new_api_id: Option<String>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub is_list: Option<bool>,
    pub is_required: Option<bool>,
    pub is_unique: Option<bool>,
    pub is_localized: Option<bool>,
    pub is_title: Option<bool>,
    pub visibility: Option<VisibilityType>,
    pub form_renderer: Option<FormRenderer>,
    pub position: Option<i32>,
    pub validations: Option<FieldValidations>,
}

// =============================================================================
// Remote fields
// =============================================================================

/// Remote resolution settings as written by the caller.
///
/// `headers` is kept loosely typed: values may be scalars or lists and are
/// coerced into the multi-value wire shape during normalization.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RemoteConfigArgs {
    pub url: Option<String>,
    pub method: Option<crate::model::RemoteFieldApiMethod>,
    pub headers: Option<serde_json::Value>,
    pub payload_field_api_ids: Option<Vec<String>>,
    pub forward_client_headers: Option<bool>,
    #[serde(rename = "cacheTTLSeconds")]
    pub cache_ttl_seconds: Option<i64>,
}

/// Arguments for creating a remote field.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RemoteFieldArgs {
    pub api_id: String,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub is_list: Option<bool>,
    pub is_required: Option<bool>,
    pub visibility: Option<VisibilityType>,
    pub position: Option<i32>,
    pub return_type_api_id: Option<String>,
    pub remote_config: RemoteConfigArgs,
}

/// Sparse update of a remote field.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateRemoteFieldArgs {
    pub api_id: String,
    pub new_api_id: Option<String>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub is_list: Option<bool>,
    pub visibility: Option<VisibilityType>,
    pub position: Option<i32>,
    pub remote_config: Option<RemoteConfigArgs>,
}

// =============================================================================
// Relational fields
// =============================================================================

/// Explicit definition of the inverse side of a relation.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReverseFieldArgs {
    pub api_id: String,
    pub display_name: Option<String>,
    pub description: Option<String>,
    /// Defaults to the relation's target model.
    pub model_api_id: Option<String>,
    pub is_hidden: Option<bool>,
}

/// Arguments for creating a relation (or asset reference) to another model.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RelationalFieldArgs {
    pub api_id: String,
    pub display_name: Option<String>,
    pub description: Option<String>,
    /// Target model. `"Asset"` selects an asset relation.
    pub model: String,
    pub relation_type: Option<RelationType>,
    #[serde(rename = "type")]
    pub field_type: Option<RelationalFieldType>,
    pub is_required: Option<bool>,
    pub is_unique: Option<bool>,
    pub visibility: Option<VisibilityType>,
    pub position: Option<i32>,
    pub reverse_field: Option<ReverseFieldArgs>,
}

/// Changes to the inverse side of an existing relation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateReverseFieldArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_api_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_hidden: Option<bool>,
}

/// Sparse update of a relational field.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateRelationalFieldArgs {
    pub api_id: String,
    pub new_api_id: Option<String>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub is_required: Option<bool>,
    pub is_unique: Option<bool>,
    pub visibility: Option<VisibilityType>,
    pub position: Option<i32>,
    pub reverse_field: Option<UpdateReverseFieldArgs>,
}

// =============================================================================
// Union fields
// =============================================================================

/// Explicit definition of the inverse side of a union.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UnionReverseFieldArgs {
    pub api_id: String,
    pub display_name: Option<String>,
    pub description: Option<String>,
}

/// Arguments for creating a union over several target models.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UnionFieldArgs {
    pub api_id: String,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub models: Vec<String>,
    pub relation_type: Option<RelationType>,
    pub visibility: Option<VisibilityType>,
    pub position: Option<i32>,
    pub reverse_field: Option<UnionReverseFieldArgs>,
}

/// Sparse update of a union field.
///
/// `models`, when given, replaces the set of member models.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateUnionFieldArgs {
    pub api_id: String,
    pub new_api_id: Option<String>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub visibility: Option<VisibilityType>,
    pub position: Option<i32>,
    pub models: Option<Vec<String>>,
    pub reverse_field: Option<UpdateReverseFieldArgs>,
}

// =============================================================================
// Enumerable fields
// =============================================================================

/// Arguments for creating a field backed by an enumeration.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnumerableFieldArgs {
    pub api_id: String,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub enumeration_api_id: Option<String>,
    pub is_list: Option<bool>,
    pub is_required: Option<bool>,
    pub is_unique: Option<bool>,
    pub is_localized: Option<bool>,
    pub is_title: Option<bool>,
    pub visibility: Option<VisibilityType>,
    pub position: Option<i32>,
    pub initial_value: Option<String>,
}

/// Sparse update of an enumerable field.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateEnumerableFieldArgs {
    pub api_id: String,
    pub new_api_id: Option<String>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub is_list: Option<bool>,
    pub is_required: Option<bool>,
    pub is_unique: Option<bool>,
    pub is_localized: Option<bool>,
    pub is_title: Option<bool>,
    pub visibility: Option<VisibilityType>,
    pub position: Option<i32>,
    pub initial_value: Option<String>,
}
