//! Fully-resolved payloads, shaped like the management API's mutation inputs.
//!
//! Every struct here is produced by a normalizer and never touched again.
//! Unset optional attributes are omitted from the serialized form.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::{
    FormRenderer, RelationalFieldType, RemoteFieldApiMethod, RemoteFieldType, SimpleFieldType,
    UpdateReverseFieldArgs, VisibilityType,
};
use crate::validate::SimpleFieldValidations;

/// Identity of a field to delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteFieldInput {
    pub api_id: String,
    pub model_api_id: String,
}

/// Identity of a model or enumeration to delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteByApiIdInput {
    pub api_id: String,
}

// =============================================================================
// Simple fields
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSimpleFieldInput {
    pub model_api_id: String,
    pub api_id: String,
    #[serde(rename = "type")]
    pub data_type: SimpleFieldType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_list: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_unique: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_localized: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_title: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<VisibilityType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_renderer: Option<FormRenderer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validations: Option<SimpleFieldValidations>,
}

/// Update of a simple field. Has no `type`: updates never change it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSimpleFieldInput {
    pub model_api_id: String,
    pub api_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_api_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_list: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_unique: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_localized: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_title: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<VisibilityType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_renderer: Option<FormRenderer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validations: Option<SimpleFieldValidations>,
}

// =============================================================================
// Remote fields
// =============================================================================

/// Multi-value header mapping, ordered by header name.
pub type RemoteHeaders = BTreeMap<String, Vec<String>>;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteConfigInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub method: RemoteFieldApiMethod,
    pub headers: RemoteHeaders,
    pub payload_field_api_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forward_client_headers: Option<bool>,
    #[serde(rename = "cacheTTLSeconds", skip_serializing_if = "Option::is_none")]
    pub cache_ttl_seconds: Option<i64>,
}

/// Remote config on update: nothing is defaulted, headers are still coerced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRemoteConfigInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<RemoteFieldApiMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<RemoteHeaders>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload_field_api_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forward_client_headers: Option<bool>,
    #[serde(rename = "cacheTTLSeconds", skip_serializing_if = "Option::is_none")]
    pub cache_ttl_seconds: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRemoteFieldInput {
    pub model_api_id: String,
    pub api_id: String,
    #[serde(rename = "type")]
    pub field_type: RemoteFieldType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_list: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<VisibilityType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_type_api_id: Option<String>,
    pub remote_config: RemoteConfigInput,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRemoteFieldInput {
    pub model_api_id: String,
    pub api_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_api_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_list: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<VisibilityType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_config: Option<UpdateRemoteConfigInput>,
}

// =============================================================================
// Relational fields
// =============================================================================

/// Inverse side of a relation, always fully specified on create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReverseRelationalFieldInput {
    pub model_api_id: String,
    pub api_id: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_list: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_hidden: Option<bool>,
}

/// Relation create payload.
///
/// `is_required` is only ever set for asset relations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRelationalFieldInput {
    pub model_api_id: String,
    pub api_id: String,
    #[serde(rename = "type")]
    pub field_type: RelationalFieldType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_list: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_unique: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<VisibilityType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
    pub reverse_field: ReverseRelationalFieldInput,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRelationalFieldInput {
    pub model_api_id: String,
    pub api_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_api_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_unique: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<VisibilityType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reverse_field: Option<UpdateReverseFieldArgs>,
}

// =============================================================================
// Union fields
// =============================================================================

/// Inverse side of a union: one back-reference shared by all member models.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReverseUnionFieldInput {
    pub model_api_ids: Vec<String>,
    pub api_id: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_list: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUnionFieldInput {
    pub model_api_id: String,
    pub api_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_list: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<VisibilityType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
    pub reverse_field: ReverseUnionFieldInput,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReverseUnionFieldInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_api_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_api_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_hidden: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUnionFieldInput {
    pub model_api_id: String,
    pub api_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_api_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<VisibilityType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reverse_field: Option<UpdateReverseUnionFieldInput>,
}

// =============================================================================
// Enumerable fields
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEnumerableFieldInput {
    pub model_api_id: String,
    pub api_id: String,
    pub enumeration_api_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_list: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_unique: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_localized: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_title: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<VisibilityType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEnumerableFieldInput {
    pub model_api_id: String,
    pub api_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_api_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_list: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_unique: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_localized: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_title: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<VisibilityType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<String>,
}
