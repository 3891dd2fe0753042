//! Remote field normalization.

use serde_json::Value;

use crate::error::MigrationError;
use crate::model::{
    CreateRemoteFieldInput, RemoteConfigArgs, RemoteConfigInput, RemoteFieldArgs, RemoteFieldType,
    RemoteHeaders, UpdateRemoteConfigInput, UpdateRemoteFieldArgs, UpdateRemoteFieldInput,
};

/// Coerces a caller header mapping into the multi-value wire shape.
///
/// Absent headers become an empty mapping. Scalar values are wrapped in a
/// one-element list; list values are kept as they are, so normalizing an
/// already-normalized mapping is a no-op. Anything but a flat mapping of
/// strings, numbers, booleans, or lists of those is rejected.
pub fn normalize_headers(field: &str, headers: Option<&Value>) -> Result<RemoteHeaders, MigrationError> {
    let map = match headers {
        None | Some(Value::Null) => return Ok(RemoteHeaders::new()),
        Some(Value::Object(map)) => map,
        Some(other) => {
            return Err(malformed(field, format!("expected an object, found {}", kind(other))));
        }
    };

    let mut out = RemoteHeaders::new();
    for (name, value) in map {
        let values = match value {
            Value::Array(items) => items
                .iter()
                .map(|item| scalar(field, name, item))
                .collect::<Result<Vec<_>, _>>()?,
            single => vec![scalar(field, name, single)?],
        };
        out.insert(name.clone(), values);
    }
    Ok(out)
}

fn scalar(field: &str, name: &str, value: &Value) -> Result<String, MigrationError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(malformed(
            field,
            format!("header {name:?} has a nested {} value", kind(other)),
        )),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn malformed(field: &str, reason: String) -> MigrationError {
    MigrationError::MalformedHeaders {
        field: field.to_string(),
        reason,
    }
}

fn remote_config(field: &str, config: &RemoteConfigArgs) -> Result<RemoteConfigInput, MigrationError> {
    Ok(RemoteConfigInput {
        url: config.url.clone(),
        method: config.method.unwrap_or_default(),
        headers: normalize_headers(field, config.headers.as_ref())?,
        payload_field_api_ids: config.payload_field_api_ids.clone().unwrap_or_default(),
        forward_client_headers: config.forward_client_headers,
        cache_ttl_seconds: config.cache_ttl_seconds,
    })
}

/// Resolves a remote field create. The wire type is always `REMOTE`.
pub fn remote_field(
    model_api_id: &str,
    args: &RemoteFieldArgs,
) -> Result<CreateRemoteFieldInput, MigrationError> {
    Ok(CreateRemoteFieldInput {
        model_api_id: model_api_id.to_string(),
        api_id: args.api_id.clone(),
        field_type: RemoteFieldType::Remote,
        display_name: args.display_name.clone(),
        description: args.description.clone(),
        is_list: args.is_list,
        is_required: args.is_required,
        visibility: args.visibility,
        position: args.position,
        return_type_api_id: args.return_type_api_id.clone(),
        remote_config: remote_config(&args.api_id, &args.remote_config)?,
    })
}

/// Resolves a remote field update. Only headers are coerced; nothing is
/// defaulted, so unset attributes stay untouched on the backend.
pub fn update_remote_field(
    model_api_id: &str,
    args: &UpdateRemoteFieldArgs,
) -> Result<UpdateRemoteFieldInput, MigrationError> {
    let remote_config = match &args.remote_config {
        Some(config) => Some(UpdateRemoteConfigInput {
            url: config.url.clone(),
            method: config.method,
            headers: config
                .headers
                .as_ref()
                .map(|h| normalize_headers(&args.api_id, Some(h)))
                .transpose()?,
            payload_field_api_ids: config.payload_field_api_ids.clone(),
            forward_client_headers: config.forward_client_headers,
            cache_ttl_seconds: config.cache_ttl_seconds,
        }),
        None => None,
    };

    Ok(UpdateRemoteFieldInput {
        model_api_id: model_api_id.to_string(),
        api_id: args.api_id.clone(),
        new_api_id: args.new_api_id.clone(),
        display_name: args.display_name.clone(),
        description: args.description.clone(),
        is_list: args.is_list,
        visibility: args.visibility,
        position: args.position,
        remote_config,
    })
}
