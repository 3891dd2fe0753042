//! Validation extraction for simple fields.
//!
//! Callers describe validations generically (a numeric range, a character
//! count, match patterns). The management API instead expects a structure
//! keyed by the field's scalar type: `{"Int": {...}}`, `{"Float": {...}}` or
//! `{"String": {...}}`. [`extract_validations`] performs that translation.
//!
//! Only numeric and string fields can carry validations. Any other type is
//! rejected with [`MigrationError::UnsupportedValidationType`].

use serde::{Deserialize, Serialize};

use crate::error::MigrationError;
use crate::model::SimpleFieldType;

/// Type-agnostic validation request as written by the caller.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldValidations {
    /// Numeric bounds (Int and Float fields).
    pub range: Option<RangeValidation>,
    /// Length bounds (String fields).
    pub characters: Option<CountValidation>,
    /// Pattern the value must match (String fields).
    pub matches: Option<PatternValidation>,
    /// Pattern the value must not match (String fields).
    pub not_matches: Option<PatternValidation>,
    /// Item count bounds, applied only to list fields.
    pub list_item_count: Option<CountValidation>,
}

/// Numeric bounds as requested by the caller.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RangeValidation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// Count bounds, used for character counts and list sizes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CountValidation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// A regular expression constraint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PatternValidation {
    pub regex: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub flags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// Integer bounds on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// Validations for Int fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntFieldValidations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<IntRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_item_count: Option<CountValidation>,
}

/// Validations for Float fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FloatFieldValidations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<RangeValidation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_item_count: Option<CountValidation>,
}

/// Validations for String fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StringFieldValidations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub characters: Option<CountValidation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matches: Option<PatternValidation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_matches: Option<PatternValidation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_item_count: Option<CountValidation>,
}

/// Type-specific validation structure, serialized as a single-key object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SimpleFieldValidations {
    Int(IntFieldValidations),
    Float(FloatFieldValidations),
    String(StringFieldValidations),
}

/// Translates a generic validation request into the structure required for
/// `data_type`.
///
/// Returns `Ok(None)` when no validations were requested. The list item
/// count is only carried over for list fields.
pub fn extract_validations(
    field: &str,
    data_type: SimpleFieldType,
    is_list: bool,
    request: Option<&FieldValidations>,
) -> Result<Option<SimpleFieldValidations>, MigrationError> {
    let Some(request) = request else {
        return Ok(None);
    };
    let list_item_count = if is_list {
        request.list_item_count.clone()
    } else {
        None
    };

    let validations = match data_type {
        SimpleFieldType::Int => SimpleFieldValidations::Int(IntFieldValidations {
            range: request
                .range
                .as_ref()
                .map(|r| int_range(field, r))
                .transpose()?,
            list_item_count,
        }),
        SimpleFieldType::Float => SimpleFieldValidations::Float(FloatFieldValidations {
            range: request.range.clone(),
            list_item_count,
        }),
        SimpleFieldType::String => SimpleFieldValidations::String(StringFieldValidations {
            characters: request.characters.clone(),
            matches: request.matches.clone(),
            not_matches: request.not_matches.clone(),
            list_item_count,
        }),
        other => {
            return Err(MigrationError::UnsupportedValidationType {
                field: field.to_string(),
                data_type: other,
            });
        }
    };
    Ok(Some(validations))
}

fn int_range(field: &str, range: &RangeValidation) -> Result<IntRange, MigrationError> {
    Ok(IntRange {
        min: range.min.map(|v| whole(field, "min", v)).transpose()?,
        max: range.max.map(|v| whole(field, "max", v)).transpose()?,
        error_message: range.error_message.clone(),
    })
}

fn whole(field: &str, bound: &'static str, value: f64) -> Result<i64, MigrationError> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Ok(value as i64)
    } else {
        Err(MigrationError::NonIntegralBound {
            field: field.to_string(),
            bound,
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn request() -> FieldValidations {
        FieldValidations {
            range: Some(RangeValidation {
                min: Some(1.0),
                max: Some(10.0),
                error_message: None,
            }),
            characters: Some(CountValidation {
                min: Some(3),
                max: Some(80),
                error_message: Some("too long".to_string()),
            }),
            matches: Some(PatternValidation {
                regex: "^[a-z]+$".to_string(),
                ..Default::default()
            }),
            not_matches: None,
            list_item_count: Some(CountValidation {
                min: Some(1),
                max: None,
                error_message: None,
            }),
        }
    }

    #[test]
    fn test_no_request() {
        let v = extract_validations("f", SimpleFieldType::Boolean, false, None).unwrap();
        assert!(v.is_none());
    }

    #[test]
    fn test_int_range() {
        let v = extract_validations("count", SimpleFieldType::Int, false, Some(&request()))
            .unwrap()
            .unwrap();
        assert_eq!(
            serde_json::to_value(&v).unwrap(),
            json!({"Int": {"range": {"min": 1, "max": 10}}})
        );
    }

    #[test]
    fn test_float_list() {
        let v = extract_validations("scores", SimpleFieldType::Float, true, Some(&request()))
            .unwrap()
            .unwrap();
        assert_eq!(
            serde_json::to_value(&v).unwrap(),
            json!({"Float": {"range": {"min": 1.0, "max": 10.0}, "listItemCount": {"min": 1}}})
        );
    }

    #[test]
    fn test_string_drops_range() {
        let v = extract_validations("slug", SimpleFieldType::String, false, Some(&request()))
            .unwrap()
            .unwrap();
        match v {
            SimpleFieldValidations::String(s) => {
                assert_eq!(s.characters.as_ref().and_then(|c| c.max), Some(80));
                assert_eq!(s.matches.as_ref().map(|m| m.regex.as_str()), Some("^[a-z]+$"));
                assert!(s.not_matches.is_none());
                assert!(s.list_item_count.is_none());
            }
            _ => panic!("Expected String validations"),
        }
    }

    #[test]
    fn test_unsupported_type() {
        for ty in [SimpleFieldType::Boolean, SimpleFieldType::Json, SimpleFieldType::Date] {
            let result = extract_validations("x", ty, false, Some(&request()));
            assert!(matches!(
                result,
                Err(MigrationError::UnsupportedValidationType { data_type, .. }) if data_type == ty
            ));
        }
    }

    #[test]
    fn test_int_rejects_fraction() {
        let req = FieldValidations {
            range: Some(RangeValidation {
                min: Some(0.5),
                ..Default::default()
            }),
            ..Default::default()
        };
        let result = extract_validations("count", SimpleFieldType::Int, false, Some(&req));
        assert!(matches!(
            result,
            Err(MigrationError::NonIntegralBound { bound: "min", .. })
        ));
    }
}
