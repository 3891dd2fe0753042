//! Error types for migration building and batch rendering.

use thiserror::Error;

use crate::model::SimpleFieldType;

/// Broad classification of a [`MigrationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// M001: Caller supplied arguments that cannot be normalized
    InvalidArguments,
    /// M002: Operation is not defined for the given field type
    UnsupportedOperation,
    /// M003: A resolved payload could not be rendered
    Rendering,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "M001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::InvalidArguments => "M001",
            ErrorCode::UnsupportedOperation => "M002",
            ErrorCode::Rendering => "M003",
        }
    }
}

/// Error raised while normalizing a builder operation or rendering a batch.
///
/// Every variant is raised before a change is registered, so a failed
/// operation leaves the session untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MigrationError {
    // === M001: Invalid arguments ===
    #[error("[M001] remote field {field:?}: headers must be a key-value mapping ({reason})")]
    MalformedHeaders { field: String, reason: String },

    #[error("[M001] union field {field:?}: models cannot be empty")]
    EmptyUnionModels { field: String },

    #[error("[M001] relational field {field:?}: target model is required")]
    MissingRelationTarget { field: String },

    #[error("[M001] enumerable field {field:?}: enumerationApiId is required")]
    MissingEnumerationApiId { field: String },

    #[error("[M001] field {field:?}: {bound} bound {value} is not a whole number")]
    NonIntegralBound {
        field: String,
        bound: &'static str,
        value: f64,
    },

    #[error("[M001] field {field:?}: validations require the field type to be given")]
    ValidationTypeRequired { field: String },

    #[error("[M001] enumeration {enumeration:?} must declare at least one value")]
    EmptyEnumeration { enumeration: String },

    // === M002: Unsupported operation ===
    #[error("[M002] field {field:?}: validations are not supported for type {data_type:?}")]
    UnsupportedValidationType {
        field: String,
        data_type: SimpleFieldType,
    },

    // === M003: Rendering ===
    #[error("[M003] failed to render change payload: {0}")]
    Serialization(String),
}

impl MigrationError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            MigrationError::UnsupportedValidationType { .. } => ErrorCode::UnsupportedOperation,
            MigrationError::Serialization(_) => ErrorCode::Rendering,
            _ => ErrorCode::InvalidArguments,
        }
    }
}

impl From<serde_json::Error> for MigrationError {
    fn from(err: serde_json::Error) -> Self {
        MigrationError::Serialization(err.to_string())
    }
}
