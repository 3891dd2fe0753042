//! Declarative schema migrations for a headless CMS management API.
//!
//! This crate turns high-level descriptions of model and field changes into
//! the fully-resolved change descriptors the management API's batch
//! mutation expects. It does not talk to the network: a [`Transport`]
//! implementation submits the rendered [`MigrationBatch`].
//!
//! # Overview
//!
//! - **Declarative**: callers state what a field should look like, the
//!   builder derives everything the backend needs (reverse relation sides,
//!   list-ness, type-specific validations, header shapes)
//! - **Fail-fast**: invalid arguments are rejected at the call that supplied
//!   them, and nothing is registered for a failed call
//! - **Ordered**: changes are submitted in the order they were described, so
//!   later changes may refer to models created earlier in the same batch
//!
//! # Quick Start
//!
//! ```rust
//! use cms_migrate::{Migration, ModelArgs, SimpleFieldArgs, SimpleFieldType, UnionFieldArgs};
//! use serde_json::json;
//!
//! let mut migration = Migration::new();
//! migration
//!     .create_model(ModelArgs {
//!         api_id: "Page".to_string(),
//!         api_id_plural: Some("Pages".to_string()),
//!         ..Default::default()
//!     })?
//!     .add_simple_field(SimpleFieldArgs::new("title", SimpleFieldType::String))?;
//!
//! // Fails before anything is registered.
//! let mut page = migration.model("Page");
//! let result = page.add_union_field(UnionFieldArgs {
//!     api_id: "content".to_string(),
//!     models: vec![],
//!     ..Default::default()
//! });
//! assert!(result.is_err());
//!
//! let changes = migration.dry_run();
//! assert_eq!(changes.len(), 2);
//! assert_eq!(changes[1]["createSimpleField"]["formRenderer"], json!("GCMS_SINGLE_LINE"));
//! # Ok::<(), cms_migrate::MigrationError>(())
//! ```
//!
//! # Modules
//!
//! - [`model`]: Arguments, resolved payloads, change items, model builder
//! - [`normalize`]: Per-category argument resolution
//! - [`validate`]: Type-specific validation extraction
//! - [`migration`]: Sessions, batches and the transport seam
//! - [`error`]: Error types

pub mod error;
pub mod migration;
pub mod model;
pub mod normalize;
pub mod validate;

// Re-export commonly used types at crate root
pub use error::{ErrorCode, MigrationError};
pub use migration::{Migration, MigrationBatch, MigrationOptions, Transport};
pub use model::{
    ChangeItem, ChangeListener, ChangeTarget, EnumerableFieldArgs, EnumerationArgs,
    EnumerationValue, FieldType, FormRenderer, ModelArgs, ModelBuilder, MutationMode,
    RelationType, RelationalFieldArgs, RelationalFieldType, RemoteConfigArgs,
    RemoteFieldApiMethod, RemoteFieldArgs, ReverseFieldArgs, SimpleFieldArgs, SimpleFieldType,
    UnionFieldArgs, UnionReverseFieldArgs, UpdateEnumerableFieldArgs, UpdateEnumerationArgs,
    UpdateEnumerationValue, UpdateModelArgs, UpdateRelationalFieldArgs, UpdateRemoteFieldArgs,
    UpdateReverseFieldArgs, UpdateSimpleFieldArgs, UpdateUnionFieldArgs, VisibilityType,
};
pub use validate::{
    CountValidation, FieldValidations, PatternValidation, RangeValidation, SimpleFieldValidations,
    extract_validations,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
