//! Data model for schema migrations.
//!
//! This module contains the types a migration is described with:
//! - Closed wire enumerations (field types, relation kinds, renderers)
//! - Caller arguments, per field category
//! - Resolved payloads, shaped like the management API inputs
//! - Change items and the session change log
//! - The per-model field builder

pub mod args;
pub mod builder;
pub mod change;
pub mod input;
pub mod types;

pub use args::{
    EnumerableFieldArgs, EnumerationArgs, EnumerationValue, ModelArgs, RelationalFieldArgs,
    RemoteConfigArgs, RemoteFieldArgs, ReverseFieldArgs, SimpleFieldArgs, UnionFieldArgs,
    UnionReverseFieldArgs, UpdateEnumerableFieldArgs, UpdateEnumerationArgs,
    UpdateEnumerationValue, UpdateModelArgs, UpdateRelationalFieldArgs, UpdateRemoteFieldArgs,
    UpdateReverseFieldArgs, UpdateSimpleFieldArgs, UpdateUnionFieldArgs,
};
pub use builder::ModelBuilder;
pub use change::{ChangeItem, ChangeListener, ChangeTarget};
pub use input::{
    CreateEnumerableFieldInput, CreateRelationalFieldInput, CreateRemoteFieldInput,
    CreateSimpleFieldInput, CreateUnionFieldInput, DeleteByApiIdInput, DeleteFieldInput,
    RemoteConfigInput, RemoteHeaders, ReverseRelationalFieldInput, ReverseUnionFieldInput,
    UpdateEnumerableFieldInput, UpdateRelationalFieldInput, UpdateRemoteConfigInput,
    UpdateRemoteFieldInput, UpdateReverseUnionFieldInput, UpdateSimpleFieldInput,
    UpdateUnionFieldInput,
};
pub use types::{
    ASSET_MODEL_API_ID, FieldType, FormRenderer, MutationMode, RelationType, RelationalFieldType,
    RemoteFieldApiMethod, RemoteFieldType, SimpleFieldType, VisibilityType,
};
