//! Fluent builder for field operations on one model.
//!
//! A [`ModelBuilder`] is handed out by a [`crate::Migration`] and borrows
//! its change log. Every operation normalizes its arguments, builds one
//! [`ChangeItem`] and registers it, then returns the builder for chaining.
//! A failing operation registers nothing.
//!
//! # Example
//!
//! ```rust
//! use cms_migrate::{Migration, ModelArgs, RelationType, RelationalFieldArgs, SimpleFieldArgs, SimpleFieldType};
//!
//! let mut migration = Migration::new();
//! migration
//!     .create_model(ModelArgs {
//!         api_id: "Post".to_string(),
//!         api_id_plural: Some("Posts".to_string()),
//!         display_name: Some("Post".to_string()),
//!         ..Default::default()
//!     })?
//!     .add_simple_field(SimpleFieldArgs::new("title", SimpleFieldType::String))?
//!     .add_relational_field(RelationalFieldArgs {
//!         api_id: "author".to_string(),
//!         model: "Author".to_string(),
//!         relation_type: Some(RelationType::ManyToOne),
//!         ..Default::default()
//!     })?;
//!
//! assert_eq!(migration.changes().len(), 3);
//! # Ok::<(), cms_migrate::MigrationError>(())
//! ```

use serde::Serialize;

use crate::error::MigrationError;
use crate::model::{
    ChangeItem, ChangeListener, ChangeTarget, DeleteFieldInput, EnumerableFieldArgs, FieldType,
    MutationMode, RelationalFieldArgs, RemoteFieldArgs, SimpleFieldArgs, UnionFieldArgs,
    UpdateEnumerableFieldArgs, UpdateRelationalFieldArgs, UpdateRemoteFieldArgs,
    UpdateSimpleFieldArgs, UpdateUnionFieldArgs,
};
use crate::normalize;

/// Builder for the fields of a single model.
#[derive(Debug)]
pub struct ModelBuilder<'a> {
    api_id: String,
    listener: &'a mut ChangeListener,
}

impl<'a> ModelBuilder<'a> {
    /// Creates a builder for `api_id` that registers into `listener`.
    pub fn new(api_id: impl Into<String>, listener: &'a mut ChangeListener) -> Self {
        Self {
            api_id: api_id.into(),
            listener,
        }
    }

    /// The api id injected as `modelApiId` into every field payload.
    pub fn api_id(&self) -> &str {
        &self.api_id
    }

    fn register<T: Serialize>(
        &mut self,
        mode: MutationMode,
        target: ChangeTarget,
        payload: &T,
    ) -> Result<&mut Self, MigrationError> {
        let item = ChangeItem::new(mode, target, payload)?;
        self.listener.register_change(item);
        Ok(self)
    }

    // =========================================================================
    // Simple fields
    // =========================================================================

    /// Adds a scalar field.
    pub fn add_simple_field(&mut self, args: SimpleFieldArgs) -> Result<&mut Self, MigrationError> {
        let input = normalize::simple_field(&self.api_id, &args)?;
        self.register(
            MutationMode::Create,
            ChangeTarget::TypedField(FieldType::SimpleField),
            &input,
        )
    }

    /// Updates a scalar field. A `type` in the arguments is never sent.
    pub fn update_simple_field(
        &mut self,
        args: UpdateSimpleFieldArgs,
    ) -> Result<&mut Self, MigrationError> {
        let input = normalize::update_simple_field(&self.api_id, &args)?;
        self.register(
            MutationMode::Update,
            ChangeTarget::TypedField(FieldType::SimpleField),
            &input,
        )
    }

    // =========================================================================
    // Remote fields
    // =========================================================================

    /// Adds a field resolved from a remote endpoint.
    pub fn add_remote_field(&mut self, args: RemoteFieldArgs) -> Result<&mut Self, MigrationError> {
        let input = normalize::remote_field(&self.api_id, &args)?;
        self.register(
            MutationMode::Create,
            ChangeTarget::TypedField(FieldType::RemoteField),
            &input,
        )
    }

    pub fn update_remote_field(
        &mut self,
        args: UpdateRemoteFieldArgs,
    ) -> Result<&mut Self, MigrationError> {
        let input = normalize::update_remote_field(&self.api_id, &args)?;
        self.register(
            MutationMode::Update,
            ChangeTarget::TypedField(FieldType::RemoteField),
            &input,
        )
    }

    // =========================================================================
    // Relational and union fields
    // =========================================================================

    /// Adds a relation to another model, or to assets. Fails if a plain
    /// relation names no target model.
    pub fn add_relational_field(
        &mut self,
        args: RelationalFieldArgs,
    ) -> Result<&mut Self, MigrationError> {
        let input = normalize::relational_field(&self.api_id, &args)?;
        self.register(
            MutationMode::Create,
            ChangeTarget::TypedField(FieldType::RelationalField),
            &input,
        )
    }

    pub fn update_relational_field(
        &mut self,
        args: UpdateRelationalFieldArgs,
    ) -> Result<&mut Self, MigrationError> {
        let input = normalize::update_relational_field(&self.api_id, &args);
        self.register(
            MutationMode::Update,
            ChangeTarget::TypedField(FieldType::RelationalField),
            &input,
        )
    }

    /// Adds a union over several models. Fails if `models` is empty.
    pub fn add_union_field(&mut self, args: UnionFieldArgs) -> Result<&mut Self, MigrationError> {
        let input = normalize::union_field(&self.api_id, &args)?;
        self.register(
            MutationMode::Create,
            ChangeTarget::TypedField(FieldType::UnionField),
            &input,
        )
    }

    pub fn update_union_field(
        &mut self,
        args: UpdateUnionFieldArgs,
    ) -> Result<&mut Self, MigrationError> {
        let input = normalize::update_union_field(&self.api_id, &args);
        self.register(
            MutationMode::Update,
            ChangeTarget::TypedField(FieldType::UnionField),
            &input,
        )
    }

    // =========================================================================
    // Enumerable fields
    // =========================================================================

    /// Adds a field backed by an enumeration. Fails if none is named.
    pub fn add_enumerable_field(
        &mut self,
        args: EnumerableFieldArgs,
    ) -> Result<&mut Self, MigrationError> {
        let input = normalize::enumerable_field(&self.api_id, &args)?;
        self.register(
            MutationMode::Create,
            ChangeTarget::TypedField(FieldType::EnumerableField),
            &input,
        )
    }

    pub fn update_enumerable_field(
        &mut self,
        args: UpdateEnumerableFieldArgs,
    ) -> Result<&mut Self, MigrationError> {
        let input = normalize::update_enumerable_field(&self.api_id, &args);
        self.register(
            MutationMode::Update,
            ChangeTarget::TypedField(FieldType::EnumerableField),
            &input,
        )
    }

    // =========================================================================
    // Deletion
    // =========================================================================

    /// Deletes a field of any category.
    pub fn delete_field(&mut self, api_id: impl Into<String>) -> Result<&mut Self, MigrationError> {
        let input = DeleteFieldInput {
            api_id: api_id.into(),
            model_api_id: self.api_id.clone(),
        };
        self.register(MutationMode::Delete, ChangeTarget::Field, &input)
    }
}
