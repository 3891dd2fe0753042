//! Migration sessions.
//!
//! A [`Migration`] owns the change log of one logical batch. Model and
//! enumeration operations are registered directly on it; field operations
//! go through the [`ModelBuilder`] it hands out. Once described, the session
//! is rendered into a [`MigrationBatch`] and handed to a [`Transport`].

use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::error::MigrationError;
use crate::model::{
    ChangeItem, ChangeListener, ChangeTarget, DeleteByApiIdInput, EnumerationArgs, ModelArgs,
    ModelBuilder, MutationMode, UpdateEnumerationArgs, UpdateModelArgs,
};
use crate::normalize;

/// Options for a migration session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationOptions {
    /// Name sent along with the batch.
    pub name: Option<String>,
    /// Leave updates that change nothing out of the submitted batch.
    ///
    /// They are still kept in [`Migration::changes`].
    pub skip_empty_updates: bool,
}

impl Default for MigrationOptions {
    fn default() -> Self {
        Self {
            name: None,
            skip_empty_updates: true,
        }
    }
}

impl MigrationOptions {
    /// Creates default options: unnamed, empty updates skipped.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates default options with a batch name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// The request body for one batch submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MigrationBatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Change descriptors, in submission order.
    pub changes: Vec<Value>,
}

impl MigrationBatch {
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

/// Submits a rendered batch to the backend.
///
/// Implementations own retries, authentication and response handling.
pub trait Transport {
    type Response;
    type Error;

    fn submit(&mut self, batch: &MigrationBatch) -> Result<Self::Response, Self::Error>;
}

/// One migration session.
#[derive(Debug, Clone, Default)]
pub struct Migration {
    options: MigrationOptions,
    listener: ChangeListener,
}

impl Migration {
    /// Creates a session with default options.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: MigrationOptions) -> Self {
        Self {
            options,
            listener: ChangeListener::new(),
        }
    }

    pub fn options(&self) -> &MigrationOptions {
        &self.options
    }

    fn register<T: Serialize>(
        &mut self,
        mode: MutationMode,
        target: ChangeTarget,
        payload: &T,
    ) -> Result<(), MigrationError> {
        let item = ChangeItem::new(mode, target, payload)?;
        self.listener.register_change(item);
        Ok(())
    }

    // =========================================================================
    // Models
    // =========================================================================

    /// Creates a model and returns a builder for its fields.
    pub fn create_model(&mut self, args: ModelArgs) -> Result<ModelBuilder<'_>, MigrationError> {
        self.register(MutationMode::Create, ChangeTarget::Model, &args)?;
        Ok(ModelBuilder::new(args.api_id, &mut self.listener))
    }

    /// Updates a model and returns a builder for its fields.
    ///
    /// If the model is renamed, the builder targets the new api id, since
    /// later changes in the batch are applied after the rename.
    pub fn update_model(&mut self, args: UpdateModelArgs) -> Result<ModelBuilder<'_>, MigrationError> {
        self.register(MutationMode::Update, ChangeTarget::Model, &args)?;
        let api_id = args.new_api_id.unwrap_or(args.api_id);
        Ok(ModelBuilder::new(api_id, &mut self.listener))
    }

    /// Returns a builder for an existing model without registering anything.
    pub fn model(&mut self, api_id: impl Into<String>) -> ModelBuilder<'_> {
        ModelBuilder::new(api_id, &mut self.listener)
    }

    pub fn delete_model(&mut self, api_id: impl Into<String>) -> Result<&mut Self, MigrationError> {
        let input = DeleteByApiIdInput { api_id: api_id.into() };
        self.register(MutationMode::Delete, ChangeTarget::Model, &input)?;
        Ok(self)
    }

    // =========================================================================
    // Enumerations
    // =========================================================================

    /// Creates an enumeration. It must declare at least one value.
    pub fn create_enumeration(&mut self, args: EnumerationArgs) -> Result<&mut Self, MigrationError> {
        normalize::check_enumeration(&args)?;
        self.register(MutationMode::Create, ChangeTarget::Enumeration, &args)?;
        Ok(self)
    }

    pub fn update_enumeration(
        &mut self,
        args: UpdateEnumerationArgs,
    ) -> Result<&mut Self, MigrationError> {
        self.register(MutationMode::Update, ChangeTarget::Enumeration, &args)?;
        Ok(self)
    }

    pub fn delete_enumeration(&mut self, api_id: impl Into<String>) -> Result<&mut Self, MigrationError> {
        let input = DeleteByApiIdInput { api_id: api_id.into() };
        self.register(MutationMode::Delete, ChangeTarget::Enumeration, &input)?;
        Ok(self)
    }

    // =========================================================================
    // Output
    // =========================================================================

    /// Every registered change, effective or not, in registration order.
    pub fn changes(&self) -> &[ChangeItem] {
        self.listener.changes()
    }

    /// Renders the effective changes without consuming the session.
    pub fn dry_run(&self) -> Vec<Value> {
        self.listener
            .effective_changes()
            .cloned()
            .map(ChangeItem::generate_change)
            .collect()
    }

    /// Consumes the session and renders its batch.
    pub fn into_batch(self) -> MigrationBatch {
        let total = self.listener.len();
        let skip_empty = self.options.skip_empty_updates;
        let changes: Vec<Value> = self
            .listener
            .into_changes()
            .into_iter()
            .filter(|item| !skip_empty || item.has_changes())
            .map(ChangeItem::generate_change)
            .collect();
        info!(
            name = self.options.name.as_deref().unwrap_or(""),
            total,
            submitted = changes.len(),
            "rendered migration batch"
        );
        MigrationBatch {
            name: self.options.name,
            changes,
        }
    }

    /// Consumes the session and submits its batch through `transport`.
    pub fn run<T: Transport>(self, transport: &mut T) -> Result<T::Response, T::Error> {
        let batch = self.into_batch();
        transport.submit(&batch)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::model::{EnumerationValue, SimpleFieldArgs, SimpleFieldType, UpdateSimpleFieldArgs};

    fn status_values() -> Vec<EnumerationValue> {
        vec![
            EnumerationValue {
                api_id: "draft".to_string(),
                display_name: Some("Draft".to_string()),
            },
            EnumerationValue {
                api_id: "live".to_string(),
                display_name: None,
            },
        ]
    }

    #[test]
    fn test_model_lifecycle() {
        let mut migration = Migration::new();
        migration
            .create_model(ModelArgs {
                api_id: "Post".to_string(),
                api_id_plural: Some("Posts".to_string()),
                ..Default::default()
            })
            .unwrap();
        migration.delete_model("Legacy").unwrap();

        assert_eq!(
            migration.dry_run(),
            vec![
                json!({"createModel": {"apiId": "Post", "apiIdPlural": "Posts"}}),
                json!({"deleteModel": {"apiId": "Legacy"}}),
            ]
        );
    }

    #[test]
    fn test_renamed_model_builder_targets_new_id() {
        let mut migration = Migration::new();
        migration
            .update_model(UpdateModelArgs {
                api_id: "Post".to_string(),
                new_api_id: Some("Article".to_string()),
                ..Default::default()
            })
            .unwrap()
            .add_simple_field(SimpleFieldArgs::new("title", SimpleFieldType::String))
            .unwrap();

        assert_eq!(migration.changes()[1].payload()["modelApiId"], "Article");
    }

    #[test]
    fn test_empty_model_update_kept_but_not_submitted() {
        let mut migration = Migration::with_options(MigrationOptions::named("noop"));
        migration
            .update_model(UpdateModelArgs {
                api_id: "Post".to_string(),
                ..Default::default()
            })
            .unwrap()
            .update_simple_field(UpdateSimpleFieldArgs {
                api_id: "title".to_string(),
                data_type: Some(SimpleFieldType::String),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(migration.changes().len(), 2);
        // The field update still names its model, so it is submitted.
        let field_update = json!({"updateSimpleField": {"modelApiId": "Post", "apiId": "title"}});
        assert_eq!(migration.dry_run(), vec![field_update.clone()]);

        let batch = migration.into_batch();
        assert_eq!(
            serde_json::to_value(&batch).unwrap(),
            json!({"name": "noop", "changes": [field_update]})
        );
    }

    #[test]
    fn test_bare_updates_dropped() {
        let mut migration = Migration::new();
        migration
            .update_model(UpdateModelArgs {
                api_id: "Post".to_string(),
                ..Default::default()
            })
            .unwrap();
        migration
            .update_enumeration(UpdateEnumerationArgs {
                api_id: "Status".to_string(),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(migration.changes().len(), 2);
        assert!(migration.into_batch().is_empty());
    }

    #[test]
    fn test_submitting_empty_updates_when_asked() {
        let options = MigrationOptions {
            skip_empty_updates: false,
            ..MigrationOptions::new()
        };
        let mut migration = Migration::with_options(options);
        migration
            .update_model(UpdateModelArgs {
                api_id: "Post".to_string(),
                ..Default::default()
            })
            .unwrap();

        let batch = migration.into_batch();
        assert_eq!(batch.changes, vec![json!({"updateModel": {"apiId": "Post"}})]);
        assert_eq!(batch.name, None);
    }

    #[test]
    fn test_enumerations() {
        let mut migration = Migration::new();
        migration
            .create_enumeration(EnumerationArgs {
                api_id: "Status".to_string(),
                display_name: Some("Status".to_string()),
                values: status_values(),
                ..Default::default()
            })
            .unwrap()
            .update_enumeration(UpdateEnumerationArgs {
                api_id: "Status".to_string(),
                values_to_delete: vec!["live".to_string()],
                ..Default::default()
            })
            .unwrap()
            .delete_enumeration("Old")
            .unwrap();

        let empty = migration.create_enumeration(EnumerationArgs {
            api_id: "Empty".to_string(),
            ..Default::default()
        });
        assert!(matches!(empty, Err(MigrationError::EmptyEnumeration { .. })));

        assert_eq!(
            migration.dry_run(),
            vec![
                json!({"createEnumeration": {
                    "apiId": "Status",
                    "displayName": "Status",
                    "values": [
                        {"apiId": "draft", "displayName": "Draft"},
                        {"apiId": "live"},
                    ],
                }}),
                json!({"updateEnumeration": {"apiId": "Status", "valuesToDelete": ["live"]}}),
                json!({"deleteEnumeration": {"apiId": "Old"}}),
            ]
        );
    }
}
