//! Change items and the ordered change log of a migration session.
//!
//! A [`ChangeItem`] pairs a [`MutationMode`] with a resolved payload. The
//! payload is rendered to its JSON object form when the item is built, so an
//! item is immutable from then on. [`ChangeListener`] is an append-only log
//! of items in registration order, which is also submission order.

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::MigrationError;
use crate::model::{FieldType, MutationMode};

/// Payload key that identifies the target rather than changing it.
const IDENTITY_KEY: &str = "apiId";

/// What a change acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeTarget {
    Model,
    Enumeration,
    /// A field of any category. Deletion does not distinguish categories.
    Field,
    /// A field of a known category.
    TypedField(FieldType),
}

impl ChangeTarget {
    fn name(self) -> &'static str {
        match self {
            ChangeTarget::Model => "Model",
            ChangeTarget::Enumeration => "Enumeration",
            ChangeTarget::Field => "Field",
            ChangeTarget::TypedField(field_type) => field_type.as_str(),
        }
    }
}

/// One resolved mutation, ready to be rendered as a change descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeItem {
    mode: MutationMode,
    target: ChangeTarget,
    payload: Map<String, Value>,
}

impl ChangeItem {
    /// Builds an item from a resolved payload.
    ///
    /// Fails only if the payload does not render to a JSON object.
    pub fn new<T: Serialize>(
        mode: MutationMode,
        target: ChangeTarget,
        payload: &T,
    ) -> Result<Self, MigrationError> {
        match serde_json::to_value(payload)? {
            Value::Object(payload) => Ok(Self {
                mode,
                target,
                payload,
            }),
            other => Err(MigrationError::Serialization(format!(
                "payload must be an object, found {other}"
            ))),
        }
    }

    pub fn mode(&self) -> MutationMode {
        self.mode
    }

    pub fn target(&self) -> ChangeTarget {
        self.target
    }

    /// The resolved payload, as it will be submitted.
    pub fn payload(&self) -> &Map<String, Value> {
        &self.payload
    }

    /// Descriptor key, e.g. `createSimpleField` or `deleteModel`.
    pub fn action(&self) -> String {
        format!("{}{}", self.mode.prefix(), self.target.name())
    }

    /// Returns true if submitting this item would change anything.
    ///
    /// Creates and deletes always do. An update does unless its payload is
    /// exactly `{apiId}`. Any other key, including the `modelApiId` of a
    /// field update, counts as a change.
    pub fn has_changes(&self) -> bool {
        match self.mode {
            MutationMode::Create | MutationMode::Delete => true,
            MutationMode::Update => self
                .payload
                .keys()
                .any(|key| key.as_str() != IDENTITY_KEY),
        }
    }

    /// Renders the single-key change descriptor `{action: payload}`.
    pub fn generate_change(self) -> Value {
        let mut descriptor = Map::with_capacity(1);
        descriptor.insert(self.action(), Value::Object(self.payload));
        Value::Object(descriptor)
    }
}

/// Append-only, ordered log of the changes of one migration session.
#[derive(Debug, Clone, Default)]
pub struct ChangeListener {
    changes: Vec<ChangeItem>,
}

impl ChangeListener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an item. Ineffective updates are kept; consumers filter.
    pub fn register_change(&mut self, item: ChangeItem) {
        debug!(
            action = %item.action(),
            position = self.changes.len(),
            effective = item.has_changes(),
            "registered change"
        );
        self.changes.push(item);
    }

    /// All registered items, in registration order.
    pub fn changes(&self) -> &[ChangeItem] {
        &self.changes
    }

    /// Items that would change something, in registration order.
    pub fn effective_changes(&self) -> impl Iterator<Item = &ChangeItem> {
        self.changes.iter().filter(|item| item.has_changes())
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Consumes the log, yielding its items in order.
    pub fn into_changes(self) -> Vec<ChangeItem> {
        self.changes
    }
}
