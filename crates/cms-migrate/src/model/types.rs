//! Closed enumerations shared by argument and payload types.
//!
//! Each enum serializes to the exact string the management API expects, so
//! no wire literal is ever assembled by hand.

use serde::{Deserialize, Serialize};

/// Which backend action a change renders to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationMode {
    Create,
    Update,
    Delete,
}

impl MutationMode {
    /// Returns the action prefix used in change descriptor keys.
    pub fn prefix(self) -> &'static str {
        match self {
            MutationMode::Create => "create",
            MutationMode::Update => "update",
            MutationMode::Delete => "delete",
        }
    }
}

/// Field categories; each has its own normalization rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    SimpleField,
    RemoteField,
    RelationalField,
    UnionField,
    EnumerableField,
}

impl FieldType {
    /// Returns the type name used in change descriptor keys.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::SimpleField => "SimpleField",
            FieldType::RemoteField => "RemoteField",
            FieldType::RelationalField => "RelationalField",
            FieldType::UnionField => "UnionField",
            FieldType::EnumerableField => "EnumerableField",
        }
    }
}

/// Scalar data types of simple fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SimpleFieldType {
    Id,
    String,
    #[serde(rename = "RICHTEXT")]
    RichText,
    Int,
    Float,
    Boolean,
    Json,
    Datetime,
    Date,
    Location,
    Color,
}

impl SimpleFieldType {
    /// Returns true for types rendered through a text input in the editor.
    pub fn is_text(self) -> bool {
        matches!(self, SimpleFieldType::String)
    }
}

/// Editor rendering hints for text fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormRenderer {
    #[serde(rename = "GCMS_SINGLE_LINE")]
    SingleLine,
    #[serde(rename = "GCMS_MULTI_LINE")]
    MultiLine,
    #[serde(rename = "GCMS_MARKDOWN")]
    Markdown,
    #[serde(rename = "GCMS_SLUG")]
    Slug,
}

/// Cardinality of a relation, seen from the owning model.
///
/// Accepts both `ManyToOne` and `MANY_TO_ONE` spellings when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelationType {
    #[default]
    #[serde(alias = "OneToOne")]
    OneToOne,
    #[serde(alias = "OneToMany")]
    OneToMany,
    #[serde(alias = "ManyToOne")]
    ManyToOne,
    #[serde(alias = "ManyToMany")]
    ManyToMany,
}

impl RelationType {
    /// Returns true if the forward side holds a list.
    pub fn forward_is_list(self) -> bool {
        matches!(self, RelationType::OneToMany | RelationType::ManyToMany)
    }

    /// Returns true if the reverse side holds a list.
    pub fn reverse_is_list(self) -> bool {
        matches!(self, RelationType::ManyToOne | RelationType::ManyToMany)
    }
}

/// Wire kind of a relational field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RelationalFieldType {
    Relation,
    Asset,
}

/// Wire kind of a remote field. There is only one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RemoteFieldType {
    #[default]
    Remote,
}

/// HTTP method used to resolve a remote field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RemoteFieldApiMethod {
    #[default]
    Get,
    Post,
}

/// Editor visibility of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VisibilityType {
    ReadWrite,
    ReadOnly,
    Hidden,
    ApiOnly,
}

/// The model name that turns a relational field into an asset relation.
pub const ASSET_MODEL_API_ID: &str = "Asset";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relation_type_list_table() {
        use RelationType::*;
        let table = [
            (OneToOne, false, false),
            (OneToMany, true, false),
            (ManyToOne, false, true),
            (ManyToMany, true, true),
        ];
        for (rt, fwd, rev) in table {
            assert_eq!(rt.forward_is_list(), fwd, "{rt:?} forward");
            assert_eq!(rt.reverse_is_list(), rev, "{rt:?} reverse");
        }
    }

    #[test]
    fn test_relation_type_spellings() {
        let a: RelationType = serde_json::from_str("\"ManyToOne\"").unwrap();
        let b: RelationType = serde_json::from_str("\"MANY_TO_ONE\"").unwrap();
        assert_eq!(a, RelationType::ManyToOne);
        assert_eq!(a, b);
        assert_eq!(serde_json::to_string(&a).unwrap(), "\"MANY_TO_ONE\"");
    }

    #[test]
    fn test_wire_strings() {
        assert_eq!(
            serde_json::to_string(&SimpleFieldType::RichText).unwrap(),
            "\"RICHTEXT\""
        );
        assert_eq!(
            serde_json::to_string(&FormRenderer::SingleLine).unwrap(),
            "\"GCMS_SINGLE_LINE\""
        );
        assert_eq!(
            serde_json::to_string(&RemoteFieldApiMethod::default()).unwrap(),
            "\"GET\""
        );
        assert_eq!(
            serde_json::to_string(&VisibilityType::ApiOnly).unwrap(),
            "\"API_ONLY\""
        );
    }
}
