//! # craft-types: Core types for the Craft policy authoring engine
//!
//! This crate contains shared types used across the Craft system:
//! - Reference data ([`Subject`], [`ActionRef`], [`ResourceRef`])
//! - Attribute schema ([`AttributeDefinition`], [`AttributeConstraints`], [`FieldKind`])
//! - Policy records ([`Policy`], [`PolicyDraft`], [`CompiledRule`])
//! - Shared vocabulary enums ([`Effect`], [`PolicyStatus`], [`RiskLevel`], ...)
//!
//! All wire-facing structs serialize as camelCase JSON to match the backend's
//! REST representation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// Policy vocabulary
// ============================================================================

/// The effect of a policy: grant or refuse access when its rules apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effect {
    /// Grant access.
    Allow,
    /// Refuse access.
    Deny,
}

/// Lifecycle status of a stored policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyStatus {
    /// Policy is enforced.
    Active,
    /// Policy is retained but not enforced.
    Inactive,
    /// Policy is being authored and has never been activated.
    Draft,
}

// ============================================================================
// Subject reference data
// ============================================================================

/// The kind of principal a subject represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectType {
    User,
    Group,
    Role,
}

/// Whether a subject is currently enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectStatus {
    Active,
    Inactive,
}

/// A principal that policies can be authored against.
///
/// Read-only reference data: the authoring engine never mutates subjects,
/// it only selects them and reads their attribute values into conditions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: String,
    pub name: String,
    pub display_name: String,
    #[serde(rename = "type")]
    pub subject_type: SubjectType,
    pub role: String,
    pub department: String,
    pub email: String,
    pub status: SubjectStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// ============================================================================
// Action reference data
// ============================================================================

/// Broad grouping of what an action does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionCategory {
    Read,
    Write,
    Execute,
    Delete,
    Admin,
}

/// How dangerous granting an action is considered to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

/// An operation that a rule can grant. Read-only reference data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRef {
    pub id: String,
    pub name: String,
    pub display_name: String,
    pub category: ActionCategory,
    pub risk_level: RiskLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub active: bool,
}

// ============================================================================
// Resource reference data
// ============================================================================

/// The kind of asset a resource represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    File,
    Document,
    Api,
    Database,
    Service,
    Folder,
    Application,
}

/// Per-resource permission toggles.
///
/// Serialized verbatim as the five-key object the backend stores inside
/// `resourcePermissions` conditions — no flattening into individual keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionFlags {
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub write: bool,
    #[serde(default)]
    pub delete: bool,
    #[serde(default)]
    pub execute: bool,
    #[serde(default)]
    pub admin: bool,
}

impl PermissionFlags {
    /// True when at least one flag is set.
    pub fn any(&self) -> bool {
        self.read || self.write || self.delete || self.execute || self.admin
    }
}

/// An asset that a rule can target. Read-only reference data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRef {
    pub id: String,
    pub name: String,
    pub display_name: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Free-form attribute map attached by the resource owner. Used to seed
    /// the condition form, not interpreted by the compiler.
    #[serde(default)]
    pub attributes: Map<String, Value>,
    /// Default permission toggles shown when this resource is selected.
    #[serde(default)]
    pub permissions: PermissionFlags,
}

// ============================================================================
// Attribute schema
// ============================================================================

/// Which entity an attribute describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeCategory {
    Subject,
    Resource,
    Action,
    Environment,
}

/// Primitive data type of an attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeDataType {
    String,
    Number,
    Boolean,
    Date,
}

/// Value constraints attached to an attribute definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeConstraints {
    /// Closed, ordered set of permitted values. Order is display order and
    /// must be preserved; appends go at the end.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
}

/// Provenance metadata carried on an attribute definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeMetadata {
    pub created_by: String,
    pub last_modified_by: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub is_system: bool,
    pub is_custom: bool,
    pub version: String,
}

/// How a condition input for an attribute should be rendered.
///
/// A closed set selected from the definition's data type and constraints,
/// so render logic can match on a tag instead of re-inspecting the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// String attribute with a closed value set, single choice.
    EnumSingle,
    /// String attribute with a closed value set, multiple choices.
    EnumMulti,
    /// Boolean toggle.
    Boolean,
    /// Numeric input, optionally bounded by min/max constraints.
    NumericBounded,
    /// Free-form text (also covers date attributes entered as text).
    FreeText,
}

/// A dynamic attribute schema entry.
///
/// Definitions are owned by the attribute store and are immutable except
/// through the explicit append-value and create-attribute operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeDefinition {
    pub id: String,
    pub name: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: AttributeCategory,
    pub data_type: AttributeDataType,
    pub is_required: bool,
    pub is_multi_value: bool,
    #[serde(default)]
    pub constraints: AttributeConstraints,
    pub metadata: AttributeMetadata,
    pub active: bool,
}

impl AttributeDefinition {
    /// Selects the input field kind for this definition.
    ///
    /// String attributes with an enum constraint render as a closed choice
    /// (multi-select when `is_multi_value`); everything else falls back on
    /// the data type.
    pub fn field_kind(&self) -> FieldKind {
        match self.data_type {
            AttributeDataType::String if self.constraints.enum_values.is_some() => {
                if self.is_multi_value {
                    FieldKind::EnumMulti
                } else {
                    FieldKind::EnumSingle
                }
            }
            AttributeDataType::Boolean => FieldKind::Boolean,
            AttributeDataType::Number => FieldKind::NumericBounded,
            AttributeDataType::String | AttributeDataType::Date => FieldKind::FreeText,
        }
    }

    /// True when `value` already appears in the enum constraint
    /// (case-sensitive exact match).
    pub fn has_enum_value(&self, value: &Value) -> bool {
        self.constraints
            .enum_values
            .as_ref()
            .is_some_and(|values| values.contains(value))
    }
}

/// Operator-supplied payload for creating a new attribute definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAttribute {
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    pub data_type: AttributeDataType,
    #[serde(default)]
    pub is_required: bool,
    #[serde(default)]
    pub is_multi_value: bool,
    /// Seed values for the enum constraint; empty means unconstrained.
    #[serde(default)]
    pub enum_values: Vec<Value>,
}

impl Default for AttributeDataType {
    fn default() -> Self {
        Self::String
    }
}

/// Full creation body sent to the backend's create-attribute endpoint:
/// an [`AttributeDefinition`] minus the server-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeSpec {
    pub name: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: AttributeCategory,
    pub data_type: AttributeDataType,
    pub is_required: bool,
    pub is_multi_value: bool,
    #[serde(default)]
    pub constraints: AttributeConstraints,
    pub metadata: AttributeMetadata,
    pub active: bool,
}

// ============================================================================
// Compiled rules and policies
// ============================================================================

/// One (subject, action, resource, condition, environment) tuple inside a
/// policy.
///
/// Conditions are a flat map of normalized keys; they are authored here and
/// evaluated elsewhere. The environment map is reserved and currently always
/// empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompiledRule {
    pub subject: String,
    pub action: String,
    pub resource: String,
    pub condition: Map<String, Value>,
    pub environment: Map<String, Value>,
}

/// A policy as authored, before the backend assigns identity and timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyDraft {
    pub name: String,
    pub description: String,
    pub effect: Effect,
    pub status: PolicyStatus,
    pub priority: u32,
    pub rules: Vec<CompiledRule>,
}

/// A stored policy as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub effect: Effect,
    pub status: PolicyStatus,
    pub priority: u32,
    pub rules: Vec<CompiledRule>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_true() -> bool {
    true
}

// ============================================================================
// Tests
// ============================================================================
