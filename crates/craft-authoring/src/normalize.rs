//! Condition normalization.
//!
//! Maps raw, form-shaped attribute selections into the flat condition map
//! stored on each rule. Pure functions of the selection: identical input
//! produces an identical condition map.

use craft_types::PermissionFlags;
use serde_json::{Map, Value};

use crate::selection::{ResourceConditions, SelectionState};

/// The four subject attribute slots that reach compiled conditions, paired
/// with the condition keys they are stored under. Values set for any other
/// slot are silently ignored.
const SUBJECT_SLOTS: [(&str, &str); 4] = [
    ("type", "subjectType"),
    ("status", "subjectStatus"),
    ("department", "subjectDepartment"),
    ("role", "subjectRole"),
];

/// Truthiness filter applied uniformly to condition values.
///
/// `Null`, `""`, `false`, numeric zero, and empty collections are treated
/// as "not set" and dropped from the condition map.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

/// Builds the subject-side condition entries.
///
/// Reads the four fixed slots in declaration order so the output key order
/// is deterministic; drops values that fail the truthiness filter.
pub fn subject_conditions(selection: &SelectionState) -> Map<String, Value> {
    let mut out = Map::new();
    for (slot, key) in SUBJECT_SLOTS {
        if let Some(value) = selection.subject_conditions.get(slot) {
            if is_truthy(value) {
                out.insert(key.to_string(), value.clone());
            }
        }
    }
    out
}

/// Builds the resource-side condition entries for one resource.
///
/// `type` and `uri` become `resourceType` / `resourceUriPattern` when
/// truthy; the permission toggles are copied as one object under
/// `resourcePermissions` when any flag is set.
pub fn resource_conditions(conditions: &ResourceConditions) -> Map<String, Value> {
    let mut out = Map::new();
    if let Some(resource_type) = conditions.resource_type.as_deref() {
        if !resource_type.is_empty() {
            out.insert("resourceType".to_string(), Value::from(resource_type));
        }
    }
    if let Some(uri) = conditions.uri.as_deref() {
        if !uri.is_empty() {
            out.insert("resourceUriPattern".to_string(), Value::from(uri));
        }
    }
    if conditions.permissions.any() {
        out.insert(
            "resourcePermissions".to_string(),
            permissions_value(conditions.permissions),
        );
    }
    out
}

fn permissions_value(flags: PermissionFlags) -> Value {
    serde_json::to_value(flags).unwrap_or(Value::Null)
}

// ============================================================================
// Tests
// ============================================================================
