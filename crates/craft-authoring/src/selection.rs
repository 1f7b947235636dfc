//! The operator's current authoring selection.
//!
//! `SelectionState` is an explicit value, one revision per edit: every
//! transition consumes the previous state and returns the next one. This
//! keeps the compile and readiness functions pure over a single input
//! instead of reading scattered mutable cells.

use std::collections::BTreeMap;

use craft_types::PermissionFlags;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// ResourceConditions
// ============================================================================

/// Raw per-resource condition input, as entered in the authoring form.
///
/// Only these three slots feed compiled conditions; the permission toggles
/// are kept as a unit because the backend stores them as one object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceConditions {
    /// Constrains the resource's declared type (e.g. "document").
    pub resource_type: Option<String>,
    /// Constrains the resource URI; stored as `resourceUriPattern`.
    pub uri: Option<String>,
    /// Permission toggles, copied verbatim when any flag is set.
    pub permissions: PermissionFlags,
}

// ============================================================================
// SelectionState
// ============================================================================

/// Everything the operator has chosen so far in one authoring session.
///
/// Ephemeral: created when the authoring surface opens, discarded on
/// close or submit. Action and resource ids behave as sets (inserting a
/// present id is a no-op) but preserve insertion order for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionState {
    /// At most one subject; `None` until the operator picks one.
    pub subject_id: Option<String>,
    /// Selected action ids, insertion order, duplicate-free.
    pub action_ids: Vec<String>,
    /// Selected resource ids, insertion order, duplicate-free.
    pub resource_ids: Vec<String>,
    /// Raw subject attribute selections keyed by attribute slot name.
    /// Only the four fixed slots (`type`, `status`, `department`, `role`)
    /// reach compiled conditions; other entries are ignored downstream.
    pub subject_conditions: BTreeMap<String, Value>,
    /// Raw per-resource condition input keyed by resource id.
    pub resource_conditions: BTreeMap<String, ResourceConditions>,
}

impl SelectionState {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next revision with the subject set.
    pub fn with_subject(mut self, subject_id: impl Into<String>) -> Self {
        self.subject_id = Some(subject_id.into());
        self
    }

    /// Returns the next revision with the subject cleared.
    pub fn clear_subject(mut self) -> Self {
        self.subject_id = None;
        self
    }

    /// Returns the next revision with `action_id` selected.
    /// No-op if the action is already selected.
    pub fn with_action(mut self, action_id: impl Into<String>) -> Self {
        let action_id = action_id.into();
        if !self.action_ids.contains(&action_id) {
            self.action_ids.push(action_id);
        }
        self
    }

    /// Returns the next revision with `action_id` deselected.
    pub fn without_action(mut self, action_id: &str) -> Self {
        self.action_ids.retain(|id| id != action_id);
        self
    }

    /// Returns the next revision with all actions deselected.
    pub fn clear_actions(mut self) -> Self {
        self.action_ids.clear();
        self
    }

    /// Returns the next revision with `resource_id` selected.
    /// No-op if the resource is already selected.
    pub fn with_resource(mut self, resource_id: impl Into<String>) -> Self {
        let resource_id = resource_id.into();
        if !self.resource_ids.contains(&resource_id) {
            self.resource_ids.push(resource_id);
        }
        self
    }

    /// Returns the next revision with `resource_id` deselected.
    ///
    /// Condition input entered for the resource is kept; it simply stops
    /// contributing to compiled rules until the resource is re-selected.
    pub fn without_resource(mut self, resource_id: &str) -> Self {
        self.resource_ids.retain(|id| id != resource_id);
        self
    }

    /// Returns the next revision with all resources deselected.
    pub fn clear_resources(mut self) -> Self {
        self.resource_ids.clear();
        self
    }

    /// Returns the next revision with a subject attribute value recorded.
    pub fn with_subject_condition(mut self, slot: impl Into<String>, value: Value) -> Self {
        self.subject_conditions.insert(slot.into(), value);
        self
    }

    /// Returns the next revision with a subject attribute value removed.
    pub fn without_subject_condition(mut self, slot: &str) -> Self {
        self.subject_conditions.remove(slot);
        self
    }

    /// Returns the next revision with condition input for one resource.
    pub fn with_resource_conditions(
        mut self,
        resource_id: impl Into<String>,
        conditions: ResourceConditions,
    ) -> Self {
        self.resource_conditions.insert(resource_id.into(), conditions);
        self
    }
}

// ============================================================================
// Tests
// ============================================================================
