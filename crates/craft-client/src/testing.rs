//! In-memory backend double shared by the crate's tests.

use std::collections::HashSet;
use std::sync::Mutex;

use chrono::Utc;
use craft_types::{
    ActionCategory, ActionRef, AttributeCategory, AttributeConstraints, AttributeDefinition,
    AttributeDataType, AttributeMetadata, AttributeSpec, Policy, PolicyDraft, ResourceRef,
    ResourceType, RiskLevel, Subject, SubjectStatus, SubjectType,
};
use serde_json::{Map, Value};

use crate::backend::{ApiEnvelope, Backend};
use crate::error::BackendError;

#[derive(Debug, Default)]
struct State {
    subjects: Vec<Subject>,
    actions: Vec<ActionRef>,
    resources: Vec<ResourceRef>,
    attributes: Vec<AttributeDefinition>,
    policies: Vec<Policy>,
    next_id: u32,
    /// Collections whose list call fails at the transport level.
    failing: HashSet<&'static str>,
    /// When set, attribute mutations come back `success=false` with this message.
    reject_attribute_writes: Option<String>,
    /// When set, policy writes come back `success=false`; the inner option
    /// is the (possibly absent) backend message.
    reject_policy_writes: Option<Option<String>>,
    create_attribute_calls: u32,
    update_attribute_calls: u32,
    create_policy_calls: u32,
    update_policy_calls: u32,
}

/// A deterministic in-memory [`Backend`].
#[derive(Debug, Default)]
pub struct MockBackend {
    state: Mutex<State>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_subjects(self, subjects: Vec<Subject>) -> Self {
        self.state.lock().expect("state lock").subjects = subjects;
        self
    }

    pub fn with_actions(self, actions: Vec<ActionRef>) -> Self {
        self.state.lock().expect("state lock").actions = actions;
        self
    }

    pub fn with_resources(self, resources: Vec<ResourceRef>) -> Self {
        self.state.lock().expect("state lock").resources = resources;
        self
    }

    pub fn with_attributes(self, attributes: Vec<AttributeDefinition>) -> Self {
        self.state.lock().expect("state lock").attributes = attributes;
        self
    }

    /// Makes the named collection's list call fail at the transport level.
    pub fn failing(self, collection: &'static str) -> Self {
        self.state.lock().expect("state lock").failing.insert(collection);
        self
    }

    /// Makes attribute create/update calls come back rejected.
    pub fn rejecting_updates(self, message: &str) -> Self {
        self.state.lock().expect("state lock").reject_attribute_writes = Some(message.to_string());
        self
    }

    /// Makes policy create/update calls come back rejected, with or
    /// without a backend message.
    pub fn rejecting_policy_writes(self, message: Option<&str>) -> Self {
        self.state.lock().expect("state lock").reject_policy_writes =
            Some(message.map(str::to_string));
        self
    }

    pub fn create_attribute_calls(&self) -> u32 {
        self.state.lock().expect("state lock").create_attribute_calls
    }

    pub fn update_attribute_calls(&self) -> u32 {
        self.state.lock().expect("state lock").update_attribute_calls
    }

    pub fn create_policy_calls(&self) -> u32 {
        self.state.lock().expect("state lock").create_policy_calls
    }

    pub fn update_policy_calls(&self) -> u32 {
        self.state.lock().expect("state lock").update_policy_calls
    }

    // -- fixture constructors --

    pub fn subject(id: &str, department: &str) -> Subject {
        Subject {
            id: id.to_string(),
            name: id.to_string(),
            display_name: id.to_uppercase(),
            subject_type: SubjectType::User,
            role: "analyst".to_string(),
            department: department.to_string(),
            email: format!("{id}@example.com"),
            status: SubjectStatus::Active,
            description: None,
        }
    }

    pub fn action(id: &str) -> ActionRef {
        ActionRef {
            id: id.to_string(),
            name: id.to_string(),
            display_name: id.to_uppercase(),
            category: ActionCategory::Read,
            risk_level: RiskLevel::Low,
            description: None,
            active: true,
        }
    }

    pub fn resource(id: &str) -> ResourceRef {
        ResourceRef {
            id: id.to_string(),
            name: id.to_string(),
            display_name: id.to_uppercase(),
            resource_type: ResourceType::Document,
            uri: format!("/{id}"),
            description: None,
            attributes: Map::new(),
            permissions: craft_types::PermissionFlags::default(),
        }
    }

    pub fn string_attribute(id: &str, name: &str, values: &[&str]) -> AttributeDefinition {
        AttributeDefinition {
            id: id.to_string(),
            name: name.to_string(),
            display_name: name.to_uppercase(),
            description: None,
            category: AttributeCategory::Subject,
            data_type: AttributeDataType::String,
            is_required: false,
            is_multi_value: false,
            constraints: AttributeConstraints {
                enum_values: (!values.is_empty())
                    .then(|| values.iter().map(|v| Value::from(*v)).collect()),
                ..AttributeConstraints::default()
            },
            metadata: AttributeMetadata {
                created_by: "seed".to_string(),
                last_modified_by: "seed".to_string(),
                tags: vec![],
                is_system: false,
                is_custom: false,
                version: "1.0.0".to_string(),
            },
            active: true,
        }
    }
}

impl Backend for MockBackend {
    async fn list_subjects(
        &self,
        _page: u32,
        _limit: u32,
    ) -> Result<ApiEnvelope<Vec<Subject>>, BackendError> {
        let state = self.state.lock().expect("state lock");
        if state.failing.contains("subjects") {
            return Err(BackendError::Transport("connection refused".to_string()));
        }
        Ok(ApiEnvelope::ok(state.subjects.clone()))
    }

    async fn list_actions(
        &self,
        _page: u32,
        _limit: u32,
    ) -> Result<ApiEnvelope<Vec<ActionRef>>, BackendError> {
        let state = self.state.lock().expect("state lock");
        if state.failing.contains("actions") {
            return Err(BackendError::Transport("connection refused".to_string()));
        }
        Ok(ApiEnvelope::ok(state.actions.clone()))
    }

    async fn list_resources(
        &self,
        _page: u32,
        _limit: u32,
    ) -> Result<ApiEnvelope<Vec<ResourceRef>>, BackendError> {
        let state = self.state.lock().expect("state lock");
        if state.failing.contains("resources") {
            return Err(BackendError::Transport("connection refused".to_string()));
        }
        Ok(ApiEnvelope::ok(state.resources.clone()))
    }

    async fn list_attributes(
        &self,
        _page: u32,
        _limit: u32,
    ) -> Result<ApiEnvelope<Vec<AttributeDefinition>>, BackendError> {
        let state = self.state.lock().expect("state lock");
        if state.failing.contains("attributes") {
            return Err(BackendError::Transport("connection refused".to_string()));
        }
        Ok(ApiEnvelope::ok(state.attributes.clone()))
    }

    async fn create_attribute(
        &self,
        spec: &AttributeSpec,
    ) -> Result<ApiEnvelope<AttributeDefinition>, BackendError> {
        let mut state = self.state.lock().expect("state lock");
        state.create_attribute_calls += 1;
        if let Some(message) = &state.reject_attribute_writes {
            return Ok(ApiEnvelope::rejected(message.clone()));
        }

        state.next_id += 1;
        let definition = AttributeDefinition {
            id: format!("created-{}", state.next_id),
            name: spec.name.clone(),
            display_name: spec.display_name.clone(),
            description: spec.description.clone(),
            category: spec.category,
            data_type: spec.data_type,
            is_required: spec.is_required,
            is_multi_value: spec.is_multi_value,
            constraints: spec.constraints.clone(),
            metadata: spec.metadata.clone(),
            active: spec.active,
        };
        state.attributes.push(definition.clone());
        Ok(ApiEnvelope::ok(definition))
    }

    async fn update_attribute(
        &self,
        id: &str,
        definition: &AttributeDefinition,
    ) -> Result<ApiEnvelope<AttributeDefinition>, BackendError> {
        let mut state = self.state.lock().expect("state lock");
        state.update_attribute_calls += 1;
        if let Some(message) = &state.reject_attribute_writes {
            return Ok(ApiEnvelope::rejected(message.clone()));
        }

        match state.attributes.iter_mut().find(|def| def.id == id) {
            Some(stored) => {
                *stored = definition.clone();
                Ok(ApiEnvelope::ok(definition.clone()))
            }
            None => Ok(ApiEnvelope::rejected("Attribute not found")),
        }
    }

    async fn create_policy(
        &self,
        draft: &PolicyDraft,
    ) -> Result<ApiEnvelope<Policy>, BackendError> {
        let mut state = self.state.lock().expect("state lock");
        state.create_policy_calls += 1;
        if let Some(message) = &state.reject_policy_writes {
            return Ok(match message {
                Some(message) => ApiEnvelope::rejected(message.clone()),
                None => ApiEnvelope {
                    success: false,
                    data: None,
                    error: None,
                    message: None,
                    pagination: None,
                },
            });
        }

        state.next_id += 1;
        let now = Utc::now();
        let policy = Policy {
            id: format!("policy-{}", state.next_id),
            name: draft.name.clone(),
            description: draft.description.clone(),
            effect: draft.effect,
            status: draft.status,
            priority: draft.priority,
            rules: draft.rules.clone(),
            created_at: now,
            updated_at: now,
        };
        state.policies.push(policy.clone());
        Ok(ApiEnvelope::ok(policy))
    }

    async fn update_policy(
        &self,
        id: &str,
        draft: &PolicyDraft,
    ) -> Result<ApiEnvelope<Policy>, BackendError> {
        let mut state = self.state.lock().expect("state lock");
        state.update_policy_calls += 1;
        if let Some(message) = &state.reject_policy_writes {
            return Ok(match message {
                Some(message) => ApiEnvelope::rejected(message.clone()),
                None => ApiEnvelope {
                    success: false,
                    data: None,
                    error: None,
                    message: None,
                    pagination: None,
                },
            });
        }

        match state.policies.iter_mut().find(|policy| policy.id == id) {
            Some(stored) => {
                stored.name = draft.name.clone();
                stored.description = draft.description.clone();
                stored.effect = draft.effect;
                stored.status = draft.status;
                stored.priority = draft.priority;
                stored.rules = draft.rules.clone();
                stored.updated_at = Utc::now();
                Ok(ApiEnvelope::ok(stored.clone()))
            }
            None => Ok(ApiEnvelope::rejected("Policy not found")),
        }
    }

    async fn delete_policy(&self, id: &str) -> Result<ApiEnvelope<()>, BackendError> {
        let mut state = self.state.lock().expect("state lock");
        let before = state.policies.len();
        state.policies.retain(|policy| policy.id != id);
        if state.policies.len() < before {
            Ok(ApiEnvelope::ok(()))
        } else {
            Ok(ApiEnvelope::rejected("Policy not found"))
        }
    }

    async fn bulk_delete_policies(&self, ids: &[String]) -> Result<ApiEnvelope<()>, BackendError> {
        let mut state = self.state.lock().expect("state lock");
        state.policies.retain(|policy| !ids.contains(&policy.id));
        Ok(ApiEnvelope::ok(()))
    }
}
