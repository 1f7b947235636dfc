//! The backend collaborator contract.
//!
//! Shape only: wire format and transport belong to whatever implements
//! [`Backend`]. Every call is fallible; a `success=false` envelope or a
//! transport failure must surface a human-readable message to the operator
//! rather than propagate past the UI boundary.

use craft_types::{
    ActionRef, AttributeDefinition, AttributeSpec, Policy, PolicyDraft, ResourceRef, Subject,
};
use serde::{Deserialize, Serialize};

use crate::error::BackendError;

/// Page metadata attached to list responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u32>,
}

/// The backend's uniform response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

impl<T> ApiEnvelope<T> {
    /// A successful envelope wrapping `data`.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: None,
            pagination: None,
        }
    }

    /// A rejected envelope carrying the backend's error message.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            message: None,
            pagination: None,
        }
    }

    /// Unwraps the payload, mapping rejection to the backend's reported
    /// message when present and to `fallback` otherwise. A "successful"
    /// envelope with no payload also maps to `fallback`.
    pub fn into_data(self, fallback: &str) -> Result<T, String> {
        if self.success {
            self.data.ok_or_else(|| fallback.to_string())
        } else {
            Err(self
                .error
                .or(self.message)
                .unwrap_or_else(|| fallback.to_string()))
        }
    }
}

/// The REST backend, seen from the authoring core.
///
/// List calls are paged; mutators return the stored representation. Delete
/// calls back the surrounding CRUD surface rather than the compilation core
/// but cross the same boundary.
#[allow(async_fn_in_trait)]
pub trait Backend {
    async fn list_subjects(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<ApiEnvelope<Vec<Subject>>, BackendError>;

    async fn list_actions(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<ApiEnvelope<Vec<ActionRef>>, BackendError>;

    async fn list_resources(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<ApiEnvelope<Vec<ResourceRef>>, BackendError>;

    async fn list_attributes(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<ApiEnvelope<Vec<AttributeDefinition>>, BackendError>;

    async fn create_attribute(
        &self,
        spec: &AttributeSpec,
    ) -> Result<ApiEnvelope<AttributeDefinition>, BackendError>;

    async fn update_attribute(
        &self,
        id: &str,
        definition: &AttributeDefinition,
    ) -> Result<ApiEnvelope<AttributeDefinition>, BackendError>;

    async fn create_policy(&self, draft: &PolicyDraft)
    -> Result<ApiEnvelope<Policy>, BackendError>;

    async fn update_policy(
        &self,
        id: &str,
        draft: &PolicyDraft,
    ) -> Result<ApiEnvelope<Policy>, BackendError>;

    async fn delete_policy(&self, id: &str) -> Result<ApiEnvelope<()>, BackendError>;

    async fn bulk_delete_policies(&self, ids: &[String]) -> Result<ApiEnvelope<()>, BackendError>;
}

// ============================================================================
// Tests
// ============================================================================
