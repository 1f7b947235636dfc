//! Policy submission.
//!
//! Compiles the selection into a draft and issues the create or update call.
//! The submitter re-checks readiness before sending (the same name/subject/
//! actions/resources checks the surface runs) and holds an in-flight flag so
//! a session can have at most one submission outstanding. There is no
//! cancellation: once issued, a submission runs to completion.

use craft_authoring::{SelectionState, compile, readiness};
use craft_types::{Effect, Policy, PolicyDraft, PolicyStatus};
use tracing::{info, warn};

use crate::backend::Backend;
use crate::error::SubmitError;

/// Priority assigned to every authored policy.
pub const DEFAULT_PRIORITY: u32 = 100;

const SUBMIT_FALLBACK: &str = "Failed to save policy. Please try again.";
const DELETE_FALLBACK: &str = "Failed to delete policy";
const BULK_DELETE_FALLBACK: &str = "Failed to delete policies";

/// Builds the draft sent to the backend: trimmed name and description,
/// fixed Allow effect, Draft status, default priority, compiled rules.
pub fn build_draft(name: &str, description: &str, selection: &SelectionState) -> PolicyDraft {
    PolicyDraft {
        name: name.trim().to_string(),
        description: description.trim().to_string(),
        effect: Effect::Allow,
        status: PolicyStatus::Draft,
        priority: DEFAULT_PRIORITY,
        rules: compile(selection),
    }
}

/// Issues policy writes for one authoring session.
#[derive(Debug)]
pub struct Submitter<B> {
    backend: B,
    in_flight: bool,
}

impl<B: Backend> Submitter<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            in_flight: false,
        }
    }

    /// True while a submission is outstanding; the submit control is
    /// disabled whenever this is set.
    pub fn is_submitting(&self) -> bool {
        self.in_flight
    }

    /// Submits the selection as a policy.
    ///
    /// Updates the policy addressed by `existing_policy_id` when present,
    /// otherwise creates a new one. On success returns the backend's stored
    /// representation. On any failure the selection is untouched, so the
    /// operator can edit and retry.
    pub async fn submit(
        &mut self,
        existing_policy_id: Option<&str>,
        name: &str,
        description: &str,
        selection: &SelectionState,
    ) -> Result<Policy, SubmitError> {
        if self.in_flight {
            return Err(SubmitError::InFlight);
        }
        readiness::check(selection, name)?;

        self.in_flight = true;
        let result = self
            .send(existing_policy_id, build_draft(name, description, selection))
            .await;
        self.in_flight = false;
        result
    }

    async fn send(
        &self,
        existing_policy_id: Option<&str>,
        draft: PolicyDraft,
    ) -> Result<Policy, SubmitError> {
        let sent = match existing_policy_id {
            Some(id) => self.backend.update_policy(id, &draft).await,
            None => self.backend.create_policy(&draft).await,
        };

        let envelope = sent.map_err(|err| {
            warn!(%err, "policy submission transport failure");
            SubmitError::Backend(SUBMIT_FALLBACK.to_string())
        })?;
        let policy = envelope
            .into_data(SUBMIT_FALLBACK)
            .map_err(SubmitError::Backend)?;

        info!(
            policy_id = %policy.id,
            rules = policy.rules.len(),
            updated = existing_policy_id.is_some(),
            "policy saved"
        );
        Ok(policy)
    }

    /// Deletes one policy. Surrounding CRUD surface, not the compilation
    /// core; shares the envelope-to-error mapping.
    pub async fn delete_policy(&self, id: &str) -> Result<(), SubmitError> {
        let envelope = self.backend.delete_policy(id).await.map_err(|err| {
            warn!(%err, "policy delete transport failure");
            SubmitError::Backend(DELETE_FALLBACK.to_string())
        })?;
        if envelope.success {
            Ok(())
        } else {
            Err(SubmitError::Backend(
                envelope
                    .error
                    .or(envelope.message)
                    .unwrap_or_else(|| DELETE_FALLBACK.to_string()),
            ))
        }
    }

    /// Deletes a batch of policies.
    pub async fn bulk_delete_policies(&self, ids: &[String]) -> Result<(), SubmitError> {
        let envelope = self.backend.bulk_delete_policies(ids).await.map_err(|err| {
            warn!(%err, "bulk policy delete transport failure");
            SubmitError::Backend(BULK_DELETE_FALLBACK.to_string())
        })?;
        if envelope.success {
            Ok(())
        } else {
            Err(SubmitError::Backend(
                envelope
                    .error
                    .or(envelope.message)
                    .unwrap_or_else(|| BULK_DELETE_FALLBACK.to_string()),
            ))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
