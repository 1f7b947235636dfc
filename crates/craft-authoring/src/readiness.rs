//! Submission readiness.
//!
//! A pure view over the selection plus the policy name field: the submit
//! control is enabled exactly when [`evaluate`] returns [`Readiness::Ready`].
//! Nothing here is stateful; the signal is re-derivable after every edit.

use thiserror::Error;

use crate::selection::SelectionState;

/// Minimum policy name length after trimming.
pub const MIN_NAME_LEN: usize = 2;

/// Whether the current selection is complete enough to submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    /// At least one required piece is missing or invalid.
    Incomplete,
    /// Name, subject, actions, and resources are all present and valid.
    Ready,
}

/// A locally recoverable authoring problem. Never sent to the backend;
/// surfaced to the operator and cleared by editing the selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a policy name")]
    NameEmpty,
    #[error("Name must be at least {MIN_NAME_LEN} characters long.")]
    NameTooShort,
    #[error("Please select a subject")]
    MissingSubject,
    #[error("Please select at least one action")]
    NoActionsSelected,
    #[error("Please select at least one resource")]
    NoResourcesSelected,
    #[error("Display name is required")]
    EmptyDisplayName,
}

/// Validates the policy name field: non-empty and at least
/// [`MIN_NAME_LEN`] characters after trimming.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::NameEmpty);
    }
    if trimmed.chars().count() < MIN_NAME_LEN {
        return Err(ValidationError::NameTooShort);
    }
    Ok(())
}

/// Reports the first blocking problem, in the order the authoring surface
/// checks them: name, subject, actions, resources.
pub fn check(selection: &SelectionState, name: &str) -> Result<(), ValidationError> {
    validate_name(name)?;
    if selection.subject_id.is_none() {
        return Err(ValidationError::MissingSubject);
    }
    if selection.action_ids.is_empty() {
        return Err(ValidationError::NoActionsSelected);
    }
    if selection.resource_ids.is_empty() {
        return Err(ValidationError::NoResourcesSelected);
    }
    Ok(())
}

/// Collapses [`check`] into the signal consumed by the submit control.
pub fn evaluate(selection: &SelectionState, name: &str) -> Readiness {
    if check(selection, name).is_ok() {
        Readiness::Ready
    } else {
        Readiness::Incomplete
    }
}

// ============================================================================
// Tests
// ============================================================================
