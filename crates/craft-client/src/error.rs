//! Client-side error types.
//!
//! Three kinds, matching how they recover:
//! - [`BackendError`] — transport failure below the envelope; wrapped by the
//!   operation-level errors before reaching the operator.
//! - [`StoreError`] — attribute store mutations (not-found, validation,
//!   backend rejection). Locally recoverable; the cache is left unchanged.
//! - [`SubmitError`] — policy submission. The selection survives the error
//!   so the operator can retry without re-entering data.

use craft_authoring::ValidationError;
use thiserror::Error;

/// A failure below the response envelope: the request never produced a
/// `success`/`data` body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    #[error("transport failure: {0}")]
    Transport(String),
}

/// A failed attribute store operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The attribute id is not in the cache. Should not normally occur
    /// since ids are sourced from the same store.
    #[error("attribute not found: {0}")]
    NotFound(String),

    /// The creation payload was rejected before any backend call.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The backend rejected the mutation or the transport failed; carries
    /// the operator-facing message.
    #[error("{0}")]
    Backend(String),
}

/// A failed policy submission or policy CRUD call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// A submission is already in flight for this session.
    #[error("a submission is already in progress")]
    InFlight,

    /// The selection was not ready; nothing was sent to the backend.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The backend rejected the request or the transport failed; carries
    /// the operator-facing message.
    #[error("{0}")]
    Backend(String),
}
