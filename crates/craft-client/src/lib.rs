//! # craft-client: backend boundary for Craft policy authoring
//!
//! Everything that crosses the wire to the REST backend lives here:
//!
//! - [`Backend`] — the async collaborator trait (list/create/update calls,
//!   all returning the backend's success/data envelope)
//! - [`AttributeStore`] — cached attribute schema with append-value and
//!   create-attribute mutations (full reload after every mutation)
//! - [`load_reference_data`] — parallel dropdown-data fetch with
//!   per-collection failure tolerance
//! - [`Submitter`] — compiles the selection and issues the policy
//!   create/update, with an at-most-one-in-flight guard
//!
//! The authoring core ([`craft_authoring`]) stays pure; this crate owns all
//! fallibility at the collaborator boundary. No error here is fatal: every
//! failure path returns control to an editable state.

pub mod backend;
pub mod error;
pub mod reference;
pub mod store;
pub mod submit;

#[cfg(test)]
pub(crate) mod testing;

pub use backend::{ApiEnvelope, Backend, Pagination};
pub use error::{BackendError, StoreError, SubmitError};
pub use reference::{ReferenceData, load_reference_data};
pub use store::AttributeStore;
pub use submit::{DEFAULT_PRIORITY, Submitter, build_draft};
