//! # Craft
//!
//! ABAC policy authoring: pick one subject, a set of actions, a set of
//! resources, optionally constrain them with attribute conditions, and
//! compile the selection into the normalized rule set stored on a policy.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                           Craft                               │
//! │  ┌───────────┐   ┌────────────┐   ┌─────────┐   ┌─────────┐  │
//! │  │ Attribute │ → │ Selection  │ → │ Rule    │ → │ Submit  │  │
//! │  │ Store     │   │ + Normalize│   │ Compiler│   │ Adapter │  │
//! │  └───────────┘   └────────────┘   └─────────┘   └─────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```
//! use craft::{SelectionState, Readiness, compile, evaluate};
//! use serde_json::json;
//!
//! let selection = SelectionState::new()
//!     .with_subject("S1")
//!     .with_action("A_read")
//!     .with_resource("R_doc1")
//!     .with_subject_condition("role", json!("admin"));
//!
//! assert_eq!(evaluate(&selection, "Admin read access"), Readiness::Ready);
//!
//! let rules = compile(&selection);
//! assert_eq!(rules.len(), 1);
//! assert_eq!(rules[0].condition["subjectRole"], json!("admin"));
//! ```
//!
//! # Modules
//!
//! - **Core**: [`SelectionState`], [`compile`], [`evaluate`] — pure authoring logic
//! - **Vocabulary**: [`Policy`], [`PolicyDraft`], [`CompiledRule`], reference data
//! - **Boundary**: [`Backend`], [`AttributeStore`], [`Submitter`] — REST collaborator

// Core authoring
pub use craft_authoring::{
    Readiness, ResourceConditions, SelectionState, ValidationError, compile, evaluate,
};

// Shared vocabulary
pub use craft_types::{
    ActionCategory, ActionRef, AttributeCategory, AttributeConstraints, AttributeDataType,
    AttributeDefinition, AttributeMetadata, AttributeSpec, CompiledRule, Effect, FieldKind,
    NewAttribute, PermissionFlags, Policy, PolicyDraft, PolicyStatus, ResourceRef, ResourceType,
    RiskLevel, Subject, SubjectStatus, SubjectType,
};

// Backend boundary
pub use craft_client::{
    ApiEnvelope, AttributeStore, Backend, BackendError, ReferenceData, StoreError, SubmitError,
    Submitter, load_reference_data,
};
