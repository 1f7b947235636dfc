//! # craft-authoring: ABAC policy authoring core
//!
//! Turns an operator's selection (one subject, a set of actions, a set of
//! resources, optional attribute conditions) into the normalized rule set
//! stored on a policy, and tracks whether the selection is complete enough
//! to submit.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  SelectionState                              │
//! │  (subject + actions + resources + attrs)     │
//! └─────────┬──────────────────────┬────────────┘
//!           │                      │
//!           ▼                      ▼
//! ┌──────────────────┐   ┌──────────────────────┐
//! │  Normalizer       │   │  Readiness Evaluator │
//! │  raw attrs →      │   │  Ready / Incomplete  │
//! │  condition map    │   │  (gates submission)  │
//! └─────────┬────────┘   └──────────────────────┘
//!           ▼
//! ┌─────────────────────────────────────────────┐
//! │  Rule Compiler                               │
//! │  actions × resources → CompiledRule set      │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use craft_authoring::{SelectionState, compile, evaluate, Readiness};
//! use serde_json::json;
//!
//! let selection = SelectionState::new()
//!     .with_subject("S1")
//!     .with_action("A_read")
//!     .with_action("A_write")
//!     .with_resource("R_doc1")
//!     .with_subject_condition("department", json!("Finance"));
//!
//! assert_eq!(evaluate(&selection, "Finance readers"), Readiness::Ready);
//!
//! let rules = compile(&selection);
//! assert_eq!(rules.len(), 2);
//! assert_eq!(rules[0].condition["subjectDepartment"], json!("Finance"));
//! ```

pub mod compile;
pub mod normalize;
pub mod readiness;
pub mod selection;

pub use compile::compile;
pub use readiness::{Readiness, ValidationError, check, evaluate, validate_name};
pub use selection::{ResourceConditions, SelectionState};
