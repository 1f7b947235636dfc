//! Rule compilation.
//!
//! Expands the selection into its cross-product rule set: one rule per
//! (action, resource) pair, all sharing the subject and the normalized
//! subject conditions, each carrying its own resource conditions.

use craft_types::CompiledRule;
use serde_json::Map;
use tracing::debug;

use crate::normalize;
use crate::selection::SelectionState;

/// Compiles the selection into its rule set.
///
/// Rules are produced in action-major, resource-minor order, following the
/// insertion order of the two id lists. The ordering carries no meaning but
/// is deterministic so fixtures are reproducible.
///
/// Total over empty sets: an empty action or resource list yields an empty
/// rule set. Callers gate real submissions on readiness before compiling.
///
/// # Postcondition
///
/// The output contains exactly `action_ids.len() * resource_ids.len()`
/// rules, each with a distinct (action, resource) pair.
pub fn compile(selection: &SelectionState) -> Vec<CompiledRule> {
    let subject = selection.subject_id.clone().unwrap_or_default();
    let shared = normalize::subject_conditions(selection);

    let mut rules = Vec::with_capacity(selection.action_ids.len() * selection.resource_ids.len());
    for action_id in &selection.action_ids {
        for resource_id in &selection.resource_ids {
            let mut condition = shared.clone();
            if let Some(resource_input) = selection.resource_conditions.get(resource_id) {
                condition.extend(normalize::resource_conditions(resource_input));
            }

            rules.push(CompiledRule {
                subject: subject.clone(),
                action: action_id.clone(),
                resource: resource_id.clone(),
                condition,
                environment: Map::new(),
            });
        }
    }

    debug!(
        actions = selection.action_ids.len(),
        resources = selection.resource_ids.len(),
        rules = rules.len(),
        "compiled selection into rule set"
    );
    rules
}

// ============================================================================
// Tests
// ============================================================================
