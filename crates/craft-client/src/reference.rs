//! Reference data for the authoring dropdowns.
//!
//! Subjects, actions, resources, and attribute definitions are fetched in
//! parallel when the authoring surface opens. Failure is tolerated per
//! collection: one failed fetch must not block population of the others.

use craft_types::{ActionRef, AttributeDefinition, ResourceRef, Subject};
use tracing::warn;

use crate::backend::{ApiEnvelope, Backend};
use crate::error::BackendError;
use crate::store::{SCHEMA_PAGE, SCHEMA_PAGE_LIMIT};

/// The four reference collections backing the authoring dropdowns.
/// A collection whose fetch failed is simply empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceData {
    pub subjects: Vec<Subject>,
    pub actions: Vec<ActionRef>,
    pub resources: Vec<ResourceRef>,
    pub attributes: Vec<AttributeDefinition>,
}

/// Fetches all four reference collections in parallel.
///
/// Infallible by design: transport failures and rejected envelopes are
/// logged and yield an empty collection, matching the per-collection
/// tolerance of the authoring surface.
pub async fn load_reference_data<B: Backend>(backend: &B) -> ReferenceData {
    let (subjects, actions, resources, attributes) = tokio::join!(
        backend.list_subjects(SCHEMA_PAGE, SCHEMA_PAGE_LIMIT),
        backend.list_actions(SCHEMA_PAGE, SCHEMA_PAGE_LIMIT),
        backend.list_resources(SCHEMA_PAGE, SCHEMA_PAGE_LIMIT),
        backend.list_attributes(SCHEMA_PAGE, SCHEMA_PAGE_LIMIT),
    );

    ReferenceData {
        subjects: collect("subjects", subjects),
        actions: collect("actions", actions),
        resources: collect("resources", resources),
        attributes: collect("attributes", attributes),
    }
}

fn collect<T>(
    collection: &'static str,
    fetched: Result<ApiEnvelope<Vec<T>>, BackendError>,
) -> Vec<T> {
    match fetched {
        Ok(envelope) if envelope.success => envelope.data.unwrap_or_default(),
        Ok(envelope) => {
            warn!(
                collection,
                message = envelope.error.as_deref().or(envelope.message.as_deref()),
                "reference fetch rejected"
            );
            Vec::new()
        }
        Err(err) => {
            warn!(collection, %err, "reference fetch failed");
            Vec::new()
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockBackend;

    #[tokio::test]
    async fn all_collections_populate() {
        let backend = MockBackend::new()
            .with_subjects(vec![MockBackend::subject("s1", "Finance")])
            .with_actions(vec![MockBackend::action("a1")])
            .with_resources(vec![MockBackend::resource("r1")])
            .with_attributes(vec![MockBackend::string_attribute("attr-1", "tier", &[])]);

        let data = load_reference_data(&backend).await;
        assert_eq!(data.subjects.len(), 1);
        assert_eq!(data.actions.len(), 1);
        assert_eq!(data.resources.len(), 1);
        assert_eq!(data.attributes.len(), 1);
    }

    #[tokio::test]
    async fn one_failing_collection_does_not_block_the_others() {
        let backend = MockBackend::new()
            .with_subjects(vec![MockBackend::subject("s1", "Finance")])
            .with_actions(vec![MockBackend::action("a1")])
            .with_resources(vec![MockBackend::resource("r1")])
            .failing("resources");

        let data = load_reference_data(&backend).await;
        assert!(data.resources.is_empty());
        assert_eq!(data.subjects.len(), 1);
        assert_eq!(data.actions.len(), 1);
    }
}
