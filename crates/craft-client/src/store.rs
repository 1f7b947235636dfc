//! The attribute schema store.
//!
//! An in-memory cache of attribute definitions backing the dynamic condition
//! form. Mutations (enum-value append, attribute creation) persist through
//! the backend and then fully reload the cache — one eventual-consistency
//! round trip instead of optimistic local patching, so a partial update can
//! never be observed.

use craft_authoring::ValidationError;
use craft_types::{
    AttributeCategory, AttributeConstraints, AttributeDefinition, AttributeMetadata, AttributeSpec,
    NewAttribute,
};
use serde_json::Value;
use tracing::{debug, warn};

use crate::backend::Backend;
use crate::error::StoreError;

/// Page used for full cache loads; the backend caps list sizes, and the
/// attribute catalog fits comfortably in one page.
pub const SCHEMA_PAGE: u32 = 1;
/// Page size used for full cache loads.
pub const SCHEMA_PAGE_LIMIT: u32 = 1000;

const LOAD_FALLBACK: &str = "Failed to load attributes. Please try again.";
const CREATE_FALLBACK: &str = "Failed to create attribute. Please try again.";
const APPEND_FALLBACK: &str = "Failed to create value. Please try again.";

/// Derives the internal attribute name from its display name:
/// lowercased, whitespace removed.
pub fn derive_attribute_name(display_name: &str) -> String {
    display_name
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Cached attribute definitions plus the mutations that may change them.
///
/// The cache is the one piece of state shared across repeated dialog
/// open/close cycles within a session. `&mut self` on every loading path
/// means the cache can never be read mid-refresh.
#[derive(Debug)]
pub struct AttributeStore<B> {
    backend: B,
    cache: Vec<AttributeDefinition>,
}

impl<B: Backend> AttributeStore<B> {
    /// Creates an empty store; call [`load`](Self::load) before reading.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            cache: Vec::new(),
        }
    }

    /// Fully reloads the cache from the backend.
    pub async fn load(&mut self) -> Result<(), StoreError> {
        let envelope = self
            .backend
            .list_attributes(SCHEMA_PAGE, SCHEMA_PAGE_LIMIT)
            .await
            .map_err(|err| {
                warn!(%err, "attribute cache reload failed");
                StoreError::Backend(LOAD_FALLBACK.to_string())
            })?;

        self.cache = envelope.into_data(LOAD_FALLBACK).map_err(StoreError::Backend)?;
        debug!(definitions = self.cache.len(), "attribute cache reloaded");
        Ok(())
    }

    /// Returns the cached definition with the given id.
    pub fn get(&self, attribute_id: &str) -> Option<&AttributeDefinition> {
        self.cache.iter().find(|def| def.id == attribute_id)
    }

    /// Active definitions in the given category, cache order.
    pub fn list_by_category(&self, category: AttributeCategory) -> Vec<&AttributeDefinition> {
        self.cache
            .iter()
            .filter(|def| def.active && def.category == category)
            .collect()
    }

    /// Appends a value to an attribute's enum constraint.
    ///
    /// No-op returning the current definition when the value already exists
    /// (case-sensitive exact match) — existing entries are never rewritten.
    /// Otherwise the appended list is persisted and the cache fully
    /// reloaded; the backend's stored definition is returned.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] when the id is not in the cache (logged,
    /// cache unchanged); [`StoreError::Backend`] when persistence fails.
    pub async fn append_enum_value(
        &mut self,
        attribute_id: &str,
        value: Value,
    ) -> Result<AttributeDefinition, StoreError> {
        let Some(current) = self.get(attribute_id) else {
            warn!(attribute_id, "enum append for unknown attribute");
            return Err(StoreError::NotFound(attribute_id.to_string()));
        };

        if current.has_enum_value(&value) {
            return Ok(current.clone());
        }

        let mut updated = current.clone();
        updated
            .constraints
            .enum_values
            .get_or_insert_with(Vec::new)
            .push(value);

        let envelope = self
            .backend
            .update_attribute(attribute_id, &updated)
            .await
            .map_err(|err| {
                warn!(attribute_id, %err, "enum append failed");
                StoreError::Backend(APPEND_FALLBACK.to_string())
            })?;
        let stored = envelope.into_data(APPEND_FALLBACK).map_err(StoreError::Backend)?;

        self.load().await?;
        Ok(stored)
    }

    /// Creates a new attribute definition from the operator's form input.
    ///
    /// Defaults: category subject, custom/non-system metadata, active. The
    /// cache is fully reloaded after the backend accepts the creation.
    ///
    /// # Errors
    ///
    /// [`StoreError::Validation`] when the display name or the derived
    /// internal name is empty (nothing is sent); [`StoreError::Backend`]
    /// when the backend rejects the creation.
    pub async fn create_attribute(
        &mut self,
        input: NewAttribute,
    ) -> Result<AttributeDefinition, StoreError> {
        let display_name = input.display_name.trim().to_string();
        if display_name.is_empty() {
            return Err(ValidationError::EmptyDisplayName.into());
        }
        let name = derive_attribute_name(&display_name);
        if name.is_empty() {
            return Err(ValidationError::EmptyDisplayName.into());
        }

        let spec = AttributeSpec {
            name,
            display_name,
            description: (!input.description.is_empty()).then_some(input.description),
            category: AttributeCategory::Subject,
            data_type: input.data_type,
            is_required: input.is_required,
            is_multi_value: input.is_multi_value,
            constraints: AttributeConstraints {
                enum_values: (!input.enum_values.is_empty()).then_some(input.enum_values),
                ..AttributeConstraints::default()
            },
            metadata: AttributeMetadata {
                created_by: "user".to_string(),
                last_modified_by: "user".to_string(),
                tags: vec!["custom".to_string()],
                is_system: false,
                is_custom: true,
                version: "1.0.0".to_string(),
            },
            active: true,
        };

        let envelope = self.backend.create_attribute(&spec).await.map_err(|err| {
            warn!(%err, "attribute creation failed");
            StoreError::Backend(CREATE_FALLBACK.to_string())
        })?;
        let stored = envelope.into_data(CREATE_FALLBACK).map_err(StoreError::Backend)?;

        self.load().await?;
        Ok(stored)
    }
}

// ============================================================================
// Tests
// ============================================================================
