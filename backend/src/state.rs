//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.
//!
//! # Design Principles
//!
//! 1. **Pre-compute expensive resources**: catalogs are parsed once at startup
//! 2. **Cheap cloning**: All fields use Arc or are already Clone-cheap
//! 3. **Immutable configuration**: only the stores mutate after creation

use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::llm::LlmClient;
use crate::services::advisor::Advisor;
use crate::store::TrackingStore;
use anyhow::Result;
use std::sync::Arc;

/// Shared application state
///
/// This struct holds all shared resources that handlers need access to.
/// All fields are designed for cheap cloning across async tasks.
#[derive(Clone)]
pub struct AppState {
    /// Parsed food and exercise catalogs
    pub catalog: Arc<Catalog>,
    /// In-memory meal/exercise log store
    pub tracking: TrackingStore,
    /// Advice service (knowledge base + sessions + LLM client)
    pub advisor: Arc<Advisor>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new application state
    ///
    /// Parses the embedded catalogs and constructs the LLM client from
    /// configuration. Called once at startup.
    pub fn new(config: AppConfig) -> Result<Self> {
        let catalog = Catalog::load()?;
        let llm = LlmClient::new(&config.ai);

        Ok(Self {
            catalog: Arc::new(catalog),
            tracking: TrackingStore::new(),
            advisor: Arc::new(Advisor::new(llm)),
            config: Arc::new(config),
        })
    }

    /// Get a reference to the catalog
    #[inline]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_construction_loads_catalogs() {
        let state = AppState::new(AppConfig::default()).unwrap();
        assert!(state.catalog().food_count() > 0);
        assert!(state.catalog().exercise_count() > 0);
    }

    #[test]
    fn test_state_clone_is_cheap() {
        // This test ensures our state design allows cheap cloning
        let state = AppState::new(AppConfig::default()).unwrap();

        // Clone should be O(1) - just Arc increments
        let _cloned = state.clone();
    }
}
