//! Service container for dependency injection
//!
//! Wires up the services with their store dependencies.

use std::sync::Arc;

use crate::application::services::{ItemService, LinkService};
use crate::config::Settings;
use crate::infrastructure::json_store::JsonStore;
use crate::infrastructure::traits::{LinkStore, NodeStore};
use crate::infrastructure::InfraResult;

/// Container holding the application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Item hierarchy service
    pub items: ItemService,

    /// Link shortener service
    pub links: LinkService,
}

impl ServiceContainer {
    /// Create a service container backed by the JSON store at the
    /// settings-configured path.
    pub fn new(settings: Settings) -> InfraResult<Self> {
        let store = Arc::new(
            JsonStore::open(&settings.data_file)
                .map_err(|e| crate::infrastructure::InfraError::io("open data file", e))?,
        );
        Ok(Self::with_deps(settings, store.clone(), store))
    }

    /// Create a service container with custom stores (for testing).
    pub fn with_deps(
        settings: Settings,
        nodes: Arc<dyn NodeStore>,
        links: Arc<dyn LinkStore>,
    ) -> Self {
        let settings = Arc::new(settings);
        let items = ItemService::new(nodes);
        let links = LinkService::new(links, settings.public_base_url.clone());

        Self {
            settings,
            items,
            links,
        }
    }
}
