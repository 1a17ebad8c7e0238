//! Service wiring for the API process.

use std::sync::Arc;

use vitrine_catalog::{CatalogService, InMemoryProductStore};

/// Shared per-process services, attached to the router as an extension.
pub struct AppServices {
    pub catalog: CatalogService,
}

/// Wire the catalog service over the in-memory store.
///
/// A persistent `ProductStore` implementation would be swapped in here.
pub fn build_services() -> AppServices {
    let store = Arc::new(InMemoryProductStore::new());
    AppServices {
        catalog: CatalogService::new(store),
    }
}
