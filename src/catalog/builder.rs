//! Builder for configuring catalog instances

use std::sync::Arc;

use super::BeerInteractor;
use crate::storage::{IdGenerator, InMemoryBeerRepository};
use crate::{AlehouseError, BeerRepository, Result};

/// Main entry point for creating catalog instances.
pub struct Alehouse;

impl Alehouse {
    /// Create a new builder for configuring the catalog.
    pub fn builder() -> AlehouseBuilder {
        AlehouseBuilder::new()
    }
}

/// Builder for configuring catalog instances.
///
/// Without an explicit [`repository`](Self::repository), beers are kept in
/// an [`InMemoryBeerRepository`] configured from `page_size` and
/// `id_generator`.
pub struct AlehouseBuilder {
    repository: Option<Arc<dyn BeerRepository>>,
    page_size: usize,
    id_generator: Option<IdGenerator>,
}

impl AlehouseBuilder {
    pub fn new() -> Self {
        Self {
            repository: None,
            page_size: InMemoryBeerRepository::DEFAULT_PAGE_SIZE,
            id_generator: None,
        }
    }

    /// Use a custom persistence adapter.
    pub fn repository(mut self, repository: Arc<dyn BeerRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Beers per page for the in-memory store (default: 50).
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Identifier source for the in-memory store (default: UUID v4).
    pub fn id_generator(mut self, generator: impl Fn() -> String + Send + Sync + 'static) -> Self {
        self.id_generator = Some(Arc::new(generator));
        self
    }

    pub fn build(self) -> Result<BeerInteractor> {
        let repository = match self.repository {
            Some(repository) => repository,
            None => {
                if self.page_size == 0 {
                    return Err(AlehouseError::Configuration(
                        "page size must be at least one".to_string(),
                    ));
                }
                let mut store = InMemoryBeerRepository::new().with_page_size(self.page_size);
                if let Some(generator) = self.id_generator {
                    store = store.with_id_generator(generator);
                }
                Arc::new(store)
            }
        };
        Ok(BeerInteractor::new(repository))
    }
}

impl Default for AlehouseBuilder {
    fn default() -> Self {
        Self::new()
    }
}
