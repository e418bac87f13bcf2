//! In-process beer store.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::{
    AlehouseError, Beer, BeerRepository, CreateBeerParams, DeleteBeerParams, GetBeerParams,
    ListBeersParams, Result, UpdateBeerParams, ValidationError,
};

/// Source of identifiers for newly created beers.
pub type IdGenerator = Arc<dyn Fn() -> String + Send + Sync>;

/// [`BeerRepository`] that keeps records in memory, in insertion order.
///
/// Deleting an identifier that does not exist succeeds.
pub struct InMemoryBeerRepository {
    beers: RwLock<Vec<Beer>>,
    page_size: usize,
    generate_id: IdGenerator,
}

impl InMemoryBeerRepository {
    /// Beers returned per page unless configured otherwise.
    pub const DEFAULT_PAGE_SIZE: usize = 50;

    pub fn new() -> Self {
        Self {
            beers: RwLock::new(Vec::new()),
            page_size: Self::DEFAULT_PAGE_SIZE,
            generate_id: Arc::new(|| uuid::Uuid::new_v4().to_string()),
        }
    }

    /// Set the page size. Values below one are treated as one.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn with_id_generator(mut self, generate_id: IdGenerator) -> Self {
        self.generate_id = generate_id;
        self
    }

    /// Number of stored beers.
    pub async fn len(&self) -> usize {
        self.beers.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.beers.read().await.is_empty()
    }
}

impl Default for InMemoryBeerRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BeerRepository for InMemoryBeerRepository {
    async fn create_beer(&self, params: &CreateBeerParams) -> Result<Beer> {
        let mut beers = self.beers.write().await;
        let id = (self.generate_id)();
        if beers.iter().any(|b| b.id == id) {
            return Err(AlehouseError::Storage(format!("duplicate beer ID: {id}")));
        }
        let beer = Beer {
            id,
            name: params.name.clone(),
            beer_type: params.beer_type,
            brewer: params.brewer.clone(),
            country: params.country.clone(),
        };
        beer.validate()?;
        beers.push(beer.clone());
        debug!(id = %beer.id, "beer stored");
        Ok(beer)
    }

    async fn get_beer(&self, params: &GetBeerParams) -> Result<Beer> {
        self.beers
            .read()
            .await
            .iter()
            .find(|b| b.id == params.id)
            .cloned()
            .ok_or_else(|| AlehouseError::NotFound(params.id.clone()))
    }

    async fn update_beer(&self, params: &UpdateBeerParams) -> Result<Beer> {
        if params.name.as_deref() == Some("") {
            return Err(ValidationError::new("beer name is empty").into());
        }
        let mut beers = self.beers.write().await;
        let beer = beers
            .iter_mut()
            .find(|b| b.id == params.id)
            .ok_or_else(|| AlehouseError::NotFound(params.id.clone()))?;
        if let Some(name) = &params.name {
            beer.name.clone_from(name);
        }
        if let Some(beer_type) = params.beer_type {
            beer.beer_type = beer_type;
        }
        if let Some(brewer) = &params.brewer {
            beer.brewer.clone_from(brewer);
        }
        if let Some(country) = &params.country {
            beer.country.clone_from(country);
        }
        Ok(beer.clone())
    }

    async fn delete_beer(&self, params: &DeleteBeerParams) -> Result<()> {
        let mut beers = self.beers.write().await;
        let before = beers.len();
        beers.retain(|b| b.id != params.id);
        if beers.len() == before {
            debug!(id = %params.id, "delete of unknown beer ignored");
        }
        Ok(())
    }

    async fn list_beers(&self, params: &ListBeersParams) -> Result<Vec<Beer>> {
        let page = usize::try_from(params.page.max(1)).unwrap_or(1);
        let skip = (page - 1).saturating_mul(self.page_size);
        Ok(self
            .beers
            .read()
            .await
            .iter()
            .skip(skip)
            .take(self.page_size)
            .cloned()
            .collect())
    }
}
