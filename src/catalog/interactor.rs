//! BeerInteractor - validation gate in front of a repository

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::{
    Beer, BeerCatalog, BeerRepository, CreateBeerParams, DeleteBeerParams, GetBeerParams,
    ListBeersParams, Result, UpdateBeerParams,
};

/// Business layer for the beer catalog.
///
/// Every operation validates its parameters before touching storage and
/// otherwise passes the repository's result through untouched. Errors are
/// never wrapped, retried or swallowed.
#[derive(Clone)]
pub struct BeerInteractor {
    repo: Arc<dyn BeerRepository>,
}

impl BeerInteractor {
    pub fn new(repo: Arc<dyn BeerRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl BeerCatalog for BeerInteractor {
    #[instrument(skip_all, fields(name = %params.name))]
    async fn create_beer(&self, params: CreateBeerParams) -> Result<Beer> {
        params.validate().inspect_err(|e| debug!(error = %e, "rejected"))?;
        self.repo.create_beer(&params).await
    }

    #[instrument(skip_all, fields(id = %params.id))]
    async fn get_beer(&self, params: GetBeerParams) -> Result<Beer> {
        params.validate().inspect_err(|e| debug!(error = %e, "rejected"))?;
        self.repo.get_beer(&params).await
    }

    #[instrument(skip_all, fields(id = %params.id))]
    async fn update_beer(&self, params: UpdateBeerParams) -> Result<Beer> {
        params.validate().inspect_err(|e| debug!(error = %e, "rejected"))?;
        self.repo.update_beer(&params).await
    }

    #[instrument(skip_all, fields(id = %params.id))]
    async fn delete_beer(&self, params: DeleteBeerParams) -> Result<()> {
        params.validate().inspect_err(|e| debug!(error = %e, "rejected"))?;
        self.repo.delete_beer(&params).await
    }

    #[instrument(skip_all, fields(page = params.page))]
    async fn list_beers(&self, params: ListBeersParams) -> Result<Vec<Beer>> {
        params.validate().inspect_err(|e| debug!(error = %e, "rejected"))?;
        self.repo.list_beers(&params).await
    }
}
