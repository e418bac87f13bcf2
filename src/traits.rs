//! Catalog and persistence contracts

use async_trait::async_trait;

use crate::{
    Beer, CreateBeerParams, DeleteBeerParams, GetBeerParams, ListBeersParams, Result,
    UpdateBeerParams,
};

/// Persistence port for beers.
///
/// Implementations own the entity lifecycle: identifier assignment, storage
/// and paging. Callers are expected to have validated the parameters already.
/// Cancellation happens by dropping the returned future.
#[async_trait]
pub trait BeerRepository: Send + Sync {
    /// Store a new beer and return it with its assigned identifier.
    async fn create_beer(&self, params: &CreateBeerParams) -> Result<Beer>;

    /// Fetch a beer. Fails with [`AlehouseError::NotFound`](crate::AlehouseError::NotFound)
    /// when no record matches.
    async fn get_beer(&self, params: &GetBeerParams) -> Result<Beer>;

    /// Apply the fields present in the patch and return the full current record.
    async fn update_beer(&self, params: &UpdateBeerParams) -> Result<Beer>;

    /// Remove a beer.
    async fn delete_beer(&self, params: &DeleteBeerParams) -> Result<()>;

    /// One page of beers, in a stable order. Pages start at 1.
    async fn list_beers(&self, params: &ListBeersParams) -> Result<Vec<Beer>>;
}

/// The business-facing beer catalog.
///
/// Implemented locally by [`BeerInteractor`](crate::BeerInteractor) and
/// remotely by `ServiceClient`, so transport code can be written against
/// either.
#[async_trait]
pub trait BeerCatalog: Send + Sync {
    async fn create_beer(&self, params: CreateBeerParams) -> Result<Beer>;

    async fn get_beer(&self, params: GetBeerParams) -> Result<Beer>;

    async fn update_beer(&self, params: UpdateBeerParams) -> Result<Beer>;

    async fn delete_beer(&self, params: DeleteBeerParams) -> Result<()>;

    async fn list_beers(&self, params: ListBeersParams) -> Result<Vec<Beer>>;
}
