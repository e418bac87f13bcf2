//! [`ServiceClient`]: [`BeerCatalog`] implementation that connects to alehoused over gRPC.
//!
//! All proto ↔ native type conversions are centralized in [`crate::server::convert`].

use async_trait::async_trait;
use tonic::transport::Channel;

use crate::server::proto;
use crate::server::proto::beer_service_client::BeerServiceClient;
use crate::{
    AlehouseError, Beer, BeerCatalog, CreateBeerParams, DeleteBeerParams, GetBeerParams,
    ListBeersParams, Result, UpdateBeerParams,
};

/// A [`BeerCatalog`] client that connects to a remote alehoused server.
///
/// Every catalog method is forwarded over gRPC. Parameters are not validated
/// locally; the server is the single authority.
#[derive(Clone)]
pub struct ServiceClient {
    inner: BeerServiceClient<Channel>,
}

impl ServiceClient {
    /// Connect to an alehoused server at the given address.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let client = ServiceClient::connect("http://127.0.0.1:50000").await?;
    /// ```
    pub async fn connect(addr: impl Into<String>) -> Result<Self> {
        let addr = addr.into();
        let inner = BeerServiceClient::connect(addr.clone())
            .await
            .map_err(|e| AlehouseError::Transport(format!("failed to connect to {addr}: {e}")))?;
        Ok(Self { inner })
    }

    /// Ask the server whether it is up, returning its version string.
    pub async fn health(&self) -> Result<String> {
        let response = self
            .inner
            .clone()
            .health(proto::HealthRequest {})
            .await
            .map_err(from_status)?
            .into_inner();
        if !response.healthy {
            return Err(AlehouseError::Transport("server reports unhealthy".to_string()));
        }
        Ok(response.version)
    }
}

/// Convert [`tonic::Status`] to [`AlehouseError`].
///
/// Only `INVALID_ARGUMENT` is caller-correctable; the message is kept as-is.
pub fn from_status(status: tonic::Status) -> AlehouseError {
    match status.code() {
        tonic::Code::InvalidArgument => AlehouseError::validation(status.message()),
        _ => AlehouseError::Transport(status.message().to_string()),
    }
}

// =============================================================================
// BeerCatalog implementation
// =============================================================================

#[async_trait]
impl BeerCatalog for ServiceClient {
    async fn create_beer(&self, params: CreateBeerParams) -> Result<Beer> {
        let response = self
            .inner
            .clone()
            .create_beer(proto::CreateBeerRequest::from(params))
            .await
            .map_err(from_status)?;
        Ok(response.into_inner().into())
    }

    async fn get_beer(&self, params: GetBeerParams) -> Result<Beer> {
        let response = self
            .inner
            .clone()
            .get_beer(proto::GetBeerRequest::from(params))
            .await
            .map_err(from_status)?;
        Ok(response.into_inner().into())
    }

    async fn update_beer(&self, params: UpdateBeerParams) -> Result<Beer> {
        let response = self
            .inner
            .clone()
            .update_beer(proto::UpdateBeerRequest::from(params))
            .await
            .map_err(from_status)?;
        Ok(response.into_inner().into())
    }

    async fn delete_beer(&self, params: DeleteBeerParams) -> Result<()> {
        self.inner
            .clone()
            .delete_beer(proto::DeleteBeerRequest::from(params))
            .await
            .map_err(from_status)?;
        Ok(())
    }

    async fn list_beers(&self, params: ListBeersParams) -> Result<Vec<Beer>> {
        let response = self
            .inner
            .clone()
            .list_beers(proto::ListBeersRequest::from(params))
            .await
            .map_err(from_status)?;
        Ok(response.into_inner().into())
    }
}
