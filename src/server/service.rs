//! gRPC service implementation.
//!
//! [`AlehouseService`] is a thin translation layer: it decodes requests into
//! parameter objects, hands them to a [`BeerCatalog`], and encodes the result.
//! It is also the only place where errors are classified into gRPC codes.

use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use tonic::{Code, Request, Response, Status};
use tracing::{Instrument, debug, info_span, warn};

use crate::telemetry;
use crate::{
    AlehouseError, BeerCatalog, CreateBeerParams, DeleteBeerParams, ErrorClass, GetBeerParams,
    ListBeersParams,
};

use super::proto;
use super::proto::beer_service_server::BeerService;
use super::request_id::RequestId;
use super::update_mask;

/// gRPC service that wraps a [`BeerCatalog`] implementation.
pub struct AlehouseService<C: BeerCatalog> {
    catalog: Arc<C>,
}

impl<C: BeerCatalog> AlehouseService<C> {
    /// Create a new service wrapping the given catalog.
    pub fn new(catalog: Arc<C>) -> Self {
        Self { catalog }
    }
}

/// Convert an [`AlehouseError`] into a [`Status`].
///
/// Validation failures become `INVALID_ARGUMENT`, everything else
/// `INTERNAL`. The message text is carried over unchanged.
pub fn to_status(err: AlehouseError) -> Status {
    let message = err.to_string();
    match err.class() {
        ErrorClass::InvalidArgument => Status::invalid_argument(message),
        ErrorClass::Internal => Status::internal(message),
    }
}

/// Run one RPC inside a span tagged with its request id, recording outcome
/// metrics and logging failures.
async fn observe<T>(
    operation: &'static str,
    request_id: RequestId,
    rpc: impl Future<Output = Result<T, Status>>,
) -> Result<T, Status> {
    let span = info_span!("rpc", operation, request_id = %request_id);
    let start = Instant::now();
    let result = rpc.instrument(span.clone()).await;

    let status = match &result {
        Ok(_) => "ok",
        Err(s) if s.code() == Code::InvalidArgument => "invalid_argument",
        Err(_) => "internal",
    };
    span.in_scope(|| match &result {
        Ok(_) => debug!(elapsed_ms = start.elapsed().as_millis() as u64, "rpc ok"),
        Err(s) if s.code() == Code::InvalidArgument => {
            debug!(message = s.message(), "rpc rejected")
        }
        Err(s) => warn!(message = s.message(), "rpc failed"),
    });

    metrics::counter!(telemetry::REQUESTS_TOTAL,
        "operation" => operation,
        "status" => status,
    )
    .increment(1);
    metrics::histogram!(telemetry::REQUEST_DURATION_SECONDS,
        "operation" => operation,
    )
    .record(start.elapsed().as_secs_f64());

    result
}

#[tonic::async_trait]
impl<C: BeerCatalog + 'static> BeerService for AlehouseService<C> {
    async fn create_beer(
        &self,
        request: Request<proto::CreateBeerRequest>,
    ) -> Result<Response<proto::Beer>, Status> {
        let request_id = RequestId::of(&request);
        let params: CreateBeerParams = request.into_inner().into();
        observe("create_beer", request_id, async {
            let beer = self.catalog.create_beer(params).await.map_err(to_status)?;
            Ok::<_, Status>(Response::new(beer.into()))
        })
        .await
    }

    async fn get_beer(
        &self,
        request: Request<proto::GetBeerRequest>,
    ) -> Result<Response<proto::Beer>, Status> {
        let request_id = RequestId::of(&request);
        let params: GetBeerParams = request.into_inner().into();
        observe("get_beer", request_id, async {
            let beer = self.catalog.get_beer(params).await.map_err(to_status)?;
            Ok::<_, Status>(Response::new(beer.into()))
        })
        .await
    }

    async fn update_beer(
        &self,
        request: Request<proto::UpdateBeerRequest>,
    ) -> Result<Response<proto::Beer>, Status> {
        let request_id = RequestId::of(&request);
        let req = request.into_inner();
        observe("update_beer", request_id, async {
            let params =
                update_mask::update_params(req.beer.unwrap_or_default(), req.update_mask)?;
            let beer = self.catalog.update_beer(params).await.map_err(to_status)?;
            Ok::<_, Status>(Response::new(beer.into()))
        })
        .await
    }

    async fn delete_beer(
        &self,
        request: Request<proto::DeleteBeerRequest>,
    ) -> Result<Response<()>, Status> {
        let request_id = RequestId::of(&request);
        let params: DeleteBeerParams = request.into_inner().into();
        observe("delete_beer", request_id, async {
            self.catalog.delete_beer(params).await.map_err(to_status)?;
            Ok::<_, Status>(Response::new(()))
        })
        .await
    }

    async fn list_beers(
        &self,
        request: Request<proto::ListBeersRequest>,
    ) -> Result<Response<proto::ListBeersResponse>, Status> {
        let request_id = RequestId::of(&request);
        let params: ListBeersParams = request.into_inner().into();
        observe("list_beers", request_id, async {
            let beers = self.catalog.list_beers(params).await.map_err(to_status)?;
            Ok::<_, Status>(Response::new(beers.into()))
        })
        .await
    }

    async fn health(
        &self,
        _request: Request<proto::HealthRequest>,
    ) -> Result<Response<proto::HealthResponse>, Status> {
        Ok(Response::new(proto::HealthResponse {
            healthy: true,
            version: crate::version_string(),
        }))
    }
}
