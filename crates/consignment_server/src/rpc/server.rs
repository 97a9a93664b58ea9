use consignment::{Consignment, ConsignmentService, ConsignmentStore, Error, VesselAllocator};
use tonic::{Request, Response, Status};

use super::proto::consignment as proto;
pub use super::proto::consignment::shipping_service_server::ShippingServiceServer;

/// gRPC surface over [`ConsignmentService`].
pub struct ShippingApi<S, V> {
    service: ConsignmentService<S, V>,
}

impl<S, V> ShippingApi<S, V> {
    pub fn new(service: ConsignmentService<S, V>) -> Self {
        ShippingApi { service }
    }
}

#[tonic::async_trait]
impl<S, V> proto::shipping_service_server::ShippingService for ShippingApi<S, V>
where
    S: ConsignmentStore + 'static,
    V: VesselAllocator + 'static,
{
    async fn create_consignment(
        &self,
        request: Request<proto::Consignment>,
    ) -> Result<Response<proto::Response>, Status> {
        let req = Consignment::from(request.into_inner());
        let stored = self
            .service
            .create_consignment(req)
            .await
            .map_err(status_from_error)?;

        Ok(Response::new(proto::Response {
            created: true,
            consignment: Some(stored.into()),
            consignments: vec![],
        }))
    }

    async fn get_consignments(
        &self,
        _request: Request<proto::GetRequest>,
    ) -> Result<Response<proto::Response>, Status> {
        let consignments = self.service.get_consignments().await;

        Ok(Response::new(proto::Response {
            created: false,
            consignment: None,
            consignments: consignments.into_iter().map(Into::into).collect(),
        }))
    }
}

fn status_from_error(err: Error) -> Status {
    match &err {
        Error::AllocationFailed(_) => Status::failed_precondition(err.to_string()),
        Error::InvalidRecord => Status::invalid_argument(err.to_string()),
        Error::StoreFailed(_) => Status::internal(err.to_string()),
    }
}

impl From<proto::Consignment> for Consignment {
    fn from(consignment: proto::Consignment) -> Self {
        Consignment {
            id: consignment.id,
            description: consignment.description,
            weight: consignment.weight,
            containers: consignment.containers.into_iter().map(Into::into).collect(),
            vessel_id: consignment.vessel_id,
        }
    }
}

impl From<Consignment> for proto::Consignment {
    fn from(consignment: Consignment) -> Self {
        proto::Consignment {
            id: consignment.id,
            description: consignment.description,
            weight: consignment.weight,
            containers: consignment.containers.into_iter().map(Into::into).collect(),
            vessel_id: consignment.vessel_id,
        }
    }
}

impl From<proto::Container> for consignment::Container {
    fn from(container: proto::Container) -> Self {
        consignment::Container {
            id: container.id,
            customer_id: container.customer_id,
            origin: container.origin,
        }
    }
}

impl From<consignment::Container> for proto::Container {
    fn from(container: consignment::Container) -> Self {
        proto::Container {
            id: container.id,
            customer_id: container.customer_id,
            origin: container.origin,
        }
    }
}
