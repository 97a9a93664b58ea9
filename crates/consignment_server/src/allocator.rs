use async_trait::async_trait;
use consignment::{Error, VesselAllocator, VesselAssignment, VesselSpecification};
use tonic::transport::Channel;
use tonic::Request;

use crate::rpc::vessel as proto;
use crate::rpc::vessel::vessel_service_client::VesselServiceClient;

/// gRPC client facade over the vessel allocation service.
///
/// Holds no state between lookups beyond the underlying channel.
#[derive(Clone)]
pub struct GrpcVesselAllocator {
    client: VesselServiceClient<Channel>,
}

impl GrpcVesselAllocator {
    /// Connect to the vessel service at `url`.
    pub async fn connect(url: impl Into<String>) -> Result<Self, tonic::transport::Error> {
        Ok(GrpcVesselAllocator {
            client: VesselServiceClient::connect(url.into()).await?,
        })
    }
}

#[async_trait]
impl VesselAllocator for GrpcVesselAllocator {
    async fn find_available(&self, spec: VesselSpecification) -> Result<VesselAssignment, Error> {
        let request = Request::new(proto::Specification {
            max_weight: spec.max_weight,
            capacity: spec.capacity,
        });

        let response = self
            .client
            .clone()
            .find_available(request)
            .await
            .map_err(|status| Error::AllocationFailed(Box::new(status)))?
            .into_inner();

        let vessel = response
            .vessel
            .ok_or_else(|| Error::AllocationFailed("no vessel met the specification".into()))?;

        Ok(VesselAssignment {
            vessel_id: vessel.id,
            vessel_name: vessel.name,
        })
    }
}
