use tracing::{info, instrument};
use uuid::Uuid;

use crate::{Consignment, ConsignmentStore, Error, VesselAllocator, VesselSpecification};

/// Orchestrates consignment registration and retrieval.
///
/// The store and allocator are injected at construction; the service holds
/// no other state.
pub struct ConsignmentService<S, V> {
    store: S,
    allocator: V,
}

impl<S, V> ConsignmentService<S, V>
where
    S: ConsignmentStore,
    V: VesselAllocator,
{
    pub fn new(store: S, allocator: V) -> Self {
        ConsignmentService { store, allocator }
    }

    /// Register a consignment, resolving its carrying vessel first.
    ///
    /// Nothing is stored when the vessel lookup fails.
    #[instrument(
        skip(self, req),
        fields(weight = req.weight, containers = req.containers.len())
    )]
    pub async fn create_consignment(&self, mut req: Consignment) -> Result<Consignment, Error> {
        let spec = VesselSpecification::from(&req);
        let assignment = self.allocator.find_available(spec).await?;
        info!(vessel = %assignment.vessel_name, "found a vessel");

        if req.id.is_empty() {
            req.id = Uuid::new_v4().to_string();
        }
        req.vessel_id = assignment.vessel_id;

        self.store.create(req).await
    }

    /// All recorded consignments, in insertion order.
    pub async fn get_consignments(&self) -> Vec<Consignment> {
        self.store.get_all().await
    }
}
