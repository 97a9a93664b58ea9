use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{Consignment, Error};

/// Requirements a vessel must meet to carry a consignment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VesselSpecification {
    pub max_weight: u32,
    pub capacity: u32,
}

impl From<&Consignment> for VesselSpecification {
    fn from(consignment: &Consignment) -> Self {
        VesselSpecification {
            max_weight: consignment.weight,
            capacity: consignment.containers.len() as u32,
        }
    }
}

/// The vessel chosen by the allocation service.
///
/// `vessel_name` is informational only and is never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VesselAssignment {
    pub vessel_id: String,
    pub vessel_name: String,
}

/// Looks up an available vessel for a specification.
///
/// Implementations hold no state between invocations and perform no retries.
/// A failed lookup surfaces as [`Error::AllocationFailed`] carrying the
/// underlying cause.
#[async_trait]
pub trait VesselAllocator: Send + Sync {
    async fn find_available(&self, spec: VesselSpecification) -> Result<VesselAssignment, Error>;
}
