use serde::{Deserialize, Serialize};

/// A shipment record tracked by the registry.
///
/// A consignment arrives from the caller with `vessel_id` empty and is only
/// ever persisted after a vessel has been assigned to it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consignment {
    pub id: String,
    pub description: String,
    pub weight: u32,
    pub containers: Vec<Container>,
    pub vessel_id: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    pub id: String,
    pub customer_id: String,
    pub origin: String,
}
