//! Core of the consignment registry.
//!
//! Holds the domain model, the [`ConsignmentStore`] and [`VesselAllocator`]
//! capability seams, the in memory store, and the [`ConsignmentService`]
//! orchestration. Transport concerns live in the server crate.

mod consignment;
mod error;
mod service;
mod store;
mod vessel;

pub use consignment::{Consignment, Container};
pub use error::{BoxError, Error};
pub use service::ConsignmentService;
pub use store::{ConsignmentStore, InMemoryStore};
pub use vessel::{VesselAllocator, VesselAssignment, VesselSpecification};
