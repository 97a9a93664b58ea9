mod proto;
pub mod server;

pub use proto::{consignment, vessel};
pub use server::{ShippingApi, ShippingServiceServer};
