pub mod consignment {
    tonic::include_proto!("consignment");
}

pub mod vessel {
    tonic::include_proto!("vessel");
}
