use std::net::SocketAddr;

use anyhow::Result;
use clap::Parser;
use consignment::{ConsignmentService, InMemoryStore};
use consignment_server::rpc::{ShippingApi, ShippingServiceServer};
use consignment_server::GrpcVesselAllocator;
use tonic::transport::Server;
use tracing::info;

const FILE_DESCRIPTOR_SET: &[u8] = tonic::include_file_descriptor_set!("consignment_descriptor");

/// Consignment registry service
#[derive(Parser, Debug)]
#[command(name = "consignment-server", version, about, long_about = None)]
struct Cli {
    /// Address to listen on
    #[clap(long, env, default_value = "0.0.0.0:50051")]
    addr: SocketAddr,
    /// URL of the vessel allocation service
    #[clap(long, env, default_value = "http://127.0.0.1:50052")]
    vessel_addr: String,
}

pub async fn start() -> Result<()> {
    let cli = Cli::parse();

    let allocator = GrpcVesselAllocator::connect(cli.vessel_addr).await?;
    let service = ConsignmentService::new(InMemoryStore::new(), allocator);

    let reflection_service = tonic_reflection::server::Builder::configure()
        .register_encoded_file_descriptor_set(FILE_DESCRIPTOR_SET)
        .build()?;

    info!("listening on {}", cli.addr);

    Server::builder()
        .add_service(reflection_service)
        .add_service(ShippingServiceServer::new(ShippingApi::new(service)))
        .serve(cli.addr)
        .await?;

    Ok(())
}
