//! Server entry point.
//!
//! Builds the router and serves it on port 8080. A bind failure is fatal.

use std::net::{Ipv4Addr, SocketAddr};

use efv_api::error::ServerError;
use efv_api::{telemetry, PORT};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    telemetry::init();

    if let Err(e) = run().await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let app = efv_api::app();

    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, PORT));
    info!("Starting server on {}", addr);

    let listener = efv_api::bind(addr).await?;
    efv_api::serve(listener, app).await
}
