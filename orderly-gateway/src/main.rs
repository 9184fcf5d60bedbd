//! Entry point for the `orderly-gateway` HTTP server.

use std::sync::Arc;

use orderly_gateway::{config::GatewayConfig, routes::create_router};
use orderly_store::MemoryStore;
use tracing::info;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = GatewayConfig::from_env();

    let store = Arc::new(MemoryStore::new(config.table_name.clone()));
    let app = create_router(store, config.cors);

    let listener = match tokio::net::TcpListener::bind(&config.listen_addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(addr = %config.listen_addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    info!(
        addr = %config.listen_addr,
        table = %config.table_name,
        "orderly-gateway listening"
    );

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}
