//! cicd101 entrypoint.
//!
//! Wires up logging, configuration, routes, and the server. Keep this file
//! minimal: behavior lives in the library modules, where the test suite can
//! reach it.
//!
//! Run with:
//!   RUST_LOG=info cargo run
//!
//! Try:
//!   curl http://localhost:3000/
//!   curl http://localhost:3000/healthz

use tracing_subscriber::EnvFilter;

use cicd101::{Config, Error, Router, Server, routes};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();

    let app = Router::new()
        .get("/", routes::index)
        .get("/healthz", routes::liveness)
        .get("/readyz", routes::readiness);

    Server::bind(config.socket_addr()).await?.serve(app).await
}
