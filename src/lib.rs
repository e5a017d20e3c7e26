//! # cicd101
//!
//! A single-route welcome service: the smallest useful subject for a
//! build → test → containerize → push pipeline.
//!
//! ## The contract
//!
//! CircleCI builds, tests, and ships the image; Docker runs it. The service
//! does service things: answer `GET /` with the welcome page and answer the
//! orchestrator's probes. Every feature this crate skips (TLS, rate
//! limiting, rollout strategy) belongs to the platforms around it.
//!
//! What's left for the application:
//!
//! - One route: `GET /` renders the welcome page
//! - Radix-tree routing: O(path-length) lookup via [`matchit`]
//! - Async I/O: tokio and hyper, HTTP/1.1 and HTTP/2
//! - Graceful shutdown: SIGTERM / Ctrl-C, drains in-flight requests
//! - Health probes: `/healthz` and `/readyz`
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use cicd101::{Config, Router, Server, routes};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), cicd101::Error> {
//!     let app = Router::new()
//!         .get("/", routes::index)
//!         .get("/healthz", routes::liveness)
//!         .get("/readyz", routes::readiness);
//!
//!     let config = Config::from_env();
//!     Server::bind(config.socket_addr()).await?.serve(app).await
//! }
//! ```

mod config;
mod error;
mod page;
mod response;
mod router;
mod server;

pub mod greeting;
pub mod routes;

pub use config::Config;
pub use error::Error;
pub use greeting::{WELCOME_MESSAGE, welcome};
pub use page::render_index;
pub use response::Body;
pub use router::{Request, Response, Router};
pub use server::Server;
