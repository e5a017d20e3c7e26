//! HTTP server and graceful shutdown.
//!
//! # Shutdown and containers
//!
//! `docker stop`, like any orchestrator running the image this repo
//! builds, sends **SIGTERM**, waits its grace period, then sends SIGKILL.
//!
//! The server reacts by:
//! 1. Immediately stopping `listener.accept()`, so no new connections
//!    are made.
//! 2. Letting every in-flight connection task run to completion.
//! 3. Returning from [`Server::serve`], which lets `main` exit cleanly.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use http::StatusCode;
use hyper::body::Incoming;
use hyper::service::service_fn;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder as ConnBuilder;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::error::Error;
use crate::response::{self, Body};
use crate::router::Router;

/// The HTTP server, bound and ready to serve.
pub struct Server {
    listener: TcpListener,
}

impl Server {
    /// Binds to `addr`.
    ///
    /// Binding happens here rather than inside [`serve`](Server::serve) so
    /// the caller can read the bound address first: with port 0 the OS
    /// picks a free port, which is how the integration tests run.
    pub async fn bind(addr: SocketAddr) -> Result<Self, Error> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| Error::Bind(addr, e))?;
        Ok(Self { listener })
    }

    /// The address the listener is actually bound to.
    pub fn local_addr(&self) -> Result<SocketAddr, Error> {
        Ok(self.listener.local_addr()?)
    }

    /// Accepts connections and dispatches requests through `router`.
    ///
    /// Returns only after a full graceful shutdown (SIGTERM or Ctrl-C,
    /// followed by all in-flight requests completing).
    pub async fn serve(self, router: Router) -> Result<(), Error> {
        let addr = self.listener.local_addr()?;

        // Shared across concurrent connection tasks without copying the
        // routing table.
        let router = Arc::new(router);

        info!(addr = %addr, "cicd101 listening");

        // JoinSet tracks every spawned connection task so shutdown can wait
        // for all of them.
        let mut tasks = tokio::task::JoinSet::new();

        let shutdown = shutdown_signal();
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                // `biased` checks arms top-to-bottom: a signal stops the
                // accept loop even when more connections are queued.
                biased;

                signal = &mut shutdown => {
                    info!(signal, in_flight = tasks.len(), "shutdown signal received, draining connections");
                    break;
                }

                res = self.listener.accept() => {
                    let (stream, remote_addr) = match res {
                        Ok(v) => v,
                        Err(e) => {
                            error!("accept error: {e}");
                            continue;
                        }
                    };

                    let router = Arc::clone(&router);
                    let io = TokioIo::new(stream);

                    tasks.spawn(async move {
                        // Called once per request on the connection, not
                        // once per connection.
                        let svc = service_fn(move |req| {
                            let router = Arc::clone(&router);
                            async move { dispatch(router, req).await }
                        });

                        // HTTP/1.1 or HTTP/2, whatever the client
                        // negotiates.
                        if let Err(e) = ConnBuilder::new(TokioExecutor::new())
                            .serve_connection(io, svc)
                            .await
                        {
                            error!(peer = %remote_addr, "connection error: {e}");
                        }
                    });
                }

                // Reap finished connection tasks so the JoinSet does not
                // grow without bound.
                Some(_) = tasks.join_next(), if !tasks.is_empty() => {}
            }
        }

        // Drain: every in-flight connection finishes before we return.
        while tasks.join_next().await.is_some() {}

        info!("cicd101 stopped");
        Ok(())
    }
}

// ── Request dispatch ──────────────────────────────────────────────────────────

/// Routes one request and produces one response, with an access-log line
/// carrying method, path, status, and latency.
///
/// The error type is [`Infallible`]: a router miss becomes a 404 response,
/// so hyper never sees an error.
async fn dispatch(
    router: Arc<Router>,
    req: http::Request<Incoming>,
) -> Result<http::Response<Body>, Infallible> {
    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let response = match router.lookup(&method, &path) {
        Some(handler) => handler.as_ref()(req).await,
        None => response::status(StatusCode::NOT_FOUND),
    };

    info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        elapsed_us = started.elapsed().as_micros() as u64,
        "request"
    );

    Ok(response)
}

// ── Shutdown signal ───────────────────────────────────────────────────────────

/// Resolves on the first shutdown signal the process receives, yielding the
/// signal's name for the drain log.
///
/// On Unix this covers **SIGTERM** (container runtimes) and **SIGINT**
/// (Ctrl-C, for local dev). On Windows only Ctrl-C is available.
async fn shutdown_signal() -> &'static str {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let sigterm = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    // `pending()` never resolves, so off Unix the SIGTERM arm is
    // effectively disabled.
    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => "SIGINT",
        _ = sigterm => "SIGTERM",
    }
}
