//! Application handlers.

use crate::router::{Request, Response};
use crate::{greeting, page, response};

/// `GET /`: the welcome page.
pub async fn index(_req: Request) -> Response {
    response::html(page::render_index(greeting::welcome()))
}

/// `GET /healthz`: liveness probe.
///
/// Always `200 OK` with body `ok`. If the process can answer HTTP at all it
/// is alive, so this handler deliberately depends on nothing.
pub async fn liveness(_req: Request) -> Response {
    response::text("ok")
}

/// `GET /readyz`: readiness probe.
///
/// The service holds no connections, caches, or warm-up state, so ready is
/// unconditional: `200 OK` with body `ready`.
pub async fn readiness(_req: Request) -> Response {
    response::text("ready")
}
