//! End-to-end tests over real sockets.
//!
//! Each test boots the full server on an ephemeral loopback port and drives
//! it with a plain HTTP client, the same path a browser or the container
//! health check takes.

use std::net::{Ipv4Addr, SocketAddr};

use cicd101::{Router, Server, routes};

async fn spawn_server() -> SocketAddr {
    let server = Server::bind(SocketAddr::from((Ipv4Addr::LOCALHOST, 0)))
        .await
        .expect("bind ephemeral port");
    let addr = server.local_addr().expect("read bound address");

    let app = Router::new()
        .get("/", routes::index)
        .get("/healthz", routes::liveness)
        .get("/readyz", routes::readiness);

    tokio::spawn(server.serve(app));
    addr
}

#[tokio::test]
async fn index_returns_the_welcome_page() {
    let addr = spawn_server().await;

    let res = reqwest::get(format!("http://{addr}/")).await.expect("GET /");
    assert_eq!(res.status(), 200);

    let content_type = res
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    assert!(content_type.starts_with("text/html"), "got {content_type}");

    let body = res.text().await.expect("read body");
    assert!(body.contains("Welcome to CI/CD 101 using CircleCI!"));
}

#[tokio::test]
async fn index_is_identical_across_requests() {
    let addr = spawn_server().await;

    let first = reqwest::get(format!("http://{addr}/"))
        .await
        .expect("GET /")
        .text()
        .await
        .expect("read body");
    let second = reqwest::get(format!("http://{addr}/"))
        .await
        .expect("GET /")
        .text()
        .await
        .expect("read body");

    assert_eq!(first, second);
}

#[tokio::test]
async fn health_probes_answer() {
    let addr = spawn_server().await;

    let res = reqwest::get(format!("http://{addr}/healthz"))
        .await
        .expect("GET /healthz");
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.expect("read body"), "ok");

    let res = reqwest::get(format!("http://{addr}/readyz"))
        .await
        .expect("GET /readyz");
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.expect("read body"), "ready");
}

#[tokio::test]
async fn unknown_path_is_404() {
    let addr = spawn_server().await;

    let res = reqwest::get(format!("http://{addr}/missing"))
        .await
        .expect("GET /missing");
    assert_eq!(res.status(), 404);
}

#[tokio::test]
async fn unregistered_method_is_404() {
    let addr = spawn_server().await;

    let client = reqwest::Client::new();
    let res = client
        .post(format!("http://{addr}/"))
        .send()
        .await
        .expect("POST /");
    assert_eq!(res.status(), 404);
}
