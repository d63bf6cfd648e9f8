//! End-to-end tests against a real listener.
//!
//! Each test binds its own ephemeral port, serves the production router on it
//! and talks to it over TCP with reqwest.

use std::net::SocketAddr;

use pipeline_responder::{bind_listener, create_router, serve, ServerError};
use reqwest::StatusCode;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// A running server plus the means to stop it.
struct TestServer {
    addr: SocketAddr,
    stop: Option<oneshot::Sender<()>>,
    task: JoinHandle<Result<(), ServerError>>,
}

impl TestServer {
    async fn start() -> Self {
        let listener = bind_listener("127.0.0.1:0".parse().unwrap())
            .await
            .expect("bind ephemeral port");
        let addr = listener.local_addr().unwrap();

        let (tx, rx) = oneshot::channel::<()>();
        let task = tokio::spawn(serve(listener, create_router(), async move {
            let _ = rx.await;
        }));

        Self {
            addr,
            stop: Some(tx),
            task,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    async fn shutdown(mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        self.task
            .await
            .expect("server task panicked")
            .expect("server returned error");
    }
}

#[tokio::test]
async fn get_root_returns_greeting() {
    let server = TestServer::start().await;

    let response = reqwest::get(server.url("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "Hello from CI/CD Pipeline!");

    server.shutdown().await;
}

#[tokio::test]
async fn get_health_returns_ok() {
    let server = TestServer::start().await;

    let response = reqwest::get(server.url("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["cache-control"], "no-store");
    assert_eq!(response.text().await.unwrap(), "OK");

    server.shutdown().await;
}

#[tokio::test]
async fn unknown_path_returns_not_found() {
    let server = TestServer::start().await;

    let response = reqwest::get(server.url("/nonexistent")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    server.shutdown().await;
}

#[tokio::test]
async fn post_health_returns_not_found() {
    let server = TestServer::start().await;

    let response = reqwest::Client::new()
        .post(server.url("/health"))
        .body("ignored")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    server.shutdown().await;
}

#[tokio::test]
async fn repeated_requests_are_identical() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    let mut bodies = Vec::new();
    for _ in 0..10 {
        let response = client.get(server.url("/health")).send().await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        bodies.push(response.bytes().await.unwrap());
    }
    assert!(bodies.windows(2).all(|pair| pair[0] == pair[1]));

    drop(client);
    server.shutdown().await;
}

#[tokio::test]
async fn concurrent_requests_are_served() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    let requests = (0..16).map(|i| {
        let client = client.clone();
        let url = if i % 2 == 0 {
            server.url("/")
        } else {
            server.url("/health")
        };
        tokio::spawn(async move { client.get(url).send().await.unwrap().status() })
    });

    for handle in requests.collect::<Vec<_>>() {
        assert_eq!(handle.await.unwrap(), StatusCode::OK);
    }

    drop(client);
    server.shutdown().await;
}

#[tokio::test]
async fn second_listener_on_same_port_fails() {
    let server = TestServer::start().await;

    let err = bind_listener(server.addr).await.unwrap_err();
    assert!(matches!(err, ServerError::Bind { .. }));

    // The original instance keeps serving.
    let response = reqwest::get(server.url("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    server.shutdown().await;
}
