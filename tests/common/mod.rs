//! Shared utilities for integration testing.

use std::net::SocketAddr;
use tokio::net::TcpListener;
use user_service::config::ServiceConfig;
use user_service::http::HttpServer;
use user_service::lifecycle::Shutdown;

/// Spawn the service on an ephemeral port with a fresh store.
///
/// Returns the bound address and the shutdown handle that stops the
/// server task.
pub async fn spawn_service() -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(ServiceConfig::default());
    let rx = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    (addr, shutdown)
}

/// HTTP client that bypasses any ambient proxy settings.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
