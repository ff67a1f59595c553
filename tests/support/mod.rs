//! Shared fixtures: a local HTTP server standing in for the live API.

use std::net::SocketAddr;

use axum::Router;
use tokio::task::JoinHandle;

/// Minimal valid PNG payload (magic bytes plus filler).
pub const PNG_BYTES: &[u8] = &[
    0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d,
];

/// Serve `router` on an ephemeral local port. The server runs until the
/// test process exits.
pub async fn serve(router: Router) -> (SocketAddr, JoinHandle<()>) {
    let server = axum::Server::bind(&"127.0.0.1:0".parse().unwrap())
        .serve(router.into_make_service());
    let addr = server.local_addr();
    let handle = tokio::spawn(async move {
        let _ = server.await;
    });
    (addr, handle)
}

pub fn base_url(addr: SocketAddr) -> String {
    format!("http://{addr}")
}
