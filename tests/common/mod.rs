//! Local stand-in for the Cleanzy backend, served with axum on a random port.

#![allow(dead_code)]

use axum::Router;
use tokio::net::TcpListener;

/// Serves `router` on `127.0.0.1:0` and returns its base URL.
pub async fn spawn_backend(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test backend");
    let addr = listener.local_addr().expect("test backend addr");
    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("serve test backend");
    });
    format!("http://{addr}")
}

/// A base URL nothing is listening on.
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind throwaway listener");
    let addr = listener.local_addr().expect("throwaway addr");
    drop(listener);
    format!("http://{addr}")
}
