use axum::{Router, routing::get};
use std::net::SocketAddr;

use crate::{api, config, info};

pub async fn start_api_server() {
    let app = Router::new()
        .route("/", get(api::status))
        .route("/health", get(api::health));

    let addr = SocketAddr::from(([0, 0, 0, 0], config::server_port()));
    info!("Keep-alive server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
