#![allow(dead_code)]

use axum::{
    http::{header::CONTENT_TYPE, StatusCode},
    routing::get,
    Router,
};

pub const WEEKLY_PATH: &str = "/api/v1/weekly";

pub const TWO_DAYS: &str = r#"{
    "success": true,
    "data": [
        {"date": "2024-01-01", "keyPresses": 100, "leftClicks": 10, "rightClicks": 2},
        {"date": "2024-01-02", "keyPresses": 50, "leftClicks": 5, "rightClicks": 1}
    ]
}"#;

/// Serves `body` with `status` on a random local port and returns the
/// weekly endpoint URL. The server lives as long as the test runtime.
pub async fn spawn_upstream(status: StatusCode, body: &str) -> String {
    let body = body.to_string();
    let app = Router::new().route(
        WEEKLY_PATH,
        get(move || {
            let body = body.clone();
            async move { (status, [(CONTENT_TYPE, "application/json")], body) }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind upstream");
    let addr = listener.local_addr().expect("upstream addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("upstream server");
    });

    format!("http://{addr}{WEEKLY_PATH}")
}
