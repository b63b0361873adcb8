//! Demo liveness server: `GET /ping` answers `{"message":"pong"}`.

use anyhow::Result;
use axum::{Json, Router, routing::get};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[tokio::main]
async fn run() -> Result<()> {
    let app = Router::new().route("/ping", get(ping));

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
    eprintln!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}

async fn ping() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "pong" }))
}
