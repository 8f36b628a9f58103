use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::server::AppRouter;

pub(super) fn router() -> AppRouter {
    Router::new().route("/", get(health))
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    message: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        message: "Backend is running!",
    })
}
