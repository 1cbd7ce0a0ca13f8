//! Home handler

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub message: String,
    pub status: bool,
}

/// GET /
pub async fn home() -> Json<HomeResponse> {
    Json(HomeResponse {
        message: "Hello world".to_string(),
        status: true,
    })
}
