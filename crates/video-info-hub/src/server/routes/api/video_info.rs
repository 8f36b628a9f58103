use axum::{extract::State, routing::post, Json, Router};
use axum_extra::extract::WithRejection;
use serde::Deserialize;
use tracing::info;

use crate::{
    server::{
        app_response::{AppError, AppResult},
        AppRouter, AppState,
    },
    service::video_info::VideoInfoResponse,
};

pub(super) fn router() -> AppRouter {
    Router::new().route("/", post(video_info))
}

#[derive(Debug, Deserialize)]
struct VideoInfoPayload {
    #[serde(default)]
    url: Option<String>,
}

async fn video_info(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<VideoInfoPayload>, AppError>,
) -> AppResult<Json<VideoInfoResponse>> {
    let url = payload
        .url
        .filter(|url| !url.is_empty())
        .ok_or(AppError::MissingUrl)?;

    info!("Received URL: {url}");

    let media_info = state.extractor.extract(&url).await?;

    let response = VideoInfoResponse::from_media_info(media_info).ok_or(AppError::NoFormats)?;

    info!("Successfully processed URL: {url}");

    Ok(Json(response))
}
