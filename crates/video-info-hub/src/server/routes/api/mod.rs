use axum::Router;

use crate::server::AppRouter;

mod video_info;

pub(super) fn router() -> AppRouter {
    Router::new().nest("/video-info", video_info::router())
}
