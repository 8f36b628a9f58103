use std::any::Any;

use axum::{
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;

use super::{app_response::AppError, AppRouter};

mod api;
mod index;

pub(super) fn router() -> AppRouter {
    Router::new()
        .merge(index::router())
        .nest("/api", api::router())
        .route("/*path", any(handle_404))
        .layer(CatchPanicLayer::custom(
            |err: Box<dyn Any + Send + 'static>| -> Response {
                let details = err.downcast_ref::<String>().map_or_else(
                    || {
                        err.downcast_ref::<&str>().map_or_else(
                            || "Unknown panic message".to_string(),
                            |s| (*s).to_string(),
                        )
                    },
                    std::clone::Clone::clone,
                );

                AppError::Unexpected(anyhow::anyhow!("Handler panicked: {details}")).into_response()
            },
        ))
}

async fn handle_404() -> AppError {
    AppError::NotFound
}
