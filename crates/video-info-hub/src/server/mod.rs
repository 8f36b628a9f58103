use std::{net::SocketAddr, sync::Arc};

use app_config::Config;
use app_extractor::{Extractor, YtDlpExtractor};
use axum::{
    http::{header, HeaderValue, Request},
    response::Response,
};
use listenfd::ListenFd;
use once_cell::sync::Lazy;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::{self, CorsLayer},
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};
use tracing::{debug, field, info, Span};

mod app_response;
mod routes;

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    app_logger::info!("Starting server...");
    let state = AppState::new();
    app_logger::trace!(state = ?state, "Created app state");

    let router = routes::router();
    let router = add_middlewares(router).with_state(state);

    app_logger::trace!(?router, "Finished building app router");

    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0)? {
        Some(listener) => TcpListener::from_std(listener).expect("Failed to create listener"),
        None => {
            let host = Config::global().server.host.clone();
            let port = Config::global().server.port;

            TcpListener::bind((host, port))
                .await
                .expect("Failed to create listener")
        }
    };

    info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;
    Ok(())
}

static CACHE_CONTROL: Lazy<HeaderValue> =
    Lazy::new(|| HeaderValue::from_static("private, max-age=0"));

#[derive(Clone)]
struct MakeRequestUlid;
impl MakeRequestId for MakeRequestUlid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let mut id = ulid::Ulid::new().to_string();
        id.make_ascii_lowercase();
        let val = HeaderValue::from_str(&id).ok()?;

        Some(RequestId::new(val))
    }
}

pub type AppRouter = axum::Router<AppState>;

#[derive(Debug, Clone)]
pub struct AppState {
    pub extractor: Arc<dyn Extractor>,
}

impl AppState {
    fn new() -> Self {
        Self {
            extractor: Arc::new(YtDlpExtractor),
        }
    }
}

fn add_middlewares<T>(router: axum::Router<T>) -> axum::Router<T>
where
    T: std::clone::Clone + Send + Sync + 'static,
{
    router
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUlid))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(|request: &Request<_>| {
                            let m = request.method();
                            let p = request.uri().path();
                            let id = request
                                .extensions()
                                .get::<RequestId>()
                                .and_then(|id| id.header_value().to_str().ok())
                                .unwrap_or("-");
                            let dur = field::Empty;

                            tracing::info_span!("", %id, %m, ?p, dur)
                        })
                        .on_request(|request: &Request<_>, _span: &Span| {
                            let headers = request.headers();
                            info!(
                                target: "request",
                                "START \"{method} {uri} {http_type:?}\" {user_agent:?} {ip:?}",
                                http_type = request.version(),
                                method = request.method(),
                                uri = request.uri(),
                                user_agent = headers
                                    .get(header::USER_AGENT)
                                    .map_or("-", |x| x.to_str().unwrap_or("-")),
                                ip = headers
                                    .get("x-forwarded-for")
                                    .map_or("-", |x| x.to_str().unwrap_or("-")),
                            );
                        })
                        .on_response(|response: &Response<_>, latency, span: &Span| {
                            span.record("dur", field::debug(latency));
                            debug!(
                                target: "request",
                                "END {status}",
                                status = response.status().as_u16(),
                            );
                        })
                        .on_failure(|error, latency, span: &Span| {
                            span.record("dur", field::debug(latency));
                            debug!(
                                target: "request",
                                err = ?error,
                                "ERR: something went wrong",
                            );
                        }),
                )
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::CACHE_CONTROL,
                    |_response: &Response<_>| Some(CACHE_CONTROL.clone()),
                ))
                .layer(SetResponseHeaderLayer::appending(
                    header::DATE,
                    |_response: &Response<_>| {
                        Some(
                            chrono::Utc::now()
                                .to_rfc2822()
                                .parse()
                                .expect("Invalid date"),
                        )
                    },
                )),
        )
        .layer(
            CorsLayer::new()
                .allow_methods(cors::Any)
                .allow_headers(cors::Any)
                .allow_origin(cors::Any),
        )
}
