// consent-extensions/src/api/mod.rs
use axum::{extract::DefaultBodyLimit, middleware, Router};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::AppConfig;
use crate::features::{consent::consent_router, system::system_router};
use crate::logging::{inject_request_context, make_request_span};

/// アプリケーション全体のルーターを構築
///
/// ハンドラーは状態を持たないため、設定はミドルウェアの構築にのみ使う。
/// RequestContext の注入は TraceLayer より外側に置き、スパンに trace_id を載せる。
pub fn app_router(app_config: &AppConfig) -> Router {
    Router::new()
        .merge(consent_router())
        .merge(system_router())
        .layer(DefaultBodyLimit::max(app_config.server.body_limit))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(make_request_span)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(inject_request_context))
}
