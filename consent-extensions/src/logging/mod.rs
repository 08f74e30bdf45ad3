// src/logging/mod.rs

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use tracing::Span;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

/// リクエストのトレースIDを必ず付けて構造化ログを出す
///
/// ```ignore
/// log_with_context!(INFO, context, "Received pre-process request", request_id = &request_id);
/// ```
#[macro_export]
macro_rules! log_with_context {
    ($level:ident, $context:expr, $msg:literal $(, $key:ident = $value:expr)* $(,)?) => {{
        let context: &$crate::logging::RequestContext = &$context;
        tracing::event!(
            tracing::Level::$level,
            trace_id = %context.trace_id,
            $($key = ?$value,)*
            $msg
        );
    }};
}

/// `RUST_LOG` が未設定の場合に使うフィルター
pub fn default_filter(log_level: &str) -> String {
    format!("consent_extensions={log_level},tower_http={log_level}")
}

// トレーシングの設定
pub fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(log_level).into()),
        )
        .with(fmt::layer())
        .init();
}

/// サーバー側で採番するリクエスト単位のコンテキスト
///
/// `trace_id` はオーケストレーターの `requestId` とは別物で、
/// ハンドラーのログで両者を並べて出力する。
#[derive(Clone, Debug)]
pub struct RequestContext {
    pub trace_id: String,
    pub method: String,
    pub path: String,
}

impl RequestContext {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            trace_id: Uuid::new_v4().to_string(),
            method: method.into(),
            path: path.into(),
        }
    }
}

// RequestContextを生成するミドルウェア
pub async fn inject_request_context(mut req: Request<Body>, next: Next) -> Response {
    let context = RequestContext::new(req.method().as_str(), req.uri().path());

    req.extensions_mut().insert(context);
    next.run(req).await
}

/// `TraceLayer` 用のスパン。開始・完了ログに trace_id を載せる
pub fn make_request_span(req: &Request<Body>) -> Span {
    match req.extensions().get::<RequestContext>() {
        Some(context) => tracing::info_span!(
            "request",
            trace_id = %context.trace_id,
            method = %context.method,
            path = %context.path,
        ),
        None => tracing::info_span!(
            "request",
            method = %req.method(),
            path = %req.uri().path(),
        ),
    }
}
