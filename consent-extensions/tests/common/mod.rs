// tests/common/mod.rs
#![allow(dead_code)]

pub mod request;

use axum::Router;
use consent_extensions::{app_router, config::AppConfig};
use std::sync::Once;

// テスト環境の初期化を一度だけ実行
static INIT: Once = Once::new();

/// テスト環境を初期化
pub fn init_test_env() {
    INIT.call_once(|| {
        // テスト用のログ設定
        let _ = tracing_subscriber::fmt()
            .with_env_filter("consent_extensions=debug,tower_http=debug")
            .with_test_writer()
            .try_init();
    });
}

/// テスト用設定でルーターを構築
pub fn setup_app() -> Router {
    init_test_env();
    app_router(&AppConfig::for_testing())
}

/// ボディ上限を指定してルーターを構築
pub fn setup_app_with_body_limit(body_limit: usize) -> Router {
    init_test_env();
    let mut config = AppConfig::for_testing();
    config.server.body_limit = body_limit;
    app_router(&config)
}
