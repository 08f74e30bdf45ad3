// src/main.rs
use consent_extensions::{app_router, config::AppConfig, logging::init_tracing};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 設定を読み込む（ログ設定より先に必要）
    let app_config = AppConfig::from_env()?;

    init_tracing(&app_config.log_level);

    tracing::info!("Starting consent extensions server...");
    tracing::info!("Configuration loaded: {:?}", app_config);

    // ルーターの設定
    let router = app_router(&app_config);

    // サーバーの起動
    let listener = TcpListener::bind(app_config.server_addr()).await?;
    tracing::info!(
        "Router configured. Server listening on {}",
        listener.local_addr()?
    );

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {},
                    _ = term.recv() => {},
                }
            }
            Err(err) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", err);
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }

    tracing::info!("Shutdown signal received, draining connections");
}
