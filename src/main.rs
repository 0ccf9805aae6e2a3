use pilot_invites::{AppState, config::Config, create_router};
use sqlx::mysql::MySqlPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tokio::{net::TcpListener, signal};
use tower_http::cors::CorsLayer;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,pilot_invites=debug,tower_http=info".into()),
        )
        .init();

    // Inizializza la configurazione
    let config = Config::from_env()?;
    config.print_info();

    // Il pool si connette alla prima richiesta
    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .max_lifetime(Duration::from_secs(config.connection_lifetime_secs))
        .connect_lazy(&config.database_url)?;

    let state = Arc::new(AppState::new(pool, config.jwt_secret.clone()));

    let mut app = create_router(state);
    if config.is_development() {
        app = app.layer(CorsLayer::permissive());
    }

    let addr = format!("{}:{}", config.server_host, config.server_port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}
