use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use gamehub_catalog::store::{GameStore, MemoryStore, PgStore, RestStore};
use gamehub_catalog::Catalog;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gamehub_api::background;
use gamehub_api::config::{ServerConfig, StoreConfig};
use gamehub_api::router::build_app_router;
use gamehub_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    init_tracing();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = %config.port,
        store_backend = config.store.backend_name(),
        "Loaded server configuration",
    );

    // --- Remote store ---
    let store = connect_store(&config.store).await?;
    let catalog = Arc::new(Catalog::new(store));

    // The listing serves an empty catalog until a fetch succeeds.
    match catalog.fetch_all().await {
        Ok(games) => tracing::info!(count = games.len(), "Initial catalog fetch complete"),
        Err(_) => tracing::warn!("Initial catalog fetch failed, starting with an empty catalog"),
    }

    // --- Background refresh ---
    let refresh_cancel = CancellationToken::new();
    let refresh_handle = if config.catalog_refresh_secs > 0 {
        Some(tokio::spawn(background::catalog_refresh::run(
            Arc::clone(&catalog),
            Duration::from_secs(config.catalog_refresh_secs),
            refresh_cancel.clone(),
        )))
    } else {
        None
    };

    // --- App state ---
    let state = AppState {
        catalog,
        config: Arc::new(config.clone()),
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let host = config
        .host
        .parse::<IpAddr>()
        .with_context(|| format!("Invalid HOST address '{}'", config.host))?;
    let addr = SocketAddr::new(host, config.port);
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, cleaning up");

    refresh_cancel.cancel();
    if let Some(handle) = refresh_handle {
        let _ = tokio::time::timeout(Duration::from_secs(5), handle).await;
        tracing::info!("Catalog refresh job stopped");
    }

    tracing::info!("Graceful shutdown complete");
    Ok(())
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` overrides the default filter; `LOG_FORMAT=json` switches to
/// JSON lines.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "gamehub_api=debug,gamehub_catalog=debug,tower_http=debug".into()
    });
    let json = std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Build the configured store backend.
async fn connect_store(config: &StoreConfig) -> anyhow::Result<Arc<dyn GameStore>> {
    let store: Arc<dyn GameStore> = match config {
        StoreConfig::Rest(rest) => {
            tracing::info!(base_url = %rest.base_url, table = %rest.table, "Using REST store");
            Arc::new(RestStore::new(rest.clone()).context("Failed to build REST client")?)
        }
        StoreConfig::Postgres { database_url } => {
            let pool = gamehub_db::create_pool(database_url)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Database connection pool created");

            gamehub_db::run_migrations(&pool)
                .await
                .context("Failed to run database migrations")?;
            tracing::info!("Database migrations applied");

            Arc::new(PgStore::new(pool))
        }
        StoreConfig::Memory => {
            tracing::warn!("Using in-memory store; catalog changes are lost on restart");
            Arc::new(MemoryStore::new())
        }
    };
    Ok(store)
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
