use std::process::ExitCode;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use metro_server::catalog::SharedCatalog;
use metro_server::config::ServerConfig;
use metro_server::planner::PlannerConfig;
use metro_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    // Load networks (fail fast if the description is unusable)
    let catalog = match SharedCatalog::load(&config.networks_path) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!(path = %config.networks_path.display(), "Failed to load networks: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Spawn background task to rebuild the catalog from disk
    if let Some(period) = config.reload_interval {
        let catalog_reload = catalog.clone();
        let path = config.networks_path.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.tick().await; // First tick is immediate, skip it
            loop {
                interval.tick().await;
                match catalog_reload.reload(&path).await {
                    Ok(count) => info!(networks = count, "Reloaded network catalog"),
                    Err(e) => warn!("Failed to reload network catalog: {e}"),
                }
            }
        });
    }

    let state = AppState::new(catalog, PlannerConfig::default());
    let app = create_router(state, config.query_timeout);

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.bind_addr, "Failed to bind: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!("Metro route planner listening on http://{}", config.bind_addr);
    info!("  GET /health");
    info!("  GET /networks");
    info!("  GET /networks/:slug/lines");
    info!("  GET /networks/:slug/stations");
    info!("  GET /networks/:slug/interchanges");
    info!("  GET /networks/:slug/stations/:station/lines");
    info!("  GET /networks/:slug/route?from=&to=");

    let shutdown = async {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutting down");
        }
    };

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
    {
        error!("Server error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
