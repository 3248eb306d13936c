//! HTTP route handlers.

use std::time::Duration;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::network::Network;
use crate::planner::{Planner, RouteError};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
///
/// `query_timeout` bounds how long any single request may take.
pub fn create_router(state: AppState, query_timeout: Duration) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/networks", get(list_networks))
        .route("/networks/:slug/lines", get(list_lines))
        .route("/networks/:slug/stations", get(list_stations))
        .route("/networks/:slug/interchanges", get(list_interchanges))
        .route("/networks/:slug/stations/:station/lines", get(station_lines))
        .route("/networks/:slug/route", get(find_route))
        .layer(TimeoutLayer::new(query_timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Resolve a slug against a catalog snapshot.
fn find_network<'a>(catalog: &'a Catalog, slug: &str) -> Result<&'a Network, AppError> {
    catalog.get(slug).ok_or_else(|| AppError::NotFound {
        message: format!("Unknown network: {slug}"),
    })
}

/// List every network in the catalog.
async fn list_networks(State(state): State<AppState>) -> Json<NetworksResponse> {
    let catalog = state.catalog.snapshot().await;
    let networks = catalog
        .networks()
        .iter()
        .map(NetworkSummary::from_network)
        .collect();

    Json(NetworksResponse { networks })
}

/// List a network's lines in declaration order.
async fn list_lines(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<LinesResponse>, AppError> {
    let catalog = state.catalog.snapshot().await;
    let network = find_network(&catalog, &slug)?;

    let lines = network.lines().iter().map(LineResult::from_line).collect();
    Ok(Json(LinesResponse { lines }))
}

/// List every station in a network, sorted.
async fn list_stations(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<StationsResponse>, AppError> {
    let catalog = state.catalog.snapshot().await;
    let network = find_network(&catalog, &slug)?;

    Ok(Json(StationsResponse {
        stations: network.stations().to_vec(),
    }))
}

/// List interchange stations with the lines meeting at each.
async fn list_interchanges(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<InterchangesResponse>, AppError> {
    let catalog = state.catalog.snapshot().await;
    let network = find_network(&catalog, &slug)?;

    let interchanges = network
        .interchange_stations()
        .iter()
        .map(|station| InterchangeResult {
            station: station.clone(),
            lines: network
                .station_lines(station)
                .into_iter()
                .map(LineRef::from_line)
                .collect(),
        })
        .collect();

    Ok(Json(InterchangesResponse { interchanges }))
}

/// List the lines serving one station.
async fn station_lines(
    State(state): State<AppState>,
    Path((slug, station)): Path<(String, String)>,
) -> Result<Json<StationLinesResponse>, AppError> {
    let catalog = state.catalog.snapshot().await;
    let network = find_network(&catalog, &slug)?;

    if !network.contains_station(&station) {
        return Err(AppError::NotFound {
            message: format!("Unknown station: {station}"),
        });
    }

    let lines = network
        .station_lines(&station)
        .into_iter()
        .map(LineRef::from_line)
        .collect();

    Ok(Json(StationLinesResponse { station, lines }))
}

/// Find the fewest-changes route between two stations.
async fn find_route(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(req): Query<RouteRequest>,
) -> Result<Json<RouteResponse>, AppError> {
    debug!(network = %slug, from = %req.from, to = %req.to, "Route query");

    let catalog = state.catalog.snapshot().await;
    let config = state.config.clone();

    // Search on the blocking pool so the request deadline can still fire.
    let response = tokio::task::spawn_blocking(move || {
        let network = find_network(&catalog, &slug)?;
        let itinerary = Planner::new(network, &config).find_route(&req.from, &req.to)?;
        Ok::<_, AppError>(RouteResponse::from_itinerary(&itinerary))
    })
    .await
    .map_err(|e| AppError::Internal {
        message: format!("Route search failed: {e}"),
    })??;

    Ok(Json(response))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<RouteError> for AppError {
    fn from(e: RouteError) -> Self {
        match e {
            RouteError::TrivialQuery(_) => AppError::BadRequest {
                message: e.to_string(),
            },
            RouteError::InvalidStation { .. } | RouteError::NoRouteFound { .. } => {
                AppError::NotFound {
                    message: e.to_string(),
                }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            warn!(%status, %message, "Request failed");
        } else {
            debug!(%status, %message, "Request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
