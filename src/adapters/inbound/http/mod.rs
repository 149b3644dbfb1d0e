//! Read-only HTTP service over the ledger.
//!
//! Every request loads the ledger from the configured store on the blocking
//! pool and renders one view as JSON.

mod api_error;

pub use api_error::ApiError;

use crate::application::read_models::{
    LedgerSummaryView, LineDetailView, LineView, MonthlyBucketView,
};
use crate::application::use_cases::QueryLedgerUseCase;
use crate::ledger::domain::LineStatus;
use crate::ledger::services::LineFilter;
use crate::ports::inbound::LedgerQueryPort;
use crate::ports::outbound::SharedLedgerStore;
use crate::shared::Result;
use anyhow::Context;
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Default listen address of `serve`
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

#[derive(Clone)]
struct ServiceState {
    store: SharedLedgerStore,
}

#[derive(Debug, Clone, Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Debug, Default, Deserialize)]
struct LinesQuery {
    search: Option<String>,
    status: Option<String>,
}

impl LinesQuery {
    fn into_filter(self) -> std::result::Result<LineFilter, ApiError> {
        let status = match self.status.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(raw.parse::<LineStatus>().map_err(ApiError::bad_request)?),
        };
        Ok(LineFilter::new(self.search, status))
    }
}

/// Builds the router serving the ledger views from `store`
pub fn router(store: SharedLedgerStore) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/summary", get(summary))
        .route("/lines", get(lines))
        .route("/lines/:service_number", get(line_detail))
        .route("/monthly", get(monthly))
        .with_state(ServiceState { store })
}

/// Serves the router on `bind` until Ctrl-C
pub async fn serve(bind: SocketAddr, store: SharedLedgerStore) -> Result<()> {
    let location = store.location();
    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("Failed to bind {}", bind))?;

    log::info!("Serving ledger from {} on http://{}", location, bind);
    eprintln!("🌐 Serving ledger from {} on http://{}", location, bind);

    axum::serve(listener, router(store))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    log::info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}

/// Runs a query against a freshly loaded ledger on the blocking pool
async fn run_query<T, F>(state: ServiceState, query: F) -> std::result::Result<Json<T>, ApiError>
where
    T: Send + 'static,
    F: FnOnce(&QueryLedgerUseCase<SharedLedgerStore>) -> Result<T> + Send + 'static,
{
    let use_case = QueryLedgerUseCase::new(state.store);
    let result = tokio::task::spawn_blocking(move || query(&use_case))
        .await
        .map_err(|e| ApiError::internal(format!("Query task failed: {}", e)))?;

    result.map(Json).map_err(ApiError::from)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

async fn summary(
    State(state): State<ServiceState>,
) -> std::result::Result<Json<LedgerSummaryView>, ApiError> {
    run_query(state, |use_case| use_case.summary()).await
}

async fn lines(
    State(state): State<ServiceState>,
    Query(query): Query<LinesQuery>,
) -> std::result::Result<Json<Vec<LineView>>, ApiError> {
    let filter = query.into_filter()?;
    run_query(state, move |use_case| use_case.lines(&filter)).await
}

async fn line_detail(
    State(state): State<ServiceState>,
    Path(service_number): Path<String>,
) -> std::result::Result<Json<LineDetailView>, ApiError> {
    run_query(state, move |use_case| use_case.line_detail(&service_number)).await
}

async fn monthly(
    State(state): State<ServiceState>,
) -> std::result::Result<Json<Vec<MonthlyBucketView>>, ApiError> {
    run_query(state, |use_case| use_case.monthly()).await
}
