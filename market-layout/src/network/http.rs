use crate::config::Config;
use crate::error::ApiError;
use crate::layout::{configurations, resolve_market, MarketConfiguration, MarketLayout};
use crate::types::{LayoutStats, Market};
use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub stats: RwLock<LayoutStats>,
    started: Instant,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            stats: RwLock::new(LayoutStats::default()),
            started: Instant::now(),
        }
    }

    fn check_outcomes(&self, market: &Market) -> Result<(), ApiError> {
        let limit = self.config.max_outcomes_per_market;
        if market.outcomes.len() > limit {
            return Err(ApiError::TooManyOutcomes {
                market: market.name.clone(),
                count: market.outcomes.len(),
                limit,
            });
        }
        Ok(())
    }

    async fn record(&self, market: &Market, layout: &MarketLayout<'_>) {
        let dropped = layout.dropped().len();
        if dropped > 0 {
            info!("⚠️ {} outcome(s) left out of grid for '{}'", dropped, market.name);
        }

        let mut stats = self.stats.write().await;
        stats.markets_resolved += 1;
        stats.outcomes_dropped += dropped as u64;
        match layout {
            MarketLayout::Grid(_) => stats.grids_built += 1,
            MarketLayout::Rows { unmodeled_compound, .. } => {
                stats.row_layouts += 1;
                if *unmodeled_compound {
                    stats.unmodeled_compound += 1;
                }
            }
        }
    }
}

/// Resolved layout for one market, echoed with the market name.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutResponse<'a> {
    pub market: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<MarketLayout<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub generated_at: i64,
}

impl<'a> LayoutResponse<'a> {
    fn resolved(market: &'a Market, layout: MarketLayout<'a>) -> Self {
        Self {
            market: &market.name,
            layout: Some(layout),
            error: None,
            generated_at: chrono::Utc::now().timestamp_millis(),
        }
    }

    fn rejected(market: &'a Market, err: ApiError) -> Self {
        Self {
            market: &market.name,
            layout: None,
            error: Some(err.to_string()),
            generated_at: chrono::Utc::now().timestamp_millis(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ConfigurationEntry {
    pub name: &'static str,
    #[serde(flatten)]
    pub configuration: &'static MarketConfiguration,
}

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/layout", post(resolve_layout))
        .route("/layouts", post(resolve_layouts))
        .route("/configurations", get(get_configurations))
        .route("/stats", get(get_stats))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Lay out a single market
pub async fn resolve_layout(
    State(state): State<SharedState>,
    Json(market): Json<Market>,
) -> Result<Response, ApiError> {
    if let Err(e) = state.check_outcomes(&market) {
        warn!("Rejected layout request: {}", e);
        return Err(e);
    }

    let layout = resolve_market(&market);
    state.record(&market, &layout).await;

    Ok(Json(LayoutResponse::resolved(&market, layout)).into_response())
}

/// Lay out a page of markets. Each market stands alone: an oversized one
/// carries an error entry while the rest still resolve.
pub async fn resolve_layouts(
    State(state): State<SharedState>,
    Json(markets): Json<Vec<Market>>,
) -> Result<Response, ApiError> {
    let limit = state.config.max_markets_per_request;
    if markets.len() > limit {
        let e = ApiError::TooManyMarkets { count: markets.len(), limit };
        warn!("Rejected layouts request: {}", e);
        return Err(e);
    }

    let mut responses = Vec::with_capacity(markets.len());
    for market in &markets {
        match state.check_outcomes(market) {
            Ok(()) => {
                let layout = resolve_market(market);
                state.record(market, &layout).await;
                responses.push(LayoutResponse::resolved(market, layout));
            }
            Err(e) => {
                warn!("Skipping market: {}", e);
                responses.push(LayoutResponse::rejected(market, e));
            }
        }
    }

    Ok(Json(responses).into_response())
}

pub async fn get_configurations() -> Json<Vec<ConfigurationEntry>> {
    Json(
        configurations()
            .map(|(name, configuration)| ConfigurationEntry { name, configuration })
            .collect(),
    )
}

pub async fn get_stats(State(state): State<SharedState>) -> Json<LayoutStats> {
    let mut stats = state.stats.read().await.clone();
    stats.uptime_seconds = state.started.elapsed().as_secs();
    Json(stats)
}
