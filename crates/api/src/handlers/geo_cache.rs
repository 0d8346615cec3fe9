use crate::{dto::GeoCacheStatsResponse, state::AppState};
use axum::{extract::State, Json};
use tracing::{debug, instrument};

#[instrument(skip(state), name = "api_get_geo_cache_stats")]
pub async fn get_geo_cache_stats(State(state): State<AppState>) -> Json<GeoCacheStatsResponse> {
    let stats = state.get_geo_cache_stats.execute();

    debug!(
        entries = stats.entries,
        countries = stats.countries,
        "Geo cache statistics retrieved"
    );

    Json(stats.into())
}
