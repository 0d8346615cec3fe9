use crate::{dto::CountryTrafficResponse, state::AppState};
use axum::{extract::State, Json};
use tracing::{info, instrument};

/// Runs the whole pipeline on every call. Upstream failures only shrink the
/// report, so this always answers 200.
#[instrument(skip(state), name = "api_get_traffic_by_country")]
pub async fn get_traffic_by_country(
    State(state): State<AppState>,
) -> Json<Vec<CountryTrafficResponse>> {
    let report = state.get_traffic.execute().await;

    info!(
        countries = report.len(),
        addresses = report.iter().map(|row| row.query_count).sum::<u64>(),
        "Traffic report built"
    );

    Json(
        report
            .into_iter()
            .map(CountryTrafficResponse::from)
            .collect(),
    )
}
