use query_atlas_application::use_cases::{GetGeoCacheStatsUseCase, GetTrafficByCountryUseCase};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub get_traffic: Arc<GetTrafficByCountryUseCase>,
    pub get_geo_cache_stats: Arc<GetGeoCacheStatsUseCase>,
}
