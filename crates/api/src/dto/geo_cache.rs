use query_atlas_application::services::GeoCacheStats;
use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
pub struct GeoCacheStatsResponse {
    pub entries: usize,
    pub countries: usize,
}

impl From<GeoCacheStats> for GeoCacheStatsResponse {
    fn from(stats: GeoCacheStats) -> Self {
        Self {
            entries: stats.entries,
            countries: stats.countries,
        }
    }
}
