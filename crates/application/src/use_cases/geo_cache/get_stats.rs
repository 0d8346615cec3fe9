use crate::services::{GeoCache, GeoCacheStats};
use std::sync::Arc;

pub struct GetGeoCacheStatsUseCase {
    cache: Arc<GeoCache>,
}

impl GetGeoCacheStatsUseCase {
    pub fn new(cache: Arc<GeoCache>) -> Self {
        Self { cache }
    }

    pub fn execute(&self) -> GeoCacheStats {
        self.cache.stats()
    }
}
