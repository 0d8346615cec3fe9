use super::Adapters;
use query_atlas_application::use_cases::{
    ExtractPublicAddressesUseCase, GetGeoCacheStatsUseCase, GetTrafficByCountryUseCase,
    ResolveCountriesUseCase,
};
use query_atlas_domain::Config;
use std::sync::Arc;

pub struct UseCases {
    pub get_traffic: Arc<GetTrafficByCountryUseCase>,
    pub get_geo_cache_stats: Arc<GetGeoCacheStatsUseCase>,
}

impl UseCases {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let adapters = Adapters::new(config)?;

        let extract = Arc::new(ExtractPublicAddressesUseCase::new(adapters.log_source));
        let resolve = Arc::new(
            ResolveCountriesUseCase::new(
                adapters.geo_provider,
                adapters.geo_cache.clone(),
                adapters.pacer,
            )
            .with_policy(config.geolocation.batch_policy()),
        );

        Ok(Self {
            get_traffic: Arc::new(GetTrafficByCountryUseCase::new(extract, resolve)),
            get_geo_cache_stats: Arc::new(GetGeoCacheStatsUseCase::new(adapters.geo_cache)),
        })
    }
}
