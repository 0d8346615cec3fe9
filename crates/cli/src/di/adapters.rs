use query_atlas_application::services::GeoCache;
use query_atlas_domain::Config;
use query_atlas_infrastructure::geolocation::IpApiBatchClient;
use query_atlas_infrastructure::log_source::AdGuardQueryLogClient;
use query_atlas_infrastructure::system::TokioPacer;
use std::sync::Arc;
use tracing::{info, warn};

pub struct Adapters {
    pub log_source: Arc<AdGuardQueryLogClient>,
    pub geo_provider: Arc<IpApiBatchClient>,
    pub pacer: Arc<TokioPacer>,
    pub geo_cache: Arc<GeoCache>,
}

impl Adapters {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        if config.log_source.base_url.is_empty() {
            warn!("No log source URL configured; set ADGUARD_BASE_URL or [log_source].base_url");
        }

        info!(
            log_source = %config.log_source.base_url,
            geolocation = %config.geolocation.base_url,
            batch_size = config.geolocation.batch_size,
            pause_ms = config.geolocation.pause_ms,
            "Initializing adapters"
        );

        Ok(Self {
            log_source: Arc::new(AdGuardQueryLogClient::new(&config.log_source)?),
            geo_provider: Arc::new(IpApiBatchClient::new(&config.geolocation)?),
            pacer: Arc::new(TokioPacer),
            geo_cache: Arc::new(GeoCache::new()),
        })
    }
}
