use crate::ports::{GeoLookupProvider, Pacer};
use crate::services::GeoCache;
use query_atlas_domain::{AddressSet, BatchPolicy, ResolvedAddresses};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct ResolveCountriesUseCase {
    provider: Arc<dyn GeoLookupProvider>,
    cache: Arc<GeoCache>,
    pacer: Arc<dyn Pacer>,
    policy: BatchPolicy,
}

impl ResolveCountriesUseCase {
    pub fn new(
        provider: Arc<dyn GeoLookupProvider>,
        cache: Arc<GeoCache>,
        pacer: Arc<dyn Pacer>,
    ) -> Self {
        Self {
            provider,
            cache,
            pacer,
            policy: BatchPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: BatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Resolve every address, serving cached ones locally and looking the
    /// rest up in paced batches.
    ///
    /// A failed batch is logged and skipped; its addresses are simply absent
    /// from the result. The returned map may therefore be partial or empty.
    pub async fn execute(&self, addresses: &AddressSet) -> ResolvedAddresses {
        let mut resolved = ResolvedAddresses::new();
        let mut uncached: Vec<String> = Vec::new();

        for address in addresses.iter() {
            match self.cache.get(address) {
                Some(record) => {
                    resolved.insert(address.to_string(), record);
                }
                None => uncached.push(address.to_string()),
            }
        }

        let cache_hits = resolved.len();
        let batches: Vec<&[String]> = uncached.chunks(self.policy.batch_size()).collect();

        debug!(
            total = addresses.len(),
            cache_hits,
            uncached = uncached.len(),
            batches = batches.len(),
            "Resolving addresses to countries"
        );

        let mut failed_batches = 0usize;

        for (index, batch) in batches.iter().enumerate() {
            if index > 0 {
                self.pacer.pause(self.policy.pause_interval()).await;
            }

            match self.provider.lookup_batch(batch).await {
                Ok(lookups) => {
                    let mut accepted = 0usize;
                    for record in lookups.into_iter().filter_map(|lookup| lookup.into_record()) {
                        self.cache.insert(record.clone());
                        resolved.insert(record.address.clone(), record);
                        accepted += 1;
                    }
                    debug!(
                        batch = index + 1,
                        size = batch.len(),
                        accepted,
                        "Geolocation batch completed"
                    );
                }
                Err(e) => {
                    failed_batches += 1;
                    warn!(
                        error = %e,
                        batch = index + 1,
                        size = batch.len(),
                        "Geolocation batch failed, skipping"
                    );
                }
            }
        }

        info!(
            resolved = resolved.len(),
            cache_hits,
            batches = batches.len(),
            failed_batches,
            "Address resolution finished"
        );

        resolved
    }
}
