use crate::ports::QueryLogSource;
use query_atlas_domain::{AddressSet, Admission};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct ExtractPublicAddressesUseCase {
    log_source: Arc<dyn QueryLogSource>,
}

impl ExtractPublicAddressesUseCase {
    pub fn new(log_source: Arc<dyn QueryLogSource>) -> Self {
        Self { log_source }
    }

    /// Never fails: a log source error yields an empty set.
    pub async fn execute(&self) -> AddressSet {
        let entries = match self.log_source.fetch_recent().await {
            Ok(entries) => entries,
            Err(e) => {
                warn!(error = %e, "Failed to fetch query log, reporting no traffic");
                return AddressSet::new();
            }
        };

        let mut addresses = AddressSet::new();
        let mut private = 0u64;
        let mut malformed = 0u64;

        for value in entries.iter().flat_map(|entry| entry.address_answers()) {
            match addresses.admit(value) {
                Admission::Added | Admission::Duplicate => {}
                Admission::Private => private += 1,
                Admission::Malformed => {
                    malformed += 1;
                    debug!(value = %value, "Skipping answer that is not an IP address");
                }
            }
        }

        info!(
            entries = entries.len(),
            public_addresses = addresses.len(),
            private_skipped = private,
            malformed_skipped = malformed,
            "Extracted addresses from query log"
        );

        addresses
    }
}
