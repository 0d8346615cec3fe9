use dashmap::DashMap;
use query_atlas_domain::GeoRecord;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeoCacheStats {
    pub entries: usize,
    pub countries: usize,
}

/// Process-wide address → country cache.
///
/// Entries are never evicted. Concurrent pipeline runs may resolve the same
/// address and both insert it; the later write replaces an identical value.
#[derive(Debug, Default)]
pub struct GeoCache {
    entries: DashMap<String, GeoRecord>,
}

impl GeoCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, address: &str) -> Option<GeoRecord> {
        self.entries.get(address).map(|entry| entry.value().clone())
    }

    pub fn contains(&self, address: &str) -> bool {
        self.entries.contains_key(address)
    }

    pub fn insert(&self, record: GeoRecord) {
        self.entries.insert(record.address.clone(), record);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> GeoCacheStats {
        let countries: HashSet<String> = self
            .entries
            .iter()
            .map(|entry| entry.value().country_code.clone())
            .collect();

        GeoCacheStats {
            entries: self.entries.len(),
            countries: countries.len(),
        }
    }
}
