use crate::geo::ResolvedAddresses;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryAggregate {
    pub country_code: String,
    pub country_name: String,
    pub query_count: u64,
}

impl CountryAggregate {
    pub fn new(country_code: &str, country_name: &str, query_count: u64) -> Self {
        Self {
            country_code: country_code.to_string(),
            country_name: country_name.to_string(),
            query_count,
        }
    }
}

/// Groups resolved addresses by country code.
///
/// Each distinct address counts once. The name of a country comes from the
/// first record of its group in address order. Output is sorted by count,
/// descending, with ties ordered by country code ascending.
pub fn aggregate_by_country(resolved: &ResolvedAddresses) -> Vec<CountryAggregate> {
    let mut groups: HashMap<&str, CountryAggregate> = HashMap::new();

    for record in resolved.values() {
        groups
            .entry(record.country_code.as_str())
            .and_modify(|aggregate| aggregate.query_count += 1)
            .or_insert_with(|| CountryAggregate::new(&record.country_code, &record.country_name, 1));
    }

    let mut aggregates: Vec<CountryAggregate> = groups.into_values().collect();
    aggregates.sort_by(|a, b| {
        b.query_count
            .cmp(&a.query_count)
            .then_with(|| a.country_code.cmp(&b.country_code))
    });
    aggregates
}
