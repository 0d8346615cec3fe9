use query_atlas_domain::CountryAggregate;
use serde::Serialize;

/// One row of the traffic report, in the shape the map client expects.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CountryTrafficResponse {
    pub country_code: String,
    pub country_name: String,
    pub query_count: u64,
}

impl From<CountryAggregate> for CountryTrafficResponse {
    fn from(aggregate: CountryAggregate) -> Self {
        Self {
            country_code: aggregate.country_code,
            country_name: aggregate.country_name,
            query_count: aggregate.query_count,
        }
    }
}
