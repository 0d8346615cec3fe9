#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use query_atlas_api::{create_api_routes, create_app, AppState};
use query_atlas_application::ports::{GeoLookupProvider, Pacer, QueryLogSource};
use query_atlas_application::services::GeoCache;
use query_atlas_application::use_cases::{
    ExtractPublicAddressesUseCase, GetGeoCacheStatsUseCase, GetTrafficByCountryUseCase,
    ResolveCountriesUseCase,
};
use query_atlas_domain::{AnswerRecord, DomainError, GeoLookup, LogEntry};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower::ServiceExt;

pub struct FixedLogSource {
    addresses: Option<Vec<String>>,
}

impl FixedLogSource {
    pub fn new(addresses: &[&str]) -> Self {
        Self {
            addresses: Some(addresses.iter().map(|a| a.to_string()).collect()),
        }
    }

    pub fn unreachable() -> Self {
        Self { addresses: None }
    }
}

#[async_trait]
impl QueryLogSource for FixedLogSource {
    async fn fetch_recent(&self) -> Result<Vec<LogEntry>, DomainError> {
        match &self.addresses {
            Some(addresses) => Ok(addresses
                .iter()
                .map(|address| {
                    LogEntry::with_answers(vec![AnswerRecord::new("A", address, 60)])
                })
                .collect()),
            None => Err(DomainError::LogSourceError("connection refused".into())),
        }
    }
}

pub struct TableGeoProvider {
    table: HashMap<String, (String, String)>,
    calls: Mutex<usize>,
}

impl TableGeoProvider {
    pub fn new(rows: &[(&str, &str, &str)]) -> Self {
        Self {
            table: rows
                .iter()
                .map(|(ip, code, name)| (ip.to_string(), (code.to_string(), name.to_string())))
                .collect(),
            calls: Mutex::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl GeoLookupProvider for TableGeoProvider {
    async fn lookup_batch(&self, addresses: &[String]) -> Result<Vec<GeoLookup>, DomainError> {
        *self.calls.lock().unwrap() += 1;
        Ok(addresses
            .iter()
            .map(|address| match self.table.get(address) {
                Some((code, name)) => GeoLookup::success(address, code, name),
                None => GeoLookup::failed(address),
            })
            .collect())
    }
}

pub struct NoopPacer;

#[async_trait]
impl Pacer for NoopPacer {
    async fn pause(&self, _interval: Duration) {}
}

pub struct TestApp {
    pub router: Router,
    pub app: Router,
    pub provider: Arc<TableGeoProvider>,
    pub cache: Arc<GeoCache>,
}

pub fn create_test_app(log_source: FixedLogSource, provider: TableGeoProvider) -> TestApp {
    let provider = Arc::new(provider);
    let cache = Arc::new(GeoCache::new());

    let extract = Arc::new(ExtractPublicAddressesUseCase::new(Arc::new(log_source)));
    let resolve = Arc::new(ResolveCountriesUseCase::new(
        provider.clone(),
        cache.clone(),
        Arc::new(NoopPacer),
    ));

    let state = AppState {
        get_traffic: Arc::new(GetTrafficByCountryUseCase::new(extract, resolve)),
        get_geo_cache_stats: Arc::new(GetGeoCacheStatsUseCase::new(cache.clone())),
    };

    TestApp {
        router: Router::new().nest("/api", create_api_routes(state.clone())),
        app: create_app(state),
        provider,
        cache,
    }
}

pub async fn get_json(router: &Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}
