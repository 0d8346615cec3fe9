#![allow(dead_code)]

use async_trait::async_trait;
use query_atlas_application::ports::{GeoLookupProvider, Pacer, QueryLogSource};
use query_atlas_domain::{AnswerRecord, DomainError, GeoLookup, LogEntry};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub fn a_record(value: &str) -> AnswerRecord {
    AnswerRecord::new("A", value, 300)
}

pub fn aaaa_record(value: &str) -> AnswerRecord {
    AnswerRecord::new("AAAA", value, 300)
}

/// Builds `count` distinct public IPv4 addresses.
pub fn public_addresses(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("8.{}.{}.{}", i / 65_536 % 256, i / 256 % 256, i % 256))
        .collect()
}

pub struct StaticLogSource {
    result: Result<Vec<LogEntry>, DomainError>,
    calls: Mutex<usize>,
}

impl StaticLogSource {
    pub fn with_entries(entries: Vec<LogEntry>) -> Self {
        Self {
            result: Ok(entries),
            calls: Mutex::new(0),
        }
    }

    pub fn with_addresses(addresses: &[&str]) -> Self {
        Self::with_entries(
            addresses
                .iter()
                .map(|address| LogEntry::with_answers(vec![a_record(address)]))
                .collect(),
        )
    }

    pub fn failing(error: DomainError) -> Self {
        Self {
            result: Err(error),
            calls: Mutex::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl QueryLogSource for StaticLogSource {
    async fn fetch_recent(&self) -> Result<Vec<LogEntry>, DomainError> {
        *self.calls.lock().unwrap() += 1;
        self.result.clone()
    }
}

/// Answers lookups from a fixed table and records every batch it receives.
#[derive(Clone, Default)]
pub struct RecordingGeoProvider {
    answers: Arc<Mutex<HashMap<String, GeoLookup>>>,
    default_country: Arc<Mutex<Option<(String, String)>>>,
    failing_calls: Arc<Mutex<HashSet<usize>>>,
    batches: Arc<Mutex<Vec<Vec<String>>>>,
}

impl RecordingGeoProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(self, address: &str, country_code: &str, country: &str) -> Self {
        self.answers.lock().unwrap().insert(
            address.to_string(),
            GeoLookup::success(address, country_code, country),
        );
        self
    }

    pub fn answer_with(self, address: &str, lookup: GeoLookup) -> Self {
        self.answers
            .lock()
            .unwrap()
            .insert(address.to_string(), lookup);
        self
    }

    /// Every address without an explicit answer resolves to this country.
    pub fn answer_all(self, country_code: &str, country: &str) -> Self {
        *self.default_country.lock().unwrap() =
            Some((country_code.to_string(), country.to_string()));
        self
    }

    /// Make the n-th call (1-based) fail.
    pub fn fail_call(self, call: usize) -> Self {
        self.failing_calls.lock().unwrap().insert(call);
        self
    }

    pub fn batches(&self) -> Vec<Vec<String>> {
        self.batches.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.batches.lock().unwrap().len()
    }
}

#[async_trait]
impl GeoLookupProvider for RecordingGeoProvider {
    async fn lookup_batch(&self, addresses: &[String]) -> Result<Vec<GeoLookup>, DomainError> {
        let call = {
            let mut batches = self.batches.lock().unwrap();
            batches.push(addresses.to_vec());
            batches.len()
        };

        if self.failing_calls.lock().unwrap().contains(&call) {
            return Err(DomainError::GeoLookupError(format!(
                "HTTP 429 on call {}",
                call
            )));
        }

        let answers = self.answers.lock().unwrap();
        let default_country = self.default_country.lock().unwrap();

        Ok(addresses
            .iter()
            .map(|address| match answers.get(address) {
                Some(lookup) => lookup.clone(),
                None => match default_country.as_ref() {
                    Some((code, name)) => GeoLookup::success(address, code, name),
                    None => GeoLookup::failed(address),
                },
            })
            .collect())
    }
}

/// Records requested pauses instead of sleeping.
#[derive(Clone, Default)]
pub struct RecordingPacer {
    pauses: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingPacer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pauses(&self) -> Vec<Duration> {
        self.pauses.lock().unwrap().clone()
    }
}

#[async_trait]
impl Pacer for RecordingPacer {
    async fn pause(&self, interval: Duration) {
        self.pauses.lock().unwrap().push(interval);
    }
}
