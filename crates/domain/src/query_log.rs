use serde::{Deserialize, Deserializer, Serialize};

/// Record types whose answer value carries an IP address.
pub const ADDRESS_RECORD_TYPES: [&str; 2] = ["A", "AAAA"];

/// One DNS transaction as reported by the resolver's query log.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct LogEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub answer: Vec<AnswerRecord>,

    #[serde(default)]
    pub question: Option<Question>,

    #[serde(default)]
    pub client: Option<String>,

    #[serde(default)]
    pub time: Option<String>,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub reason: Option<String>,

    #[serde(default)]
    pub upstream: Option<String>,

    #[serde(default)]
    pub cached: bool,

    #[serde(default, rename = "elapsedMs")]
    pub elapsed_ms: Option<String>,
}

impl LogEntry {
    pub fn with_answers(answer: Vec<AnswerRecord>) -> Self {
        Self {
            answer,
            ..Default::default()
        }
    }

    /// Answer values of A/AAAA records, skipping empty ones.
    pub fn address_answers(&self) -> impl Iterator<Item = &str> {
        self.answer
            .iter()
            .filter(|record| record.is_address())
            .map(|record| record.value.as_str())
    }

    pub fn has_address_answer(&self) -> bool {
        self.address_answers().next().is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AnswerRecord {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub record_type: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub value: String,

    #[serde(default)]
    pub ttl: i64,
}

impl AnswerRecord {
    pub fn new(record_type: &str, value: &str, ttl: i64) -> Self {
        Self {
            record_type: record_type.to_string(),
            value: value.to_string(),
            ttl,
        }
    }

    pub fn is_address(&self) -> bool {
        ADDRESS_RECORD_TYPES.contains(&self.record_type.as_str()) && !self.value.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    #[serde(default)]
    pub name: String,

    #[serde(rename = "type", default)]
    pub record_type: String,

    #[serde(default)]
    pub class: String,
}

/// Body of the query log endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct QueryLogPage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<LogEntry>,

    #[serde(default)]
    pub oldest: Option<String>,
}

// The log source emits `null` for empty lists and missing values.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
