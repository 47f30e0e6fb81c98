use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// In-band record stored for a pinyin whose lookup failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorRecord {
    pub error: String,
    pub message: String,
}

impl ErrorRecord {
    /// Non-200 answer from the dictionary API
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self {
            error: format!("HTTP {status}"),
            message: body.into(),
        }
    }

    /// Timeout, connection or decode failure
    pub fn exception(message: impl Into<String>) -> Self {
        Self {
            error: "Exception".to_string(),
            message: message.into(),
        }
    }

    /// Match an object holding exactly the string fields `error` and `message`
    pub fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        if object.len() != 2 {
            return None;
        }
        Some(Self {
            error: object.get("error")?.as_str()?.to_string(),
            message: object.get("message")?.as_str()?.to_string(),
        })
    }
}

/// Outcome stored for one pinyin.
///
/// Serialized untagged: the file holds either the raw API value or the
/// `{error, message}` object. Reading back, only that exact object shape
/// becomes `Failed`. Equality follows the serialized form, so an API body
/// shaped like an error record equals the record it reads back as.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum FetchOutcome {
    Failed(ErrorRecord),
    Found(Value),
}

impl<'de> Deserialize<'de> for FetchOutcome {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(match ErrorRecord::from_value(&value) {
            Some(record) => FetchOutcome::Failed(record),
            None => FetchOutcome::Found(value),
        })
    }
}

impl PartialEq for FetchOutcome {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (FetchOutcome::Found(a), FetchOutcome::Found(b)) => a == b,
            (FetchOutcome::Failed(a), FetchOutcome::Failed(b)) => a == b,
            (FetchOutcome::Found(value), FetchOutcome::Failed(record))
            | (FetchOutcome::Failed(record), FetchOutcome::Found(value)) => {
                ErrorRecord::from_value(value).as_ref() == Some(record)
            }
        }
    }
}

impl FetchOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, FetchOutcome::Failed(_))
    }

    pub fn error(&self) -> Option<&ErrorRecord> {
        match self {
            FetchOutcome::Failed(record) => Some(record),
            FetchOutcome::Found(_) => None,
        }
    }
}

/// Pinyin -> outcome, in order of first insertion
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultMap {
    entries: IndexMap<String, FetchOutcome>,
}

impl ResultMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an outcome, returning the one it replaced.
    ///
    /// A replaced key keeps its original position.
    pub fn record(&mut self, pinyin: &str, outcome: FetchOutcome) -> Option<FetchOutcome> {
        self.entries.insert(pinyin.to_string(), outcome)
    }

    pub fn get(&self, pinyin: &str) -> Option<&FetchOutcome> {
        self.entries.get(pinyin)
    }

    pub fn contains(&self, pinyin: &str) -> bool {
        self.entries.contains_key(pinyin)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn failed_count(&self) -> usize {
        self.entries.values().filter(|o| o.is_failed()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FetchOutcome)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}
