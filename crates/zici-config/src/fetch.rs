use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::env_or;

fn default_api_url() -> String {
    "http://192.168.31.58:23001/api/dict/spelltoword-notone".to_string()
}

fn default_input_path() -> PathBuf {
    PathBuf::from("pinyin_key_value.json")
}

fn default_output_path() -> PathBuf {
    PathBuf::from("pinyin_api_results.json")
}

fn default_timeout_seconds() -> u64 {
    10
}

fn default_request_delay_ms() -> u64 {
    100
}

/// Settings for the pinyin fetch run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Dictionary endpoint, queried with `?search=<pinyin>`
    pub api_url: String,
    /// Nested pinyin table to walk
    pub input_path: PathBuf,
    /// Where the aggregated results are written
    pub output_path: PathBuf,
    pub timeout_seconds: u64,
    /// Pause between consecutive requests
    pub request_delay_ms: u64,
}

impl FetchConfig {
    pub fn new() -> Self {
        Self {
            api_url: env_or("ZICI_API_URL", default_api_url()),
            input_path: env_or("ZICI_INPUT", default_input_path()),
            output_path: env_or("ZICI_OUTPUT", default_output_path()),
            timeout_seconds: env_or("ZICI_TIMEOUT_SECONDS", default_timeout_seconds()),
            request_delay_ms: env_or("ZICI_REQUEST_DELAY_MS", default_request_delay_ms()),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_durations() {
        let config = FetchConfig {
            timeout_seconds: 3,
            request_delay_ms: 250,
            ..FetchConfig::new()
        };
        assert_eq!(config.timeout(), Duration::from_secs(3));
        assert_eq!(config.request_delay(), Duration::from_millis(250));
    }
}
