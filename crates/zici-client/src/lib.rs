mod http;

#[cfg(any(test, feature = "stub-server"))]
pub mod stub_server;

pub use http::HttpDictionaryClient;

use std::error::Error as _;

/// Pinyin dictionary lookup interface
#[async_trait::async_trait]
pub trait DictionaryClient: Send + Sync {
    /// Look up the words spelled by `pinyin`, returning the decoded JSON body
    async fn lookup(&self, pinyin: &str) -> Result<serde_json::Value, FetchError>;

    /// Endpoint description for log lines
    fn endpoint(&self) -> &str;
}

#[async_trait::async_trait]
impl<T: DictionaryClient + ?Sized> DictionaryClient for &T {
    async fn lookup(&self, pinyin: &str) -> Result<serde_json::Value, FetchError> {
        (**self).lookup(pinyin).await
    }

    fn endpoint(&self) -> &str {
        (**self).endpoint()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP {status}")]
    HttpStatus { status: u16, body: String },

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Error message followed by its source chain, `: `-separated
    pub fn describe(&self) -> String {
        let mut message = self.to_string();
        let mut source = self.source();
        while let Some(err) = source {
            let text = err.to_string();
            if !message.contains(&text) {
                message.push_str(": ");
                message.push_str(&text);
            }
            source = err.source();
        }
        message
    }
}
