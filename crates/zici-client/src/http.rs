use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::{DictionaryClient, FetchError};

/// Dictionary client for the `spelltoword` HTTP API
#[derive(Clone)]
pub struct HttpDictionaryClient {
    client: reqwest::Client,
    api_url: String,
}

impl HttpDictionaryClient {
    pub fn new(api_url: String, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, api_url })
    }
}

#[async_trait]
impl DictionaryClient for HttpDictionaryClient {
    async fn lookup(&self, pinyin: &str) -> Result<serde_json::Value, FetchError> {
        let response = self
            .client
            .get(&self.api_url)
            .query(&[("search", pinyin)])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await?;
            tracing::debug!("{} answered {} for {}", self.api_url, status, pinyin);
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let value = serde_json::from_slice(&bytes)?;
        Ok(value)
    }

    fn endpoint(&self) -> &str {
        &self.api_url
    }
}
