pub mod direction;
pub mod error;
pub mod loader;
pub mod pacing;
pub mod runner;
pub mod terms;
pub mod text;
pub mod writer;


pub use error::{InputLoadError, RunError, TextToolError};
pub use pacing::{Pacer, RequestPacing, TokioPacer};
pub use runner::{FetchRunner, RunSummary};
pub use terms::TermChars;

use zici_client::HttpDictionaryClient;
use zici_config::fetch::FetchConfig;

/// Fetch every pinyin of the configured table from the dictionary API
/// and write the aggregated results.
pub async fn fetch_all(config: &FetchConfig) -> Result<RunSummary, RunError> {
    let client = HttpDictionaryClient::new(config.api_url.clone(), config.timeout())
        .map_err(RunError::Client)?;
    let runner = FetchRunner::new(client, TokioPacer, RequestPacing::new(config.request_delay()));

    runner
        .execute(&config.input_path, &config.output_path)
        .await
}
