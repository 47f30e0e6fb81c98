use std::path::{Path, PathBuf};

use zici_client::{DictionaryClient, FetchError};
use zici_types::{ErrorRecord, FetchOutcome, PinyinTable, ResultMap};

use crate::error::RunError;
use crate::loader::load_table;
use crate::pacing::{Pacer, RequestPacing};
use crate::writer::write_results;

/// What a finished run reports to the operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Leaves visited, duplicates included
    pub processed: usize,
    /// Keys in the written result map
    pub distinct: usize,
    pub failed: usize,
    pub output: PathBuf,
}

/// Sequential fetch-and-aggregate loop over a pinyin table
pub struct FetchRunner<C, P> {
    client: C,
    pacer: P,
    pacing: RequestPacing,
}

impl<C, P> FetchRunner<C, P>
where
    C: DictionaryClient,
    P: Pacer,
{
    pub fn new(client: C, pacer: P, pacing: RequestPacing) -> Self {
        Self {
            client,
            pacer,
            pacing,
        }
    }

    /// Load `input`, fetch every pinyin, write the results to `output`.
    ///
    /// A table that cannot be loaded aborts before any request and leaves
    /// `output` untouched.
    pub async fn execute(&self, input: &Path, output: &Path) -> Result<RunSummary, RunError> {
        let table = load_table(input)?;
        let (results, processed) = self.run(&table).await;
        if results.is_empty() {
            tracing::warn!("No pinyin found in {}", input.display());
        }

        write_results(output, &results)?;

        let summary = RunSummary {
            processed,
            distinct: results.len(),
            failed: results.failed_count(),
            output: output.to_path_buf(),
        };

        tracing::info!("Processing complete!");
        tracing::info!("Total pinyin processed: {}", summary.processed);
        if summary.distinct != summary.processed {
            tracing::info!(
                "{} distinct pinyin, {} duplicates refetched",
                summary.distinct,
                summary.processed - summary.distinct
            );
        }
        if summary.failed > 0 {
            tracing::warn!("{} pinyin recorded with errors", summary.failed);
        }
        tracing::info!("Results saved to: {}", summary.output.display());

        Ok(summary)
    }

    /// Fetch every leaf of `table` in file order.
    ///
    /// Returns the result map and the number of leaves processed.
    pub async fn run(&self, table: &PinyinTable) -> (ResultMap, usize) {
        let mut results = ResultMap::new();
        let mut count = 0;

        tracing::debug!("Querying {}", self.client.endpoint());

        for pinyin in table.leaves() {
            if count > 0 && self.pacing.is_paced() {
                self.pacer.pause(self.pacing.interval).await;
            }

            count += 1;
            tracing::info!("Processing {}: {}", count, pinyin);

            let outcome = into_outcome(self.client.lookup(pinyin).await);
            if let Some(record) = outcome.error() {
                tracing::warn!("{}: {} {}", pinyin, record.error, record.message);
            }

            // Duplicates are refetched; the latest outcome wins
            if results.record(pinyin, outcome).is_some() {
                tracing::debug!("{} seen before, earlier result replaced", pinyin);
            }
        }

        (results, count)
    }
}

/// Map one lookup result onto the value stored in the result map
pub fn into_outcome(result: Result<serde_json::Value, FetchError>) -> FetchOutcome {
    match result {
        Ok(value) => FetchOutcome::Found(value),
        Err(FetchError::HttpStatus { status, body }) => {
            FetchOutcome::Failed(ErrorRecord::http_status(status, body))
        }
        Err(err) => FetchOutcome::Failed(ErrorRecord::exception(err.describe())),
    }
}
