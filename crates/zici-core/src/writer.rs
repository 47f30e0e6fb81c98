use std::path::Path;

use zici_types::ResultMap;

use crate::error::RunError;

/// Write the result map as 2-space indented JSON, non-ASCII left as is
pub fn write_results(path: &Path, results: &ResultMap) -> Result<(), RunError> {
    let json = serde_json::to_string_pretty(results)?;
    std::fs::write(path, json).map_err(|source| RunError::Output {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("Wrote {} entries to {}", results.len(), path.display());
    Ok(())
}
