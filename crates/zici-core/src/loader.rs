use std::io::ErrorKind;
use std::path::Path;

use zici_types::PinyinTable;

use crate::error::InputLoadError;

/// Load the nested pinyin table from a JSON file
pub fn load_table(path: &Path) -> Result<PinyinTable, InputLoadError> {
    tracing::info!("Loading pinyin table from {}", path.display());

    let json = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => InputLoadError::NotFound(path.to_path_buf()),
        _ => InputLoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let table = PinyinTable::from_json(&json).map_err(|source| InputLoadError::InvalidFormat {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(
        "Loaded {} groups, {} pinyin",
        table.groups().len(),
        table.leaf_count()
    );
    Ok(table)
}
