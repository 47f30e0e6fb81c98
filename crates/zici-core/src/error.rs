use std::path::PathBuf;

use zici_client::FetchError;

/// The pinyin table could not be loaded; nothing was fetched
#[derive(Debug, thiserror::Error)]
pub enum InputLoadError {
    #[error("Input file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid pinyin table in {}: {source}", .path.display())]
    InvalidFormat {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    InputLoad(#[from] InputLoadError),

    #[error("Failed to build dictionary client: {0}")]
    Client(FetchError),

    #[error("Failed to serialize results: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write results to {}: {source}", .path.display())]
    Output {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum TextToolError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
