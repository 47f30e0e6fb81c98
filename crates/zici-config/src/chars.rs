use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::env_or;

fn default_chars_file() -> PathBuf {
    PathBuf::from("public/生字.txt")
}

fn default_draft_file() -> PathBuf {
    PathBuf::from("public/draft.txt")
}

/// Paths used by the character list tools
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CharsConfig {
    /// Character list, one per line after extraction
    pub chars_file: PathBuf,
    /// Free text the characters are extracted from
    pub draft_file: PathBuf,
    /// Per-term character lists, one term per line; embedded lists when unset
    pub terms_file: Option<PathBuf>,
}

impl CharsConfig {
    pub fn new() -> Self {
        Self {
            chars_file: env_or("ZICI_CHARS_FILE", default_chars_file()),
            draft_file: env_or("ZICI_DRAFT_FILE", default_draft_file()),
            terms_file: env::var_os("ZICI_TERMS_FILE").map(PathBuf::from),
        }
    }
}

impl Default for CharsConfig {
    fn default() -> Self {
        Self::new()
    }
}
