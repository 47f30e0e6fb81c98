use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One group of the lookup table: initial -> final -> pinyin
pub type PinyinGroup = IndexMap<String, IndexMap<String, String>>;

/// Nested pinyin lookup table as stored on disk.
///
/// Every level keeps file order, so [`PinyinTable::leaves`] walks the
/// pinyin values exactly as they appear in the source document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PinyinTable {
    groups: Vec<PinyinGroup>,
}

impl PinyinTable {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn groups(&self) -> &[PinyinGroup] {
        &self.groups
    }

    /// Leaf pinyin strings in file order, duplicates included
    pub fn leaves(&self) -> impl Iterator<Item = &str> {
        self.groups
            .iter()
            .flat_map(|group| group.values())
            .flat_map(|finals| finals.values())
            .map(String::as_str)
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves().count()
    }

    pub fn is_empty(&self) -> bool {
        self.leaf_count() == 0
    }
}
