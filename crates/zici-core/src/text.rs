//! Character list helpers for the study app's data files

use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::TextToolError;

/// Common CJK unified ideographs
fn is_hanzi(c: char) -> bool {
    ('\u{4e00}'..='\u{9fa5}').contains(&c)
}

pub(crate) fn read_text(path: &Path) -> Result<String, TextToolError> {
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => TextToolError::NotFound(path.to_path_buf()),
        _ => TextToolError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}

fn write_text(path: &Path, content: &str) -> Result<(), TextToolError> {
    std::fs::write(path, content).map_err(|source| TextToolError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Join all lines of `path` into one, in place.
///
/// Returns the number of characters written.
pub fn merge_lines(path: &Path) -> Result<usize, TextToolError> {
    let content = read_text(path)?;
    let merged: String = content.chars().filter(|c| !matches!(c, '\n' | '\r')).collect();
    write_text(path, &merged)?;

    let count = merged.chars().count();
    tracing::info!("Merged {} characters into one line", count);
    tracing::info!("Updated {}", path.display());
    Ok(count)
}

/// Collect the distinct hanzi of `input`, in order of first appearance,
/// and write them to `output` one per line.
pub fn extract_chars(input: &Path, output: &Path) -> Result<usize, TextToolError> {
    let content = read_text(input)?;

    let mut seen = HashSet::new();
    let chars: Vec<String> = content
        .chars()
        .filter(|&c| is_hanzi(c) && seen.insert(c))
        .map(String::from)
        .collect();

    write_text(output, &chars.join("\n"))?;

    tracing::info!("Extracted {} characters", chars.len());
    tracing::info!("Wrote {}", output.display());
    Ok(chars.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("生字.txt");
        std::fs::write(&path, "一\n二\r\n三\n").unwrap();

        let count = merge_lines(&path).unwrap();

        assert_eq!(count, 3);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "一二三");
    }

    #[test]
    fn test_merge_keeps_other_whitespace() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chars.txt");
        std::fs::write(&path, "a b\n\tc").unwrap();

        assert_eq!(merge_lines(&path).unwrap(), 5);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a b\tc");
    }

    #[test]
    fn test_merge_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = merge_lines(&dir.path().join("none.txt")).unwrap_err();
        assert!(matches!(err, TextToolError::NotFound(_)));
    }

    #[test]
    fn test_extract_chars_dedups_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let draft = dir.path().join("draft.txt");
        let output = dir.path().join("生字.txt");
        std::fs::write(&draft, "春天来了，春风吹。Spring 2024! 天天向上").unwrap();

        let count = extract_chars(&draft, &output).unwrap();

        assert_eq!(count, 8);
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "春\n天\n来\n了\n风\n吹\n向\n上"
        );
    }

    #[test]
    fn test_extract_skips_outside_range() {
        assert!(is_hanzi('一'));
        assert!(is_hanzi('\u{9fa5}'));
        assert!(!is_hanzi('\u{9fa6}'));
        assert!(!is_hanzi('〇'));
        assert!(!is_hanzi('。'));
    }

    #[test]
    fn test_extract_missing_draft() {
        let dir = tempfile::tempdir().unwrap();
        let err = extract_chars(&dir.path().join("draft.txt"), &dir.path().join("out.txt"))
            .unwrap_err();
        assert!(matches!(err, TextToolError::NotFound(_)));
        assert!(!dir.path().join("out.txt").exists());
    }
}
