use crate::adapters::LocalStorage;
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

pub const DEFAULT_EXTENSION: &str = "txt";

/// Reverses the order of the characters (Unicode scalar values) in `text`.
pub fn reverse_characters(text: &str) -> String {
    text.chars().rev().collect()
}

/// Reverses word order. Whitespace runs collapse to a single space and
/// leading/trailing whitespace is dropped.
pub fn reverse_words(text: &str) -> String {
    text.split_whitespace().rev().collect::<Vec<_>>().join(" ")
}

/// Writes `text` to `path` as the entire file contents.
///
/// Failures are logged and reported as `false`; nothing is propagated.
pub fn save_to_file(text: &str, path: impl AsRef<Path>) -> bool {
    save_with(&LocalStorage::default(), text, path.as_ref()).is_ok()
}

/// Writes through `storage` and logs the outcome; returns the path actually written.
pub(crate) fn save_with<S: Storage>(storage: &S, text: &str, path: &Path) -> Result<PathBuf> {
    match storage.write_text(path, text) {
        Ok(written) => {
            tracing::info!("📁 Saved {} bytes to {}", text.len(), written.display());
            Ok(written)
        }
        Err(e) => {
            tracing::error!("❌ Error saving file: {}", e);
            Err(e)
        }
    }
}

/// 無副檔名時補上 `.txt`
pub fn with_default_extension(path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.extension().is_none() {
        path.with_extension(DEFAULT_EXTENSION)
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_characters() {
        assert_eq!(reverse_characters(""), "");
        assert_eq!(reverse_characters("hello"), "olleh");
        assert_eq!(reverse_characters("héllo wörld"), "dlröw olléh");
    }

    #[test]
    fn test_reverse_characters_is_involution() {
        for s in ["", "a", "ab c", "  padded  ", "日本語のテキスト", "tab\tand\nnewline"] {
            assert_eq!(reverse_characters(&reverse_characters(s)), s);
        }
    }

    #[test]
    fn test_reverse_words() {
        assert_eq!(reverse_words("hello world"), "world hello");
        assert_eq!(reverse_words("  a   b  c "), "c b a");
        assert_eq!(reverse_words(""), "");
        assert_eq!(reverse_words(" \t\n "), "");
        assert_eq!(reverse_words("single"), "single");
        assert_eq!(reverse_words("line one\nline two"), "two line one line");
    }

    #[test]
    fn test_with_default_extension() {
        assert_eq!(with_default_extension("notes"), PathBuf::from("notes.txt"));
        assert_eq!(with_default_extension("notes.md"), PathBuf::from("notes.md"));
        assert_eq!(
            with_default_extension("out/reversed"),
            PathBuf::from("out/reversed.txt")
        );
    }
}
