use crate::core::{ConfigProvider, Storage};
use crate::utils::error::{ReverserError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Writes files on the local file system, resolving relative paths against `base_path`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.output_dir())
    }

    pub fn resolve(&self, path: &Path) -> PathBuf {
        // 絕對路徑會直接取代 base_path
        self.base_path.join(path)
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new(".")
    }
}

impl Storage for LocalStorage {
    fn write_text(&self, path: &Path, text: &str) -> Result<PathBuf> {
        let full_path = self.resolve(path);

        // 不自動建立上層目錄，不存在時視為儲存失敗
        fs::write(&full_path, text.as_bytes())
            .map_err(|e| ReverserError::io(&full_path, e))?;
        Ok(full_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_and_absolute() {
        let storage = LocalStorage::new("/tmp/out");
        assert_eq!(
            storage.resolve(Path::new("a.txt")),
            PathBuf::from("/tmp/out/a.txt")
        );
        assert_eq!(
            storage.resolve(Path::new("/var/b.txt")),
            PathBuf::from("/var/b.txt")
        );
    }
}
