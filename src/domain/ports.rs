use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// 結果文字的寫出目的地
pub trait Storage {
    /// 以 `text` 覆寫（或建立）`path`，回傳實際寫入的路徑
    fn write_text(&self, path: &Path, text: &str) -> Result<PathBuf>;
}

pub trait ConfigProvider {
    fn mode(&self) -> crate::domain::model::Mode;
    fn output_dir(&self) -> &str;
}
