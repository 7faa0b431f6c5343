use crate::utils::error::{ReverserError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(ReverserError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ReverserError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// A file name to save into: a valid path that does not name a directory.
pub fn validate_file_name(field_name: &str, path: &str) -> Result<()> {
    validate_path(field_name, path)?;

    if path.ends_with('/') || path.ends_with('\\') {
        return Err(ReverserError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path names a directory, not a file".to_string(),
        });
    }

    Ok(())
}
