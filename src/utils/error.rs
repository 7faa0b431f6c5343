use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReverserError {
    #[error("Please enter some text to reverse.")]
    EmptyInput,

    #[error("There is no reversed text to save.")]
    NothingToSave,

    #[error("IO error on {}: {source}", .path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Console I/O error: {0}")]
    ConsoleError(#[from] std::io::Error),

    #[error("Terminal error: {0}")]
    TerminalError(#[source] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// 使用者操作問題，程式繼續等待輸入
    Warning,
    Error,
}

impl ReverserError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::EmptyInput | Self::NothingToSave | Self::InvalidConfigValueError { .. } => {
                ErrorSeverity::Warning
            }
            Self::IoError { .. } | Self::ConsoleError(_) | Self::TerminalError(_) => {
                ErrorSeverity::Error
            }
        }
    }

    /// 對話框標題
    pub fn title(&self) -> &'static str {
        match self {
            Self::EmptyInput => "Empty Input",
            Self::NothingToSave => "Empty Output",
            Self::InvalidConfigValueError { .. } => "Invalid Value",
            Self::IoError { .. } | Self::ConsoleError(_) | Self::TerminalError(_) => "Error",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::EmptyInput | Self::NothingToSave => self.to_string(),
            Self::IoError { path, .. } => {
                format!("Failed to save the file: {}", path.display())
            }
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("{}: {}", field, reason)
            }
            Self::ConsoleError(e) => format!("Reading input or writing output failed: {}", e),
            Self::TerminalError(e) => format!("The terminal could not be used: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::EmptyInput => "Type some text first, then reverse it",
            Self::NothingToSave => "Reverse some text before saving",
            Self::IoError { .. } => {
                "Check that the directory exists and that you have write permission"
            }
            Self::InvalidConfigValueError { .. } => "Correct the value and try again",
            Self::ConsoleError(_) => "Check that standard input and output are still connected",
            Self::TerminalError(_) => "Run with --cli to use the menu mode instead",
        }
    }
}

pub type Result<T> = std::result::Result<T, ReverserError>;
