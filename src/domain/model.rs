use std::fmt;

use crate::core::transform::{reverse_characters, reverse_words};

/// Which reversal to apply to the input text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Mode {
    #[default]
    Characters,
    Words,
}

impl Mode {
    pub fn apply(self, text: &str) -> String {
        match self {
            Mode::Characters => reverse_characters(text),
            Mode::Words => reverse_words(text),
        }
    }

    /// 切換到另一種模式
    pub fn toggled(self) -> Self {
        match self {
            Mode::Characters => Mode::Words,
            Mode::Words => Mode::Characters,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Characters => "Reverse Characters",
            Mode::Words => "Reverse Words",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Characters => write!(f, "characters"),
            Mode::Words => write!(f, "words"),
        }
    }
}
