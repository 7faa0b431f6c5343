pub mod adapters;
pub mod app;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::LocalStorage;
pub use app::Menu;
pub use crate::core::session::Session;
pub use crate::core::transform::{reverse_characters, reverse_words, save_to_file};
pub use domain::model::Mode;
pub use utils::error::{ReverserError, Result};
