use crate::core::{ConfigProvider, Mode};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "text-reverser")]
#[command(about = "Reverse text by characters or by words, and save the result")]
pub struct CliConfig {
    #[arg(long, help = "Run the numbered menu loop instead of the interactive form")]
    pub cli: bool,

    #[arg(long, value_enum, default_value_t = Mode::Characters)]
    pub mode: Mode,

    #[arg(long, default_value = ".", help = "Base directory for relative save paths")]
    pub output_dir: String,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Write log events to this file instead of stderr")]
    pub log_file: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            cli: false,
            mode: Mode::Characters,
            output_dir: ".".to_string(),
            verbose: false,
            log_file: None,
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("output_dir", &self.output_dir)?;
        if let Some(log_file) = &self.log_file {
            validate_path("log_file", log_file)?;
        }
        Ok(())
    }
}

impl ConfigProvider for CliConfig {
    fn mode(&self) -> Mode {
        self.mode
    }

    fn output_dir(&self) -> &str {
        &self.output_dir
    }
}
