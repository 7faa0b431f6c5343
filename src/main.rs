use anyhow::Context;
use clap::Parser;
use std::io;
use text_reverser::utils::logger::{self, LogTarget};
use text_reverser::utils::validation::Validate;
use text_reverser::{CliConfig, LocalStorage, Menu, Session};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    let target = match &config.log_file {
        Some(path) => LogTarget::File(
            std::fs::File::create(path).with_context(|| format!("cannot open log file {}", path))?,
        ),
        None if config.cli || !cfg!(feature = "form") => LogTarget::Stderr,
        None => LogTarget::Silent,
    };
    logger::init_logger(config.verbose, target);

    tracing::info!("Starting text-reverser");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let storage = LocalStorage::from_config(&config);
    let session = Session::from_config(&config);

    if config.cli {
        let stdin = io::stdin();
        let mut menu = Menu::new(stdin.lock(), io::stdout(), storage, session);
        menu.run()?;
        return Ok(());
    }

    run_form(session, storage)
}

#[cfg(feature = "form")]
fn run_form(session: Session, storage: LocalStorage) -> anyhow::Result<()> {
    use text_reverser::app::form::{self, FormState};

    let mut state = FormState::new(session, storage);
    if let Err(e) = form::run(&mut state) {
        tracing::error!("❌ Interactive form failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }
    Ok(())
}

#[cfg(not(feature = "form"))]
fn run_form(session: Session, storage: LocalStorage) -> anyhow::Result<()> {
    // 未編入表單功能時退回選單模式
    tracing::warn!("Built without the interactive form, falling back to the menu");
    let stdin = io::stdin();
    Menu::new(stdin.lock(), io::stdout(), storage, session).run()?;
    Ok(())
}
