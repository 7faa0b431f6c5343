use std::fs::File;
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 日誌輸出位置
#[derive(Debug)]
pub enum LogTarget {
    Stderr,
    File(File),
    /// 全螢幕表單模式下不可寫 stderr
    Silent,
}

pub fn default_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("text_reverser=debug"))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("text_reverser=warn"))
    }
}

pub fn init_logger(verbose: bool, target: LogTarget) {
    let writer = match target {
        LogTarget::Stderr => BoxMakeWriter::new(std::io::stderr),
        LogTarget::File(file) => BoxMakeWriter::new(Mutex::new(file)),
        LogTarget::Silent => BoxMakeWriter::new(std::io::sink),
    };

    tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
