//! 日志初始化
//!
//! TUI 占用整个终端，日志只写文件：`<log dir>/proxy-warden.log.YYYY-MM-DD`。
//! `log` 宏（核心库在用）经由 tracing-log 桥接到同一个订阅者。

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::backend::LoggingConfig;

const LOG_FILE_PREFIX: &str = "proxy-warden.log";

/// 初始化日志；返回的 guard 必须存活到程序退出，否则缓冲的日志会丢失
pub fn init_logging(config: &LoggingConfig, directory: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(directory)
        .with_context(|| format!("Failed to create log directory {}", directory.display()))?;

    let appender = tracing_appender::rolling::daily(directory, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(env_filter(&config.level))
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_target(true)
                .with_ansi(false),
        )
        .try_init()
        .context("Failed to install the log subscriber")?;

    Ok(guard)
}

/// `RUST_LOG` 优先，其次是配置文件；配置无效时回退到 `info`
fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}
