//! 日志基础设施

use std::io;
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::core::config::LoggingConfig;

/// 初始化日志系统
///
/// 控制台始终输出；配置了 `log_dir` 时额外按天分割写入文件。
/// `RUST_LOG` 存在时优先于配置中的日志级别。
///
/// 返回的 [`WorkerGuard`] 需要在进程生命周期内持有，否则文件日志会丢失。
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))?;

    match &config.log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let file_appender = rolling::daily(dir, &config.file_prefix);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_writer(non_blocking)
                        .with_ansi(false)
                        .with_target(false),
                )
                .with(fmt::layer().with_writer(io::stdout).with_ansi(true))
                .try_init()?;

            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(io::stdout).with_ansi(true))
                .try_init()?;

            Ok(None)
        }
    }
}
