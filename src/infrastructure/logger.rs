//! 日志基础设施

use tracing::Level;
use tracing_subscriber::EnvFilter;

pub struct Logger;

impl Logger {
    /// 初始化全局日志，设置了 `RUST_LOG` 时以环境变量为准
    pub fn init(level: Level) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level.to_string().to_lowercase()));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init();
    }
}
