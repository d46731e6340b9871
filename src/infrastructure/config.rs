//! 服务配置
//!
//! 查找顺序：`PRODUTO_API_CONFIG` 环境变量指定的文件、`config.toml`、
//! `./config/config.toml`，都不存在时使用默认配置。

use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::Level;

/// 指定配置文件路径的环境变量
pub const CONFIG_ENV_VAR: &str = "PRODUTO_API_CONFIG";

const CONFIG_PATHS: [&str; 2] = ["config.toml", "./config/config.toml"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub http: HttpConfig,
    pub logging: LoggingConfig,
    pub storage: StorageConfig,
}

/// HTTP 服务配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// 绑定地址
    pub bind_address: String,
    pub port: u16,
    /// 请求超时时间（秒）
    pub timeout_seconds: u64,
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别 (trace, debug, info, warn, error)
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// 启动时是否写入示例产品
    pub seed_sample_data: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 8080,
            timeout_seconds: 30,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            seed_sample_data: true,
        }
    }
}

impl Config {
    /// 从配置文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileRead(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;

        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::FileWrite(e.to_string()))?;
        }

        fs::write(path.as_ref(), content).map_err(|e| ConfigError::FileWrite(e.to_string()))
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.port == 0 {
            return Err(ConfigError::Validation("HTTP端口必须大于0".to_string()));
        }
        if self.http.bind_address.is_empty() {
            return Err(ConfigError::Validation("绑定地址不能为空".to_string()));
        }
        if self.http.timeout_seconds == 0 {
            return Err(ConfigError::Validation("请求超时时间必须大于0".to_string()));
        }
        self.socket_addr()?;
        self.log_level()?;
        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.http.bind_address, self.http.port)
            .parse()
            .map_err(|e| ConfigError::Validation(format!("无效的监听地址: {}", e)))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.http.timeout_seconds)
    }

    pub fn log_level(&self) -> Result<Level, ConfigError> {
        match self.logging.level.as_str() {
            "trace" => Ok(Level::TRACE),
            "debug" => Ok(Level::DEBUG),
            "info" => Ok(Level::INFO),
            "warn" => Ok(Level::WARN),
            "error" => Ok(Level::ERROR),
            other => Err(ConfigError::Validation(format!(
                "无效的日志级别: {}，有效值: [trace, debug, info, warn, error]",
                other
            ))),
        }
    }
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("文件读取错误: {0}")]
    FileRead(String),
    #[error("文件写入错误: {0}")]
    FileWrite(String),
    #[error("配置解析错误: {0}")]
    Parse(String),
    #[error("配置序列化错误: {0}")]
    Serialize(String),
    #[error("配置验证错误: {0}")]
    Validation(String),
}

/// 定位配置文件，没有找到时返回 `None`
pub fn find_config_file() -> Option<PathBuf> {
    find_config_file_from(std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from))
}

/// `env_path` 为环境变量给出的路径，优先于默认查找路径
fn find_config_file_from(env_path: Option<PathBuf>) -> Option<PathBuf> {
    if env_path.is_some() {
        return env_path;
    }

    CONFIG_PATHS
        .iter()
        .map(PathBuf::from)
        .find(|path| path.exists())
}

/// 从文件或默认值加载配置，并完成验证
///
/// 日志系统此时尚未初始化，返回的路径由调用方在初始化日志后记录。
pub fn load_config() -> Result<(Config, Option<PathBuf>), ConfigError> {
    load_config_from(std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from))
}

fn load_config_from(env_path: Option<PathBuf>) -> Result<(Config, Option<PathBuf>), ConfigError> {
    let path = find_config_file_from(env_path);
    let config = match &path {
        Some(path) => Config::load_from_file(path)?,
        None => Config::default(),
    };
    config.validate()?;
    Ok((config, path))
}
