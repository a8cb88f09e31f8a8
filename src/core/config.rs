//! 服务配置
//!
//! 启动时读取一次：默认值 -> 可选的 TOML 配置文件 -> 环境变量覆盖。

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// 指定配置文件路径的环境变量
pub const CONFIG_PATH_ENV: &str = "PRODUCT_API_CONFIG";

/// 服务配置结构
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP 服务配置
    pub http: HttpConfig,
    /// 认证配置
    pub auth: AuthConfig,
    /// 日志配置
    pub logging: LoggingConfig,
}

/// HTTP 服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// HTTP 服务端口
    pub port: u16,
    /// 绑定地址
    pub bind_address: String,
}

/// 认证配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// `x-api-key` 请求头需要匹配的密钥，未设置时所有写操作都会被拒绝
    pub api_key: Option<String>,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别 (trace, debug, info, warn, error)
    pub level: String,
    /// 日志目录，设置后额外按天写入文件
    pub log_dir: Option<String>,
    /// 日志文件名前缀
    pub file_prefix: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            bind_address: "0.0.0.0".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_dir: None,
            file_prefix: "product-api".to_string(),
        }
    }
}

impl Config {
    /// 从配置文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileRead(e.to_string()))?;

        let config: Config =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        Ok(config)
    }

    /// 按 默认值 -> 配置文件 -> 环境变量 的顺序加载并校验
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::load_from_file(path)?,
            Err(_) => Self::default(),
        };

        config.apply_overrides(|key| env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// 应用环境变量覆盖
    ///
    /// `lookup` 抽象了变量来源，测试中可以传入固定的映射而不必修改进程环境。
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            self.http.port = port.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT".to_string(),
                value: port.clone(),
            })?;
        }

        if let Some(addr) = lookup("BIND_ADDRESS") {
            self.http.bind_address = addr;
        }

        if let Some(key) = lookup("API_KEY") {
            self.auth.api_key = Some(key);
        }

        if let Some(level) = lookup("LOG_LEVEL") {
            self.logging.level = level;
        }

        if let Some(dir) = lookup("LOG_DIR") {
            self.logging.log_dir = Some(dir);
        }

        Ok(())
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.port == 0 {
            return Err(ConfigError::Validation("端口号不能为 0".to_string()));
        }

        if self.http.bind_address.trim().is_empty() {
            return Err(ConfigError::Validation("绑定地址不能为空".to_string()));
        }

        match self.logging.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                return Err(ConfigError::Validation(format!(
                    "无效的日志级别: {}",
                    other
                )))
            }
        }

        Ok(())
    }

    /// 监听地址，例如 `0.0.0.0:3000`
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.http.bind_address, self.http.port)
    }
}

/// 配置错误类型
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("读取配置文件失败: {0}")]
    FileRead(String),
    #[error("解析配置文件失败: {0}")]
    Parse(String),
    #[error("无效的配置值 {key}={value}")]
    InvalidValue { key: String, value: String },
    #[error("配置验证失败: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.http.port, 3000);
        assert!(config.auth.api_key.is_none());
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config
            .apply_overrides(lookup_from(&[("PORT", "8081"), ("API_KEY", "secret")]))
            .unwrap();
        assert_eq!(config.http.port, 8081);
        assert_eq!(config.auth.api_key.as_deref(), Some("secret"));
        assert_eq!(config.listen_addr(), "0.0.0.0:8081");
    }

    #[test]
    fn test_invalid_port() {
        let mut config = Config::default();
        let err = config
            .apply_overrides(lookup_from(&[("PORT", "not-a-port")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = Config::default();
        config.logging.level = "loud".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[http]\nport = 4000\n\n[auth]\napi_key = \"from-file\"\n"
        )
        .unwrap();

        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.http.port, 4000);
        assert_eq!(config.http.bind_address, "0.0.0.0");
        assert_eq!(config.auth.api_key.as_deref(), Some("from-file"));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = Config::load_from_file("/nonexistent/product-api.toml").unwrap_err();
        assert!(matches!(err, ConfigError::FileRead(_)));
    }
}
