use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// 默认配置文件名（位于当前工作目录）
pub const DEFAULT_CONFIG_FILE: &str = "dodona.toml";

/// 程序配置文件
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Dodona API token
    pub dodona_api_key: String,
    /// Dodona 服务地址
    pub base_url: String,
    /// 轮询间隔（毫秒）
    pub poll_interval_ms: u64,
    /// 单次请求超时（秒）
    pub request_timeout_secs: u64,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dodona_api_key: String::new(),
            base_url: "https://dodona.ugent.be".to_string(),
            poll_interval_ms: 3000,
            request_timeout_secs: 30,
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 按 默认值 → 配置文件 → 环境变量 的顺序加载
    ///
    /// 没有显式指定路径时，只有 `dodona.toml` 存在才会读取它。
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match explicit_path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };
        config.apply_env(|name| std::env::var(name).ok())
    }

    /// 从 TOML 文件读取配置，缺失的字段使用默认值
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::TomlParseFailed {
            path: path.display().to_string(),
            source,
        })
    }

    /// 只用默认值和环境变量
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().apply_env(|name| std::env::var(name).ok())
    }

    /// 用环境变量覆盖配置
    ///
    /// `lookup` 返回变量值；测试中可以传入固定的映射。
    pub fn apply_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("DODONA_API_KEY") {
            self.dodona_api_key = v;
        }
        if let Some(v) = lookup("DODONA_BASE_URL") {
            self.base_url = v;
        }
        if let Some(v) = lookup("DODONA_POLL_INTERVAL_MS") {
            self.poll_interval_ms = parse_env("DODONA_POLL_INTERVAL_MS", v, "u64")?;
        }
        if let Some(v) = lookup("DODONA_REQUEST_TIMEOUT_SECS") {
            self.request_timeout_secs = parse_env("DODONA_REQUEST_TIMEOUT_SECS", v, "u64")?;
        }
        if let Some(v) = lookup("VERBOSE_LOGGING") {
            self.verbose_logging = parse_env("VERBOSE_LOGGING", v, "bool")?;
        }
        Ok(self)
    }

    /// API key 是否已设置（空白视为未设置）
    pub fn has_api_key(&self) -> bool {
        !self.dodona_api_key.trim().is_empty()
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn parse_env<T: std::str::FromStr>(
    var_name: &str,
    value: String,
    expected_type: &str,
) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::EnvVarParseFailed {
            var_name: var_name.to_string(),
            value,
            expected_type: expected_type.to_string(),
        })
}
