//! 配置服务
//!
//! 配置文件为 TOML，默认位于 `<config dir>/proxy-warden/config.toml`，
//! 可用 `PROXY_WARDEN_CONFIG` 指定其他路径。文件不存在时使用默认值。

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::i18n::Language;
use crate::view::theme::Theme;

/// 配置文件路径环境变量
pub const CONFIG_PATH_ENV: &str = "PROXY_WARDEN_CONFIG";

/// 服务端地址环境变量（优先于配置文件）
pub const BASE_URL_ENV: &str = "PROXY_WARDEN_BASE_URL";

/// 最短轮询间隔（秒）
const MIN_POLL_INTERVAL_SECS: u64 = 1;

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to write config file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// 应用配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logs: LogsConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogsConfig {
    pub poll_interval_secs: u64,
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// 语言代码（`en-US` / `ko-KR`）
    pub language: String,
    pub theme: Theme,
    /// `chrono` 格式串
    pub timestamp_format: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            language: Language::default().code().to_string(),
            theme: Theme::default(),
            timestamp_format: proxy_warden_core::utils::datetime::DEFAULT_DISPLAY_FORMAT
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` 指令，`RUST_LOG` 优先
    pub level: String,
    /// 日志目录，缺省为 `<data dir>/proxy-warden/logs`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}

impl AppConfig {
    /// 日志轮询间隔，至少 1 秒
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.logs.poll_interval_secs.max(MIN_POLL_INTERVAL_SECS))
    }

    /// 界面语言；无法识别的代码回退到英语
    pub fn language(&self) -> Language {
        Language::from_code(&self.ui.language).unwrap_or_else(|| {
            log::warn!("Unknown language '{}', using default", self.ui.language);
            Language::default()
        })
    }

    /// 服务端地址：环境变量（非空时）优先
    pub fn resolve_base_url(&self, env_override: Option<String>) -> String {
        env_override
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| self.server.base_url.clone())
    }

    /// 日志目录
    pub fn log_directory(&self) -> PathBuf {
        self.logging.directory.clone().unwrap_or_else(|| {
            dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("proxy-warden")
                .join("logs")
        })
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig, ConfigError>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;
}

/// TOML 文件配置服务
#[derive(Debug, Clone)]
pub struct TomlConfigService {
    path: PathBuf,
}

impl TomlConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 环境变量指定的路径，否则为默认路径
    pub fn from_env() -> Self {
        let path = std::env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(default_config_path);
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// 默认配置文件路径
fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("proxy-warden")
        .join("config.toml")
}

impl ConfigService for TomlConfigService {
    fn load(&self) -> Result<AppConfig, ConfigError> {
        if !self.path.exists() {
            log::info!("No config file at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|source| ConfigError::Read {
            path: self.path.clone(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(config)?;
        let write_err = |source| ConfigError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir).map_err(write_err)?;
            }
        }
        std::fs::write(&self.path, content).map_err(write_err)?;

        log::debug!("Config saved to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("proxy-warden-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn missing_file_gives_defaults() {
        let service = TomlConfigService::new(temp_path("does-not-exist.toml"));
        let config = service.load().unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.poll_interval(), Duration::from_secs(5));
        assert_eq!(config.language(), Language::EnUs);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [server]
            base_url = "http://10.0.0.1:9000"

            [ui]
            language = "ko-KR"
            theme = "light"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.base_url, "http://10.0.0.1:9000");
        assert_eq!(config.language(), Language::KoKr);
        assert_eq!(config.ui.theme, Theme::Light);
        assert_eq!(config.logs.poll_interval_secs, 5);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn poll_interval_is_clamped() {
        let mut config = AppConfig::default();
        config.logs.poll_interval_secs = 0;
        assert_eq!(config.poll_interval(), Duration::from_secs(1));
    }

    #[test]
    fn unknown_language_falls_back() {
        let mut config = AppConfig::default();
        config.ui.language = "fr-FR".into();
        assert_eq!(config.language(), Language::EnUs);
    }

    #[test]
    fn env_base_url_wins_when_not_blank() {
        let config = AppConfig::default();
        assert_eq!(
            config.resolve_base_url(Some(" http://proxy:8000 ".into())),
            "http://proxy:8000"
        );
        assert_eq!(
            config.resolve_base_url(Some("   ".into())),
            "http://127.0.0.1:8000"
        );
        assert_eq!(config.resolve_base_url(None), "http://127.0.0.1:8000");
    }

    #[test]
    fn save_then_load() {
        let path = temp_path("nested/config.toml");
        let service = TomlConfigService::new(&path);
        let mut config = AppConfig::default();
        config.ui.language = "ko-KR".into();
        config.ui.theme = Theme::Light;

        service.save(&config).unwrap();
        assert_eq!(service.load().unwrap(), config);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn malformed_file_reports_path() {
        let path = temp_path("broken.toml");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "[server\nbase_url = 1").unwrap();

        let err = TomlConfigService::new(&path).load().unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("broken.toml"));
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "[server\nbase_url = 1"
        );

        std::fs::remove_file(&path).ok();
    }
}
