//! 配置管理器实现
//!
//! 显式构造的配置对象，提供带默认值的类型化读取和日志配置提取。
//! 不使用全局单例，需要配置的组件直接持有或借用 `ConfigManager`。

use crate::config::loader::{find_default_config, load_source, parse_source};
use crate::config::types::{
    default_file_name, default_level, default_max_file_size_mb, default_max_retention_days,
    default_path, ConfigFormat, LogFormat, LoggingSettings,
};
use crate::error::Result;
use std::path::{Path, PathBuf};

/// 日志配置所在的节名
pub const DEFAULT_LOGGER_SECTION: &str = "logger_settings";

/// 配置管理器
#[derive(Debug, Clone)]
pub struct ConfigManager {
    /// 配置格式
    format: ConfigFormat,
    /// 来源文件（从内存内容构造时为空）
    source_path: Option<PathBuf>,
    /// 解析后的配置
    source: ::config::Config,
}

impl ConfigManager {
    /// 在指定目录中查找 `app_config.json` 或 `config.ini` 并加载
    ///
    /// # 参数
    /// * `dir` - 查找目录
    ///
    /// # 返回
    /// * `Result<Self>` - 配置管理器，两个文件都不存在时返回错误
    pub async fn discover<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let (format, path) = find_default_config(dir)?;
        Self::from_file(format, path).await
    }

    /// 从指定文件加载配置
    ///
    /// # 参数
    /// * `format` - 文件格式
    /// * `path` - 文件路径
    ///
    /// # 返回
    /// * `Result<Self>` - 配置管理器
    pub async fn from_file<P: AsRef<Path>>(format: ConfigFormat, path: P) -> Result<Self> {
        let path = path.as_ref();
        let source = load_source(format, path).await?;

        Ok(Self {
            format,
            source_path: Some(path.to_path_buf()),
            source,
        })
    }

    /// 从内存中的配置内容构造
    ///
    /// # 参数
    /// * `format` - 内容格式
    /// * `content` - 配置内容
    ///
    /// # 返回
    /// * `Result<Self>` - 配置管理器
    pub fn parse(format: ConfigFormat, content: &str) -> Result<Self> {
        let source = parse_source(format, content)?;

        Ok(Self {
            format,
            source_path: None,
            source,
        })
    }

    /// 配置格式
    pub fn format(&self) -> ConfigFormat {
        self.format
    }

    /// 来源文件路径
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// 读取原始字符串值，键不存在时返回 `None`
    pub fn raw(&self, section: impl AsRef<str>, key: &str) -> Option<String> {
        self.source
            .get_string(&format!("{}.{}", section.as_ref(), key))
            .ok()
    }

    /// 读取字符串值
    pub fn get_string(&self, section: impl AsRef<str>, key: &str, default: &str) -> String {
        self.raw(section, key)
            .unwrap_or_else(|| default.to_string())
    }

    /// 读取整数值，缺失或无法解析时返回默认值
    pub fn get_int(&self, section: impl AsRef<str>, key: &str, default: i64) -> i64 {
        self.raw(section, key)
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(default)
    }

    /// 读取浮点值，缺失或无法解析时返回默认值
    pub fn get_float(&self, section: impl AsRef<str>, key: &str, default: f64) -> f64 {
        self.raw(section, key)
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(default)
    }

    /// 读取布尔值
    ///
    /// 接受 `true/1/yes/on` 和 `false/0/no/off`（不区分大小写），
    /// 其他值返回默认值。
    pub fn get_bool(&self, section: impl AsRef<str>, key: &str, default: bool) -> bool {
        self.raw(section, key)
            .and_then(|value| parse_bool(&value))
            .unwrap_or(default)
    }

    /// 提取日志配置，缺失的字段使用默认值
    pub fn logger_settings(&self) -> LoggingSettings {
        let section = DEFAULT_LOGGER_SECTION;

        let settings = LoggingSettings {
            level: self.get_string(section, "level", &default_level()),
            file_name: self.get_string(section, "file_name", &default_file_name()),
            path: self
                .raw(section, "path")
                .map(PathBuf::from)
                .unwrap_or_else(default_path),
            max_file_size_mb: self.get_u64(section, "max_file_size", default_max_file_size_mb()),
            max_retention_days: self.get_u64(
                section,
                "max_retention_days",
                default_max_retention_days(),
            ),
            log_format: self
                .raw(section, "log_format")
                .map(|value| LogFormat::parse(&value))
                .unwrap_or_default(),
        };

        log::debug!("日志配置: {:?}", settings);
        settings
    }

    fn get_u64(&self, section: &str, key: &str, default: u64) -> u64 {
        self.raw(section, key)
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(default)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_CONFIG_INI: &str = r#"
[logger_settings]
level = debug
file_name = service.log
path = /tmp/service-logs
max_file_size = 20
max_retention_days = 7

[database]
host = db.internal
port = 5432
pool_ratio = 0.75
use_tls = yes
replicas = three
verbose = maybe
"#;

    const TEST_CONFIG_JSON: &str = r#"
{
  "logger_settings": {
    "level": "info",
    "file_name": "api.log",
    "max_file_size": 5,
    "log_format": "json"
  },
  "database": {
    "port": 6543,
    "use_tls": false
  }
}
"#;

    #[test]
    fn test_ini_logger_settings() {
        let manager = ConfigManager::parse(ConfigFormat::Ini, TEST_CONFIG_INI).unwrap();
        let settings = manager.logger_settings();

        assert_eq!(settings.level, "debug");
        assert_eq!(settings.file_name, "service.log");
        assert_eq!(settings.path, PathBuf::from("/tmp/service-logs"));
        assert_eq!(settings.max_file_size_mb, 20);
        assert_eq!(settings.max_retention_days, 7);
        assert_eq!(settings.log_format, LogFormat::Text);
    }

    #[test]
    fn test_json_logger_settings_fill_defaults() {
        let manager = ConfigManager::parse(ConfigFormat::Json, TEST_CONFIG_JSON).unwrap();
        let settings = manager.logger_settings();

        assert_eq!(settings.level, "info");
        assert_eq!(settings.file_name, "api.log");
        assert_eq!(settings.path, PathBuf::from("logs/"));
        assert_eq!(settings.max_file_size_mb, 5);
        assert_eq!(settings.max_retention_days, 90);
        assert_eq!(settings.log_format, LogFormat::Json);
    }

    #[test]
    fn test_missing_section_uses_defaults() {
        let manager = ConfigManager::parse(ConfigFormat::Ini, "[other]\nkey = value\n").unwrap();
        assert_eq!(manager.logger_settings(), LoggingSettings::default());
    }

    #[test]
    fn test_typed_lookups() {
        let manager = ConfigManager::parse(ConfigFormat::Ini, TEST_CONFIG_INI).unwrap();

        assert_eq!(manager.get_string("database", "host", "localhost"), "db.internal");
        assert_eq!(manager.get_string("database", "user", "postgres"), "postgres");
        assert_eq!(manager.get_int("database", "port", 0), 5432);
        assert_eq!(manager.get_float("database", "pool_ratio", 1.0), 0.75);
        assert!(manager.get_bool("database", "use_tls", false));
    }

    #[test]
    fn test_unparseable_values_fall_back_to_default() {
        let manager = ConfigManager::parse(ConfigFormat::Ini, TEST_CONFIG_INI).unwrap();

        assert_eq!(manager.get_int("database", "replicas", 1), 1);
        assert_eq!(manager.get_float("database", "host", 2.5), 2.5);
        assert!(manager.get_bool("database", "verbose", true));
        assert!(!manager.get_bool("database", "verbose", false));
    }

    #[test]
    fn test_json_typed_lookups() {
        let manager = ConfigManager::parse(ConfigFormat::Json, TEST_CONFIG_JSON).unwrap();

        assert_eq!(manager.get_int("database", "port", 0), 6543);
        assert!(!manager.get_bool("database", "use_tls", true));
        assert_eq!(manager.format(), ConfigFormat::Json);
        assert!(manager.source_path().is_none());
    }

    #[test]
    fn test_parse_bool_variants() {
        for value in ["true", "TRUE", "1", "yes", "On"] {
            assert_eq!(parse_bool(value), Some(true), "{value}");
        }
        for value in ["false", "0", "No", "off"] {
            assert_eq!(parse_bool(value), Some(false), "{value}");
        }
        assert_eq!(parse_bool("enabled"), None);
    }
}
