//! 配置数据结构定义
//!
//! 定义配置文件格式、日志配置结构体及其默认值

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 配置文件格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigFormat {
    /// INI 格式
    Ini,
    /// JSON 格式
    Json,
}

impl ConfigFormat {
    /// 根据文件扩展名推断格式，`.json` 以外一律按 INI 处理
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ConfigFormat::Json,
            _ => ConfigFormat::Ini,
        }
    }

    pub(crate) fn as_file_format(self) -> ::config::FileFormat {
        match self {
            ConfigFormat::Ini => ::config::FileFormat::Ini,
            ConfigFormat::Json => ::config::FileFormat::Json,
        }
    }
}

impl std::fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigFormat::Ini => write!(f, "ini"),
            ConfigFormat::Json => write!(f, "json"),
        }
    }
}

/// 日志输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// 纯文本
    #[default]
    Text,
    /// 每行一个 JSON 对象
    Json,
}

impl LogFormat {
    /// 解析配置值，空值和无法识别的值都按纯文本处理
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

/// 日志配置结构
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// 日志级别
    #[serde(default = "default_level")]
    pub level: String,
    /// 日志文件名
    #[serde(default = "default_file_name")]
    pub file_name: String,
    /// 日志目录
    #[serde(default = "default_path")]
    pub path: PathBuf,
    /// 单个日志文件最大大小（MB）
    #[serde(default = "default_max_file_size_mb")]
    pub max_file_size_mb: u64,
    /// 日志保留天数
    #[serde(default = "default_max_retention_days")]
    pub max_retention_days: u64,
    /// 输出格式
    #[serde(default)]
    pub log_format: LogFormat,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_level(),
            file_name: default_file_name(),
            path: default_path(),
            max_file_size_mb: default_max_file_size_mb(),
            max_retention_days: default_max_retention_days(),
            log_format: LogFormat::default(),
        }
    }
}

impl LoggingSettings {
    /// 日志文件完整路径
    pub fn file_path(&self) -> PathBuf {
        self.path.join(&self.file_name)
    }
}

// 默认值函数
pub(crate) fn default_level() -> String {
    "warn".to_string()
}
pub(crate) fn default_file_name() -> String {
    "app.log".to_string()
}
pub(crate) fn default_path() -> PathBuf {
    PathBuf::from("logs/")
}
pub(crate) fn default_max_file_size_mb() -> u64 {
    15
}
pub(crate) fn default_max_retention_days() -> u64 {
    90
}
