//! 错误处理模块
//!
//! 定义应用程序的统一错误类型

use std::path::PathBuf;
use thiserror::Error;

/// Vitals SDK 的主要错误类型
#[derive(Error, Debug)]
pub enum VitalsError {
    /// 配置相关错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    /// 日志系统相关错误
    #[error("日志错误: {0}")]
    Logging(#[from] LoggingError),

    /// IO错误
    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    /// JSON序列化/反序列化错误
    #[error("JSON错误: {0}")]
    Json(#[from] serde_json::Error),

    /// 其他错误
    #[error("其他错误: {0}")]
    Other(#[from] anyhow::Error),
}

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 默认位置下找不到任何配置文件
    #[error("未找到默认配置文件，期望 [{ini}] 或 [{json}]")]
    NotFound { ini: String, json: String },

    /// 配置文件解析错误
    #[error("配置文件解析失败: {0}")]
    ParseError(String),
}

impl From<::config::ConfigError> for ConfigError {
    fn from(err: ::config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// 日志系统错误类型
#[derive(Error, Debug)]
pub enum LoggingError {
    /// 配置中的日志级别无法识别
    #[error("无法识别的日志级别: {0}")]
    UnknownLevel(String),

    /// 创建日志目录失败
    #[error("创建日志目录失败 {path}: {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 打开日志文件失败
    #[error("打开日志文件失败 {path}: {source}")]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 订阅器初始化失败
    #[error("日志系统初始化失败: {0}")]
    Init(String),
}

/// 结果类型别名
pub type Result<T> = std::result::Result<T, VitalsError>;
