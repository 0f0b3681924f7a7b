//! 日志系统模块
//!
//! 根据日志配置初始化 tracing 订阅器：控制台输出加日志文件输出

use crate::config::{LogFormat, LoggingSettings};
use crate::error::LoggingError;
use log::LevelFilter;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::MakeWriter;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter, Layer};

/// 已初始化的日志系统
#[derive(Debug, Clone)]
pub struct LoggingSystem {
    /// 生效的日志级别
    level: LevelFilter,
    /// 日志文件路径
    file_path: PathBuf,
    /// 输出格式
    format: LogFormat,
    /// 本次调用是否安装了全局订阅器
    installed: bool,
}

impl LoggingSystem {
    /// 初始化日志系统
    ///
    /// 已有全局订阅器时不会报错，保留现有订阅器并返回 `installed() == false`，
    /// 此时不创建日志目录也不打开日志文件。
    ///
    /// # 参数
    /// * `settings` - 日志配置
    ///
    /// # 返回
    /// * `Result<LoggingSystem, LoggingError>` - 初始化结果
    pub fn init(settings: &LoggingSettings) -> Result<Self, LoggingError> {
        let level = Self::parse_level(&settings.level)?;

        if tracing::dispatcher::has_been_set() {
            tracing::debug!("日志系统已经初始化过了");
            Self::init_log_tracer();
            return Ok(Self {
                level,
                file_path: settings.file_path(),
                format: settings.log_format,
                installed: false,
            });
        }

        let (file_path, file) = Self::open_log_file(settings)?;

        let installed = Self::init_tracing_subscriber(level, settings.log_format, file)?;
        Self::init_log_tracer();

        if installed {
            tracing::info!(
                level = Self::level_to_string(level),
                file = %file_path.display(),
                "日志系统初始化完成"
            );
            tracing::debug!(
                max_file_size_mb = settings.max_file_size_mb,
                max_retention_days = settings.max_retention_days,
                "日志配置: {:?}",
                settings
            );
        }

        Ok(Self {
            level,
            file_path,
            format: settings.log_format,
            installed,
        })
    }

    /// 解析日志级别（不区分大小写）
    ///
    /// `critical` 映射为 `error`，其他无法识别的值返回错误。
    pub fn parse_level(level: &str) -> Result<LevelFilter, LoggingError> {
        match level.trim().to_lowercase().as_str() {
            "trace" => Ok(LevelFilter::Trace),
            "debug" => Ok(LevelFilter::Debug),
            "info" => Ok(LevelFilter::Info),
            "warn" => Ok(LevelFilter::Warn),
            "error" | "critical" => Ok(LevelFilter::Error),
            _ => Err(LoggingError::UnknownLevel(level.to_string())),
        }
    }

    /// 生效的日志级别
    pub fn level(&self) -> LevelFilter {
        self.level
    }

    /// 日志文件路径
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// 输出格式
    pub fn format(&self) -> LogFormat {
        self.format
    }

    /// 本次调用是否安装了全局订阅器
    pub fn installed(&self) -> bool {
        self.installed
    }

    /// 创建日志目录并以追加模式打开日志文件
    fn open_log_file(settings: &LoggingSettings) -> Result<(PathBuf, File), LoggingError> {
        std::fs::create_dir_all(&settings.path).map_err(|source| {
            LoggingError::CreateDirectory {
                path: settings.path.clone(),
                source,
            }
        })?;

        let file_path = settings.file_path();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&file_path)
            .map_err(|source| LoggingError::OpenFile {
                path: file_path.clone(),
                source,
            })?;

        Ok((file_path, file))
    }

    /// 安装 tracing 订阅器，已存在全局订阅器时返回 `Ok(false)`
    fn init_tracing_subscriber(
        level: LevelFilter,
        format: LogFormat,
        file: File,
    ) -> Result<bool, LoggingError> {
        let env_filter =
            EnvFilter::from_default_env().add_directive(Self::convert_level_to_directive(level));

        let subscriber = registry()
            .with(env_filter)
            .with(Self::format_layer(format, std::io::stderr, true))
            .with(Self::format_layer(format, Mutex::new(file), false));

        match tracing::subscriber::set_global_default(subscriber) {
            Ok(()) => Ok(true),
            Err(e) => {
                let error_msg = e.to_string();
                if error_msg.contains("a global default trace dispatcher has already been set") {
                    tracing::debug!("日志系统已经初始化过了");
                    Ok(false)
                } else {
                    Err(LoggingError::Init(error_msg))
                }
            }
        }
    }

    /// 安装 log 到 tracing 的桥接，重复安装时忽略
    fn init_log_tracer() {
        if let Err(e) = tracing_log::LogTracer::init() {
            tracing::debug!("LogTracer 已存在: {}", e);
        }
    }

    /// 构建单个输出层
    fn format_layer<S, W>(
        format: LogFormat,
        writer: W,
        ansi: bool,
    ) -> Box<dyn Layer<S> + Send + Sync>
    where
        S: tracing::Subscriber + for<'a> LookupSpan<'a> + 'static,
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        match format {
            LogFormat::Json => fmt::layer()
                .json()
                .with_timer(fmt::time::ChronoUtc::rfc_3339())
                .with_file(true)
                .with_line_number(true)
                .with_writer(writer)
                .boxed(),
            LogFormat::Text => fmt::layer()
                .with_timer(fmt::time::ChronoUtc::rfc_3339())
                .with_ansi(ansi)
                .with_file(true)
                .with_line_number(true)
                .with_target(true)
                .with_writer(writer)
                .boxed(),
        }
    }

    /// 将 log::LevelFilter 转换为 tracing 的指令
    fn convert_level_to_directive(level: LevelFilter) -> tracing_subscriber::filter::Directive {
        use tracing_subscriber::filter::{Directive, LevelFilter as TracingLevel};
        match level {
            LevelFilter::Off => Directive::from(TracingLevel::OFF),
            LevelFilter::Error => Directive::from(tracing::Level::ERROR),
            LevelFilter::Warn => Directive::from(tracing::Level::WARN),
            LevelFilter::Info => Directive::from(tracing::Level::INFO),
            LevelFilter::Debug => Directive::from(tracing::Level::DEBUG),
            LevelFilter::Trace => Directive::from(tracing::Level::TRACE),
        }
    }

    /// 将 log::LevelFilter 转换为字符串
    fn level_to_string(level: LevelFilter) -> &'static str {
        match level {
            LevelFilter::Off => "off",
            LevelFilter::Error => "error",
            LevelFilter::Warn => "warn",
            LevelFilter::Info => "info",
            LevelFilter::Debug => "debug",
            LevelFilter::Trace => "trace",
        }
    }
}
