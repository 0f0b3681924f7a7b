//! Vitals SDK - 后端服务支撑工具
//!
//! 提供后端服务常用的基础组件：
//! - 并发健康检测聚合（单项超时、部分失败策略）
//! - `GET /health` 路由
//! - INI/JSON 配置加载
//! - 结构化日志初始化

pub mod config;
pub mod error;
pub mod health;
pub mod logging;
pub mod web;

// 重新导出主要类型
pub use crate::config::{ConfigFormat, ConfigManager, LoggingSettings};
pub use error::VitalsError;
pub use health::{AggregateResult, CheckDefinition, CheckOutcome, CheckStatus, HealthAggregator};
pub use logging::LoggingSystem;
pub use web::create_health_router;

/// 库版本信息
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 库名称
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
