//! 健康检测模块
//!
//! 提供检测定义、并发聚合执行和结果类型

pub mod aggregator;
pub mod checker;
pub mod result;

// 重新导出主要类型
pub use aggregator::HealthAggregator;
pub use checker::{CheckDefinition, Probe, DEFAULT_CHECK_TIMEOUT};
pub use result::{AggregateResult, CheckOutcome, CheckStatus};
