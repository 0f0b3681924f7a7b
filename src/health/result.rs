//! 健康检测结果数据结构
//!
//! 定义单项检测结果、检测状态枚举以及聚合结果

use serde::{Deserialize, Serialize};

/// 单项检测状态
///
/// 序列化为字面量字符串 `"Success"`、`"Failed"`、`"Timeout"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckStatus {
    /// 探针在超时前返回 true
    Success,
    /// 探针返回 false、返回错误或发生 panic
    Failed,
    /// 探针未在超时时间内完成
    Timeout,
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckStatus::Success => write!(f, "Success"),
            CheckStatus::Failed => write!(f, "Failed"),
            CheckStatus::Timeout => write!(f, "Timeout"),
        }
    }
}

impl CheckStatus {
    /// 判断状态是否为健康
    pub fn is_healthy(&self) -> bool {
        matches!(self, CheckStatus::Success)
    }
}

/// 单项检测结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    /// 检测名称
    pub title: String,
    /// 检测状态
    pub status: CheckStatus,
}

impl CheckOutcome {
    /// 创建新的检测结果
    pub fn new(title: impl Into<String>, status: CheckStatus) -> Self {
        Self {
            title: title.into(),
            status,
        }
    }
}

/// 一次聚合运行的结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateResult {
    /// 聚合器本身是否正常响应
    pub available: bool,
    /// 是否所有检测都成功（空检测集视为健康）
    pub healthy: bool,
    /// 按输入顺序排列的检测结果
    #[serde(rename = "healthChecks", default)]
    pub outcomes: Vec<CheckOutcome>,
}

impl AggregateResult {
    /// 空检测集的结果：可用且健康
    pub fn vacuous() -> Self {
        Self {
            available: true,
            healthy: true,
            outcomes: Vec::new(),
        }
    }

    /// 由检测结果列表归约出聚合结果
    pub fn from_outcomes(outcomes: Vec<CheckOutcome>) -> Self {
        let healthy = outcomes.iter().all(|o| o.status.is_healthy());
        Self {
            available: true,
            healthy,
            outcomes,
        }
    }

    /// 指定状态的检测数量
    pub fn count(&self, status: CheckStatus) -> usize {
        self.outcomes.iter().filter(|o| o.status == status).count()
    }
}
