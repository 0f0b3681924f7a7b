//! 健康检测聚合器
//!
//! 并发执行一组相互独立的检测，每项检测受自身超时约束，
//! 最终按输入顺序归约为一个聚合结果

use crate::health::checker::CheckDefinition;
use crate::health::result::{AggregateResult, CheckOutcome, CheckStatus};
use futures::future::join_all;
use std::sync::Arc;
use std::time::Instant;
use tokio::task::AbortHandle;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// 健康检测聚合器
///
/// 不持有任何状态，检测定义只在一次 `run` 调用期间被借用。
#[derive(Debug, Clone, Copy, Default)]
pub struct HealthAggregator;

impl HealthAggregator {
    /// 创建新的聚合器
    pub fn new() -> Self {
        Self
    }

    /// 并发执行所有检测并归约结果
    ///
    /// # 参数
    /// * `checks` - 检测定义列表，可以为空
    ///
    /// # 返回
    /// * `AggregateResult` - 聚合结果，`outcomes` 与 `checks` 顺序一致
    pub async fn run(&self, checks: &[CheckDefinition]) -> AggregateResult {
        if checks.is_empty() {
            debug!("未配置任何健康检测，直接返回健康");
            return AggregateResult::vacuous();
        }

        let start_time = Instant::now();

        // join_all 按输入顺序返回结果，与完成顺序无关
        let outcomes = join_all(checks.iter().map(run_check)).await;
        let result = AggregateResult::from_outcomes(outcomes);

        let elapsed = start_time.elapsed();
        if result.healthy {
            info!(
                checks = checks.len(),
                elapsed = ?elapsed,
                "健康检测完成: 全部成功"
            );
        } else {
            warn!(
                checks = checks.len(),
                failed = result.count(CheckStatus::Failed),
                timeout = result.count(CheckStatus::Timeout),
                elapsed = ?elapsed,
                "健康检测完成: 存在异常"
            );
        }

        result
    }

    /// 检测集可能缺失时的入口，`None` 与空列表等价
    pub async fn run_optional(&self, checks: Option<&[CheckDefinition]>) -> AggregateResult {
        self.run(checks.unwrap_or_default()).await
    }
}

/// 离开作用域时中止对应任务
///
/// `JoinHandle` 被丢弃只会分离任务，不会停止它。
struct AbortOnDrop(AbortHandle);

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// 在独立任务中执行单项检测
///
/// 探针返回的错误和 panic 都在此处收敛为 `Failed`，不会影响其他检测。
/// 超时或调用方放弃等待（`run` 的 future 被丢弃）时任务被中止，之后不再等待它。
async fn run_check(check: &CheckDefinition) -> CheckOutcome {
    let probe = Arc::clone(&check.probe);
    let handle = tokio::spawn(async move { probe.probe().await });
    let _guard = AbortOnDrop(handle.abort_handle());

    let status = match timeout(check.timeout, handle).await {
        Ok(Ok(Ok(true))) => CheckStatus::Success,
        Ok(Ok(Ok(false))) => {
            debug!(check = %check.title, "探针返回不健康");
            CheckStatus::Failed
        }
        Ok(Ok(Err(e))) => {
            warn!(check = %check.title, error = %e, "探针执行出错");
            CheckStatus::Failed
        }
        Ok(Err(join_error)) => {
            warn!(check = %check.title, error = %join_error, "探针任务异常退出");
            CheckStatus::Failed
        }
        Err(_) => {
            warn!(
                check = %check.title,
                timeout = ?check.timeout,
                "探针超时"
            );
            CheckStatus::Timeout
        }
    };

    CheckOutcome::new(check.title.clone(), status)
}
