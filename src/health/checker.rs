//! 健康检测定义
//!
//! 提供探针trait以及带超时配置的检测定义

use async_trait::async_trait;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// 单项检测的默认超时时间
pub const DEFAULT_CHECK_TIMEOUT: Duration = Duration::from_secs(2);

/// 探针trait，定义单个依赖的检测接口
///
/// 返回 `Ok(true)` 表示健康，`Ok(false)` 表示不健康，
/// 返回 `Err` 视为检测失败。任意满足签名的异步闭包都自动实现此trait。
#[async_trait]
pub trait Probe: Send + Sync {
    /// 执行一次探测
    async fn probe(&self) -> anyhow::Result<bool>;
}

#[async_trait]
impl<F, Fut> Probe for F
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<bool>> + Send,
{
    async fn probe(&self) -> anyhow::Result<bool> {
        (self)().await
    }
}

/// 检测定义：名称、探针和超时时间
#[derive(Clone)]
pub struct CheckDefinition {
    /// 检测名称，在一次运行内唯一
    pub title: String,
    /// 探针
    pub probe: Arc<dyn Probe>,
    /// 超时时间
    pub timeout: Duration,
}

impl CheckDefinition {
    /// 使用默认超时创建检测定义
    ///
    /// # 参数
    /// * `title` - 检测名称
    /// * `probe` - 探针
    pub fn new<P>(title: impl Into<String>, probe: P) -> Self
    where
        P: Probe + 'static,
    {
        Self {
            title: title.into(),
            probe: Arc::new(probe),
            timeout: DEFAULT_CHECK_TIMEOUT,
        }
    }

    /// 覆盖超时时间
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl fmt::Debug for CheckDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckDefinition")
            .field("title", &self.title)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
