//! Web 接口模块
//!
//! 通过 `GET /health` 暴露健康检测聚合结果

pub mod handlers;

use crate::health::{CheckDefinition, HealthAggregator};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// 健康检测路由状态
#[derive(Debug, Clone)]
pub struct HealthState {
    /// 聚合器
    pub aggregator: HealthAggregator,
    /// 检测定义列表，只读共享
    pub checks: Arc<[CheckDefinition]>,
}

impl HealthState {
    /// 创建新的路由状态
    pub fn new(checks: Vec<CheckDefinition>) -> Self {
        Self {
            aggregator: HealthAggregator::new(),
            checks: checks.into(),
        }
    }
}

/// 创建健康检测路由
///
/// 每次请求都会重新运行全部检测。
///
/// # 参数
/// * `checks` - 检测定义列表，可以为空
///
/// # 返回
/// * `Router` - 包含 `/health` 路由的 axum 路由器
pub fn create_health_router(checks: Vec<CheckDefinition>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(HealthState::new(checks))
}
