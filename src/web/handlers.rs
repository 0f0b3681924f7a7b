//! Web 路由处理函数

use super::HealthState;
use crate::health::AggregateResult;
use axum::{extract::State, Json};

/// 健康检测端点处理函数
///
/// 总是返回 200，健康与否由响应体中的 `healthy` 字段表达。
pub async fn health(State(state): State<HealthState>) -> Json<AggregateResult> {
    let result = state.aggregator.run(&state.checks).await;
    Json(result)
}
