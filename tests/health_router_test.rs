//! 健康检测路由测试
//!
//! 通过 HTTP 请求验证 `/health` 的响应格式和聚合语义

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use std::time::Duration;
use tower::ServiceExt;
use vitals_sdk::{create_health_router, CheckDefinition};

async fn get_health(router: axum::Router) -> (StatusCode, Value) {
    let response = router
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_health_without_checks() {
    let (status, body) = get_health(create_health_router(Vec::new())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"available": true, "healthy": true, "healthChecks": []})
    );
}

#[tokio::test(start_paused = true)]
async fn test_health_mixed_outcomes() {
    let checks = vec![
        CheckDefinition::new("db", || async { Ok::<_, anyhow::Error>(true) }),
        CheckDefinition::new("cache", || async { Ok::<_, anyhow::Error>(false) }),
        CheckDefinition::new("queue", || async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok::<_, anyhow::Error>(true)
        })
        .with_timeout(Duration::from_secs(1)),
    ];

    let (status, body) = get_health(create_health_router(checks)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "available": true,
            "healthy": false,
            "healthChecks": [
                {"title": "db", "status": "Success"},
                {"title": "cache", "status": "Failed"},
                {"title": "queue", "status": "Timeout"}
            ]
        })
    );
}

#[tokio::test]
async fn test_health_all_success() {
    let checks = vec![
        CheckDefinition::new("db", || async { Ok::<_, anyhow::Error>(true) }),
        CheckDefinition::new("downstream", || async { Ok::<_, anyhow::Error>(true) }),
    ];

    let (_, body) = get_health(create_health_router(checks)).await;
    assert_eq!(body["healthy"], json!(true));
    assert_eq!(body["healthChecks"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let response = create_health_router(Vec::new())
        .oneshot(Request::builder().uri("/status").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
