//! 健康检测聚合器基准测试
//!
//! 测试聚合器的并发执行开销和结果序列化性能

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use vitals_sdk::health::{AggregateResult, CheckDefinition, CheckOutcome, CheckStatus, HealthAggregator};

fn create_checks(count: usize) -> Vec<CheckDefinition> {
    (0..count)
        .map(|i| {
            CheckDefinition::new(format!("dependency-{i}"), move || async move {
                Ok::<_, anyhow::Error>(i % 7 != 0)
            })
        })
        .collect()
}

/// 聚合器执行基准测试
fn aggregator_benchmark(c: &mut Criterion) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();
    let aggregator = HealthAggregator::new();

    let checks = create_checks(10);
    c.bench_function("aggregate_10_checks", |b| {
        b.iter(|| black_box(runtime.block_on(aggregator.run(&checks))));
    });

    let checks = create_checks(100);
    c.bench_function("aggregate_100_checks", |b| {
        b.iter(|| black_box(runtime.block_on(aggregator.run(&checks))));
    });
}

/// 聚合结果序列化基准测试
fn result_serialization_benchmark(c: &mut Criterion) {
    let result = AggregateResult::from_outcomes(
        (0..20)
            .map(|i| {
                let status = if i % 5 == 0 {
                    CheckStatus::Timeout
                } else {
                    CheckStatus::Success
                };
                CheckOutcome::new(format!("dependency-{i}"), status)
            })
            .collect(),
    );

    c.bench_function("aggregate_result_serialization", |b| {
        b.iter(|| black_box(serde_json::to_string(&result).unwrap()));
    });
}

criterion_group!(benches, aggregator_benchmark, result_serialization_benchmark);
criterion_main!(benches);
