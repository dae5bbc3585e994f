use crate::common::{configure_criterion, DriverError};
use criterion::{criterion_group, Criterion};
use error_trail::{ErrorBuilder, ErrorRecord};
use std::hint::black_box;

pub fn bench_record_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("builder/create");

    group.bench_function("minimal_factory", |b| {
        b.iter(|| black_box(ErrorRecord::new(black_box("disk full"))))
    });

    group.bench_function("builder_all_fields", |b| {
        b.iter(|| {
            black_box(
                ErrorBuilder::with_code("QUOTA")
                    .in_domain("billing")
                    .tags(["limits"])
                    .with("used", 120)
                    .with("limit", 100)
                    .public("Plan limit reached.")
                    .trace("4bf92f3577b34da6a3ce929d0e0e4736")
                    .user("u-42")
                    .error("quota exceeded"),
            )
        })
    });

    group.finish();
}

pub fn bench_lazy_context(c: &mut Criterion) {
    let payload: Vec<u64> = (0..256).collect();
    let mut group = c.benchmark_group("builder/context");

    group.bench_function("eager", |b| {
        b.iter(|| {
            black_box(
                ErrorBuilder::new()
                    .with("payload", format!("{payload:?}"))
                    .error("failed"),
            )
        })
    });

    group.bench_function("lazy", |b| {
        b.iter(|| {
            let payload = payload.clone();
            black_box(
                ErrorBuilder::new()
                    .with_lazy("payload", move || format!("{payload:?}"))
                    .error("failed"),
            )
        })
    });

    group.bench_function("lazy_overwritten", |b| {
        b.iter(|| {
            let payload = payload.clone();
            black_box(
                ErrorBuilder::new()
                    .with_lazy("payload", move || format!("{payload:?}"))
                    .with("payload", "redacted")
                    .error("failed"),
            )
        })
    });

    group.finish();
}

pub fn bench_wrap(c: &mut Criterion) {
    let mut group = c.benchmark_group("builder/wrap");

    for depth in [1usize, 8, 64] {
        let fault = DriverError::nested(depth);
        group.bench_function(format!("depth_{depth}"), |b| {
            b.iter(|| black_box(ErrorBuilder::with_code("DRIVER").wrap(black_box(&fault))))
        });
    }

    group.finish();
}

criterion_group! {
    name = builder_benches;
    config = configure_criterion();
    targets = bench_record_creation, bench_lazy_context, bench_wrap
}
