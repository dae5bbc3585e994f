use crate::common::{configure_criterion, sample_record};
use criterion::{criterion_group, Criterion};
use error_trail::{Format, RenderConfig, Renderer};
use std::hint::black_box;

pub fn bench_render_views(c: &mut Criterion) {
    let record = sample_record();
    let renderer = Renderer::default();
    let mut group = c.benchmark_group("render/views");

    for format in [Format::Full, Format::Code, Format::Debug, Format::Json, Format::Public, Format::Log] {
        group.bench_function(format.token(), |b| {
            b.iter(|| black_box(renderer.render(black_box(&record), format)))
        });
    }

    group.bench_function("token_lookup", |b| {
        b.iter(|| black_box(record.render(black_box("json"))))
    });

    group.bench_function("multiline_full", |b| {
        let renderer = Renderer::new(RenderConfig::multiline());
        b.iter(|| black_box(renderer.render(&record, Format::Full)))
    });

    group.finish();
}

pub fn bench_fingerprint(c: &mut Criterion) {
    let record = sample_record();
    let mut group = c.benchmark_group("render/fingerprint");

    group.bench_function("default", |b| b.iter(|| black_box(record.fingerprint())));
    group.bench_function("with_context_keys", |b| {
        b.iter(|| {
            black_box(
                record
                    .fingerprint_config()
                    .include_context_keys(&["host", "attempt"])
                    .compute(),
            )
        })
    });

    group.finish();
}

criterion_group! {
    name = render_benches;
    config = configure_criterion();
    targets = bench_render_views, bench_fingerprint
}
