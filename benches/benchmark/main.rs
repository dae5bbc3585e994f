use criterion::criterion_main;

mod builder;
mod common;
mod render;

criterion_main!(builder::builder_benches, render::render_benches);
