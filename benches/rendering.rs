//! Benchmarks for rendering whole example pages.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use solidex::catalog::{self, Variant};
use solidex::highlight::default_highlighter;
use solidex::render::render_example;

fn bench_render_example(c: &mut Criterion) {
    let example = catalog::builtin().find_example("o", Variant::Good).unwrap();
    let highlighter = default_highlighter();
    c.bench_function("render_example", |b| {
        b.iter(|| render_example(highlighter, black_box(example)).unwrap())
    });
}

criterion_group!(benches, bench_render_example);
criterion_main!(benches);
