//! Benchmarks for snippet highlighting.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use solidex::catalog::{self, Variant};
use solidex::highlight::{HighlightSpec, default_highlighter};

fn bench_highlight_snippet(c: &mut Criterion) {
    let snippet = &catalog::builtin()
        .find_example("s", Variant::Bad)
        .unwrap()
        .code_snippets[0];
    let highlighter = default_highlighter();
    c.bench_function("highlight_snippet", |b| {
        b.iter(|| {
            highlighter.highlight(
                black_box(&snippet.code),
                black_box("typescript"),
                black_box(snippet.highlight.as_deref()),
            )
        })
    });
}

fn bench_parse_spec(c: &mut Criterion) {
    c.bench_function("parse_highlight_spec", |b| {
        b.iter(|| HighlightSpec::parse(black_box("2-12, 15-19, 24-36")).lines(black_box(40)))
    });
}

criterion_group!(benches, bench_highlight_snippet, bench_parse_spec);
criterion_main!(benches);
