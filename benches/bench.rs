//! Criterion benchmarks for synonym document parsing and graph queries.

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use synonym_graph::analysis::synonym::{SynonymParser, TermGraph};

/// Generate a synonym document with alternating equivalence groups and mappings.
fn generate_test_document(num_lines: usize) -> String {
    let mut lines = Vec::with_capacity(num_lines + num_lines / 10);
    for i in 0..num_lines {
        if i % 10 == 0 {
            lines.push(format!("# group {}", i / 10));
        }
        if i % 2 == 0 {
            lines.push(format!(
                "term_{i}, synonym_a_{i}, synonym_b_{i}, synonym_c_{i}"
            ));
        } else {
            lines.push(format!(
                "term_{i}, alias_{i} => canonical_{i}, variant_a_{i}, variant_b_{i}"
            ));
        }
    }
    lines.join("\n")
}

fn create_test_graph(num_lines: usize) -> TermGraph {
    SynonymParser::default()
        .parse(&generate_test_document(num_lines))
        .unwrap()
}

/// Benchmark document parsing.
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("synonym_parse");
    let parser = SynonymParser::default();

    for size in [100, 1000, 10000] {
        let document = generate_test_document(size);
        group.throughput(Throughput::Bytes(document.len() as u64));
        group.bench_function(format!("parse_{size}_lines"), |b| {
            b.iter(|| {
                let graph = parser.parse(black_box(&document)).unwrap();
                black_box(graph)
            })
        });
    }

    group.finish();
}

/// Benchmark graph queries.
fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("synonym_queries");
    let graph = create_test_graph(10000);

    group.bench_function("equivalents_cycle", |b| {
        b.iter(|| {
            let result = graph.equivalents(black_box("term_5000"));
            black_box(result)
        })
    });

    group.bench_function("replacements_chain", |b| {
        b.iter(|| {
            let result = graph.replacements(black_box("alias_5001"));
            black_box(result)
        })
    });

    group.bench_function("lookup_missing", |b| {
        b.iter(|| {
            let result = graph.replacements(black_box("missing_term"));
            black_box(result)
        })
    });

    // Benchmark batch lookups
    group.throughput(Throughput::Elements(100));
    group.bench_function("batch_expand_100", |b| {
        b.iter(|| {
            for i in 0..100 {
                let term = format!("term_{}", i);
                let result = graph.expand(black_box(&term));
                black_box(result);
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_queries);

criterion_main!(benches);
