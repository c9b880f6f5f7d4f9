//! Performance benchmarks for the optimal breaker
//!
//! Run with: cargo bench --bench breaker_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use sembreak_core::{optimal_breaks, PieceSequence, SemanticBreaker};
use std::hint::black_box;

/// Generate a clause-heavy sentence with roughly `pieces` pieces.
fn generate_sentence(pieces: usize) -> String {
    let clause = "a clause of middling width here";
    let mut parts = Vec::with_capacity(pieces);
    for _ in 0..pieces {
        parts.push(clause);
    }
    parts.join(", ")
}

/// The cubic search at growing piece counts.
fn bench_piece_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("piece_counts");

    for count in [4, 16, 64, 128] {
        let sentence = generate_sentence(count);
        let pieces = PieceSequence::tokenize(&sentence);

        group.bench_with_input(BenchmarkId::new("optimal_breaks", count), &pieces, |b, p| {
            b.iter(|| optimal_breaks(black_box(p), 72));
        });
    }

    group.finish();
}

/// Whole-pipeline reflow over a paragraph of text.
fn bench_reflow(c: &mut Criterion) {
    let paragraph = format!(
        "{}. {}. {}.",
        generate_sentence(8),
        generate_sentence(12),
        generate_sentence(6)
    );
    let breaker = SemanticBreaker::new();

    c.bench_function("reflow_paragraph", |b| {
        b.iter(|| breaker.reflow(black_box(&paragraph)));
    });
}

criterion_group!(benches, bench_piece_counts, bench_reflow);
criterion_main!(benches);
