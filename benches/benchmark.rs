//! Benchmarks for graph_poet

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use graph_poet::*;

/// Sample corpus for benchmarking
const SAMPLE_CORPUS: &str = r#"
This is a test of the Mugar Omni Theater sound system. The quick brown
fox jumps over the lazy dog while the sound system plays. A test of the
system is only a test, and the theater sound is a system of sound. The
fox and the dog test the sound of the theater system together.
"#;

fn benchmark_tokenization(c: &mut Criterion) {
    let tokenizer = Tokenizer::new();

    c.bench_function("tokenize_sample", |b| {
        b.iter(|| tokenizer.tokenize(black_box(SAMPLE_CORPUS)))
    });

    let mut group = c.benchmark_group("tokenize_by_size");
    for size in [1, 5, 10, 20].iter() {
        let text = SAMPLE_CORPUS.repeat(*size);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| tokenizer.tokenize(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_graph_building(c: &mut Criterion) {
    let tokens = Tokenizer::new().tokenize(SAMPLE_CORPUS);

    c.bench_function("graph_build", |b| {
        b.iter(|| CorpusGraphBuilder::from_tokens(black_box(tokens.clone())))
    });

    let mut group = c.benchmark_group("graph_build_by_size");
    for size in [1, 10, 50].iter() {
        let tokens = Tokenizer::new().tokenize(&SAMPLE_CORPUS.repeat(*size));
        group.throughput(Throughput::Elements(tokens.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &tokens, |b, tokens| {
            b.iter(|| CorpusGraphBuilder::from_tokens(black_box(tokens.clone())))
        });
    }
    group.finish();
}

fn benchmark_poem_generation(c: &mut Criterion) {
    let poet = GraphPoet::from_text(&SAMPLE_CORPUS.repeat(20));
    let input = "Test the system of the theater and the fox";

    c.bench_function("poem", |b| b.iter(|| poet.poem(black_box(input))));

    c.bench_function("bridges", |b| b.iter(|| poet.bridges(black_box(input))));
}

criterion_group!(
    benches,
    benchmark_tokenization,
    benchmark_graph_building,
    benchmark_poem_generation
);
criterion_main!(benches);
