//! Build and query throughput benchmarks on a synthetic corpus.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dualrank::{Bm25, Document, IndexBuilder, QueryEngine, TfIdf};

const VOCAB: &[&str] = &[
    "scam", "ring", "raid", "victim", "online", "gambling", "border", "police", "arrest",
    "network", "fraud", "operation", "repatriate", "syndicate", "transfer", "account",
];

/// Deterministic synthetic corpus: token choice cycles through the
/// vocabulary with a varying stride so term frequencies differ per document.
fn synthetic_corpus(num_docs: u32, doc_len: usize) -> Vec<Document> {
    (0..num_docs)
        .map(|id| {
            let stride = (id as usize % 7) + 1;
            let tokens: Vec<String> = (0..doc_len)
                .map(|i| VOCAB[(id as usize + i * stride) % VOCAB.len()].to_string())
                .collect();
            Document::new(id, format!("doc {id}"), tokens)
        })
        .collect()
}

fn benchmark_index_build(c: &mut Criterion) {
    let corpus = synthetic_corpus(1_000, 120);
    let builder = IndexBuilder::new();

    c.bench_function("index_build_1k_docs", |b| {
        b.iter(|| builder.build(black_box(&corpus)).unwrap());
    });
}

fn benchmark_bm25_search(c: &mut Criterion) {
    let corpus = synthetic_corpus(1_000, 120);
    let index = IndexBuilder::new().build(&corpus).unwrap();
    let engine = QueryEngine::new(&index);
    let query: Vec<String> = ["scam", "ring", "border"]
        .iter()
        .map(|w| w.to_string())
        .collect();

    c.bench_function("bm25_search_1k_docs", |b| {
        b.iter(|| engine.search(black_box(&query), 10, &Bm25::new()));
    });
}

fn benchmark_tfidf_search(c: &mut Criterion) {
    let corpus = synthetic_corpus(1_000, 120);
    let index = IndexBuilder::new().build(&corpus).unwrap();
    let engine = QueryEngine::new(&index);
    let query: Vec<String> = ["scam", "ring", "border"]
        .iter()
        .map(|w| w.to_string())
        .collect();

    c.bench_function("tfidf_search_1k_docs", |b| {
        b.iter(|| engine.search(black_box(&query), 10, &TfIdf));
    });
}

criterion_group!(
    benches,
    benchmark_index_build,
    benchmark_bm25_search,
    benchmark_tfidf_search
);
criterion_main!(benches);
