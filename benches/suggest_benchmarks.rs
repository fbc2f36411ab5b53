//! Benchmarks for dictionary construction and correction queries.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use keyspell::prelude::*;

/// Deterministic synthetic dictionary: every two-syllable and a slice of
/// the three-syllable combinations, ~4k words.
fn synthetic_words() -> Vec<String> {
    const SYLLABLES: &[&str] = &[
        "ba", "be", "bo", "ca", "ce", "co", "da", "de", "do", "fa", "fe", "fo", "ga", "ge", "go",
        "la", "le", "lo", "ma", "me", "mo", "na", "ne", "no", "ra", "re", "ro", "sa", "se", "so",
        "ta", "te", "to", "va", "ve", "vo",
    ];

    let mut words = Vec::new();
    for a in SYLLABLES {
        for b in SYLLABLES {
            words.push(format!("{a}{b}"));
        }
    }
    for a in SYLLABLES.iter().take(8) {
        for b in SYLLABLES.iter().take(20) {
            for c in SYLLABLES.iter().take(20) {
                words.push(format!("{a}{b}{c}"));
            }
        }
    }
    words
}

fn bench_trie_construction(c: &mut Criterion) {
    let words = synthetic_words();
    c.bench_function("trie/from_terms", |b| {
        b.iter(|| Trie::from_terms(black_box(&words)))
    });
}

fn bench_suggest(c: &mut Criterion) {
    let engine = SpellEngine::new(Trie::from_terms(synthetic_words()));

    c.bench_function("suggest/exact", |b| {
        b.iter(|| engine.suggest(black_box("tatema")))
    });
    c.bench_function("suggest/swap", |b| {
        b.iter(|| engine.suggest(black_box("attema")))
    });
    c.bench_function("suggest/replace", |b| {
        b.iter(|| engine.suggest(black_box("tarema")))
    });
    c.bench_function("suggest/garbage", |b| {
        b.iter(|| engine.suggest(black_box("zzqqxx")))
    });
}

criterion_group!(benches, bench_trie_construction, bench_suggest);
criterion_main!(benches);
