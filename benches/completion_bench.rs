use criterion::*;
use prefix_rank_core::{FrequencyTable, Trie};

/// Deterministic synthetic corpus: every two-syllable combination,
/// repeated a varying number of times so frequencies differ.
fn synthetic_corpus() -> Vec<String> {
    const SYLLABLES: [&str; 8] = ["ba", "co", "di", "fu", "ge", "lo", "mi", "ta"];

    let mut corpus = Vec::new();
    for (i, first) in SYLLABLES.iter().enumerate() {
        for (j, second) in SYLLABLES.iter().enumerate() {
            let word = format!("{}{}", first, second);
            for _ in 0..=(i + j) % 4 {
                corpus.push(word.clone());
            }
        }
    }
    corpus
}

fn build_trie(corpus: &[String]) -> Trie {
    let table = FrequencyTable::from_words(corpus);
    let mut trie = Trie::new();
    for entry in table.entries() {
        trie.insert(&entry.word, entry.frequency).unwrap();
    }
    trie
}

fn cr_bench_build(c: &mut Criterion) {
    let corpus = synthetic_corpus();
    c.bench_function("trie_build", |b| b.iter(|| build_trie(black_box(&corpus))));
}

fn cr_bench_enumerate(c: &mut Criterion) {
    let corpus = synthetic_corpus();
    let trie = build_trie(&corpus);

    c.bench_function("sub_trie_words", |b| {
        b.iter(|| {
            let view = trie.sub_trie(black_box("ba")).unwrap();
            let words = view.words();
            let total: u32 = words.iter().map(|w| view.frequency_of(w)).sum();
            (words, total)
        })
    });
}

criterion_group!(benches, cr_bench_build, cr_bench_enumerate);
criterion_main!(benches);
