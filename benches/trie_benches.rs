use criterion::{criterion_group, criterion_main, Criterion};
use fuzzy_trie::Trie;

const WORDS: &[&str] = &[
    "apple", "apply", "apple", "ape", "apt", "banana", "band", "bandana", "bandit", "cat", "car",
    "cart", "carton", "dog", "dodge", "dote", "dove",
];

fn make_trie() -> Trie<usize> {
    let mut trie = Trie::new();
    for (i, w) in WORDS.iter().enumerate() {
        trie.store(w, i);
    }
    trie
}

fn trie_store(c: &mut Criterion) {
    c.bench_function("trie store", |b| b.iter(make_trie));
}

fn trie_find(c: &mut Criterion) {
    let trie = make_trie();
    c.bench_function("trie find", |b| {
        b.iter(|| WORDS.iter().map(|w| trie.find(w)).count())
    });
}

fn trie_similar(c: &mut Criterion) {
    let trie = make_trie();
    c.bench_function("trie similar budget 2", |b| {
        b.iter(|| trie.similar("bandara", 2))
    });
}

criterion_group!(benches, trie_store, trie_find, trie_similar);
criterion_main!(benches);
