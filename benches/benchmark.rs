use chain_trie::{BTreeNode, FnvHashNode, HashNode, Trie, TrieNode};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use radix_trie::Trie as RadixTrie;

const WORDS: usize = 20_000;

// deterministic pseudo words over a small alphabet so prefixes are shared
fn words() -> Vec<String> {
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };
    (0..WORDS)
        .map(|_| {
            let len = 3 + (next() % 10) as usize;
            (0..len)
                .map(|_| (b'a' + (next() % 8) as u8) as char)
                .collect()
        })
        .collect()
}

fn build_chain_trie<N>(words: &[String]) -> Trie<char, usize, N>
where
    N: TrieNode<Key = char, Value = usize>,
{
    let mut trie = Trie::new();
    for (index, word) in words.iter().enumerate() {
        trie.insert(word.chars(), index);
    }
    trie
}

fn build_radix_trie(words: &[String]) -> RadixTrie<String, usize> {
    let mut trie = RadixTrie::new();
    for (index, word) in words.iter().enumerate() {
        trie.insert(word.clone(), index);
    }
    trie
}

fn insert_b(c: &mut Criterion) {
    let words = words();
    c.bench_function("insert_hash_node", |b| {
        b.iter(|| build_chain_trie::<HashNode<char, usize>>(black_box(&words)))
    });
    c.bench_function("insert_fnv_hash_node", |b| {
        b.iter(|| build_chain_trie::<FnvHashNode<char, usize>>(black_box(&words)))
    });
    c.bench_function("insert_btree_node", |b| {
        b.iter(|| build_chain_trie::<BTreeNode<char, usize>>(black_box(&words)))
    });
    c.bench_function("insert_radix_trie", |b| {
        b.iter(|| build_radix_trie(black_box(&words)))
    });
}

fn best_value_b(c: &mut Criterion) {
    let words = words();
    let queries: Vec<String> = words.iter().map(|w| format!("{}zz", w)).collect();

    let hash = build_chain_trie::<HashNode<char, usize>>(&words);
    c.bench_function("best_value_hash_node", |b| {
        b.iter(|| {
            for query in &queries {
                black_box(hash.get_best_value(query.chars()));
            }
        })
    });

    let fnv = build_chain_trie::<FnvHashNode<char, usize>>(&words);
    c.bench_function("best_value_fnv_hash_node", |b| {
        b.iter(|| {
            for query in &queries {
                black_box(fnv.get_best_value(query.chars()));
            }
        })
    });

    let btree = build_chain_trie::<BTreeNode<char, usize>>(&words);
    c.bench_function("best_value_btree_node", |b| {
        b.iter(|| {
            for query in &queries {
                black_box(btree.get_best_value(query.chars()));
            }
        })
    });

    let radix = build_radix_trie(&words);
    c.bench_function("best_value_radix_trie", |b| {
        b.iter(|| {
            for query in &queries {
                black_box(radix.get_ancestor_value(query));
            }
        })
    });
}

fn count_b(c: &mut Criterion) {
    let words = words();
    c.bench_function("count_hash_node", |b| {
        b.iter_batched(
            || build_chain_trie::<HashNode<char, usize>>(&words),
            |trie| black_box(trie.count()),
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, insert_b, best_value_b, count_b);
criterion_main!(benches);
