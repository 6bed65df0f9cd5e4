//! Builds large clue indexes and suspect tables and walks them in order.

#![allow(missing_docs)]

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use detective_quest::{ClueIndex, SuspectTable};

/// Clue texts in a scrambled but deterministic order.
fn clues(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("pista {:05}", (i * 7919) % count))
        .collect()
}

fn index_clues(c: &mut Criterion) {
    let texts = clues(5_000);
    c.bench_function("index 5000 clues", |b| {
        b.iter(|| {
            let mut index = ClueIndex::new();
            index.extend(texts.iter().map(String::as_str));
            index
        });
    });

    let mut index = ClueIndex::new();
    index.extend(texts.iter().map(String::as_str));
    c.bench_function("walk 5000 clues", |b| b.iter(|| index.iter().count()));
}

fn associate_suspects(c: &mut Criterion) {
    let texts = clues(2_000);
    c.bench_function("associate 2000 clues with 50 suspects", |b| {
        b.iter_batched(
            SuspectTable::new,
            |mut table| {
                for (i, clue) in texts.iter().enumerate() {
                    table.associate(clue, &format!("suspeito {}", i % 50));
                }
                table
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, index_clues, associate_suspects);
criterion_main!(benches);
