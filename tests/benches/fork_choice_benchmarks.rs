//! # Fork Choice Benchmarks
//!
//! | Path | Target |
//! |------|--------|
//! | Heavier candidate | < 10µs |
//! | Equal-work coin flip | < 10µs |
//! | Ancestry check | < 10µs |

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hc_fork_choice::{
    ChainConfig, ForkChoice, ForkChoiceApi, InMemoryChainReader, SeededRandomSource,
};
use shared_types::{Block, BlockHeader, DifficultyTuple, HierarchyLevel};
use std::sync::Arc;

fn header(number: u64, coinbase: u8) -> BlockHeader {
    BlockHeader {
        number: [1, 10, number],
        coinbase: [coinbase; 20],
        extra_data: vec![coinbase],
        ..BlockHeader::default()
    }
}

fn bench_reorg_needed(c: &mut Criterion) {
    let mut group = c.benchmark_group("hc-fork-choice");

    let chain = Arc::new(InMemoryChainReader::new(ChainConfig::default()));
    let current = header(100, 1);
    let heavier = header(101, 2);
    let tied = header(100, 3);
    chain.insert_block(
        Block::new(current.clone()),
        DifficultyTuple::from_u64(10, 100, 1_000),
    );
    chain.set_calc_td(heavier.hash(), Ok(DifficultyTuple::from_u64(10, 100, 1_010)));
    chain.set_calc_td(tied.hash(), Ok(DifficultyTuple::from_u64(10, 100, 1_000)));
    chain.set_difficulty_order(tied.hash(), Ok(HierarchyLevel::Zone));

    let fc = ForkChoice::with_random_source(
        chain,
        None,
        Box::new(SeededRandomSource::from_seed(1)),
    );

    group.bench_function("reorg_needed_heavier", |b| {
        b.iter(|| black_box(fc.reorg_needed(Some(&current), Some(&heavier))))
    });

    group.bench_function("reorg_needed_coin_flip", |b| {
        b.iter(|| black_box(fc.reorg_needed(Some(&current), Some(&tied))))
    });

    group.bench_function("untwist_and_trim", |b| {
        b.iter(|| black_box(fc.untwist_and_trim(&tied)))
    });

    group.finish();
}

criterion_group!(benches, bench_reorg_needed);
criterion_main!(benches);
