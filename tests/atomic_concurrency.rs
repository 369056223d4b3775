use std::thread;

use lecuyer::{randoms, randoms_r, AtomicGen, LockedGen, StdGen};

mod common;
use common::CountingGen;

const THREADS: usize = 8;
const PER_THREAD: usize = 2_000;

#[test]
fn test_concurrent_draws_are_linearisable() {
    let _ = env_logger::try_init();

    let start = StdGen::new(99);
    let shared = AtomicGen::new(start);

    let mut results: Vec<u64> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                s.spawn(|| {
                    (0..PER_THREAD)
                        .map(|_| shared.uniform::<u64>())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect()
    });

    // every call is the same transition, so any interleaving walks the same chain
    let mut chain = randoms::<u64, _>(start);
    let mut expected: Vec<u64> = chain.by_ref().take(THREADS * PER_THREAD).collect();

    results.sort_unstable();
    expected.sort_unstable();
    assert_eq!(results, expected);
    assert_eq!(&shared.get(), chain.generator());
}

#[test]
fn test_concurrent_ranged_draws() {
    let start = StdGen::new(5);
    let shared = AtomicGen::new(start);

    let mut results: Vec<i32> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                s.spawn(|| {
                    (0..PER_THREAD)
                        .map(|_| shared.uniform_r(-50i32, 50i32))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect()
    });

    let mut chain = randoms_r(-50i32, 50i32, start);
    let mut expected: Vec<i32> = chain.by_ref().take(THREADS * PER_THREAD).collect();

    results.sort_unstable();
    expected.sort_unstable();
    assert_eq!(results, expected);
    assert_eq!(&shared.get(), chain.generator());
}

#[test]
fn test_concurrent_splits_yield_distinct_generators() {
    let shared = AtomicGen::new(StdGen::new(1));
    let children: Vec<StdGen> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| s.spawn(|| shared.split().get()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let mut unique = children.clone();
    unique.sort_by_key(|g| (g.s1(), g.s2()));
    unique.dedup();
    assert_eq!(unique.len(), THREADS);
}

#[test]
fn test_locked_draws_are_linearisable() {
    let _ = env_logger::try_init();

    // CountingGen is wider than one word, so it goes behind a mutex
    let start = CountingGen::new(99);
    let shared = LockedGen::new(start);

    let mut results: Vec<u64> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                s.spawn(|| {
                    (0..PER_THREAD)
                        .map(|_| shared.uniform::<u64>())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect()
    });

    let mut chain = randoms::<u64, _>(start);
    let mut expected: Vec<u64> = chain.by_ref().take(THREADS * PER_THREAD).collect();

    results.sort_unstable();
    expected.sort_unstable();
    assert_eq!(results, expected);

    let end = shared.get();
    assert_eq!(&end, chain.generator());
    // two raw draws per word32, two word32 per word64
    assert_eq!(end.draws, (THREADS * PER_THREAD * 4) as u64);
}

#[test]
fn test_locked_concurrent_splits_yield_distinct_generators() {
    let shared = LockedGen::new(CountingGen::new(1));
    let children: Vec<StdGen> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| s.spawn(|| shared.split().get().inner))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let mut unique = children.clone();
    unique.sort_by_key(|g| (g.s1(), g.s2()));
    unique.dedup();
    assert_eq!(unique.len(), THREADS);
}
