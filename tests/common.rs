#![allow(dead_code)]

use lecuyer::{RandomGen, StdGen};

/// Seeds used by the property style tests.
pub const SEEDS: [i32; 8] = [0, 1, 2, 42, 12345, -1, i32::MAX, i32::MIN];

/// StdGen wrapper that counts how many raw `next` draws have been taken.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountingGen {
    pub inner: StdGen,
    pub draws: u64,
}

impl CountingGen {
    pub fn new(seed: i32) -> Self {
        Self {
            inner: StdGen::new(seed),
            draws: 0,
        }
    }
}

impl RandomGen for CountingGen {
    fn next(&self) -> (i64, Self) {
        let (x, inner) = self.inner.next();
        (
            x,
            Self {
                inner,
                draws: self.draws + 1,
            },
        )
    }

    fn gen_range(&self) -> (i64, i64) {
        self.inner.gen_range()
    }

    fn split(&self) -> (Self, Self) {
        let (left, right) = self.inner.split();
        (
            Self {
                inner: left,
                draws: 0,
            },
            Self {
                inner: right,
                draws: 0,
            },
        )
    }
}

/// Pearson's chi-square statistic against a flat expectation.
pub fn chi_square(counts: &[u64]) -> f64 {
    let total: u64 = counts.iter().sum();
    let expected = total as f64 / counts.len() as f64;
    counts
        .iter()
        .map(|&c| {
            let d = c as f64 - expected;
            d * d / expected
        })
        .sum()
}

/// Draws `n` values with a pure sampling function, threading the generator.
pub fn sample_n<T, G: RandomGen>(n: usize, gen: G, mut f: impl FnMut(G) -> (T, G)) -> (Vec<T>, G) {
    let mut gen = gen;
    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        let (x, next) = f(gen);
        out.push(x);
        gen = next;
    }
    (out, gen)
}
