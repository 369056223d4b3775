// Copyright 2025 Tyler Neely (tylerneely@gmail.com).
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.
//
// See http://creativecommons.org/licenses/MIT/ for more information.

//! L'Ecuyer's combined linear congruential generator
//!
//! Two multiplicative LCGs with moduli 2147483563 and 2147483399 are run side
//! by side and their difference is the output. The period is roughly
//! 2.3 * 10^18. Both recurrences use Schrage's decomposition so every
//! intermediate fits in an `i32`.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use log::trace;
use serde::{Deserialize, Serialize};

use crate::atomic::AtomicState;
use crate::random_gen::{RandomGen, SeedGen};

const S1_MODULUS: i32 = 2147483563;
const S2_MODULUS: i32 = 2147483399;

/// Largest legal value of the first component.
pub const S1_MAX: i32 = S1_MODULUS - 1;

/// Largest legal value of the second component.
pub const S2_MAX: i32 = S2_MODULUS - 1;

/// Number of leading characters folded into a seed when a string is not a
/// serialised state.
const FOLD_CHARS: usize = 6;

/// Combined-LCG generator state.
///
/// Invariant: `s1` is in `[1, S1_MAX]` and `s2` is in `[1, S2_MAX]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct StdGen {
    s1: i32,
    s2: i32,
}

impl StdGen {
    /// Creates a generator from a 32-bit seed.
    ///
    /// The sign bit is discarded, so `n` and `n | i32::MIN` give the same
    /// generator.
    pub fn new(seed: i32) -> Self {
        let s = seed & i32::MAX;
        let q = s / S1_MAX;
        let s1 = s % S1_MAX;
        let s2 = q % S2_MAX;
        Self {
            s1: s1 + 1,
            s2: s2 + 1,
        }
    }

    /// Creates a generator seeded from the wall clock and the process id.
    ///
    /// Not reproducible. Use [`StdGen::new`] when the sequence must be
    /// repeatable.
    pub fn from_entropy() -> Self {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        let seed = (now.as_secs() as i64)
            .wrapping_mul(12345)
            .wrapping_add(now.subsec_nanos() as i64)
            .wrapping_add(std::process::id() as i64);
        Self::new(seed as i32)
    }

    /// Builds a generator from explicit components, or `None` when either is
    /// out of range.
    pub fn from_parts(s1: i32, s2: i32) -> Option<Self> {
        if (1..=S1_MAX).contains(&s1) && (1..=S2_MAX).contains(&s2) {
            Some(Self { s1, s2 })
        } else {
            None
        }
    }

    /// Builds a generator from two arbitrary words, folding each into its
    /// legal range. Words that are already in range are kept as is.
    pub fn from_words(w1: u32, w2: u32) -> Self {
        Self {
            s1: fold_word(w1, S1_MAX),
            s2: fold_word(w2, S2_MAX),
        }
    }

    /// First LCG component.
    pub fn s1(&self) -> i32 {
        self.s1
    }

    /// Second LCG component.
    pub fn s2(&self) -> i32 {
        self.s2
    }

    /// Parses a generator from the front of `input`, returning the unconsumed
    /// remainder.
    ///
    /// Two whitespace separated decimal components in range are read as a
    /// state. Anything else is hashed: the first six characters are folded
    /// into a seed, so this never fails.
    pub fn parse_prefix(input: &str) -> (Self, &str) {
        if let Some(parsed) = read_state(input) {
            return parsed;
        }

        let (seed, rest) = fold_seed(input);
        (Self::new(seed as i32), rest)
    }
}

impl RandomGen for StdGen {
    fn next(&self) -> (i64, Self) {
        let k = self.s1 / 53668;
        let mut s1 = 40014 * (self.s1 - k * 53668) - k * 12211;
        if s1 < 0 {
            s1 += S1_MODULUS;
        }

        let k = self.s2 / 52774;
        let mut s2 = 40692 * (self.s2 - k * 52774) - k * 3791;
        if s2 < 0 {
            s2 += S2_MODULUS;
        }

        let mut z = s1 - s2;
        if z < 1 {
            z += S1_MAX;
        }

        (z as i64, Self { s1, s2 })
    }

    fn gen_range(&self) -> (i64, i64) {
        (1, S1_MAX as i64)
    }

    // There is no statistical foundation for this split. It is kept exactly
    // so that split trees stay reproducible.
    fn split(&self) -> (Self, Self) {
        let new_s1 = if self.s1 == S1_MAX { 1 } else { self.s1 + 1 };
        let new_s2 = if self.s2 == 1 { S2_MAX } else { self.s2 - 1 };
        let (_, stepped) = self.next();

        let left = Self {
            s1: new_s1,
            s2: stepped.s2,
        };
        let right = Self {
            s1: stepped.s1,
            s2: new_s2,
        };
        trace!("split {} -> ({}, {})", self, left, right);
        (left, right)
    }
}

impl SeedGen for StdGen {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        let w1 = u32::from_le_bytes([seed[0], seed[1], seed[2], seed[3]]);
        let w2 = u32::from_le_bytes([seed[4], seed[5], seed[6], seed[7]]);
        Self::from_words(w1, w2)
    }

    fn to_seed(&self) -> Self::Seed {
        let mut seed = [0u8; 8];
        seed[..4].copy_from_slice(&(self.s1 as u32).to_le_bytes());
        seed[4..].copy_from_slice(&(self.s2 as u32).to_le_bytes());
        seed
    }
}

impl AtomicState for StdGen {
    fn pack(&self) -> u64 {
        ((self.s1 as u32 as u64) << 32) | self.s2 as u32 as u64
    }

    fn unpack(bits: u64) -> Self {
        Self::from_words((bits >> 32) as u32, bits as u32)
    }
}

impl fmt::Display for StdGen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.s1, self.s2)
    }
}

impl FromStr for StdGen {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse_prefix(s).0)
    }
}

impl From<(i32, i32)> for StdGen {
    fn from((s1, s2): (i32, i32)) -> Self {
        Self::from_words(s1 as u32, s2 as u32)
    }
}

impl From<StdGen> for (i32, i32) {
    fn from(gen: StdGen) -> Self {
        (gen.s1, gen.s2)
    }
}

fn fold_word(word: u32, max: i32) -> i32 {
    let max = max as u32;
    if (1..=max).contains(&word) {
        word as i32
    } else {
        (word % max + 1) as i32
    }
}

fn read_state(input: &str) -> Option<(StdGen, &str)> {
    let (s1, rest) = read_decimal(input.trim_start())?;
    let (s2, rest) = read_decimal(rest.trim_start())?;
    StdGen::from_parts(s1, s2).map(|gen| (gen, rest))
}

fn read_decimal(input: &str) -> Option<(i32, &str)> {
    let end = input
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(input.len());
    if end == 0 {
        return None;
    }
    let value = input[..end].parse().ok()?;
    Some((value, &input[end..]))
}

/// Folds the leading characters of `input` as `acc = c + 3 * acc`, starting
/// from 1.
fn fold_seed(input: &str) -> (i64, &str) {
    let split_at = input
        .char_indices()
        .nth(FOLD_CHARS)
        .map_or(input.len(), |(idx, _)| idx);
    let (head, rest) = input.split_at(split_at);
    let seed = head
        .chars()
        .fold(1i64, |acc, c| (c as i64).wrapping_add(acc.wrapping_mul(3)));
    (seed, rest)
}
