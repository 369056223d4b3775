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

//! The generator capability
//!
//! A generator is an immutable value. Every draw returns the value together
//! with the successor generator, so the same state always yields the same
//! answer. Only [`RandomGen::next`] and [`RandomGen::split`] are required; the
//! bulk draws are derived from `next` and may be overridden by generators
//! that can produce them more cheaply.

use crate::bytes;
use crate::uniform::bitmask::bitmask_with_rejection;
use crate::uniform::ival::random_ival_integer;

/// Pure, splittable source of pseudo random integers.
pub trait RandomGen: Sized + Clone {
    /// Returns an integer in the closed interval given by
    /// [`gen_range`](RandomGen::gen_range) and the next generator.
    fn next(&self) -> (i64, Self);

    /// The closed interval `(lo, hi)` of values `next` produces, with
    /// `lo < hi`.
    ///
    /// Implementations must not inspect the generator's state; the interval
    /// is a property of the type. Defaults to the whole of `i64`.
    fn gen_range(&self) -> (i64, i64) {
        (i64::MIN, i64::MAX)
    }

    /// Splits the generator into two distinct generators.
    fn split(&self) -> (Self, Self);

    /// Uniform `u8`, the low byte of a [`gen_word32`](RandomGen::gen_word32)
    fn gen_word8(&self) -> (u8, Self) {
        let (word, gen) = self.gen_word32();
        (word as u8, gen)
    }

    /// Uniform `u16`, the low half of a [`gen_word32`](RandomGen::gen_word32)
    fn gen_word16(&self) -> (u16, Self) {
        let (word, gen) = self.gen_word32();
        (word as u16, gen)
    }

    /// Uniform `u32` scaled out of successive `next` draws.
    fn gen_word32(&self) -> (u32, Self) {
        let mut gen = self.clone();
        let range = gen.gen_range();
        let word = random_ival_integer(0i128, u32::MAX as i128, range, || {
            let (x, next) = gen.next();
            gen = next;
            x
        });
        (word as u32, gen)
    }

    /// Uniform `u64` built from two `gen_word32` draws, low half first.
    fn gen_word64(&self) -> (u64, Self) {
        let (lo, gen) = self.gen_word32();
        let (hi, gen) = gen.gen_word32();
        (((hi as u64) << 32) | lo as u64, gen)
    }

    /// Uniform `u32` in `[0, max]`.
    fn gen_word32_r(&self, max: u32) -> (u32, Self) {
        let mut gen = self.clone();
        let word = bitmask_with_rejection(max, || {
            let (w, next) = gen.gen_word32();
            gen = next;
            w
        });
        (word, gen)
    }

    /// Uniform `u64` in `[0, max]`.
    fn gen_word64_r(&self, max: u64) -> (u64, Self) {
        let mut gen = self.clone();
        let word = bitmask_with_rejection(max, || {
            let (w, next) = gen.gen_word64();
            gen = next;
            w
        });
        (word, gen)
    }

    /// `n` uniform bytes packed from little-endian `gen_word64` draws.
    fn gen_bytes(&self, n: usize) -> (Vec<u8>, Self) {
        let mut gen = self.clone();
        let buf = bytes::uniform_bytes(n, || {
            let (w, next) = gen.gen_word64();
            gen = next;
            w
        });
        (buf, gen)
    }
}

/// Generators that can be rebuilt from a fixed-size seed.
///
/// `from_seed` is total: every seed maps to a valid generator, and
/// `from_seed(g.to_seed())` reproduces `g`.
pub trait SeedGen: RandomGen {
    /// Serialisable representation of the generator state.
    type Seed;

    /// Builds a generator from a seed.
    fn from_seed(seed: Self::Seed) -> Self;

    /// Captures the generator state as a seed.
    fn to_seed(&self) -> Self::Seed;
}
