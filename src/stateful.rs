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

//! Sampling-side view of a generator and the pure threading adapter

use crate::bytes;
use crate::random_gen::RandomGen;
use crate::uniform::bitmask::bitmask_with_rejection;
use crate::uniform::{Uniform, UniformRange};

/// A generator as seen by the sampling algorithms: something that hands out
/// uniform words and advances itself.
///
/// Only `uniform_word32` and `uniform_word64` are required.
pub trait StatefulGen {
    /// Uniform `u32`.
    fn uniform_word32(&mut self) -> u32;

    /// Uniform `u64`.
    fn uniform_word64(&mut self) -> u64;

    /// Uniform `u8`.
    fn uniform_word8(&mut self) -> u8 {
        self.uniform_word32() as u8
    }

    /// Uniform `u16`.
    fn uniform_word16(&mut self) -> u16 {
        self.uniform_word32() as u16
    }

    /// Uniform `u32` in `[0, max]`.
    fn uniform_word32_r(&mut self, max: u32) -> u32 {
        bitmask_with_rejection(max, || self.uniform_word32())
    }

    /// Uniform `u64` in `[0, max]`.
    fn uniform_word64_r(&mut self, max: u64) -> u64 {
        bitmask_with_rejection(max, || self.uniform_word64())
    }

    /// `n` uniform bytes, see [`bytes::uniform_bytes`].
    fn uniform_bytes(&mut self, n: usize) -> Vec<u8> {
        bytes::uniform_bytes(n, || self.uniform_word64())
    }
}

/// Pure adapter: owns a generator value and replaces it with its successor
/// after every draw.
///
/// There is no shared state, so a `StateGen` is the plain single-owner way to
/// run the sampling algorithms over a [`RandomGen`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateGen<G> {
    gen: G,
}

impl<G: RandomGen> StateGen<G> {
    /// Wraps a generator.
    pub fn new(gen: G) -> Self {
        Self { gen }
    }

    /// Runs `f` over `gen`, returning its result and the final generator.
    pub fn run<T, F>(gen: G, f: F) -> (T, G)
    where
        F: FnOnce(&mut StateGen<G>) -> T,
    {
        let mut state = Self::new(gen);
        let value = f(&mut state);
        (value, state.gen)
    }

    /// The current generator.
    pub fn get(&self) -> &G {
        &self.gen
    }

    /// Unwraps the current generator.
    pub fn into_inner(self) -> G {
        self.gen
    }

    /// Splits the held generator, keeping the second half and returning the
    /// first.
    pub fn split_gen(&mut self) -> G {
        let (first, second) = self.gen.split();
        self.gen = second;
        first
    }

    /// Samples `[lo, hi]`.
    pub fn uniform_r<T: UniformRange>(&mut self, lo: T, hi: T) -> T {
        T::uniform_r(lo, hi, self)
    }

    /// Samples the whole of `T`.
    pub fn uniform<T: Uniform>(&mut self) -> T {
        T::uniform(self)
    }

    fn step<T>(&mut self, f: impl FnOnce(&G) -> (T, G)) -> T {
        let (value, next) = f(&self.gen);
        self.gen = next;
        value
    }
}

// Every draw is forwarded to the generator's own bulk operations so that
// overrides in a `RandomGen` implementation take effect.
impl<G: RandomGen> StatefulGen for StateGen<G> {
    fn uniform_word32(&mut self) -> u32 {
        self.step(G::gen_word32)
    }

    fn uniform_word64(&mut self) -> u64 {
        self.step(G::gen_word64)
    }

    fn uniform_word8(&mut self) -> u8 {
        self.step(G::gen_word8)
    }

    fn uniform_word16(&mut self) -> u16 {
        self.step(G::gen_word16)
    }

    fn uniform_word32_r(&mut self, max: u32) -> u32 {
        self.step(|gen| gen.gen_word32_r(max))
    }

    fn uniform_word64_r(&mut self, max: u64) -> u64 {
        self.step(|gen| gen.gen_word64_r(max))
    }

    fn uniform_bytes(&mut self, n: usize) -> Vec<u8> {
        self.step(|gen| gen.gen_bytes(n))
    }
}
