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

//! Lock-free shared generator
//!
//! The generator state lives packed in a single `AtomicU64`. An operation
//! snapshots the state, runs the pure sampling code on the snapshot and
//! publishes the successor with a compare-and-swap. If another caller got in
//! first the work is redone on the fresh state, so every call corresponds to
//! exactly one transition in a single linear history and no two callers ever
//! advance from the same state.

use std::fmt;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};

use log::trace;

use crate::random_gen::RandomGen;
use crate::stateful::{StateGen, StatefulGen};
use crate::uniform::{Uniform, UniformRange};

/// Generators whose whole state fits in 64 bits.
pub trait AtomicState: Sized {
    /// Encodes the state.
    fn pack(&self) -> u64;

    /// Decodes a state produced by [`pack`](AtomicState::pack).
    fn unpack(bits: u64) -> Self;
}

/// A generator shared between threads by reference.
pub struct AtomicGen<G> {
    state: AtomicU64,
    _gen: PhantomData<fn() -> G>,
}

impl<G: RandomGen + AtomicState> AtomicGen<G> {
    /// Wraps a generator.
    pub fn new(gen: G) -> Self {
        Self {
            state: AtomicU64::new(gen.pack()),
            _gen: PhantomData,
        }
    }

    /// Snapshot of the current generator.
    pub fn get(&self) -> G {
        G::unpack(self.state.load(Ordering::Acquire))
    }

    /// Replaces the generator.
    pub fn set(&self, gen: G) {
        self.state.store(gen.pack(), Ordering::Release);
    }

    /// Applies a pure transition atomically and returns its output.
    ///
    /// `f` may run more than once under contention, always on the state that
    /// is current at that moment; only the run whose successor is published
    /// counts.
    pub fn modify<T, F>(&self, mut f: F) -> T
    where
        F: FnMut(&G) -> (T, G),
    {
        let mut current = self.state.load(Ordering::Acquire);
        loop {
            let (value, next) = f(&G::unpack(current));
            match self.state.compare_exchange_weak(
                current,
                next.pack(),
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return value,
                Err(actual) => {
                    trace!("atomic generator contended, retrying");
                    current = actual;
                }
            }
        }
    }

    /// Runs a whole sampling routine as one atomic step.
    pub fn apply<T, F>(&self, mut f: F) -> T
    where
        F: FnMut(&mut StateGen<G>) -> T,
    {
        self.modify(|gen| StateGen::run(gen.clone(), &mut f))
    }

    /// Samples `[lo, hi]`.
    pub fn uniform_r<T: UniformRange + Clone>(&self, lo: T, hi: T) -> T {
        self.apply(|state| T::uniform_r(lo.clone(), hi.clone(), state))
    }

    /// Samples the whole of `T`.
    pub fn uniform<T: Uniform>(&self) -> T {
        self.apply(|state| T::uniform(state))
    }

    /// `n` uniform bytes.
    pub fn uniform_bytes(&self, n: usize) -> Vec<u8> {
        self.apply(|state| state.uniform_bytes(n))
    }

    /// Splits the shared generator: the held state becomes the second half of
    /// a pure split and the first half is returned as a new `AtomicGen`.
    pub fn split(&self) -> Self {
        let first = self.modify(|gen| gen.split());
        Self::new(first)
    }
}

impl<G: RandomGen + AtomicState + fmt::Debug> fmt::Debug for AtomicGen<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AtomicGen").field(&self.get()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StdGen;

    #[test]
    fn test_matches_pure_sequence() {
        let shared = AtomicGen::new(StdGen::new(12));
        let mut pure = StateGen::new(StdGen::new(12));
        for _ in 0..100 {
            assert_eq!(shared.uniform::<u64>(), pure.uniform_word64());
            assert_eq!(shared.uniform_r(-7i32, 7), pure.uniform_r(-7i32, 7));
            assert_eq!(shared.uniform_bytes(5), pure.uniform_bytes(5));
        }
        assert_eq!(&shared.get(), pure.get());
    }

    #[test]
    fn test_split() {
        let gen = StdGen::new(33);
        let (first, second) = gen.split();
        let shared = AtomicGen::new(gen);
        let child = shared.split();
        assert_eq!(child.get(), first);
        assert_eq!(shared.get(), second);
    }

    #[test]
    fn test_set_and_get() {
        let shared = AtomicGen::new(StdGen::new(1));
        shared.set(StdGen::new(2));
        assert_eq!(shared.get(), StdGen::new(2));
    }

    #[test]
    fn test_modify_returns_value() {
        let shared = AtomicGen::new(StdGen::new(1));
        let x = shared.modify(|gen| gen.next());
        assert_eq!(x, 39336);
    }
}
