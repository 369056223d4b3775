//! Mutex-guarded shared generator
//!
//! For generators whose state does not fit the single word [`AtomicGen`]
//! needs. Every operation runs the pure sampling code while holding the lock
//! and stores the successor before releasing it, so concurrent callers see
//! the same linear history as with the atomic adapter.
//!
//! [`AtomicGen`]: crate::AtomicGen

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::random_gen::RandomGen;
use crate::stateful::{StateGen, StatefulGen};
use crate::uniform::{Uniform, UniformRange};

/// A generator shared between threads behind a `Mutex`.
#[derive(Debug)]
pub struct LockedGen<G> {
    state: Mutex<G>,
}

impl<G: RandomGen> LockedGen<G> {
    /// Wraps a generator.
    pub fn new(gen: G) -> Self {
        Self {
            state: Mutex::new(gen),
        }
    }

    // The state is only ever replaced whole after a pure step returns, so a
    // poisoned lock still holds a valid generator.
    fn lock(&self) -> MutexGuard<'_, G> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of the current generator.
    pub fn get(&self) -> G {
        self.lock().clone()
    }

    /// Replaces the generator.
    pub fn set(&self, gen: G) {
        *self.lock() = gen;
    }

    /// Applies a pure transition under the lock and returns its output.
    ///
    /// `f` must not use this `LockedGen`; doing so deadlocks.
    pub fn modify<T, F>(&self, f: F) -> T
    where
        F: FnOnce(&G) -> (T, G),
    {
        let mut guard = self.lock();
        let (value, next) = f(&*guard);
        *guard = next;
        value
    }

    /// Runs a whole sampling routine as one step.
    pub fn apply<T, F>(&self, f: F) -> T
    where
        F: FnOnce(&mut StateGen<G>) -> T,
    {
        self.modify(|gen| StateGen::run(gen.clone(), f))
    }

    /// Samples `[lo, hi]`.
    pub fn uniform_r<T: UniformRange>(&self, lo: T, hi: T) -> T {
        self.apply(|state| T::uniform_r(lo, hi, state))
    }

    /// Samples the whole of `T`.
    pub fn uniform<T: Uniform>(&self) -> T {
        self.apply(|state| T::uniform(state))
    }

    /// `n` uniform bytes.
    pub fn uniform_bytes(&self, n: usize) -> Vec<u8> {
        self.apply(|state| state.uniform_bytes(n))
    }

    /// Keeps the second half of a split and returns the first in a new
    /// `LockedGen`.
    pub fn split(&self) -> Self {
        Self::new(self.modify(|gen| gen.split()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StdGen;

    #[test]
    fn test_matches_pure_sequence() {
        let shared = LockedGen::new(StdGen::new(21));
        let mut pure = StateGen::new(StdGen::new(21));
        for _ in 0..50 {
            assert_eq!(shared.uniform::<u32>(), pure.uniform_word32());
            assert_eq!(shared.uniform_r(0u8, 5), pure.uniform_r(0u8, 5));
            assert_eq!(shared.uniform_bytes(3), pure.uniform_bytes(3));
        }
        assert_eq!(&shared.get(), pure.get());
    }

    #[test]
    fn test_split() {
        let (first, second) = StdGen::new(6).split();
        let shared = LockedGen::new(StdGen::new(6));
        assert_eq!(shared.split().get(), first);
        assert_eq!(shared.get(), second);
    }

    #[test]
    fn test_survives_poisoning() {
        let shared = LockedGen::new(StdGen::new(8));
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            shared.modify(|_| -> (u32, StdGen) { panic!("sampling failed") })
        }));
        assert!(result.is_err());
        assert_eq!(shared.get(), StdGen::new(8));
    }
}
