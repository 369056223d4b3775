//! Single-threaded shared generator
//!
//! The non-atomic counterpart of [`AtomicGen`](crate::AtomicGen): the state
//! sits in a `RefCell`, so several owners on one thread can draw from the same
//! generator through a shared reference. Works for generators of any size.

use std::cell::RefCell;

use crate::random_gen::RandomGen;
use crate::stateful::{StateGen, StatefulGen};
use crate::uniform::{Uniform, UniformRange};

/// Generator in a `RefCell`.
#[derive(Debug)]
pub struct IoGen<G> {
    cell: RefCell<G>,
}

impl<G: RandomGen> IoGen<G> {
    /// Wraps a generator.
    pub fn new(gen: G) -> Self {
        Self {
            cell: RefCell::new(gen),
        }
    }

    /// Copy of the current generator.
    pub fn get(&self) -> G {
        self.cell.borrow().clone()
    }

    /// Replaces the generator.
    pub fn set(&self, gen: G) {
        *self.cell.borrow_mut() = gen;
    }

    /// Applies a pure transition and stores the successor.
    ///
    /// Like [`apply`](IoGen::apply), `f` sees a copy and may use this `IoGen`.
    pub fn modify<T, F>(&self, f: F) -> T
    where
        F: FnOnce(&G) -> (T, G),
    {
        let gen = self.get();
        let (value, next) = f(&gen);
        self.set(next);
        value
    }

    /// Runs a sampling routine on the held generator.
    ///
    /// The routine works on a copy, so it may freely touch this `IoGen`
    /// itself; its own updates are overwritten when it returns.
    pub fn apply<T, F>(&self, f: F) -> T
    where
        F: FnOnce(&mut StateGen<G>) -> T,
    {
        let (value, next) = StateGen::run(self.get(), f);
        self.set(next);
        value
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
    /// `IoGen`.
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
        let shared = IoGen::new(StdGen::new(40));
        let (expected, end) = StateGen::run(StdGen::new(40), |s| {
            (0..20).map(|_| s.uniform_r(0u16, 999)).collect::<Vec<_>>()
        });
        let got: Vec<u16> = (0..20).map(|_| shared.uniform_r(0u16, 999)).collect();
        assert_eq!(got, expected);
        assert_eq!(shared.get(), end);
    }

    #[test]
    fn test_shared_between_owners() {
        let shared = IoGen::new(StdGen::new(2));
        let a = &shared;
        let b = &shared;
        let x: u32 = a.uniform();
        let y: u32 = b.uniform();
        let (ex, g) = crate::uniform::<u32, _>(StdGen::new(2));
        let (ey, _) = crate::uniform::<u32, _>(g);
        assert_eq!((x, y), (ex, ey));
    }

    #[test]
    fn test_split() {
        let (first, second) = StdGen::new(3).split();
        let shared = IoGen::new(StdGen::new(3));
        assert_eq!(shared.split().get(), first);
        assert_eq!(shared.get(), second);
    }

    #[test]
    fn test_modify_may_reenter() {
        let shared = IoGen::new(StdGen::new(14));
        let x = shared.modify(|gen| {
            // the nested draw is overwritten when the outer step stores
            let _: u32 = shared.uniform();
            gen.next()
        });
        let (expected, next) = StdGen::new(14).next();
        assert_eq!(x, expected);
        assert_eq!(shared.get(), next);
    }
}
