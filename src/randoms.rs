//! Endless streams of uniform values

use std::marker::PhantomData;

use crate::random_gen::RandomGen;
use crate::stateful::StateGen;
use crate::uniform::{Uniform, UniformRange};

/// Iterator of [`Uniform`] values drawn from a pure generator.
#[derive(Clone, Debug)]
pub struct Randoms<T, G> {
    state: StateGen<G>,
    _item: PhantomData<fn() -> T>,
}

/// Iterator of values sampled from `[lo, hi]`.
#[derive(Clone, Debug)]
pub struct RandomsR<T, G> {
    state: StateGen<G>,
    lo: T,
    hi: T,
}

/// Infinite stream of `uniform` values starting from `gen`.
pub fn randoms<T: Uniform, G: RandomGen>(gen: G) -> Randoms<T, G> {
    Randoms {
        state: StateGen::new(gen),
        _item: PhantomData,
    }
}

/// Infinite stream of values in `[lo, hi]` starting from `gen`.
pub fn randoms_r<T: UniformRange + Clone, G: RandomGen>(lo: T, hi: T, gen: G) -> RandomsR<T, G> {
    RandomsR {
        state: StateGen::new(gen),
        lo,
        hi,
    }
}

impl<T, G: RandomGen> Randoms<T, G> {
    /// The generator the next item will be drawn from.
    pub fn generator(&self) -> &G {
        self.state.get()
    }
}

impl<T, G: RandomGen> RandomsR<T, G> {
    /// The generator the next item will be drawn from.
    pub fn generator(&self) -> &G {
        self.state.get()
    }
}

impl<T: Uniform, G: RandomGen> Iterator for Randoms<T, G> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        Some(T::uniform(&mut self.state))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<T: UniformRange + Clone, G: RandomGen> Iterator for RandomsR<T, G> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        Some(T::uniform_r(self.lo.clone(), self.hi.clone(), &mut self.state))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
