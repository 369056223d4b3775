//! Process-wide generator
//!
//! A single [`StdGen`] shared by the whole process behind an [`AtomicGen`].
//! It is seeded from [`StdGen::from_entropy`] the first time any function in
//! this module runs and lives until the process exits. All access goes
//! through the atomic adapter, so concurrent use is race free.

use std::sync::OnceLock;

use log::debug;

use crate::atomic::AtomicGen;
use crate::random_gen::RandomGen;
use crate::std_gen::StdGen;
use crate::uniform::{Uniform, UniformRange};

static THE_STD_GEN: OnceLock<AtomicGen<StdGen>> = OnceLock::new();

fn the_std_gen() -> &'static AtomicGen<StdGen> {
    THE_STD_GEN.get_or_init(|| {
        let gen = StdGen::from_entropy();
        debug!("global generator initialised to {}", gen);
        AtomicGen::new(gen)
    })
}

/// Current state of the global generator.
pub fn get_std_gen() -> StdGen {
    the_std_gen().get()
}

/// Replaces the global generator, e.g. to make a run reproducible.
pub fn set_std_gen(gen: StdGen) {
    debug!("global generator set to {}", gen);
    the_std_gen().set(gen);
}

/// Splits the global generator, keeping the first half and returning the
/// second.
pub fn new_std_gen() -> StdGen {
    the_std_gen().modify(|gen| {
        let (kept, returned) = gen.split();
        (returned, kept)
    })
}

/// Applies a pure function to the global generator atomically.
pub fn get_std_random<T, F>(f: F) -> T
where
    F: FnMut(&StdGen) -> (T, StdGen),
{
    the_std_gen().modify(f)
}

/// Samples `[lo, hi]` from the global generator.
pub fn uniform_r_io<T: UniformRange + Clone>(lo: T, hi: T) -> T {
    the_std_gen().uniform_r(lo, hi)
}

/// Samples the whole of `T` from the global generator.
pub fn uniform_io<T: Uniform>() -> T {
    the_std_gen().uniform()
}

/// `n` uniform bytes from the global generator.
pub fn uniform_bytes_io(n: usize) -> Vec<u8> {
    the_std_gen().uniform_bytes(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    // The global generator is shared by every test in this binary, so these
    // only check properties that hold whatever else runs concurrently.

    #[test]
    fn test_values_in_range() {
        for _ in 0..100 {
            let x: i64 = uniform_r_io(-3, 3);
            assert!((-3..=3).contains(&x));
        }
        assert_eq!(uniform_bytes_io(13).len(), 13);
        let _: u32 = uniform_io();
    }

    #[test]
    fn test_new_std_gen_differs_from_state() {
        let split = new_std_gen();
        assert_ne!(split, get_std_gen());
    }

    #[test]
    fn test_get_std_random() {
        let x = get_std_random(|gen| crate::uniform_r(1u8, 6u8, *gen));
        assert!((1..=6).contains(&x));
    }
}
