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

//! Splittable pseudo random number generation built on L'Ecuyer's combined
//! linear congruential generator.
//!
//! The crate is organised in layers:
//!
//! * [`random_gen`] defines the [`RandomGen`] capability and [`std_gen`]
//!   provides the combined-LCG [`StdGen`] realisation of it.
//! * [`uniform`] turns raw generator output into uniformly distributed
//!   integers, floats, chars and (with the `bigint` feature) big integers.
//! * [`bytes`] packs 64-bit draws into byte buffers in little-endian order.
//! * [`stateful`], [`atomic`], [`locked`] and [`io_gen`] are the adapters
//!   that let one sampling algorithm run over a threaded value, a lock-free
//!   shared cell, a mutex-guarded cell for generators wider than 64 bits, or
//!   a single-threaded shared cell.
//! * [`global`] holds the lazily seeded process-wide generator.
//!
//! ```rust
//! use lecuyer::{uniform_r, RandomGen, StdGen};
//!
//! let gen = StdGen::new(42);
//! let (die, gen) = uniform_r(1u8, 6u8, gen);
//! assert!((1..=6).contains(&die));
//!
//! let (left, right) = gen.split();
//! assert_ne!(left, right);
//! ```

#![warn(missing_docs)]

pub mod atomic;
pub mod bytes;
pub mod global;
pub mod io_gen;
pub mod locked;
pub mod random_gen;
pub mod randoms;
pub mod stateful;
pub mod std_gen;
pub mod uniform;

pub use atomic::{AtomicGen, AtomicState};
pub use global::{get_std_gen, get_std_random, new_std_gen, set_std_gen};
pub use io_gen::IoGen;
pub use locked::LockedGen;
pub use random_gen::{RandomGen, SeedGen};
pub use randoms::{randoms, randoms_r, Randoms, RandomsR};
pub use stateful::{StateGen, StatefulGen};
pub use std_gen::StdGen;
pub use uniform::{Uniform, UniformRange};

/// Samples a value uniformly from the closed interval `[lo, hi]`, returning
/// it together with the advanced generator.
///
/// The endpoints may be given in either order.
pub fn uniform_r<T: UniformRange, G: RandomGen>(lo: T, hi: T, gen: G) -> (T, G) {
    StateGen::run(gen, |state| T::uniform_r(lo, hi, state))
}

/// Samples a value uniformly over the whole of `T`.
pub fn uniform<T: Uniform, G: RandomGen>(gen: G) -> (T, G) {
    StateGen::run(gen, |state| T::uniform(state))
}

/// Generates `n` uniformly random bytes.
pub fn gen_bytes<G: RandomGen>(n: usize, gen: G) -> (Vec<u8>, G) {
    gen.gen_bytes(n)
}
