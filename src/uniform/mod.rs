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

//! Uniform sampling over ranges of integers, floats, chars and booleans
//!
//! Every algorithm here is written against [`StatefulGen`], so the same code
//! serves the pure [`StateGen`](crate::StateGen) adapter as well as the
//! shared [`AtomicGen`](crate::AtomicGen) and [`IoGen`](crate::IoGen).

pub mod bitmask;
pub mod float;
pub mod ival;

use crate::stateful::StatefulGen;

use bitmask::{bitmask_with_rejection, signed_range, unsigned_range};
use float::{float_range, unit_f32, unit_f64};

/// Types that can be sampled uniformly from a closed interval.
pub trait UniformRange: Sized {
    /// Samples uniformly from `[lo, hi]`.
    ///
    /// The endpoints may come in either order. When they are equal the
    /// endpoint is returned without consuming any randomness.
    fn uniform_r<G: StatefulGen + ?Sized>(lo: Self, hi: Self, gen: &mut G) -> Self;
}

/// Types that can be sampled uniformly without a range.
///
/// Integers, `bool` and `char` cover every value of the type. Floats are
/// sampled from `[0, 1)`.
pub trait Uniform: Sized {
    /// Samples a value.
    fn uniform<G: StatefulGen + ?Sized>(gen: &mut G) -> Self;
}

macro_rules! impl_narrow_unsigned {
    ($($ty:ty => $draw:ident),* $(,)?) => {$(
        impl UniformRange for $ty {
            fn uniform_r<G: StatefulGen + ?Sized>(lo: Self, hi: Self, gen: &mut G) -> Self {
                unsigned_range(lo, hi, |range| bitmask_with_rejection(range, || gen.$draw()))
            }
        }

        impl Uniform for $ty {
            fn uniform<G: StatefulGen + ?Sized>(gen: &mut G) -> Self {
                gen.$draw()
            }
        }
    )*};
}

impl_narrow_unsigned!(u8 => uniform_word8, u16 => uniform_word16);

impl UniformRange for u32 {
    fn uniform_r<G: StatefulGen + ?Sized>(lo: Self, hi: Self, gen: &mut G) -> Self {
        unsigned_range(lo, hi, |range| gen.uniform_word32_r(range))
    }
}

impl Uniform for u32 {
    fn uniform<G: StatefulGen + ?Sized>(gen: &mut G) -> Self {
        gen.uniform_word32()
    }
}

impl UniformRange for u64 {
    fn uniform_r<G: StatefulGen + ?Sized>(lo: Self, hi: Self, gen: &mut G) -> Self {
        unsigned_range(lo, hi, |range| gen.uniform_word64_r(range))
    }
}

impl Uniform for u64 {
    fn uniform<G: StatefulGen + ?Sized>(gen: &mut G) -> Self {
        gen.uniform_word64()
    }
}

/// Low word first.
fn uniform_word128<G: StatefulGen + ?Sized>(gen: &mut G) -> u128 {
    let lo = gen.uniform_word64() as u128;
    let hi = gen.uniform_word64() as u128;
    (hi << 64) | lo
}

impl UniformRange for u128 {
    fn uniform_r<G: StatefulGen + ?Sized>(lo: Self, hi: Self, gen: &mut G) -> Self {
        unsigned_range(lo, hi, |range| {
            bitmask_with_rejection(range, || uniform_word128(gen))
        })
    }
}

impl Uniform for u128 {
    fn uniform<G: StatefulGen + ?Sized>(gen: &mut G) -> Self {
        uniform_word128(gen)
    }
}

macro_rules! impl_signed {
    ($($ty:ty => $unsigned:ty),* $(,)?) => {$(
        impl UniformRange for $ty {
            fn uniform_r<G: StatefulGen + ?Sized>(lo: Self, hi: Self, gen: &mut G) -> Self {
                signed_range::<$ty, $unsigned, _>(lo, hi, |range| {
                    <$unsigned>::uniform_r(0, range, gen)
                })
            }
        }

        impl Uniform for $ty {
            fn uniform<G: StatefulGen + ?Sized>(gen: &mut G) -> Self {
                <$unsigned>::uniform(gen) as $ty
            }
        }
    )*};
}

impl_signed!(i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128);

// Pointer-sized integers go through their 64-bit counterparts so that output
// does not depend on the target's pointer width.
macro_rules! impl_pointer_sized {
    ($($ty:ty => $wide:ty),* $(,)?) => {$(
        impl UniformRange for $ty {
            fn uniform_r<G: StatefulGen + ?Sized>(lo: Self, hi: Self, gen: &mut G) -> Self {
                <$wide>::uniform_r(lo as $wide, hi as $wide, gen) as $ty
            }
        }

        impl Uniform for $ty {
            fn uniform<G: StatefulGen + ?Sized>(gen: &mut G) -> Self {
                <$wide>::uniform(gen) as $ty
            }
        }
    )*};
}

impl_pointer_sized!(usize => u64, isize => i64);

impl UniformRange for bool {
    fn uniform_r<G: StatefulGen + ?Sized>(lo: Self, hi: Self, gen: &mut G) -> Self {
        if lo == hi {
            lo
        } else {
            bool::uniform(gen)
        }
    }
}

impl Uniform for bool {
    fn uniform<G: StatefulGen + ?Sized>(gen: &mut G) -> Self {
        gen.uniform_word8() & 1 != 0
    }
}

const SURROGATE_START: u32 = 0xD800;
const SURROGATE_LEN: u32 = 0x800;

// Scalar values with the surrogate gap squeezed out, so the codes are dense.
fn char_to_code(c: char) -> u32 {
    let c = c as u32;
    if c < SURROGATE_START {
        c
    } else {
        c - SURROGATE_LEN
    }
}

fn code_to_char(code: u32) -> char {
    let scalar = if code < SURROGATE_START {
        code
    } else {
        code + SURROGATE_LEN
    };
    char::from_u32(scalar).unwrap_or(char::REPLACEMENT_CHARACTER)
}

impl UniformRange for char {
    fn uniform_r<G: StatefulGen + ?Sized>(lo: Self, hi: Self, gen: &mut G) -> Self {
        code_to_char(u32::uniform_r(char_to_code(lo), char_to_code(hi), gen))
    }
}

impl Uniform for char {
    fn uniform<G: StatefulGen + ?Sized>(gen: &mut G) -> Self {
        char::uniform_r('\0', char::MAX, gen)
    }
}

impl UniformRange for f64 {
    fn uniform_r<G: StatefulGen + ?Sized>(lo: Self, hi: Self, gen: &mut G) -> Self {
        float_range(lo, hi, || unit_f64(gen.uniform_word64()))
    }
}

impl Uniform for f64 {
    fn uniform<G: StatefulGen + ?Sized>(gen: &mut G) -> Self {
        unit_f64(gen.uniform_word64())
    }
}

impl UniformRange for f32 {
    fn uniform_r<G: StatefulGen + ?Sized>(lo: Self, hi: Self, gen: &mut G) -> Self {
        float_range(lo, hi, || unit_f32(gen.uniform_word32()))
    }
}

impl Uniform for f32 {
    fn uniform<G: StatefulGen + ?Sized>(gen: &mut G) -> Self {
        unit_f32(gen.uniform_word32())
    }
}

#[cfg(feature = "bigint")]
impl UniformRange for num_bigint::BigInt {
    /// Arbitrary precision ranges are scaled out of 32-bit words with
    /// [`ival::random_ival_integer`].
    fn uniform_r<G: StatefulGen + ?Sized>(lo: Self, hi: Self, gen: &mut G) -> Self {
        if lo == hi {
            return lo;
        }
        ival::random_ival_integer(lo, hi, (0, u32::MAX as i64), || {
            gen.uniform_word32() as i64
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RandomGen, StateGen, StdGen};

    fn state(seed: i32) -> StateGen<StdGen> {
        StateGen::new(StdGen::new(seed))
    }

    #[test]
    fn test_u32_golden() {
        let mut gen = state(1);
        let xs: Vec<u32> = (0..8).map(|_| u32::uniform_r(0, 9, &mut gen)).collect();
        assert_eq!(xs, vec![9, 0, 7, 5, 2, 8, 5, 6]);
    }

    #[test]
    fn test_u64_golden() {
        let mut gen = state(1);
        let xs: Vec<u64> = (0..8).map(|_| u64::uniform_r(0, 9, &mut gen)).collect();
        assert_eq!(xs, vec![0, 7, 2, 5, 6, 3, 0, 9]);
    }

    #[test]
    fn test_i32_golden() {
        let mut gen = state(1);
        let xs: Vec<i32> = (0..8).map(|_| i32::uniform_r(-5, 5, &mut gen)).collect();
        assert_eq!(xs, vec![4, -5, 2, 0, -3, 3, 0, 1]);
    }

    #[test]
    fn test_degenerate_leaves_state_untouched() {
        let mut gen = state(77);
        let before = *gen.get();
        assert_eq!(u64::uniform_r(5, 5, &mut gen), 5);
        assert_eq!(i8::uniform_r(-1, -1, &mut gen), -1);
        assert_eq!(f64::uniform_r(0.25, 0.25, &mut gen), 0.25);
        assert!(bool::uniform_r(true, true, &mut gen));
        assert_eq!(char::uniform_r('x', 'x', &mut gen), 'x');
        assert_eq!(*gen.get(), before);
    }

    #[test]
    fn test_full_width_ranges() {
        let mut gen = state(3);
        for _ in 0..100 {
            let _ = u64::uniform_r(0, u64::MAX, &mut gen);
            let _ = i64::uniform_r(i64::MIN, i64::MAX, &mut gen);
            let _ = u128::uniform_r(0, u128::MAX, &mut gen);
            let x = i128::uniform_r(i128::MIN, -1, &mut gen);
            assert!(x < 0);
        }
    }

    #[test]
    fn test_pointer_sized_match_wide() {
        let (a, _) = crate::uniform_r(10usize, 1000usize, StdGen::new(9));
        let (b, _) = crate::uniform_r(10u64, 1000u64, StdGen::new(9));
        assert_eq!(a as u64, b);
        let (c, _) = crate::uniform_r(-10isize, 10isize, StdGen::new(9));
        let (d, _) = crate::uniform_r(-10i64, 10i64, StdGen::new(9));
        assert_eq!(c as i64, d);
    }

    #[test]
    fn test_char_skips_surrogates() {
        let mut gen = state(11);
        for _ in 0..2000 {
            let c = char::uniform_r('\u{D000}', '\u{E800}', &mut gen);
            let code = c as u32;
            assert!((0xD000..0xD800).contains(&code) || (0xE000..=0xE800).contains(&code));
        }
        assert_eq!(code_to_char(char_to_code('\u{E000}')), '\u{E000}');
        assert_eq!(char_to_code('\u{E000}'), SURROGATE_START);
    }

    #[test]
    fn test_bool_takes_both_values() {
        let mut gen = state(5);
        let trues = (0..1000).filter(|_| bool::uniform(&mut gen)).count();
        assert!(trues > 400 && trues < 600, "got {} trues", trues);
    }

    #[test]
    fn test_f64_matches_word_draw() {
        let (word, _) = StdGen::new(1).gen_word64();
        let mut gen = state(1);
        let x = f64::uniform(&mut gen);
        assert_eq!(x, float::unit_f64(word));
        assert_eq!(x, 0.14434521639921227);
    }

    #[cfg(feature = "bigint")]
    #[test]
    fn test_bigint_range() {
        use num_bigint::BigInt;

        let lo: BigInt = BigInt::from(-1) << 200;
        let hi: BigInt = BigInt::from(1) << 200;
        let mut gen = state(21);
        for _ in 0..50 {
            let x = BigInt::uniform_r(hi.clone(), lo.clone(), &mut gen);
            assert!(x >= lo && x <= hi);
        }
        assert_eq!(BigInt::uniform_r(hi.clone(), hi.clone(), &mut gen), hi);
    }
}
