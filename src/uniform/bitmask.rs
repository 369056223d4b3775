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

//! Bitmask-with-rejection sampling for fixed-width integers
//!
//! A full-width draw is masked down to the smallest `2^k - 1` covering the
//! range and redrawn until it lands inside. The mask is never more than twice
//! the range, so each draw is accepted with probability above one half.

use log::trace;
use num_traits::{AsPrimitive, PrimInt, Signed, Unsigned, WrappingAdd, WrappingSub};

/// Smallest all-ones mask covering `range`.
#[inline]
pub fn mask_for<T: PrimInt + Unsigned>(range: T) -> T {
    T::max_value() >> (range | T::one()).leading_zeros() as usize
}

/// Draws a value uniformly from `[0, range]`.
pub fn bitmask_with_rejection<T, F>(range: T, mut draw: F) -> T
where
    T: PrimInt + Unsigned,
    F: FnMut() -> T,
{
    let mask = mask_for(range);
    loop {
        let x = draw() & mask;
        if x <= range {
            return x;
        }
        trace!("bitmask rejection, redrawing");
    }
}

/// Samples `[bottom, top]` for an unsigned type, where `ranged(r)` yields a
/// uniform value in `[0, r]`.
///
/// Inverted bounds are swapped. A single-point range returns `top` without
/// calling `ranged`.
pub fn unsigned_range<T, F>(bottom: T, top: T, ranged: F) -> T
where
    T: PrimInt + Unsigned,
    F: FnOnce(T) -> T,
{
    let (bottom, top) = if bottom > top {
        (top, bottom)
    } else {
        (bottom, top)
    };
    if bottom == top {
        return top;
    }
    bottom + ranged(top - bottom)
}

/// Samples `[bottom, top]` for a signed type by working in the unsigned type
/// `U` of the same width.
pub fn signed_range<S, U, F>(bottom: S, top: S, ranged: F) -> S
where
    S: PrimInt + Signed + AsPrimitive<U>,
    U: PrimInt + Unsigned + WrappingAdd + WrappingSub + AsPrimitive<S>,
    F: FnOnce(U) -> U,
{
    let (bottom, top) = if bottom > top {
        (top, bottom)
    } else {
        (bottom, top)
    };
    if bottom == top {
        return top;
    }
    let bottom_bits: U = bottom.as_();
    let top_bits: U = top.as_();
    let range = top_bits.wrapping_sub(&bottom_bits);
    bottom_bits.wrapping_add(&ranged(range)).as_()
}
