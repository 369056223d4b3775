//! Wide integer scaling
//!
//! Used when the requested range is not a power-of-two slice of the
//! generator's native output: raw draws are accumulated as digits in base
//! `genHi - genLo + 1` until the accumulator spans at least a thousand times
//! the target range, then reduced modulo the range. The residual bias is
//! therefore below 0.1%.

use num_traits::{FromPrimitive, Num};

/// How many times the target range the accumulator must cover.
const BIAS_FACTOR: i64 = 1000;

/// Samples `[lo, hi]` from raw draws of a source whose outputs lie in the
/// closed interval `gen_range`.
///
/// `T` is the accumulator type and must hold `1000 * (hi - lo + 1) * base`
/// without overflowing; `i128` covers every 64-bit target.
///
/// The generator base is computed in `T`, so a full-width
/// `(i64::MIN, i64::MAX)` source works with an `i128` or wider accumulator.
///
/// # Panics
///
/// Panics if `T` cannot represent the endpoints of `gen_range` or the bias
/// factor.
pub fn random_ival_integer<T, F>(lo: T, hi: T, gen_range: (i64, i64), mut draw: F) -> T
where
    T: Num + PartialOrd + FromPrimitive + Clone,
    F: FnMut() -> i64,
{
    let (lo, hi) = if lo > hi { (hi, lo) } else { (lo, hi) };
    let (gen_lo, gen_hi) = gen_range;

    let gen_lo = from_i64::<T>(gen_lo);
    let base = from_i64::<T>(gen_hi) - gen_lo.clone() + T::one();
    let k = hi - lo.clone() + T::one();
    let target = k.clone() * from_i64::<T>(BIAS_FACTOR);

    // target >= 1000, so at least one draw is always taken
    let mut magnitude = T::one();
    let mut acc = T::zero();
    while magnitude < target {
        let x = draw();
        acc = acc * base.clone() + (from_i64::<T>(x) - gen_lo.clone());
        magnitude = magnitude * base.clone();
    }

    lo + acc % k
}

fn from_i64<T: FromPrimitive>(value: i64) -> T {
    T::from_i64(value).expect("accumulator type too narrow for the generator range")
}
