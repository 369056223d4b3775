//! Floating point scaling

use num_traits::Float;

const MASK53: i64 = (1 << 53) - 1;
const MASK24: i32 = (1 << 24) - 1;

/// Maps a 64-bit draw onto `[0, 1)` using its low 53 bits.
#[inline]
pub fn unit_f64(word: u64) -> f64 {
    ((word as i64) & MASK53) as f64 / (1u64 << 53) as f64
}

/// Maps a 32-bit draw onto `[0, 1)` using its low 24 bits.
#[inline]
pub fn unit_f32(word: u32) -> f32 {
    ((word as i32) & MASK24) as f32 / (1u32 << 24) as f32
}

/// Scales a unit coefficient onto `[lo, hi]`.
///
/// Computed as `2 * (lo/2 + coef * (hi/2 - lo/2))` so that ranges near the
/// limits of the type, such as `[-MAX, MAX]`, do not overflow to infinity.
#[inline]
pub fn scale<F: Float>(lo: F, hi: F, coef: F) -> F {
    let half = F::one() / (F::one() + F::one());
    let two = F::one() + F::one();
    two * (half * lo + coef * (half * hi - half * lo))
}

/// Samples `[lo, hi]` with `coef` supplying a unit draw.
///
/// Equal endpoints and infinite endpoints are answered without drawing.
pub fn float_range<F, D>(lo: F, hi: F, coef: D) -> F
where
    F: Float,
    D: FnOnce() -> F,
{
    if lo == hi {
        return lo;
    }
    if lo.is_infinite() || hi.is_infinite() {
        return lo + hi;
    }
    let (lo, hi) = if lo > hi { (hi, lo) } else { (lo, hi) };
    scale(lo, hi, coef())
}
