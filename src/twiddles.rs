use std::f64::consts::PI;

use num_complex::Complex;

use crate::cache::FftFloat;
use crate::planner::Direction;

/// Twiddle factors for one radix-4 level of length `n`.
///
/// Each of `t1`, `t2`, `t3` holds `n / 4` unit-magnitude rotations for the 1st, 2nd and
/// 3rd harmonic of the base angle `θ = sign * 2π / n`:
///
/// `t_h[k] = cos(h * k * θ) + i * sin(h * k * θ)`
///
/// Angles are evaluated in `f64` and then narrowed to `T`, so `f32` tables carry no more
/// error than a single rounding. Index 0 of every harmonic is exactly `1 + 0i`.
#[derive(Debug, Clone, PartialEq)]
pub struct TwiddleSet<T> {
    t1: Vec<Complex<T>>,
    t2: Vec<Complex<T>>,
    t3: Vec<Complex<T>>,
    direction: Direction,
}

impl<T: FftFloat> TwiddleSet<T> {
    /// Compute the twiddle set for a level of length `n` (a power of two, at least 4)
    pub fn new(n: usize, direction: Direction) -> Self {
        debug_assert!(n >= 4 && n.is_power_of_two());
        let quarter = n >> 2;
        let theta = direction.sign() * 2.0 * PI / n as f64;

        let mut t1 = Vec::with_capacity(quarter);
        let mut t2 = Vec::with_capacity(quarter);
        let mut t3 = Vec::with_capacity(quarter);

        for k in 0..quarter {
            let phi = k as f64 * theta;
            t1.push(unit(phi));
            t2.push(unit(phi * 2.0));
            t3.push(unit(phi * 3.0));
        }

        Self {
            t1,
            t2,
            t3,
            direction,
        }
    }
}

impl<T> TwiddleSet<T> {
    /// The number of factors per harmonic, i.e. a quarter of the level length
    #[inline]
    pub fn len(&self) -> usize {
        self.t1.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.t1.is_empty()
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Rotations by `k * θ`
    #[inline]
    pub fn t1(&self) -> &[Complex<T>] {
        &self.t1
    }

    /// Rotations by `2 * k * θ`
    #[inline]
    pub fn t2(&self) -> &[Complex<T>] {
        &self.t2
    }

    /// Rotations by `3 * k * θ`
    #[inline]
    pub fn t3(&self) -> &[Complex<T>] {
        &self.t3
    }
}

#[inline]
fn unit<T: FftFloat>(phi: f64) -> Complex<T> {
    let (sin, cos) = phi.sin_cos();
    Complex::new(T::from_f64(cos), T::from_f64(sin))
}
