//! Common FFT Kernels
//!
//! Limited range complex arithmetic and the two point butterfly.
//!
//! The standard complex operators have to guard against `(inf, nan)` style corner cases.
//! The functions here skip those branches, in the same way GCC's `-fcx-limited-range` does,
//! and therefore return garbage for non-finite inputs. Every sample handed to a transform
//! must be finite.
use num_complex::Complex;
use num_traits::Float;

use crate::planner::Direction;

/// Limited range (fast) multiplication of complex numbers.
///
/// `(a + bi)(c + di) = (ac - bd) + (ad + bc)i`
///
/// Assumes finite inputs.
#[inline(always)]
pub fn fast_complex_multiply<T: Float>(z: Complex<T>, w: Complex<T>) -> Complex<T> {
    let a = z.re;
    let b = z.im;
    let c = w.re;
    let d = w.im;
    let ac = a * c;
    let bd = b * d;
    let ad = a * d;
    let bc = b * c;
    Complex::new(ac - bd, ad + bc)
}

/// Limited range (fast) division of complex numbers.
///
/// `(a + bi) / (c + di) = ((ac + bd) + (bc - ad)i) / (c² + d²)`
///
/// Assumes finite inputs and a non-zero divisor. No rescaling is done, so divisors close
/// to the square root of the smallest or largest representable value lose precision.
#[inline]
pub fn fast_complex_divide<T: Float>(z: Complex<T>, w: Complex<T>) -> Complex<T> {
    let a = z.re;
    let b = z.im;
    let c = w.re;
    let d = w.im;
    let denom = c * c + d * d;
    Complex::new((a * c + b * d) / denom, (b * c - a * d) / denom)
}

/// Multiply by `sign * i`: `-i` for a forward transform, `+i` for an inverse one
#[inline(always)]
pub(crate) fn rotate_quarter_turn<T: Float>(z: Complex<T>, direction: Direction) -> Complex<T> {
    match direction {
        Direction::Forward => Complex::new(z.im, -z.re),
        Direction::Inverse => Complex::new(-z.im, z.re),
    }
}

/// Simple butterfly for a block of 2 samples
/// This is the same for both directions
#[inline]
pub fn fft_chunk_2<T: Float>(data: &mut [Complex<T>]) {
    let z0 = data[0];
    let z1 = data[1];
    data[0] = z0 + z1;
    data[1] = z0 - z1;
}

#[cfg(test)]
mod tests {
    use utilities::assert_complex_closeness;

    use super::*;

    #[test]
    fn multiply_matches_complex_mul() {
        let samples = [
            Complex::new(0.5, -1.25),
            Complex::new(-3.0, 2.0),
            Complex::new(0.0, 1.0),
            Complex::new(7.5, 0.0),
        ];
        for z in samples {
            for w in samples {
                assert_complex_closeness(fast_complex_multiply(z, w), z * w, 1e-12);
            }
        }
    }

    #[test]
    fn divide_inverts_multiply() {
        let z = Complex::new(1.5f64, -0.75);
        let w = Complex::new(-0.25, 2.0);
        let q = fast_complex_divide(z, w);
        assert_complex_closeness(fast_complex_multiply(q, w), z, 1e-12);
        assert_complex_closeness(q, z / w, 1e-12);

        let one = Complex::new(1.0f32, 0.0);
        assert_eq!(fast_complex_divide(Complex::new(3.0f32, 4.0), one), Complex::new(3.0, 4.0));
    }

    #[test]
    fn quarter_turns() {
        let z = Complex::new(2.0, 3.0);
        assert_eq!(
            rotate_quarter_turn(z, Direction::Forward),
            z * Complex::new(0.0, -1.0)
        );
        assert_eq!(
            rotate_quarter_turn(z, Direction::Inverse),
            z * Complex::new(0.0, 1.0)
        );
    }

    #[test]
    fn chunk_2() {
        let mut data = [Complex::new(1.0, 2.0), Complex::new(3.0, -1.0)];
        fft_chunk_2(&mut data);
        assert_eq!(data, [Complex::new(4.0, 1.0), Complex::new(-2.0, 3.0)]);
    }
}
