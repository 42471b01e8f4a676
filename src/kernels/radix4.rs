//! Radix-4 Kernels
//!
//! The butterfly engine works on a block that is already in bit reversed order. It splits the
//! block into four quarters, transforms each quarter recursively, and then merges them with a
//! single radix-4 pass. A quarter of length 2 ends the recursion in a radix-2 butterfly, a
//! quarter of length 1 is its own transform. This is how lengths that are a power of two but
//! not a power of four are handled.
//!
//! Because of the bit reversal, the quarter at `N/4` holds the samples congruent to 2 modulo 4
//! and the quarter at `N/2` those congruent to 1. The quarter at `N/4` is therefore rotated by
//! the 2nd harmonic and the one at `N/2` by the 1st.
use std::sync::Arc;

use num_complex::Complex;
use num_traits::Float;

use crate::cache::FftFloat;
use crate::kernels::common::{fast_complex_multiply, fft_chunk_2, rotate_quarter_turn};
use crate::planner::Direction;
use crate::twiddles::TwiddleSet;

/// Transform a bit reversed block in place.
///
/// `levels` holds one twiddle set per radix-4 level, starting with the one for
/// `data.len()`. Blocks of 2 or fewer samples need no twiddles.
pub fn mix<T: FftFloat>(
    data: &mut [Complex<T>],
    levels: &[Arc<TwiddleSet<T>>],
    direction: Direction,
) {
    match data.len() {
        0 | 1 => {}
        2 => fft_chunk_2(data),
        n => {
            let quarter = n >> 2;
            let (twiddles, inner) = (&levels[0], &levels[1..]);
            debug_assert_eq!(twiddles.len(), quarter);

            data.chunks_exact_mut(quarter)
                .for_each(|block| mix(block, inner, direction));

            radix4_combine(data, twiddles, direction);
        }
    }
}

/// Merge four transformed quarters of `data` into the transform of the whole block
#[multiversion::multiversion(targets(
    "x86_64+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
    "x86_64+avx2+fma",
    "x86_64+sse4.2",
    "x86+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
    "x86+avx2+fma",
    "x86+sse4.2",
    "x86+sse2",
    "aarch64+neon",
))]
#[inline]
pub fn radix4_combine<T: FftFloat>(
    data: &mut [Complex<T>],
    twiddles: &TwiddleSet<T>,
    direction: Direction,
) {
    let quarter = twiddles.len();
    assert_eq!(data.len(), quarter << 2);

    let (q0, rest) = data.split_at_mut(quarter);
    let (q1, rest) = rest.split_at_mut(quarter);
    let (q2, q3) = rest.split_at_mut(quarter);

    // Index 0 twiddles are always (1+0i).
    let [y0, y1, y2, y3] = butterfly_4(q0[0], q2[0], q1[0], q3[0], direction);
    q0[0] = y0;
    q1[0] = y1;
    q2[0] = y2;
    q3[0] = y3;

    // Index 1+ must multiply twiddles.
    q0.iter_mut()
        .zip(q1.iter_mut())
        .zip(q2.iter_mut())
        .zip(q3.iter_mut())
        .zip(
            twiddles
                .t1()
                .iter()
                .zip(twiddles.t2().iter())
                .zip(twiddles.t3().iter()),
        )
        .skip(1)
        .for_each(|((((z0, z1), z2), z3), ((w1, w2), w3))| {
            let u1 = fast_complex_multiply(*z2, *w1);
            let u2 = fast_complex_multiply(*z1, *w2);
            let u3 = fast_complex_multiply(*z3, *w3);

            let [y0, y1, y2, y3] = butterfly_4(*z0, u1, u2, u3, direction);
            *z0 = y0;
            *z1 = y1;
            *z2 = y2;
            *z3 = y3;
        });
}

/// Radix-4 butterfly on already rotated inputs.
/// `u1` comes from the quarter at `N/2` and `u2` from the one at `N/4`.
#[inline(always)]
fn butterfly_4<T: Float>(
    u0: Complex<T>,
    u1: Complex<T>,
    u2: Complex<T>,
    u3: Complex<T>,
    direction: Direction,
) -> [Complex<T>; 4] {
    let b0 = u1 + u3;
    let b1 = rotate_quarter_turn(u1 - u3, direction);
    let sum = u0 + u2;
    let diff = u0 - u2;
    [sum + b0, diff + b1, sum - b0, diff - b1]
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use utilities::assert_complex_closeness;

    use super::*;
    use crate::bit_reversal::bit_rev_plain;

    fn naive_dft(input: &[Complex<f64>], direction: Direction) -> Vec<Complex<f64>> {
        let n = input.len();
        (0..n)
            .map(|k| {
                input
                    .iter()
                    .enumerate()
                    .map(|(j, z)| {
                        let phi = direction.sign() * 2.0 * PI * ((j * k) % n) as f64 / n as f64;
                        z * Complex::new(phi.cos(), phi.sin())
                    })
                    .sum::<Complex<f64>>()
            })
            .collect()
    }

    fn levels_for(n: usize, direction: Direction) -> Vec<Arc<TwiddleSet<f64>>> {
        let mut levels = Vec::new();
        let mut size = n;
        while size > 2 {
            levels.push(Arc::new(TwiddleSet::new(size, direction)));
            size >>= 2;
        }
        levels
    }

    #[test]
    fn mix_matches_naive_dft() {
        for n in 1..9 {
            let big_n = 1 << n;
            let input: Vec<_> = (0..big_n)
                .map(|i| Complex::new(i as f64 * 0.5 - 1.0, (i % 3) as f64))
                .collect();

            for direction in [Direction::Forward, Direction::Inverse] {
                let expected = naive_dft(&input, direction);

                let mut data = input.clone();
                bit_rev_plain(&mut data);
                mix(&mut data, &levels_for(big_n, direction), direction);

                for (actual, expected) in data.iter().zip(expected.iter()) {
                    assert_complex_closeness(*actual, *expected, 1e-9);
                }
            }
        }
    }

    #[test]
    fn combine_4() {
        // x = [1, 2, 3, 4] in bit reversed order is [1, 3, 2, 4]
        let mut data = [
            Complex::new(1.0, 0.0),
            Complex::new(3.0, 0.0),
            Complex::new(2.0, 0.0),
            Complex::new(4.0, 0.0),
        ];
        let twiddles = TwiddleSet::new(4, Direction::Forward);
        radix4_combine(&mut data, &twiddles, Direction::Forward);

        assert_eq!(
            data,
            [
                Complex::new(10.0, 0.0),
                Complex::new(-2.0, 2.0),
                Complex::new(-2.0, 0.0),
                Complex::new(-2.0, -2.0),
            ]
        );
    }

    #[test]
    fn single_sample_is_untouched() {
        let mut data = [Complex::new(0.25f32, -4.0)];
        mix(&mut data, &[], Direction::Inverse);
        assert_eq!(data, [Complex::new(0.25, -4.0)]);
    }
}
