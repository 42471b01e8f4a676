pub extern crate rustfft;

// export rustfft to quadft
use rand::{distributions::Uniform, prelude::*};
use rustfft::num_complex::Complex;
use rustfft::num_traits::Float;

/// Asserts that two fp numbers are approximately equal.
///
/// # Panics
///
/// Panics if `actual` and `expected` are too far from each other
#[allow(dead_code)]
#[track_caller]
pub fn assert_float_closeness<T: Float + std::fmt::Display>(actual: T, expected: T, epsilon: T) {
    if (actual - expected).abs() >= epsilon {
        panic!(
            "Assertion failed: {actual} too far from expected value {expected} (with epsilon {epsilon})",
        );
    }
}

/// Asserts that both components of two complex numbers are approximately equal.
///
/// # Panics
///
/// Panics if either component of `actual` is too far from the one in `expected`
#[track_caller]
pub fn assert_complex_closeness<T: Float + std::fmt::Display>(
    actual: Complex<T>,
    expected: Complex<T>,
    epsilon: T,
) {
    if (actual.re - expected.re).abs() >= epsilon || (actual.im - expected.im).abs() >= epsilon {
        panic!(
            "Assertion failed: {actual} too far from expected value {expected} (with epsilon {epsilon})",
        );
    }
}

/// Generate a random, complex, signal in the provided buffer.
/// Both components of every sample are drawn uniformly from `[-1, 1)`.
pub fn gen_random_signal<T>(signal: &mut [Complex<T>])
where
    T: Float + rand::distributions::uniform::SampleUniform,
{
    let mut rng = thread_rng();

    let uniform_dist = Uniform::new(-T::one(), T::one());
    for z in signal.iter_mut() {
        z.re = uniform_dist.sample(&mut rng);
        z.im = uniform_dist.sample(&mut rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_random_signal() {
        let big_n = 1 << 12;
        let mut signal = vec![Complex::new(0.0f64, 0.0); big_n];

        gen_random_signal(&mut signal);

        assert!(signal
            .iter()
            .all(|z| (-1.0..1.0).contains(&z.re) && (-1.0..1.0).contains(&z.im)));

        // Mean power of a uniform [-1, 1) component is 1/3
        let power: f64 = signal.iter().map(|z| z.norm_sqr()).sum::<f64>() / big_n as f64;
        assert_float_closeness(power, 2.0 / 3.0, 0.1);
    }

    #[test]
    #[should_panic]
    fn complex_closeness_rejects_distant_values() {
        assert_complex_closeness(Complex::new(1.0, 0.0), Complex::new(1.0, 0.5), 1e-3);
    }
}
