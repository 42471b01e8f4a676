//! # quadft
//!
//! A mixed radix-4/radix-2 Cooley-Tukey FFT for complex signals whose length is a power of
//! two.
//!
//! A transform first puts the samples into bit reversed order and then recursively merges
//! quarters with radix-4 butterflies. Lengths that are not a power of four bottom out in a
//! radix-2 butterfly. Twiddle factors and bit reversal tables are computed once per
//! length and shared process-wide, see [`cache`].
//!
//! Transforms are unnormalized: running a forward transform followed by an inverse one
//! scales the signal by exactly `N`. Divide by `N` yourself if you need a unitary pair.
//!
//! The butterflies use limited range complex multiplication (see
//! [`fast_complex_multiply`]), so every input sample must be finite.
//!
//! ```
//! use quadft::{forward_transform, inverse_transform, Complex64};
//!
//! let mut signal = vec![Complex64::new(0.0, 0.0); 8];
//! signal[1] = Complex64::new(1.0, 0.0);
//!
//! forward_transform(&mut signal);
//! assert!(signal.iter().all(|z| (z.norm() - 1.0).abs() < 1e-12));
//!
//! inverse_transform(&mut signal);
//! assert!((signal[1].re - 8.0).abs() < 1e-12);
//! ```
use crate::bit_reversal::{bit_rev_plain, bit_rev_plain_into};
use crate::kernels::radix4::mix;
use crate::options::{BitReverseAlgorithm, Options};

pub mod bit_reversal;
pub mod cache;
pub mod fft;
mod kernels;
pub mod options;
pub mod planner;
pub mod twiddles;

pub use crate::cache::FftFloat;
pub use crate::fft::Fft;
pub use crate::kernels::common::{fast_complex_divide, fast_complex_multiply};
pub use crate::planner::{Direction, PlanError, Planner, Planner32, Planner64};
pub use num_complex::{Complex, Complex32, Complex64};

/// FFT with a pre-computed planner and options, in place
///
/// The direction of the transform is the one the `planner` was built for.
///
/// # Panics
///
/// Panics if `data.len()` differs from the length the `planner` was built for
pub fn transform_with_opts_and_plan<T: FftFloat>(
    data: &mut [Complex<T>],
    opts: &Options,
    planner: &Planner<T>,
) {
    assert_eq!(
        data.len(),
        planner.len(),
        "buffer length does not match the planned transform length"
    );

    match opts.bit_reverse {
        BitReverseAlgorithm::Table => planner.bit_reversal().permute(data),
        BitReverseAlgorithm::Plain => bit_rev_plain(data),
    }

    mix(data, planner.levels(), planner.direction());
}

/// FFT with a pre-computed planner and options, reading `input` and writing `output`
///
/// `input` is left untouched.
///
/// # Panics
///
/// Panics if `input.len()` or `output.len()` differ from the length the `planner` was built for
pub fn transform_into_with_opts_and_plan<T: FftFloat>(
    input: &[Complex<T>],
    output: &mut [Complex<T>],
    opts: &Options,
    planner: &Planner<T>,
) {
    assert_eq!(
        input.len(),
        planner.len(),
        "input length does not match the planned transform length"
    );
    assert_eq!(
        output.len(),
        planner.len(),
        "output length does not match the planned transform length"
    );

    match opts.bit_reverse {
        BitReverseAlgorithm::Table => planner.bit_reversal().permute_into(input, output),
        BitReverseAlgorithm::Plain => bit_rev_plain_into(input, output),
    }

    mix(output, planner.levels(), planner.direction());
}

fn transform_one_shot<T: FftFloat>(data: &mut [Complex<T>], direction: Direction) {
    let planner = Planner::new(data.len(), direction);
    let opts = Options::guess_options(data.len());
    transform_with_opts_and_plan(data, &opts, &planner);
}

fn transform_into_one_shot<T: FftFloat>(
    input: &[Complex<T>],
    output: &mut [Complex<T>],
    direction: Direction,
) {
    let planner = Planner::new(input.len(), direction);
    let opts = Options::guess_options(input.len());
    transform_into_with_opts_and_plan(input, output, &opts, &planner);
}

/// Forward DFT, in place
///
/// # Performance
///
/// Every call builds a [`Planner`], which locks the table caches and allocates. Prefer
/// [`Fft`] or [`transform_with_opts_and_plan`] when transforming repeatedly.
///
/// # Panics
///
/// Panics if `data.len()` is not a power of two greater than 1
pub fn forward_transform<T: FftFloat>(data: &mut [Complex<T>]) {
    transform_one_shot(data, Direction::Forward);
}

/// Inverse DFT, in place. The result is not divided by `N`.
///
/// # Performance
///
/// Every call builds a [`Planner`], which locks the table caches and allocates. Prefer
/// [`Fft`] or [`transform_with_opts_and_plan`] when transforming repeatedly.
///
/// # Panics
///
/// Panics if `data.len()` is not a power of two greater than 1
pub fn inverse_transform<T: FftFloat>(data: &mut [Complex<T>]) {
    transform_one_shot(data, Direction::Inverse);
}

/// Forward DFT of `input` written to `output`
///
/// # Performance
///
/// Every call builds a [`Planner`], which locks the table caches and allocates. Prefer
/// [`Fft`] or [`transform_with_opts_and_plan`] when transforming repeatedly.
///
/// # Panics
///
/// Panics if `input.len()` is not a power of two greater than 1, or if
/// `output.len() != input.len()`
pub fn forward_transform_into<T: FftFloat>(input: &[Complex<T>], output: &mut [Complex<T>]) {
    transform_into_one_shot(input, output, Direction::Forward);
}

/// Inverse DFT of `input` written to `output`. The result is not divided by `N`.
///
/// # Performance
///
/// Every call builds a [`Planner`], which locks the table caches and allocates. Prefer
/// [`Fft`] or [`transform_with_opts_and_plan`] when transforming repeatedly.
///
/// # Panics
///
/// Panics if `input.len()` is not a power of two greater than 1, or if
/// `output.len() != input.len()`
pub fn inverse_transform_into<T: FftFloat>(input: &[Complex<T>], output: &mut [Complex<T>]) {
    transform_into_one_shot(input, output, Direction::Inverse);
}
