//! A reusable transform of fixed length
use num_complex::Complex;

use crate::cache::FftFloat;
use crate::options::Options;
use crate::planner::{validate_len, Direction, PlanError, Planner};
use crate::{transform_into_with_opts_and_plan, transform_with_opts_and_plan};

/// Forward and inverse transforms of one fixed length.
///
/// Building an `Fft` validates the length and fetches every table both directions need,
/// so it is the natural thing to create once at startup and reuse for every call.
///
/// ```
/// use quadft::{Complex32, Fft};
///
/// let fft = Fft::<f32>::new(512);
/// let input = vec![Complex32::new(1.0, 0.0); 512];
/// let mut spectrum = vec![Complex32::new(0.0, 0.0); 512];
/// fft.forward_into(&input, &mut spectrum);
/// assert_eq!(spectrum[0], Complex32::new(512.0, 0.0));
/// ```
#[derive(Debug, Clone)]
pub struct Fft<T: FftFloat> {
    forward: Planner<T>,
    inverse: Planner<T>,
    options: Options,
}

impl<T: FftFloat> Fft<T> {
    /// Plan both directions for `len` samples.
    ///
    /// # Panics
    ///
    /// Panics if `len` is not a power of two greater than 1
    pub fn new(len: usize) -> Self {
        match Self::try_new(len) {
            Ok(fft) => fft,
            Err(err) => panic!("{err}"),
        }
    }

    /// Plan both directions for `len` samples, reporting an invalid length as a [`PlanError`]
    pub fn try_new(len: usize) -> Result<Self, PlanError> {
        validate_len(len)?;

        Ok(Self {
            forward: Planner::try_new(len, Direction::Forward)?,
            inverse: Planner::try_new(len, Direction::Inverse)?,
            options: Options::guess_options(len),
        })
    }

    /// Replace the guessed [`Options`]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// The number of samples transformed by every call
    #[inline]
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// Always `false`, the shortest transform has two samples
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Forward DFT, in place
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != self.len()`
    pub fn forward(&self, data: &mut [Complex<T>]) {
        transform_with_opts_and_plan(data, &self.options, &self.forward);
    }

    /// Inverse DFT, in place. The result is not divided by `N`.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != self.len()`
    pub fn inverse(&self, data: &mut [Complex<T>]) {
        transform_with_opts_and_plan(data, &self.options, &self.inverse);
    }

    /// Forward DFT of `input` written to `output`
    ///
    /// # Panics
    ///
    /// Panics if `input.len()` or `output.len()` differ from `self.len()`
    pub fn forward_into(&self, input: &[Complex<T>], output: &mut [Complex<T>]) {
        transform_into_with_opts_and_plan(input, output, &self.options, &self.forward);
    }

    /// Inverse DFT of `input` written to `output`. The result is not divided by `N`.
    ///
    /// # Panics
    ///
    /// Panics if `input.len()` or `output.len()` differ from `self.len()`
    pub fn inverse_into(&self, input: &[Complex<T>], output: &mut [Complex<T>]) {
        transform_into_with_opts_and_plan(input, output, &self.options, &self.inverse);
    }
}
