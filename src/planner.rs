//! The planner module provides a convenient interface for planning and executing
//! a Fast Fourier Transform (FFT). The planner is responsible for validating the
//! transform length once and for fetching every table the transform needs
//! (the bit reversal pattern and one twiddle set per radix-4 level) from the
//! process-wide [cache](crate::cache), so the transform itself never touches a lock.
use std::fmt;
use std::sync::Arc;

use log::debug;

use crate::bit_reversal::BitReversalTable;
use crate::cache::{bit_reversal_table, twiddle_set, FftFloat};
use crate::twiddles::TwiddleSet;

/// Forward is for running the regular FFT
/// Inverse is for running the Inverse Fast Fourier Transform (IFFT)
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Rotate by `-2π/N` per step (the standard DFT)
    Forward = -1,
    /// Rotate by `+2π/N` per step
    Inverse = 1,
}

impl Direction {
    /// The sign of the rotation angle, `-1` for [`Direction::Forward`] and `+1` for
    /// [`Direction::Inverse`].
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Direction::Forward => -1.0,
            Direction::Inverse => 1.0,
        }
    }
}

/// Errors reported while planning a transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanError {
    /// The length is not a power of two greater than one
    InvalidLength(usize),
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanError::InvalidLength(len) => write!(
                f,
                "transform length must be a power of two greater than 1, got {len}"
            ),
        }
    }
}

impl std::error::Error for PlanError {}

/// Checks that `len` is a length the radix-4/radix-2 decomposition is defined for.
pub(crate) fn validate_len(len: usize) -> Result<(), PlanError> {
    if len > 1 && len.is_power_of_two() {
        Ok(())
    } else {
        Err(PlanError::InvalidLength(len))
    }
}

/// The planner holds, for a single length and direction, the bit reversal pattern and
/// the twiddle sets of every radix-4 level, largest first. A level of length `n`
/// carries a [`TwiddleSet`] with `n / 4` factors per harmonic; the recursion stops at
/// blocks of 2 or 1 samples, which need no twiddles.
#[derive(Debug, Clone)]
pub struct Planner<T: FftFloat> {
    len: usize,
    direction: Direction,
    bit_reversal: Arc<BitReversalTable>,
    levels: Vec<Arc<TwiddleSet<T>>>,
}

/// Single precision planner
pub type Planner32 = Planner<f32>;
/// Double precision planner
pub type Planner64 = Planner<f64>;

impl<T: FftFloat> Planner<T> {
    /// Create a `Planner` for an FFT of size `num_points`.
    /// The twiddle factors are pre-computed based on the provided [`Direction`].
    ///
    /// # Panics
    ///
    /// Panics if `num_points < 2` or if `num_points` is __not__ a power of 2.
    /// Use [`Planner::try_new`] to handle that case without panicking.
    pub fn new(num_points: usize, direction: Direction) -> Self {
        match Self::try_new(num_points, direction) {
            Ok(planner) => planner,
            Err(err) => panic!("{err}"),
        }
    }

    /// Create a `Planner` for an FFT of size `num_points`, reporting an invalid length
    /// as a [`PlanError`].
    pub fn try_new(num_points: usize, direction: Direction) -> Result<Self, PlanError> {
        validate_len(num_points)?;

        let bit_reversal = bit_reversal_table(num_points);

        let mut levels = Vec::new();
        let mut size = num_points;
        while size > 2 {
            levels.push(twiddle_set::<T>(size, direction));
            size >>= 2;
        }

        debug!(
            "planned {direction:?} transform of {num_points} points with {} radix-4 levels",
            levels.len()
        );

        Ok(Self {
            len: num_points,
            direction,
            bit_reversal,
            levels,
        })
    }

    /// The number of samples this planner transforms
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// The direction of the FFT associated with this `Planner`
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The bit reversal pattern for this length
    #[inline]
    pub fn bit_reversal(&self) -> &BitReversalTable {
        &self.bit_reversal
    }

    /// Twiddle sets for each radix-4 level, outermost level first
    #[inline]
    pub fn levels(&self) -> &[Arc<TwiddleSet<T>>] {
        &self.levels
    }
}
