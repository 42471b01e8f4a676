//! Process-wide cache of precomputed tables.
//!
//! Twiddle sets are keyed by `(precision, length, direction)` and bit reversal tables by
//! length alone. Every cache is a `hashbrown::HashMap` behind a [`Mutex`] that is created
//! on first use through a [`OnceLock`]. A miss computes the table while the lock is held,
//! so callers racing on the first use of a key all receive the same [`Arc`].
//!
//! Building a [`Planner`](crate::planner::Planner) populates every table a transform of
//! that length needs, which allows warming the cache at startup.
use std::fmt::Debug;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use hashbrown::HashMap;
use log::{debug, trace};
use num_traits::Float;

use crate::bit_reversal::BitReversalTable;
use crate::planner::Direction;
use crate::twiddles::TwiddleSet;

/// Floating point precisions the transform is implemented for.
pub trait FftFloat: Float + Debug + Send + Sync + 'static {
    /// Narrow (or pass through) an `f64`
    fn from_f64(value: f64) -> Self;

    /// The twiddle cache holding every table of this precision
    fn twiddle_cache() -> &'static TwiddleCache<Self>;
}

macro_rules! impl_fft_float_for {
    ($precision:ident) => {
        impl FftFloat for $precision {
            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $precision
            }

            fn twiddle_cache() -> &'static TwiddleCache<Self> {
                static CACHE: OnceLock<TwiddleCache<$precision>> = OnceLock::new();
                CACHE.get_or_init(TwiddleCache::new)
            }
        }
    };
}

impl_fft_float_for!(f32);
impl_fft_float_for!(f64);

/// Twiddle sets of one precision, keyed by level length and direction
#[derive(Debug)]
pub struct TwiddleCache<T> {
    tables: Mutex<HashMap<(usize, Direction), Arc<TwiddleSet<T>>>>,
}

impl<T: FftFloat> TwiddleCache<T> {
    fn new() -> Self {
        Self {
            tables: Mutex::new(HashMap::new()),
        }
    }

    /// Fetch the twiddle set for a level of length `n`, computing it on first use
    pub fn get_or_compute(&self, n: usize, direction: Direction) -> Arc<TwiddleSet<T>> {
        // Tables are only ever inserted whole, so a poisoned map is still consistent.
        let mut tables = self.tables.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(table) = tables.get(&(n, direction)) {
            trace!("reusing {direction:?} twiddles for length {n}");
            return Arc::clone(table);
        }

        debug!("computing {direction:?} twiddles for length {n}");
        let table = Arc::new(TwiddleSet::new(n, direction));
        tables.insert((n, direction), Arc::clone(&table));
        table
    }

    /// The number of cached twiddle sets
    pub fn len(&self) -> usize {
        self.tables
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Fetch the shared twiddle set of precision `T` for a level of length `n`
#[inline]
pub fn twiddle_set<T: FftFloat>(n: usize, direction: Direction) -> Arc<TwiddleSet<T>> {
    T::twiddle_cache().get_or_compute(n, direction)
}

/// Fetch the shared bit reversal table for `len` samples, computing it on first use
///
/// # Panics
///
/// Panics if `len` is not a power of two greater than 1
pub fn bit_reversal_table(len: usize) -> Arc<BitReversalTable> {
    static CACHE: OnceLock<Mutex<HashMap<usize, Arc<BitReversalTable>>>> = OnceLock::new();

    let mut tables = CACHE
        .get_or_init(|| Mutex::new(HashMap::new()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    if let Some(table) = tables.get(&len) {
        trace!("reusing bit reversal table for length {len}");
        return Arc::clone(table);
    }

    debug!("computing bit reversal table for length {len}");
    let table = Arc::new(BitReversalTable::new(len));
    tables.insert(len, Arc::clone(&table));
    table
}
