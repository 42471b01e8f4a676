//! This module provides the bit reverse permutation that puts samples into the order the
//! radix-4 butterflies expect.
//!
//! Two implementations are available:
//!
//! - [`BitReversalTable`] precomputes a small table of offsets once per length and then
//!   reorders buffers by swapping whole groups of symmetric indices.
//! - [`bit_rev_plain`] / [`bit_rev_plain_into`] walk a reverse-binary counter and need no
//!   table at all.
//!
//! Both produce the same permutation, `output[i] = input[rev(i)]`, where `rev` reverses
//! the `log2(N)` low bits of `i`.

/// Precomputed bit reversal pattern for a fixed length `N`.
///
/// When `N` is a power of four the table holds `N / 4` entries. Entry `c` is
/// `2 * rev(c)`, with `rev` reversing the `log2(N) - 2` middle bits of an index. The four
/// indices `2c`, `2c + 1`, `2c + N/2` and `2c + N/2 + 1` form a group that the permutation
/// maps onto the group starting at `table[c]`.
///
/// Otherwise the table holds `N / 2` entries, entry `k` being the full reversal of `k`.
/// Index `k` pairs with `table[k]` and index `k + N/2` pairs with `table[k] + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitReversalTable {
    len: usize,
    layout: Layout,
    offsets: Vec<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layout {
    /// Groups of four swapped between pairs of table entries
    Quad,
    /// Plain pairwise swaps
    Pair,
}

impl BitReversalTable {
    /// Build the table for `len` samples.
    ///
    /// # Panics
    ///
    /// Panics if `len` is not a power of two greater than 1
    pub fn new(len: usize) -> Self {
        assert!(
            len > 1 && len.is_power_of_two(),
            "bit reversal length must be a power of two greater than 1, got {len}"
        );

        let log_n = len.ilog2();
        let (layout, table_len, mut span) = if log_n % 2 == 0 {
            (Layout::Quad, len >> 2, len >> 1)
        } else {
            (Layout::Pair, len >> 1, len)
        };

        // Each round appends a copy of the table shifted by half the previous span,
        // which sets the next lower bit of the reversed index.
        let mut offsets = Vec::with_capacity(table_len);
        offsets.push(0);
        while offsets.len() < table_len {
            span >>= 1;
            for i in 0..offsets.len() {
                offsets.push(offsets[i] + span);
            }
        }

        Self {
            len,
            layout,
            offsets,
        }
    }

    /// The number of samples this table permutes
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`, a table covers at least two samples
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// `true` if the length is a power of four and the table uses four-element groups
    #[inline]
    pub fn is_power_of_four(&self) -> bool {
        self.layout == Layout::Quad
    }

    /// The precomputed offsets
    #[inline]
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Reorder `buf` in place.
    ///
    /// # Panics
    ///
    /// Panics if `buf.len()` differs from the table length
    pub fn permute<T>(&self, buf: &mut [T]) {
        assert_eq!(buf.len(), self.len);

        match self.layout {
            Layout::Quad => {
                let half = self.len >> 1;
                for (c, &rev) in self.offsets.iter().enumerate() {
                    let base = c << 1;
                    if base < rev {
                        buf.swap(base, rev);
                        buf.swap(base + 1, rev + half);
                        buf.swap(base + half, rev + 1);
                        buf.swap(base + half + 1, rev + half + 1);
                    } else if base == rev {
                        // The group maps onto itself, only its two mixed members move.
                        buf.swap(base + 1, base + half);
                    }
                }
            }
            Layout::Pair => {
                let half = self.len >> 1;
                for (k, &rev) in self.offsets.iter().enumerate() {
                    if k < rev {
                        buf.swap(k, rev);
                    }
                    if k + half < rev + 1 {
                        buf.swap(k + half, rev + 1);
                    }
                }
            }
        }
    }

    /// Write the reordered contents of `input` into `output`, leaving `input` untouched.
    ///
    /// # Panics
    ///
    /// Panics if `input.len()` or `output.len()` differ from the table length
    pub fn permute_into<T: Copy>(&self, input: &[T], output: &mut [T]) {
        assert_eq!(input.len(), self.len);
        assert_eq!(output.len(), self.len);

        let half = self.len >> 1;
        match self.layout {
            Layout::Quad => {
                for (c, &rev) in self.offsets.iter().enumerate() {
                    let base = c << 1;
                    output[base] = input[rev];
                    output[base + 1] = input[rev + half];
                    output[base + half] = input[rev + 1];
                    output[base + half + 1] = input[rev + half + 1];
                }
            }
            Layout::Pair => {
                for (k, &rev) in self.offsets.iter().enumerate() {
                    output[k] = input[rev];
                    output[k + half] = input[rev + 1];
                }
            }
        }
    }
}

/// Reorder `buf` in place with a reverse-binary counter, without any table.
pub fn bit_rev_plain<T>(buf: &mut [T]) {
    let n = buf.len();
    let mut j = 0;
    for i in 0..n {
        if j > i {
            buf.swap(i, j);
        }
        j = next_reversed(j, n);
    }
}

/// Out-of-place counterpart of [`bit_rev_plain`].
///
/// # Panics
///
/// Panics if `input.len() != output.len()`
pub fn bit_rev_plain_into<T: Copy>(input: &[T], output: &mut [T]) {
    assert_eq!(input.len(), output.len());

    let n = input.len();
    let mut j = 0;
    for z in output.iter_mut() {
        *z = input[j];
        j = next_reversed(j, n);
    }
}

/// Increment `j` as if its bits were stored in reverse order.
#[inline]
fn next_reversed(mut j: usize, n: usize) -> usize {
    let mut m = n >> 1;
    while m >= 1 && j >= m {
        j -= m;
        m >>= 1;
    }
    j + m
}
