/// Options to tune to improve performance depending on the hardware and input size.
///
/// Calling FFT routines without specifying options will automatically select reasonable defaults
/// depending on the input size. None of the options change the result of a transform.
///
/// You only need to tune these options if you are trying to squeeze maximum performance
/// out of a known hardware platform that you can benchmark at varying input sizes.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub bit_reverse: BitReverseAlgorithm,
}

impl Options {
    /// Pick options for a transform of `input_size` samples
    ///
    /// The cached table is used at every size. Run the `bit_reversal` bench before
    /// switching small inputs to [`BitReverseAlgorithm::Plain`].
    pub fn guess_options(_input_size: usize) -> Options {
        Options {
            bit_reverse: BitReverseAlgorithm::Table,
        }
    }

    /// Use `algorithm` for the bit reversal
    pub fn with_bit_reverse(mut self, algorithm: BitReverseAlgorithm) -> Options {
        self.bit_reverse = algorithm;
        self
    }
}

/// The algorithm to use for bit reversal.
/// Different algorithms perform best on different input sizes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum BitReverseAlgorithm {
    #[default]
    /// Swap groups of symmetric indices using the cached [`BitReversalTable`]
    ///
    /// [`BitReversalTable`]: crate::bit_reversal::BitReversalTable
    Table,
    /// Walk a reverse-binary counter without any table
    Plain,
}
