//! Circular sample history buffer.
//!
//! The comb and FIR engines keep a window of past samples in a fixed-length
//! ring. This module wraps the cursor arithmetic so the invariant
//! "cursor always in range" is enforced by the type rather than re-derived
//! at every call site.

/// A fixed-capacity circular buffer of samples with a single cursor.
///
/// The cursor marks the oldest interesting sample: reads always happen at the
/// cursor, writes happen some number of samples ahead of it, and the cursor
/// advances by one position per processed sample, wrapping at the end of the
/// buffer. The capacity is fixed at construction and never changes.
///
/// # Examples
///
/// ```
/// use filterpack::HistoryBuffer;
///
/// let mut history = HistoryBuffer::new(4);
/// history.write_ahead(2, 1.0);
/// assert_eq!(history.read(), 0.0);
/// history.advance();
/// history.advance();
/// assert_eq!(history.read(), 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    samples: Vec<f32>,
    position: usize,
}

impl HistoryBuffer {
    /// Creates a zero-filled history with the given length.
    ///
    /// # Panics
    ///
    /// Panics if `length` is zero; every engine derives a strictly positive
    /// length from its capacity constant or sample rate.
    pub fn new(length: usize) -> Self {
        assert!(length > 0, "history buffer length must be positive");
        Self {
            samples: vec![0.0; length],
            position: 0,
        }
    }

    /// Returns the fixed buffer length.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false; the buffer has at least one slot.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Reads the sample at the cursor.
    #[inline]
    pub fn read(&self) -> f32 {
        self.samples[self.position]
    }

    /// Writes `value` at `offset` samples ahead of the cursor, wrapping
    /// around the end of the buffer. An offset equal to the buffer length
    /// lands back on the cursor itself.
    #[inline]
    pub fn write_ahead(&mut self, offset: usize, value: f32) {
        let index = (self.position + offset) % self.samples.len();
        self.samples[index] = value;
    }

    /// Advances the cursor by one sample, wrapping at the end of the buffer.
    #[inline]
    pub fn advance(&mut self) {
        self.position = (self.position + 1) % self.samples.len();
    }

    /// Zeroes the buffer and rewinds the cursor, as if newly constructed.
    pub fn reset(&mut self) {
        self.samples.fill(0.0);
        self.position = 0;
    }
}
