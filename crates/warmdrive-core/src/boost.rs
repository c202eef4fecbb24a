//! Input-averaging one-pole lowpass cell for tonal boosting.
//!
//! Each cell holds the previous raw input and the previous filtered output
//! and computes:
//!
//! ```text
//! y[n] = (1 − c) · y[n−1] + c · (x[n] + x[n−1]) / 2
//! ```
//!
//! Averaging the current and previous input places a zero at Nyquist, so the
//! cell rolls highs off harder than a plain one-pole at the same
//! coefficient. The coefficient `c` comes from the boost amount (see
//! [`BoostCell::coefficient`]), and the filtered sample is multiplied by a
//! makeup gain of `1 + 2 · amount`, turning the lowpass into a bass boost.
//!
//! Cells carry no coefficient of their own: the amount is passed on every
//! call, so a single parameter write retunes every cell that reads it.
//!
//! # Usage
//!
//! ```rust
//! use warmdrive_core::BoostCell;
//!
//! let mut first = BoostCell::new();
//! let mut second = BoostCell::new();
//! // Two cells in cascade
//! let y = second.process(first.process(0.5, 0.5), 0.5);
//! assert!(y.is_finite());
//! ```

/// One filter cell: `(prev_in, prev_out)`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoostCell {
    prev_in: f32,
    prev_out: f32,
}

impl BoostCell {
    /// Create a zeroed cell.
    pub const fn new() -> Self {
        Self {
            prev_in: 0.0,
            prev_out: 0.0,
        }
    }

    /// Filter coefficient for a boost amount in `[0, 1]`: `0.2 + 0.8 · amount`.
    #[inline]
    pub fn coefficient(amount: f32) -> f32 {
        0.2 + 0.8 * amount
    }

    /// Makeup gain applied after filtering: `1 + 2 · amount`.
    #[inline]
    pub fn makeup_gain(amount: f32) -> f32 {
        1.0 + amount * 2.0
    }

    /// Filter one sample and apply makeup gain.
    ///
    /// The stored output is the filtered value before makeup gain.
    #[inline]
    pub fn process(&mut self, input: f32, amount: f32) -> f32 {
        let freq = Self::coefficient(amount);
        let boosted = (1.0 - freq) * self.prev_out + freq * (input + self.prev_in) * 0.5;
        self.prev_in = input;
        self.prev_out = boosted;
        boosted * Self::makeup_gain(amount)
    }

    /// Previous raw input.
    pub fn prev_in(&self) -> f32 {
        self.prev_in
    }

    /// Previous filtered output (before makeup gain).
    pub fn prev_out(&self) -> f32 {
        self.prev_out
    }

    /// Zero the cell.
    pub fn reset(&mut self) {
        self.prev_in = 0.0;
        self.prev_out = 0.0;
    }
}
