//! Precomputed sine lookup table with periodic linear interpolation.
//!
//! The table spans one full sine period over the index range:
//!
//! ```text
//! table[i] = sin(π · (2i / (N − 1) − 1)),   i ∈ [0, N − 1]
//! ```
//!
//! so index 0 and index N − 1 both sit on a zero crossing (`sin(∓π)`).
//! [`SineTable::lookup`] treats the table as periodic with period 1 in its
//! argument: the fractional part of `x` is scaled onto `[0, N − 1]` and the
//! two nearest entries are blended, the upper neighbour wrapping modulo `N`.
//!
//! The table is built once and never written again, so it can be shared
//! read-only by every sample of every channel.

use crate::math::lerp;
use libm::{floorf, sinf};

/// Number of entries in a [`SineTable`].
pub const SINE_TABLE_SIZE: usize = 4096;

/// Fixed-size sine table, immutable after construction.
///
/// # Example
///
/// ```rust
/// use warmdrive_core::SineTable;
///
/// let table = SineTable::new();
/// // lookup(x) traces sin(π(2x − 1)): zero at 0 and 0.5, −1 at 0.25
/// assert!(table.lookup(0.0).abs() < 1e-3);
/// assert!((table.lookup(0.25) + 1.0).abs() < 1e-3);
/// assert!((table.lookup(1.25) - table.lookup(0.25)).abs() < 1e-5);
/// ```
#[derive(Clone)]
pub struct SineTable {
    table: [f32; SINE_TABLE_SIZE],
}

impl SineTable {
    /// Build the table.
    pub fn new() -> Self {
        let mut table = [0.0; SINE_TABLE_SIZE];
        let last = (SINE_TABLE_SIZE - 1) as f32;
        for (i, entry) in table.iter_mut().enumerate() {
            // Map index to [-1.0, 1.0]
            let normalized = i as f32 / last * 2.0 - 1.0;
            *entry = sinf((f64::from(normalized) * core::f64::consts::PI) as f32);
        }
        Self { table }
    }

    /// Interpolated, periodic lookup.
    ///
    /// Reduces `x` to its fractional part, scales it onto `[0, N − 1]`, and
    /// interpolates linearly between the two nearest entries. Total for every
    /// finite `x`; `lookup(x) ≈ lookup(x + 1)`.
    #[inline]
    pub fn lookup(&self, x: f32) -> f32 {
        let phase = x - floorf(x);
        self.lookup_absolute(phase * (SINE_TABLE_SIZE - 1) as f32)
    }

    /// Interpolate at a fractional table index in `[0, N − 1]`.
    ///
    /// The upper neighbour wraps modulo `N`, so index `N − 1` blends toward
    /// index 0.
    #[inline]
    pub fn lookup_absolute(&self, index: f32) -> f32 {
        let lower = (index as usize).min(SINE_TABLE_SIZE - 1);
        let upper = (lower + 1) % SINE_TABLE_SIZE;
        let fractional = index - lower as f32;
        lerp(self.table[lower], self.table[upper], fractional)
    }

    /// Raw table entries.
    pub fn as_slice(&self) -> &[f32] {
        &self.table
    }
}

impl Default for SineTable {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for SineTable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SineTable")
            .field("len", &SINE_TABLE_SIZE)
            .finish()
    }
}
