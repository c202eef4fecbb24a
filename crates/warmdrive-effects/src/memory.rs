//! Per-sample filter memory for the boost stages.
//!
//! [`FilterMemory`] holds everything the pipeline carries from one sample to
//! the next: two [`BoostCell`]s cascaded for the bass boost, and the phase
//! accumulator of the high boost. It is zeroed at construction and on every
//! reset.
//!
//! Which memory a channel uses is decided by [`StereoLink`].

use warmdrive_core::BoostCell;

/// State carried between samples by the boost stages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterMemory {
    bass: [BoostCell; 2],
    boost_time: f64,
    boost_time_inc: f64,
}

impl FilterMemory {
    /// Zeroed memory.
    pub const fn new() -> Self {
        Self {
            bass: [BoostCell::new(), BoostCell::new()],
            boost_time: 0.0,
            boost_time_inc: 0.0,
        }
    }

    /// Tonal (bass) boost: the input runs through both cells in cascade.
    ///
    /// Identity when `amount == 0`, in which case the cells are not touched.
    #[inline]
    pub fn bass_boost(&mut self, input: f32, amount: f32) -> f32 {
        if amount == 0.0 {
            return input;
        }
        let [first, second] = &mut self.bass;
        let out = first.process(input, amount);
        second.process(out, amount)
    }

    /// Secondary (high) boost: `x + x · t` applied twice, advancing the
    /// accumulator `t` by its increment after each application.
    ///
    /// Identity when `amount == 0`. The increment has no path from the
    /// boost amount and stays at zero, so with the accumulator at zero this
    /// stage passes audio through unchanged even when engaged.
    #[inline]
    pub fn high_boost(&mut self, input: f32, amount: f32) -> f32 {
        if amount == 0.0 {
            return input;
        }
        let out = self.high_boost_step(input);
        self.high_boost_step(out)
    }

    #[inline]
    fn high_boost_step(&mut self, input: f32) -> f32 {
        let component = (f64::from(input) * self.boost_time) as f32;
        self.boost_time += self.boost_time_inc;
        input + component
    }

    /// The two bass cells, first stage first.
    pub fn bass_cells(&self) -> &[BoostCell; 2] {
        &self.bass
    }

    /// Current high-boost accumulator.
    pub fn boost_time(&self) -> f64 {
        self.boost_time
    }

    /// Zero every cell and the accumulator.
    pub fn reset(&mut self) {
        for cell in &mut self.bass {
            cell.reset();
        }
        self.boost_time = 0.0;
        self.boost_time_inc = 0.0;
    }
}

/// How the two stereo channels map onto filter memories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StereoLink {
    /// Both channels share one memory, so left and right samples interleave
    /// through the same cells in frame order.
    #[default]
    Shared,
    /// Each channel owns its memory.
    Independent,
}

impl StereoLink {
    /// Memory slot used by `channel` (0 = left, 1 = right).
    #[inline]
    pub const fn memory_index(self, channel: usize) -> usize {
        match self {
            StereoLink::Shared => 0,
            StereoLink::Independent => channel & 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bass_boost_bypassed_at_zero() {
        let mut memory = FilterMemory::new();
        assert_eq!(memory.bass_boost(0.7, 0.0), 0.7);
        assert_eq!(memory, FilterMemory::new());
    }

    #[test]
    fn bass_boost_cascades_two_cells() {
        let mut memory = FilterMemory::new();
        let mut first = BoostCell::new();
        let mut second = BoostCell::new();
        for &x in &[0.2, -0.1, 0.4, 0.0] {
            let expected = second.process(first.process(x, 0.3), 0.3);
            assert_eq!(memory.bass_boost(x, 0.3), expected);
        }
        assert_eq!(memory.bass_cells(), &[first, second]);
    }

    #[test]
    fn high_boost_is_pass_through() {
        let mut memory = FilterMemory::new();
        for &x in &[0.5, -0.25, 0.9] {
            assert_eq!(memory.high_boost(x, 1.0), x);
        }
        assert_eq!(memory.boost_time(), 0.0);
    }

    #[test]
    fn high_boost_applies_accumulator() {
        let mut memory = FilterMemory::new();
        memory.boost_time = 0.5;
        memory.boost_time_inc = 0.25;
        // 0.4 * 1.5 = 0.6, then 0.6 * 1.75 = 1.05
        let out = memory.high_boost(0.4, 1.0);
        assert!((out - 1.05).abs() < 1e-6, "got {out}");
        assert_eq!(memory.boost_time(), 1.0);
    }

    #[test]
    fn reset_zeroes_everything() {
        let mut memory = FilterMemory::new();
        memory.bass_boost(0.8, 1.0);
        memory.boost_time = 3.0;
        memory.reset();
        assert_eq!(memory, FilterMemory::new());
    }

    #[test]
    fn stereo_link_indices() {
        assert_eq!(StereoLink::Shared.memory_index(0), 0);
        assert_eq!(StereoLink::Shared.memory_index(1), 0);
        assert_eq!(StereoLink::Independent.memory_index(0), 0);
        assert_eq!(StereoLink::Independent.memory_index(1), 1);
    }
}
