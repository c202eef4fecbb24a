//! Core Effect trait.
//!
//! The [`Effect`] trait is the processing interface every shaping stage and
//! the full engine implement, providing a consistent interface for
//! single-sample, block, and interleaved stereo processing.
//!
//! ## Design Decisions
//!
//! - **Mono processing**: `process` takes one `f32` and returns one `f32`.
//!   Stereo is handled by [`Effect::process_interleaved`], which by default
//!   runs the left and right sample of each frame through the same instance
//!   in channel order.
//!
//! - **Object-safe**: `dyn Effect` works for runtime dispatch; generic/static
//!   dispatch is preferred in hot paths.
//!
//! - **No allocations**: All methods are callable from real-time audio
//!   contexts.

/// Core trait for all audio effects.
///
/// # Example
///
/// ```rust
/// use warmdrive_core::Effect;
///
/// struct Gain {
///     gain: f32,
/// }
///
/// impl Effect for Gain {
///     fn process(&mut self, input: f32) -> f32 {
///         input * self.gain
///     }
///
///     fn reset(&mut self) {
///         // Gain has no internal state to reset
///     }
/// }
///
/// let mut gain = Gain { gain: 0.5 };
/// let input = [1.0, -1.0, 0.5, -0.5];
/// let mut output = [0.0; 4];
/// gain.process_interleaved(&input, &mut output, 2);
/// assert_eq!(output, [0.5, -0.5, 0.25, -0.25]);
/// ```
pub trait Effect {
    /// Process a single sample.
    ///
    /// For effects with internal state (filters, accumulators), this advances
    /// the state by one sample.
    fn process(&mut self, input: f32) -> f32;

    /// Process a block of mono samples.
    ///
    /// # Panics
    /// Debug builds panic if `input.len() != output.len()`.
    fn process_block(&mut self, input: &[f32], output: &mut [f32]) {
        debug_assert_eq!(
            input.len(),
            output.len(),
            "Input and output buffers must have same length"
        );
        for (inp, out) in input.iter().zip(output.iter_mut()) {
            *out = self.process(*inp);
        }
    }

    /// Process a block of samples in-place.
    fn process_block_inplace(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.process(*sample);
        }
    }

    /// Process `frames` frames of interleaved stereo audio.
    ///
    /// Both buffers hold `2 * frames` samples, left/right alternating. Each
    /// frame runs the left sample, then the right sample, through
    /// [`process`](Self::process); results land in the same slots of
    /// `output`. Frames beyond the shorter of the two buffers are not
    /// touched.
    fn process_interleaved(&mut self, input: &[f32], output: &mut [f32], frames: usize) {
        let len = interleaved_len(input, output, frames);
        for (inp, out) in input[..len]
            .chunks_exact(2)
            .zip(output[..len].chunks_exact_mut(2))
        {
            out[0] = self.process(inp[0]);
            out[1] = self.process(inp[1]);
        }
    }

    /// Reset internal state.
    ///
    /// Clears all processing memory without changing parameters.
    fn reset(&mut self);
}

/// Number of interleaved samples that `frames` stereo frames cover, bounded
/// by both buffers.
///
/// # Panics
/// Debug builds panic if either buffer is shorter than `2 * frames`.
#[inline]
pub fn interleaved_len(input: &[f32], output: &[f32], frames: usize) -> usize {
    let len = frames.saturating_mul(2);
    debug_assert!(
        input.len() >= len && output.len() >= len,
        "interleaved buffers must hold 2 * frames samples"
    );
    len.min(input.len()).min(output.len()) & !1
}
