//! The WarmDrive engine: parameters, filter memory, sine table, and the
//! host-facing operations around them.

use crate::error::{InitError, RuntimeDesc};
use crate::memory::{FilterMemory, StereoLink};
use crate::params::{DESCRIPTORS, PARAM_COUNT, ParameterSet};
use crate::pipeline::process_sample;
use alloc::sync::Arc;
use core::fmt::Write;
use warmdrive_core::effect::interleaved_len;
use warmdrive_core::{Effect, ParamDescriptor, ParamText, ParameterInfo, SineTable};

/// Stereo nonlinear shaping engine.
///
/// One instance owns a [`ParameterSet`], the filter memory for both
/// channels, and the [`SineTable`]. Construction builds the table and
/// applies every descriptor default (drive 20 %, shape neutral, everything
/// else off).
///
/// # Threading
///
/// Processing and reset take `&mut self` and belong to the audio context.
/// Parameter writes take `&self`; a control context can also hold the
/// [`Arc<ParameterSet>`] from [`param_handle`](Self::param_handle) and write
/// through it while audio runs.
///
/// # Example
///
/// ```rust
/// use warmdrive_effects::{WarmDrive, params};
///
/// let mut engine = WarmDrive::new();
/// engine.set_parameter(params::BASS_BOOST, 40);
///
/// let input = [0.2, -0.2, 0.5, -0.5];
/// let mut output = [0.0; 4];
/// engine.process(&input, &mut output, 2);
/// assert!(output.iter().all(|s| s.abs() < 1.0));
/// ```
#[derive(Debug)]
pub struct WarmDrive {
    params: Arc<ParameterSet>,
    memory: [FilterMemory; 2],
    link: StereoLink,
    sine: SineTable,
}

impl WarmDrive {
    /// Create an engine with default parameters and shared channel memory.
    pub fn new() -> Self {
        let mut engine = Self {
            params: Arc::new(ParameterSet::new()),
            memory: [FilterMemory::new(), FilterMemory::new()],
            link: StereoLink::Shared,
            sine: SineTable::new(),
        };
        engine.apply_defaults();
        engine
    }

    /// Create an engine with the given channel link.
    pub fn with_link(link: StereoLink) -> Self {
        let mut engine = Self::new();
        engine.link = link;
        engine
    }

    /// Prepare for processing.
    ///
    /// Zeroes the filter memory. Fails only when the host's channel layout
    /// is not stereo in, stereo out.
    pub fn init(&mut self, desc: &RuntimeDesc) -> Result<(), InitError> {
        if !desc.is_stereo() {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                "init: rejected {} in / {} out",
                desc.input_channels,
                desc.output_channels
            );
            return Err(InitError::ChannelLayout {
                input: desc.input_channels,
                output: desc.output_channels,
            });
        }
        self.clear_memory();
        #[cfg(feature = "tracing")]
        tracing::debug!(
            "init: {} Hz, {} frames/buffer",
            desc.sample_rate,
            desc.frames_per_buffer
        );
        Ok(())
    }

    /// Zero the filter memory of both channels.
    ///
    /// Call only while the audio path is quiesced.
    pub fn reset(&mut self) {
        self.clear_memory();
        #[cfg(feature = "tracing")]
        tracing::debug!("reset: filter memory cleared");
    }

    /// Release the engine; clears filter memory like [`reset`](Self::reset).
    pub fn teardown(&mut self) {
        self.clear_memory();
    }

    /// Host resumed processing. Nothing to do.
    pub fn resume(&mut self) {}

    /// Host suspended processing. Nothing to do.
    pub fn suspend(&mut self) {}

    /// Tempo notification (16.16 fixed-point BPM). Not tempo-synced; ignored.
    pub fn set_tempo(&mut self, _tempo: u32) {}

    /// Process `frames` frames of interleaved stereo audio.
    ///
    /// Left then right sample of each frame go through the shaping chain and
    /// land in the same slots of `output`.
    pub fn process(&mut self, input: &[f32], output: &mut [f32], frames: usize) {
        let len = interleaved_len(input, output, frames);
        let memory_l = self.link.memory_index(0);
        let memory_r = self.link.memory_index(1);
        for (inp, out) in input[..len]
            .chunks_exact(2)
            .zip(output[..len].chunks_exact_mut(2))
        {
            out[0] = process_sample(&self.params, &mut self.memory[memory_l], &self.sine, inp[0]);
            out[1] = process_sample(&self.params, &mut self.memory[memory_r], &self.sine, inp[1]);
        }
    }

    /// Set parameter `id` from its integer value. Unknown ids are ignored.
    pub fn set_parameter(&self, id: usize, value: i32) {
        self.params.set(id, value);
        #[cfg(feature = "tracing")]
        tracing::debug!("set_parameter: id={id} value={value}");
    }

    /// Integer value of parameter `id`; `0` for unknown ids.
    pub fn parameter_value(&self, id: usize) -> i32 {
        self.params.get(id)
    }

    /// Display string for `value`: `"<value>%"`.
    pub fn parameter_str_value(&self, _id: usize, value: i32) -> ParamText {
        let mut text = ParamText::new();
        // "-2147483648%" fits in the buffer
        let _ = write!(text, "{value}%");
        text
    }

    /// Bitmap for a parameter value. This effect has none.
    pub fn parameter_bmp_value(&self, _id: usize, _value: i32) -> Option<&'static [u8]> {
        None
    }

    /// Shared handle to the parameter store, for writing from another
    /// context.
    pub fn param_handle(&self) -> Arc<ParameterSet> {
        Arc::clone(&self.params)
    }

    /// The parameter store.
    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    /// Current channel link.
    pub fn link(&self) -> StereoLink {
        self.link
    }

    /// Change the channel link. Clears filter memory so neither channel
    /// inherits the other's history.
    pub fn set_link(&mut self, link: StereoLink) {
        if self.link != link {
            self.link = link;
            self.clear_memory();
            #[cfg(feature = "tracing")]
            tracing::debug!("set_link: {link:?}");
        }
    }

    /// Filter memory used by `channel` (0 = left, 1 = right).
    pub fn memory(&self, channel: usize) -> &FilterMemory {
        &self.memory[self.link.memory_index(channel)]
    }

    /// The lookup table used by the negative waveshape branch.
    pub fn sine_table(&self) -> &SineTable {
        &self.sine
    }

    fn clear_memory(&mut self) {
        for memory in &mut self.memory {
            memory.reset();
        }
    }
}

impl Default for WarmDrive {
    fn default() -> Self {
        Self::new()
    }
}

impl Effect for WarmDrive {
    /// Mono processing through the left channel's memory.
    fn process(&mut self, input: f32) -> f32 {
        let index = self.link.memory_index(0);
        process_sample(&self.params, &mut self.memory[index], &self.sine, input)
    }

    fn process_interleaved(&mut self, input: &[f32], output: &mut [f32], frames: usize) {
        WarmDrive::process(self, input, output, frames);
    }

    fn reset(&mut self) {
        WarmDrive::reset(self);
    }
}

impl ParameterInfo for WarmDrive {
    fn param_count(&self) -> usize {
        PARAM_COUNT
    }

    fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
        DESCRIPTORS.get(index).copied()
    }

    fn get_param(&self, index: usize) -> i32 {
        self.parameter_value(index)
    }

    fn set_param(&mut self, index: usize, value: i32) {
        self.set_parameter(index, value);
    }
}
