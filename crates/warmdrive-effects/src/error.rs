//! Host runtime description and initialization errors.

use thiserror::Error;

/// What the host tells the engine when it starts processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeDesc {
    /// Sample rate in Hz. The shaping chain is rate-independent.
    pub sample_rate: u32,
    /// Maximum frames per processing call.
    pub frames_per_buffer: u32,
    /// Input channel count.
    pub input_channels: u8,
    /// Output channel count.
    pub output_channels: u8,
}

impl RuntimeDesc {
    /// Stereo in, stereo out.
    pub const fn stereo(sample_rate: u32, frames_per_buffer: u32) -> Self {
        Self {
            sample_rate,
            frames_per_buffer,
            input_channels: 2,
            output_channels: 2,
        }
    }

    /// Whether the layout is the one the engine supports.
    pub const fn is_stereo(&self) -> bool {
        self.input_channels == 2 && self.output_channels == 2
    }
}

/// Why [`WarmDrive::init`](crate::WarmDrive::init) refused a runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InitError {
    /// Only 2-in / 2-out is supported.
    #[error("unsupported channel layout: {input} in / {output} out (expected 2 / 2)")]
    ChannelLayout {
        /// Requested input channels.
        input: u8,
        /// Requested output channels.
        output: u8,
    },
}
