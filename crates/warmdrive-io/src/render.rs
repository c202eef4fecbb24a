//! Offline rendering of interleaved stereo audio through the engine.

use crate::wav::{WavSpec, read_wav_stereo, write_wav_stereo};
use crate::{Error, Result};
use std::path::Path;
use warmdrive_effects::{RuntimeDesc, WarmDrive};

/// Frames per engine call when none is given.
pub const DEFAULT_BLOCK_FRAMES: usize = 512;

/// How a file is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Frames handed to the engine per call.
    pub block_frames: usize,
    /// Output bit depth (16, 24 or 32).
    pub bit_depth: u16,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            block_frames: DEFAULT_BLOCK_FRAMES,
            bit_depth: 32,
        }
    }
}

/// Summary of a finished render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderReport {
    /// Stereo frames written.
    pub frames: usize,
    /// Sample rate of input and output.
    pub sample_rate: u32,
    /// Channel count of the input file.
    pub input_channels: u16,
    /// Largest absolute output sample.
    pub peak: f32,
}

/// Render an interleaved stereo buffer through `engine`.
///
/// The buffer is fed in blocks of `block_frames` frames (the last block may
/// be shorter). `on_block` receives the frame count of each block after it
/// is processed. A trailing odd sample is left at zero.
pub fn render_buffer(
    engine: &mut WarmDrive,
    input: &[f32],
    block_frames: usize,
    mut on_block: impl FnMut(usize),
) -> Vec<f32> {
    let mut output = vec![0.0; input.len()];
    let block_len = block_frames.max(1) * 2;
    let len = input.len() & !1;

    for (in_chunk, out_chunk) in input[..len]
        .chunks(block_len)
        .zip(output[..len].chunks_mut(block_len))
    {
        let frames = in_chunk.len() / 2;
        engine.process(in_chunk, out_chunk, frames);
        on_block(frames);
    }

    output
}

/// Read `input`, render it through `engine` and write the result to
/// `output` as stereo.
///
/// The engine is initialized for the file's sample rate first, which clears
/// its filter memory. Parameters are left as the caller set them.
pub fn render_file<P: AsRef<Path>, Q: AsRef<Path>>(
    engine: &mut WarmDrive,
    input: P,
    output: Q,
    options: &RenderOptions,
    on_block: impl FnMut(usize),
) -> Result<RenderReport> {
    if !matches!(options.bit_depth, 16 | 24 | 32) {
        return Err(Error::UnsupportedBitDepth(options.bit_depth));
    }

    let (samples, in_spec) = read_wav_stereo(input.as_ref())?;
    let block_frames = options.block_frames.max(1);
    let desc = RuntimeDesc::stereo(
        in_spec.sample_rate,
        u32::try_from(block_frames).unwrap_or(u32::MAX),
    );
    engine.init(&desc)?;

    tracing::info!(
        input = %input.as_ref().display(),
        frames = samples.len() / 2,
        block_frames,
        link = ?engine.link(),
        "rendering"
    );

    let rendered = render_buffer(engine, &samples, block_frames, on_block);
    let peak = rendered.iter().fold(0.0f32, |m, &s| m.max(s.abs()));

    let out_spec = WavSpec {
        channels: 2,
        sample_rate: in_spec.sample_rate,
        bits_per_sample: options.bit_depth,
    };
    write_wav_stereo(output.as_ref(), &rendered, out_spec)?;

    tracing::info!(output = %output.as_ref().display(), peak, "render complete");

    Ok(RenderReport {
        frames: rendered.len() / 2,
        sample_rate: in_spec.sample_rate,
        input_channels: in_spec.channels,
        peak,
    })
}
