//! WAV file I/O and offline rendering for WarmDrive.
//!
//! This crate provides:
//!
//! - **WAV file I/O**: [`read_wav_stereo`] and [`write_wav_stereo`] load and
//!   save interleaved stereo buffers (mono files are duplicated to both
//!   channels)
//! - **Offline rendering**: [`render_buffer`] and [`render_file`] run audio
//!   through a [`WarmDrive`](warmdrive_effects::WarmDrive) engine block by block
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use warmdrive_effects::{WarmDrive, params};
//! use warmdrive_io::{RenderOptions, render_file};
//!
//! let mut engine = WarmDrive::new();
//! engine.set_parameter(params::DRIVE, 60);
//! let report = render_file(&mut engine, "in.wav", "out.wav", &RenderOptions::default(), |_| {})?;
//! println!("rendered {} frames", report.frames);
//! ```

mod render;
mod wav;

pub use render::{DEFAULT_BLOCK_FRAMES, RenderOptions, RenderReport, render_buffer, render_file};
pub use wav::{WavFormat, WavInfo, WavSpec, read_wav_info, read_wav_stereo, write_wav_stereo};

/// Error types for audio I/O and rendering.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV file read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// Input has more channels than the stereo engine can take.
    #[error("Unsupported channel count: {0} (expected 1 or 2)")]
    UnsupportedChannels(u16),

    /// Output bit depth is not one of 16, 24 or 32.
    #[error("Unsupported bit depth: {0} (expected 16, 24 or 32)")]
    UnsupportedBitDepth(u16),

    /// The engine refused the runtime description.
    #[error("Engine init failed: {0}")]
    Init(#[from] warmdrive_effects::InitError),
}

/// Convenience result type for audio I/O operations.
pub type Result<T> = std::result::Result<T, Error>;
