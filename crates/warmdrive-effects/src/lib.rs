//! WarmDrive - a stereo nonlinear shaping effect.
//!
//! Each sample runs through a fixed chain of stages controlled by six
//! integer parameters:
//!
//! | Stage | Parameter | Effect |
//! |-------|-----------|--------|
//! | Clip | Clipping (0) | Pre-gain up to 21x, hard clip at ±1 |
//! | Bass boost | Bass (4) | Two cascaded input-averaging lowpass cells with makeup gain |
//! | High boost | High Boost (5) | Time-accumulator boost |
//! | Drive | Drive (1) | `tanh` with gain up to 6x |
//! | Compress | Compress (2) | Sign-preserving power law |
//! | Waveshape | Shape (3) | Added sine component, table lookup on the negative side |
//! | Saturate | - | Final `tanh`, always on |
//!
//! # Example
//!
//! ```rust
//! use warmdrive_effects::{RuntimeDesc, WarmDrive, params};
//!
//! let mut engine = WarmDrive::new();
//! engine.init(&RuntimeDesc::stereo(48000, 256)).unwrap();
//! engine.set_parameter(params::CLIPPING, 60);
//!
//! let input = vec![0.1_f32; 512];
//! let mut output = vec![0.0_f32; 512];
//! engine.process(&input, &mut output, 256);
//! ```
//!
//! # Features
//!
//! - `std` (default): enables std in `warmdrive-core`
//! - `tracing`: debug logs on init, reset and parameter changes (never per sample)

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod memory;
pub mod params;
pub mod pipeline;
pub mod warm_drive;

pub use error::{InitError, RuntimeDesc};
pub use memory::{FilterMemory, StereoLink};
pub use params::{DESCRIPTORS, PARAM_COUNT, ParameterSet};
pub use pipeline::process_sample;
pub use warm_drive::WarmDrive;
