//! WarmDrive Core - DSP primitives for nonlinear shaping effects
//!
//! This crate provides the building blocks the WarmDrive engine is assembled
//! from, designed for real-time audio processing with zero allocation in the
//! audio path.
//!
//! # Core Abstractions
//!
//! ## Effect System
//!
//! - [`Effect`] - Object-safe trait for mono sample processing, with block and
//!   interleaved-stereo helpers
//!
//! ## Parameters
//!
//! - [`ParameterInfo`] - Integer-valued parameter introspection
//! - [`ParamDescriptor`] - Name, unit, integer domain and default of one parameter
//! - [`ParamText`] - Fixed-capacity text buffer for parameter display strings
//!
//! ## Shaping Primitives
//!
//! - [`SineTable`] - 4096-entry periodic sine lookup with linear interpolation
//! - [`BoostCell`] - Input-averaging one-pole lowpass used for tonal boosting
//! - Math functions: [`hard_clip`], [`soft_clip`], [`power_compress`], [`lerp`]
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible for embedded audio applications.
//! Disable the default `std` feature in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! warmdrive-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Design Principles
//!
//! - **Real-time safe**: No allocations in audio processing paths
//! - **No dependencies on std**: Pure `no_std` with `libm` for math
//! - **Object-safe traits**: Dynamic dispatch when needed

#![cfg_attr(not(feature = "std"), no_std)]

pub mod boost;
pub mod effect;
pub mod math;
pub mod param_info;
pub mod sine_table;

// Re-export main types at crate root
pub use boost::BoostCell;
pub use effect::Effect;
pub use math::{hard_clip, lerp, power_compress, soft_clip};
pub use param_info::{ParamDescriptor, ParamId, ParamText, ParamUnit, ParameterInfo};
pub use sine_table::{SINE_TABLE_SIZE, SineTable};
