//! Mathematical utility functions for DSP.
//!
//! All functions are allocation-free and suitable for `no_std`.
//!
//! # Waveshaping / Clipping
//!
//! | Function | Character | Use Case |
//! |----------|-----------|----------|
//! | [`hard_clip`] | Flat tops, harsh | Pre-gain clip stage |
//! | [`soft_clip`] | Smooth, warm | Drive and final saturation |
//! | [`power_compress`] | Sign-preserving `\|x\|^γ` | Dynamic range squash |
//!
//! # Utilities
//!
//! - [`lerp`] - Linear interpolation

use libm::{powf, tanhf};

/// Hard clip to ±threshold range.
///
/// Abrupt limiting that creates flat tops on waveforms. Written as two
/// comparisons rather than [`f32::clamp`] so a `NaN` input passes straight
/// through instead of being compared.
///
/// # Example
/// ```rust
/// use warmdrive_core::hard_clip;
///
/// assert_eq!(hard_clip(2.1, 1.0), 1.0);
/// assert_eq!(hard_clip(-3.0, 1.0), -1.0);
/// assert_eq!(hard_clip(0.25, 1.0), 0.25);
/// ```
#[inline]
pub fn hard_clip(x: f32, threshold: f32) -> f32 {
    if x < -threshold {
        -threshold
    } else if x > threshold {
        threshold
    } else {
        x
    }
}

/// Soft clip using hyperbolic tangent.
///
/// Smooth saturation that approaches ±1 asymptotically. In `f32`, inputs
/// beyond roughly ±9 round to exactly ±1.
#[inline]
pub fn soft_clip(x: f32) -> f32 {
    tanhf(x)
}

/// Sign-preserving power-law compression: `sign(x) * |x|^exponent`.
///
/// With `exponent < 1` quiet samples are lifted relative to loud ones.
/// Zero maps to zero for any positive exponent; the negative branch covers
/// `x <= 0`.
///
/// # Example
/// ```rust
/// use warmdrive_core::power_compress;
///
/// assert!((power_compress(0.25, 0.5) - 0.5).abs() < 1e-6);
/// assert!((power_compress(-0.25, 0.5) + 0.5).abs() < 1e-6);
/// ```
#[inline]
pub fn power_compress(x: f32, exponent: f32) -> f32 {
    if x > 0.0 {
        powf(x, exponent)
    } else {
        -powf(-x, exponent)
    }
}

/// Linear interpolation between `a` and `b`.
///
/// Evaluated as `a * (1 - t) + b * t`, which returns `a` exactly at `t = 0`
/// and `b` exactly at `t = 1`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}
