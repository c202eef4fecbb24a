//! The per-sample shaping chain.
//!
//! Stages run in a fixed order, each feeding the next:
//!
//! ```text
//! clip → bass boost → high boost → drive → compress → waveshape → tanh
//! ```
//!
//! Every stage except the final saturation is an exact identity when its
//! control is zero. The final `tanh` always runs, so the output of
//! [`process_sample`] is bounded by 1 in magnitude.
//!
//! Non-finite input is not guarded against and propagates.

use crate::memory::FilterMemory;
use crate::params::ParameterSet;
use libm::{sinf, tanhf};
use warmdrive_core::{SineTable, hard_clip, power_compress, soft_clip};

/// Run one sample through the whole chain.
///
/// `memory` is the filter memory of the channel being processed; it is
/// updated by the boost stages.
#[inline]
pub fn process_sample(
    params: &ParameterSet,
    memory: &mut FilterMemory,
    sine: &SineTable,
    input: f32,
) -> f32 {
    let mut out = clip(input, params.scaled_clipping());
    out = memory.bass_boost(out, params.bass_boost());
    out = memory.high_boost(out, params.high_boost());
    out = drive(out, params.drive());
    out = compress(out, params.compress());
    out = waveshape(out, params.waveshape(), sine);
    soft_clip(out)
}

/// Pre-gain then hard clip at ±1: `clamp(x + x · gain, -1, 1)`.
#[inline]
pub fn clip(input: f32, scaled_clipping: f32) -> f32 {
    if scaled_clipping == 0.0 {
        return input;
    }
    hard_clip(input + input * scaled_clipping, 1.0)
}

/// `tanh(x · (1 + 5 · drive))`.
#[inline]
pub fn drive(input: f32, drive: f32) -> f32 {
    if drive == 0.0 {
        return input;
    }
    tanhf(input * (1.0 + drive * 5.0))
}

/// Sign-preserving power law with exponent `1 − 0.8 · compress`.
#[inline]
pub fn compress(input: f32, compress: f32) -> f32 {
    if compress == 0.0 {
        return input;
    }
    power_compress(input, 1.0 - compress * 0.8)
}

/// Add a sine-shaped component.
///
/// Positive amounts add `2 · amount · sin(x)` computed directly; negative
/// amounts add `|amount| · lookup(x)` through the periodic table, whose
/// argument is in cycles rather than radians. The two sides are
/// deliberately different curves.
#[inline]
pub fn waveshape(input: f32, amount: f32, sine: &SineTable) -> f32 {
    if amount > 0.0 {
        input + amount * sinf(input) * 2.0
    } else if amount < 0.0 {
        input + (-amount) * sine.lookup(input)
    } else {
        input
    }
}
