//! The six WarmDrive controls and their integer mapping.
//!
//! Hosts exchange parameter values as integers in each control's declared
//! domain. [`ParameterSet`] turns those into normalized values:
//!
//! | id | control | domain | normalized |
//! |----|---------|--------|------------|
//! | 0 | clipping | 0..=100 | `v/100`, derived `scaled = n² · 20` |
//! | 1 | drive | 0..=100 | `v/100` |
//! | 2 | compress | 0..=100 | `v/100` |
//! | 3 | waveshape | -100..=100 | `2 · v/100 − 1` |
//! | 4 | bass boost | 0..=100 | `v/100` |
//! | 5 | high boost | 0..=100 | `v/100` |
//!
//! Reading back truncates toward zero (`(n · 100) as i32`, waveshape
//! `((n + 1) · 50) as i32`), so a value can come back one lower than it
//! went in.
//!
//! Each control is a single `f32` stored as bits in an [`AtomicU32`] with
//! relaxed ordering: one thread may write controls while another processes
//! audio. A write is seen by the audio thread at some sample boundary, never
//! torn. The derived clip gain is stored right after its source control; the
//! pipeline only ever reads the derived value.

use core::sync::atomic::{AtomicU32, Ordering};
use warmdrive_core::{ParamDescriptor, ParamId};

/// Clipping amount.
pub const CLIPPING: usize = 0;
/// Drive amount.
pub const DRIVE: usize = 1;
/// Compression amount.
pub const COMPRESS: usize = 2;
/// Bipolar waveshape amount.
pub const WAVESHAPE: usize = 3;
/// Bass boost amount.
pub const BASS_BOOST: usize = 4;
/// High boost amount.
pub const HIGH_BOOST: usize = 5;

/// Number of controls.
pub const PARAM_COUNT: usize = 6;

/// Descriptor table, id-ordered.
///
/// Shape's default and center sit at 50, the integer that normalizes to a
/// neutral (zero) waveshape.
pub const DESCRIPTORS: [ParamDescriptor; PARAM_COUNT] = [
    ParamDescriptor::percent("Clipping", "Clipping", 0).with_id(ParamId(0), "wd_clipping"),
    ParamDescriptor::percent("Drive", "Drive", 20)
        .with_center(50)
        .with_id(ParamId(1), "wd_drive"),
    ParamDescriptor::percent("Compress", "Compress", 0).with_id(ParamId(2), "wd_compress"),
    ParamDescriptor::bipolar("Shape", "Shape", 50, 50).with_id(ParamId(3), "wd_shape"),
    ParamDescriptor::percent("Bass", "Bass", 0).with_id(ParamId(4), "wd_bass"),
    ParamDescriptor::percent("High Boost", "HighBst", 0).with_id(ParamId(5), "wd_high_boost"),
];

/// Lock-free `f32` cell.
#[derive(Debug)]
struct Control(AtomicU32);

impl Control {
    const fn zero() -> Self {
        // 0.0f32 has an all-zero bit pattern
        Self(AtomicU32::new(0))
    }

    #[inline]
    fn get(&self) -> f32 {
        f32::from_bits(self.0.load(Ordering::Relaxed))
    }

    #[inline]
    fn set(&self, value: f32) {
        self.0.store(value.to_bits(), Ordering::Relaxed);
    }
}

/// Normalized control values.
///
/// All fields start at zero; [`WarmDrive`](crate::WarmDrive) applies the
/// descriptor defaults on construction.
#[derive(Debug)]
pub struct ParameterSet {
    clipping: Control,
    scaled_clipping: Control,
    drive: Control,
    compress: Control,
    waveshape: Control,
    bass_boost: Control,
    high_boost: Control,
}

impl ParameterSet {
    /// All controls at zero.
    pub const fn new() -> Self {
        Self {
            clipping: Control::zero(),
            scaled_clipping: Control::zero(),
            drive: Control::zero(),
            compress: Control::zero(),
            waveshape: Control::zero(),
            bass_boost: Control::zero(),
            high_boost: Control::zero(),
        }
    }

    /// Map an integer onto control `id`. Unknown ids are ignored; values
    /// are not range-checked.
    pub fn set(&self, id: usize, value: i32) {
        let pct = value as f32 / 100.0;
        match id {
            CLIPPING => {
                self.clipping.set(pct);
                self.scaled_clipping.set(pct * pct * 20.0);
            }
            DRIVE => self.drive.set(pct),
            COMPRESS => self.compress.set(pct),
            WAVESHAPE => self.waveshape.set(pct * 2.0 - 1.0),
            BASS_BOOST => self.bass_boost.set(pct),
            HIGH_BOOST => self.high_boost.set(pct),
            _ => {}
        }
    }

    /// Inverse mapping back to an integer; `0` for unknown ids.
    pub fn get(&self, id: usize) -> i32 {
        match id {
            CLIPPING => (self.clipping() * 100.0) as i32,
            DRIVE => (self.drive() * 100.0) as i32,
            COMPRESS => (self.compress() * 100.0) as i32,
            WAVESHAPE => ((self.waveshape() + 1.0) * 50.0) as i32,
            BASS_BOOST => (self.bass_boost() * 100.0) as i32,
            HIGH_BOOST => (self.high_boost() * 100.0) as i32,
            _ => 0,
        }
    }

    /// Clipping amount, nominally `[0, 1]`.
    #[inline]
    pub fn clipping(&self) -> f32 {
        self.clipping.get()
    }

    /// Clip pre-gain `clipping² · 20`.
    #[inline]
    pub fn scaled_clipping(&self) -> f32 {
        self.scaled_clipping.get()
    }

    /// Drive amount, nominally `[0, 1]`.
    #[inline]
    pub fn drive(&self) -> f32 {
        self.drive.get()
    }

    /// Compression amount, nominally `[0, 1]`.
    #[inline]
    pub fn compress(&self) -> f32 {
        self.compress.get()
    }

    /// Waveshape amount, nominally `[-1, 1]`; zero is neutral.
    #[inline]
    pub fn waveshape(&self) -> f32 {
        self.waveshape.get()
    }

    /// Bass boost amount, nominally `[0, 1]`.
    #[inline]
    pub fn bass_boost(&self) -> f32 {
        self.bass_boost.get()
    }

    /// High boost amount, nominally `[0, 1]`.
    #[inline]
    pub fn high_boost(&self) -> f32 {
        self.high_boost.get()
    }
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clipping_updates_derived_gain() {
        let params = ParameterSet::new();
        params.set(CLIPPING, 100);
        assert_eq!(params.clipping(), 1.0);
        assert_eq!(params.scaled_clipping(), 20.0);
        params.set(CLIPPING, 50);
        assert!((params.scaled_clipping() - 5.0).abs() < 1e-6);
        params.set(CLIPPING, 0);
        assert_eq!(params.scaled_clipping(), 0.0);
    }

    #[test]
    fn waveshape_mapping() {
        let params = ParameterSet::new();
        params.set(WAVESHAPE, 50);
        assert_eq!(params.waveshape(), 0.0);
        params.set(WAVESHAPE, 0);
        assert_eq!(params.waveshape(), -1.0);
        params.set(WAVESHAPE, 100);
        assert_eq!(params.waveshape(), 1.0);
        params.set(WAVESHAPE, -100);
        assert_eq!(params.waveshape(), -3.0);
        assert_eq!(params.get(WAVESHAPE), -100);
    }

    #[test]
    fn unit_controls_round_trip() {
        let params = ParameterSet::new();
        for id in [CLIPPING, DRIVE, COMPRESS, BASS_BOOST, HIGH_BOOST] {
            for v in 0..=100 {
                params.set(id, v);
                let got = params.get(id);
                assert!((got - v).abs() <= 1, "id {id}: set {v}, got {got}");
            }
        }
    }

    #[test]
    fn unknown_ids() {
        let params = ParameterSet::new();
        params.set(DRIVE, 40);
        params.set(6, 99);
        params.set(usize::MAX, 99);
        assert_eq!(params.get(6), 0);
        assert_eq!(params.get(DRIVE), 40);
    }

    #[test]
    fn out_of_domain_is_not_clamped() {
        let params = ParameterSet::new();
        params.set(COMPRESS, 250);
        assert_eq!(params.compress(), 2.5);
    }

    #[test]
    fn descriptor_table_is_id_ordered() {
        for (i, desc) in DESCRIPTORS.iter().enumerate() {
            assert_eq!(desc.id, ParamId(i as u32));
            assert!(desc.short_name.len() <= 8, "{} short name too long", desc.name);
            assert!(desc.contains(desc.default));
        }
        assert_eq!(DESCRIPTORS[DRIVE].default, 20);
        assert_eq!((DESCRIPTORS[WAVESHAPE].min, DESCRIPTORS[WAVESHAPE].max), (-100, 100));
    }
}
