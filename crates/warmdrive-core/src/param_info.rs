//! Parameter introspection for integer-valued effect controls.
//!
//! Hosts talk to effects in integers: each control has a declared integer
//! domain (`0..=100` percent, `-100..=100` bipolar), and the effect maps
//! those integers onto its internal normalized values. This module provides
//! the [`ParameterInfo`] trait for that exchange and [`ParamDescriptor`] for
//! the metadata a host needs to present a control.
//!
//! # Design
//!
//! - Access is index-based. Indices are stable for the lifetime of an effect
//!   instance and double as the host's parameter ids.
//! - Effects do **not** validate values passed to
//!   [`ParameterInfo::set_param`]. A host that wants validation checks
//!   [`ParamDescriptor::contains`] before forwarding.
//! - Display strings are formatted into a [`ParamText`] stack buffer, so
//!   nothing here allocates.
//!
//! # Example
//!
//! ```rust
//! use warmdrive_core::{ParameterInfo, ParamDescriptor, ParamId};
//!
//! struct Level {
//!     level: f32,
//! }
//!
//! impl ParameterInfo for Level {
//!     fn param_count(&self) -> usize { 1 }
//!
//!     fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
//!         match index {
//!             0 => Some(ParamDescriptor::percent("Level", "Level", 100)
//!                 .with_id(ParamId(9), "level")),
//!             _ => None,
//!         }
//!     }
//!
//!     fn get_param(&self, index: usize) -> i32 {
//!         match index {
//!             0 => (self.level * 100.0) as i32,
//!             _ => 0,
//!         }
//!     }
//!
//!     fn set_param(&mut self, index: usize, value: i32) {
//!         if index == 0 {
//!             self.level = value as f32 / 100.0;
//!         }
//!     }
//! }
//!
//! let mut level = Level { level: 1.0 };
//! level.set_param(0, 40);
//! assert_eq!(level.get_param(0), 40);
//! assert_eq!(level.find_param_by_name("LEVEL"), Some(0));
//! ```

use core::fmt;

/// Stable parameter identifier.
///
/// Once assigned, a `ParamId` must never change for a given parameter; hosts
/// store it in automation and session data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParamId(pub u32);

/// Unit type for parameter display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamUnit {
    /// Percentage (%).
    Percent,
    /// No unit - dimensionless or custom controls.
    None,
}

impl ParamUnit {
    /// Returns the unit suffix string for display.
    ///
    /// ```rust
    /// use warmdrive_core::ParamUnit;
    ///
    /// assert_eq!(ParamUnit::Percent.suffix(), "%");
    /// assert_eq!(ParamUnit::None.suffix(), "");
    /// ```
    pub const fn suffix(&self) -> &'static str {
        match self {
            ParamUnit::Percent => "%",
            ParamUnit::None => "",
        }
    }
}

/// Trait for effects that expose integer-valued parameters.
///
/// # Thread Safety
///
/// This trait does not require thread safety. Each control is a single
/// scalar written by one writer; a host that writes from a control thread
/// while another thread processes audio accepts that a change may land
/// mid-buffer.
pub trait ParameterInfo {
    /// Number of parameters. Valid indices are `0..param_count()`.
    fn param_count(&self) -> usize;

    /// Descriptor for the parameter at `index`, or `None` if out of range.
    fn param_info(&self, index: usize) -> Option<ParamDescriptor>;

    /// Current integer value of the parameter at `index`.
    ///
    /// Returns `0` for unknown indices.
    fn get_param(&self, index: usize) -> i32;

    /// Set the parameter at `index` from its integer value.
    ///
    /// Unknown indices are ignored. Values are not range-checked.
    fn set_param(&mut self, index: usize, value: i32);

    /// Find a parameter index by name (case-insensitive).
    ///
    /// Matches [`ParamDescriptor::name`], [`ParamDescriptor::short_name`]
    /// and [`ParamDescriptor::string_id`].
    fn find_param_by_name(&self, name: &str) -> Option<usize> {
        (0..self.param_count()).find(|&i| {
            self.param_info(i).is_some_and(|desc| {
                desc.name.eq_ignore_ascii_case(name)
                    || desc.short_name.eq_ignore_ascii_case(name)
                    || desc.string_id.eq_ignore_ascii_case(name)
            })
        })
    }

    /// Finds a parameter index by its stable [`ParamId`].
    ///
    /// Scans all parameters (O(n)); suitable for setup paths, not audio.
    fn param_index_by_id(&self, id: ParamId) -> Option<usize> {
        (0..self.param_count()).find(|&i| self.param_info(i).is_some_and(|d| d.id == id))
    }

    /// Apply every descriptor's default value.
    fn apply_defaults(&mut self) {
        for i in 0..self.param_count() {
            if let Some(desc) = self.param_info(i) {
                self.set_param(i, desc.default);
            }
        }
    }
}

/// Describes a single parameter's metadata for display and validation.
///
/// # Short Name
///
/// `short_name` should be 8 characters or less so it fits hardware
/// displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamDescriptor {
    /// Full parameter name for display (e.g., "Clipping").
    pub name: &'static str,

    /// Short name for hardware displays, max 8 characters.
    pub short_name: &'static str,

    /// Unit type for formatting the parameter value.
    pub unit: ParamUnit,

    /// Minimum declared integer value.
    pub min: i32,

    /// Maximum declared integer value.
    pub max: i32,

    /// Detent/center position for bipolar display.
    pub center: i32,

    /// Value applied when the effect is constructed.
    pub default: i32,

    /// Stable numeric ID. Default: `ParamId(0)` (unassigned).
    pub id: ParamId,

    /// Human-readable stable ID, e.g. `"wd_drive"`. Default: `""`.
    pub string_id: &'static str,
}

impl ParamDescriptor {
    /// Percent parameter over `0..=100`, center 0.
    pub const fn percent(name: &'static str, short_name: &'static str, default: i32) -> Self {
        Self {
            name,
            short_name,
            unit: ParamUnit::Percent,
            min: 0,
            max: 100,
            center: 0,
            default,
            id: ParamId(0),
            string_id: "",
        }
    }

    /// Unitless bipolar parameter over `-100..=100`.
    pub const fn bipolar(
        name: &'static str,
        short_name: &'static str,
        center: i32,
        default: i32,
    ) -> Self {
        Self {
            name,
            short_name,
            unit: ParamUnit::None,
            min: -100,
            max: 100,
            center,
            default,
            id: ParamId(0),
            string_id: "",
        }
    }

    /// Sets the stable parameter ID and string ID.
    ///
    /// ```rust
    /// use warmdrive_core::{ParamDescriptor, ParamId};
    ///
    /// let desc = ParamDescriptor::percent("Drive", "Drive", 20).with_id(ParamId(1), "wd_drive");
    /// assert_eq!(desc.id, ParamId(1));
    /// assert_eq!(desc.string_id, "wd_drive");
    /// ```
    pub const fn with_id(mut self, id: ParamId, string_id: &'static str) -> Self {
        self.id = id;
        self.string_id = string_id;
        self
    }

    /// Sets the center position.
    pub const fn with_center(mut self, center: i32) -> Self {
        self.center = center;
        self
    }

    /// Whether `value` lies inside the declared domain.
    #[inline]
    pub const fn contains(&self, value: i32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamps a value to the declared domain.
    #[inline]
    pub fn clamp(&self, value: i32) -> i32 {
        value.clamp(self.min, self.max)
    }
}

/// Capacity of a [`ParamText`] in bytes.
pub const PARAM_TEXT_CAPACITY: usize = 16;

/// Fixed-capacity text buffer for parameter display strings.
///
/// Implements [`fmt::Write`]; output that does not fit is truncated at a
/// character boundary and the write reports [`fmt::Error`].
///
/// ```rust
/// use core::fmt::Write;
/// use warmdrive_core::ParamText;
///
/// let mut text = ParamText::new();
/// write!(text, "{}%", 42).unwrap();
/// assert_eq!(text.as_str(), "42%");
/// ```
#[derive(Clone, Copy)]
pub struct ParamText {
    buf: [u8; PARAM_TEXT_CAPACITY],
    len: usize,
}

impl ParamText {
    /// Empty buffer.
    pub const fn new() -> Self {
        Self {
            buf: [0; PARAM_TEXT_CAPACITY],
            len: 0,
        }
    }

    /// Discard the contents.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Contents as a string slice.
    pub fn as_str(&self) -> &str {
        // Only whole UTF-8 sequences are ever copied in
        core::str::from_utf8(&self.buf[..self.len]).unwrap_or("")
    }
}

impl Default for ParamText {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Write for ParamText {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let room = PARAM_TEXT_CAPACITY - self.len;
        if s.len() <= room {
            self.buf[self.len..self.len + s.len()].copy_from_slice(s.as_bytes());
            self.len += s.len();
            return Ok(());
        }
        let mut cut = room;
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        self.buf[self.len..self.len + cut].copy_from_slice(&s.as_bytes()[..cut]);
        self.len += cut;
        Err(fmt::Error)
    }
}

impl fmt::Debug for ParamText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ParamText").field(&self.as_str()).finish()
    }
}

impl fmt::Display for ParamText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Write;

    struct TestEffect {
        amount: f32,
        tilt: f32,
    }

    impl ParameterInfo for TestEffect {
        fn param_count(&self) -> usize {
            2
        }

        fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
            match index {
                0 => Some(
                    ParamDescriptor::percent("Amount", "Amt", 30).with_id(ParamId(10), "t_amount"),
                ),
                1 => Some(ParamDescriptor::bipolar("Tilt", "Tilt", 0, -20).with_id(ParamId(11), "t_tilt")),
                _ => None,
            }
        }

        fn get_param(&self, index: usize) -> i32 {
            match index {
                0 => (self.amount * 100.0) as i32,
                1 => (self.tilt * 100.0) as i32,
                _ => 0,
            }
        }

        fn set_param(&mut self, index: usize, value: i32) {
            match index {
                0 => self.amount = value as f32 / 100.0,
                1 => self.tilt = value as f32 / 100.0,
                _ => {}
            }
        }
    }

    fn effect() -> TestEffect {
        TestEffect {
            amount: 0.0,
            tilt: 0.0,
        }
    }

    #[test]
    fn test_param_info() {
        let e = effect();
        assert_eq!(e.param_count(), 2);
        let amount = e.param_info(0).expect("should have amount param");
        assert_eq!(amount.unit, ParamUnit::Percent);
        assert_eq!((amount.min, amount.max), (0, 100));
        let tilt = e.param_info(1).expect("should have tilt param");
        assert_eq!((tilt.min, tilt.max), (-100, 100));
        assert!(e.param_info(2).is_none());
    }

    #[test]
    fn test_find_param_by_name() {
        let e = effect();
        assert_eq!(e.find_param_by_name("amount"), Some(0));
        assert_eq!(e.find_param_by_name("AMT"), Some(0));
        assert_eq!(e.find_param_by_name("t_tilt"), Some(1));
        assert_eq!(e.find_param_by_name("nope"), None);
    }

    #[test]
    fn test_param_index_by_id() {
        let e = effect();
        assert_eq!(e.param_index_by_id(ParamId(11)), Some(1));
        assert_eq!(e.param_index_by_id(ParamId(99)), None);
    }

    #[test]
    fn test_apply_defaults() {
        let mut e = effect();
        e.apply_defaults();
        assert_eq!(e.get_param(0), 30);
        assert_eq!(e.get_param(1), -20);
    }

    #[test]
    fn test_unknown_index() {
        let mut e = effect();
        e.set_param(7, 50);
        assert_eq!(e.get_param(7), 0);
        assert_eq!(e.get_param(0), 0);
    }

    #[test]
    fn test_contains_and_clamp() {
        let desc = ParamDescriptor::bipolar("Tilt", "Tilt", 0, 0);
        assert!(desc.contains(-100));
        assert!(desc.contains(100));
        assert!(!desc.contains(101));
        assert_eq!(desc.clamp(-150), -100);
        assert_eq!(desc.clamp(42), 42);
    }

    #[test]
    fn test_param_text_truncates() {
        let mut text = ParamText::new();
        assert!(write!(text, "{}", "0123456789abcdefXYZ").is_err());
        assert_eq!(text.as_str(), "0123456789abcdef");
        text.clear();
        write!(text, "{}%", -100).unwrap();
        assert_eq!(text.as_str(), "-100%");
    }

    #[test]
    fn test_param_text_respects_char_boundary() {
        let mut text = ParamText::new();
        write!(text, "{}", "aaaaaaaaaaaaaaa").unwrap();
        assert!(write!(text, "é").is_err());
        assert_eq!(text.as_str(), "aaaaaaaaaaaaaaa");
    }
}
