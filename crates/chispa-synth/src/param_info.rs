//! Name-addressable metadata for the numeric fields of [`SynthParams`].
//!
//! Editors, preset tooling and the command line address parameters by the
//! camelCase names in [`PARAMS`] (`frequencyJump1Amount`, `sustainPunch`, ...).
//! Each [`ParamEntry`] carries a display unit, a suggested editing range and a
//! getter/setter pair, so tools never need to know the struct layout.
//!
//! Ranges are hints for UIs and sanity checks. [`SynthParams::set_param`]
//! stores whatever it is given.
//!
//! # Example
//!
//! ```rust
//! use chispa_synth::{SynthParams, find_param};
//!
//! let mut params = SynthParams::default();
//! params.set_param("frequency", 440.0).unwrap();
//! assert_eq!(params.frequency, 440.0);
//!
//! let entry = find_param("frequency").unwrap();
//! assert_eq!(entry.unit.suffix(), " Hz");
//! assert!(params.set_param("cutoff", 1.0).is_err());
//! ```

use alloc::string::ToString;

use crate::error::SynthError;
use crate::params::SynthParams;

/// Unit of measurement for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamUnit {
    /// Seconds (s) - envelope segment lengths.
    Seconds,
    /// Hertz (Hz) - frequencies, sweep terms and modulation rates.
    Hertz,
    /// Milliseconds (ms) - flanger delay.
    Milliseconds,
    /// Percentage (%) - jumps, tremolo depth, punch.
    Percent,
    /// No unit - gains, counts and ratios.
    None,
}

impl ParamUnit {
    /// Returns the unit suffix string for display.
    pub const fn suffix(&self) -> &'static str {
        match self {
            ParamUnit::Seconds => " s",
            ParamUnit::Hertz => " Hz",
            ParamUnit::Milliseconds => " ms",
            ParamUnit::Percent => "%",
            ParamUnit::None => "",
        }
    }
}

/// One addressable parameter.
#[derive(Clone, Copy)]
pub struct ParamEntry {
    /// Stable camelCase name used in files and on the command line.
    pub name: &'static str,
    /// Short human-readable description.
    pub description: &'static str,
    /// Display unit.
    pub unit: ParamUnit,
    /// Suggested minimum.
    pub min: f32,
    /// Suggested maximum.
    pub max: f32,
    /// Read the value from a parameter set.
    pub get: fn(&SynthParams) -> f32,
    /// Write the value into a parameter set.
    pub set: fn(&mut SynthParams, f32),
}

impl ParamEntry {
    /// Whether `value` lies within the suggested range.
    pub fn in_range(&self, value: f32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Clamp `value` into the suggested range.
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }
}

impl core::fmt::Debug for ParamEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ParamEntry")
            .field("name", &self.name)
            .field("unit", &self.unit)
            .field("min", &self.min)
            .field("max", &self.max)
            .finish_non_exhaustive()
    }
}

macro_rules! param {
    ($name:literal, $field:ident, $unit:ident, $min:expr, $max:expr, $desc:literal) => {
        ParamEntry {
            name: $name,
            description: $desc,
            unit: ParamUnit::$unit,
            min: $min,
            max: $max,
            get: |p| p.$field,
            set: |p, v| p.$field = v,
        }
    };
}

/// Every numeric parameter, in editor order.
pub static PARAMS: &[ParamEntry] = &[
    param!("attack", attack, Seconds, 0.0, 5.0, "Attack length"),
    param!("sustain", sustain, Seconds, 0.0, 5.0, "Sustain length"),
    param!("decay", decay, Seconds, 0.0, 5.0, "Decay length"),
    param!("sustainPunch", sustain_punch, Percent, 0.0, 100.0, "Extra level at sustain start"),
    param!("tremoloDepth", tremolo_depth, Percent, 0.0, 100.0, "Tremolo depth"),
    param!("tremoloFrequency", tremolo_frequency, Hertz, 0.0, 100.0, "Tremolo rate"),
    param!("repeatFrequency", repeat_frequency, Hertz, 0.0, 100.0, "Sweep restarts per second"),
    param!("flangerOffset", flanger_offset, Milliseconds, -50.0, 50.0, "Flanger delay"),
    param!("flangerOffsetSweep", flanger_offset_sweep, Milliseconds, -50.0, 50.0, "Flanger delay change over the sound"),
    param!("frequency", frequency, Hertz, 0.0, 8000.0, "Base frequency"),
    param!("frequencySweep", frequency_sweep, Hertz, -8000.0, 8000.0, "Linear sweep per repetition"),
    param!("frequencyDeltaSweep", frequency_delta_sweep, Hertz, -8000.0, 8000.0, "Quadratic sweep per repetition"),
    param!("vibratoFrequency", vibrato_frequency, Hertz, 0.0, 100.0, "Vibrato rate"),
    param!("frequencyJump1Onset", frequency_jump1_onset, Percent, 0.0, 100.0, "Jump 1 position in repetition"),
    param!("frequencyJump1Amount", frequency_jump1_amount, Percent, -100.0, 100.0, "Jump 1 frequency change"),
    param!("frequencyJump2Onset", frequency_jump2_onset, Percent, 0.0, 100.0, "Jump 2 position in repetition"),
    param!("frequencyJump2Amount", frequency_jump2_amount, Percent, -100.0, 100.0, "Jump 2 frequency change"),
    param!("vibratoDepth", vibrato_depth, Hertz, 0.0, 1000.0, "Vibrato depth"),
    param!("amplification", amplification, None, 0.0, 10.0, "Output gain"),
    ParamEntry {
        name: "harmonics",
        description: "Extra harmonic partials",
        unit: ParamUnit::None,
        min: 0.0,
        max: 5.0,
        get: |p| p.harmonics as f32,
        set: |p, v| p.harmonics = v as i32,
    },
    param!("harmonicsFalloff", harmonics_falloff, None, 0.0, 1.0, "Level ratio between partials"),
];

/// Look up a parameter by its exact name.
pub fn find_param(name: &str) -> Option<&'static ParamEntry> {
    PARAMS.iter().find(|entry| entry.name == name)
}

impl SynthParams {
    /// Read a parameter by name.
    pub fn get_param(&self, name: &str) -> Result<f32, SynthError> {
        find_param(name)
            .map(|entry| (entry.get)(self))
            .ok_or_else(|| SynthError::UnknownParam(name.to_string()))
    }

    /// Write a parameter by name. `harmonics` truncates toward zero.
    pub fn set_param(&mut self, name: &str, value: f32) -> Result<(), SynthError> {
        let entry = find_param(name).ok_or_else(|| SynthError::UnknownParam(name.to_string()))?;
        (entry.set)(self, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_unique() {
        for (i, a) in PARAMS.iter().enumerate() {
            for b in &PARAMS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
        assert_eq!(PARAMS.len(), 21);
    }

    #[test]
    fn test_getters_and_setters_agree() {
        for entry in PARAMS {
            let mut params = SynthParams::default();
            (entry.set)(&mut params, 3.0);
            assert_eq!((entry.get)(&params), 3.0, "{}", entry.name);
        }
    }

    #[test]
    fn test_setters_touch_only_their_field() {
        for entry in PARAMS {
            let mut params = SynthParams::default();
            (entry.set)(&mut params, 3.0);
            for other in PARAMS.iter().filter(|o| o.name != entry.name) {
                let default = (other.get)(&SynthParams::default());
                assert_eq!((other.get)(&params), default, "{} leaked into {}", entry.name, other.name);
            }
        }
    }

    #[test]
    fn test_defaults_in_range() {
        let params = SynthParams::default();
        for entry in PARAMS {
            assert!(entry.in_range((entry.get)(&params)), "{}", entry.name);
        }
    }

    #[test]
    fn test_set_param_by_name() {
        let mut params = SynthParams::default();
        params.set_param("frequencyJump1Amount", 60.0).unwrap();
        params.set_param("harmonics", 2.9).unwrap();
        assert_eq!(params.frequency_jump1_amount, 60.0);
        assert_eq!(params.harmonics, 2);
        assert_eq!(params.get_param("harmonics").unwrap(), 2.0);
    }

    #[test]
    fn test_unknown_name() {
        let mut params = SynthParams::default();
        assert_eq!(
            params.set_param("Frequency", 1.0),
            Err(SynthError::UnknownParam("Frequency".into()))
        );
        assert!(params.get_param("").is_err());
        assert!(find_param("frequency_sweep").is_none());
    }

    #[test]
    fn test_out_of_range_values_are_stored() {
        let mut params = SynthParams::default();
        params.set_param("sustainPunch", 400.0).unwrap();
        assert_eq!(params.sustain_punch, 400.0);
        let entry = find_param("sustainPunch").unwrap();
        assert!(!entry.in_range(400.0));
        assert_eq!(entry.clamp(400.0), 100.0);
    }

    #[test]
    fn test_unit_suffix() {
        assert_eq!(ParamUnit::Seconds.suffix(), " s");
        assert_eq!(ParamUnit::Percent.suffix(), "%");
        assert_eq!(ParamUnit::None.suffix(), "");
    }
}
