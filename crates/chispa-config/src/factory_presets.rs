//! Factory presets bundled with the library.
//!
//! Classic arcade effects that are always available without external files.
//! They double as starting points for new sounds.

use crate::SoundPreset;

/// Array of factory preset names for external access.
pub static FACTORY_PRESET_NAMES: &[&str] = &[
    "blip",
    "jump",
    "laser",
    "pickup",
    "powerup",
    "explosion",
    "hit",
    "siren",
];

/// TOML content for factory presets, embedded at compile time.
static FACTORY_PRESETS_TOML: &[(&str, &str)] = &[
    ("blip", BLIP_PRESET),
    ("jump", JUMP_PRESET),
    ("laser", LASER_PRESET),
    ("pickup", PICKUP_PRESET),
    ("powerup", POWERUP_PRESET),
    ("explosion", EXPLOSION_PRESET),
    ("hit", HIT_PRESET),
    ("siren", SIREN_PRESET),
];

const BLIP_PRESET: &str = r#"
name = "Blip"
description = "Short sawtooth blip with an upward jump"

[params]
wave = "sawtooth"
frequency = 200.0
sustain = 0.04
decay = 0.14
frequencyJump1Amount = 60.0
"#;

const JUMP_PRESET: &str = r#"
name = "Jump"
description = "Rising square sweep"

[params]
wave = "square"
frequency = 280.0
frequencySweep = 520.0
sustain = 0.06
decay = 0.2
sustainPunch = 20.0
amplification = 0.6
"#;

const LASER_PRESET: &str = r#"
name = "Laser"
description = "Falling sawtooth zap"

[params]
wave = "sawtooth"
frequency = 1200.0
frequencySweep = -900.0
frequencyDeltaSweep = -150.0
sustain = 0.05
decay = 0.18
amplification = 0.7
"#;

const PICKUP_PRESET: &str = r#"
name = "Pickup"
description = "Coin pickup with a two-step arpeggio"

[params]
wave = "square"
frequency = 900.0
sustain = 0.04
decay = 0.22
sustainPunch = 45.0
frequencyJump1Onset = 25.0
frequencyJump1Amount = 50.0
amplification = 0.6
"#;

const POWERUP_PRESET: &str = r#"
name = "Power Up"
description = "Repeating upward triangle sweep with harmonics"

[params]
wave = "triangle"
frequency = 300.0
frequencySweep = 600.0
repeatFrequency = 7.0
sustain = 0.35
decay = 0.25
harmonics = 2
harmonicsFalloff = 0.5
"#;

const EXPLOSION_PRESET: &str = r#"
name = "Explosion"
description = "Low interpolated noise burst with a swept flanger"

[params]
wave = "whitenoise"
interpolateNoise = true
frequency = 140.0
frequencySweep = -100.0
sustain = 0.1
decay = 0.6
sustainPunch = 60.0
flangerOffset = 4.0
flangerOffsetSweep = 8.0
normalization = true
amplification = 0.9
"#;

const HIT_PRESET: &str = r#"
name = "Hit"
description = "Short pink-noise thump"

[params]
wave = "pinknoise"
frequency = 800.0
frequencySweep = -600.0
sustain = 0.02
decay = 0.12
sustainPunch = 50.0
normalization = true
amplification = 0.8
"#;

const SIREN_PRESET: &str = r#"
name = "Siren"
description = "Wailing sine with slow vibrato and tremolo"

[params]
wave = "sine"
frequency = 600.0
sustain = 1.0
decay = 0.2
vibratoFrequency = 2.0
vibratoDepth = 300.0
tremoloFrequency = 8.0
tremoloDepth = 20.0
amplification = 0.7
"#;

/// Get all factory presets.
///
/// # Example
///
/// ```rust
/// use chispa_config::factory_presets;
///
/// for preset in factory_presets() {
///     println!("  - {}: {}", preset.name, preset.description.as_deref().unwrap_or(""));
/// }
/// ```
pub fn factory_presets() -> Vec<SoundPreset> {
    FACTORY_PRESETS_TOML
        .iter()
        .filter_map(|(_, toml)| SoundPreset::from_toml(toml).ok())
        .collect()
}

/// Get a factory preset by internal or display name (case-insensitive).
///
/// ```rust
/// use chispa_config::get_factory_preset;
///
/// let preset = get_factory_preset("Power Up").unwrap();
/// assert_eq!(preset.params.harmonics, 2);
/// ```
pub fn get_factory_preset(name: &str) -> Option<SoundPreset> {
    let name_lower = name.to_lowercase();

    for (preset_name, toml) in FACTORY_PRESETS_TOML {
        if preset_name.to_lowercase() == name_lower {
            return SoundPreset::from_toml(toml).ok();
        }
    }

    factory_presets()
        .into_iter()
        .find(|preset| preset.name.to_lowercase() == name_lower)
}

/// Internal names of all factory presets.
pub fn factory_preset_names() -> Vec<&'static str> {
    FACTORY_PRESETS_TOML.iter().map(|(name, _)| *name).collect()
}

/// Whether `name` is the internal name of a factory preset (case-insensitive).
pub fn is_factory_preset(name: &str) -> bool {
    FACTORY_PRESET_NAMES
        .iter()
        .any(|preset_name| preset_name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chispa_synth::WaveType;

    #[test]
    fn test_all_factory_presets_parse() {
        for (name, toml) in FACTORY_PRESETS_TOML {
            let result = SoundPreset::from_toml(toml);
            assert!(result.is_ok(), "factory preset '{name}' should parse: {result:?}");

            let preset = result.unwrap();
            assert!(!preset.name.is_empty(), "preset '{name}' should have a name");
            assert!(preset.description.is_some(), "preset '{name}' should have a description");
            assert!(preset.params.duration() > 0.0, "preset '{name}' should make a sound");
        }
        assert_eq!(factory_presets().len(), FACTORY_PRESET_NAMES.len());
    }

    #[test]
    fn test_names_match_table() {
        assert_eq!(factory_preset_names(), FACTORY_PRESET_NAMES.to_vec());
    }

    #[test]
    fn test_all_factory_presets_validate() {
        for preset in factory_presets() {
            assert!(preset.validate().is_ok(), "{}: {:?}", preset.name, preset.validate());
        }
    }

    #[test]
    fn test_get_factory_preset() {
        let preset = get_factory_preset("laser").expect("laser should exist");
        assert_eq!(preset.name, "Laser");

        let preset = get_factory_preset("EXPLOSION").expect("EXPLOSION should exist");
        assert_eq!(preset.params.wave_type, WaveType::WhiteNoise);
        assert!(preset.params.interpolate_noise);

        assert!(get_factory_preset("nonexistent").is_none());
    }

    #[test]
    fn test_blip_is_reference_sound() {
        let blip = get_factory_preset("blip").unwrap();
        assert_eq!(blip.params.wave_type, WaveType::Sawtooth);
        assert_eq!(blip.params.sample_count(), 3969);
    }

    #[test]
    fn test_is_factory_preset() {
        assert!(is_factory_preset("siren"));
        assert!(is_factory_preset("Hit"));
        assert!(!is_factory_preset("Power Up"));
        assert!(!is_factory_preset("my_sound"));
    }
}
