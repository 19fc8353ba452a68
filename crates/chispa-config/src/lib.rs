//! Sound presets for the Chispa sound-effect synthesizer.
//!
//! A preset is a named [`SynthParams`] stored as TOML (or JSON). This crate
//! loads and saves them, ships a set of factory presets, locates user presets
//! on disk and sanity-checks parameter values.
//!
//! # Features
//!
//! - **Preset files**: [`SoundPreset::load`] / [`SoundPreset::save`], format
//!   picked by extension
//! - **Factory presets**: classic arcade sounds always available by name
//! - **Paths**: platform-specific user preset directory
//! - **Validation**: flag values outside the editor ranges of
//!   [`chispa_synth::PARAMS`]
//!
//! # Example
//!
//! ```rust,no_run
//! use chispa_config::{SoundPreset, load_preset, user_presets_dir};
//!
//! // Factory name, user preset name or file path
//! let laser = load_preset("laser").unwrap();
//!
//! let mut louder = laser.clone().with_param("amplification", 1.5).unwrap();
//! louder.name = "Loud Laser".to_string();
//! louder.save(user_presets_dir().join("loud_laser.toml")).unwrap();
//! ```

mod error;
mod preset;

/// Platform-specific paths for presets.
pub mod paths;

/// Parameter validation.
pub mod validation;

/// Factory presets bundled with the library.
pub mod factory_presets;

pub use chispa_synth::{SynthParams, WaveType};
pub use error::ConfigError;
pub use factory_presets::{
    FACTORY_PRESET_NAMES, factory_preset_names, factory_presets, get_factory_preset,
    is_factory_preset,
};
pub use paths::{
    ensure_user_presets_dir, find_preset_file, list_user_presets, preset_name_from_path,
    user_presets_dir,
};
pub use preset::{PresetFormat, SoundPreset};
pub use validation::{ValidationError, ValidationResult, check_params, validate_params};

/// Resolve a preset by factory name, user preset name, or file path, in that
/// order.
///
/// # Errors
///
/// [`ConfigError::PresetNotFound`] if nothing matches; read or parse errors
/// from the file otherwise.
pub fn load_preset(name: &str) -> Result<SoundPreset, ConfigError> {
    if let Some(preset) = get_factory_preset(name) {
        tracing::debug!(name, "using factory preset");
        return Ok(preset);
    }
    match find_preset_file(name) {
        Some(path) => SoundPreset::load(path),
        None => Err(ConfigError::PresetNotFound(name.to_string())),
    }
}
