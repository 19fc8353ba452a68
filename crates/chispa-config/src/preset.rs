//! Preset file format and operations.

use chispa_synth::SynthParams;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::validation::{ValidationResult, validate_params};

/// On-disk encoding of a preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetFormat {
    /// TOML, the default.
    Toml,
    /// JSON, chosen by a `.json` extension.
    Json,
}

impl PresetFormat {
    /// `Json` for `.json` files (any case), `Toml` for everything else.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

/// A named, described set of synthesis parameters.
///
/// # TOML Format
///
/// Parameter keys are the names from [`chispa_synth::PARAMS`] plus `wave`,
/// `normalization`, `samplesPerSecond` and `interpolateNoise`. Missing keys
/// take their defaults; unknown keys and wave names are errors.
///
/// ```toml
/// name = "Blip"
/// description = "Short rising blip"
///
/// [params]
/// wave = "sawtooth"
/// frequency = 200.0
/// sustain = 0.04
/// decay = 0.14
/// frequencyJump1Amount = 60.0
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SoundPreset {
    /// Name of the preset.
    pub name: String,

    /// Optional description of the preset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Synthesis parameters.
    #[serde(default)]
    pub params: SynthParams,
}

impl SoundPreset {
    /// Create a preset with default parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            params: SynthParams::default(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replace all parameters.
    pub fn with_params(mut self, params: SynthParams) -> Self {
        self.params = params;
        self
    }

    /// Set one parameter by its table name.
    pub fn with_param(mut self, name: &str, value: f32) -> Result<Self, ConfigError> {
        self.params.set_param(name, value)?;
        Ok(self)
    }

    /// Check the parameters against their editor ranges.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_params(&self.params)
    }

    /// Load a preset, as JSON if the extension is `.json`, TOML otherwise.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        let preset = match PresetFormat::from_path(path) {
            PresetFormat::Toml => Self::from_toml(&content)?,
            PresetFormat::Json => Self::from_json(&content)?,
        };
        tracing::debug!(path = %path.display(), name = %preset.name, "loaded preset");
        Ok(preset)
    }

    /// Save the preset, creating parent directories as needed. The format
    /// follows the extension as in [`load`](Self::load).
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = match PresetFormat::from_path(path) {
            PresetFormat::Toml => self.to_toml()?,
            PresetFormat::Json => self.to_json()?,
        };
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        tracing::info!(path = %path.display(), name = %self.name, "saved preset");
        Ok(())
    }

    /// Parse a preset from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Convert the preset to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Parse a preset from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Convert the preset to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for SoundPreset {
    fn default() -> Self {
        Self::new("Untitled")
    }
}
