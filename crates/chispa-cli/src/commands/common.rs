//! Shared CLI helpers used across multiple commands.

use anyhow::Context;
use chispa_config::{ConfigError, SoundPreset, WaveType, check_params};
use chispa_synth::SynthParams;
use clap::Args;

/// Parse a `name=value` parameter override for clap's `value_parser`.
pub fn parse_key_val(s: &str) -> Result<(String, f32), String> {
    let Some((name, value)) = s.split_once('=') else {
        return Err(format!(
            "Invalid parameter format: '{}' (expected name=value)",
            s
        ));
    };
    let value = value
        .trim()
        .parse::<f32>()
        .map_err(|e| format!("Invalid value for '{}': {}", name, e))?;
    Ok((name.trim().to_string(), value))
}

/// Parse a wave type name for clap's `value_parser`.
pub fn parse_wave(s: &str) -> Result<WaveType, String> {
    WaveType::from_name(s).map_err(|e| format!("{} (see 'chispa waves')", e))
}

/// Load a preset by factory name, user preset name or file path.
pub fn load_preset(name: &str) -> anyhow::Result<SoundPreset> {
    match chispa_config::load_preset(name) {
        Ok(preset) => Ok(preset),
        Err(ConfigError::PresetNotFound(_)) => anyhow::bail!(
            "Preset '{}' not found. Use 'chispa presets list' to see available presets.",
            name
        ),
        Err(e) => Err(e).with_context(|| format!("Failed to load preset '{}'", name)),
    }
}

/// Options that describe a sound: a base preset plus overrides.
#[derive(Args, Debug)]
pub struct SoundArgs {
    /// Base preset (factory name, user preset name or file path)
    #[arg(short, long, default_value = "blip")]
    pub preset: String,

    /// Override the wave type (see 'chispa waves')
    #[arg(short, long, value_parser = parse_wave)]
    pub wave: Option<WaveType>,

    /// Override a parameter, e.g. --set frequency=440 (see 'chispa params')
    #[arg(short = 's', long = "set", value_name = "NAME=VALUE", value_parser = parse_key_val)]
    pub set: Vec<(String, f32)>,

    /// Override the sample rate in Hz
    #[arg(long)]
    pub sample_rate: Option<u32>,

    /// Peak-normalize before amplification
    #[arg(long)]
    pub normalize: bool,
}

impl SoundArgs {
    /// Resolve the base preset and apply every override in order.
    pub fn build_preset(&self) -> anyhow::Result<SoundPreset> {
        let mut preset = load_preset(&self.preset)?;

        if let Some(wave) = self.wave {
            preset.params.wave_type = wave;
        }
        for (name, value) in &self.set {
            preset
                .params
                .set_param(name, *value)
                .with_context(|| format!("Invalid override {}={}", name, value))?;
        }
        if let Some(rate) = self.sample_rate {
            preset.params.samples_per_second = rate;
        }
        if self.normalize {
            preset.params.normalization = true;
        }

        tracing::debug!(preset = %preset.name, overrides = self.set.len(), "built sound");
        Ok(preset)
    }
}

/// Log every validation problem as a warning. Returns the number found.
pub fn warn_on_validation(params: &SynthParams) -> usize {
    let problems = check_params(params);
    for problem in &problems {
        tracing::warn!("{}", problem);
    }
    problems.len()
}
