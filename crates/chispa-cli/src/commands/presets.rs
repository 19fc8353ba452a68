//! Preset management commands.
//!
//! Provides commands to list, show, save, and manage sound presets.

use super::common::{SoundArgs, load_preset};
use chispa_config::{
    SoundPreset, ensure_user_presets_dir, factory_preset_names, get_factory_preset,
    list_user_presets, paths::preset_name_from_path, user_presets_dir,
};
use chispa_synth::PARAMS;
use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct PresetsArgs {
    #[command(subcommand)]
    command: PresetsCommand,
}

#[derive(Subcommand, Debug)]
enum PresetsCommand {
    /// List available presets (factory and user)
    List {
        /// Show only factory presets
        #[arg(long)]
        factory: bool,

        /// Show only user presets
        #[arg(long)]
        user: bool,
    },

    /// Show details of a preset
    Show {
        /// Preset name or path
        name: String,

        /// Print the preset as TOML
        #[arg(long)]
        toml: bool,
    },

    /// Save a preset built from a base preset and overrides
    Save {
        /// Name for the new preset
        name: String,

        #[command(flatten)]
        sound: SoundArgs,

        /// Description of the preset
        #[arg(short, long)]
        description: Option<String>,

        /// Overwrite an existing preset and skip validation
        #[arg(long)]
        force: bool,
    },

    /// Delete a user preset
    Delete {
        /// Preset name to delete
        name: String,

        /// Confirm deletion
        #[arg(long)]
        force: bool,
    },

    /// Copy a factory preset to user presets for customization
    Copy {
        /// Factory preset name
        source: String,

        /// New preset name (defaults to the source name)
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Show the user preset directory
    Paths,
}

pub fn run(args: PresetsArgs) -> anyhow::Result<()> {
    match args.command {
        PresetsCommand::List { factory, user } => list_presets(factory, user),
        PresetsCommand::Show { name, toml } => show_preset(&name, toml),
        PresetsCommand::Save {
            name,
            sound,
            description,
            force,
        } => save_preset(&name, &sound, description, force),
        PresetsCommand::Delete { name, force } => delete_preset(&name, force),
        PresetsCommand::Copy { source, name } => copy_preset(&source, name.as_deref()),
        PresetsCommand::Paths => show_paths(),
    }
}

fn list_presets(factory_only: bool, user_only: bool) -> anyhow::Result<()> {
    let show_factory = !user_only;
    let show_user = !factory_only;

    if show_factory {
        println!("Factory Presets:");
        println!("================");
        for name in factory_preset_names() {
            let desc = get_factory_preset(name)
                .and_then(|preset| preset.description)
                .unwrap_or_default();
            println!("  {:12} - {}", name, desc);
        }
        println!();
    }

    if show_user {
        println!("User Presets:");
        println!("=============");
        let user_presets = list_user_presets();
        if user_presets.is_empty() {
            println!("  (none)");
            println!();
            println!("  Create a preset with: chispa presets save <name> --preset blip --set ...");
        } else {
            for path in user_presets {
                let name = preset_name_from_path(&path).unwrap_or_else(|| "unknown".to_string());
                match SoundPreset::load(&path) {
                    Ok(preset) => {
                        let desc = preset.description.as_deref().unwrap_or("");
                        println!("  {:12} - {}", name, desc);
                    }
                    Err(e) => {
                        tracing::debug!(path = %path.display(), error = %e, "unreadable preset");
                        println!("  {:12} - (error loading)", name);
                    }
                }
            }
        }
        println!();
    }

    Ok(())
}

fn show_preset(name: &str, as_toml: bool) -> anyhow::Result<()> {
    let preset = load_preset(name)?;

    if as_toml {
        print!("{}", preset.to_toml()?);
        return Ok(());
    }

    println!("Preset: {}", preset.name);
    println!("{}", "=".repeat(8 + preset.name.len()));
    println!();

    if let Some(desc) = &preset.description {
        println!("Description: {}", desc);
        println!();
    }

    let params = &preset.params;
    println!("Wave:          {}", params.wave_type);
    println!("Sample Rate:   {} Hz", params.samples_per_second);
    println!("Normalization: {}", if params.normalization { "on" } else { "off" });
    if params.wave_type.is_noise() {
        println!(
            "Noise:         {}",
            if params.interpolate_noise { "interpolated" } else { "stepped" }
        );
    }
    println!(
        "Length:        {:.3} s ({} samples)",
        params.duration(),
        params.sample_count()
    );
    println!();

    println!("Parameters:");
    for entry in PARAMS {
        let value = (entry.get)(params);
        println!("  {:22} = {}{}", entry.name, value, entry.unit.suffix());
    }

    Ok(())
}

fn save_preset(
    name: &str,
    sound: &SoundArgs,
    description: Option<String>,
    force: bool,
) -> anyhow::Result<()> {
    check_preset_name(name)?;

    let preset_path = user_preset_path(name);
    if preset_path.exists() && !force {
        anyhow::bail!("Preset '{}' already exists. Use --force to overwrite.", name);
    }

    let mut preset = sound.build_preset()?;
    preset.name = name.to_string();
    preset.description = description;

    if let Err(e) = preset.validate() {
        if !force {
            anyhow::bail!("Preset '{}' is not valid: {}. Use --force to save anyway.", name, e);
        }
        tracing::warn!("{}", e);
    }

    ensure_user_presets_dir()?;
    preset.save(&preset_path)?;

    println!("Saved preset '{}' to {}", name, preset_path.display());
    Ok(())
}

fn delete_preset(name: &str, force: bool) -> anyhow::Result<()> {
    if get_factory_preset(name).is_some() {
        anyhow::bail!("Cannot delete factory preset '{}'. Factory presets are built-in.", name);
    }
    check_preset_name(name)?;

    let Some(preset_path) = existing_user_preset(name) else {
        anyhow::bail!("User preset '{}' not found.", name);
    };

    if !force {
        anyhow::bail!("Use --force to confirm deletion of preset '{}'.", name);
    }

    std::fs::remove_file(&preset_path)?;
    println!("Deleted preset '{}'.", name);

    Ok(())
}

fn copy_preset(source: &str, new_name: Option<&str>) -> anyhow::Result<()> {
    let preset = get_factory_preset(source)
        .ok_or_else(|| anyhow::anyhow!("Factory preset '{}' not found.", source))?;

    let target_name = new_name.unwrap_or(source);
    check_preset_name(target_name)?;

    let preset_path = user_preset_path(target_name);
    if preset_path.exists() {
        anyhow::bail!(
            "Preset '{}' already exists in user presets. Choose a different name with --name.",
            target_name
        );
    }

    let mut copy = SoundPreset::new(target_name).with_params(preset.params);
    if let Some(desc) = &preset.description {
        copy = copy.with_description(format!("{} (copy)", desc));
    }

    ensure_user_presets_dir()?;
    copy.save(&preset_path)?;

    println!("Copied factory preset '{}' to user preset '{}'", source, target_name);
    println!("Path: {}", preset_path.display());

    Ok(())
}

fn show_paths() -> anyhow::Result<()> {
    println!("Preset Directories:");
    println!("===================");
    println!();
    println!("User presets: {}", user_presets_dir().display());

    Ok(())
}

fn check_preset_name(name: &str) -> anyhow::Result<()> {
    if name.is_empty() || name.contains(['/', '\\']) || name.starts_with('.') {
        anyhow::bail!("Invalid preset name '{}'", name);
    }
    Ok(())
}

fn user_preset_path(name: &str) -> PathBuf {
    user_presets_dir().join(format!("{}.toml", name))
}

fn existing_user_preset(name: &str) -> Option<PathBuf> {
    let dir = user_presets_dir();
    ["toml", "json"]
        .iter()
        .map(|ext| dir.join(format!("{}.{}", name, ext)))
        .find(|path| path.is_file())
}
