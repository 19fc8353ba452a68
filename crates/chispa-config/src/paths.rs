//! Platform-specific paths for user presets.
//!
//! # Directory Structure
//!
//! - Linux: `~/.config/chispa/presets/`
//! - macOS: `~/Library/Application Support/chispa/presets/`
//! - Windows: `%APPDATA%\chispa\presets\`

use std::path::{Path, PathBuf};

/// Application name used for directory paths.
const APP_NAME: &str = "chispa";

/// Subdirectory name for presets.
const PRESETS_SUBDIR: &str = "presets";

/// Extensions recognized as preset files, in lookup order.
const PRESET_EXTENSIONS: &[&str] = &["toml", "json"];

/// Returns the user-specific presets directory.
///
/// Falls back to `./chispa/presets` if the config directory cannot be
/// determined.
pub fn user_presets_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
        .join(PRESETS_SUBDIR)
}

/// Ensure the user presets directory exists.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_user_presets_dir() -> Result<PathBuf, crate::ConfigError> {
    let dir = user_presets_dir();

    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| crate::ConfigError::create_dir(&dir, e))?;
        tracing::debug!(dir = %dir.display(), "created user presets directory");
    }

    Ok(dir)
}

/// Find a preset file by name.
///
/// The name can be a path to an existing file, or a preset name looked up in
/// the user presets directory (with or without a `.toml` / `.json`
/// extension).
pub fn find_preset_file(name: &str) -> Option<PathBuf> {
    let path = PathBuf::from(name);
    if path.is_file() {
        return Some(path);
    }
    find_in_dir(&user_presets_dir(), name)
}

/// Look up `name` in `dir`, trying the bare name and then each preset extension.
fn find_in_dir(dir: &Path, name: &str) -> Option<PathBuf> {
    if name.is_empty() {
        return None;
    }
    let exact = dir.join(name);
    if has_preset_extension(&exact) && exact.is_file() {
        return Some(exact);
    }
    PRESET_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{name}.{ext}")))
        .find(|candidate| candidate.is_file())
}

fn has_preset_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| PRESET_EXTENSIONS.contains(&ext))
}

/// List all preset files in the user presets directory, sorted by path.
///
/// Returns an empty vector if the directory doesn't exist or can't be read.
pub fn list_user_presets() -> Vec<PathBuf> {
    list_presets_in_dir(&user_presets_dir())
}

fn list_presets_in_dir(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut presets: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && has_preset_extension(path))
        .collect();
    presets.sort();
    presets
}

/// Get the preset name from a file path (the file stem).
///
/// ```rust
/// use chispa_config::paths::preset_name_from_path;
/// use std::path::Path;
///
/// let name = preset_name_from_path(Path::new("/path/to/big_boom.toml"));
/// assert_eq!(name, Some("big_boom".to_string()));
/// ```
pub fn preset_name_from_path(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}
