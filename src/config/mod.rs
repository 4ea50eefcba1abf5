pub mod persist;
mod types;

pub use persist::{save_settings, update_flag};
pub use types::*;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Config file locations searched when none is given, in order.
pub const DEFAULT_PATHS: [&str; 2] = ["./mediaext.toml", "~/.config/mediaext/config.toml"];

/// Load settings from a TOML file
pub fn load_settings(path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let mut settings: Settings = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    expand_vault(&mut settings);
    validate_settings(&settings);

    Ok(settings)
}

/// Load settings from default locations or return the defaults
pub fn load_settings_or_default(custom_path: Option<&Path>) -> Result<Settings> {
    if let Some(path) = custom_path {
        return load_settings(path);
    }

    match find_settings_file() {
        Some(path) => load_settings(&path),
        None => Ok(Settings::default()),
    }
}

/// First existing file among [`DEFAULT_PATHS`]
pub fn find_settings_file() -> Option<PathBuf> {
    DEFAULT_PATHS
        .iter()
        .map(|path| PathBuf::from(shellexpand::tilde(path).as_ref()))
        .find(|path| path.exists())
}

fn expand_vault(settings: &mut Settings) {
    if let Some(vault) = settings.vault.take() {
        let expanded = shellexpand::tilde(&vault.to_string_lossy()).into_owned();
        settings.vault = Some(PathBuf::from(expanded));
    }
}

fn validate_settings(settings: &Settings) {
    if let Some(vault) = &settings.vault {
        if !vault.is_dir() {
            tracing::warn!("Vault directory does not exist: {:?}", vault);
        }
    }
}
