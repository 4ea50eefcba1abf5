//! Settings persistence using toml_edit to preserve formatting and comments.

use super::Settings;
use anyhow::{Context, Result};
use std::path::Path;
use toml_edit::{value, DocumentMut};

/// Write the full settings to a TOML file, replacing its contents
pub fn save_settings(path: &Path, settings: &Settings) -> Result<()> {
    let content =
        toml::to_string_pretty(settings).with_context(|| "Failed to serialize settings")?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
    }

    std::fs::write(path, content)
        .with_context(|| format!("Failed to write config file: {:?}", path))?;

    Ok(())
}

/// Update a single boolean switch, keeping the rest of the file untouched.
///
/// A missing file is created.
pub fn update_flag(path: &Path, name: &str, enabled: bool) -> Result<()> {
    if !super::FLAG_NAMES.contains(&name) {
        anyhow::bail!(
            "Unknown setting '{}' (expected one of: {})",
            name,
            super::FLAG_NAMES.join(", ")
        );
    }

    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read config file: {:?}", path))
        }
    };

    let mut doc: DocumentMut = content
        .parse()
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;
    doc[name] = value(enabled);

    std::fs::write(path, doc.to_string())
        .with_context(|| format!("Failed to write config file: {:?}", path))?;

    Ok(())
}
