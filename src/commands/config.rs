use crate::config::{PickerConfig, save_to_path};
use anyhow::{Context, Result};
use std::path::Path;

pub fn list(config: &PickerConfig) -> Result<()> {
    let toml_str = toml::to_string_pretty(config).context("Failed to serialize config")?;
    println!("{}", toml_str);
    Ok(())
}

/// Look up a value by dotted path, e.g. `font.size` or `rows.hours`.
pub fn lookup(key: &str, config: &PickerConfig) -> Result<serde_json::Value> {
    let value = serde_json::to_value(config).context("Failed to serialize config")?;

    let mut current = &value;
    for part in key.split('.') {
        current = current
            .get(part)
            .with_context(|| format!("Key not found: {}", part))?;
    }
    Ok(current.clone())
}

pub fn get(key: &str, config: &PickerConfig) -> Result<()> {
    match lookup(key, config)? {
        serde_json::Value::String(s) => println!("{}", s),
        v => println!("{}", v),
    }
    Ok(())
}

/// Write the default configuration to `path`, refusing to clobber.
pub fn init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists; pass --force to overwrite",
            path.display()
        );
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    save_to_path(&PickerConfig::default(), path)?;
    println!("✓ Wrote default config to {}", path.display());
    Ok(())
}
