use crate::picker::DurationPicker;
use crate::picker::PickerOptions;
use crate::picker::labels::{EnglishStrings, TableResolver};
use crate::picker::layout::{Font, MonospaceMeasure};
use crate::picker::unit::{Unit, UnitsStyle, validate_row_count};
use crate::picker::wheels::MemoryWheels;
use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PickerConfig {
    #[serde(default = "default_units")]
    pub units: Vec<Unit>,
    #[serde(default)]
    pub loops: bool,
    #[serde(default)]
    pub units_style: UnitsStyle,
    /// Row count overrides; units left out keep their defaults.
    #[serde(default)]
    pub rows: BTreeMap<Unit, i64>,
    #[serde(default)]
    pub font: FontConfig,
    /// Localization overrides, e.g. `"hours-full-plural" = "Stunden"`.
    #[serde(default)]
    pub strings: BTreeMap<String, String>,
}

fn default_units() -> Vec<Unit> {
    vec![Unit::Hours, Unit::Minutes, Unit::Seconds]
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            units: default_units(),
            loops: false,
            units_style: UnitsStyle::Full,
            rows: BTreeMap::new(),
            font: FontConfig::default(),
            strings: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FontConfig {
    #[serde(default = "default_family")]
    pub family: String,
    #[serde(default = "default_size")]
    pub size: f64,
    /// Separate size for the numbers; defaults to `size`.
    pub number_size: Option<f64>,
}

fn default_family() -> String {
    "system".to_string()
}

fn default_size() -> f64 {
    17.0
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: default_family(),
            size: default_size(),
            number_size: None,
        }
    }
}

impl FontConfig {
    pub fn validate(&self) -> Result<()> {
        if self.size <= 0.0 || self.size.is_nan() {
            anyhow::bail!("Font size must be greater than 0, got {}", self.size);
        }
        if let Some(size) = self.number_size.filter(|s| *s <= 0.0 || s.is_nan()) {
            anyhow::bail!("Number font size must be greater than 0, got {}", size);
        }
        Ok(())
    }

    pub fn text_font(&self) -> Font {
        Font::new(self.family.clone(), self.size)
    }

    pub fn number_font(&self) -> Font {
        Font::new(self.family.clone(), self.number_size.unwrap_or(self.size))
    }
}

impl PickerConfig {
    /// Validate all configuration
    pub fn validate(&self) -> Result<()> {
        if self.units.is_empty() {
            anyhow::bail!("At least one unit must be configured");
        }
        let mut seen = HashSet::new();
        for unit in &self.units {
            if !seen.insert(unit) {
                anyhow::bail!("Unit '{}' is listed more than once", unit);
            }
        }
        for (unit, count) in &self.rows {
            if !self.units.contains(unit) {
                anyhow::bail!("Row count given for '{}', which is not an active unit", unit);
            }
            validate_row_count(*unit, *count)?;
        }
        self.font.validate()?;
        Ok(())
    }

    pub fn options(&self) -> PickerOptions {
        PickerOptions {
            units: self.units.clone(),
            rows: self.rows.iter().map(|(u, c)| (*u, *c)).collect(),
            loops: self.loops,
            units_style: self.units_style,
            number_font: self.font.number_font(),
            text_font: self.font.text_font(),
        }
    }

    /// Headless picker built from this configuration.
    pub fn build(&self) -> Result<DurationPicker> {
        self.validate()?;
        let table: HashMap<String, String> = self.strings.clone().into_iter().collect();
        let picker = DurationPicker::with_parts(
            self.options(),
            MemoryWheels::new(),
            Box::new(TableResolver::new(table, EnglishStrings)),
            Box::new(MonospaceMeasure),
        )
        .context("Failed to build picker from config")?;
        Ok(picker)
    }
}

pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<PickerConfig> {
    let loader = ConfigBuilder::builder()
        .add_source(File::from(path.as_ref()).format(FileFormat::Toml))
        .build()
        .context("Failed to build config loader")?;

    let config: PickerConfig = loader
        .try_deserialize()
        .context("Failed to parse config file")?;

    config.validate()?;
    Ok(config)
}

pub fn default_path() -> Result<PathBuf> {
    let config_dir = home::home_dir()
        .context("Could not find home directory")?
        .join(".duration-picker");
    Ok(config_dir.join("config.toml"))
}

/// Load `~/.duration-picker/config.toml`, or defaults when it is absent.
pub fn load() -> Result<PickerConfig> {
    let path = default_path()?;
    if !path.exists() {
        log::debug!("no config at {}, using defaults", path.display());
        return Ok(PickerConfig::default());
    }
    load_from_path(&path)
}

pub fn save_to_path<P: AsRef<Path>>(config: &PickerConfig, path: P) -> Result<()> {
    let toml_string = toml::to_string_pretty(config).context("Failed to serialize config")?;

    std::fs::write(path.as_ref(), toml_string).context("Failed to write config file")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = PickerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.font.number_font(), Font::new("system", 17.0));
    }

    #[test]
    fn test_rows_for_inactive_unit_rejected() {
        let mut config = PickerConfig::default();
        config.rows.insert(Unit::Days, 30);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("not an active unit"));
    }

    #[test]
    fn test_number_size_override() {
        let font = FontConfig {
            family: "mono".to_string(),
            size: 12.0,
            number_size: Some(20.0),
        };
        assert_eq!(font.text_font().size, 12.0);
        assert_eq!(font.number_font().size, 20.0);
    }

    #[test]
    fn test_build_uses_string_overrides() {
        let mut config = PickerConfig::default();
        config
            .strings
            .insert("hours-full-plural".to_string(), "Stunden".to_string());
        let picker = config.build().unwrap();
        assert_eq!(picker.labels()[0], "Stunden");
    }
}
