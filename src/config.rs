use std::{collections::BTreeMap, env, fs, path::{Path, PathBuf}};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Environment variable consulted when no `--config` flag is given.
pub const CONFIG_ENV: &str = "COUNTYPRICE_CONFIG";

/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "countyprice.toml";

/// Top-level configuration, read from `countyprice.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub artifacts: ArtifactPaths,
    pub inputs: InputSettings,
    pub map: MapSettings,
}

/// Where the three artifacts live. Names are relative to `root`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtifactPaths {
    pub root: PathBuf,
    pub cleaned: String,
    pub geo: String,
    pub model: String,
    /// Optional sha256 digests keyed by artifact name (e.g. "model.json").
    pub checksums: BTreeMap<String, String>,
}

impl Default for ArtifactPaths {
    fn default() -> Self {
        Self {
            root: PathBuf::from("data"),
            cleaned: "processed/housing_clean.parquet".into(),
            geo: "processed/gdf_counties.parquet".into(),
            model: "models/model.json".into(),
            checksums: BTreeMap::new(),
        }
    }
}

/// Bounds and defaults of the user inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    pub default_age: f64,
    pub income_min: f64,
    pub income_max: f64,
    pub income_step: f64,
    pub income_default: f64,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            default_age: 10.0,
            income_min: 5.0,
            income_max: 100.0,
            income_step: 5.0,
            income_default: 45.0,
        }
    }
}

/// Map canvas and layer styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapSettings {
    pub width: u32,
    pub height: u32,
    pub zoom: f64,
    pub base_fill: String,
    pub base_opacity: f64,
    pub base_stroke: String,
    pub highlight_fill: String,
    pub highlight_opacity: f64,
    pub highlight_stroke: String,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 700,
            zoom: 5.0,
            base_fill: "#1f77b4".into(),
            base_opacity: 0.25,
            base_stroke: "#374151".into(),
            highlight_fill: "#d62728".into(),
            highlight_opacity: 0.7,
            highlight_stroke: "#7f1d1d".into(),
        }
    }
}

impl Config {
    /// Parse a TOML document. Missing sections and keys fall back to defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Config = toml::from_str(text)
            .context("[config] Failed to parse TOML configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Read a config file. A relative `artifacts.root` is resolved against the
    /// directory holding the file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("[config] Failed to read {}", path.display()))?;
        let mut config = Self::from_toml_str(&text)
            .with_context(|| format!("[config] Invalid configuration in {}", path.display()))?;

        if config.artifacts.root.is_relative() {
            if let Some(dir) = path.parent() {
                config.artifacts.root = dir.join(&config.artifacts.root);
            }
        }
        Ok(config)
    }

    /// Resolve the configuration: explicit path, then `COUNTYPRICE_CONFIG`, then
    /// `./countyprice.toml`, then built-in defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            debug!("[config] using --config {}", path.display());
            return Self::from_file(path);
        }

        if let Ok(path) = env::var(CONFIG_ENV) {
            debug!("[config] using {CONFIG_ENV}={path}");
            return Self::from_file(Path::new(&path));
        }

        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            debug!("[config] using ./{DEFAULT_CONFIG_FILE}");
            return Self::from_file(local);
        }

        debug!("[config] no config file found, using defaults");
        Ok(Self::default())
    }

    /// Reject settings no input could ever satisfy.
    pub fn validate(&self) -> Result<()> {
        let inputs = &self.inputs;
        if !(inputs.income_step > 0.0) {
            bail!("[config] inputs.income_step must be positive, got {}", inputs.income_step);
        }
        if !(inputs.income_min < inputs.income_max) {
            bail!("[config] inputs.income_min ({}) must be below inputs.income_max ({})",
                inputs.income_min, inputs.income_max);
        }
        if inputs.income_default < inputs.income_min || inputs.income_default > inputs.income_max {
            bail!("[config] inputs.income_default ({}) is outside [{}, {}]",
                inputs.income_default, inputs.income_min, inputs.income_max);
        }
        if self.map.width == 0 || self.map.height == 0 {
            bail!("[config] map.width and map.height must be non-zero");
        }
        if !self.map.zoom.is_finite() {
            bail!("[config] map.zoom must be finite");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config = Config::from_toml_str(r##"
            [artifacts]
            model = "models/ridge.json"

            [artifacts.checksums]
            "models/ridge.json" = "abc123"

            [map]
            zoom = 7.5
        "##).unwrap();

        assert_eq!(config.artifacts.model, "models/ridge.json");
        assert_eq!(config.artifacts.cleaned, ArtifactPaths::default().cleaned);
        assert_eq!(config.artifacts.checksums.get("models/ridge.json").map(String::as_str), Some("abc123"));
        assert_eq!(config.map.zoom, 7.5);
        assert_eq!(config.map.width, 1000);
        assert_eq!(config.inputs, InputSettings::default());
    }

    #[test]
    fn rejects_inverted_income_range() {
        let err = Config::from_toml_str("[inputs]\nincome_min = 50.0\nincome_max = 10.0\nincome_default = 20.0\n");
        assert!(err.is_err());
    }

    #[test]
    fn rejects_zero_step() {
        assert!(Config::from_toml_str("[inputs]\nincome_step = 0.0\n").is_err());
    }

    #[test]
    fn relative_root_is_resolved_against_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("countyprice.toml");
        fs::write(&path, "[artifacts]\nroot = \"artifacts\"\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.artifacts.root, dir.path().join("artifacts"));
    }

    #[test]
    fn explicit_path_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "[map]\nwidth = 640\n").unwrap();

        let config = Config::resolve(Some(&path)).unwrap();
        assert_eq!(config.map.width, 640);
    }
}
