//! Configuration settings for the framed automaton

use crate::automaton::RuleSet;
use crate::render::{FrameStyle, Theme};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    pub canvas: CanvasConfig,
    pub rules: RuleSet,
    pub animation: AnimationConfig,
    pub appearance: AppearanceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    /// Gap between the canvas edge and the frame
    pub margin: u32,
    /// Size of each cell
    pub resolution: u32,
    pub frame_thickness: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Generations computed per host tick
    pub generations_per_tick: usize,
    pub tick_millis: u64,
    /// Stop after this many ticks; run until interrupted when absent
    pub ticks: Option<u64>,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppearanceConfig {
    pub variant: VariantChoice,
    pub frame: FrameChoice,
    /// Theme name; picked at random when absent
    pub theme: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum VariantChoice {
    #[default]
    Random,
    Standard,
    Symmetric,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum FrameChoice {
    #[default]
    Random,
    Straight,
    Ornate,
}

impl FrameChoice {
    pub fn style(self) -> Option<FrameStyle> {
        match self {
            FrameChoice::Random => None,
            FrameChoice::Straight => Some(FrameStyle::Straight),
            FrameChoice::Ornate => Some(FrameStyle::Ornate),
        }
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 700,
            height: 700,
            margin: 25,
            resolution: 10,
            frame_thickness: 10,
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            generations_per_tick: 1,
            tick_millis: 50,
            ticks: None,
            seed: None,
        }
    }
}

impl CanvasConfig {
    /// Width and height of the area inside the margins
    pub fn inner_size(&self) -> (u32, u32) {
        (
            self.width.saturating_sub(self.margin.saturating_mul(2)),
            self.height.saturating_sub(self.margin.saturating_mul(2)),
        )
    }

    /// Grid columns and rows that fit inside the margins
    pub fn grid_dimensions(&self) -> (usize, usize) {
        if self.resolution == 0 {
            return (0, 0);
        }
        let (inner_width, inner_height) = self.inner_size();
        (
            (inner_width / self.resolution) as usize,
            (inner_height / self.resolution) as usize,
        )
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.canvas.resolution == 0 {
            anyhow::bail!("Cell resolution must be positive");
        }

        let (cols, rows) = self.canvas.grid_dimensions();
        if cols == 0 || rows == 0 {
            anyhow::bail!(
                "Canvas {}x{} with margin {} leaves no room for {}px cells",
                self.canvas.width,
                self.canvas.height,
                self.canvas.margin,
                self.canvas.resolution
            );
        }

        if self.animation.generations_per_tick == 0 {
            anyhow::bail!("Generations per tick must be positive");
        }

        if let Some(ref name) = self.appearance.theme {
            Theme::by_name(name)?;
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(seed) = cli_overrides.seed {
            self.animation.seed = Some(seed);
        }
        if let Some(ticks) = cli_overrides.ticks {
            self.animation.ticks = Some(ticks);
        }
        if let Some(generations_per_tick) = cli_overrides.generations_per_tick {
            self.animation.generations_per_tick = generations_per_tick;
        }
        if let Some(rules) = cli_overrides.rules {
            self.rules = rules;
        }
        if let Some(variant) = cli_overrides.variant {
            self.appearance.variant = variant;
        }
        if let Some(frame) = cli_overrides.frame {
            self.appearance.frame = frame;
        }
        if let Some(ref theme) = cli_overrides.theme {
            self.appearance.theme = Some(theme.clone());
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub seed: Option<u64>,
    pub ticks: Option<u64>,
    pub generations_per_tick: Option<usize>,
    pub rules: Option<RuleSet>,
    pub variant: Option<VariantChoice>,
    pub frame: Option<FrameChoice>,
    pub theme: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_grid_dimensions() {
        let settings = Settings::default();
        assert_eq!(settings.canvas.inner_size(), (650, 650));
        assert_eq!(settings.canvas.grid_dimensions(), (65, 65));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_empty_grid() {
        let mut settings = Settings::default();
        settings.canvas.margin = 350;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.canvas.margin = u32::MAX;
        assert_eq!(settings.canvas.inner_size(), (0, 0));
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.canvas.resolution = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.animation.generations_per_tick = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.appearance.theme = Some("plaid".to_string());
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_file_round_trip() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config/default.yaml");

        let mut settings = Settings::default();
        settings.rules = "B36/S23".parse().unwrap();
        settings.animation.seed = Some(9);
        settings.appearance.variant = VariantChoice::Symmetric;
        settings.to_file(&path).unwrap();

        let loaded = Settings::from_file(&path).unwrap();
        assert_eq!(loaded.rules, settings.rules);
        assert_eq!(loaded.animation.seed, Some(9));
        assert_eq!(loaded.appearance.variant, VariantChoice::Symmetric);
    }

    #[test]
    fn test_yaml_shape() {
        let yaml = r#"
canvas:
  width: 120
  height: 80
  margin: 10
  resolution: 5
  frame_thickness: 5
rules:
  birth: [3]
  survival: [2, 3]
animation:
  generations_per_tick: 2
  tick_millis: 16
  ticks: 100
  seed: null
appearance:
  variant: standard
  frame: ornate
  theme: ocean
"#;
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.canvas.grid_dimensions(), (20, 12));
        assert_eq!(settings.appearance.frame.style(), Some(FrameStyle::Ornate));
        assert_eq!(settings.animation.ticks, Some(100));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_cli_overrides() {
        let mut settings = Settings::default();
        let overrides = CliOverrides {
            seed: Some(1),
            generations_per_tick: Some(3),
            rules: Some("B2/S".parse().unwrap()),
            variant: Some(VariantChoice::Standard),
            ..Default::default()
        };
        settings.merge_with_cli(&overrides);

        assert_eq!(settings.animation.seed, Some(1));
        assert_eq!(settings.animation.generations_per_tick, 3);
        assert_eq!(settings.rules.to_string(), "B2/S");
        assert_eq!(settings.appearance.variant, VariantChoice::Standard);
        assert_eq!(settings.appearance.frame, FrameChoice::Random);
    }
}
