//! Configuration file support for airtype.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/airtype/config.toml`. Settings include frame geometry, detector
//! thresholds, gesture stabilisation and the keyboard's appearance.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{
    CameraConfig, DetectorConfig, GestureConfig, KeyboardConfig, OverlayConfig, TextPanelConfig,
};

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [camera]
/// width = 1280
/// height = 720
/// mirror = true
///
/// [detector]
/// min_detection_confidence = 0.8
///
/// [gesture]
/// stabilize_frames = 1
///
/// [keyboard]
/// key_color = [64, 64, 64]
/// highlight_color = [128, 128, 128]
/// label_color = "white"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Frame geometry
    #[serde(default)]
    pub camera: CameraConfig,

    /// Hand detector thresholds
    #[serde(default)]
    pub detector: DetectorConfig,

    /// Click gesture tuning
    #[serde(default)]
    pub gesture: GestureConfig,

    /// Key colors and fonts
    #[serde(default)]
    pub keyboard: KeyboardConfig,

    /// Typed-text panel appearance
    #[serde(default)]
    pub text_panel: TextPanelConfig,

    /// Landmark dots drawn over the hand
    #[serde(default)]
    pub overlay: OverlayConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `camera.width`: 320 - 4096, `camera.height`: 240 - 4096
    /// - `detector.min_detection_confidence`: 0.0 - 1.0
    /// - `detector.max_hands`: 1 - 4
    /// - `gesture.stabilize_frames`: 1 - 10
    /// - font sizes: 8.0 - 96.0
    /// - `overlay.landmark_radius`: 1 - 20
    pub fn validate_and_clamp(&mut self) {
        if !(320..=4096).contains(&self.camera.width) {
            log::warn!(
                "Invalid camera width {}, clamping to 320-4096 range",
                self.camera.width
            );
            self.camera.width = self.camera.width.clamp(320, 4096);
        }

        if !(240..=4096).contains(&self.camera.height) {
            log::warn!(
                "Invalid camera height {}, clamping to 240-4096 range",
                self.camera.height
            );
            self.camera.height = self.camera.height.clamp(240, 4096);
        }

        let confidence = self.detector.min_detection_confidence;
        if !(0.0..=1.0).contains(&confidence) {
            log::warn!(
                "Invalid min_detection_confidence {:.2}, clamping to 0.0-1.0 range",
                confidence
            );
            // NaN fails every comparison; fall back to the default threshold
            self.detector.min_detection_confidence = if confidence.is_nan() {
                0.8
            } else {
                confidence.clamp(0.0, 1.0)
            };
        }

        if !(1..=4).contains(&self.detector.max_hands) {
            log::warn!(
                "Invalid max_hands {}, clamping to 1-4 range",
                self.detector.max_hands
            );
            self.detector.max_hands = self.detector.max_hands.clamp(1, 4);
        }

        if !(1..=10).contains(&self.gesture.stabilize_frames) {
            log::warn!(
                "Invalid stabilize_frames {}, clamping to 1-10 range",
                self.gesture.stabilize_frames
            );
            self.gesture.stabilize_frames = self.gesture.stabilize_frames.clamp(1, 10);
        }

        if !(8.0..=96.0).contains(&self.keyboard.label_font_size) {
            log::warn!(
                "Invalid label_font_size {:.1}, clamping to 8.0-96.0 range",
                self.keyboard.label_font_size
            );
            self.keyboard.label_font_size = clamp_font_size(self.keyboard.label_font_size);
        }

        if !(8.0..=96.0).contains(&self.text_panel.font_size) {
            log::warn!(
                "Invalid text_panel font_size {:.1}, clamping to 8.0-96.0 range",
                self.text_panel.font_size
            );
            self.text_panel.font_size = clamp_font_size(self.text_panel.font_size);
        }

        if !(1..=20).contains(&self.overlay.landmark_radius) {
            log::warn!(
                "Invalid landmark_radius {}, clamping to 1-20 range",
                self.overlay.landmark_radius
            );
            self.overlay.landmark_radius = self.overlay.landmark_radius.clamp(1, 20);
        }

        // Validate font weight is reasonable
        let valid_weight = matches!(
            self.keyboard.font_weight.to_lowercase().as_str(),
            "normal" | "bold" | "light" | "ultralight" | "heavy" | "ultrabold"
        ) || self
            .keyboard
            .font_weight
            .parse::<u32>()
            .is_ok_and(|w| (100..=900).contains(&w));

        if !valid_weight {
            log::warn!(
                "Invalid font_weight '{}', falling back to 'bold'",
                self.keyboard.font_weight
            );
            self.keyboard.font_weight = "bold".to_string();
        }

        if !matches!(
            self.keyboard.font_style.to_lowercase().as_str(),
            "normal" | "italic" | "oblique"
        ) {
            log::warn!(
                "Invalid font_style '{}', falling back to 'normal'",
                self.keyboard.font_style
            );
            self.keyboard.font_style = "normal".to_string();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/airtype/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("airtype");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path. The file must exist.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config = Self::from_toml_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses TOML without validation.
    pub fn from_toml_str(config_str: &str) -> Result<Self> {
        Ok(toml::from_str(config_str)?)
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the example config from `config.example.toml` to the user's config directory
    /// and returns the path written.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        fs::write(&config_path, EXAMPLE_CONFIG)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> Result<String> {
        let schema = schemars::schema_for!(Config);
        serde_json::to_string_pretty(&schema).context("Failed to serialize config schema")
    }
}

/// Clamps a font size to 8.0-96.0; NaN falls back to the default 40.0.
fn clamp_font_size(size: f64) -> f64 {
    if size.is_nan() {
        40.0
    } else {
        size.clamp(8.0, 96.0)
    }
}

/// Documented example configuration shipped with the binary.
pub const EXAMPLE_CONFIG: &str = include_str!("../../config.example.toml");
