//! Configuration management for the virtual keyboard application

use crate::constants::{
    DEFAULT_CONFIDENCE_THRESHOLD, DEFAULT_FRAME_HEIGHT, DEFAULT_FRAME_WIDTH, DEFAULT_PLOT_PATH,
    DOUBLE_TAP_WINDOW_SECS, KEY_SIZE,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Model configuration
    pub models: ModelConfig,

    /// Hand detection configuration
    pub detection: DetectionConfig,

    /// Keyboard configuration
    pub keyboard: KeyboardConfig,

    /// Display configuration
    pub display: DisplayConfig,

    /// Frequency chart configuration
    pub plot: PlotConfig,
}

/// Model file paths configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Path to hand landmark ONNX model
    pub hand_landmarks: PathBuf,
}

/// Hand detection parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Confidence threshold for hand presence (0.0-1.0)
    pub confidence_threshold: f32,
}

/// Keyboard behavior parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyboardConfig {
    /// Key edge length in pixels
    pub key_size: i32,

    /// Double-tap-to-delete window in seconds
    pub double_tap_window_secs: f64,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Capture width
    pub frame_width: i32,

    /// Capture height
    pub frame_height: i32,

    /// Mirror the image horizontally for selfie view
    pub mirror: bool,

    /// Show the FPS counter
    pub show_fps: bool,
}

/// Frequency chart configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotConfig {
    /// Output path for the bar chart image
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            models: ModelConfig::default(),
            detection: DetectionConfig::default(),
            keyboard: KeyboardConfig::default(),
            display: DisplayConfig::default(),
            plot: PlotConfig::default(),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            hand_landmarks: PathBuf::from("assets/hand_landmarks.onnx"),
        }
    }
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
        }
    }
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            key_size: KEY_SIZE,
            double_tap_window_secs: DOUBLE_TAP_WINDOW_SECS,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            frame_width: DEFAULT_FRAME_WIDTH,
            frame_height: DEFAULT_FRAME_HEIGHT,
            mirror: true,
            show_fps: true,
        }
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_PLOT_PATH),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::IoError(e.to_string()))?;

        serde_yaml::from_str(&content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content).map_err(|e| Error::IoError(e.to_string()))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.detection.confidence_threshold) {
            return Err(Error::ConfigError(
                "Confidence threshold must be between 0.0 and 1.0".to_string(),
            ));
        }

        if self.keyboard.key_size <= 0 {
            return Err(Error::ConfigError("Key size must be greater than 0".to_string()));
        }
        if self.keyboard.double_tap_window_secs <= 0.0 {
            return Err(Error::ConfigError(
                "Double-tap window must be greater than 0".to_string(),
            ));
        }

        if self.display.frame_width <= 0 || self.display.frame_height <= 0 {
            return Err(Error::ConfigError(
                "Frame dimensions must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Virtual Keyboard Configuration

# Model paths
models:
  hand_landmarks: "assets/hand_landmarks.onnx"

# Hand detection parameters
detection:
  confidence_threshold: 0.5

# Keyboard behavior
keyboard:
  key_size: 70
  double_tap_window_secs: 1.0

# Display settings
display:
  frame_width: 1280
  frame_height: 720
  mirror: true
  show_fps: true

# Frequency chart
plot:
  output_path: "key_frequency.png"
"#;
