//! Dial configuration
//!
//! Handles loading, merging and validating the wheel configuration.
//! Partial overrides from the config file are merged over documented
//! defaults via serde field defaults, then validated as a whole.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Ordered color stops for the outer ring, rendered start-to-end around
/// the gradient axis. Each stop is linear RGBA in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingGradient {
    pub colors: Vec<[f32; 4]>,
}

impl Default for RingGradient {
    fn default() -> Self {
        // Two-stop gray, translucent to near-opaque
        Self {
            colors: vec![[0.5, 0.5, 0.5, 0.4], [0.5, 0.5, 0.5, 0.9]],
        }
    }
}

/// Wheel configuration
///
/// Supplied once at startup and re-read by the gesture engine on every
/// pointer event, so a replacement config takes effect mid-interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialConfig {
    /// Minutes added or removed per snap step
    #[serde(default = "default_minute_step")]
    pub minute_step: i32,
    /// Degrees of rotation per snap step
    #[serde(default = "default_snap_degree")]
    pub snap_degree: f32,
    /// Price of one minute, in dollars
    #[serde(default = "default_cost_per_minute")]
    pub cost_per_minute: f64,
    /// Whether the dial may be turned backwards to remove minutes
    #[serde(default = "default_true")]
    pub allows_negative: bool,
    /// Magnitude bound on the minute delta; 0 means unbounded
    #[serde(default)]
    pub max_minutes: i32,
    /// Stroke width of the outer ring
    #[serde(default = "default_ring_line_width")]
    pub ring_line_width: f32,
    /// Ring gradient stops
    #[serde(default)]
    pub ring_gradient: RingGradient,
    /// Confirmation progress bar dimensions
    #[serde(default = "default_overlay_bar_width")]
    pub overlay_bar_width: f32,
    #[serde(default = "default_overlay_bar_height")]
    pub overlay_bar_height: f32,
    /// Path to the tick sound; empty disables it
    #[serde(default)]
    pub tick_sound: String,
    /// Vibrate on each tick (where the platform supports it)
    #[serde(default = "default_true")]
    pub haptic: bool,
    /// Vibrate on successful payment
    #[serde(default = "default_true")]
    pub success_haptic: bool,
}

fn default_minute_step() -> i32 {
    1
}

fn default_snap_degree() -> f32 {
    15.0
}

fn default_cost_per_minute() -> f64 {
    0.35
}

fn default_ring_line_width() -> f32 {
    40.0
}

fn default_overlay_bar_width() -> f32 {
    75.0
}

fn default_overlay_bar_height() -> f32 {
    6.0
}

fn default_true() -> bool {
    true
}

impl Default for DialConfig {
    fn default() -> Self {
        Self {
            minute_step: default_minute_step(),
            snap_degree: default_snap_degree(),
            cost_per_minute: default_cost_per_minute(),
            allows_negative: true,
            max_minutes: 0,
            ring_line_width: default_ring_line_width(),
            ring_gradient: RingGradient::default(),
            overlay_bar_width: default_overlay_bar_width(),
            overlay_bar_height: default_overlay_bar_height(),
            tick_sound: String::new(),
            haptic: true,
            success_haptic: true,
        }
    }
}

impl DialConfig {
    /// Get the config file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "windup", "Windup")
            .map(|dirs| dirs.config_dir().join("dial.json"))
    }

    /// Load the config file, falling back to defaults when the file is
    /// missing or invalid. An invalid file is reported, never used.
    pub fn load() -> Self {
        match Self::file_path() {
            Some(path) if path.exists() => match Self::load_from_file(&path) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("Ignoring dial config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            _ => Self::default(),
        }
    }

    /// Load and validate a config file. Missing fields take their
    /// documented defaults.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        let config: Self =
            serde_json::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the gesture math cannot operate on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.minute_step <= 0 {
            return Err(ConfigError::Invalid(format!(
                "minute_step must be positive, got {}",
                self.minute_step
            )));
        }
        if !(self.snap_degree > 0.0) || !self.snap_degree.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "snap_degree must be a positive finite number of degrees, got {}",
                self.snap_degree
            )));
        }
        if !(self.cost_per_minute >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "cost_per_minute must be non-negative, got {}",
                self.cost_per_minute
            )));
        }
        if self.max_minutes < 0 {
            return Err(ConfigError::Invalid(format!(
                "max_minutes must be non-negative (0 = unbounded), got {}",
                self.max_minutes
            )));
        }
        if self.ring_gradient.colors.len() < 2 {
            return Err(ConfigError::Invalid(
                "ring_gradient needs at least two color stops".to_string(),
            ));
        }
        Ok(())
    }

    /// Clamp a raw minute delta to the configured bounds
    pub fn clamp_minutes(&self, minutes: i32) -> i32 {
        if self.max_minutes > 0 {
            let lower = if self.allows_negative {
                -self.max_minutes
            } else {
                0
            };
            minutes.clamp(lower, self.max_minutes)
        } else if !self.allows_negative && minutes < 0 {
            0
        } else {
            minutes
        }
    }

    /// Rotation angle corresponding to a snapped minute delta
    pub fn snapped_rotation(&self, minutes: i32) -> f32 {
        (minutes / self.minute_step) as f32 * self.snap_degree
    }

    /// Price of a signed minute delta
    pub fn cost_of(&self, minutes: i32) -> f64 {
        minutes.abs() as f64 * self.cost_per_minute
    }
}

/// Errors that can occur while loading the config
#[derive(Debug, Clone)]
pub enum ConfigError {
    Io(String),
    Parse(String),
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Invalid(e) => write!(f, "Invalid config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
