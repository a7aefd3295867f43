use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::geometry::Insets;
use crate::layout::MasonryParams;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub reel: ReelConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Tunables for the reel effect and the masonry layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReelConfig {
    /// Seconds the reel phase runs before switching to unified scrolling
    #[serde(default = "default_countdown_secs")]
    pub countdown_secs: f64,
    /// Reel drift speed in layout units per second; columns move in opposite directions
    #[serde(default = "default_reel_speed")]
    pub reel_speed: f64,
    /// Offset both columns start from, so the right column has room to move up
    #[serde(default = "default_reel_start_offset")]
    pub reel_start_offset: f64,
    /// Largest allowed left-minus-right skew (0 = unlimited)
    #[serde(default)]
    pub max_column_skew: f64,
    /// Duration reserved for smoothing transitions with the value animator
    #[serde(default = "default_align_duration_ms")]
    pub align_duration_ms: u64,
    /// Content shorter than viewport height times this gets padded by repetition
    #[serde(default = "default_min_fill_multiplier")]
    pub min_fill_multiplier: f64,
    #[serde(default = "default_content_insets")]
    pub content_insets: Insets,
    /// Horizontal gap between the two columns
    #[serde(default = "default_spacing")]
    pub column_spacing: f64,
    /// Vertical gap between items in one column
    #[serde(default = "default_spacing")]
    pub item_spacing: f64,
}

impl Default for ReelConfig {
    fn default() -> Self {
        Self {
            countdown_secs: default_countdown_secs(),
            reel_speed: default_reel_speed(),
            reel_start_offset: default_reel_start_offset(),
            max_column_skew: 0.0,
            align_duration_ms: default_align_duration_ms(),
            min_fill_multiplier: default_min_fill_multiplier(),
            content_insets: default_content_insets(),
            column_spacing: default_spacing(),
            item_spacing: default_spacing(),
        }
    }
}

impl ReelConfig {
    /// Countdown as a Duration; non-finite or negative values collapse to zero
    pub fn countdown(&self) -> Duration {
        Duration::try_from_secs_f64(self.countdown_secs).unwrap_or(Duration::ZERO)
    }

    /// Layout parameters handed to the masonry engine
    pub fn masonry_params(&self) -> MasonryParams {
        MasonryParams {
            insets: self.content_insets,
            column_spacing: self.column_spacing,
            item_spacing: self.item_spacing,
        }
    }

    /// Reject values the layout and state machine do not guard against.
    ///
    /// Nothing inside the engine calls this; hosts run it once before
    /// constructing a controller.
    pub fn validate(&self) -> crate::Result<()> {
        check_non_negative("countdown_secs", self.countdown_secs)?;
        check_non_negative("reel_speed", self.reel_speed)?;
        check_non_negative("reel_start_offset", self.reel_start_offset)?;
        check_non_negative("max_column_skew", self.max_column_skew)?;
        check_non_negative("min_fill_multiplier", self.min_fill_multiplier)?;
        check_non_negative("column_spacing", self.column_spacing)?;
        check_non_negative("item_spacing", self.item_spacing)?;
        check_non_negative("content_insets.top", self.content_insets.top)?;
        check_non_negative("content_insets.left", self.content_insets.left)?;
        check_non_negative("content_insets.bottom", self.content_insets.bottom)?;
        check_non_negative("content_insets.right", self.content_insets.right)?;
        Ok(())
    }
}

fn check_non_negative(field: &'static str, value: f64) -> crate::Result<()> {
    if !value.is_finite() {
        return Err(crate::Error::InvalidConfig {
            field,
            reason: format!("{value} is not a finite number"),
        });
    }
    if value < 0.0 {
        return Err(crate::Error::InvalidConfig {
            field,
            reason: format!("{value} must not be negative"),
        });
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Idle tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Frame rate while the reel is animating
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Terminal cells per layout unit
    #[serde(default = "default_cell_scale")]
    pub cell_scale: f64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animation_fps: default_animation_fps(),
            cell_scale: default_cell_scale(),
        }
    }
}

impl UiConfig {
    pub fn validate(&self) -> crate::Result<()> {
        if !self.cell_scale.is_finite() || self.cell_scale <= 0.0 {
            return Err(crate::Error::InvalidConfig {
                field: "ui.cell_scale",
                reason: format!("{} must be a positive number", self.cell_scale),
            });
        }
        Ok(())
    }

    /// Poll interval while animating
    pub fn animation_tick_duration(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis(1000 / self.animation_fps as u64)
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_countdown_secs() -> f64 {
    3.5
}

fn default_reel_speed() -> f64 {
    60.0
}

fn default_reel_start_offset() -> f64 {
    360.0
}

fn default_align_duration_ms() -> u64 {
    200
}

fn default_min_fill_multiplier() -> f64 {
    1.3
}

fn default_content_insets() -> Insets {
    Insets::uniform(16.0)
}

fn default_spacing() -> f64 {
    12.0
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_fps() -> u32 {
    60
}

fn default_cell_scale() -> f64 {
    0.1 // 10 layout units per terminal cell
}

impl AppConfig {
    /// Load configuration from the default path or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from an explicit file
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to the default path
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&config_path, self.to_toml()?)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/filmreel/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("filmreel")
            .join("config.toml")
    }
}
