use crate::{CarouselError, CarouselResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_SOURCE_URL: &str = "https://dummyjson.com/products?limit=10";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CarouselConfig {
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub gesture: GestureConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub source: SourceConfig,
}

/// Breakpoints and spacing used to derive how many cards fit side by side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Viewport width at or above which three cards are shown.
    pub desktop_min_width: f32,
    /// Viewport width at or above which two cards are shown.
    pub tablet_min_width: f32,
    pub gap_px: f32,
    /// Pixels represented by one terminal column.
    pub cell_width_px: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            desktop_min_width: 1024.0,
            tablet_min_width: 768.0,
            gap_px: 16.0,
            cell_width_px: 8.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Minimum drag distance in pixels that counts as a swipe.
    pub drag_buffer: f32,
    /// Minimum release speed in pixels per second that counts as a flick.
    pub velocity_threshold: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            drag_buffer: 50.0,
            velocity_threshold: 500.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub stiffness: f32,
    pub damping: f32,
    /// Distance from the target below which the spring may come to rest.
    pub rest_delta: f32,
    /// Speed below which the spring may come to rest.
    pub rest_speed: f32,
}

impl AnimationConfig {
    /// The spring only comes to rest when every parameter is positive and finite.
    pub fn validate(&self) -> CarouselResult<()> {
        let checks = [
            ("stiffness", self.stiffness, self.stiffness > 0.0),
            ("damping", self.damping, self.damping > 0.0),
            ("rest_delta", self.rest_delta, self.rest_delta > 0.0),
            ("rest_speed", self.rest_speed, self.rest_speed > 0.0),
        ];
        for (name, value, ok) in checks {
            if !value.is_finite() || !ok {
                return Err(CarouselError::Config(format!(
                    "animation.{} = {} would never let the spring settle",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            stiffness: 400.0,
            damping: 50.0,
            rest_delta: 0.5,
            rest_speed: 10.0,
        }
    }
}

/// What a click on the dot that is already highlighted does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SameDotPolicy {
    /// Run a zero-distance transition, locking input until it completes.
    #[default]
    Animate,
    /// Drop the click.
    Ignore,
}

impl std::str::FromStr for SameDotPolicy {
    type Err = CarouselError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "animate" => Ok(SameDotPolicy::Animate),
            "ignore" => Ok(SameDotPolicy::Ignore),
            other => Err(CarouselError::Config(format!(
                "unknown same-dot policy '{}', expected 'animate' or 'ignore'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub same_dot_policy: SameDotPolicy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub url: String,
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SOURCE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl CarouselConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/carousel/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("carousel/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("carousel\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Loads the user config, falling back to defaults when it is missing or invalid.
    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                if let Ok(config) = Self::load_from(&config_path) {
                    return config;
                }
            }
        }
        Self::default()
    }

    /// Loads an explicitly named config file; unlike [`CarouselConfig::load`] errors are reported.
    pub fn load_from(path: &Path) -> CarouselResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> CarouselResult<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| CarouselError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> CarouselResult<()> {
        if !self.layout.cell_width_px.is_finite() || self.layout.cell_width_px <= 0.0 {
            return Err(CarouselError::Config(format!(
                "layout.cell_width_px must be positive, got {}",
                self.layout.cell_width_px
            )));
        }
        self.animation.validate()
    }
}
