//! Agent configuration loading.

use std::path::Path;

use beast_core::{ConfigError, DEFAULT_HOME_OFFSET};
use beast_utility::UtilitySystemConfig;
use serde::{Deserialize, Serialize};

/// Agent configuration, usually loaded from `beast.yaml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Display name used in diagnostics
    pub name: String,

    /// Emit telemetry for the active choice / maneuver
    pub render: bool,

    /// Bonus for the previously selected choice
    #[serde(default = "default_previous_bias")]
    pub previous_bias: f32,

    /// Target speed when chasing the ball or retreating (uu/s)
    #[serde(default = "default_chase_speed")]
    pub chase_speed: f32,

    /// Dodging toward the ball is only allowed beyond this distance (uu)
    #[serde(default = "default_dodge_distance")]
    pub dodge_distance: f32,

    /// How far in front of our goal the home point sits (uu)
    #[serde(default = "default_home_offset")]
    pub home_offset: f32,

    /// Distance to the ball at which the kickoff dodge starts (uu)
    #[serde(default = "default_kickoff_dodge_distance")]
    pub kickoff_dodge_distance: f32,
}

fn default_name() -> String {
    "Beast".to_string()
}
fn default_previous_bias() -> f32 {
    UtilitySystemConfig::default().previous_bias
}
fn default_chase_speed() -> f32 {
    2000.0
}
fn default_dodge_distance() -> f32 {
    2200.0
}
fn default_home_offset() -> f32 {
    DEFAULT_HOME_OFFSET
}
fn default_kickoff_dodge_distance() -> f32 {
    750.0
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            render: true,
            previous_bias: default_previous_bias(),
            chase_speed: default_chase_speed(),
            dodge_distance: default_dodge_distance(),
            home_offset: default_home_offset(),
            kickoff_dodge_distance: default_kickoff_dodge_distance(),
        }
    }
}

impl BotConfig {
    /// Load and validate configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_yaml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.utility_config().validate()?;

        for (name, value) in [
            ("chase_speed", self.chase_speed),
            ("dodge_distance", self.dodge_distance),
            ("kickoff_dodge_distance", self.kickoff_dodge_distance),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidThreshold { name, value });
            }
        }

        if !self.home_offset.is_finite() || self.home_offset < 0.0 {
            return Err(ConfigError::InvalidThreshold {
                name: "home_offset",
                value: self.home_offset,
            });
        }

        Ok(())
    }

    pub fn utility_config(&self) -> UtilitySystemConfig {
        UtilitySystemConfig {
            previous_bias: self.previous_bias,
        }
    }
}
