//! Runtime configuration
//!
//! Read once at startup from `DRINKDEX_*` environment variables.

use serde::Serialize;
use thiserror::Error;

use crate::measure::{DescriptorSet, ServingBounds};

pub const MIN_SERVINGS_VAR: &str = "DRINKDEX_MIN_SERVINGS";
pub const MAX_SERVINGS_VAR: &str = "DRINKDEX_MAX_SERVINGS";
pub const DEFAULT_PRESET_VAR: &str = "DRINKDEX_DEFAULT_PRESET";
pub const EXTRA_DESCRIPTORS_VAR: &str = "DRINKDEX_EXTRA_DESCRIPTORS";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a non-negative integer, got {value:?}")]
    InvalidInteger { var: &'static str, value: String },

    #[error("Invalid serving bounds: min {min}, max {max} (need 1 <= min <= max)")]
    InvalidBounds { min: u32, max: u32 },
}

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Drinkdex configuration
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    pub serving_bounds: ServingBounds,
    /// Preset used when a request names none
    pub default_preset: String,
    /// Words added to every descriptor set
    pub extra_descriptors: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            serving_bounds: ServingBounds::default(),
            default_preset: "empty".to_string(),
            extra_descriptors: Vec::new(),
        }
    }
}

impl Config {
    /// Load from the process environment
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ServingBounds::default();
        let min = read_u32(&lookup, MIN_SERVINGS_VAR)?.unwrap_or(defaults.min());
        let max = read_u32(&lookup, MAX_SERVINGS_VAR)?.unwrap_or(defaults.max());
        let serving_bounds =
            ServingBounds::new(min, max).ok_or(ConfigError::InvalidBounds { min, max })?;

        let default_preset = match lookup(DEFAULT_PRESET_VAR) {
            Some(name) if DescriptorSet::preset(&name).is_some() => name.trim().to_lowercase(),
            Some(name) => {
                tracing::warn!("Unknown descriptor preset '{}', using 'empty'", name);
                "empty".to_string()
            }
            None => "empty".to_string(),
        };

        let extra_descriptors = lookup(EXTRA_DESCRIPTORS_VAR)
            .map(|raw| {
                raw.split(',')
                    .map(|w| w.trim().to_lowercase())
                    .filter(|w| !w.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            serving_bounds,
            default_preset,
            extra_descriptors,
        })
    }

    /// Build the descriptor set for a request
    ///
    /// Falls back to the default preset when `preset` is absent or unknown.
    pub fn descriptors(&self, preset: Option<&str>, extra: &[String]) -> DescriptorSet {
        let base = match preset {
            Some(name) => DescriptorSet::preset(name).unwrap_or_else(|| {
                tracing::warn!("Unknown descriptor preset '{}', using default", name);
                self.default_descriptors()
            }),
            None => self.default_descriptors(),
        };
        base.with_words(&self.extra_descriptors).with_words(extra)
    }

    fn default_descriptors(&self) -> DescriptorSet {
        DescriptorSet::preset(&self.default_preset).unwrap_or_default()
    }
}

fn read_u32<F>(lookup: &F, var: &'static str) -> ConfigResult<Option<u32>>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        Some(value) => value
            .trim()
            .parse::<u32>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidInteger { var, value }),
        None => Ok(None),
    }
}
