//! Demo configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },

    #[error("DOOR_POSITION must not be negative, got {0}")]
    NegativeDoorPosition(i64),
}

/// Configuration for the demo binary.
#[derive(Clone, Debug, Default)]
pub struct DemoConfig {
    pub door: DoorConfig,
    pub log_dir: Option<PathBuf>,
}

impl DemoConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DOOR_POSITION` - Where the door stands (default: 100)
    /// - `DUDE_HAS_KEY` - Whether the dude can unlock the door (default: true)
    /// - `MAX_TICKS` - Upper bound on scenario ticks (default: 10000)
    /// - `RULES_LOG_DIR` - Write logs to this directory instead of stderr
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construct configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(position) = read(&lookup, "DOOR_POSITION")? {
            if position < 0 {
                return Err(ConfigError::NegativeDoorPosition(position));
            }
            config.door.door_position = position;
        }

        if let Some(has_key) = read(&lookup, "DUDE_HAS_KEY")? {
            config.door.dude_has_key = has_key;
        }

        if let Some(max_ticks) = read::<u64>(&lookup, "MAX_TICKS")? {
            config.door.max_ticks = max_ticks.max(1);
        }

        config.log_dir = lookup("RULES_LOG_DIR")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);

        Ok(config)
    }
}

/// Parameters of the door scenario.
#[derive(Clone, Debug)]
pub struct DoorConfig {
    pub door_position: i64,
    pub dude_has_key: bool,
    pub max_ticks: u64,
}

impl Default for DoorConfig {
    fn default() -> Self {
        Self {
            door_position: 100,
            dude_has_key: true,
            max_ticks: 10_000,
        }
    }
}

fn read<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
