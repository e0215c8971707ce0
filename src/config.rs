//! # Settings
//!
//! Runtime settings for [`CarParkSystem`](crate::lifecycle::CarParkSystem), layered in
//! this order (later wins):
//!
//! 1. Built-in defaults (5 staff slots, 5 visitor slots, channel capacity 32)
//! 2. An optional `car_park.toml` (or `.yaml`, `.json`) in the working directory
//! 3. Environment variables prefixed with `CAR_PARK_`
//!
//! ```bash
//! CAR_PARK_STAFF_SLOTS=2 CAR_PARK_VISITOR_SLOTS=8 cargo run
//! ```

use serde::Deserialize;
use thiserror::Error;

const DEFAULT_SLOTS_PER_CATEGORY: u32 = 5;
const DEFAULT_CHANNEL_CAPACITY: usize = 32;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to build configuration: {0}")]
    Build(#[source] config::ConfigError),

    #[error("Failed to deserialize settings: {0}")]
    Deserialize(#[source] config::ConfigError),

    #[error("Invalid setting: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    pub staff_slots: u32,
    pub visitor_slots: u32,
    /// Requests that may queue for the actor before senders wait.
    pub channel_capacity: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            staff_slots: DEFAULT_SLOTS_PER_CATEGORY,
            visitor_slots: DEFAULT_SLOTS_PER_CATEGORY,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl Settings {
    /// Loads defaults, then `car_park.*` if present, then `CAR_PARK_*` variables.
    pub fn load() -> Result<Self, SettingsError> {
        let builder = Self::defaults()?
            .add_source(config::File::with_name("car_park").required(false))
            .add_source(Self::environment(None));
        Self::from_builder(builder)
    }

    /// The `CAR_PARK_*` layer. Reads the process environment unless `source`
    /// supplies the variables.
    ///
    /// # Arguments
    /// * `source` - Variables to use instead of the process environment
    fn environment(source: Option<config::Map<String, String>>) -> config::Environment {
        config::Environment::with_prefix("CAR_PARK")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .source(source)
    }

    /// A builder holding only the built-in defaults, for layering extra sources.
    pub fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, SettingsError>
    {
        let defaults = Self::default();
        config::Config::builder()
            .set_default("staff_slots", i64::from(defaults.staff_slots))
            .and_then(|b| b.set_default("visitor_slots", i64::from(defaults.visitor_slots)))
            .and_then(|b| b.set_default("channel_capacity", defaults.channel_capacity as i64))
            .map_err(SettingsError::Build)
    }

    /// Builds, deserializes and validates the layered configuration.
    pub fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, SettingsError> {
        let settings: Settings = builder
            .build()
            .map_err(SettingsError::Build)?
            .try_deserialize()
            .map_err(SettingsError::Deserialize)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.channel_capacity == 0 {
            return Err(SettingsError::Invalid(
                "channel_capacity must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::from_builder(Settings::defaults().unwrap()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_overrides_win_over_defaults() {
        let builder = Settings::defaults()
            .unwrap()
            .set_override("staff_slots", 2)
            .unwrap()
            .set_override("visitor_slots", 9)
            .unwrap();

        let settings = Settings::from_builder(builder).unwrap();

        assert_eq!(settings.staff_slots, 2);
        assert_eq!(settings.visitor_slots, 9);
        assert_eq!(settings.channel_capacity, 32);
    }

    #[test]
    fn test_env_overrides_defaults() {
        let vars = config::Map::from([
            ("CAR_PARK_STAFF_SLOTS".to_string(), "3".to_string()),
            ("CAR_PARK_CHANNEL_CAPACITY".to_string(), "7".to_string()),
            ("OTHER_STAFF_SLOTS".to_string(), "99".to_string()),
        ]);
        let builder = Settings::defaults()
            .unwrap()
            .add_source(Settings::environment(Some(vars)));

        let settings = Settings::from_builder(builder).unwrap();

        assert_eq!(
            settings,
            Settings {
                staff_slots: 3,
                visitor_slots: 5,
                channel_capacity: 7,
            }
        );
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let builder = Settings::defaults()
            .unwrap()
            .set_override("channel_capacity", 0)
            .unwrap();

        assert!(matches!(
            Settings::from_builder(builder),
            Err(SettingsError::Invalid(_))
        ));
    }
}
