use crate::error::ConfigError;
use std::env;
use std::str::FromStr;
use tracing::Level;

pub const EVENT_CAPACITY_VAR: &str = "DOCUMENT_MANAGER_EVENT_CAPACITY";
pub const LOG_LEVEL_VAR: &str = "DOCUMENT_MANAGER_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagerConfig {
    /// Capacity of the change-notification channel.
    pub event_capacity: usize,
    pub log_level: Level,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            event_capacity: 100,
            log_level: Level::INFO,
        }
    }
}

impl ManagerConfig {
    /// Reads the process environment. Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let event_capacity = match lookup(EVENT_CAPACITY_VAR) {
            Some(raw) => parse_var::<usize>(EVENT_CAPACITY_VAR, &raw)?,
            None => defaults.event_capacity,
        };
        if event_capacity == 0 {
            return Err(ConfigError::ZeroCapacity(EVENT_CAPACITY_VAR));
        }

        let log_level = match lookup(LOG_LEVEL_VAR) {
            Some(raw) => parse_var::<Level>(LOG_LEVEL_VAR, &raw)?,
            None => defaults.log_level,
        };

        Ok(Self {
            event_capacity,
            log_level,
        })
    }
}

fn parse_var<T>(var: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|err| ConfigError::InvalidValue {
            var,
            value: raw.to_string(),
            reason: err.to_string(),
        })
}
