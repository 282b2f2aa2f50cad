use std::env;

use crate::models::WeatherCondition;

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub weather: WeatherConfig,
}

/// Fallback weather snapshot used when a destination is not in the static
/// table. Weather is advisory only, so lookups fail open to these values.
#[derive(Debug, Clone)]
pub struct WeatherConfig {
    pub default_temperature_c: f32,
    pub default_condition: WeatherCondition,
    pub default_humidity_pct: u8,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            weather: WeatherConfig {
                default_temperature_c: parse_env_or("ROAMSTER_DEFAULT_TEMP_C", 25.0),
                default_condition: parse_env_or(
                    "ROAMSTER_DEFAULT_CONDITION",
                    WeatherCondition::Sunny,
                ),
                default_humidity_pct: parse_env_or("ROAMSTER_DEFAULT_HUMIDITY", 70),
            },
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weather: WeatherConfig {
                default_temperature_c: 25.0,
                default_condition: WeatherCondition::Sunny,
                default_humidity_pct: 70,
            },
        }
    }
}
