use crate::config::WeatherConfig;
use crate::models::{WeatherCondition, WeatherSnapshot};

/// Weather collaborator. Must be infallible: weather is advisory only, so
/// unknown destinations get the default snapshot rather than an error.
pub trait WeatherProvider: Send + Sync {
    fn lookup(&self, destination: &str) -> WeatherSnapshot;
}

/// Static table of seeded destinations, case-insensitive on name.
/// A live forecast integration would sit behind the same trait with a
/// bounded timeout and the same fail-open default.
#[derive(Debug, Clone)]
pub struct StaticWeatherTable {
    default: WeatherSnapshot,
}

fn snapshot(temperature_c: f32, condition: WeatherCondition, humidity_pct: u8) -> WeatherSnapshot {
    WeatherSnapshot {
        temperature_c,
        condition,
        humidity_pct,
    }
}

impl StaticWeatherTable {
    pub fn new(default: WeatherSnapshot) -> Self {
        Self { default }
    }

    pub fn from_config(config: &WeatherConfig) -> Self {
        Self::new(snapshot(
            config.default_temperature_c,
            config.default_condition,
            config.default_humidity_pct,
        ))
    }
}

impl Default for StaticWeatherTable {
    fn default() -> Self {
        Self::new(snapshot(25.0, WeatherCondition::Sunny, 70))
    }
}

impl WeatherProvider for StaticWeatherTable {
    fn lookup(&self, destination: &str) -> WeatherSnapshot {
        use WeatherCondition::*;

        match destination.trim().to_lowercase().as_str() {
            "mumbai" => snapshot(28.0, Sunny, 75),
            "delhi" => snapshot(32.0, Sunny, 60),
            "goa" => snapshot(30.0, PartlyCloudy, 80),
            "bangalore" => snapshot(26.0, Rain, 85),
            "kerala" => snapshot(27.0, Rain, 90),
            other => {
                tracing::debug!(destination = %other, "no weather entry, using default snapshot");
                self.default
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let table = StaticWeatherTable::default();
        assert_eq!(table.lookup("Goa"), table.lookup("goa"));
        assert_eq!(table.lookup("MUMBAI").temperature_c, 28.0);
    }

    #[test]
    fn test_unknown_destination_falls_back_to_default() {
        let table = StaticWeatherTable::default();
        let snap = table.lookup("Atlantis");
        assert_eq!(snap.temperature_c, 25.0);
        assert_eq!(snap.condition, WeatherCondition::Sunny);
        assert_eq!(snap.humidity_pct, 70);
    }

    #[test]
    fn test_seeded_cities() {
        let table = StaticWeatherTable::default();
        assert_eq!(table.lookup("goa").condition, WeatherCondition::PartlyCloudy);
        assert_eq!(table.lookup("bangalore").condition, WeatherCondition::Rain);
        assert_eq!(table.lookup("delhi").temperature_c, 32.0);
        assert_eq!(table.lookup("kerala").humidity_pct, 90);
    }
}
