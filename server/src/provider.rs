use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use tokio::time::sleep;

/// Simulated upstream latency of the demo data source.
pub const MOCK_LATENCY: Duration = Duration::from_millis(300);

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("no weather data for '{city}'")]
    NotFound { city: String },
    #[error("provider request failed: {0}")]
    Transient(String),
}

/// One fixed weather observation. The table below is the only source of
/// these at runtime; nothing creates or mutates records after startup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherRecord {
    pub temperature: f64,
    pub description: &'static str,
    pub humidity: u8,
    pub wind_speed: f64,
    pub pressure: u32,
    pub feels_like: f64,
    pub visibility: u32,
    pub uv_index: Option<f64>,
}

/// Fixed city table, keyed by lowercase trimmed city name.
/// Declaration order is observable (cities listing, not-found hints).
pub const CITY_TABLE: &[(&str, WeatherRecord)] = &[
    (
        "new york",
        WeatherRecord {
            temperature: 22.5,
            description: "Partly cloudy",
            humidity: 65,
            wind_speed: 12.5,
            pressure: 1013,
            feels_like: 24.0,
            visibility: 10,
            uv_index: Some(6.2),
        },
    ),
    (
        "london",
        WeatherRecord {
            temperature: 18.3,
            description: "Light rain",
            humidity: 78,
            wind_speed: 8.2,
            pressure: 1008,
            feels_like: 16.5,
            visibility: 8,
            uv_index: Some(3.1),
        },
    ),
    (
        "tokyo",
        WeatherRecord {
            temperature: 26.8,
            description: "Sunny",
            humidity: 58,
            wind_speed: 6.3,
            pressure: 1020,
            feels_like: 28.2,
            visibility: 15,
            uv_index: Some(8.7),
        },
    ),
    (
        "sydney",
        WeatherRecord {
            temperature: 20.1,
            description: "Overcast",
            humidity: 72,
            wind_speed: 14.8,
            pressure: 1016,
            feels_like: 18.9,
            visibility: 12,
            uv_index: Some(4.5),
        },
    ),
    (
        "paris",
        WeatherRecord {
            temperature: 19.7,
            description: "Clear sky",
            humidity: 60,
            wind_speed: 9.1,
            pressure: 1015,
            feels_like: 21.2,
            visibility: 12,
            uv_index: Some(5.3),
        },
    ),
    (
        "mumbai",
        WeatherRecord {
            temperature: 32.1,
            description: "Hot and humid",
            humidity: 85,
            wind_speed: 15.3,
            pressure: 1005,
            feels_like: 38.5,
            visibility: 6,
            uv_index: Some(9.8),
        },
    ),
    (
        "delhi",
        WeatherRecord {
            temperature: 28.9,
            description: "Hazy",
            humidity: 72,
            wind_speed: 11.2,
            pressure: 1010,
            feels_like: 33.1,
            visibility: 4,
            uv_index: Some(7.6),
        },
    ),
];

/// Pluggable source of weather records. The static table is the only
/// implementer today; an HTTP-backed provider (OpenWeatherMap etc.) slots
/// in here later without touching the routing layer.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetch the record for an already-normalized city key.
    async fn fetch(&self, city: &str, country: &str) -> Result<WeatherRecord, ProviderError>;

    /// Known city keys, in fixed declaration order.
    fn known_cities(&self) -> Vec<String>;
}

/// Serves the fixed table after a simulated network delay.
pub struct StaticProvider {
    delay: Duration,
}

impl StaticProvider {
    pub fn new() -> Self {
        Self::with_delay(MOCK_LATENCY)
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for StaticProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WeatherProvider for StaticProvider {
    async fn fetch(&self, city: &str, _country: &str) -> Result<WeatherRecord, ProviderError> {
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        CITY_TABLE
            .iter()
            .find(|(key, _)| *key == city)
            .map(|(_, record)| *record)
            .ok_or_else(|| ProviderError::NotFound {
                city: city.to_string(),
            })
    }

    fn known_cities(&self) -> Vec<String> {
        CITY_TABLE.iter().map(|(key, _)| key.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> StaticProvider {
        StaticProvider::with_delay(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_fetch_known_city() {
        let record = provider().fetch("london", "us").await.unwrap();
        assert_eq!(record.temperature, 18.3);
        assert_eq!(record.description, "Light rain");
        assert_eq!(record.humidity, 78);
        assert_eq!(record.uv_index, Some(3.1));
    }

    #[tokio::test]
    async fn test_fetch_unknown_city() {
        let err = provider().fetch("atlantis", "us").await.unwrap_err();
        match err {
            ProviderError::NotFound { city } => assert_eq!(city, "atlantis"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_is_case_sensitive_on_keys() {
        // Normalization is the service's job; the provider only knows keys.
        assert!(provider().fetch("London", "us").await.is_err());
    }

    #[test]
    fn test_known_cities_declaration_order() {
        assert_eq!(
            provider().known_cities(),
            vec!["new york", "london", "tokyo", "sydney", "paris", "mumbai", "delhi"]
        );
    }
}
