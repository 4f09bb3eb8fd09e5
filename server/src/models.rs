use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::provider::WeatherRecord;

fn default_country() -> String {
    "US".to_string()
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct WeatherRequest {
    /// City name, 1-100 characters.
    #[schema(example = "New York")]
    pub city: String,
    /// Country code, 2-5 characters.
    #[serde(default = "default_country")]
    #[schema(example = "US")]
    pub country: String,
}

impl WeatherRequest {
    /// Shape validation matching the original API contract.
    pub fn validate(&self) -> Result<(), String> {
        if self.city.is_empty() || self.city.chars().count() > 100 {
            return Err("city must be between 1 and 100 characters".to_string());
        }
        let country_len = self.country.chars().count();
        if !(2..=5).contains(&country_len) {
            return Err("country must be between 2 and 5 characters".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CountryQuery {
    /// Country code, defaults to "US".
    pub country: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WeatherReport {
    pub city: String,
    pub country: String,
    pub temperature: f64,
    pub description: String,
    pub humidity: u8,
    pub wind_speed: f64,
    pub pressure: u32,
    pub feels_like: f64,
    pub visibility: u32,
    pub uv_index: Option<f64>,
    pub timestamp: DateTime<Utc>,
}

impl WeatherReport {
    pub fn from_record(
        city: String,
        country: String,
        record: &WeatherRecord,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            city,
            country,
            temperature: record.temperature,
            description: record.description.to_string(),
            humidity: record.humidity,
            wind_speed: record.wind_speed,
            pressure: record.pressure,
            feels_like: record.feels_like,
            visibility: record.visibility,
            uv_index: record.uv_index,
            timestamp,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
    pub detail: Option<String>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CitiesResponse {
    pub cities: Vec<String>,
    pub count: usize,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiInfo {
    pub name: String,
    pub version: String,
    pub message: String,
    pub endpoints: ApiEndpoints,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiEndpoints {
    pub health: String,
    pub weather: String,
    pub cities: String,
    pub docs: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PingResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::CITY_TABLE;

    fn request(city: &str, country: &str) -> WeatherRequest {
        WeatherRequest {
            city: city.to_string(),
            country: country.to_string(),
        }
    }

    #[test]
    fn test_validate_city_bounds() {
        assert!(request("a", "US").validate().is_ok());
        assert!(request(&"x".repeat(100), "US").validate().is_ok());
        assert!(request("", "US").validate().is_err());
        assert!(request(&"x".repeat(101), "US").validate().is_err());
    }

    #[test]
    fn test_validate_country_bounds() {
        assert!(request("london", "UK").validate().is_ok());
        assert!(request("london", "GBGBG").validate().is_ok());
        assert!(request("london", "U").validate().is_err());
        assert!(request("london", "GBGBGB").validate().is_err());
    }

    #[test]
    fn test_country_defaults_to_us() {
        let req: WeatherRequest = serde_json::from_str(r#"{"city": "london"}"#).unwrap();
        assert_eq!(req.country, "US");
    }

    #[test]
    fn test_report_json_round_trip() {
        let (_, record) = &CITY_TABLE[0];
        let report = WeatherReport::from_record(
            "New York".to_string(),
            "US".to_string(),
            record,
            Utc::now(),
        );

        let json = serde_json::to_string(&report).unwrap();
        let parsed: WeatherReport = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.city, report.city);
        assert_eq!(parsed.temperature, report.temperature);
        assert_eq!(parsed.humidity, report.humidity);
        assert_eq!(parsed.uv_index, report.uv_index);
        assert_eq!(parsed.timestamp, report.timestamp);

        // Float fields stay floats, humidity stays an integer in range.
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["temperature"].is_f64());
        assert!(value["humidity"].is_u64());
        assert!(value["humidity"].as_u64().unwrap() <= 100);
    }

    #[test]
    fn test_uv_index_serializes_as_null_when_absent() {
        let mut record = CITY_TABLE[0].1;
        record.uv_index = None;
        let report =
            WeatherReport::from_record("Test".to_string(), "US".to_string(), &record, Utc::now());
        let value = serde_json::to_value(&report).unwrap();
        assert!(value["uv_index"].is_null());
    }
}
