use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    #[error("{0}")]
    Api(String),
}

/// Weather as served by `POST /api/v1/weather`.
#[derive(Debug, Clone, Deserialize)]
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
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
struct WeatherQuery<'a> {
    city: &'a str,
    country: &'a str,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
    #[allow(dead_code)]
    detail: Option<String>,
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        let client = Client::builder()
            .user_agent("WeatherApp/1.0")
            // A hung server surfaces as an ordinary error instead of a
            // search that never resolves.
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, base_url }
    }

    pub async fn get_weather(
        &self,
        city: &str,
        country: &str,
    ) -> Result<WeatherReport, ClientError> {
        let url = format!("{}/api/v1/weather", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&WeatherQuery { city, country })
            .send()
            .await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            let status = response.status();
            match response.json::<ErrorBody>().await {
                Ok(body) => Err(ClientError::Api(body.error)),
                Err(_) => Err(ClientError::Api(format!("HTTP {status}"))),
            }
        }
    }
}
