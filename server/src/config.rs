use serde::{Deserialize, Serialize};
use std::env;

pub const APP_NAME: &str = "Weather App";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    pub api_host: String,
    pub api_port: u16,
    pub api_debug: bool,
    pub weather_api_key: String,
    pub weather_api_url: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let api_port = env::var("API_PORT").unwrap_or_else(|_| "8000".to_string());

        Ok(Config {
            api_host: env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            api_port: api_port
                .parse()
                .map_err(|_| anyhow::anyhow!("API_PORT is not a valid port: {api_port}"))?,
            api_debug: env::var("API_DEBUG")
                .map(|v| v.to_lowercase() == "true")
                .unwrap_or(true),
            // Reserved for a future HTTP-backed provider; unused by the static table.
            weather_api_key: env::var("WEATHER_API_KEY").unwrap_or_default(),
            weather_api_url: env::var("WEATHER_API_URL").unwrap_or_else(|_| {
                "https://api.openweathermap.org/data/2.5/weather".to_string()
            }),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.api_host, self.api_port)
    }
}
