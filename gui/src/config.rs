use std::env;

pub const WINDOW_TITLE: &str = "Weather App";
pub const WINDOW_WIDTH: f32 = 800.0;
pub const WINDOW_HEIGHT: f32 = 600.0;
pub const WINDOW_MIN_WIDTH: f32 = 600.0;
pub const WINDOW_MIN_HEIGHT: f32 = 400.0;

/// Client-side settings: where the weather API lives.
#[derive(Clone, Debug)]
pub struct GuiConfig {
    pub api_host: String,
    pub api_port: u16,
}

impl GuiConfig {
    pub fn from_env() -> Self {
        GuiConfig {
            api_host: env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            api_port: env::var("API_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
        }
    }

    pub fn api_url(&self) -> String {
        format!("http://{}:{}", self.api_host, self.api_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url() {
        let config = GuiConfig {
            api_host: "127.0.0.1".to_string(),
            api_port: 8000,
        };
        assert_eq!(config.api_url(), "http://127.0.0.1:8000");
    }
}
