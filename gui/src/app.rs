use iced::{executor, Application, Command, Element, Theme};

use crate::api::{ApiClient, WeatherReport};
use crate::config::{GuiConfig, WINDOW_TITLE};
use crate::theme;
use crate::view;

#[derive(Debug, Clone)]
pub enum Message {
    InputChanged(String),
    Search,
    Fetched(u64, Result<WeatherReport, String>),
}

/// Display state: Idle -> Searching -> {Success | Error} -> Idle on the
/// next submit. Errors from the API and from transport are rendered the
/// same way.
#[derive(Debug)]
pub enum Phase {
    Idle,
    Searching { city: String },
    Success(WeatherReport),
    Error(String),
}

pub struct WeatherApp {
    pub input: String,
    pub phase: Phase,
    client: ApiClient,
    search_seq: u64,
}

impl WeatherApp {
    pub fn with_client(client: ApiClient) -> Self {
        Self {
            input: String::new(),
            phase: Phase::Idle,
            client,
            search_seq: 0,
        }
    }
}

impl Application for WeatherApp {
    type Executor = executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = ();

    fn new(_flags: ()) -> (Self, Command<Message>) {
        let config = GuiConfig::from_env();
        tracing::info!("using weather API at {}", config.api_url());
        (
            Self::with_client(ApiClient::new(config.api_url())),
            Command::none(),
        )
    }

    fn title(&self) -> String {
        WINDOW_TITLE.to_string()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::InputChanged(value) => {
                self.input = value;
                Command::none()
            }
            Message::Search => {
                let city = self.input.trim().to_string();
                if city.is_empty() {
                    return Command::none();
                }

                // Cancel-and-replace: the newest submission owns the
                // display; completions tagged with an older sequence
                // number are dropped in Fetched below.
                self.search_seq += 1;
                let seq = self.search_seq;
                self.phase = Phase::Searching { city: city.clone() };

                let client = self.client.clone();
                Command::perform(
                    async move {
                        client
                            .get_weather(&city, "US")
                            .await
                            .map_err(|e| e.to_string())
                    },
                    move |result| Message::Fetched(seq, result),
                )
            }
            Message::Fetched(seq, result) => {
                if seq != self.search_seq {
                    return Command::none();
                }

                self.phase = match result {
                    Ok(report) => Phase::Success(report),
                    Err(message) => {
                        tracing::warn!("weather lookup failed: {message}");
                        Phase::Error(message)
                    }
                };
                Command::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn theme(&self) -> Theme {
        theme::app_theme()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> WeatherApp {
        WeatherApp::with_client(ApiClient::new("http://127.0.0.1:8000".to_string()))
    }

    fn report(city: &str) -> WeatherReport {
        WeatherReport {
            city: city.to_string(),
            country: "US".to_string(),
            temperature: 22.5,
            description: "Partly cloudy".to_string(),
            humidity: 65,
            wind_speed: 12.5,
            pressure: 1013,
            feels_like: 24.0,
            visibility: 10,
            uv_index: Some(6.2),
            timestamp: "2024-01-15T14:30:00Z".to_string(),
        }
    }

    #[test]
    fn test_empty_input_does_not_search() {
        let mut app = app();
        app.input = "   ".to_string();
        let _ = app.update(Message::Search);
        assert!(matches!(app.phase, Phase::Idle));
        assert_eq!(app.search_seq, 0);
    }

    #[test]
    fn test_submit_enters_searching() {
        let mut app = app();
        app.input = "london".to_string();
        let _ = app.update(Message::Search);
        assert!(matches!(app.phase, Phase::Searching { ref city } if city == "london"));
        assert_eq!(app.search_seq, 1);
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut app = app();
        app.input = "london".to_string();
        let _ = app.update(Message::Search);
        app.input = "tokyo".to_string();
        let _ = app.update(Message::Search);

        // Completion of the first (replaced) search arrives late.
        let _ = app.update(Message::Fetched(1, Ok(report("London"))));
        assert!(matches!(app.phase, Phase::Searching { ref city } if city == "tokyo"));

        let _ = app.update(Message::Fetched(2, Ok(report("Tokyo"))));
        assert!(matches!(app.phase, Phase::Success(ref r) if r.city == "Tokyo"));
    }

    #[test]
    fn test_error_response_shows_message() {
        let mut app = app();
        app.input = "atlantis".to_string();
        let _ = app.update(Message::Search);
        let _ = app.update(Message::Fetched(
            1,
            Err("Weather data for 'atlantis' not found. Try: london".to_string()),
        ));
        assert!(matches!(app.phase, Phase::Error(ref msg) if msg.contains("atlantis")));
    }
}
