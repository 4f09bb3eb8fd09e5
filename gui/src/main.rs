use iced::{window, Application, Settings, Size};

mod api;
mod app;
mod config;
mod icons;
mod theme;
mod view;

use app::WeatherApp;

fn main() -> iced::Result {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weather_app_gui=info".into()),
        )
        .init();

    WeatherApp::run(Settings {
        window: window::Settings {
            size: Size::new(config::WINDOW_WIDTH, config::WINDOW_HEIGHT),
            min_size: Some(Size::new(config::WINDOW_MIN_WIDTH, config::WINDOW_MIN_HEIGHT)),
            ..window::Settings::default()
        },
        ..Settings::default()
    })
}
