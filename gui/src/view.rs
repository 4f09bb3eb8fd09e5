use iced::widget::{button, column, container, row, text, text_input, Space};
use iced::{theme as iced_theme, Alignment, Element, Length};

use crate::api::WeatherReport;
use crate::app::{Message, Phase, WeatherApp};
use crate::icons::weather_icon;
use crate::theme::{self, spacing};

pub fn view(app: &WeatherApp) -> Element<'_, Message> {
    let title = text("Weather App").size(32);

    let search = row![
        text_input("Enter a city...", &app.input)
            .on_input(Message::InputChanged)
            .on_submit(Message::Search)
            .padding(spacing::MEDIUM)
            .size(16),
        button(text("Search"))
            .on_press(Message::Search)
            .padding([spacing::SMALL, spacing::MEDIUM]),
    ]
    .spacing(spacing::MEDIUM)
    .align_items(Alignment::Center);

    let content: Element<'_, Message> = match &app.phase {
        Phase::Idle => text("Search for a city to see its weather.").size(16).into(),
        Phase::Searching { city } => text(format!("Fetching weather for {city}..."))
            .size(20)
            .style(iced_theme::Text::Color(theme::WARNING))
            .into(),
        Phase::Success(report) => weather_card(report),
        Phase::Error(message) => text(message)
            .size(16)
            .style(iced_theme::Text::Color(theme::DANGER))
            .into(),
    };

    let layout = column![title, search, content]
        .spacing(spacing::LARGE)
        .padding(spacing::XLARGE)
        .align_items(Alignment::Center)
        .width(Length::Fill)
        .max_width(600);

    container(layout)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .into()
}

fn weather_card(report: &WeatherReport) -> Element<'_, Message> {
    let header = text(format!(
        "{} {}, {}",
        weather_icon(&report.description),
        report.city,
        report.country
    ))
    .size(24);

    let temperature = text(format!("{:.1}\u{00B0}C", report.temperature))
        .size(48)
        .style(iced_theme::Text::Color(theme::temperature_color(
            report.temperature,
        )));

    let details = column![
        detail_row("Feels like", format!("{:.1}\u{00B0}C", report.feels_like)),
        detail_row("Humidity", format!("{}%", report.humidity)),
        detail_row("Wind speed", format!("{:.1} km/h", report.wind_speed)),
        detail_row("Pressure", format!("{} hPa", report.pressure)),
        detail_row("Visibility", format!("{} km", report.visibility)),
        detail_row(
            "UV index",
            report
                .uv_index
                .map(|uv| format!("{uv:.1}"))
                .unwrap_or_else(|| "n/a".to_string()),
        ),
    ]
    .spacing(spacing::SMALL);

    let updated = text(format!("Updated: {}", report.timestamp)).size(12);

    container(
        column![
            header,
            temperature,
            text(&report.description).size(20),
            details,
            updated
        ]
        .spacing(spacing::MEDIUM)
        .align_items(Alignment::Center),
    )
    .style(theme::card())
    .padding(spacing::LARGE)
    .into()
}

fn detail_row(label: &str, value: String) -> Element<'static, Message> {
    row![
        text(format!("{label}:")).size(16),
        Space::with_width(Length::Fixed(10.0)),
        text(value).size(16),
    ]
    .into()
}
