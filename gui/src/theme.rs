use iced::theme::Palette;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

const fn rgb(r: f32, g: f32, b: f32) -> Color {
    Color { r, g, b, a: 1.0 }
}

// Palette carried over from the original desktop theme.
pub const PRIMARY: Color = rgb(0.173, 0.243, 0.314); // #2c3e50
pub const SECONDARY: Color = rgb(0.204, 0.286, 0.369); // #34495e
pub const ACCENT: Color = rgb(0.204, 0.596, 0.859); // #3498db
pub const DANGER: Color = rgb(0.906, 0.298, 0.235); // #e74c3c
pub const WARNING: Color = rgb(0.953, 0.612, 0.071); // #f39c12
pub const SUCCESS: Color = rgb(0.153, 0.682, 0.376); // #27ae60
pub const LIGHT: Color = rgb(0.925, 0.941, 0.945); // #ecf0f1

pub mod spacing {
    pub const SMALL: u16 = 5;
    pub const MEDIUM: u16 = 10;
    pub const LARGE: u16 = 20;
    pub const XLARGE: u16 = 30;
}

pub fn app_theme() -> Theme {
    Theme::custom(
        "weather".to_string(),
        Palette {
            background: PRIMARY,
            text: LIGHT,
            primary: ACCENT,
            success: SUCCESS,
            danger: DANGER,
        },
    )
}

/// Color ramp for the big temperature readout, coldest to hottest.
pub fn temperature_color(temp_c: f64) -> Color {
    if temp_c < 0.0 {
        LIGHT
    } else if temp_c < 15.0 {
        ACCENT
    } else if temp_c < 25.0 {
        SUCCESS
    } else if temp_c < 35.0 {
        WARNING
    } else {
        DANGER
    }
}

/// Rounded card for the weather readout.
pub struct Card;

impl container::StyleSheet for Card {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(LIGHT),
            background: Some(Background::Color(SECONDARY)),
            border: Border {
                color: ACCENT,
                width: 1.0,
                radius: 8.0.into(),
            },
            ..Default::default()
        }
    }
}

pub fn card() -> iced::theme::Container {
    iced::theme::Container::Custom(Box::new(Card))
}
