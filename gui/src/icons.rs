/// Description keyword to icon table. Matching is substring containment
/// over the lowercased description, first match wins, so the order here
/// is observable behavior and must not be rearranged.
pub const WEATHER_ICONS: &[(&str, &str)] = &[
    ("sunny", "\u{2600}\u{FE0F}"),          // ☀️
    ("clear", "\u{2600}\u{FE0F}"),          // ☀️
    ("partly cloudy", "\u{26C5}"),          // ⛅
    ("cloudy", "\u{2601}\u{FE0F}"),         // ☁️
    ("overcast", "\u{2601}\u{FE0F}"),       // ☁️
    ("rainy", "\u{1F327}\u{FE0F}"),         // 🌧️
    ("light rain", "\u{1F326}\u{FE0F}"),    // 🌦️
    ("heavy rain", "\u{26C8}\u{FE0F}"),     // ⛈️
    ("thunderstorm", "\u{26C8}\u{FE0F}"),   // ⛈️
    ("snowy", "\u{2744}\u{FE0F}"),          // ❄️
    ("snow", "\u{2744}\u{FE0F}"),           // ❄️
    ("foggy", "\u{1F32B}\u{FE0F}"),         // 🌫️
    ("hazy", "\u{1F32B}\u{FE0F}"),          // 🌫️
    ("windy", "\u{1F4A8}"),                 // 💨
];

pub const DEFAULT_ICON: &str = "\u{1F324}\u{FE0F}"; // 🌤️

pub fn weather_icon(description: &str) -> &'static str {
    let description = description.to_lowercase();

    WEATHER_ICONS
        .iter()
        .find(|(pattern, _)| description.contains(pattern))
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_ICON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(weather_icon("Sunny"), "\u{2600}\u{FE0F}");
        assert_eq!(weather_icon("CLEAR SKY"), "\u{2600}\u{FE0F}");
    }

    #[test]
    fn test_first_match_wins_in_table_order() {
        // Both "light rain" and "windy"-adjacent words appear; the earlier
        // table entry decides.
        assert_eq!(weather_icon("Light rain and wind"), "\u{1F326}\u{FE0F}");
        // "partly cloudy" precedes the bare "cloudy" entry.
        assert_eq!(weather_icon("Partly cloudy"), "\u{26C5}");
    }

    #[test]
    fn test_substring_containment() {
        assert_eq!(weather_icon("Hazy"), "\u{1F32B}\u{FE0F}");
        assert_eq!(weather_icon("Overcast with drizzle"), "\u{2601}\u{FE0F}");
    }

    #[test]
    fn test_default_icon_for_unknown_description() {
        assert_eq!(weather_icon("Hot and humid"), DEFAULT_ICON);
        assert_eq!(weather_icon(""), DEFAULT_ICON);
    }
}
