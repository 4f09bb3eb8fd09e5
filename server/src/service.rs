use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::provider::{ProviderError, WeatherProvider, WeatherRecord};

/// Outcome of a single lookup. A missing city is an ordinary variant,
/// not an error; only provider faults surface as `Err` from `lookup`.
#[derive(Debug)]
pub enum WeatherResult {
    Found {
        city: String,
        country: String,
        record: WeatherRecord,
        timestamp: DateTime<Utc>,
    },
    NotFound {
        requested: String,
        known_cities: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CityList {
    pub cities: Vec<String>,
    pub count: usize,
}

pub struct WeatherService {
    provider: Arc<dyn WeatherProvider>,
}

impl WeatherService {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self { provider }
    }

    /// Look up weather for a city. The city is normalized (trim +
    /// lowercase) into the provider key; the response carries the
    /// title-cased original and the upper-cased country code.
    pub async fn lookup(&self, city: &str, country: &str) -> Result<WeatherResult, ProviderError> {
        let city_key = city.trim().to_lowercase();

        match self.provider.fetch(&city_key, country).await {
            Ok(record) => Ok(WeatherResult::Found {
                city: title_case(city),
                country: country.to_uppercase(),
                record,
                timestamp: Utc::now(),
            }),
            Err(ProviderError::NotFound { .. }) => Ok(WeatherResult::NotFound {
                requested: city.to_string(),
                known_cities: self.provider.known_cities(),
            }),
            Err(e) => Err(e),
        }
    }

    pub fn list_cities(&self) -> CityList {
        let cities = self.provider.known_cities();
        let count = cities.len();
        CityList { cities, count }
    }
}

/// Title-case a city name: uppercase at the start of each alphabetic run,
/// lowercase within it. Non-alphabetic characters delimit words and pass
/// through unchanged ("new york" -> "New York", "LONDON" -> "London").
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;

    for ch in input.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }

    out
}
