//! Mock weather forecast generation
//!
//! The system carries no real weather data: entries are drawn from a
//! plausible range for the destination's climate bucket. The RNG is
//! injected so tests can seed it and get reproducible forecasts.

use chrono::{Duration, NaiveDate};
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::models::{ClimateBucket, WeatherCondition, WeatherEntry};

/// Number of forecast entries generated per request
pub const FORECAST_DAYS: usize = 14;

const CONDITIONS: [WeatherCondition; 4] = [
    WeatherCondition::Sunny,
    WeatherCondition::PartlyCloudy,
    WeatherCondition::Cloudy,
    WeatherCondition::Rainy,
];

/// Temperature range (°F) for a climate bucket
fn temperature_range(climate: ClimateBucket) -> (i32, i32) {
    match climate {
        ClimateBucket::Tropical => (75, 95),
        ClimateBucket::Temperate => (65, 85),
        ClimateBucket::Cold => (30, 55),
    }
}

/// Generate a 14-day mock forecast starting at the trip start date
pub fn mock_forecast(
    start: NaiveDate,
    climate: ClimateBucket,
    rng: &mut impl Rng,
) -> Vec<WeatherEntry> {
    let (min_temp, max_temp) = temperature_range(climate);

    (0..FORECAST_DAYS)
        .map(|offset| {
            let condition = *CONDITIONS.choose(rng).unwrap_or(&WeatherCondition::Sunny);
            let precipitation_chance = if condition == WeatherCondition::Rainy {
                rng.random_range(10..=30)
            } else {
                rng.random_range(0..=10)
            };

            WeatherEntry {
                date: start + Duration::days(offset as i64),
                temperature_f: rng.random_range(min_temp..=max_temp),
                condition,
                precipitation_chance,
            }
        })
        .collect()
}
