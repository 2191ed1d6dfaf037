pub mod errors;
mod models;

use std::time::Duration;
use chrono::DateTime;
use reqwest::Client;
use crate::forecast::ForecastSample;
use crate::manager_owm::errors::OWMError;
use crate::manager_owm::models::{FullForecast, TimeSlot};

pub use crate::manager_owm::models::Location;

/// Struct for managing weather forecasts produced by OpenWeatherMap
pub struct OWM {
    client: Client,
    url: String,
    api_key: String,
    units: String,
}

impl OWM {
    /// Returns an OWM struct ready for fetching and processing weather
    /// forecasts from the OpenWeatherMap forecast API
    ///
    /// # Arguments
    ///
    /// * 'url' - base url of the forecast endpoint
    /// * 'api_key' - OpenWeatherMap access credential
    /// * 'units' - unit system requested from the provider, e.g. "metric"
    pub fn new(url: &str, api_key: &str, units: &str) -> Result<OWM, OWMError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            url: url.to_string(),
            api_key: api_key.to_string(),
            units: units.to_string(),
        })
    }

    /// Retrieves a forecast from OpenWeatherMap for the given location.
    /// The raw forecast consists of several days worth of 3-hourly slots,
    /// returned in provider (chronological) order together with the resolved
    /// location descriptor. Trimming to the 3 day window is left to the caller.
    ///
    /// A non-success response status yields `OWMError::Provider`, a payload
    /// without usable forecast slots yields `OWMError::Document`.
    ///
    /// # Arguments
    ///
    /// * 'location' - free-text place name to get a forecast for
    pub async fn fetch_forecast(&self, location: &str) -> Result<(Location, Vec<ForecastSample>), OWMError> {
        let req = self.client
            .get(&self.url)
            .query(&[("q", location), ("appid", &self.api_key), ("units", &self.units)])
            .send().await?;

        let status = req.status();
        if !status.is_success() {
            return Err(OWMError::Provider(format!("Error while fetching forecast from OpenWeatherMap: {}", status)));
        }

        let json = req.text().await?;
        let full_forecast: FullForecast = serde_json::from_str(&json)?;

        let samples = to_samples(full_forecast.list);
        if samples.is_empty() {
            Err(OWMError::Document(format!("No forecast found for {}", location)))
        } else {
            Ok((
                Location {
                    name: full_forecast.city.name,
                    country: full_forecast.city.country,
                },
                samples,
            ))
        }
    }
}

/// Converts raw provider slots into forecast samples, keeping provider order.
/// Slots without a resolvable timestamp or without any weather condition are
/// dropped rather than failing the whole forecast.
fn to_samples(slots: Vec<TimeSlot>) -> Vec<ForecastSample> {
    let mut samples = Vec::with_capacity(slots.len());

    for slot in slots {
        let Some(timestamp_utc) = DateTime::from_timestamp(slot.dt, 0) else {
            continue;
        };
        let Some(condition) = slot.weather.into_iter().next() else {
            continue;
        };

        samples.push(ForecastSample {
            timestamp_utc,
            temperature_c: slot.main.temp,
            humidity_pct: slot.main.humidity,
            weather_description: condition.description,
            wind_speed_ms: slot.wind.speed,
            wind_direction_deg: slot.wind.deg,
            pressure_hpa: slot.main.pressure,
            precipitation_probability: slot.pop,
        });
    }

    samples
}

#[cfg(test)]
mod tests {
    use super::*;

    const SLOT_WITH_POP: &str = r#"{
        "dt": 1714557600,
        "main": {"temp": 16.3, "humidity": 72, "pressure": 1011.0},
        "weather": [{"description": "light rain"}],
        "wind": {"speed": 4.1, "deg": 215.0},
        "pop": 0.35
    }"#;

    const SLOT_WITHOUT_POP: &str = r#"{
        "dt": 1714557600,
        "main": {"temp": 16.3, "humidity": 72, "pressure": 1011.0},
        "weather": [{"description": "clear sky"}],
        "wind": {"speed": 4.1, "deg": 215.0}
    }"#;

    #[test]
    fn slot_with_pop_decodes() {
        let slot: TimeSlot = serde_json::from_str(SLOT_WITH_POP).unwrap();
        assert_eq!(slot.pop, 0.35);
        assert_eq!(slot.weather[0].description, "light rain");
    }

    #[test]
    fn missing_pop_defaults_to_zero() {
        let slot: TimeSlot = serde_json::from_str(SLOT_WITHOUT_POP).unwrap();
        let samples = to_samples(vec![slot]);

        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].precipitation_probability, 0.0);
    }

    #[test]
    fn slot_without_conditions_is_dropped() {
        let json = r#"{
            "dt": 1714557600,
            "main": {"temp": 16.3, "humidity": 72, "pressure": 1011.0},
            "weather": [],
            "wind": {"speed": 4.1, "deg": 215.0}
        }"#;
        let slot: TimeSlot = serde_json::from_str(json).unwrap();

        assert!(to_samples(vec![slot]).is_empty());
    }

    #[test]
    fn full_forecast_decodes_city_and_slots() {
        let json = format!(
            r#"{{"city": {{"name": "Uppsala", "country": "SE"}}, "list": [{}, {}]}}"#,
            SLOT_WITH_POP, SLOT_WITHOUT_POP
        );
        let full: FullForecast = serde_json::from_str(&json).unwrap();

        assert_eq!(full.city.name, "Uppsala");
        assert_eq!(full.city.country, "SE");
        assert_eq!(to_samples(full.list).len(), 2);
    }

    #[test]
    fn missing_list_decodes_to_no_samples() {
        let json = r#"{"city": {"name": "Uppsala", "country": "SE"}}"#;
        let full: FullForecast = serde_json::from_str(json).unwrap();

        assert!(to_samples(full.list).is_empty());
    }
}
