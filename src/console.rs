use crate::forecast::DailyForecast;
use crate::manager_owm::Location;

/// Prints the selected 3 day forecast in result order
///
/// # Arguments
///
/// * 'location' - location descriptor resolved by the provider
/// * 'daily' - selection result, one entry per day
pub fn print_forecast(location: &Location, daily: &[DailyForecast]) {
    print!("{}", format_forecast(location, daily));
}

fn format_forecast(location: &Location, daily: &[DailyForecast]) -> String {
    let mut out = String::new();

    out.push_str(&format!("Weather forecast for {}, {}:\n\n", location.name, location.country));

    for forecast in daily {
        let s = &forecast.sample;
        out.push_str(&format!("{}:\n", forecast.date.format("%A, %d %B %Y")));
        out.push_str(&format!("  Temperature: {}°C\n", s.temperature_c));
        out.push_str(&format!("  Humidity: {}%\n", s.humidity_pct));
        out.push_str(&format!("  Weather: {}\n", capitalize(&s.weather_description)));
        out.push_str(&format!("  Wind: {} m/s, {}°\n", s.wind_speed_ms, s.wind_direction_deg));
        out.push_str(&format!("  Atmospheric Pressure: {} hPa\n", s.pressure_hpa));
        out.push_str(&format!("  Precipitation Probability: {:.0}%\n", s.precipitation_probability * 100.0));
        out.push('\n');
    }

    out
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use crate::forecast::ForecastSample;

    #[test]
    fn formats_one_day_block() {
        let location = Location { name: "Uppsala".to_string(), country: "SE".to_string() };
        let daily = vec![DailyForecast {
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            sample: ForecastSample {
                timestamp_utc: Utc.with_ymd_and_hms(2024, 5, 1, 6, 0, 0).unwrap(),
                temperature_c: 16.3,
                humidity_pct: 72,
                weather_description: "light rain".to_string(),
                wind_speed_ms: 4.1,
                wind_direction_deg: 215.0,
                pressure_hpa: 1011.0,
                precipitation_probability: 0.35,
            },
        }];

        let text = format_forecast(&location, &daily);

        assert!(text.starts_with("Weather forecast for Uppsala, SE:\n\n"));
        assert!(text.contains("Wednesday, 01 May 2024:\n"));
        assert!(text.contains("  Temperature: 16.3°C\n"));
        assert!(text.contains("  Humidity: 72%\n"));
        assert!(text.contains("  Weather: Light rain\n"));
        assert!(text.contains("  Wind: 4.1 m/s, 215°\n"));
        assert!(text.contains("  Atmospheric Pressure: 1011 hPa\n"));
        assert!(text.contains("  Precipitation Probability: 35%\n"));
    }

    #[test]
    fn empty_selection_formats_header_only() {
        let location = Location { name: "Uppsala".to_string(), country: "SE".to_string() };
        let text = format_forecast(&location, &[]);

        assert_eq!(text, "Weather forecast for Uppsala, SE:\n\n");
    }
}
