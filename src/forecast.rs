use chrono::{DateTime, NaiveDate, TimeDelta, Utc};

/// One timestamped forecast slot as returned by the provider, normalized
/// to metric units (Celsius, m/s, hPa)
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSample {
    pub timestamp_utc: DateTime<Utc>,
    pub temperature_c: f64,
    pub humidity_pct: u8,
    pub weather_description: String,
    pub wind_speed_ms: f64,
    pub wind_direction_deg: f64,
    pub pressure_hpa: f64,
    pub precipitation_probability: f64,
}

/// The single representative sample selected for one calendar date
#[derive(Debug, Clone, PartialEq)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub sample: ForecastSample,
}

/// Picks one representative sample per UTC calendar date for the three day
/// window starting at the given reference date.
///
/// The first sample encountered for an in-window date wins, later samples for
/// the same date are ignored. Entries keep the first-occurrence order of their
/// dates in the input, the result is never re-sorted. Samples dated outside
/// the window are discarded. An empty input yields an empty result.
///
/// # Arguments
///
/// * 'samples' - forecast slots in provider order
/// * 'reference_date' - the UTC date acting as "today"
pub fn select_daily_forecasts(samples: &[ForecastSample], reference_date: NaiveDate) -> Vec<DailyForecast> {
    let window = [
        reference_date,
        reference_date + TimeDelta::days(1),
        reference_date + TimeDelta::days(2),
    ];

    let mut daily: Vec<DailyForecast> = Vec::with_capacity(window.len());

    for sample in samples {
        let date = sample.timestamp_utc.date_naive();
        if window.contains(&date) && !daily.iter().any(|d| d.date == date) {
            daily.push(DailyForecast { date, sample: sample.clone() });
        }
    }

    daily
}
