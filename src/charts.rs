use std::fs;
use std::io;
use std::path::Path;
use log::info;
use plotly::box_plot::BoxMean;
use plotly::common::{ColorScale, ColorScalePalette, Marker, Mode, Title};
use plotly::layout::{Axis, BarMode};
use plotly::{Bar, BoxPlot, HeatMap, Layout, Pie, Plot, Scatter, ScatterPolar};
use crate::forecast::DailyForecast;

fn date_labels(daily: &[DailyForecast]) -> Vec<String> {
    daily.iter().map(|d| d.date.format("%A, %d %B %Y").to_string()).collect()
}

/// Grouped bar chart of temperature and humidity per day
pub fn temperature_humidity_bar(daily: &[DailyForecast]) -> Plot {
    let dates = date_labels(daily);
    let temps: Vec<f64> = daily.iter().map(|d| d.sample.temperature_c).collect();
    let humidities: Vec<u8> = daily.iter().map(|d| d.sample.humidity_pct).collect();

    let mut plot = Plot::new();
    plot.add_trace(
        Bar::new(dates.clone(), temps)
            .name("Temperature (°C)")
            .marker(Marker::new().color("blue")),
    );
    plot.add_trace(
        Bar::new(dates, humidities)
            .name("Humidity (%)")
            .marker(Marker::new().color("orange")),
    );
    plot.set_layout(
        Layout::new()
            .title(Title::with_text("Temperature and Humidity for the Next 3 Days"))
            .bar_mode(BarMode::Group)
            .x_axis(Axis::new().title(Title::with_text("Date")))
            .y_axis(Axis::new().title(Title::with_text("Value"))),
    );

    plot
}

/// Pie chart of weather condition frequency across the window
pub fn condition_pie(daily: &[DailyForecast]) -> Plot {
    let mut conditions: Vec<(String, u32)> = Vec::new();
    for forecast in daily {
        let description = &forecast.sample.weather_description;
        match conditions.iter_mut().find(|(c, _)| c == description) {
            Some((_, count)) => *count += 1,
            None => conditions.push((description.clone(), 1)),
        }
    }

    let labels: Vec<String> = conditions.iter().map(|(c, _)| c.clone()).collect();
    let values: Vec<u32> = conditions.iter().map(|(_, n)| *n).collect();

    let mut plot = Plot::new();
    plot.add_trace(Pie::new(values).labels(labels));
    plot.set_layout(
        Layout::new().title(Title::with_text("Weather Condition Distribution for the Next 3 Days")),
    );

    plot
}

/// Humidity level of the first day on a fixed 0-100 scale. The plotly crate
/// has no gauge trace, a single bounded bar carries the same reading.
pub fn humidity_gauge(daily: &[DailyForecast]) -> Plot {
    let humidity: Vec<u8> = daily.first().map(|d| d.sample.humidity_pct).into_iter().collect();
    let label: Vec<String> = humidity.iter().map(|_| "Humidity".to_string()).collect();

    let mut plot = Plot::new();
    plot.add_trace(
        Bar::new(label, humidity).marker(Marker::new().color("blue")),
    );
    plot.set_layout(
        Layout::new()
            .title(Title::with_text("Current Humidity (%)"))
            .y_axis(Axis::new().range(vec![0.0, 100.0])),
    );

    plot
}

/// Box plot of the temperatures in the window
pub fn temperature_box(daily: &[DailyForecast]) -> Plot {
    let temps: Vec<f64> = daily.iter().map(|d| d.sample.temperature_c).collect();

    let mut plot = Plot::new();
    plot.add_trace(
        BoxPlot::new(temps)
            .name("Temperature (°C)")
            .box_mean(BoxMean::True),
    );
    plot.set_layout(
        Layout::new()
            .title(Title::with_text("Temperature Variability for the Next 3 Days"))
            .y_axis(Axis::new().title(Title::with_text("Temperature (°C)"))),
    );

    plot
}

/// Two row heatmap, temperature on one row and humidity on the other
pub fn temperature_humidity_heatmap(daily: &[DailyForecast]) -> Plot {
    let dates = date_labels(daily);
    let temps: Vec<f64> = daily.iter().map(|d| d.sample.temperature_c).collect();
    let humidities: Vec<f64> = daily.iter().map(|d| d.sample.humidity_pct as f64).collect();

    let mut plot = Plot::new();
    plot.add_trace(
        HeatMap::new(
            dates,
            vec!["Temperature (°C)".to_string(), "Humidity (%)".to_string()],
            vec![temps, humidities],
        )
        .color_scale(ColorScale::Palette(ColorScalePalette::Viridis)),
    );
    plot.set_layout(
        Layout::new().title(Title::with_text("Temperature and Humidity Heatmap for the Next 3 Days")),
    );

    plot
}

/// Polar chart of wind speed by direction
pub fn wind_polar(daily: &[DailyForecast]) -> Plot {
    let directions: Vec<f64> = daily.iter().map(|d| d.sample.wind_direction_deg).collect();
    let speeds: Vec<f64> = daily.iter().map(|d| d.sample.wind_speed_ms).collect();

    let mut plot = Plot::new();
    plot.add_trace(
        ScatterPolar::new(directions, speeds)
            .mode(Mode::Markers)
            .name("Wind speed (m/s)")
            .marker(Marker::new().size(12).color("blue")),
    );
    plot.set_layout(Layout::new().title(Title::with_text("Wind Speed and Direction")));

    plot
}

/// Line chart of atmospheric pressure over the days
pub fn pressure_line(daily: &[DailyForecast]) -> Plot {
    let dates = date_labels(daily);
    let pressures: Vec<f64> = daily.iter().map(|d| d.sample.pressure_hpa).collect();

    let mut plot = Plot::new();
    plot.add_trace(
        Scatter::new(dates, pressures)
            .mode(Mode::LinesMarkers)
            .line(plotly::common::Line::new().color("purple")),
    );
    plot.set_layout(
        Layout::new()
            .title(Title::with_text("Atmospheric Pressure Over the Next 3 Days"))
            .x_axis(Axis::new().title(Title::with_text("Date")))
            .y_axis(Axis::new().title(Title::with_text("Pressure (hPa)"))),
    );

    plot
}

/// Precipitation probability bars with a temperature line on a secondary axis
pub fn precipitation_temperature(daily: &[DailyForecast]) -> Plot {
    let dates = date_labels(daily);
    let temps: Vec<f64> = daily.iter().map(|d| d.sample.temperature_c).collect();
    let precip_probs: Vec<f64> = daily.iter().map(|d| d.sample.precipitation_probability * 100.0).collect();

    let mut plot = Plot::new();
    plot.add_trace(
        Bar::new(dates.clone(), precip_probs)
            .name("Precipitation Probability (%)")
            .marker(Marker::new().color("blue")),
    );
    plot.add_trace(
        Scatter::new(dates, temps)
            .name("Temperature (°C)")
            .mode(Mode::LinesMarkers)
            .line(plotly::common::Line::new().color("orange"))
            .y_axis("y2"),
    );
    plot.set_layout(
        Layout::new()
            .title(Title::with_text("Precipitation Probability and Temperature Over the Next 3 Days"))
            .x_axis(Axis::new().title(Title::with_text("Date")))
            .y_axis(Axis::new().title(Title::with_text("Precipitation Probability (%)")))
            .y_axis2(
                Axis::new()
                    .title(Title::with_text("Temperature (°C)"))
                    .overlaying("y")
                    .side(plotly::common::AxisSide::Right),
            ),
    );

    plot
}

/// Builds every chart projection of the selection, in display order,
/// keyed by a slug usable as file name or element id
pub fn all_charts(daily: &[DailyForecast]) -> Vec<(&'static str, Plot)> {
    vec![
        ("temperature-humidity-bar", temperature_humidity_bar(daily)),
        ("condition-pie", condition_pie(daily)),
        ("humidity-gauge", humidity_gauge(daily)),
        ("temperature-box", temperature_box(daily)),
        ("temperature-humidity-heatmap", temperature_humidity_heatmap(daily)),
        ("wind-polar", wind_polar(daily)),
        ("pressure-line", pressure_line(daily)),
        ("precipitation-temperature", precipitation_temperature(daily)),
    ]
}

/// Writes every chart as a standalone html file in the given directory
///
/// # Arguments
///
/// * 'daily' - selection result to render
/// * 'output_dir' - directory to write the html files into
pub fn write_charts(daily: &[DailyForecast], output_dir: &str) -> Result<(), io::Error> {
    fs::create_dir_all(output_dir)?;

    for (slug, plot) in all_charts(daily) {
        let path = Path::new(output_dir).join(format!("{}.html", slug));
        plot.write_html(&path);
        info!("wrote {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeDelta, TimeZone, Utc};
    use crate::forecast::ForecastSample;

    fn three_days() -> Vec<DailyForecast> {
        (0..3)
            .map(|i| {
                let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap() + TimeDelta::days(i);
                DailyForecast {
                    date,
                    sample: ForecastSample {
                        timestamp_utc: Utc.with_ymd_and_hms(2024, 5, 1 + i as u32, 6, 0, 0).unwrap(),
                        temperature_c: 14.0 + i as f64,
                        humidity_pct: 60 + i as u8,
                        weather_description: if i == 0 { "clear sky" } else { "light rain" }.to_string(),
                        wind_speed_ms: 3.0 + i as f64,
                        wind_direction_deg: 90.0 * i as f64,
                        pressure_hpa: 1010.0 + i as f64,
                        precipitation_probability: 0.1 * i as f64,
                    },
                }
            })
            .collect()
    }

    #[test]
    fn all_charts_build_from_a_full_window() {
        let daily = three_days();
        let charts = all_charts(&daily);

        assert_eq!(charts.len(), 8);
        for (slug, plot) in charts {
            assert!(!plot.to_json().is_empty(), "empty plot for {}", slug);
        }
    }

    #[test]
    fn all_charts_tolerate_an_empty_selection() {
        let charts = all_charts(&[]);

        assert_eq!(charts.len(), 8);
        for (_, plot) in charts {
            plot.to_json();
        }
    }

    #[test]
    fn condition_pie_counts_description_frequency() {
        let daily = three_days();
        let plot = condition_pie(&daily);
        let json = plot.to_json();

        assert!(json.contains("clear sky"));
        assert!(json.contains("light rain"));
    }

    #[test]
    fn humidity_gauge_uses_the_first_day_only() {
        let daily = three_days();
        let plot = humidity_gauge(&daily);
        let json = plot.to_json();

        assert!(json.contains("60"));
        assert!(!json.contains("62"));
    }
}
