use actix_web::{get, web, HttpResponse, Responder};
use log::{error, info};
use serde::Deserialize;
use crate::charts::all_charts;
use crate::dashboard::AppState;
use crate::errors::WeatherError;
use crate::fetch_daily;

#[derive(Deserialize, Debug)]
struct ForecastQuery {
    location: String,
}

#[get("/")]
pub async fn index() -> impl Responder {
    html_response(page("Please enter a location and click Submit.", ""))
}

#[get("/forecast")]
pub async fn forecast(params: web::Query<ForecastQuery>, data: web::Data<AppState>) -> impl Responder {
    info!("{:?}", params);

    let location = params.location.trim();
    if location.is_empty() {
        return html_response(page("Please enter a location and click Submit.", ""));
    }

    match render_forecast(&data, location).await {
        Ok(body) => html_response(body),
        Err(e) => {
            error!("forecast request for '{}' failed: {:?}", location, e);
            html_response(page(&e.to_string(), ""))
        }
    }
}

/// Runs the fetch, select and render sequence for one submission. The
/// returned page replaces the status line and every chart at once.
async fn render_forecast(data: &AppState, location: &str) -> Result<String, WeatherError> {
    let (resolved, daily) = fetch_daily(&data.owm, location).await?;

    let status = format!("Weather forecast for {}, {}:", resolved.name, resolved.country);
    let charts_html: Vec<String> = all_charts(&daily)
        .into_iter()
        .map(|(slug, plot)| plot.to_inline_html(Some(slug)))
        .collect();

    Ok(page(&status, &charts_html.join("\n")))
}

fn html_response(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

fn page(status_line: &str, charts_html: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Weather Forecast Dashboard</title>
<script src="https://cdn.plot.ly/plotly-2.12.1.min.js"></script>
</head>
<body style="text-align: center; background-color: #111; color: #eee; font-family: sans-serif">
<h1>Weather Forecast Dashboard</h1>
<form action="/forecast" method="get" style="margin-bottom: 20px">
<input type="text" name="location" placeholder="Enter location">
<button type="submit">Submit</button>
</form>
<div style="margin-bottom: 20px">{status_line}</div>
{charts_html}
</body>
</html>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_carries_status_line_and_charts() {
        let body = page("Weather forecast for Uppsala, SE:", "<div id=\"wind-polar\"></div>");

        assert!(body.contains("Weather forecast for Uppsala, SE:"));
        assert!(body.contains("<div id=\"wind-polar\"></div>"));
        assert!(body.contains("cdn.plot.ly"));
        assert!(body.contains("name=\"location\""));
    }
}
