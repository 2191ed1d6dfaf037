use serde::Deserialize;

#[derive(Deserialize)]
pub struct Main {
    pub temp: f64,
    pub humidity: u8,
    pub pressure: f64,
}

#[derive(Deserialize)]
pub struct Condition {
    pub description: String,
}

#[derive(Deserialize)]
pub struct Wind {
    pub speed: f64,
    pub deg: f64,
}

#[derive(Deserialize)]
pub struct TimeSlot {
    pub dt: i64,
    pub main: Main,
    #[serde(default)]
    pub weather: Vec<Condition>,
    pub wind: Wind,
    #[serde(default)]
    pub pop: f64,
}

#[derive(Deserialize)]
pub struct City {
    pub name: String,
    pub country: String,
}

#[derive(Deserialize)]
pub struct FullForecast {
    pub city: City,
    #[serde(default)]
    pub list: Vec<TimeSlot>,
}

/// Descriptor of the location the provider resolved the query to
#[derive(Debug, Clone)]
pub struct Location {
    pub name: String,
    pub country: String,
}
