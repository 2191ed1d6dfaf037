use std::fmt;
use std::fmt::Formatter;
use log4rs::config::runtime::ConfigErrors;
use log::SetLoggerError;
use crate::manager_owm::errors::OWMError;

/// Error representing an unrecoverable error that will halt the application
///
#[derive(Debug)]
pub struct UnrecoverableError(pub String);
impl fmt::Display for UnrecoverableError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "UnrecoverableError: {}", self.0)
    }
}
impl From<std::io::Error> for UnrecoverableError {
    fn from(e: std::io::Error) -> Self { UnrecoverableError(e.to_string()) }
}
impl From<ConfigError> for UnrecoverableError {
    fn from(e: ConfigError) -> Self {
        UnrecoverableError(e.to_string())
    }
}
impl From<OWMError> for UnrecoverableError {
    fn from(e: OWMError) -> Self { UnrecoverableError(e.to_string()) }
}

/// Errors while managing configuration
///
#[derive(Debug)]
pub struct ConfigError(pub String);

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ConfigError: {}", self.0)
    }
}
impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self { ConfigError(e.to_string()) }
}
impl From<SetLoggerError> for ConfigError {
    fn from(e: SetLoggerError) -> Self {
        ConfigError(e.to_string())
    }
}
impl From<ConfigErrors> for ConfigError {
    fn from(e: ConfigErrors) -> Self {
        ConfigError(e.to_string())
    }
}
impl From<&str> for ConfigError {
    fn from(e: &str) -> Self { ConfigError(e.to_string()) }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError(e.to_string())
    }
}

/// Errors while fetching and selecting a forecast, reported to the user
/// as plain messages and never retried
///
#[derive(Debug)]
pub enum WeatherError {
    ProviderUnavailable(String),
    NoData(String),
}

impl fmt::Display for WeatherError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            WeatherError::ProviderUnavailable(_) => write!(f, "Failed to fetch weather data."),
            WeatherError::NoData(_) => write!(f, "No weather data available."),
        }
    }
}
impl From<OWMError> for WeatherError {
    fn from(e: OWMError) -> Self {
        match e {
            OWMError::Provider(m) => WeatherError::ProviderUnavailable(m),
            OWMError::Document(m) => WeatherError::NoData(m),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weather_error_displays_plain_messages() {
        let unavailable = WeatherError::ProviderUnavailable("status code: 503".to_string());
        assert_eq!(unavailable.to_string(), "Failed to fetch weather data.");

        let no_data = WeatherError::NoData("empty forecast list".to_string());
        assert_eq!(no_data.to_string(), "No weather data available.");
    }

    #[test]
    fn owm_errors_map_to_weather_errors() {
        let e: WeatherError = OWMError::Provider("status code: 404".to_string()).into();
        assert!(matches!(e, WeatherError::ProviderUnavailable(_)));

        let e: WeatherError = OWMError::Document("missing list".to_string()).into();
        assert!(matches!(e, WeatherError::NoData(_)));
    }
}
