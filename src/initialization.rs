use std::fs;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use serde::Deserialize;
use crate::errors::ConfigError;

#[derive(Deserialize)]
pub struct Owm {
    pub url: String,
    pub api_key: String,
    pub units: String,
}

#[derive(Deserialize)]
pub struct WebServer {
    pub bind_address: String,
    pub bind_port: u16,
}

#[derive(Deserialize)]
pub struct Charts {
    pub output_dir: String,
}

#[derive(Deserialize)]
pub struct Config {
    pub owm: Owm,
    pub web_server: WebServer,
    pub charts: Charts,
}

/// Loads the application configuration from the given toml file
///
/// # Arguments
///
/// * 'path' - path to the configuration file
pub fn config(path: &str) -> Result<Config, ConfigError> {
    let toml_str = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&toml_str)?;

    Ok(config)
}

/// Sets up log4rs with a console appender on stderr, keeping stdout
/// free for the printed forecast
pub fn logging() -> Result<(), ConfigError> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%Y-%m-%d %H:%M:%S)} {h({l})} {t} - {m}{n}")))
        .build();

    let config = log4rs::config::Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Info))?;

    log4rs::init_config(config)?;

    Ok(())
}
