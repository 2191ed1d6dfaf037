use actix_web::{web, App, HttpServer};
use log::info;
use crate::errors::UnrecoverableError;
use crate::handlers::{forecast, index};
use crate::initialization::Config;
use crate::manager_owm::OWM;

pub struct AppState {
    pub owm: OWM,
}

/// Serves the dashboard until the process is stopped
///
/// # Arguments
///
/// * 'config' - application configuration with provider and bind settings
pub async fn run(config: Config) -> Result<(), UnrecoverableError> {
    let owm = OWM::new(&config.owm.url, &config.owm.api_key, &config.owm.units)?;
    let state = web::Data::new(AppState { owm });

    info!("dashboard listening on {}:{}", config.web_server.bind_address, config.web_server.bind_port);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(index)
            .service(forecast)
    })
        .bind((config.web_server.bind_address, config.web_server.bind_port))?
        .run()
        .await?;

    Ok(())
}
