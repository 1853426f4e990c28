mod mailer_initialization;
mod metadata_initialization;
mod web_initialization;

extern crate dotenv;

use crate::mailer_initialization::initialize_mailer;
use crate::metadata_initialization::initialize_metadata_client;
use crate::web_initialization::{get_port, initialize_web_settings};
use actix_web::{web, App, HttpServer};
use anyhow::Result;
use dotenv::dotenv;
use reelpost_common::environment::{get_optional_env_var, variables::LOG_FILTER};
use reelpost_mailer::SmtpMailer;
use reelpost_metadata::HttpMetadataClient;
use reelpost_web::{reelpost_config, ReelpostRootSpan};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(get_optional_env_var(LOG_FILTER).as_deref()))
        .init();

    info!("Initializing Reelpost...");

    let metadata_client = web::Data::new(initialize_metadata_client()?);
    let mailer = web::Data::new(initialize_mailer()?);
    let settings = web::Data::new(initialize_web_settings()?);
    let port = get_port()?;

    info!("Starting up web server...");
    let http_server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::<ReelpostRootSpan>::new())
            .app_data(metadata_client.clone())
            .app_data(mailer.clone())
            .app_data(settings.clone())
            .configure(reelpost_config::<HttpMetadataClient, SmtpMailer>)
    })
    .bind(format!("127.0.0.1:{}", port))?
    .run();

    info!("Reelpost started on port {}!", port);
    http_server.await?;

    info!("Shutting Reelpost down.");
    Ok(())
}

/// Build the logging filter from the configured directives, defaulting to warning logs and above
/// globally when none are given or they don't parse.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    let default_filter = || EnvFilter::default().add_directive(LevelFilter::WARN.into());
    match directives {
        Some(d) => EnvFilter::try_new(d).unwrap_or_else(|e| {
            eprintln!("Ignoring invalid {}: {}", LOG_FILTER, e);
            default_filter()
        }),
        None => default_filter(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_filter_keeps_configured_level() {
        // Act
        let actual = log_filter(Some("info"));

        // Assert
        assert_eq!(Some(LevelFilter::INFO), actual.max_level_hint());
    }

    #[test]
    fn log_filter_defaults_to_warn() {
        // Act
        let actual = log_filter(None);

        // Assert
        assert_eq!(Some(LevelFilter::WARN), actual.max_level_hint());
    }
}
