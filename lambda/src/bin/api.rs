use contact_relay::api::{RelayState, handler};
use contact_relay::core::config::AppConfig;
use contact_relay::mail::SmtpMailer;
use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::Value;
use tracing::error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    contact_relay::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;
    let mailer = SmtpMailer::new(&config).map_err(|e| {
        error!("Failed to build SMTP transport: {}", e);
        Error::from(e)
    })?;

    let state = RelayState::new(config, Box::new(mailer));
    let state = &state;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        handler(event, state).await
    }))
    .await
}
