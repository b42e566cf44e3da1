/// Contact relay - the serverless function behind a portfolio site's contact form.
///
/// A single Lambda accepts `POST` submissions of `{ name, email, subject, message }`,
/// validates them, and sends two emails over SMTP: a notification to the site
/// owner and an auto-reply to the submitter.
///
/// # Architecture
///
/// The crate uses:
/// - AWS Lambda (`lambda_runtime`) for serverless execution
/// - lettre for SMTP delivery behind the `Mailer` trait
/// - reqwest for the site-side submit client
/// - Tokio for async runtime
///
/// # Example
///
/// ```no_run
/// use contact_relay::api::{RelayState, handle_request};
/// use contact_relay::core::config::AppConfig;
/// use contact_relay::mail::SmtpMailer;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     contact_relay::setup_logging();
///
///     let config = AppConfig::from_env()?;
///     let mailer = SmtpMailer::new(&config)?;
///     let state = RelayState::new(config, Box::new(mailer));
///
///     let event = serde_json::json!({
///         "httpMethod": "POST",
///         "body": r#"{"name":"A","email":"a@x.com","subject":"Hi","message":"test"}"#
///     });
///     let response = handle_request(&event, &state).await;
///     println!("{}", response["statusCode"]);
///     Ok(())
/// }
/// ```
// Module declarations
pub mod api;
pub mod client;
pub mod core;
pub mod errors;
pub mod mail;

pub use errors::RelayError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Sets up tracing-subscriber with a JSON formatter suitable for `CloudWatch`
/// Logs. The level comes from `RUST_LOG` and defaults to `info`.
///
/// # Example
///
/// ```
/// contact_relay::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
