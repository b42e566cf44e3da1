//! Contact-form submit flow as seen from the site.
//!
//! Posts the form to the relay endpoint and turns the outcome into the
//! transient notification the page shows.

use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};
use std::env;
use tracing::{error, info};
use url::Url;

use crate::errors::RelayError;

const DEFAULT_API_URL: &str = "http://localhost:8000";
const CONTACT_PATH: &str = "/api/contact";

/// Form state backing the contact section.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Success body returned by the relay. Missing fields fall back to defaults;
/// any 2xx JSON body counts as delivered.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SubmitReceipt {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationVariant {
    Success,
    Destructive,
}

/// A toast shown after a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: &'static str,
    pub description: &'static str,
    pub variant: NotificationVariant,
}

impl Notification {
    #[must_use]
    pub fn from_outcome(outcome: &Result<SubmitReceipt, RelayError>) -> Self {
        match outcome {
            Ok(_) => Self {
                title: "Message Sent! ✨",
                description: "Thanks for reaching out! I'll get back to you soon.",
                variant: NotificationVariant::Success,
            },
            Err(_) => Self {
                title: "Oops! Something went wrong",
                description: "Please try again or email me directly.",
                variant: NotificationVariant::Destructive,
            },
        }
    }
}

pub struct ContactClient {
    http: HttpClient,
    endpoint: Url,
}

impl ContactClient {
    /// # Errors
    ///
    /// Returns `RelayError::Config` if `base_url` is not a valid URL.
    pub fn new(base_url: &str) -> Result<Self, RelayError> {
        let endpoint = format!("{}{CONTACT_PATH}", base_url.trim_end_matches('/'));
        let endpoint = Url::parse(&endpoint)
            .map_err(|e| RelayError::Config(format!("invalid API URL '{base_url}': {e}")))?;

        Ok(Self {
            http: HttpClient::new(),
            endpoint,
        })
    }

    /// Uses `CONTACT_API_URL`, falling back to the local dev server.
    ///
    /// # Errors
    ///
    /// Returns `RelayError::Config` if the configured URL is invalid.
    pub fn from_env() -> Result<Self, RelayError> {
        let base = env::var("CONTACT_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(&base)
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// # Errors
    ///
    /// Returns `RelayError::HttpError` on transport failure or any non-2xx status.
    pub async fn submit(&self, form: &ContactForm) -> Result<SubmitReceipt, RelayError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RelayError::HttpError(format!(
                "Failed to send email (status {status})"
            )));
        }

        Ok(response.json::<SubmitReceipt>().await?)
    }

    /// Submits the form and clears it on success.
    pub async fn submit_and_notify(&self, form: &mut ContactForm) -> Notification {
        let outcome = self.submit(form).await;
        match &outcome {
            Ok(receipt) => {
                info!("Contact form delivered: {}", receipt.message);
                form.clear();
            }
            Err(e) => error!("Error sending email: {}", e),
        }
        Notification::from_outcome(&outcome)
    }
}
