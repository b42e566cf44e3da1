//! Contact relay Lambda handler.
//!
//! This module handles:
//! - Method gating (POST only)
//! - Body extraction and field validation
//! - Relaying the submission through the configured `Mailer`

use super::{
    ALL_FIELDS_REQUIRED, EMAIL_SENT, INVALID_BODY, METHOD_NOT_ALLOWED, SEND_FAILED, helpers,
    parsing, relay,
};
use crate::core::config::AppConfig;
use crate::mail::Mailer;
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info, warn};
use uuid::Uuid;

pub use self::function_handler as handler;

/// Per-cold-start state shared across invocations.
pub struct RelayState {
    pub config: AppConfig,
    pub mailer: Box<dyn Mailer>,
}

impl RelayState {
    #[must_use]
    pub fn new(config: AppConfig, mailer: Box<dyn Mailer>) -> Self {
        Self { config, mailer }
    }
}

/// Lambda handler for the contact endpoint.
///
/// # Errors
///
/// Never returns an error for request-level failures; those are rendered as
/// 4xx/5xx response envelopes.
#[tracing::instrument(level = "info", skip(event, state), fields(request_id = %event.context.request_id))]
pub async fn function_handler(
    event: LambdaEvent<Value>,
    state: &RelayState,
) -> Result<Value, Error> {
    Ok(handle_request(&event.payload, state).await)
}

/// Processes one gateway event and returns the response envelope.
pub async fn handle_request(payload: &Value, state: &RelayState) -> Value {
    let correlation_id = Uuid::new_v4().to_string();

    // ========================================================================
    // Only POST is accepted
    // ========================================================================

    let method = parsing::request_method(payload).unwrap_or_default();
    let xray = payload
        .get("headers")
        .and_then(|h| parsing::get_header_value(h, "X-Amzn-Trace-Id"))
        .unwrap_or("");
    info!(
        correlation_id = %correlation_id,
        method = %method,
        xray_trace_id = %xray,
        path = parsing::request_path(payload).unwrap_or_default(),
        "Contact relay received request"
    );

    if !method.eq_ignore_ascii_case("POST") {
        warn!(correlation_id = %correlation_id, method = %method, "Rejected non-POST request");
        return helpers::err_response(405, METHOD_NOT_ALLOWED);
    }

    // ========================================================================
    // Parse and validate the submission
    // ========================================================================

    let request = match parsing::parse_contact_request(payload) {
        Ok(r) => r,
        Err(e) => {
            warn!(correlation_id = %correlation_id, "Unreadable contact body: {}", e);
            return helpers::err_response(400, INVALID_BODY);
        }
    };

    let submission = match request.validate() {
        Ok(s) => s,
        Err(e) => {
            warn!(correlation_id = %correlation_id, "Incomplete contact submission: {}", e);
            return helpers::err_response(400, ALL_FIELDS_REQUIRED);
        }
    };

    // ========================================================================
    // Relay
    // ========================================================================

    match relay::relay_submission(&submission, &state.config, state.mailer.as_ref()).await {
        Ok(()) => {
            info!(correlation_id = %correlation_id, "Contact submission relayed");
            helpers::ok_sent(EMAIL_SENT)
        }
        Err(e) => {
            error!(correlation_id = %correlation_id, "Error sending email: {}", e);
            helpers::err_with_details(500, SEND_FAILED, e.detail())
        }
    }
}
