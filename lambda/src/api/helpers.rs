//! Gateway response builders.
//!
//! Every response is a proxy-integration envelope whose `body` is a JSON
//! string.

use serde_json::{Value, json};

fn envelope(status_code: u16, body: &Value) -> Value {
    json!({
        "statusCode": status_code,
        "headers": { "Content-Type": "application/json" },
        "body": body.to_string()
    })
}

/// Returns a 200 OK response confirming both emails went out.
#[must_use]
pub fn ok_sent(message: &str) -> Value {
    envelope(200, &json!({ "success": true, "message": message }))
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    envelope(status_code, &json!({ "error": message }))
}

/// Returns an error response that also carries the underlying failure.
#[must_use]
pub fn err_with_details(status_code: u16, message: &str, details: &str) -> Value {
    envelope(
        status_code,
        &json!({ "error": message, "details": details }),
    )
}
