use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;

use crate::core::models::ContactRequest;
use crate::errors::RelayError;

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// HTTP method of a gateway event: `httpMethod` (Netlify, REST API) or
/// `requestContext.http.method` (HTTP API v2, function URLs).
pub fn request_method(payload: &Value) -> Option<&str> {
    v_str(payload, &["httpMethod"]).or_else(|| v_str(payload, &["requestContext", "http", "method"]))
}

pub fn request_path(payload: &Value) -> Option<&str> {
    v_str(payload, &["rawPath"]).or_else(|| v_str(payload, &["path"]))
}

pub fn get_header_value<'a>(headers: &'a Value, name: &str) -> Option<&'a str> {
    if let Some(v) = headers.get(name).and_then(|s| s.as_str()) {
        return Some(v);
    }
    headers.as_object().and_then(|map| {
        map.iter().find_map(|(k, v)| {
            if k.eq_ignore_ascii_case(name) {
                v.as_str()
            } else {
                None
            }
        })
    })
}

/// Returns the decoded request body, honouring `isBase64Encoded`.
///
/// # Errors
///
/// Returns `RelayError::InvalidRequest` if the body is absent, not a string,
/// or not valid base64/UTF-8 when flagged as encoded.
pub fn extract_body(payload: &Value) -> Result<String, RelayError> {
    let body = payload
        .get("body")
        .and_then(Value::as_str)
        .ok_or_else(|| RelayError::InvalidRequest("Missing body".to_string()))?;

    let encoded = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if !encoded {
        return Ok(body.to_string());
    }

    let bytes = STANDARD.decode(body)?;
    String::from_utf8(bytes)
        .map_err(|e| RelayError::InvalidRequest(format!("Body is not valid UTF-8: {e}")))
}

/// # Errors
///
/// Returns `RelayError::InvalidRequest` if the body cannot be extracted or is
/// not a JSON object whose fields are strings or null. Duplicate keys keep
/// the last value.
pub fn parse_contact_request(payload: &Value) -> Result<ContactRequest, RelayError> {
    let body = extract_body(payload)?;
    let object: Value = serde_json::from_str(&body)?;
    Ok(serde_json::from_value(object)?)
}
