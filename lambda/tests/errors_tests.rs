use std::error::Error;
use contact_relay::errors::RelayError;

#[test]
fn test_relay_error_implements_error_trait() {
    fn assert_error<T: Error + Send + Sync + 'static>(_: &T) {}

    let error = RelayError::InvalidRequest("test error".to_string());
    assert_error(&error);
}

#[test]
fn test_relay_error_display() {
    let error = RelayError::Mail("connection refused".to_string());
    assert_eq!(format!("{error}"), "Failed to send email: connection refused");

    let error = RelayError::InvalidRequest("missing fields: name".to_string());
    assert_eq!(
        format!("{error}"),
        "Invalid contact request: missing fields: name"
    );

    let error = RelayError::HttpError("timeout".to_string());
    assert_eq!(format!("{error}"), "Failed to send HTTP request: timeout");
}

#[test]
fn test_detail_strips_variant_prefix() {
    let error = RelayError::Mail("535 authentication failed".to_string());
    assert_eq!(error.detail(), "535 authentication failed");
}

#[test]
fn test_relay_error_from_conversions() {
    let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let relay_err: RelayError = err.into();
    assert!(matches!(relay_err, RelayError::InvalidRequest(_)));

    let err = "not an address"
        .parse::<lettre::Address>()
        .unwrap_err();
    let relay_err: RelayError = err.into();
    match relay_err {
        RelayError::Mail(msg) => assert!(msg.starts_with("Invalid address")),
        other => panic!("Unexpected error type: {other:?}"),
    }

    #[allow(unused)]
    #[allow(clippy::items_after_statements)]
    fn _check_reqwest_conversion(err: reqwest::Error) -> RelayError {
        RelayError::from(err)
    }
}
