//! Contact relay Lambda handler and request processing

pub mod handler;
pub mod helpers;
pub mod parsing;
pub mod relay;

// Re-export the main handler for convenience
pub use handler::{RelayState, handle_request, handler};

pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";
pub const INVALID_BODY: &str = "Invalid request body";
pub const ALL_FIELDS_REQUIRED: &str = "All fields are required";
pub const SEND_FAILED: &str = "Failed to send email";
pub const EMAIL_SENT: &str = "Email sent successfully";
