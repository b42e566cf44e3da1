//! Outbound mail: the transport seam and the contact email templates

pub mod mailer;
pub mod templates;

pub use mailer::{Mailer, SmtpMailer};
pub use templates::{auto_reply_email, escape_html, notification_email};
