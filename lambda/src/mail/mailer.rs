//! Mail transport abstraction and its SMTP implementation.

use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{debug, info};

use crate::core::config::AppConfig;
use crate::core::models::OutgoingEmail;
use crate::errors::RelayError;

/// Anything that can deliver an [`OutgoingEmail`].
#[async_trait]
pub trait Mailer: Send + Sync {
    /// # Errors
    ///
    /// Returns `RelayError::Mail` if the message cannot be built or delivered.
    async fn send(&self, email: &OutgoingEmail) -> Result<(), RelayError>;
}

/// Delivers mail through an authenticated SMTP relay over implicit TLS.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    /// Builds the transport. No connection is opened until the first send.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS parameters for the relay host cannot be built.
    pub fn new(config: &AppConfig) -> Result<Self, RelayError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)?
            .credentials(Credentials::new(
                config.email_user.clone(),
                config.email_pass.clone(),
            ))
            .build();

        info!(smtp_host = %config.smtp_host, "SMTP transport configured");
        Ok(Self { transport })
    }

    fn build_message(email: &OutgoingEmail) -> Result<Message, RelayError> {
        let mut builder = Message::builder()
            .from(email.from.parse::<Mailbox>()?)
            .to(email.to.parse::<Mailbox>()?)
            .subject(email.subject.clone())
            .header(ContentType::TEXT_HTML);

        if let Some(reply_to) = &email.reply_to {
            builder = builder.reply_to(reply_to.parse::<Mailbox>()?);
        }

        Ok(builder.body(email.html.clone())?)
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), RelayError> {
        let message = Self::build_message(email)?;
        let response = self.transport.send(message).await?;
        debug!(code = %response.code(), "SMTP relay accepted message");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(to: &str, reply_to: Option<&str>) -> OutgoingEmail {
        OutgoingEmail {
            from: "owner@example.com".into(),
            to: to.into(),
            reply_to: reply_to.map(Into::into),
            subject: "Portfolio Contact: Hi".into(),
            html: "<p>hello</p>".into(),
        }
    }

    #[test]
    fn builds_html_message_with_reply_to() {
        let message = SmtpMailer::build_message(&email("owner@example.com", Some("a@x.com")))
            .expect("message");
        let raw = String::from_utf8(message.formatted()).expect("utf8");
        assert!(raw.contains("Reply-To: a@x.com"));
        assert!(raw.contains("Content-Type: text/html"));
    }

    #[test]
    fn invalid_recipient_is_a_mail_error() {
        let err = SmtpMailer::build_message(&email("not an address", None)).unwrap_err();
        assert!(matches!(err, RelayError::Mail(_)));
    }
}
