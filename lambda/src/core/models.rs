use serde::Deserialize;

use crate::errors::RelayError;

/// Raw contact-form body as posted by the site.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

/// A contact request with every field present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactRequest {
    /// # Errors
    ///
    /// Returns `RelayError::InvalidRequest` naming every field that is missing,
    /// null, or empty.
    pub fn validate(self) -> Result<ContactSubmission, RelayError> {
        let present = |v: Option<String>| v.filter(|s| !s.is_empty());

        match (
            present(self.name.clone()),
            present(self.email.clone()),
            present(self.subject.clone()),
            present(self.message.clone()),
        ) {
            (Some(name), Some(email), Some(subject), Some(message)) => Ok(ContactSubmission {
                name,
                email,
                subject,
                message,
            }),
            _ => Err(RelayError::InvalidRequest(format!(
                "missing fields: {}",
                self.missing_fields().join(", ")
            ))),
        }
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, v)| v.as_deref().is_none_or(str::is_empty))
        .map(|(k, _)| k)
        .collect()
    }
}

/// A single outbound HTML email. Addresses are parsed by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub html: String,
}
