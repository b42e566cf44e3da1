use std::env;

const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
const DEFAULT_OWNER_NAME: &str = "Parveen Garg";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// SMTP account, also used as the sender of both emails.
    pub email_user: String,
    pub email_pass: String,
    pub smtp_host: String,
    /// Inbox that receives the contact notification.
    pub contact_recipient: String,
    /// Signature on the auto-reply.
    pub site_owner_name: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_vars<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &str| var(key).ok_or_else(|| format!("{key}: environment variable not set"));

        let email_user = required("EMAIL_USER")?;
        let email_pass = required("EMAIL_PASS")?;

        Ok(Self {
            contact_recipient: var("CONTACT_RECIPIENT").unwrap_or_else(|| email_user.clone()),
            smtp_host: var("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
            site_owner_name: var("SITE_OWNER_NAME")
                .unwrap_or_else(|| DEFAULT_OWNER_NAME.to_string()),
            email_user,
            email_pass,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_optional_vars_unset() {
        let config =
            AppConfig::from_vars(lookup(&[("EMAIL_USER", "me@x.com"), ("EMAIL_PASS", "pw")]))
                .expect("config");
        assert_eq!(config.smtp_host, "smtp.gmail.com");
        assert_eq!(config.contact_recipient, "me@x.com");
        assert_eq!(config.site_owner_name, "Parveen Garg");
    }

    #[test]
    fn overrides_are_respected() {
        let config = AppConfig::from_vars(lookup(&[
            ("EMAIL_USER", "me@x.com"),
            ("EMAIL_PASS", "pw"),
            ("SMTP_HOST", "smtp.example.com"),
            ("CONTACT_RECIPIENT", "inbox@x.com"),
            ("SITE_OWNER_NAME", "Sam"),
        ]))
        .expect("config");
        assert_eq!(config.smtp_host, "smtp.example.com");
        assert_eq!(config.contact_recipient, "inbox@x.com");
        assert_eq!(config.site_owner_name, "Sam");
    }

    #[test]
    fn missing_credentials_name_the_variable() {
        let err = AppConfig::from_vars(lookup(&[("EMAIL_USER", "me@x.com")])).unwrap_err();
        assert!(err.starts_with("EMAIL_PASS"));

        let err = AppConfig::from_vars(lookup(&[("EMAIL_USER", ""), ("EMAIL_PASS", "pw")]))
            .unwrap_err();
        assert!(err.starts_with("EMAIL_USER"));
    }
}
