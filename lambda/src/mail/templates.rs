//! HTML bodies for the two emails sent per contact submission.
//!
//! Every piece of submitter-provided text goes through [`escape_html`] before
//! it is interpolated.

use crate::core::config::AppConfig;
use crate::core::models::{ContactSubmission, OutgoingEmail};

pub const NOTIFICATION_SUBJECT_PREFIX: &str = "Portfolio Contact: ";
pub const AUTO_REPLY_SUBJECT: &str = "Thanks for reaching out! 🚀";

const ACCENT: &str = "#06b6d4";
const HEADER_GRADIENT: &str = "linear-gradient(135deg, #06b6d4 0%, #3b82f6 100%)";

#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn field_row(label: &str, value_html: &str) -> String {
    format!(
        r#"<div style="margin-bottom: 20px;">
  <h3 style="color: #1e293b; margin: 0 0 5px 0; font-size: 14px; text-transform: uppercase; letter-spacing: 1px;">{label}</h3>
  {value_html}
</div>"#
    )
}

/// Notification to the site owner. Replies go straight to the submitter.
#[must_use]
pub fn notification_email(submission: &ContactSubmission, config: &AppConfig) -> OutgoingEmail {
    let name = escape_html(&submission.name);
    let email = escape_html(&submission.email);
    let subject = escape_html(&submission.subject);
    let message = escape_html(&submission.message);

    let rows = [
        field_row(
            "From",
            &format!(r#"<p style="color: #64748b; margin: 0; font-size: 16px;"><strong>{name}</strong></p>"#),
        ),
        field_row(
            "Email",
            &format!(
                r#"<p style="color: #64748b; margin: 0; font-size: 16px;"><a href="mailto:{email}" style="color: #3b82f6; text-decoration: none;">{email}</a></p>"#
            ),
        ),
        field_row(
            "Subject",
            &format!(r#"<p style="color: #64748b; margin: 0; font-size: 16px;">{subject}</p>"#),
        ),
        field_row(
            "Message",
            &format!(
                r#"<div style="background: #f1f5f9; padding: 20px; border-radius: 8px; border-left: 4px solid {ACCENT};">
    <p style="color: #334155; margin: 0; line-height: 1.6; white-space: pre-wrap;">{message}</p>
  </div>"#
            ),
        ),
    ]
    .join("\n");

    let html = format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px; background-color: #f9fafb; border-radius: 10px;">
<div style="background: {HEADER_GRADIENT}; padding: 30px; border-radius: 10px 10px 0 0; text-align: center;">
  <h1 style="color: white; margin: 0; font-size: 28px;">New Contact Message</h1>
</div>
<div style="background: white; padding: 30px; border-radius: 0 0 10px 10px;">
{rows}
<p style="color: #94a3b8; margin: 30px 0 0 0; padding-top: 20px; border-top: 2px solid #e2e8f0; font-size: 14px; text-align: center;">Sent from your portfolio website</p>
</div>
</div>"#
    );

    OutgoingEmail {
        from: config.email_user.clone(),
        to: config.contact_recipient.clone(),
        reply_to: Some(submission.email.clone()),
        subject: format!("{NOTIFICATION_SUBJECT_PREFIX}{}", submission.subject),
        html,
    }
}

/// Confirmation sent back to the submitter.
#[must_use]
pub fn auto_reply_email(submission: &ContactSubmission, config: &AppConfig) -> OutgoingEmail {
    let name = escape_html(&submission.name);
    let subject = escape_html(&submission.subject);
    let message = escape_html(&submission.message);
    let owner = escape_html(&config.site_owner_name);
    let sender = escape_html(&config.email_user);
    let para = r#"style="color: #334155; font-size: 16px; line-height: 1.8; margin: 0 0 20px 0;""#;

    let html = format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px; background-color: #0f172a;">
<div style="background: {HEADER_GRADIENT}; padding: 40px; border-radius: 16px; text-align: center;">
  <h1 style="color: white; margin: 0 0 10px 0; font-size: 32px; font-weight: 800;">Message Received!</h1>
  <p style="color: rgba(255, 255, 255, 0.9); margin: 0; font-size: 18px;">Thanks for getting in touch, {name}</p>
</div>
<div style="background: white; padding: 40px; border-radius: 16px; margin-top: 20px;">
  <p {para}>Hi <strong>{name}</strong>,</p>
  <p {para}>Thank you for reaching out! I've received your message about <strong>"{subject}"</strong> and I'll get back to you as soon as possible.</p>
  <div style="background: #f1f5f9; padding: 24px; border-radius: 12px; border-left: 4px solid {ACCENT}; margin: 30px 0;">
    <p style="color: #64748b; margin: 0 0 8px 0; font-size: 12px; text-transform: uppercase; letter-spacing: 1px; font-weight: 600;">Your Message:</p>
    <p style="color: #1e293b; margin: 0; line-height: 1.6; white-space: pre-wrap; font-size: 15px;">{message}</p>
  </div>
  <p {para}>I typically respond within 24-48 hours. In the meantime, feel free to check out my portfolio or connect with me on social media.</p>
  <p style="color: #334155; font-size: 16px; line-height: 1.8; margin: 0;">Best regards,<br><strong style="color: {ACCENT}; font-size: 18px;">{owner}</strong></p>
</div>
<div style="text-align: center; margin-top: 30px; padding: 20px;">
  <p style="color: #64748b; font-size: 14px; margin: 0 0 10px 0;">This is an automated confirmation email</p>
  <p style="color: #94a3b8; font-size: 12px; margin: 0;">Sent from Portfolio | <a href="mailto:{sender}" style="color: {ACCENT}; text-decoration: none;">{sender}</a></p>
</div>
</div>"#
    );

    OutgoingEmail {
        from: config.email_user.clone(),
        to: submission.email.clone(),
        reply_to: None,
        subject: AUTO_REPLY_SUBJECT.to_string(),
        html,
    }
}
