use contact_relay::core::config::AppConfig;
use contact_relay::core::models::ContactSubmission;
use contact_relay::mail::{auto_reply_email, escape_html, notification_email};

fn config() -> AppConfig {
    AppConfig {
        email_user: "owner@example.com".into(),
        email_pass: "secret".into(),
        smtp_host: "smtp.example.com".into(),
        contact_recipient: "inbox@example.com".into(),
        site_owner_name: "Parveen Garg".into(),
    }
}

fn submission() -> ContactSubmission {
    ContactSubmission {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        subject: "Project idea".into(),
        message: "Let's build\nsomething.".into(),
    }
}

#[test]
fn test_notification_goes_to_owner_with_reply_to_submitter() {
    let email = notification_email(&submission(), &config());
    assert_eq!(email.from, "owner@example.com");
    assert_eq!(email.to, "inbox@example.com");
    assert_eq!(email.reply_to.as_deref(), Some("ada@example.com"));
    assert_eq!(email.subject, "Portfolio Contact: Project idea");
    assert!(email.html.contains("New Contact Message"));
    assert!(email.html.contains("<strong>Ada</strong>"));
    assert!(email.html.contains("mailto:ada@example.com"));
    assert!(email.html.contains("Let&#39;s build\nsomething."));
}

#[test]
fn test_auto_reply_thanks_submitter_and_signs_with_owner() {
    let email = auto_reply_email(&submission(), &config());
    assert_eq!(email.from, "owner@example.com");
    assert_eq!(email.to, "ada@example.com");
    assert_eq!(email.reply_to, None);
    assert_eq!(email.subject, "Thanks for reaching out! 🚀");
    assert!(email.html.contains("Thanks for getting in touch, Ada"));
    assert!(email.html.contains("\"Project idea\""));
    assert!(email.html.contains("Parveen Garg"));
    assert!(email.html.contains("mailto:owner@example.com"));
}

#[test]
fn test_submitter_text_is_escaped() {
    let mut s = submission();
    s.name = "<script>alert(1)</script>".into();
    s.message = "a & b".into();

    for email in [notification_email(&s, &config()), auto_reply_email(&s, &config())] {
        assert!(!email.html.contains("<script>"));
        assert!(email.html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(email.html.contains("a &amp; b"));
    }
}

#[test]
fn test_escape_html_handles_all_special_characters() {
    assert_eq!(
        escape_html(r#"<a href="x">'&'</a>"#),
        "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
    );
    assert_eq!(escape_html("plain text"), "plain text");
}
