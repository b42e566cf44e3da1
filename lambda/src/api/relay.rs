use futures::future::join;
use tracing::info;

use crate::core::config::AppConfig;
use crate::core::models::ContactSubmission;
use crate::errors::RelayError;
use crate::mail::{Mailer, auto_reply_email, notification_email};

/// Sends the owner notification and the submitter auto-reply concurrently.
///
/// Both sends are driven to completion even if one fails; the notification's
/// error wins when both fail.
///
/// # Errors
///
/// Returns the first `RelayError` reported by the mailer.
pub async fn relay_submission(
    submission: &ContactSubmission,
    config: &AppConfig,
    mailer: &dyn Mailer,
) -> Result<(), RelayError> {
    let notification = notification_email(submission, config);
    let auto_reply = auto_reply_email(submission, config);

    let (notified, replied) = join(mailer.send(&notification), mailer.send(&auto_reply)).await;
    notified?;
    replied?;

    info!("Notification and auto-reply delivered");
    Ok(())
}
