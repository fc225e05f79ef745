//! Email notification of search results.
//!
//! Notification is best-effort: the web layer formats and sends the
//! email after a successful search, and a delivery failure never fails
//! the search response.

mod format;
mod mailer;

pub use format::{email_body, email_subject};
pub use mailer::{Mailer, MailerConfig, NotifyError};
