//! Digest rendering and email delivery.
//!
//! A run's new postings become one email: an HTML body listing each posting
//! with an apply link, plus a CSV attachment with the same rows. Delivery
//! goes through an authenticated STARTTLS SMTP session; blind-copy
//! recipients ride only on the envelope, never in a header.

mod digest;
mod error;
mod mailer;

pub use digest::{ATTACHMENT_FILENAME, apply_link, render_csv, render_html};
pub use error::NotifyError;
pub use mailer::{DEFAULT_SMTP_PORT, DEFAULT_SMTP_RELAY, DigestSender, EmailConfig, SmtpSender};
