//! SMTP delivery of the digest.

use std::io::Write;

use async_trait::async_trait;
use lettre::address::{Address, Envelope};
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{debug, info};

use jobwatch_search::Posting;

use crate::digest::{ATTACHMENT_FILENAME, render_csv, render_html};
use crate::error::NotifyError;

/// Default SMTP relay host.
pub const DEFAULT_SMTP_RELAY: &str = "smtp.gmail.com";

/// Default SMTP relay port (STARTTLS).
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// Sending account and recipient configuration.
#[derive(Clone)]
pub struct EmailConfig {
    /// Sending account; also the To header and the SMTP auth user.
    pub address: String,
    /// App password for the sending account.
    pub password: String,
    /// Single Cc recipient.
    pub cc: String,
    /// Blind-copy recipients, envelope-only.
    pub bcc: Vec<String>,
    /// SMTP relay host.
    pub relay: String,
    /// SMTP relay port.
    pub port: u16,
}

/// Delivery seam for the digest.
///
/// The orchestrator only depends on this trait, so tests can swap in a
/// recording double instead of a live SMTP session.
#[async_trait]
pub trait DigestSender {
    /// Deliver a digest for the given postings.
    async fn send(&self, postings: &[Posting]) -> Result<(), NotifyError>;
}

/// Production sender: authenticated STARTTLS SMTP session to the relay.
pub struct SmtpSender {
    config: EmailConfig,
}

fn subject(count: usize) -> String {
    format!("{count} new Amazon entry-level software postings")
}

impl SmtpSender {
    /// Create a sender for the given account configuration.
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    /// Assemble the message and its envelope.
    ///
    /// The message headers carry From, To, and Cc only. Blind copies go on
    /// the envelope; the formatted message has no Bcc header for them to
    /// leak through.
    fn compose(&self, postings: &[Posting]) -> Result<(Message, Envelope), NotifyError> {
        let from: Mailbox = self.config.address.parse()?;
        let cc: Mailbox = self.config.cc.parse()?;

        // Stage the CSV through a scoped temp file; the guard removes the
        // artifact on every exit path, including a failed send.
        let mut artifact = tempfile::NamedTempFile::new()?;
        artifact.write_all(render_csv(postings).as_bytes())?;
        let csv_bytes = std::fs::read(artifact.path())?;
        debug!(path = %artifact.path().display(), bytes = csv_bytes.len(), "staged CSV attachment");

        let attachment_type =
            ContentType::parse("application/octet-stream").expect("static content type");
        let message = Message::builder()
            .from(from.clone())
            .to(from.clone())
            .cc(cc.clone())
            .subject(subject(postings.len()))
            .multipart(
                MultiPart::mixed()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(render_html(postings)),
                    )
                    .singlepart(
                        Attachment::new(ATTACHMENT_FILENAME.to_string())
                            .body(csv_bytes, attachment_type),
                    ),
            )?;

        let mut recipients: Vec<Address> = vec![cc.email.clone()];
        for addr in &self.config.bcc {
            recipients.push(addr.trim().parse()?);
        }
        let envelope = Envelope::new(Some(from.email.clone()), recipients)?;

        Ok((message, envelope))
    }
}

#[async_trait]
impl DigestSender for SmtpSender {
    async fn send(&self, postings: &[Posting]) -> Result<(), NotifyError> {
        if postings.is_empty() {
            info!("no new postings, skipping email");
            return Ok(());
        }

        let (message, envelope) = self.compose(postings)?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.relay)?
            .port(self.config.port)
            .credentials(Credentials::new(
                self.config.address.clone(),
                self.config.password.clone(),
            ))
            .build();

        transport.send_raw(&envelope, &message.formatted()).await?;
        info!(
            count = postings.len(),
            cc = %self.config.cc,
            bcc_count = self.config.bcc.len(),
            "digest delivered"
        );
        Ok(())
    }
}
