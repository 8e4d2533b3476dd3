//! Error types for digest delivery.

use thiserror::Error;

/// Errors that can occur composing or delivering a digest.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// Message could not be assembled.
    #[error("failed to build message: {0}")]
    Message(#[from] lettre::error::Error),

    /// A configured address did not parse.
    #[error("invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// SMTP connection, authentication, or transport fault.
    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    /// CSV attachment could not be staged.
    #[error("failed to stage CSV attachment: {0}")]
    Io(#[from] std::io::Error),
}
