/// Mail transport seam
///
/// The workflow composes transactional messages (registration notice,
/// reset code) and hands them to a [`Mailer`]. Two implementations:
///
/// - [`smtp::SmtpMailer`]: production delivery over lettre's async SMTP
///   transport
/// - [`memory::MemoryMailer`]: records messages in memory and can be
///   switched to fail, for tests and demos
///
/// Message bodies come from [`templates`].

pub mod memory;
pub mod smtp;
pub mod templates;

use async_trait::async_trait;

/// Error type for mail operations
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    /// Recipient or sender address did not parse
    #[error("invalid email address: {0}")]
    InvalidAddress(String),

    /// Message could not be assembled
    #[error("failed to build message: {0}")]
    Build(String),

    /// Transport-level delivery failure
    #[error("failed to send email: {0}")]
    Send(String),
}

/// A composed message ready for delivery
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingEmail {
    /// Recipient address
    pub to: String,

    /// Subject line
    pub subject: String,

    /// Plain-text body
    pub body: String,
}

/// Delivers composed messages
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Sends one message; resolution means the transport accepted it
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailError>;
}
