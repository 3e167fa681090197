/// Recording mailer for tests and demos
///
/// Keeps every accepted message in memory instead of delivering it, and
/// can be switched into a failing mode to exercise the error paths that
/// depend on delivery going wrong.
///
/// # Example
///
/// ```
/// use gatehouse::mail::{memory::MemoryMailer, Mailer, OutgoingEmail};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let mailer = MemoryMailer::new();
/// mailer
///     .send(OutgoingEmail {
///         to: "user@example.com".to_string(),
///         subject: "Hi".to_string(),
///         body: "Hello".to_string(),
///     })
///     .await?;
/// assert_eq!(mailer.sent().len(), 1);
///
/// mailer.set_failing(true);
/// assert!(mailer
///     .send(OutgoingEmail {
///         to: "user@example.com".to_string(),
///         subject: "Hi".to_string(),
///         body: "Hello".to_string(),
///     })
///     .await
///     .is_err());
/// # Ok(())
/// # }
/// ```

use crate::mail::{MailError, Mailer, OutgoingEmail};
use async_trait::async_trait;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex,
};

/// Mailer that records instead of delivering
#[derive(Default)]
pub struct MemoryMailer {
    sent: Mutex<Vec<OutgoingEmail>>,
    failing: AtomicBool,
}

impl MemoryMailer {
    /// Creates a mailer that accepts everything
    pub fn new() -> Self {
        Self::default()
    }

    /// When true, every send fails with a transport error
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Snapshot of every message accepted so far
    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().expect("mailer lock poisoned").clone()
    }

    /// Most recent message sent to an address, if any
    pub fn last_sent_to(&self, to: &str) -> Option<OutgoingEmail> {
        self.sent
            .lock()
            .expect("mailer lock poisoned")
            .iter()
            .rev()
            .find(|e| e.to == to)
            .cloned()
    }
}

#[async_trait]
impl Mailer for MemoryMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(MailError::Send("simulated delivery failure".to_string()));
        }

        self.sent.lock().expect("mailer lock poisoned").push(email);
        Ok(())
    }
}
