use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::email::application::ports::outgoing::{EmailError, EmailMessage, EmailSender};

/// Records every message; optionally fails every send.
#[derive(Clone, Default)]
pub struct MockEmailSender {
    sent_emails: Arc<Mutex<Vec<EmailMessage>>>,
    fail_with: Option<String>,
}

impl MockEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            sent_emails: Arc::default(),
            fail_with: Some(reason.to_string()),
        }
    }

    pub fn get_sent_emails(&self) -> Vec<EmailMessage> {
        self.sent_emails.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for MockEmailSender {
    async fn send_email(&self, message: EmailMessage) -> Result<(), EmailError> {
        if let Some(reason) = &self.fail_with {
            return Err(EmailError::Transport(reason.clone()));
        }
        self.sent_emails.lock().unwrap().push(message);
        Ok(())
    }
}
