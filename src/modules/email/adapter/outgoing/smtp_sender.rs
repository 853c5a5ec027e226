use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{debug, error};

use crate::email::application::ports::outgoing::{EmailError, EmailMessage, EmailSender};

const IMPLICIT_TLS_PORT: u16 = 465;

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Message) -> Result<(), String>;
}

#[async_trait]
impl Mailer for AsyncSmtpTransport<Tokio1Executor> {
    async fn send(&self, email: Message) -> Result<(), String> {
        AsyncTransport::send(self, email)
            .await
            .map(|_resp| ())
            .map_err(|e| e.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from_email: String,
    pub from_name: String,
}

pub struct SmtpEmailSender {
    mailer: Box<dyn Mailer>,
    from: String,
    from_name: String,
}

impl SmtpEmailSender {
    pub fn new_with_mailer(mailer: Box<dyn Mailer>, from_email: &str, from_name: &str) -> Self {
        Self {
            mailer,
            from: from_email.to_string(),
            from_name: from_name.to_string(),
        }
    }

    /// Authenticated relay. Port 465 uses implicit TLS, anything else STARTTLS.
    pub fn new(config: &SmtpConfig) -> Result<Self, EmailError> {
        let builder = if config.port == IMPLICIT_TLS_PORT {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
        }
        .map_err(|e| EmailError::Transport(e.to_string()))?;

        let transport = builder
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self::new_with_mailer(
            Box::new(transport),
            &config.from_email,
            &config.from_name,
        ))
    }

    // Local/test constructor (Mailpit, MailHog, etc.)
    pub fn new_local(host: &str, port: u16, from_email: &str, from_name: &str) -> Self {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
            .port(port)
            .build();

        Self::new_with_mailer(Box::new(transport), from_email, from_name)
    }

    fn build_message(&self, message: &EmailMessage) -> Result<Message, EmailError> {
        let from = Mailbox::new(
            Some(self.from_name.clone()),
            self.from
                .parse()
                .map_err(|e| EmailError::InvalidAddress(format!("{}: {}", self.from, e)))?,
        );
        let to: Mailbox = message
            .to
            .parse()
            .map_err(|e| EmailError::InvalidAddress(format!("{}: {}", message.to, e)))?;

        Message::builder()
            .from(from)
            .to(to)
            .subject(message.subject.as_str())
            .header(ContentType::TEXT_PLAIN)
            .body(message.text.clone())
            .map_err(|e| EmailError::Build(e.to_string()))
    }
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send_email(&self, message: EmailMessage) -> Result<(), EmailError> {
        let email = self.build_message(&message)?;

        self.mailer.send(email).await.map_err(|e| {
            error!(to = %message.to, error = %e, "SMTP send failed");
            EmailError::Transport(e)
        })?;

        debug!(to = %message.to, subject = %message.subject, "Email sent");
        Ok(())
    }
}
