pub mod smtp_sender;

#[cfg(test)]
pub mod mock_sender;

pub use smtp_sender::{SmtpConfig, SmtpEmailSender};
