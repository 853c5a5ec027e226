use async_trait::async_trait;
use chrono::Utc;
use tracing::{error, info};

use crate::auth::application::domain::reset_token::issue_reset_token;
use crate::auth::application::ports::incoming::use_cases::ForgotPasswordUseCase;
use crate::auth::application::ports::outgoing::UserRepository;
use crate::email::application::ports::outgoing::{EmailMessage, EmailSender};
use crate::shared::api::{ApiError, AppError};

pub const RESET_EMAIL_SUBJECT: &str = "Password reset token";

pub struct ForgotPasswordService<R, E>
where
    R: UserRepository,
    E: EmailSender,
{
    users: R,
    mailer: E,
}

impl<R, E> ForgotPasswordService<R, E>
where
    R: UserRepository,
    E: EmailSender,
{
    pub fn new(users: R, mailer: E) -> Self {
        Self { users, mailer }
    }
}

fn reset_message(to: &str, reset_url: &str) -> EmailMessage {
    EmailMessage {
        to: to.to_string(),
        subject: RESET_EMAIL_SUBJECT.to_string(),
        text: format!(
            "You are receiving this email because you (or someone else) has requested the \
             reset of a password. Please make a PUT request to: \n\n {}",
            reset_url
        ),
    }
}

#[async_trait]
impl<R, E> ForgotPasswordUseCase for ForgotPasswordService<R, E>
where
    R: UserRepository + Send + Sync,
    E: EmailSender + Send + Sync,
{
    async fn execute(&self, email: Option<String>, origin: &str) -> Result<(), AppError> {
        let user = match email.filter(|e| !e.trim().is_empty()) {
            Some(e) => self.users.find_by_email(&e).await?,
            None => None,
        }
        .ok_or_else(|| ApiError::not_found("There is no user with that email"))?;

        let issued = issue_reset_token(Utc::now());
        self.users
            .set_reset_token(user.id, Some(issued.stored))
            .await?;

        let reset_url = format!(
            "{}/api/v1/auth/resetpassword/{}",
            origin.trim_end_matches('/'),
            issued.plain
        );

        if let Err(e) = self
            .mailer
            .send_email(reset_message(&user.email, &reset_url))
            .await
        {
            error!(user_id = %user.id, error = %e, "Reset email failed");
            self.users.set_reset_token(user.id, None).await?;
            return Err(ApiError::server_error("Email could not be sent").into());
        }

        info!(user_id = %user.id, "Password reset email sent");
        Ok(())
    }
}
