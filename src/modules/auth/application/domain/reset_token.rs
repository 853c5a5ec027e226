use chrono::{DateTime, Duration, Utc};
use rand::RngCore;
use sha2::{Digest, Sha256};

pub const RESET_TOKEN_BYTES: usize = 20;
pub const RESET_TOKEN_TTL_MINUTES: i64 = 10;

/// What is persisted for a pending password reset. Only the digest is
/// stored; the plain token travels by email.
#[derive(Debug, Clone, PartialEq)]
pub struct ResetToken {
    pub token_hash: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct IssuedResetToken {
    pub plain: String,
    pub stored: ResetToken,
}

pub fn issue_reset_token(now: DateTime<Utc>) -> IssuedResetToken {
    let mut bytes = [0u8; RESET_TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    let plain = hex::encode(bytes);

    IssuedResetToken {
        stored: ResetToken {
            token_hash: hash_reset_token(&plain),
            expires_at: now + Duration::minutes(RESET_TOKEN_TTL_MINUTES),
        },
        plain,
    }
}

/// Hex SHA-256 digest.
pub fn hash_reset_token(plain: &str) -> String {
    hex::encode(Sha256::digest(plain.as_bytes()))
}
