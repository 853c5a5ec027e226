/// Minimum key length for HS256.
pub const MIN_SECRET_LEN: usize = 32;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
}

impl JwtConfig {
    pub fn new(secret_key: impl Into<String>, expires_in: i64) -> Self {
        Self {
            secret_key: secret_key.into(),
            expires_in,
        }
    }
}
