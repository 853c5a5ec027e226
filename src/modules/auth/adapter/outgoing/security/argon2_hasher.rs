use argon2::password_hash::{
    Error as PhcError, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
};
use argon2::{Algorithm, Argon2, Params, Version};
use async_trait::async_trait;
use rand_core::OsRng;

use crate::auth::application::ports::outgoing::password_hasher::{HashError, PasswordHasher};

const DEFAULT_MEMORY_KIB: u32 = 4 * 1024;
const DEFAULT_ITERATIONS: u32 = 3;
const DEFAULT_PARALLELISM: u32 = 1;

/// Argon2id with a fresh random salt per hash. The work runs on the
/// blocking pool so request workers stay free.
#[derive(Clone)]
pub struct Argon2Hasher {
    params: Params,
}

impl Argon2Hasher {
    pub fn new() -> Self {
        Self {
            params: Params::new(DEFAULT_MEMORY_KIB, DEFAULT_ITERATIONS, DEFAULT_PARALLELISM, None)
                .unwrap_or_default(),
        }
    }

    pub fn with_params(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, HashError> {
        Params::new(memory_kib, iterations, parallelism, None)
            .map(|params| Self { params })
            .map_err(|_| HashError::HashFailed)
    }

    /// Cost from `ARGON2_MEMORY_KIB`, `ARGON2_ITERATIONS` and
    /// `ARGON2_PARALLELISM`; unset or unparseable values keep the defaults.
    pub fn from_env() -> Result<Self, HashError> {
        let cost = |key: &str, default: u32| {
            std::env::var(key)
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(default)
        };

        Self::with_params(
            cost("ARGON2_MEMORY_KIB", DEFAULT_MEMORY_KIB),
            cost("ARGON2_ITERATIONS", DEFAULT_ITERATIONS),
            cost("ARGON2_PARALLELISM", DEFAULT_PARALLELISM),
        )
    }
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PasswordHasher for Argon2Hasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        let password = password.to_owned();
        let params = self.params.clone();

        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
                .hash_password(password.as_bytes(), &salt)
                .map(|phc| phc.to_string())
                .map_err(|_| HashError::HashFailed)
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }

    /// Cost parameters are read from the stored PHC string, so hashes made
    /// under older settings still verify.
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        let password = password.to_owned();
        let stored = hash.to_owned();

        tokio::task::spawn_blocking(move || {
            let phc = PasswordHash::new(&stored).map_err(|_| HashError::VerifyFailed)?;
            match Argon2::default().verify_password(password.as_bytes(), &phc) {
                Ok(()) => Ok(true),
                Err(PhcError::Password) => Ok(false),
                Err(_) => Err(HashError::VerifyFailed),
            }
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }
}
