use std::env;
use std::path::{Path, PathBuf};

use crate::auth::adapter::outgoing::jwt::{JwtConfig, MIN_SECRET_LEN};
use crate::email::adapter::outgoing::SmtpConfig;
use crate::geocoding::adapter::outgoing::{MapQuestConfig, DEFAULT_BASE_URL};

const DEFAULT_JWT_EXPIRE_SECONDS: i64 = 30 * 24 * 60 * 60;
const DEFAULT_MAX_FILE_UPLOAD: usize = 1_000_000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{key} has an invalid value '{value}'")]
    Invalid { key: &'static str, value: String },

    #[error("JWT_SECRET must be at least {} characters", MIN_SECRET_LEN)]
    WeakSecret,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Development,
    Production,
    Test,
}

impl RunMode {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value {
            "development" => Ok(RunMode::Development),
            "production" => Ok(RunMode::Production),
            "test" => Ok(RunMode::Test),
            other => Err(ConfigError::Invalid {
                key: "RUST_ENV",
                value: other.to_string(),
            }),
        }
    }
}

/// Where outgoing mail goes. Tests and local runs talk to an
/// unauthenticated catcher such as Mailpit.
#[derive(Debug, Clone)]
pub enum MailTransport {
    Relay(SmtpConfig),
    Local {
        host: String,
        port: u16,
        from_email: String,
        from_name: String,
    },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mode: RunMode,
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub run_migrations: bool,
    pub jwt: JwtConfig,
    pub cookie_expire_days: i64,
    pub file_upload_path: String,
    pub max_file_upload: usize,
    pub geocoder: MapQuestConfig,
    pub mail: MailTransport,
}

impl AppConfig {
    /// Loads `.env.<RUST_ENV>` and then `.env` from the working directory,
    /// then reads the process environment. Earlier sources win.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mode_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        load_env_files(Path::new("."), &mode_name);

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };
        let or_default =
            |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let mode = RunMode::parse(&or_default("RUST_ENV", "development"))?;

        let secret = required("JWT_SECRET")?;
        if secret.len() < MIN_SECRET_LEN {
            return Err(ConfigError::WeakSecret);
        }
        let jwt = JwtConfig::new(
            secret,
            parse(
                "JWT_EXPIRE_SECONDS",
                &or_default("JWT_EXPIRE_SECONDS", &DEFAULT_JWT_EXPIRE_SECONDS.to_string()),
            )?,
        );

        let from_email = required("FROM_EMAIL")?;
        let from_name = or_default("FROM_NAME", "DevCamper");
        let mail = if mode == RunMode::Production {
            MailTransport::Relay(SmtpConfig {
                host: required("SMTP_HOST")?,
                port: parse("SMTP_PORT", &required("SMTP_PORT")?)?,
                username: required("SMTP_USERNAME")?,
                password: required("SMTP_PASSWORD")?,
                from_email,
                from_name,
            })
        } else {
            MailTransport::Local {
                host: or_default("SMTP_HOST", "localhost"),
                port: parse("SMTP_PORT", &or_default("SMTP_PORT", "1025"))?,
                from_email,
                from_name,
            }
        };

        Ok(Self {
            mode,
            host: or_default("HOST", "127.0.0.1"),
            port: parse("PORT", &or_default("PORT", "5000"))?,
            database_url: required("DATABASE_URL")?,
            run_migrations: parse("RUN_MIGRATIONS", &or_default("RUN_MIGRATIONS", "true"))?,
            jwt,
            cookie_expire_days: parse(
                "JWT_COOKIE_EXPIRE_DAYS",
                &or_default("JWT_COOKIE_EXPIRE_DAYS", "30"),
            )?,
            file_upload_path: or_default("FILE_UPLOAD_PATH", "./public/uploads"),
            max_file_upload: parse(
                "MAX_FILE_UPLOAD",
                &or_default("MAX_FILE_UPLOAD", &DEFAULT_MAX_FILE_UPLOAD.to_string()),
            )?,
            geocoder: MapQuestConfig {
                api_key: required("GEOCODER_API_KEY")?,
                base_url: or_default("GEOCODER_BASE_URL", DEFAULT_BASE_URL),
            },
            mail,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        value: value.to_string(),
    })
}

/// Loads whichever of `.env.<mode>` and `.env` exist in `dir`, in that
/// order. dotenvy never overrides a variable that is already set.
fn load_env_files(dir: &Path, mode: &str) -> Vec<PathBuf> {
    [dir.join(format!(".env.{}", mode)), dir.join(".env")]
        .into_iter()
        .filter(|path| match dotenvy::from_path(path) {
            Ok(()) => true,
            Err(e) if e.not_found() => false,
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Skipping unreadable env file"
                );
                false
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::hashmap;
    use std::collections::HashMap;

    fn base() -> HashMap<&'static str, String> {
        hashmap! {
            "DATABASE_URL" => "postgres://localhost/devcamper".to_string(),
            "JWT_SECRET" => "a-secret-that-is-long-enough-for-hs256".to_string(),
            "GEOCODER_API_KEY" => "key".to_string(),
            "FROM_EMAIL" => "noreply@devcamper.io".to_string(),
        }
    }

    fn load(vars: HashMap<&'static str, String>) -> Result<AppConfig, ConfigError> {
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(base()).unwrap();

        assert_eq!(config.mode, RunMode::Development);
        assert_eq!(config.server_url(), "127.0.0.1:5000");
        assert_eq!(config.max_file_upload, 1_000_000);
        assert_eq!(config.file_upload_path, "./public/uploads");
        assert_eq!(config.cookie_expire_days, 30);
        assert_eq!(config.jwt.expires_in, 2_592_000);
        assert!(config.run_migrations);
        assert!(matches!(config.mail, MailTransport::Local { port: 1025, .. }));
    }

    #[test]
    fn test_missing_database_url() {
        let mut vars = base();
        vars.remove("DATABASE_URL");

        assert!(matches!(load(vars), Err(ConfigError::Missing("DATABASE_URL"))));
    }

    #[test]
    fn test_short_secret_is_rejected() {
        let mut vars = base();
        vars.insert("JWT_SECRET", "short".to_string());

        assert!(matches!(load(vars), Err(ConfigError::WeakSecret)));
    }

    #[test]
    fn test_production_requires_smtp_credentials() {
        let mut vars = base();
        vars.insert("RUST_ENV", "production".to_string());

        assert!(matches!(load(vars), Err(ConfigError::Missing("SMTP_HOST"))));
    }

    #[test]
    fn test_invalid_number() {
        let mut vars = base();
        vars.insert("MAX_FILE_UPLOAD", "a lot".to_string());

        let err = load(vars).unwrap_err();
        assert_eq!(err.to_string(), "MAX_FILE_UPLOAD has an invalid value 'a lot'");
    }

    #[test]
    fn test_mode_file_and_base_file_are_both_loaded() {
        let dir = std::env::temp_dir().join(format!("devcamper-env-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let tag = uuid::Uuid::new_v4().simple().to_string().to_uppercase();
        let shared_key = format!("DEVCAMPER_SHARED_{}", tag);
        let base_key = format!("DEVCAMPER_BASE_{}", tag);
        std::fs::write(dir.join(".env.staging"), format!("{}=staging\n", shared_key)).unwrap();
        std::fs::write(
            dir.join(".env"),
            format!("{}=base\n{}=base\n", shared_key, base_key),
        )
        .unwrap();

        let loaded = load_env_files(&dir, "staging");

        assert_eq!(loaded, vec![dir.join(".env.staging"), dir.join(".env")]);
        assert_eq!(env::var(&shared_key).unwrap(), "staging");
        assert_eq!(env::var(&base_key).unwrap(), "base");
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_missing_env_files_are_skipped() {
        let dir = std::env::temp_dir().join(format!("devcamper-env-{}", uuid::Uuid::new_v4()));

        assert!(load_env_files(&dir, "production").is_empty());
    }
}
