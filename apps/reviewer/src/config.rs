use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub smtp: SmtpConfig,
    pub resume_dir: PathBuf,
    pub output_path: PathBuf,
    pub rust_log: String,
}

/// Mail transport settings. The session always negotiates STARTTLS before auth.
#[derive(Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so tests don't touch process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .with_context(|| format!("Required environment variable '{key}' is not set"))
        };

        let username = require("SMTP_USERNAME")?;

        Ok(Config {
            gemini_api_key: require("GEMINI_API_KEY")?,
            smtp: SmtpConfig {
                host: lookup("SMTP_HOST").unwrap_or_else(|| "smtp.gmail.com".to_string()),
                port: lookup("SMTP_PORT")
                    .unwrap_or_else(|| "587".to_string())
                    .parse::<u16>()
                    .context("SMTP_PORT must be a valid port number")?,
                password: require("SMTP_PASSWORD")?,
                from: lookup("SMTP_FROM").unwrap_or_else(|| username.clone()),
                username,
            },
            resume_dir: lookup("RESUME_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("resumes")),
            output_path: lookup("OUTPUT_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("resume_feedback.xlsx")),
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("gemini_api_key", &"<redacted>")
            .field("smtp", &self.smtp)
            .field("resume_dir", &self.resume_dir)
            .field("output_path", &self.output_path)
            .field("rust_log", &self.rust_log)
            .finish()
    }
}

impl fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("from", &self.from)
            .finish()
    }
}
