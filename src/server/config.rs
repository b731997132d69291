use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_APP_URL: &str = "http://localhost:5000";
const DEFAULT_FRONTEND_URL: &str = "http://localhost:5173";
const DEFAULT_MAIL_FROM_NAME: &str = "Resort Booking";
const DEFAULT_SMTP_PORT: u16 = 587;

/// SMTP relay settings. Absent when `SMTP_HOST` is unset.
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from_name: String,
}

pub struct Config {
    pub database_url: String,
    pub port: u16,

    /// Public base URL of this server, used for amenity image links.
    pub app_url: String,
    /// Base URL of the frontend, used for password reset links.
    pub frontend_url: String,
    /// Allowed CORS origin; any origin when unset.
    pub origin: Option<String>,

    pub smtp: Option<SmtpConfig>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = required("DATABASE_URL")?;
        if !database_url.starts_with("sqlite:") {
            return Err(ConfigError::InvalidEnvVar {
                name: "DATABASE_URL".to_string(),
                reason: "only sqlite: connection strings are supported".to_string(),
            }
            .into());
        }

        let port = match optional("PORT") {
            Some(port) => parse_port("PORT", &port)?,
            None => DEFAULT_PORT,
        };

        let app_url = url_or_default("APP_URL", DEFAULT_APP_URL)?;
        let frontend_url = url_or_default("FRONTEND_URL", DEFAULT_FRONTEND_URL)?;
        let origin = optional("ORIGIN");

        let smtp = match optional("SMTP_HOST") {
            Some(host) => Some(SmtpConfig {
                host,
                port: match optional("SMTP_PORT") {
                    Some(port) => parse_port("SMTP_PORT", &port)?,
                    None => DEFAULT_SMTP_PORT,
                },
                username: required("SMTP_USERNAME")?,
                password: required("SMTP_PASSWORD")?,
                from_name: optional("MAIL_FROM_NAME")
                    .unwrap_or_else(|| DEFAULT_MAIL_FROM_NAME.to_string()),
            }),
            None => None,
        };

        Ok(Self {
            database_url,
            port,
            app_url,
            frontend_url,
            origin,
            smtp,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    optional(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads a variable, treating an empty value as unset.
fn optional(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_port(name: &str, value: &str) -> Result<u16, ConfigError> {
    value.parse::<u16>().map_err(|e| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: e.to_string(),
    })
}

fn url_or_default(name: &str, default: &str) -> Result<String, ConfigError> {
    let value = optional(name).unwrap_or_else(|| default.to_string());

    Url::parse(&value).map_err(|e| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: e.to_string(),
    })?;

    Ok(value.trim_end_matches('/').to_string())
}
