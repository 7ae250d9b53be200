use actix_web::http::header::HeaderValue;
use std::env;

use crate::error::AppError;

const DEFAULT_STUDENT_NAME: &str = "Mannapov Kamil Aidarovich";
const DEFAULT_STUDENT_GROUP: &str = "RI-240946";

/// Hosting environment, read from `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn is_development(self) -> bool {
        self == Environment::Development
    }

    fn parse(value: &str) -> Result<Self, AppError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(AppError::Configuration(format!(
                "APP_ENV must be `development` or `production`, got `{}`",
                other
            ))),
        }
    }
}

/// Values stamped by the identification middleware.
///
/// Stored as header values so that an unrepresentable value is rejected
/// while loading configuration rather than on the request path.
#[derive(Debug, Clone)]
pub struct IdentityConfig {
    pub student_name: HeaderValue,
    pub student_group: HeaderValue,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            student_name: HeaderValue::from_static(DEFAULT_STUDENT_NAME),
            student_group: HeaderValue::from_static(DEFAULT_STUDENT_GROUP),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    pub server_host: String,
    pub environment: Environment,
    pub identity: IdentityConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_port = match lookup("SERVER_PORT") {
            Some(port) => port.parse().map_err(|_| {
                AppError::Configuration(format!("SERVER_PORT must be a number, got `{}`", port))
            })?,
            None => 8080,
        };

        let environment = match lookup("APP_ENV") {
            Some(value) => Environment::parse(&value)?,
            None => Environment::Production,
        };

        let identity = IdentityConfig {
            student_name: header_value(
                "STUDENT_NAME",
                lookup("STUDENT_NAME"),
                DEFAULT_STUDENT_NAME,
            )?,
            student_group: header_value(
                "STUDENT_GROUP",
                lookup("STUDENT_GROUP"),
                DEFAULT_STUDENT_GROUP,
            )?,
        };

        Ok(Self {
            server_port,
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            environment,
            identity,
        })
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.server_host, self.server_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8080,
            server_host: "127.0.0.1".to_string(),
            environment: Environment::Production,
            identity: IdentityConfig::default(),
        }
    }
}

fn header_value(
    key: &str,
    value: Option<String>,
    default: &'static str,
) -> Result<HeaderValue, AppError> {
    match value {
        Some(value) => HeaderValue::from_str(&value).map_err(|_| {
            AppError::Configuration(format!("{} is not a valid header value", key))
        }),
        None => Ok(HeaderValue::from_static(default)),
    }
}
