use std::env;
use std::time::Duration;
use sea_orm::DatabaseConnection;
use thiserror::Error;
use crate::repositories::Storage;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} is not a valid number: {value}")]
    NotANumber { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AdminSeed {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_expires_in: i64,
    pub storage_timeout: Duration,
    pub auth_cookie_name: String,
    pub admin_seed: Option<AdminSeed>,
}

/// Settings the request path needs; cheap to clone into every handler.
#[derive(Debug, Clone)]
pub struct AuthSettings {
    pub jwt_secret: String,
    pub jwt_expires_in: i64,
    pub cookie_name: String,
}

#[derive(Clone, axum::extract::FromRef)]
pub struct AppState {
    pub storage: Storage,
    pub auth: AuthSettings,
}

impl AppState {
    pub fn new(db: DatabaseConnection, cfg: &Config) -> Self {
        Self {
            storage: Storage::new(db, cfg.storage_timeout),
            auth: cfg.auth_settings(),
        }
    }
}

impl Config {
    pub fn init() -> Result<Config, ConfigError> {
        let server_host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let server_port = parse_var("PORT", 3000)?;

        let database_url = required("DATABASE_URL")?;
        let jwt_secret = required("JWT_SECRET")?;
        let jwt_expires_in = parse_var("JWT_EXPIRATION_MINUTES", 60)?;
        let storage_timeout = Duration::from_millis(parse_var("STORAGE_TIMEOUT_MS", 5000)?);
        let auth_cookie_name = env::var("AUTH_COOKIE_NAME").unwrap_or_else(|_| "tokenJWT".to_string());

        let admin_seed = match (
            env::var("ADMIN_USERNAME"),
            env::var("ADMIN_EMAIL"),
            env::var("ADMIN_PASSWORD"),
        ) {
            (Ok(username), Ok(email), Ok(password)) => Some(AdminSeed { username, email, password }),
            _ => None,
        };

        Ok(Config {
            server_host,
            server_port,
            database_url,
            jwt_secret,
            jwt_expires_in,
            storage_timeout,
            auth_cookie_name,
            admin_seed,
        })
    }

    pub fn auth_settings(&self) -> AuthSettings {
        AuthSettings {
            jwt_secret: self.jwt_secret.clone(),
            jwt_expires_in: self.jwt_expires_in,
            cookie_name: self.auth_cookie_name.clone(),
        }
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::Missing(name))
}

fn parse_var<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .parse::<T>()
            .map_err(|_| ConfigError::NotANumber { name, value }),
        Err(_) => Ok(default),
    }
}
