//! Runtime settings loaded from the environment (and `.env` via dotenvy).

use crate::error::ConfigError;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Deployment mode. Decides how much of a server error reaches the client.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Environment {
    Production,
    #[default]
    Development,
    Test,
}

impl Environment {
    pub fn is_production(self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Ok(Environment::Production),
            "development" | "dev" => Ok(Environment::Development),
            "test" => Ok(Environment::Test),
            _ => Err(ConfigError::Invalid {
                key: "APP_ENV",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub environment: Environment,
    pub host: IpAddr,
    pub port: u16,
    pub database_url: String,
    pub max_connections: u32,
}

impl Settings {
    /// Load `.env` if present, then read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`. In the test environment the database
    /// comes from `TEST_DATABASE_URL`, otherwise from `DATABASE_URL`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = match lookup("APP_ENV") {
            Some(v) => v.parse()?,
            None => Environment::default(),
        };
        let host = match lookup("HOST") {
            Some(v) => v.parse().map_err(|_| ConfigError::Invalid { key: "HOST", value: v })?,
            None => IpAddr::from([0, 0, 0, 0]),
        };
        let port = match lookup("PORT") {
            Some(v) => v.parse().map_err(|_| ConfigError::Invalid { key: "PORT", value: v })?,
            None => DEFAULT_PORT,
        };
        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(v) => match v.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "DB_MAX_CONNECTIONS",
                        value: v,
                    })
                }
            },
            None => DEFAULT_MAX_CONNECTIONS,
        };
        let url_key = if environment == Environment::Test {
            "TEST_DATABASE_URL"
        } else {
            "DATABASE_URL"
        };
        let database_url = lookup(url_key).ok_or(ConfigError::Missing(url_key))?;

        Ok(Settings {
            environment,
            host,
            port,
            database_url,
            max_connections,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
