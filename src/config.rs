use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct DbConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl DbConfig {
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub db: DbConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let db = DbConfig {
            url: std::env::var("DATABASE_URL")?,
            max_connections: env_or("DB_MAX_CONNECTIONS", 10),
            acquire_timeout_secs: env_or("DB_ACQUIRE_TIMEOUT_SECS", 5),
        };
        Ok(Self {
            host: std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env_or("APP_PORT", 8080),
            db,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_or_falls_back_on_missing_or_garbage() {
        assert_eq!(env_or::<u32>("INGEST_API_TEST_UNSET_VAR", 7), 7);

        std::env::set_var("INGEST_API_TEST_BAD_NUMBER", "not-a-number");
        assert_eq!(env_or::<u16>("INGEST_API_TEST_BAD_NUMBER", 8080), 8080);

        std::env::set_var("INGEST_API_TEST_GOOD_NUMBER", "42");
        assert_eq!(env_or::<u64>("INGEST_API_TEST_GOOD_NUMBER", 1), 42);
    }

    #[test]
    fn bind_addr_joins_host_and_port() {
        let cfg = AppConfig {
            host: "127.0.0.1".into(),
            port: 9000,
            db: DbConfig {
                url: "postgres://localhost/ingest".into(),
                max_connections: 1,
                acquire_timeout_secs: 3,
            },
        };
        assert_eq!(cfg.bind_addr(), "127.0.0.1:9000");
        assert_eq!(cfg.db.acquire_timeout(), Duration::from_secs(3));
    }
}
