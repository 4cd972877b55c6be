//! Process configuration.
//!
//! One immutable `Config` per process lifetime, built from environment
//! variables with fixed defaults:
//!
//! * `BOOKMAN_PASSWORD_PATH`: path to file containing the database password
//! * `BOOKMAN_DATABASE_DSN`: database connection string
//! * `BOOKMAN_HTTP_ADDRESS`: host and port to listen on for HTTP requests
//!
//! The DSN is not validated here; parsing is deferred to the pool
//! provider in bookman-server.

use std::env;
use std::path::PathBuf;

/// Environment variable overriding the password file path.
pub const ENV_PASSWORD_PATH: &str = "BOOKMAN_PASSWORD_PATH";

/// Environment variable overriding the database DSN.
pub const ENV_DATABASE_DSN: &str = "BOOKMAN_DATABASE_DSN";

/// Environment variable overriding the HTTP listen address.
pub const ENV_HTTP_ADDRESS: &str = "BOOKMAN_HTTP_ADDRESS";

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// File containing the database password.
    pub password_path: PathBuf,

    /// Database connection string. The password field is injected
    /// later from `password_path` by the pool provider.
    pub dsn: String,

    /// HTTP host and port to listen on.
    pub http_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            password_path: PathBuf::from("/run/secrets/bookman_web_password"),
            dsn: "postgres://bookman_web@db/bookman".to_string(),
            http_addr: "0.0.0.0:3000".to_string(),
        }
    }
}

impl Config {
    /// Build a configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    ///
    /// Unset or empty keys fall back to the defaults. Tests use this
    /// directly to avoid mutating the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(ENV_PASSWORD_PATH).filter(|v| !v.is_empty()) {
            config.password_path = PathBuf::from(path);
        }

        if let Some(dsn) = lookup(ENV_DATABASE_DSN).filter(|v| !v.is_empty()) {
            config.dsn = dsn;
        }

        if let Some(addr) = lookup(ENV_HTTP_ADDRESS).filter(|v| !v.is_empty()) {
            config.http_addr = addr;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_map(env: &[(&str, &str)]) -> Config {
        let env: HashMap<&str, &str> = env.iter().copied().collect();
        Config::from_lookup(|key| env.get(key).map(|v| v.to_string()))
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = from_map(&[]);
        assert_eq!(config, Config::default());
        assert_eq!(
            config.password_path,
            PathBuf::from("/run/secrets/bookman_web_password")
        );
        assert_eq!(config.dsn, "postgres://bookman_web@db/bookman");
        assert_eq!(config.http_addr, "0.0.0.0:3000");
    }

    #[test]
    fn each_override_changes_exactly_one_field() {
        let cases: &[(&str, &str, fn(&Config) -> String)] = &[
            (ENV_PASSWORD_PATH, "/tmp/secret", |c| {
                c.password_path.display().to_string()
            }),
            (ENV_DATABASE_DSN, "postgres://other@host/db", |c| {
                c.dsn.clone()
            }),
            (ENV_HTTP_ADDRESS, "127.0.0.1:8080", |c| c.http_addr.clone()),
        ];

        for (key, value, field) in cases {
            let config = from_map(&[(key, value)]);
            let default = Config::default();

            assert_eq!(field(&config), *value, "override {key} not applied");

            // remaining fields keep their defaults
            for (other_key, _, other_field) in cases {
                if other_key != key {
                    assert_eq!(
                        other_field(&config),
                        other_field(&default),
                        "override {key} leaked into {other_key}"
                    );
                }
            }
        }
    }

    #[test]
    fn empty_value_keeps_default() {
        let config = from_map(&[(ENV_DATABASE_DSN, "")]);
        assert_eq!(config.dsn, Config::default().dsn);
    }
}
