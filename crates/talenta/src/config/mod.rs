//! Environment-driven configuration for the merit platform.
//!
//! Everything is read from `TALENTA_*` variables (a `.env` file is honored in
//! development). The telemetry filter falls back to a per-environment default
//! when `TALENTA_LOG_LEVEL` is unset, so development builds are chatty and
//! production builds are not.

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppEnvironment {
    #[default]
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    /// Baseline tracing filter applied when no explicit level is configured.
    pub const fn default_log_filter(self) -> &'static str {
        match self {
            AppEnvironment::Development => "debug",
            AppEnvironment::Test => "warn",
            AppEnvironment::Production => "info",
        }
    }
}

impl FromStr for AppEnvironment {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "dev" | "development" => Ok(Self::Development),
            "test" | "ci" => Ok(Self::Test),
            "prod" | "production" => Ok(Self::Production),
            other => Err(ConfigError::Environment {
                value: other.to_string(),
            }),
        }
    }
}

/// Top-level configuration assembled once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = match env::var("TALENTA_ENV") {
            Ok(value) => value.parse()?,
            Err(_) => AppEnvironment::default(),
        };

        let host = env::var("TALENTA_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = match env::var("TALENTA_PORT") {
            Ok(value) => value
                .parse()
                .map_err(|source| ConfigError::Port { value, source })?,
            Err(_) => 3000,
        };

        let filter = env::var("TALENTA_LOG_LEVEL")
            .unwrap_or_else(|_| environment.default_log_filter().to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { filter },
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip = match self.host.as_str() {
            "localhost" => IpAddr::V4(Ipv4Addr::LOCALHOST),
            other => other.parse().map_err(|source| ConfigError::Host {
                host: other.to_string(),
                source,
            })?,
        };
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing filter handed to the fmt subscriber; `RUST_LOG` still overrides it
/// at init time.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub filter: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("TALENTA_ENV '{value}' is not one of development/test/production")]
    Environment { value: String },
    #[error("TALENTA_PORT '{value}' is not a valid port")]
    Port {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("TALENTA_HOST '{host}' is not an IP address or 'localhost'")]
    Host {
        host: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, OnceLock};

    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

    const KEYS: [&str; 4] = [
        "TALENTA_ENV",
        "TALENTA_HOST",
        "TALENTA_PORT",
        "TALENTA_LOG_LEVEL",
    ];

    /// Runs `run` with exactly `vars` set, serialized against the other
    /// config tests since process env is shared state.
    fn with_env<T>(vars: &[(&str, &str)], run: impl FnOnce() -> T) -> T {
        let _guard = ENV_LOCK
            .get_or_init(|| Mutex::new(()))
            .lock()
            .expect("env lock poisoned");
        for key in KEYS {
            env::remove_var(key);
        }
        for (key, value) in vars {
            env::set_var(key, value);
        }
        let result = run();
        for (key, _) in vars {
            env::remove_var(key);
        }
        result
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = with_env(&[], AppConfig::load).expect("defaults load");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.filter, "debug");
    }

    #[test]
    fn log_filter_follows_the_environment() {
        let config =
            with_env(&[("TALENTA_ENV", "production")], AppConfig::load).expect("config loads");
        assert_eq!(config.environment, AppEnvironment::Production);
        assert_eq!(config.telemetry.filter, "info");
    }

    #[test]
    fn explicit_log_level_beats_the_environment_default() {
        let config = with_env(
            &[
                ("TALENTA_ENV", "production"),
                ("TALENTA_LOG_LEVEL", "talenta=trace"),
            ],
            AppConfig::load,
        )
        .expect("config loads");
        assert_eq!(config.telemetry.filter, "talenta=trace");
    }

    #[test]
    fn unknown_environment_is_rejected() {
        let err = with_env(&[("TALENTA_ENV", "staging")], AppConfig::load)
            .expect_err("unknown environment rejected");
        assert!(matches!(err, ConfigError::Environment { .. }));
    }

    #[test]
    fn out_of_range_port_is_rejected() {
        let err = with_env(&[("TALENTA_PORT", "70000")], AppConfig::load)
            .expect_err("invalid port rejected");
        assert!(matches!(err, ConfigError::Port { .. }));
    }

    #[test]
    fn localhost_resolves_to_loopback() {
        let server = ServerConfig {
            host: "localhost".to_string(),
            port: 8080,
        };
        let addr = server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 8080));
    }

    #[test]
    fn garbage_host_is_rejected() {
        let server = ServerConfig {
            host: "not-a-host".to_string(),
            port: 8080,
        };
        assert!(matches!(server.socket_addr(), Err(ConfigError::Host { .. })));
    }
}
