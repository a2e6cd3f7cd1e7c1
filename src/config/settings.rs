//! Typed view of the bookshelf configuration tree.
//!
//! Each section carries `#[serde(default)]`, so a file may name only the keys
//! it changes and the rest come from the `Default` impls below.

use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::logger::{ConsoleConfig, FileConfig, LogFormat, LoggerConfig};

/// Name and version reported in startup logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationConfig {
    pub name: String,
    pub version: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: "bookshelf".into(),
            version: crate::pkg_version().into(),
        }
    }
}

/// Where the HTTP listener binds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// `host:port`, ready for `TcpListener::bind`.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8080,
        }
    }
}

/// PostgreSQL connection and pool sizing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `postgres://` or `postgresql://`; empty until configured
    pub url: String,
    /// Upper bound on pooled connections
    pub max_connections: u32,
    /// Idle connections kept open
    pub min_connections: u32,
    /// Seconds a request waits for a pooled connection
    pub connection_timeout: u64,
    /// Run embedded migrations when the server starts
    pub auto_migrate: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: 10,
            min_connections: 1,
            connection_timeout: 30,
            auto_migrate: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleSettings {
    pub enabled: bool,
    pub colored: bool,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            colored: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSettings {
    pub enabled: bool,
    pub path: String,
    pub append: bool,
    /// One of `full`, `compact`, `json`; checked when converted
    pub format: String,
}

impl Default for FileSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            path: "logs/bookshelf.log".into(),
            append: true,
            format: "json".into(),
        }
    }
}

impl FileSettings {
    pub fn into_file_config(self) -> Result<FileConfig, ConfigError> {
        let format = LogFormat::from_str(&self.format)
            .map_err(|e| ConfigError::validation("logger.file.format", e.to_string()))?;

        FileConfig::new(self.enabled, PathBuf::from(self.path), self.append, format)
            .map_err(|e| ConfigError::validation("logger.file", e.to_string()))
    }
}

/// `[logger]` as written on disk. Strings stay unparsed until
/// [`LoggerSettings::into_logger_config`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerSettings {
    /// trace, debug, info, warn or error
    pub level: String,
    pub console: ConsoleSettings,
    pub file: FileSettings,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: "info".into(),
            console: ConsoleSettings::default(),
            file: FileSettings::default(),
        }
    }
}

impl LoggerSettings {
    pub fn into_logger_config(self) -> Result<LoggerConfig, ConfigError> {
        let console = ConsoleConfig::new(self.console.enabled, self.console.colored);
        let file = self.file.into_file_config()?;

        LoggerConfig::new(console, file, self.level)
            .map_err(|e| ConfigError::validation("logger", e.to_string()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub application: ApplicationConfig,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logger: LoggerSettings,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_settings() -> impl Strategy<Value = Settings> {
        (
            "[a-z][a-z0-9-]{0,20}",
            prop_oneof![Just("127.0.0.1".to_string()), Just("0.0.0.0".to_string())],
            1u16..=65535u16,
            prop_oneof![
                Just("postgres://localhost/books".to_string()),
                Just("postgresql://user:pass@db:5432/books".to_string()),
            ],
            (1u32..=10u32, 10u32..=100u32, 1u64..=120u64, any::<bool>()),
            prop_oneof![Just("debug".to_string()), Just("info".to_string())],
            prop_oneof![Just("full".to_string()), Just("json".to_string())],
        )
            .prop_map(|(name, host, port, url, pool, level, format)| {
                let (min_connections, max_connections, connection_timeout, auto_migrate) = pool;
                Settings {
                    application: ApplicationConfig {
                        name,
                        version: "1.0.0".to_string(),
                    },
                    server: ServerConfig { host, port },
                    database: DatabaseConfig {
                        url,
                        max_connections,
                        min_connections,
                        connection_timeout,
                        auto_migrate,
                    },
                    logger: LoggerSettings {
                        level,
                        file: FileSettings {
                            format,
                            ..Default::default()
                        },
                        ..Default::default()
                    },
                }
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn prop_settings_toml_round_trip(settings in arb_settings()) {
            let encoded = toml::to_string(&settings).unwrap();
            let decoded: Settings = toml::from_str(&encoded).unwrap();
            prop_assert_eq!(settings, decoded);
        }
    }

    #[test]
    fn test_server_address_from_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_pool_defaults() {
        let config = DatabaseConfig::default();
        assert_eq!(config.url, "");
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.min_connections, 1);
        assert_eq!(config.connection_timeout, 30);
        assert!(config.auto_migrate);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let toml_str = r#"
            [server]
            port = 9000

            [database]
            url = "postgres://localhost/books"
            auto_migrate = false
        "#;

        let settings: Settings = toml::from_str(toml_str).unwrap();
        assert_eq!(settings.application.name, "bookshelf");
        assert_eq!(settings.application.version, crate::pkg_version());
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.server.port, 9000);
        assert!(!settings.database.auto_migrate);
        assert_eq!(settings.logger.level, "info");
    }

    #[test]
    fn test_logger_section_converts_to_runtime_config() {
        let settings = LoggerSettings {
            level: "debug".to_string(),
            console: ConsoleSettings {
                enabled: true,
                colored: false,
            },
            file: FileSettings {
                enabled: true,
                path: "/tmp/bookshelf-test.log".to_string(),
                append: false,
                format: "compact".to_string(),
            },
        };

        let config = settings.into_logger_config().unwrap();
        assert_eq!(config.level, "debug");
        assert!(!config.console.colored);
        assert!(config.file.enabled);
        assert!(!config.file.append);
        assert_eq!(config.file.format, LogFormat::Compact);
    }

    #[test]
    fn test_file_settings_invalid_format() {
        let settings = FileSettings {
            format: "yaml".to_string(),
            ..Default::default()
        };

        match settings.into_file_config() {
            Err(ConfigError::ValidationError { field, .. }) => {
                assert_eq!(field, "logger.file.format")
            }
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_logger_settings_both_disabled() {
        let settings = LoggerSettings {
            console: ConsoleSettings {
                enabled: false,
                colored: false,
            },
            ..Default::default()
        };
        assert!(settings.into_logger_config().is_err());
    }
}
