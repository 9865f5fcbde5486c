use std::env;

use thiserror::Error;
use url::Url;

/// Environment variable holding the storage connection string.
pub const CONNECTION_STRING_VAR: &str = "STORAGE_CONNECTION_STRING";

/// Table used when the connection string does not name one.
pub const DEFAULT_TABLE_NAME: &str = "Tutorials";

/// Page size used by the in-memory store when none is given.
pub const DEFAULT_PAGE_SIZE: usize = 1_000;

/// Errors raised while loading configuration. All of them are fatal at startup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("STORAGE_CONNECTION_STRING is not set")]
    MissingConnectionString,
    #[error("Invalid connection string: {0}")]
    InvalidConnectionString(String),
    #[error("Unsupported storage scheme: {0}")]
    UnsupportedScheme(String),
}

/// Which table store backs the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageConfig {
    /// Process-local store, lost on restart.
    InMemory { page_size: usize },
    /// AWS DynamoDB table.
    DynamoDb {
        table_name: String,
        region: Option<String>,
        endpoint_url: Option<String>,
    },
}

impl StorageConfig {
    /// Parses a storage connection string.
    ///
    /// Supported formats:
    /// - `memory://` with an optional `?page_size=<n>`
    /// - `dynamodb://<table>?region=<region>&endpoint=<url>` where every part
    ///   is optional and the table defaults to `Tutorials`
    pub fn from_connection_string(value: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(value.trim())
            .map_err(|e| ConfigError::InvalidConnectionString(e.to_string()))?;

        let param = |name: &str| {
            url.query_pairs()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.into_owned())
                .filter(|value| !value.is_empty())
        };

        match url.scheme() {
            "memory" => {
                let page_size = match param("page_size") {
                    Some(raw) => raw
                        .parse::<usize>()
                        .ok()
                        .filter(|size| *size > 0)
                        .ok_or_else(|| {
                            ConfigError::InvalidConnectionString(format!(
                                "page_size must be a positive integer, got {raw}"
                            ))
                        })?,
                    None => DEFAULT_PAGE_SIZE,
                };
                Ok(Self::InMemory { page_size })
            }
            "dynamodb" => {
                let table_name = url
                    .host_str()
                    .filter(|host| !host.is_empty())
                    .unwrap_or(DEFAULT_TABLE_NAME)
                    .to_string();
                Ok(Self::DynamoDb {
                    table_name,
                    region: param("region"),
                    endpoint_url: param("endpoint"),
                })
            }
            other => Err(ConfigError::UnsupportedScheme(other.to_string())),
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub storage: StorageConfig,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `STORAGE_CONNECTION_STRING` - required, selects the table store
    pub fn from_env() -> Result<Self, ConfigError> {
        let connection_string = env::var(CONNECTION_STRING_VAR)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::MissingConnectionString)?;

        Ok(Self {
            storage: StorageConfig::from_connection_string(&connection_string)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_connection_string() {
        assert_eq!(
            StorageConfig::from_connection_string("memory://").unwrap(),
            StorageConfig::InMemory {
                page_size: DEFAULT_PAGE_SIZE
            }
        );
    }

    #[test]
    fn test_memory_connection_string_with_page_size() {
        assert_eq!(
            StorageConfig::from_connection_string("memory://?page_size=25").unwrap(),
            StorageConfig::InMemory { page_size: 25 }
        );
    }

    #[test]
    fn test_memory_connection_string_rejects_zero_page_size() {
        let result = StorageConfig::from_connection_string("memory://?page_size=0");
        assert!(matches!(
            result,
            Err(ConfigError::InvalidConnectionString(_))
        ));
    }

    #[test]
    fn test_dynamodb_connection_string() {
        let config = StorageConfig::from_connection_string(
            "dynamodb://TutorialsDev?region=us-east-1&endpoint=http://localhost:8000",
        )
        .unwrap();

        assert_eq!(
            config,
            StorageConfig::DynamoDb {
                table_name: "TutorialsDev".to_string(),
                region: Some("us-east-1".to_string()),
                endpoint_url: Some("http://localhost:8000".to_string()),
            }
        );
    }

    #[test]
    fn test_dynamodb_connection_string_defaults() {
        let config = StorageConfig::from_connection_string("dynamodb://").unwrap();

        assert_eq!(
            config,
            StorageConfig::DynamoDb {
                table_name: DEFAULT_TABLE_NAME.to_string(),
                region: None,
                endpoint_url: None,
            }
        );
    }

    #[test]
    fn test_unsupported_scheme() {
        let result = StorageConfig::from_connection_string("postgres://localhost/db");
        assert_eq!(
            result,
            Err(ConfigError::UnsupportedScheme("postgres".to_string()))
        );
    }

    #[test]
    fn test_garbage_connection_string() {
        let result = StorageConfig::from_connection_string("not a url");
        assert!(matches!(
            result,
            Err(ConfigError::InvalidConnectionString(_))
        ));
    }

    #[test]
    fn test_missing_connection_string_is_fatal() {
        env::remove_var(CONNECTION_STRING_VAR);

        let result = Config::from_env();

        assert!(matches!(result, Err(ConfigError::MissingConnectionString)));
    }
}
