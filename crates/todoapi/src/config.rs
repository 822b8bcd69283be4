use std::{env, fmt, str::FromStr};

use thiserror::Error;

/// Default database name for the document store backend.
pub const DEFAULT_DYNAMODB_DATABASE_NAME: &str = "TodoDB";
/// Default container name for the document store backend.
pub const DEFAULT_DYNAMODB_CONTAINER_NAME: &str = "Todos";
/// Default SQLite database path.
pub const DEFAULT_SQLITE_PATH: &str = "todoapi.db";

/// Errors detected while loading configuration, before the server starts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown DATABASE_PROVIDER '{0}' (expected inmemory, sqlite or dynamodb)")]
    UnknownProvider(String),
    #[error("{setting} is required when DATABASE_PROVIDER is {provider}")]
    MissingSetting {
        setting: &'static str,
        provider: StorageProvider,
    },
    #[error("DATABASE_PROVIDER is {provider} but the '{feature}' feature was not compiled in")]
    BackendNotCompiled {
        provider: StorageProvider,
        feature: &'static str,
    },
}

/// The storage backend selected at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StorageProvider {
    #[default]
    InMemory,
    Sqlite,
    DynamoDb,
}

impl StorageProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageProvider::InMemory => "inmemory",
            StorageProvider::Sqlite => "sqlite",
            StorageProvider::DynamoDb => "dynamodb",
        }
    }

    /// Whether the backend for this provider is part of the build.
    fn is_compiled(&self) -> bool {
        match self {
            StorageProvider::InMemory => true,
            StorageProvider::Sqlite => cfg!(feature = "sqlite"),
            StorageProvider::DynamoDb => cfg!(feature = "dynamodb"),
        }
    }
}

impl fmt::Display for StorageProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StorageProvider {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "inmemory" | "in-memory" | "memory" => Ok(StorageProvider::InMemory),
            "sqlite" => Ok(StorageProvider::Sqlite),
            "dynamodb" => Ok(StorageProvider::DynamoDb),
            _ => Err(ConfigError::UnknownProvider(s.to_string())),
        }
    }
}

/// Settings for the DynamoDB document store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamoDbSettings {
    /// Endpoint URL of the DynamoDB service.
    pub connection_string: Option<String>,
    pub database_name: String,
    pub container_name: String,
}

impl DynamoDbSettings {
    /// Name of the table holding the todo documents.
    pub fn table_name(&self) -> String {
        format!("{}-{}", self.database_name, self.container_name)
    }
}

impl Default for DynamoDbSettings {
    fn default() -> Self {
        Self {
            connection_string: None,
            database_name: DEFAULT_DYNAMODB_DATABASE_NAME.to_string(),
            container_name: DEFAULT_DYNAMODB_CONTAINER_NAME.to_string(),
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Storage backend (default: inmemory)
    pub provider: StorageProvider,
    /// Path to SQLite database file (default: "todoapi.db")
    pub sqlite_path: String,
    /// Document store settings, only read when `provider` is DynamoDb.
    pub dynamodb: DynamoDbSettings,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DATABASE_PROVIDER` - `inmemory`, `sqlite` or `dynamodb` (default: inmemory)
    /// - `SQLITE_PATH` - SQLite database path (default: "todoapi.db")
    /// - `DYNAMODB_CONNECTION_STRING` - DynamoDB endpoint URL (required for dynamodb)
    /// - `DYNAMODB_DATABASE_NAME` - database name (default: "TodoDB")
    /// - `DYNAMODB_CONTAINER_NAME` - container name (default: "Todos")
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup and validate it.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let provider = match non_empty("DATABASE_PROVIDER") {
            Some(value) => value.parse()?,
            None => StorageProvider::default(),
        };

        let config = Self {
            provider,
            sqlite_path: non_empty("SQLITE_PATH").unwrap_or_else(|| DEFAULT_SQLITE_PATH.to_string()),
            dynamodb: DynamoDbSettings {
                connection_string: non_empty("DYNAMODB_CONNECTION_STRING"),
                database_name: non_empty("DYNAMODB_DATABASE_NAME")
                    .unwrap_or_else(|| DEFAULT_DYNAMODB_DATABASE_NAME.to_string()),
                container_name: non_empty("DYNAMODB_CONTAINER_NAME")
                    .unwrap_or_else(|| DEFAULT_DYNAMODB_CONTAINER_NAME.to_string()),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Checks that the selected backend is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.provider.is_compiled() {
            return Err(ConfigError::BackendNotCompiled {
                provider: self.provider,
                feature: self.provider.as_str(),
            });
        }

        if self.provider == StorageProvider::DynamoDb && self.dynamodb.connection_string.is_none()
        {
            return Err(ConfigError::MissingSetting {
                setting: "DYNAMODB_CONNECTION_STRING",
                provider: self.provider,
            });
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: StorageProvider::default(),
            sqlite_path: DEFAULT_SQLITE_PATH.to_string(),
            dynamodb: DynamoDbSettings::default(),
        }
    }
}
