use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_DATABASE_FILENAME, DEFAULT_DB_MAX_CONNECTIONS,
    IN_MEMORY_DATABASE, MAX_DB_MAX_CONNECTIONS, MIN_DB_MAX_CONNECTIONS,
};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Relative to the config directory, or `:memory:`
    pub path: String,
    pub max_connections: u32,
    /// Insert the fixed demo project at startup if it is missing
    pub seed_demo_project: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_DATABASE_FILENAME),
            max_connections: DEFAULT_DB_MAX_CONNECTIONS,
            seed_demo_project: true,
        }
    }
}

impl DatabaseConfig {
    pub fn is_in_memory(&self) -> bool {
        self.path == IN_MEMORY_DATABASE
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.path.trim().is_empty() {
            return Err(ConfigError::invalid("database.path", "cannot be empty"));
        }

        // Keep the database file inside the config dir
        if !self.is_in_memory()
            && (Path::new(&self.path).is_absolute() || self.path.contains(".."))
        {
            return Err(ConfigError::invalid(
                "database.path",
                "must be relative and cannot contain '..'",
            ));
        }

        if self.max_connections < MIN_DB_MAX_CONNECTIONS
            || self.max_connections > MAX_DB_MAX_CONNECTIONS
        {
            return Err(ConfigError::invalid(
                "database.max_connections",
                format!(
                    "must be {}-{}, got {}",
                    MIN_DB_MAX_CONNECTIONS, MAX_DB_MAX_CONNECTIONS, self.max_connections
                ),
            ));
        }

        Ok(())
    }
}
