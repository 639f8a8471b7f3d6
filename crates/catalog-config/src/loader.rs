//! Configuration loader with layered sources.

use crate::{format_validation_errors, AppConfig, ConfigValidator};
use catalog_core::CatalogError;
use config::{Config, ConfigError, Environment, File};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

/// Prefix for environment variable overrides (`CATALOG__SECTION__KEY`).
pub const ENV_PREFIX: &str = "CATALOG";

/// Layered configuration loader.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_dir: String,
    environment: String,
    env_overrides: Option<HashMap<String, String>>,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Uncommitted local overrides
    /// 4. Environment variables with `CATALOG__` prefix
    #[must_use]
    pub fn new(config_dir: impl Into<String>) -> Self {
        let environment =
            std::env::var("CATALOG_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        Self {
            config_dir: config_dir.into(),
            environment,
            env_overrides: None,
        }
    }

    /// Creates a loader for the default location (`./config`).
    #[must_use]
    pub fn from_default_location() -> Self {
        Self::new("./config")
    }

    /// Overrides the environment name used to pick `{environment}.toml`.
    #[must_use]
    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = environment.into();
        self
    }

    /// Replaces the process environment with an explicit variable map.
    #[must_use]
    pub fn with_env_overrides(mut self, vars: HashMap<String, String>) -> Self {
        self.env_overrides = Some(vars);
        self
    }

    /// Loads, deserializes and validates the configuration.
    pub fn load(&self) -> Result<AppConfig, CatalogError> {
        // Load .env file if present
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        info!("Loading configuration for environment: {}", self.environment);

        let mut builder = Config::builder();

        for name in ["default", self.environment.as_str(), "local"] {
            let path = format!("{}/{}.toml", self.config_dir, name);
            if Path::new(&path).exists() {
                debug!("Loading config from: {}", path);
                builder = builder.add_source(File::with_name(&path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true)
                .source(self.env_overrides.clone()),
        );

        let mut app_config: AppConfig = builder
            .build()
            .and_then(|c| c.try_deserialize::<AppConfig>())
            .map_err(config_error_to_catalog_error)?;

        app_config.app.environment.clone_from(&self.environment);

        ConfigValidator::validate(&app_config)
            .map_err(|errors| CatalogError::Configuration(format_validation_errors(&errors)))?;

        Ok(app_config)
    }
}

fn config_error_to_catalog_error(err: ConfigError) -> CatalogError {
    CatalogError::Configuration(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CacheBackend;
    use std::fs;

    fn write(dir: &Path, name: &str, contents: &str) {
        fs::write(dir.join(name), contents).unwrap();
    }

    fn loader(dir: &Path) -> ConfigLoader {
        ConfigLoader::new(dir.to_string_lossy().to_string())
            .with_environment("test")
            .with_env_overrides(HashMap::new())
    }

    #[test]
    fn test_missing_directory_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = loader(&dir.path().join("absent")).load().unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.cache.ttl_secs, 600);
        assert_eq!(config.app.environment, "test");
    }

    #[test]
    fn test_environment_file_overrides_default() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "default.toml", "[server]\nport = 9000\n\n[cache]\nttl_secs = 120\n");
        write(dir.path(), "test.toml", "[cache]\nbackend = \"memory\"\n");

        let config = loader(dir.path()).load().unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.cache.ttl_secs, 120);
        assert_eq!(config.cache.backend, CacheBackend::Memory);
    }

    #[test]
    fn test_env_vars_override_files() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "default.toml", "[cache]\nttl_secs = 120\n");

        let mut vars = HashMap::new();
        vars.insert("CATALOG__CACHE__TTL_SECS".to_string(), "30".to_string());
        vars.insert(
            "CATALOG__DATABASE__URL".to_string(),
            "postgres://app:secret@db:5432/products".to_string(),
        );

        let config = loader(dir.path()).with_env_overrides(vars).load().unwrap();
        assert_eq!(config.cache.ttl_secs, 30);
        assert_eq!(config.database.url, "postgres://app:secret@db:5432/products");
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "default.toml", "[cache]\nttl_secs = 0\n");

        let err = loader(dir.path()).load().unwrap_err();
        assert!(matches!(err, CatalogError::Configuration(msg) if msg.contains("TTL")));
    }

    #[test]
    fn test_unknown_log_format_fails_deserialization() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "default.toml", "[logging]\nformat = \"xml\"\n");

        let err = loader(dir.path()).load().unwrap_err();
        assert!(matches!(err, CatalogError::Configuration(msg) if msg.contains("xml")));
    }
}
