//! Configuration loader with layered sources.

use crate::{AppConfig, ConfigValidator};
use config::{Config, ConfigError, Environment, File};
use jobseek_core::JobseekError;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Environment variable prefix for overrides, e.g. `JOBSEEK__SERVER__PORT`.
pub const ENV_PREFIX: &str = "JOBSEEK";

/// Configuration loader with runtime refresh support.
#[derive(Clone)]
pub struct ConfigLoader {
    config: Arc<RwLock<AppConfig>>,
    config_dir: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Untracked local overrides
    /// 4. Environment variables with `JOBSEEK__` prefix
    ///
    /// `JWT_SECRET` and `DATABASE_URL`/`DB_URL` are honoured when the
    /// prefixed variables are not set.
    pub fn new(config_dir: impl Into<String>) -> Result<Self, JobseekError> {
        let config_dir = config_dir.into();
        let config = Self::load_config(&config_dir)?;

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_dir,
        })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<Self, JobseekError> {
        Self::new("./config")
    }

    /// Returns the current configuration.
    pub async fn get(&self) -> AppConfig {
        self.config.read().await.clone()
    }

    /// Reloads the configuration from disk.
    pub async fn reload(&self) -> Result<(), JobseekError> {
        let new_config = Self::load_config(&self.config_dir)?;
        let mut config = self.config.write().await;
        *config = new_config;
        info!("Configuration reloaded successfully");
        Ok(())
    }

    fn load_config(config_dir: &str) -> Result<AppConfig, JobseekError> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var("JOBSEEK_ENV").unwrap_or_else(|_| "development".to_string());
        info!(environment = %environment, config_dir = %config_dir, "Loading configuration");

        let mut builder = Config::builder();

        for name in ["default", environment.as_str(), "local"] {
            let path = format!("{config_dir}/{name}.toml");
            if Path::new(&path).exists() {
                debug!("Loading config from: {}", path);
                builder = builder.add_source(File::with_name(&path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let mut app_config: AppConfig = builder
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(config_error_to_jobseek_error)?;

        apply_legacy_env(&mut app_config);

        if app_config.app.is_production()
            && app_config.security.jwt_secret == crate::SecurityConfig::default().jwt_secret
        {
            warn!("Using default JWT secret in production! This is a security risk.");
        }

        ConfigValidator::validate(&app_config).map_err(|errors| {
            JobseekError::Configuration(
                errors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; "),
            )
        })?;

        Ok(app_config)
    }
}

fn apply_legacy_env(config: &mut AppConfig) {
    let prefixed = |key: &str| std::env::var(format!("{ENV_PREFIX}__{key}")).is_ok();

    if !prefixed("SECURITY__JWT_SECRET") {
        if let Ok(secret) = std::env::var("JWT_SECRET") {
            debug!("Using JWT_SECRET from the environment");
            config.security.jwt_secret = secret;
        }
    }

    if !prefixed("DATABASE__URL") {
        let url = std::env::var("DATABASE_URL").or_else(|_| std::env::var("DB_URL"));
        match url {
            Ok(url) if url.starts_with("mysql://") => config.database.url = url,
            Ok(_) => warn!("Ignoring database URL from the environment: not a mysql:// URL"),
            Err(_) => {}
        }
    }
}

fn config_error_to_jobseek_error(err: ConfigError) -> JobseekError {
    JobseekError::Configuration(err.to_string())
}
