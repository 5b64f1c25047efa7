use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Assembled by `load` from the core config plus `DATABASE_URL`,
/// `DATABASE_NAME`, `CORS_ALLOWED_ORIGINS` and `PORT`.
#[derive(Debug, Clone)]
pub struct PortfolioConfig {
    pub common: core_config::Config,
    pub mongodb: MongoConfig,
    pub cors: CorsConfig,
}

/// Both values are optional: without them the API still serves, but the
/// store is absent and `/test` reports it as not initialized.
#[derive(Debug, Clone, Default)]
pub struct MongoConfig {
    pub uri: Option<String>,
    pub database: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".to_string()],
        }
    }
}

impl CorsConfig {
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }
}

impl MongoConfig {
    /// The connection pair, only when both halves are configured.
    pub fn connection(&self) -> Option<(&str, &str)> {
        match (self.uri.as_deref(), self.database.as_deref()) {
            (Some(uri), Some(database)) => Some((uri, database)),
            _ => None,
        }
    }
}

impl PortfolioConfig {
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env and APP__ prefix)
        let mut common = core_config::Config::load()?;

        if let Ok(port) = env::var("PORT") {
            common.port = port.parse().map_err(|e| {
                AppError::ConfigError(anyhow::anyhow!("Invalid PORT '{}': {}", port, e))
            })?;
        }

        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(PortfolioConfig {
            common,
            mongodb: MongoConfig {
                uri: get_env("DATABASE_URL", is_prod)?,
                database: get_env("DATABASE_NAME", is_prod)?,
            },
            cors: CorsConfig {
                allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                    .map(|v| parse_origins(&v))
                    .unwrap_or_else(|_| CorsConfig::default().allowed_origins),
            },
        })
    }
}

fn get_env(key: &str, required: bool) -> Result<Option<String>, AppError> {
    match env::var(key) {
        Ok(val) if !val.is_empty() => Ok(Some(val)),
        _ if required => Err(AppError::ConfigError(anyhow::anyhow!(
            "{} is required in production but not set",
            key
        ))),
        _ => Ok(None),
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect();

    if origins.is_empty() {
        CorsConfig::default().allowed_origins
    } else {
        origins
    }
}
