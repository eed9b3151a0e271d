use crate::error::{AppError, AppResult};
use serde::Deserialize;

#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    pub database_url: String,
    #[serde(default = "default_max_connections")]
    pub database_max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub database_min_connections: u32,

    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_api_timeout")]
    pub api_timeout_secs: u64,

    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Clone, Debug)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

// Default value functions
fn default_max_connections() -> u32 {
    10
}
fn default_min_connections() -> u32 {
    1
}
fn default_api_base_url() -> String {
    "http://localhost:3000".to_string()
}
fn default_api_timeout() -> u64 {
    10
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "text".to_string()
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        Self::from_env_with_database_url(None)
    }

    /// Loads the config from the process environment (and `.env`), letting
    /// an explicit `database_url` win over `DATABASE_URL`.
    pub fn from_env_with_database_url(database_url: Option<&str>) -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let mut vars: Vec<(String, String)> = std::env::vars().collect();
        if let Some(url) = database_url {
            vars.retain(|(key, _)| !key.eq_ignore_ascii_case("DATABASE_URL"));
            vars.push(("DATABASE_URL".to_string(), url.to_string()));
        }

        Self::from_vars(vars)
    }

    pub fn from_vars<I>(vars: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config = envy::from_iter::<_, Config>(vars)
            .map_err(|e| AppError::Config(format!("Failed to load config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> AppResult<()> {
        if self.database_url.trim().is_empty() {
            return Err(AppError::Config("DATABASE_URL must not be empty".to_string()));
        }

        if self.database_max_connections == 0 {
            return Err(AppError::Config(
                "DATABASE_MAX_CONNECTIONS must be > 0".to_string(),
            ));
        }

        if self.database_min_connections > self.database_max_connections {
            return Err(AppError::Config(
                "DATABASE_MIN_CONNECTIONS cannot be greater than DATABASE_MAX_CONNECTIONS"
                    .to_string(),
            ));
        }

        match url::Url::parse(&self.api_base_url) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            _ => {
                return Err(AppError::Config(
                    "API_BASE_URL must be an absolute http(s) URL".to_string(),
                ));
            }
        }

        if self.api_timeout_secs == 0 {
            return Err(AppError::Config("API_TIMEOUT_SECS must be > 0".to_string()));
        }

        Ok(())
    }

    pub fn database(&self) -> DatabaseConfig {
        DatabaseConfig {
            url: self.database_url.clone(),
            max_connections: self.database_max_connections,
            min_connections: self.database_min_connections,
        }
    }

    pub fn api(&self) -> ApiConfig {
        ApiConfig {
            base_url: self.api_base_url.clone(),
            timeout_secs: self.api_timeout_secs,
        }
    }

    pub fn logging(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.log_level.clone(),
            format: self.log_format.clone(),
        }
    }
}
