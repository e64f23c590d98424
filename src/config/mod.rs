use anyhow::Result;
use dotenvy::dotenv;
use serde::Deserialize;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://local_pros.db";
pub const DEFAULT_PORTFOLIO_MAX_IMAGES: usize = 10;
pub const DEFAULT_LOG_FILE: &str = "local_pros.log";

/// Configuration for the application
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Database connection URL
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// Maximum number of images a professional can keep in the portfolio
    #[serde(default = "default_portfolio_max_images")]
    pub portfolio_max_images: usize,

    /// File receiving the tracing output; the terminal belongs to the UI
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

fn default_database_url() -> String {
    DEFAULT_DATABASE_URL.to_string()
}

fn default_portfolio_max_images() -> usize {
    DEFAULT_PORTFOLIO_MAX_IMAGES
}

fn default_log_file() -> String {
    DEFAULT_LOG_FILE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            portfolio_max_images: default_portfolio_max_images(),
            log_file: default_log_file(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// This function will:
    /// 1. Load variables from .env file if it exists
    /// 2. Deserialize environment variables into Config struct
    pub fn load() -> Result<Self> {
        dotenv().ok();

        let config = envy::from_env::<Config>()?;

        Ok(config)
    }

    /// Get a direct reference to the database URL
    pub fn database_url(&self) -> &str {
        &self.database_url
    }
}

/// Initialize environment variables and load configuration, letting
/// command-line values win over the environment.
pub fn init(database_url: Option<String>, log_file: Option<String>) -> Result<Config> {
    let mut config = Config::load()?;

    if let Some(url) = database_url {
        config.database_url = url;
    }
    if let Some(path) = log_file {
        config.log_file = path;
    }
    if config.portfolio_max_images == 0 {
        anyhow::bail!("PORTFOLIO_MAX_IMAGES must be at least 1");
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_env_is_empty() {
        let config: Config = envy::from_iter(Vec::<(String, String)>::new()).unwrap();
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.portfolio_max_images, 10);
        assert_eq!(config.log_file, DEFAULT_LOG_FILE);
    }

    #[test]
    fn env_values_override_defaults() {
        let vars = vec![
            ("DATABASE_URL".to_string(), "sqlite::memory:".to_string()),
            ("PORTFOLIO_MAX_IMAGES".to_string(), "4".to_string()),
        ];
        let config: Config = envy::from_iter(vars).unwrap();
        assert_eq!(config.database_url(), "sqlite::memory:");
        assert_eq!(config.portfolio_max_images, 4);
    }
}
