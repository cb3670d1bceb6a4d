// demos/storefront_app/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use storefront_cart::StorefrontConfig;

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub search_debounce: Duration,
  pub mock_latency: Duration,
  pub strict_join: bool,

  pub demo_username: String,
  pub demo_password: String,

  /// JSON file with a `GET /products` shaped array. Built-in catalog when unset.
  pub seed_catalog: Option<PathBuf>,

  pub log_json: bool,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| {
      env::var(var_name).map_err(|e| AppError::Config(format!("Missing environment variable '{}': {}", var_name, e)))
    };

    let search_debounce_ms = get_env("SEARCH_DEBOUNCE_MS")
      .unwrap_or_else(|_| "500".to_string())
      .parse::<u64>()
      .map_err(|e| AppError::Config(format!("Invalid SEARCH_DEBOUNCE_MS: {}", e)))?;
    let mock_latency_ms = get_env("MOCK_LATENCY_MS")
      .unwrap_or_else(|_| "25".to_string())
      .parse::<u64>()
      .map_err(|e| AppError::Config(format!("Invalid MOCK_LATENCY_MS: {}", e)))?;
    let strict_join = get_env("STRICT_JOIN")
      .unwrap_or_else(|_| "false".to_string())
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid STRICT_JOIN value: {}", e)))?;

    let demo_username = get_env("DEMO_USERNAME").unwrap_or_else(|_| "crio.do".to_string());
    let demo_password = get_env("DEMO_PASSWORD").unwrap_or_else(|_| "learnbydoing".to_string());
    let seed_catalog = get_env("SEED_CATALOG").ok().map(PathBuf::from);

    let log_json = get_env("LOG_JSON")
      .unwrap_or_else(|_| "false".to_string())
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid LOG_JSON value: {}", e)))?;

    Ok(Self {
      search_debounce: Duration::from_millis(search_debounce_ms),
      mock_latency: Duration::from_millis(mock_latency_ms),
      strict_join,
      demo_username,
      demo_password,
      seed_catalog,
      log_json,
    })
  }

  pub fn storefront_config(&self) -> StorefrontConfig {
    StorefrontConfig::default()
      .with_search_debounce(self.search_debounce)
      .with_strict_join(self.strict_join)
  }
}
