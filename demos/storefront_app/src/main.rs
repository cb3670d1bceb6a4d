// demos/storefront_app/src/main.rs

mod config;
mod errors;
mod services;
mod shopper;

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::services::{catalog_seed, MockBackend};

use std::sync::Arc;
use storefront_cart::Storefront;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

fn init_tracing(json: bool) {
  let builder = tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE); // Log when spans close, showing duration
  if json {
    builder.json().init();
  } else {
    builder.init();
  }
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
  let app_config = AppConfig::from_env()?;
  init_tracing(app_config.log_json);
  tracing::info!("Starting storefront demo...");

  let catalog = match &app_config.seed_catalog {
    Some(path) => catalog_seed::load_catalog(path).map_err(AppError::from)?,
    None => catalog_seed::default_catalog(),
  };

  let backend = Arc::new(MockBackend::new(catalog, app_config.mock_latency));
  let storefront = Arc::new(Storefront::new(backend, app_config.storefront_config()));

  let summary = shopper::run(storefront.clone(), &app_config).await?;

  let items = storefront.line_items();
  let cart_json = serde_json::to_string_pretty(&items).map_err(|e| AppError::Internal(e.to_string()))?;
  println!("{}", cart_json);
  println!("Order Details");
  println!("  Products          {}", summary.products);
  println!("  Subtotal          ${}", summary.subtotal);
  println!("  Shipping Charges  ${}", summary.shipping);
  println!("  Total             ${}", summary.total);

  tracing::info!("Storefront demo finished.");
  Ok(())
}
