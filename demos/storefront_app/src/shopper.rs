// demos/storefront_app/src/shopper.rs

//! A scripted shopping session exercising every storefront operation the UI
//! would trigger: register, login, browse, search, add, adjust, checkout.

use crate::config::AppConfig;
use crate::errors::Result;
use crate::services::MockBackend;
use std::sync::Arc;
use storefront_cart::{CartError, CheckoutSummary, MutationOutcome, Storefront};
use tracing::{info, instrument, warn};

/// Logs a mutation the way the UI would surface it.
fn report(action: &str, outcome: std::result::Result<MutationOutcome, CartError>) -> Result<()> {
  match outcome {
    Ok(MutationOutcome::Applied(items)) => {
      info!(action, lines = items.len(), "Cart updated.");
      Ok(())
    }
    Ok(MutationOutcome::Rejected(reason)) => {
      warn!(action, severity = ?reason.severity(), "{}", reason);
      Ok(())
    }
    Err(CartError::ProductNotFound { message }) => {
      warn!(action, "{}", message);
      Ok(())
    }
    Err(e) => Err(e.into()),
  }
}

#[instrument(name = "shopper::run", skip_all, fields(user = %config.demo_username))]
pub async fn run(storefront: Arc<Storefront<MockBackend>>, config: &AppConfig) -> Result<CheckoutSummary> {
  let count = storefront.load_products().await?;
  info!(count, "Browsing catalog.");

  // Anonymous visitors can look but not touch.
  let first_id = storefront.listing().first().map(|p| p.id.clone()).unwrap_or_default();
  report("add_before_login", storefront.add_to_cart(&first_id).await)?;

  storefront
    .register(&config.demo_username, &config.demo_password, &config.demo_password)
    .await?;
  storefront.login(&config.demo_username, &config.demo_password).await?;
  storefront.fetch_cart().await?;

  // Typing "home" one key at a time; only the final query is sent.
  let debouncer = storefront.search_debouncer();
  for end in 1..="home".len() {
    debouncer.call("home"[..end].to_string());
  }
  tokio::time::sleep(debouncer.delay() * 2).await;
  let found: Vec<String> = storefront.listing().into_iter().map(|p| p.id).collect();
  info!(matches = found.len(), "Search settled.");

  for id in &found {
    report("add_to_cart", storefront.add_to_cart(id).await)?;
  }
  if let Some(id) = found.first() {
    report("add_again", storefront.add_to_cart(id).await)?;
    report("increment", storefront.increment(id).await)?;
    report("increment", storefront.increment(id).await)?;
  }
  if let Some(id) = found.last() {
    report("decrement", storefront.decrement(id).await)?;
  }
  report("add_unknown", storefront.mutate("no-such-product", 1, storefront_cart::MutationIntent::AddToCart).await)?;

  Ok(storefront.checkout_summary())
}
