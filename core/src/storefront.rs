// storefront_cart/src/storefront.rs

//! Contains the `Storefront<B>` controller: the piece that talks to the
//! backend, keeps the snapshot consistent and routes every cart change
//! through the mutation guard.
//!
//! Snapshot locks are taken and released between awaits; handlers never hold
//! a guard while a backend call is in flight.

use crate::backend::StorefrontBackend;
use crate::config::StorefrontConfig;
use crate::credentials::{validate_login, validate_registration};
use crate::debounce::Debouncer;
use crate::error::{BackendError, CartError, CartResult};
use crate::guard::{evaluate, Decision, MutationIntent, MutationRequest, Rejection};
use crate::model::{CartLineItem, Product};
use crate::pricing::{self, CheckoutSummary};
use crate::session::Session;
use crate::state::{SharedState, StoreSnapshot};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Result of a cart mutation that did not fail outright.
#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome {
  /// The backend accepted the change; the freshly hydrated cart.
  Applied(Vec<CartLineItem>),
  /// The guard refused; nothing was sent.
  Rejected(Rejection),
}

impl MutationOutcome {
  pub fn is_applied(&self) -> bool {
    matches!(self, MutationOutcome::Applied(_))
  }
}

pub struct Storefront<B: StorefrontBackend> {
  backend: Arc<B>,
  state: SharedState<StoreSnapshot>,
  config: StorefrontConfig,
}

impl<B: StorefrontBackend + 'static> Storefront<B> {
  pub fn new(backend: Arc<B>, config: StorefrontConfig) -> Self {
    Self {
      backend,
      state: SharedState::default(),
      config,
    }
  }

  pub fn config(&self) -> &StorefrontConfig {
    &self.config
  }

  /// Handle to the live snapshot, shared with this storefront.
  pub fn state(&self) -> SharedState<StoreSnapshot> {
    self.state.clone()
  }

  pub fn backend(&self) -> &Arc<B> {
    &self.backend
  }

  // --- Catalog ---

  #[instrument(name = "Storefront::load_products", skip_all, err(Display))]
  pub async fn load_products(&self) -> CartResult<usize> {
    let products = self
      .backend
      .products()
      .await
      .map_err(|e| CartError::backend("products", e))?;

    let mut guard = self.state.write();
    guard.listing = products.clone();
    guard.products = products;
    guard.no_search_results = false;
    guard.rehydrate(self.config.strict_join)?;
    info!(count = guard.products.len(), "Catalog loaded.");
    Ok(guard.products.len())
  }

  /// Replaces the listing with the products matching `text`.
  ///
  /// A backend `NotFound` is not an error here: the listing becomes empty and
  /// `no_search_results` is raised. The join source is left untouched.
  #[instrument(name = "Storefront::search", skip(self), err(Display))]
  pub async fn search(&self, text: &str) -> CartResult<usize> {
    match self.backend.search(text).await {
      Ok(found) => {
        let mut guard = self.state.write();
        guard.listing = found;
        guard.no_search_results = false;
        debug!(matches = guard.listing.len(), "Search returned products.");
        Ok(guard.listing.len())
      }
      Err(BackendError::NotFound { .. }) => {
        let mut guard = self.state.write();
        guard.listing.clear();
        guard.no_search_results = true;
        debug!("Search matched no products.");
        Ok(0)
      }
      Err(e) => Err(CartError::backend("search", e)),
    }
  }

  /// A debouncer that runs [`search`](Self::search) once typing settles for
  /// the configured delay. Failures are logged, not returned.
  pub fn search_debouncer(self: &Arc<Self>) -> Debouncer<String> {
    let storefront = Arc::clone(self);
    Debouncer::new(self.config.search_debounce, move |text: String| {
      let storefront = Arc::clone(&storefront);
      async move {
        if let Err(e) = storefront.search(&text).await {
          warn!(error = %e, query = %text, "Debounced search failed.");
        }
      }
    })
  }

  pub fn listing(&self) -> Vec<Product> {
    self.state.read().listing.clone()
  }

  pub fn has_no_search_results(&self) -> bool {
    self.state.read().no_search_results
  }

  // --- Cart ---

  /// Reloads the server cart. Without a token the cart is simply empty.
  ///
  /// On failure the cached cart is cleared before the error is returned.
  #[instrument(name = "Storefront::fetch_cart", skip_all, err(Display))]
  pub async fn fetch_cart(&self) -> CartResult<usize> {
    let token = { self.state.read().session.token.clone() };
    let Some(token) = token.filter(|t| !t.is_empty()) else {
      debug!("No token; skipping cart fetch.");
      let mut guard = self.state.write();
      guard.cart_rows.clear();
      guard.items.clear();
      return Ok(0);
    };

    let rows = match self.backend.cart(&token).await {
      Ok(rows) => rows,
      Err(e) => {
        let mut guard = self.state.write();
        guard.cart_rows.clear();
        guard.items.clear();
        return Err(CartError::backend("cart", e));
      }
    };

    let mut guard = self.state.write();
    guard.cart_rows = rows;
    guard.rehydrate(self.config.strict_join)?;
    Ok(guard.items.len())
  }

  /// Guards and, if permitted, submits `(product_id, qty)` to the backend.
  ///
  /// With `strict_join` on, an `Err(UnresolvedProduct)` can follow a
  /// successful upsert: the backend has already applied the change and the
  /// returned rows are stored in `cart_rows`, only the hydrated `items` are
  /// cleared. Such an error does not mean the upsert was rolled back.
  #[instrument(name = "Storefront::mutate", skip(self), err(Display))]
  pub async fn mutate(&self, product_id: &str, qty: u32, intent: MutationIntent) -> CartResult<MutationOutcome> {
    let (token, decision) = {
      let guard = self.state.read();
      let token = guard.session.token.clone();
      let decision = evaluate(&MutationRequest {
        token: token.as_deref(),
        items: &guard.items,
        products: &guard.products,
        product_id,
        qty,
        intent,
      });
      (token, decision)
    };

    let row = match decision {
      Decision::Permitted(row) => row,
      Decision::RejectedNoAuth => {
        warn!("{}", Rejection::AuthenticationRequired);
        return Ok(MutationOutcome::Rejected(Rejection::AuthenticationRequired));
      }
      Decision::RejectedDuplicate => {
        warn!("{}", Rejection::DuplicateItem);
        return Ok(MutationOutcome::Rejected(Rejection::DuplicateItem));
      }
    };
    // The guard only permits when a token is present.
    let token = token.unwrap_or_default();

    let rows = self.backend.upsert_cart(&token, &row).await.map_err(|e| match e {
      BackendError::NotFound { message } => CartError::ProductNotFound { message },
      other => CartError::backend("upsert_cart", other),
    })?;

    let mut guard = self.state.write();
    guard.cart_rows = rows;
    if let Err(e) = guard.rehydrate(self.config.strict_join) {
      warn!(error = %e, rows = guard.cart_rows.len(), "Cart updated on the backend but could not be hydrated.");
      return Err(e);
    }
    info!(items = guard.items.len(), "Cart updated.");
    Ok(MutationOutcome::Applied(guard.items.clone()))
  }

  /// "Add to cart" from a product card.
  pub async fn add_to_cart(&self, product_id: &str) -> CartResult<MutationOutcome> {
    self.adjust(product_id, MutationIntent::AddToCart).await
  }

  pub async fn increment(&self, product_id: &str) -> CartResult<MutationOutcome> {
    self.adjust(product_id, MutationIntent::IncrementOne).await
  }

  pub async fn decrement(&self, product_id: &str) -> CartResult<MutationOutcome> {
    self.adjust(product_id, MutationIntent::DecrementOne).await
  }

  async fn adjust(&self, product_id: &str, intent: MutationIntent) -> CartResult<MutationOutcome> {
    let current = self.quantity_of(product_id);
    self.mutate(product_id, intent.desired_quantity(current), intent).await
  }

  /// Quantity of `product_id` in the hydrated cart, 0 when absent.
  pub fn quantity_of(&self, product_id: &str) -> u32 {
    self
      .state
      .read()
      .items
      .iter()
      .find(|item| item.product_id == product_id)
      .map_or(0, |item| item.qty)
  }

  pub fn line_items(&self) -> Vec<CartLineItem> {
    self.state.read().items.clone()
  }

  pub fn total_value(&self) -> f64 {
    pricing::total_value(&self.state.map_read(|s| &s.items))
  }

  pub fn total_items(&self) -> u64 {
    pricing::total_items(&self.state.map_read(|s| &s.items))
  }

  pub fn checkout_summary(&self) -> CheckoutSummary {
    CheckoutSummary::from_items(&self.state.map_read(|s| &s.items))
  }

  // --- Session ---

  #[instrument(name = "Storefront::login", skip(self, password), err(Display))]
  pub async fn login(&self, username: &str, password: &str) -> CartResult<()> {
    validate_login(username, password)?;
    let response = self
      .backend
      .login(username, password)
      .await
      .map_err(|e| CartError::backend("login", e))?;

    self
      .state
      .write()
      .session
      .login(response.token, response.username, response.balance);
    info!("Logged in successfully.");
    Ok(())
  }

  #[instrument(name = "Storefront::register", skip(self, password, confirm), err(Display))]
  pub async fn register(&self, username: &str, password: &str, confirm: &str) -> CartResult<()> {
    validate_registration(username, password, confirm)?;
    self
      .backend
      .register(username, password)
      .await
      .map_err(|e| CartError::backend("register", e))?;
    info!("Registered successfully.");
    Ok(())
  }

  pub fn logout(&self) {
    let mut guard = self.state.write();
    guard.session.clear();
    guard.cart_rows.clear();
    guard.items.clear();
  }

  pub fn session(&self) -> Session {
    self.state.read().session.clone()
  }

  pub fn is_logged_in(&self) -> bool {
    self.state.read().session.is_logged_in()
  }
}
