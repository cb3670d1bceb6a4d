// demos/storefront_app/src/services/mock_backend.rs

//! An in-process storefront backend with the same behaviour as the REST one:
//! bearer tokens, per-user carts, 404 for unknown products and empty searches.

use crate::services::auth_service::{hash_password, verify_password};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::Duration;
use storefront_cart::{BackendError, CartRow, LoginResponse, Product, StorefrontBackend};
use tracing::{info, instrument};
use uuid::Uuid;

pub const STARTING_BALANCE: u64 = 5000;

struct UserRecord {
  password_hash: String,
  balance: u64,
}

pub struct MockBackend {
  catalog: Vec<Product>,
  latency: Duration,
  users: Mutex<HashMap<String, UserRecord>>,
  // token -> username
  sessions: Mutex<HashMap<String, String>>,
  // username -> rows
  carts: Mutex<HashMap<String, Vec<CartRow>>>,
}

impl MockBackend {
  pub fn new(catalog: Vec<Product>, latency: Duration) -> Self {
    Self {
      catalog,
      latency,
      users: Mutex::new(HashMap::new()),
      sessions: Mutex::new(HashMap::new()),
      carts: Mutex::new(HashMap::new()),
    }
  }

  async fn simulate_network(&self) {
    if !self.latency.is_zero() {
      tokio::time::sleep(self.latency).await;
    }
  }

  fn user_for(&self, token: &str) -> Result<String, BackendError> {
    self
      .sessions
      .lock()
      .get(token)
      .cloned()
      .ok_or_else(|| BackendError::unauthorized("Protected route, Oauth2 Bearer token not found"))
  }
}

#[async_trait]
impl StorefrontBackend for MockBackend {
  async fn products(&self) -> Result<Vec<Product>, BackendError> {
    self.simulate_network().await;
    Ok(self.catalog.clone())
  }

  #[instrument(name = "mock_backend::search", skip(self))]
  async fn search(&self, query: &str) -> Result<Vec<Product>, BackendError> {
    self.simulate_network().await;
    let needle = query.to_lowercase();
    let found: Vec<Product> = self
      .catalog
      .iter()
      .filter(|p| p.name.to_lowercase().contains(&needle) || p.category.to_lowercase().contains(&needle))
      .cloned()
      .collect();
    if found.is_empty() {
      return Err(BackendError::not_found("No products found"));
    }
    Ok(found)
  }

  async fn cart(&self, token: &str) -> Result<Vec<CartRow>, BackendError> {
    self.simulate_network().await;
    let username = self.user_for(token)?;
    Ok(self.carts.lock().get(&username).cloned().unwrap_or_default())
  }

  #[instrument(name = "mock_backend::upsert_cart", skip(self, token), fields(product_id = %row.product_id, qty = row.qty))]
  async fn upsert_cart(&self, token: &str, row: &CartRow) -> Result<Vec<CartRow>, BackendError> {
    self.simulate_network().await;
    let username = self.user_for(token)?;
    if !self.catalog.iter().any(|p| p.id == row.product_id) {
      return Err(BackendError::not_found("Product doesn't exist"));
    }

    let mut carts = self.carts.lock();
    let rows = carts.entry(username).or_default();
    let existing = rows.iter().position(|r| r.product_id == row.product_id);
    match existing {
      Some(idx) if row.is_removal() => {
        rows.remove(idx);
      }
      Some(idx) => rows[idx].qty = row.qty,
      None if row.is_removal() => {}
      None => rows.push(row.clone()),
    }
    Ok(rows.clone())
  }

  #[instrument(name = "mock_backend::login", skip(self, password))]
  async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, BackendError> {
    self.simulate_network().await;
    let balance = {
      let users = self.users.lock();
      let user = users
        .get(username)
        .ok_or_else(|| BackendError::bad_request("Username does not exist"))?;
      if !verify_password(&user.password_hash, password)? {
        return Err(BackendError::bad_request("Password is incorrect"));
      }
      user.balance
    };

    let token = Uuid::new_v4().to_string();
    self.sessions.lock().insert(token.clone(), username.to_string());
    info!("Issued session token.");
    Ok(LoginResponse {
      token,
      username: username.to_string(),
      balance,
    })
  }

  #[instrument(name = "mock_backend::register", skip(self, password))]
  async fn register(&self, username: &str, password: &str) -> Result<(), BackendError> {
    self.simulate_network().await;
    let password_hash = hash_password(password)?;
    let mut users = self.users.lock();
    if users.contains_key(username) {
      return Err(BackendError::bad_request("Username is already taken"));
    }
    users.insert(
      username.to_string(),
      UserRecord {
        password_hash,
        balance: STARTING_BALANCE,
      },
    );
    Ok(())
  }
}
