// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};
use storefront_cart::{BackendError, CartLineItem, CartRow, LoginResponse, Product, StorefrontBackend};
use tracing::Level;

// --- Common Fixtures ---
pub fn product(id: &str, cost: f64) -> Product {
  Product::new(id, format!("Product {}", id), "Misc", cost, 3, format!("https://img.example/{}.jpg", id))
}

pub fn sample_catalog() -> Vec<Product> {
  vec![
    Product::new("A", "iPhone XR", "Phones", 10.0, 4, "https://i.imgur.com/lulqWzW.jpg"),
    Product::new("B", "Basketball", "Sports", 5.0, 5, "https://i.imgur.com/lulqWzW.jpg"),
    Product::new("C", "Tan Leatherette Weekender Duffle", "Fashion", 150.0, 4, "https://crio.do/duffle.png"),
  ]
}

pub fn hydrated(rows: &[CartRow], products: &[Product]) -> Vec<CartLineItem> {
  storefront_cart::generate_cart_items(rows, products)
}

// --- In-memory backend ---
pub const TEST_TOKEN: &str = "test-token";
pub const TEST_USER: &str = "crio.do";
pub const TEST_PASSWORD: &str = "learnbydoing";

#[derive(Default)]
pub struct MockBackend {
  pub catalog: Vec<Product>,
  pub carts: Mutex<HashMap<String, Vec<CartRow>>>,
  pub upsert_calls: AtomicUsize,
  pub search_calls: AtomicUsize,
  pub searched: Mutex<Vec<String>>,
  pub fail_next: Mutex<Option<BackendError>>,
}

impl MockBackend {
  pub fn new(catalog: Vec<Product>) -> Arc<Self> {
    Arc::new(Self {
      catalog,
      ..Default::default()
    })
  }

  pub fn with_cart(catalog: Vec<Product>, rows: Vec<CartRow>) -> Arc<Self> {
    let backend = Self {
      catalog,
      ..Default::default()
    };
    backend.carts.lock().insert(TEST_TOKEN.to_string(), rows);
    Arc::new(backend)
  }

  pub fn fail_next_with(&self, err: BackendError) {
    *self.fail_next.lock() = Some(err);
  }

  pub fn upserts(&self) -> usize {
    self.upsert_calls.load(Ordering::SeqCst)
  }

  fn take_failure(&self) -> Result<(), BackendError> {
    match self.fail_next.lock().take() {
      Some(err) => Err(err),
      None => Ok(()),
    }
  }

  fn authorize(&self, token: &str) -> Result<(), BackendError> {
    if token == TEST_TOKEN {
      Ok(())
    } else {
      Err(BackendError::unauthorized("Protected route, Oauth2 Bearer token not found"))
    }
  }
}

#[async_trait]
impl StorefrontBackend for MockBackend {
  async fn products(&self) -> Result<Vec<Product>, BackendError> {
    self.take_failure()?;
    Ok(self.catalog.clone())
  }

  async fn search(&self, query: &str) -> Result<Vec<Product>, BackendError> {
    self.search_calls.fetch_add(1, Ordering::SeqCst);
    self.searched.lock().push(query.to_string());
    self.take_failure()?;
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
    self.take_failure()?;
    self.authorize(token)?;
    Ok(self.carts.lock().get(token).cloned().unwrap_or_default())
  }

  async fn upsert_cart(&self, token: &str, row: &CartRow) -> Result<Vec<CartRow>, BackendError> {
    self.upsert_calls.fetch_add(1, Ordering::SeqCst);
    self.take_failure()?;
    self.authorize(token)?;
    if !self.catalog.iter().any(|p| p.id == row.product_id) {
      return Err(BackendError::not_found("Product doesn't exist"));
    }
    let mut carts = self.carts.lock();
    let rows = carts.entry(token.to_string()).or_default();
    match rows.iter().position(|r| r.product_id == row.product_id) {
      Some(idx) if row.is_removal() => {
        rows.remove(idx);
      }
      Some(idx) => rows[idx].qty = row.qty,
      None if row.is_removal() => {}
      None => rows.push(row.clone()),
    }
    Ok(rows.clone())
  }

  async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, BackendError> {
    self.take_failure()?;
    if username == TEST_USER && password == TEST_PASSWORD {
      Ok(LoginResponse {
        token: TEST_TOKEN.to_string(),
        username: username.to_string(),
        balance: 5000,
      })
    } else {
      Err(BackendError::bad_request("Password is incorrect"))
    }
  }

  async fn register(&self, username: &str, _password: &str) -> Result<(), BackendError> {
    self.take_failure()?;
    if username == TEST_USER {
      return Err(BackendError::bad_request("Username is already taken"));
    }
    Ok(())
  }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
