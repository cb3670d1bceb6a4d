// storefront_cart/src/backend.rs

//! The REST backend as seen by the storefront.
//!
//! Implementations translate each method into one HTTP call:
//!
//! | method          | endpoint                              |
//! |-----------------|---------------------------------------|
//! | `products`      | `GET /products`                       |
//! | `search`        | `GET /products/search?value=<query>`  |
//! | `cart`          | `GET /cart` (bearer token)            |
//! | `upsert_cart`   | `POST /cart` (bearer token)           |
//! | `login`         | `POST /auth/login`                    |
//! | `register`      | `POST /auth/register`                 |
//!
//! and map non-2xx statuses onto [`BackendError`] variants.

use crate::error::BackendError;
use crate::model::{CartRow, Product};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Successful login payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
  pub token: String,
  pub username: String,
  pub balance: u64,
}

#[async_trait]
pub trait StorefrontBackend: Send + Sync {
  async fn products(&self) -> Result<Vec<Product>, BackendError>;

  /// `NotFound` means no product matched `query`.
  async fn search(&self, query: &str) -> Result<Vec<Product>, BackendError>;

  async fn cart(&self, token: &str) -> Result<Vec<CartRow>, BackendError>;

  /// Sets the quantity of `row.product_id` to `row.qty` (0 removes it) and
  /// returns the whole cart afterwards.
  async fn upsert_cart(&self, token: &str, row: &CartRow) -> Result<Vec<CartRow>, BackendError>;

  async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, BackendError>;

  async fn register(&self, username: &str, password: &str) -> Result<(), BackendError>;
}
