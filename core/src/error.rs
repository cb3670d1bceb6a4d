// storefront_cart/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

use crate::credentials::CredentialError;

/// Failures reported by a `StorefrontBackend` implementation.
///
/// The variants mirror the HTTP statuses the storefront reacts to. Anything
/// that never produced a status (connection refused, bad JSON, ...) is a
/// `Transport` error.
#[derive(Debug, Error)]
pub enum BackendError {
  #[error("Not found: {message}")]
  NotFound { message: String },

  #[error("Bad request: {message}")]
  BadRequest { message: String },

  #[error("Unauthorized: {message}")]
  Unauthorized { message: String },

  #[error("Server error: {message}")]
  Server { message: String },

  #[error("Transport failure. Source: {source}")]
  Transport {
    #[source]
    source: AnyhowError,
  },
}

impl BackendError {
  pub fn not_found(message: impl Into<String>) -> Self {
    BackendError::NotFound { message: message.into() }
  }

  pub fn bad_request(message: impl Into<String>) -> Self {
    BackendError::BadRequest { message: message.into() }
  }

  pub fn unauthorized(message: impl Into<String>) -> Self {
    BackendError::Unauthorized { message: message.into() }
  }

  pub fn server(message: impl Into<String>) -> Self {
    BackendError::Server { message: message.into() }
  }

  pub fn is_not_found(&self) -> bool {
    matches!(self, BackendError::NotFound { .. })
  }
}

impl From<AnyhowError> for BackendError {
  fn from(err: AnyhowError) -> Self {
    BackendError::Transport { source: err }
  }
}

#[derive(Debug, Error)]
pub enum CartError {
  #[error("Cart row references product '{product_id}' which is not in the catalog snapshot")]
  UnresolvedProduct { product_id: String },

  #[error("Cannot price line item for product '{product_id}': cost is unknown")]
  MissingCost { product_id: String },

  #[error("Product doesn't exist: {message}")]
  ProductNotFound { message: String },

  #[error("Invalid credentials input: {0}")]
  Credentials(#[from] CredentialError),

  #[error("Backend request '{operation}' failed. Source: {source}")]
  Backend {
    operation: &'static str,
    #[source]
    source: BackendError,
  },
}

impl CartError {
  pub(crate) fn backend(operation: &'static str, source: BackendError) -> Self {
    CartError::Backend { operation, source }
  }
}

pub type CartResult<T, E = CartError> = std::result::Result<T, E>;
