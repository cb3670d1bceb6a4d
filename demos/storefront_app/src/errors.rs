// demos/storefront_app/src/errors.rs

use storefront_cart::{BackendError, CartError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Authentication Failed: {0}")]
  Auth(String),

  #[error("Cart Error: {source}")]
  Cart {
    #[from]
    source: CartError,
  },

  #[error("Internal Error: {0}")]
  Internal(String),
}

impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    if err.is::<CartError>() {
      if let Ok(cart_err) = err.downcast::<CartError>() {
        return AppError::Cart { source: cart_err };
      }
      return AppError::Internal("CartError lost during downcast".to_string());
    }
    AppError::Internal(err.to_string())
  }
}

// The mock backend speaks in HTTP-ish failures.
impl From<AppError> for BackendError {
  fn from(err: AppError) -> Self {
    match err {
      AppError::Auth(m) => BackendError::bad_request(m),
      other => BackendError::server(other.to_string()),
    }
  }
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
