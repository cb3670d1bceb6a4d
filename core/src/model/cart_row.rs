// storefront_cart/src/model/cart_row.rs

use serde::{Deserialize, Serialize};

/// One server-persisted cart entry: `{ "productId": ..., "qty": ... }`.
///
/// A row whose quantity is 0 is treated as deleted by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CartRow {
  #[serde(rename = "productId")]
  pub product_id: String,
  pub qty: u32,
}

impl CartRow {
  pub fn new(product_id: impl Into<String>, qty: u32) -> Self {
    Self {
      product_id: product_id.into(),
      qty,
    }
  }

  /// True when this row requests removal of the product.
  pub fn is_removal(&self) -> bool {
    self.qty == 0
  }
}
