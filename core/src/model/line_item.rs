// storefront_cart/src/model/line_item.rs

use super::{CartRow, Product};
use serde::Serialize;

/// A cart row joined with its catalog entry.
///
/// When the row names a product missing from the catalog snapshot the item
/// still exists, but `product` is `None` and every product accessor returns
/// its empty value. Renderers treat those as blank fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLineItem {
  #[serde(rename = "productId")]
  pub product_id: String,
  pub qty: u32,
  #[serde(flatten)]
  pub product: Option<Product>,
}

impl CartLineItem {
  pub fn resolved(row: &CartRow, product: &Product) -> Self {
    Self {
      product_id: row.product_id.clone(),
      qty: row.qty,
      product: Some(product.clone()),
    }
  }

  pub fn unresolved(row: &CartRow) -> Self {
    Self {
      product_id: row.product_id.clone(),
      qty: row.qty,
      product: None,
    }
  }

  pub fn is_resolved(&self) -> bool {
    self.product.is_some()
  }

  pub fn name(&self) -> &str {
    self.product.as_ref().map_or("", |p| p.name.as_str())
  }

  pub fn category(&self) -> &str {
    self.product.as_ref().map_or("", |p| p.category.as_str())
  }

  pub fn image(&self) -> &str {
    self.product.as_ref().map_or("", |p| p.image.as_str())
  }

  pub fn rating(&self) -> Option<u8> {
    self.product.as_ref().map(|p| p.rating)
  }

  pub fn cost(&self) -> Option<f64> {
    self.product.as_ref().map(|p| p.cost)
  }

  /// Line value in micro-units, or `None` when the product is unresolved.
  pub fn line_micros(&self) -> Option<u64> {
    self.product.as_ref().map(|p| p.line_micros(self.qty))
  }

  pub fn as_row(&self) -> CartRow {
    CartRow::new(self.product_id.clone(), self.qty)
  }
}
