// storefront_cart/src/catalog.rs

//! Hydration of cart rows against the product catalog.
//!
//! The backend hands out bare `(productId, qty)` rows; everything a renderer
//! needs (name, image, cost, ...) lives in the catalog. Joining is done
//! through a [`CatalogIndex`] keyed by product id. When the catalog contains
//! the same id more than once the first entry wins.

use crate::error::{CartError, CartResult};
use crate::model::{CartLineItem, CartRow, Product};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Borrowed lookup table over a catalog snapshot.
#[derive(Debug)]
pub struct CatalogIndex<'a> {
  by_id: HashMap<&'a str, &'a Product>,
}

impl<'a> CatalogIndex<'a> {
  pub fn new(products: &'a [Product]) -> Self {
    let mut by_id = HashMap::with_capacity(products.len());
    for product in products {
      // `or_insert` keeps the first occurrence of a duplicated id.
      by_id.entry(product.id.as_str()).or_insert(product);
    }
    Self { by_id }
  }

  pub fn get(&self, product_id: &str) -> Option<&'a Product> {
    self.by_id.get(product_id).copied()
  }

  pub fn len(&self) -> usize {
    self.by_id.len()
  }

  pub fn is_empty(&self) -> bool {
    self.by_id.is_empty()
  }

  /// Joins every row with its product, keeping row order and duplicates.
  ///
  /// Rows naming an unknown product become unresolved line items carrying
  /// only the row's own fields.
  pub fn hydrate(&self, rows: &[CartRow]) -> Vec<CartLineItem> {
    rows
      .iter()
      .map(|row| match self.get(&row.product_id) {
        Some(product) => CartLineItem::resolved(row, product),
        None => {
          warn!(product_id = %row.product_id, "Cart row does not match any catalog product.");
          CartLineItem::unresolved(row)
        }
      })
      .collect()
  }

  /// Like [`hydrate`](Self::hydrate), but fails on the first row whose
  /// product is missing from the catalog.
  pub fn hydrate_strict(&self, rows: &[CartRow]) -> CartResult<Vec<CartLineItem>> {
    rows
      .iter()
      .map(|row| {
        self
          .get(&row.product_id)
          .map(|product| CartLineItem::resolved(row, product))
          .ok_or_else(|| CartError::UnresolvedProduct {
            product_id: row.product_id.clone(),
          })
      })
      .collect()
  }
}

/// Returns the complete data on all products in `rows` by looking them up in
/// `products`.
pub fn generate_cart_items(rows: &[CartRow], products: &[Product]) -> Vec<CartLineItem> {
  let index = CatalogIndex::new(products);
  let items = index.hydrate(rows);
  debug!(rows = rows.len(), catalog = index.len(), "Hydrated cart rows.");
  items
}

/// Whether a product with `product_id` is already among `items`.
pub fn is_item_in_cart(items: &[CartLineItem], product_id: &str) -> bool {
  items.iter().any(|item| item.product_id == product_id)
}
