// storefront_cart/src/state.rs
use parking_lot::{MappedRwLockReadGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

use crate::catalog::CatalogIndex;
use crate::error::CartResult;
use crate::model::{CartLineItem, CartRow, Product};
use crate::session::Session;

/// Shared ownership of a value behind a `parking_lot::RwLock`.
///
/// IMPORTANT: guards are blocking and MUST NOT be held across `.await`
/// suspension points.
#[derive(Debug)]
pub struct SharedState<T: Send + Sync + 'static>(Arc<RwLock<T>>);

impl<T: Send + Sync + 'static> SharedState<T> {
  pub fn new(data: T) -> Self {
    SharedState(Arc::new(RwLock::new(data)))
  }

  pub fn read(&self) -> RwLockReadGuard<'_, T> {
    self.0.read()
  }

  pub fn write(&self) -> RwLockWriteGuard<'_, T> {
    self.0.write()
  }

  // Guard to a single field, e.g. `state.map_read(|s| &s.items)`.
  pub fn map_read<F, U: ?Sized>(&self, f: F) -> MappedRwLockReadGuard<'_, U>
  where
    F: FnOnce(&T) -> &U,
  {
    RwLockReadGuard::map(self.read(), f)
  }
}

impl<T: Send + Sync + 'static> Clone for SharedState<T> {
  fn clone(&self) -> Self {
    SharedState(Arc::clone(&self.0))
  }
}

impl<T: Send + Sync + 'static + Default> Default for SharedState<T> {
  fn default() -> Self {
    Self::new(Default::default())
  }
}

/// Everything the storefront currently believes about the world.
///
/// `items` is derived from `products` and `cart_rows`; it is recomputed by
/// [`StoreSnapshot::rehydrate`] whenever either input changes and never sent
/// anywhere.
#[derive(Debug, Clone, Default)]
pub struct StoreSnapshot {
  /// Full catalog; the join source.
  pub products: Vec<Product>,
  /// Products currently listed, either the catalog or the last search result.
  pub listing: Vec<Product>,
  pub cart_rows: Vec<CartRow>,
  pub items: Vec<CartLineItem>,
  pub session: Session,
  /// Set when the last search came back with no matches.
  pub no_search_results: bool,
}

impl StoreSnapshot {
  /// Rebuilds `items`. Both the cart and the catalog must be non-empty,
  /// otherwise the cart view is empty.
  pub fn rehydrate(&mut self, strict: bool) -> CartResult<()> {
    if self.cart_rows.is_empty() || self.products.is_empty() {
      self.items.clear();
      return Ok(());
    }
    let index = CatalogIndex::new(&self.products);
    self.items = if strict {
      match index.hydrate_strict(&self.cart_rows) {
        Ok(items) => items,
        Err(e) => {
          self.items.clear();
          return Err(e);
        }
      }
    } else {
      index.hydrate(&self.cart_rows)
    };
    Ok(())
  }
}
