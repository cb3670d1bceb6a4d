// storefront_cart/src/config.rs

use std::time::Duration;

pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Knobs for a [`Storefront`](crate::Storefront).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
  /// Quiet period before a typed search query is sent.
  pub search_debounce: Duration,
  /// Fail re-hydration with `CartError::UnresolvedProduct` instead of
  /// keeping partial line items for rows whose product is not in the catalog.
  pub strict_join: bool,
}

impl Default for StorefrontConfig {
  fn default() -> Self {
    Self {
      search_debounce: DEFAULT_SEARCH_DEBOUNCE,
      strict_join: false,
    }
  }
}

impl StorefrontConfig {
  pub fn with_search_debounce(mut self, delay: Duration) -> Self {
    self.search_debounce = delay;
    self
  }

  pub fn with_strict_join(mut self, strict: bool) -> Self {
    self.strict_join = strict;
    self
  }
}
