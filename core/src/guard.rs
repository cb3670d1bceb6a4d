// storefront_cart/src/guard.rs

//! Gatekeeping for outgoing cart modifications.
//!
//! Every add/update/remove passes through [`evaluate`] before anything is
//! sent to the backend. The decision depends only on the inputs of a single
//! call: token presence, the current cart, the target product and the intent.

use crate::catalog::is_item_in_cart;
use crate::model::{CartLineItem, CartRow, Product};
use std::fmt;
use tracing::{debug, instrument};

/// What the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationIntent {
  /// "Add to cart" on a product card. Only valid for products not yet in the cart.
  AddToCart,
  /// "+" control on an existing cart line.
  IncrementOne,
  /// "-" control on an existing cart line. Reaching 0 removes the line.
  DecrementOne,
}

impl MutationIntent {
  /// Quantity the cart line should end up with, given its current quantity.
  pub fn desired_quantity(self, current: u32) -> u32 {
    match self {
      MutationIntent::AddToCart => 1,
      MutationIntent::IncrementOne => current.saturating_add(1),
      MutationIntent::DecrementOne => current.saturating_sub(1),
    }
  }

  pub fn is_first_add(self) -> bool {
    matches!(self, MutationIntent::AddToCart)
  }
}

/// How loudly a rejection should be surfaced. Guard rejections are never fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
  Warning,
}

/// Why a mutation was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
  AuthenticationRequired,
  DuplicateItem,
}

impl Rejection {
  pub fn message(self) -> &'static str {
    match self {
      Rejection::AuthenticationRequired => "Login to add an item to the Cart",
      Rejection::DuplicateItem => {
        "Item already in cart. Use the cart sidebar to update quantity or remove item."
      }
    }
  }

  pub fn severity(self) -> Severity {
    Severity::Warning
  }
}

impl fmt::Display for Rejection {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.message())
  }
}

/// Outcome of [`evaluate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
  /// Send this upsert to the backend. A quantity of 0 deletes the line.
  Permitted(CartRow),
  RejectedNoAuth,
  RejectedDuplicate,
}

impl Decision {
  pub fn is_permitted(&self) -> bool {
    matches!(self, Decision::Permitted(_))
  }

  pub fn rejection(&self) -> Option<Rejection> {
    match self {
      Decision::Permitted(_) => None,
      Decision::RejectedNoAuth => Some(Rejection::AuthenticationRequired),
      Decision::RejectedDuplicate => Some(Rejection::DuplicateItem),
    }
  }
}

/// Everything the guard looks at for one mutation.
#[derive(Debug, Clone, Copy)]
pub struct MutationRequest<'a> {
  pub token: Option<&'a str>,
  pub items: &'a [CartLineItem],
  /// Catalog snapshot the request was made against. Not consulted by
  /// [`evaluate`]; carried for collaborators that inspect the request.
  pub products: &'a [Product],
  pub product_id: &'a str,
  pub qty: u32,
  pub intent: MutationIntent,
}

/// An empty token is as good as none.
pub fn has_token(token: Option<&str>) -> bool {
  token.is_some_and(|t| !t.is_empty())
}

#[instrument(
  name = "guard::evaluate",
  skip(request),
  fields(product_id = %request.product_id, qty = request.qty, intent = ?request.intent)
)]
pub fn evaluate(request: &MutationRequest<'_>) -> Decision {
  if !has_token(request.token) {
    debug!("Rejecting cart mutation: no authentication token.");
    return Decision::RejectedNoAuth;
  }

  if request.intent.is_first_add() && is_item_in_cart(request.items, request.product_id) {
    debug!("Rejecting cart mutation: product already in cart.");
    return Decision::RejectedDuplicate;
  }

  debug!("Cart mutation permitted.");
  Decision::Permitted(CartRow::new(request.product_id, request.qty))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn desired_quantity_per_intent() {
    assert_eq!(MutationIntent::AddToCart.desired_quantity(7), 1);
    assert_eq!(MutationIntent::IncrementOne.desired_quantity(2), 3);
    assert_eq!(MutationIntent::DecrementOne.desired_quantity(1), 0);
    assert_eq!(MutationIntent::DecrementOne.desired_quantity(0), 0);
  }

  #[test]
  fn empty_token_is_absent() {
    assert!(!has_token(None));
    assert!(!has_token(Some("")));
    assert!(has_token(Some("abc")));
  }

  #[test]
  fn rejections_are_warnings_with_distinct_messages() {
    let auth = Rejection::AuthenticationRequired;
    let dup = Rejection::DuplicateItem;
    assert_eq!(auth.severity(), Severity::Warning);
    assert_eq!(dup.severity(), Severity::Warning);
    assert_ne!(auth.message(), dup.message());
    assert_eq!(Decision::RejectedDuplicate.rejection(), Some(dup));
    assert_eq!(Decision::Permitted(CartRow::new("A", 1)).rejection(), None);
  }

  #[test]
  fn decision_ignores_catalog_snapshot() {
    let product = Product::new("A", "Apple", "Fruit", 1.0, 5, "a.png");
    let catalog = [product.clone()];
    let empty: [Product; 0] = [];
    let items = [CartLineItem::resolved(&CartRow::new("A", 1), &product)];
    for products in [&catalog[..], &empty[..]] {
      let request = MutationRequest {
        token: Some("t"),
        items: &items,
        products,
        product_id: "A",
        qty: 2,
        intent: MutationIntent::IncrementOne,
      };
      assert_eq!(evaluate(&request), Decision::Permitted(CartRow::new("A", 2)));
    }
  }
}
