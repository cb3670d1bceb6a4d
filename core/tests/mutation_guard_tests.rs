// tests/mutation_guard_tests.rs
mod common;

use common::*;
use storefront_cart::{evaluate, CartRow, Decision, MutationIntent, MutationRequest, Rejection};

fn request<'a>(
  token: Option<&'a str>,
  items: &'a [storefront_cart::CartLineItem],
  products: &'a [storefront_cart::Product],
  product_id: &'a str,
  qty: u32,
  intent: MutationIntent,
) -> MutationRequest<'a> {
  MutationRequest {
    token,
    items,
    products,
    product_id,
    qty,
    intent,
  }
}

#[test]
fn test_no_token_rejects_regardless_of_other_inputs() {
  setup_tracing();
  let catalog = sample_catalog();
  let items = hydrated(&[CartRow::new("A", 2)], &catalog);
  let intents = [
    MutationIntent::AddToCart,
    MutationIntent::IncrementOne,
    MutationIntent::DecrementOne,
  ];

  for intent in intents {
    for product_id in ["A", "C", "unknown"] {
      for token in [None, Some("")] {
        let decision = evaluate(&request(token, &items, &catalog, product_id, 1, intent));
        assert_eq!(decision, Decision::RejectedNoAuth);
        assert_eq!(decision.rejection(), Some(Rejection::AuthenticationRequired));
      }
    }
  }
}

#[test]
fn test_duplicate_add_is_rejected() {
  setup_tracing();
  let catalog = sample_catalog();
  let items = hydrated(&[CartRow::new("A", 2), CartRow::new("B", 1)], &catalog);

  let decision = evaluate(&request(Some(TEST_TOKEN), &items, &catalog, "A", 1, MutationIntent::AddToCart));

  assert_eq!(decision, Decision::RejectedDuplicate);
  assert_eq!(decision.rejection(), Some(Rejection::DuplicateItem));
}

#[test]
fn test_first_add_of_new_product_is_permitted() {
  setup_tracing();
  let catalog = sample_catalog();
  let items = hydrated(&[CartRow::new("A", 2), CartRow::new("B", 1)], &catalog);

  let decision = evaluate(&request(Some(TEST_TOKEN), &items, &catalog, "C", 1, MutationIntent::AddToCart));

  assert_eq!(decision, Decision::Permitted(CartRow::new("C", 1)));
}

#[test]
fn test_decrement_to_zero_is_permitted_removal() {
  setup_tracing();
  let catalog = sample_catalog();
  let items = hydrated(&[CartRow::new("A", 1)], &catalog);

  let decision = evaluate(&request(Some(TEST_TOKEN), &items, &catalog, "A", 0, MutationIntent::DecrementOne));

  match decision {
    Decision::Permitted(row) => {
      assert_eq!(row.product_id, "A");
      assert!(row.is_removal());
    }
    other => panic!("Expected Permitted, got {:?}", other),
  }
}

#[test]
fn test_increment_existing_item_is_permitted() {
  setup_tracing();
  let catalog = sample_catalog();
  let items = hydrated(&[CartRow::new("A", 2)], &catalog);
  let desired = MutationIntent::IncrementOne.desired_quantity(items[0].qty);

  let decision = evaluate(&request(Some(TEST_TOKEN), &items, &catalog, "A", desired, MutationIntent::IncrementOne));

  assert_eq!(decision, Decision::Permitted(CartRow::new("A", 3)));
}

#[test]
fn test_rejection_reasons_are_distinguishable() {
  setup_tracing();
  assert_ne!(Rejection::AuthenticationRequired, Rejection::DuplicateItem);
  assert_eq!(Rejection::AuthenticationRequired.to_string(), "Login to add an item to the Cart");
  assert_eq!(
    Rejection::DuplicateItem.to_string(),
    "Item already in cart. Use the cart sidebar to update quantity or remove item."
  );
}
