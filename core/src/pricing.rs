// storefront_cart/src/pricing.rs

//! Totals over hydrated line items.
//!
//! Each line is rounded once to integer micro-units, lines are summed as
//! integers and converted back to major units at the end, so permuting the
//! items never changes a total.

use crate::error::{CartError, CartResult};
use crate::model::{CartLineItem, MICROS_PER_UNIT};
use serde::Serialize;
use tracing::warn;

/// Shipping is free in this storefront.
pub const SHIPPING_CHARGE: f64 = 0.0;

fn micros_to_major(micros: u64) -> f64 {
  micros as f64 / MICROS_PER_UNIT
}

/// Sum of `cost * qty` over all items, in micro-units.
///
/// Unresolved items (no product, hence no cost) contribute nothing.
pub fn total_value_micros(items: &[CartLineItem]) -> u64 {
  items.iter().fold(0u64, |acc, item| match item.line_micros() {
    Some(micros) => acc.saturating_add(micros),
    None => {
      warn!(product_id = %item.product_id, "Pricing line item without a cost; counting it as 0.");
      acc
    }
  })
}

/// Total value of all products in the cart.
pub fn total_value(items: &[CartLineItem]) -> f64 {
  micros_to_major(total_value_micros(items))
}

/// Total value, refusing to price a cart that contains unresolved items.
pub fn try_total_value(items: &[CartLineItem]) -> CartResult<f64> {
  let mut micros = 0u64;
  for item in items {
    let line = item.line_micros().ok_or_else(|| CartError::MissingCost {
      product_id: item.product_id.clone(),
    })?;
    micros = micros.saturating_add(line);
  }
  Ok(micros_to_major(micros))
}

/// Sum of quantities of all products in the cart.
pub fn total_items(items: &[CartLineItem]) -> u64 {
  items.iter().map(|item| u64::from(item.qty)).sum()
}

/// The figures shown in the checkout "Order Details" panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CheckoutSummary {
  pub products: u64,
  pub subtotal: f64,
  pub shipping: f64,
  pub total: f64,
}

impl CheckoutSummary {
  pub fn from_items(items: &[CartLineItem]) -> Self {
    let subtotal = total_value(items);
    Self {
      products: total_items(items),
      subtotal,
      shipping: SHIPPING_CHARGE,
      total: subtotal + SHIPPING_CHARGE,
    }
  }
}
