// storefront_cart/src/model/product.rs

use serde::{Deserialize, Serialize};

/// Fixed-point money unit used for totals: one millionth of a major unit.
pub const MICROS_PER_UNIT: f64 = 1_000_000.0;

/// A catalog entry as served by `GET /products`.
///
/// The backend owns these records; the storefront only keeps a read-only
/// snapshot per page load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
  #[serde(rename = "_id")]
  pub id: String,
  pub name: String,
  pub category: String,
  /// Price in major currency units. Never negative.
  pub cost: f64,
  /// Aggregate rating, 0 to 5.
  pub rating: u8,
  pub image: String,
}

impl Product {
  pub fn new(
    id: impl Into<String>,
    name: impl Into<String>,
    category: impl Into<String>,
    cost: f64,
    rating: u8,
    image: impl Into<String>,
  ) -> Self {
    Self {
      id: id.into(),
      name: name.into(),
      category: category.into(),
      cost,
      rating,
      image: image.into(),
    }
  }

  /// Value of `qty` units in micro-units, rounded once for the whole line.
  ///
  /// Totals are accumulated in this form so that summation order can't
  /// change the result. Negative or non-finite costs count as 0.
  pub fn line_micros(&self, qty: u32) -> u64 {
    if self.cost.is_finite() && self.cost > 0.0 {
      (self.cost * f64::from(qty) * MICROS_PER_UNIT).round() as u64
    } else {
      0
    }
  }
}
