// demos/storefront_app/src/services/catalog_seed.rs

use anyhow::Context;
use std::path::Path;
use storefront_cart::Product;
use tracing::info;

/// Reads a `GET /products` shaped JSON array.
pub fn load_catalog(path: &Path) -> anyhow::Result<Vec<Product>> {
  let raw = std::fs::read_to_string(path).with_context(|| format!("reading seed catalog {}", path.display()))?;
  let products: Vec<Product> =
    serde_json::from_str(&raw).with_context(|| format!("parsing seed catalog {}", path.display()))?;
  info!(count = products.len(), path = %path.display(), "Seed catalog loaded.");
  Ok(products)
}

pub fn default_catalog() -> Vec<Product> {
  vec![
    Product::new("v4sLtEcMpzabRyfx", "iPhone XR", "Phones", 100.0, 4, "https://i.imgur.com/lulqWzW.jpg"),
    Product::new("upLK9JbQ4rMhTwt4", "Basketball", "Sports", 100.0, 5, "https://i.imgur.com/lulqWzW.jpg"),
    Product::new(
      "KCRwjF7lN97HnEaY",
      "Tan Leatherette Weekender Duffle",
      "Fashion",
      150.0,
      4,
      "https://crio-directus-assets.s3.ap-south-1.amazonaws.com/ff071a1c-1099-48f9-9b03-f858ccc53832.png",
    ),
    Product::new(
      "BW0jAAeDJmlZCF8i",
      "Atomberg Ceiling Fan",
      "Home & Kitchen",
      78.0,
      3,
      "https://crio-directus-assets.s3.ap-south-1.amazonaws.com/64b930f7-3c82-4a29-a433-dbc6f1493578.png",
    ),
    Product::new(
      "a4sw4Nc1rXqpnGvt",
      "Stylecon 9 Seater RHS Sofa Set",
      "Home & Kitchen",
      650.0,
      5,
      "https://crio-directus-assets.s3.ap-south-1.amazonaws.com/e2f3fb2a-0d76-4e1a-8aac-8c2da4f7be3c.png",
    ),
  ]
}
