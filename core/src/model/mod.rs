// storefront_cart/src/model/mod.rs

//! Plain data records exchanged with the backend and handed to renderers.

pub mod cart_row;
pub mod line_item;
pub mod product;

pub use cart_row::CartRow;
pub use line_item::CartLineItem;
pub use product::{Product, MICROS_PER_UNIT};
