// src/lib.rs

//! storefront_cart: cart reconciliation, pricing and mutation gating for a
//! storefront that keeps its cart on a remote REST backend.
//!
//! The core is three pure units:
//!  - Catalog join: `(productId, qty)` rows + catalog -> hydrated line items.
//!  - Pricing: total value, total quantity, checkout summary.
//!  - Mutation guard: may this add/update/remove be sent at all?
//!
//! Around them sit the collaborators a storefront needs to drive the core:
//! a `StorefrontBackend` trait for the REST calls, credential checks, a
//! session record, a search debouncer and the `Storefront` controller.

pub mod backend;
pub mod catalog;
pub mod config;
pub mod credentials;
pub mod debounce;
pub mod error;
pub mod guard;
pub mod model;
pub mod pricing;
pub mod session;
pub mod state;
pub mod storefront;

// --- Re-exports for the Public API ---

pub use crate::model::{CartLineItem, CartRow, Product, MICROS_PER_UNIT};

pub use crate::catalog::{generate_cart_items, is_item_in_cart, CatalogIndex};
pub use crate::pricing::{total_items, total_value, try_total_value, CheckoutSummary};
pub use crate::guard::{evaluate, Decision, MutationIntent, MutationRequest, Rejection, Severity};

pub use crate::backend::{LoginResponse, StorefrontBackend};
pub use crate::config::StorefrontConfig;
pub use crate::credentials::{validate_login, validate_registration, CredentialError};
pub use crate::debounce::Debouncer;
pub use crate::session::Session;
pub use crate::state::{SharedState, StoreSnapshot};
pub use crate::storefront::{MutationOutcome, Storefront};

pub use crate::error::{BackendError, CartError, CartResult};

/*
    Typical flow:
    1. Build a `Storefront` over your `StorefrontBackend` implementation.
    2. `load_products()` once per page load, `login()` then `fetch_cart()`.
    3. Route every button press through `add_to_cart()` / `increment()` /
       `decrement()`; a `MutationOutcome::Rejected` carries the warning to show.
    4. Render `line_items()` and `checkout_summary()`.
*/
