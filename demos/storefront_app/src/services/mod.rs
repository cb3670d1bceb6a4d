// demos/storefront_app/src/services/mod.rs

//! Stand-ins for the remote storefront backend.

pub mod auth_service;
pub mod catalog_seed;
pub mod mock_backend;

pub use mock_backend::MockBackend;
