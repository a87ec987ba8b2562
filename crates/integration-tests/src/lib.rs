//! Integration tests for the product store.
//!
//! # Running Tests
//!
//! ```bash
//! # Offline tests (cart persistence, filtering)
//! cargo test -p product-store-integration-tests
//!
//! # Include tests against the live catalog service
//! cargo test -p product-store-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - Cart store over file storage, across store instances
//! - `catalog_service` - Catalog client against the live service (ignored by default)
//!
//! Set `STORE_API_URL` to point the live tests at another catalog service.

#![cfg_attr(not(test), forbid(unsafe_code))]
