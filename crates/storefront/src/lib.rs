//! Product store library.
//!
//! This crate provides the storefront functionality as a library: a client
//! for the remote catalog, the filter and sort engine behind the product
//! list, and a cart persisted to local key-value storage. Front ends drive
//! it through the view models in [`views`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filters;
pub mod routes;
pub mod state;
pub mod views;

pub use error::{AppError, Result};
pub use state::AppState;
