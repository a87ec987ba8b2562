//! Command implementations.
//!
//! Each command returns the text to print; `main` owns stdout.

pub mod cart;
pub mod catalog;
pub mod open;
