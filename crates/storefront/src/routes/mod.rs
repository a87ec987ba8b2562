//! View routes.
//!
//! # Route Structure
//!
//! ```text
//! /                - Catalog (product list with search, category and sort)
//! /product/{id}    - Product detail
//! /cart            - Cart
//! ```
//!
//! Rendering is up to the front end; this module only maps paths to views
//! and defines the navigation capability view models use.

use std::fmt;
use std::str::FromStr;

use product_store_core::ProductId;
use thiserror::Error;

/// A view the shopper can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Product list.
    Catalog,
    /// A single product's details.
    ProductDetail(ProductId),
    /// The cart.
    Cart,
}

impl Route {
    /// Path for this route.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Catalog => "/".to_string(),
            Self::ProductDetail(id) => format!("/product/{id}"),
            Self::Cart => "/cart".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Path that matches no route.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no route matches path '{0}'")]
pub struct UnknownRoute(pub String);

impl FromStr for Route {
    type Err = UnknownRoute;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let trimmed = path.trim().trim_end_matches('/');
        let segments: Vec<&str> = trimmed
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Ok(Self::Catalog),
            ["cart"] => Ok(Self::Cart),
            ["product", id] => id
                .parse::<ProductId>()
                .map(Self::ProductDetail)
                .map_err(|_| UnknownRoute(path.to_string())),
            _ => Err(UnknownRoute(path.to_string())),
        }
    }
}

/// Opaque navigation capability handed to view models.
pub trait Navigator {
    /// Switch to the view for `route`.
    fn navigate(&self, route: Route);
}
