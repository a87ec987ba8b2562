//! View models for the catalog, product detail and cart views.
//!
//! Each model owns the transient UI state of one view and derives what to
//! render from it. They fetch through [`CatalogSource`](crate::catalog::CatalogSource)
//! and mutate the cart only through [`CartStore`](crate::cart::CartStore).

pub mod catalog;
pub mod detail;

pub use catalog::{CatalogViewModel, ProductCard};
pub use detail::{ProductDetailViewModel, Size};

/// Progress of a view's one-shot fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState<T> {
    /// Fetch not finished yet.
    #[default]
    Loading,
    /// Data arrived.
    Loaded(T),
    /// The fetch failed; the error was logged and there is no data to show.
    Unavailable,
}

impl<T> LoadState<T> {
    /// Whether the fetch is still outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The loaded data, if any.
    #[must_use]
    pub const fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            Self::Loading | Self::Unavailable => None,
        }
    }
}
