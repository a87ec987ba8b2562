//! Catalog filter/sort engine.
//!
//! Derives the visible product list from the full catalog and the current
//! [`FilterCriteria`]. The source slice is never reordered: results are a new
//! vector of references, sorted with the standard library's stable sort so
//! ties keep their catalog order.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::types::Product;

/// Sort order for the catalog view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortOption {
    /// Keep catalog order.
    #[default]
    None,
    /// Cheapest first.
    PriceAsc,
    /// Most expensive first.
    PriceDesc,
    /// Best rated first; unrated products last.
    RatingDesc,
}

impl SortOption {
    /// Canonical name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::RatingDesc => "rating-desc",
        }
    }

    /// Human-readable label for selectors.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::None => "Sort by",
            Self::PriceAsc => "Price: Low to High",
            Self::PriceDesc => "Price: High to Low",
            Self::RatingDesc => "Rating: High to Low",
        }
    }

    fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            Self::None => Ordering::Equal,
            Self::PriceAsc => a.price.cmp(&b.price),
            Self::PriceDesc => b.price.cmp(&a.price),
            Self::RatingDesc => match (a.rating, b.rating) {
                (Some(a), Some(b)) => b.total_cmp(&a),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized sort option.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort option '{0}' (expected none, price-asc, price-desc or rating-desc)")]
pub struct ParseSortOptionError(String);

impl FromStr for SortOption {
    type Err = ParseSortOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "none" => Ok(Self::None),
            "price-asc" | "price-low-high" => Ok(Self::PriceAsc),
            "price-desc" | "price-high-low" => Ok(Self::PriceDesc),
            "rating-desc" | "rating-high-low" => Ok(Self::RatingDesc),
            other => Err(ParseSortOptionError(other.to_string())),
        }
    }
}

/// The three independent criteria that shape the visible catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against product titles.
    pub search: String,
    /// Exact category name; `None` matches every category.
    pub category: Option<String>,
    /// Result ordering.
    pub sort: SortOption,
}

impl FilterCriteria {
    /// Criteria that keep the whole catalog in its original order.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Set the search text.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Set the category. An empty name means "any category".
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.set_category(category);
        self
    }

    /// Set the sort order.
    #[must_use]
    pub const fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Set the category in place. An empty name clears it.
    pub fn set_category(&mut self, category: impl Into<String>) {
        let category = category.into();
        self.category = if category.is_empty() {
            None
        } else {
            Some(category)
        };
    }

    fn matches(&self, product: &Product, needle: &str) -> bool {
        let title_matches = needle.is_empty() || product.title.to_lowercase().contains(needle);
        let category_matches = self
            .category
            .as_deref()
            .is_none_or(|category| product.category.name == category);
        title_matches && category_matches
    }
}

/// Apply `criteria` to `products`.
///
/// Filters by title, then category, then sorts stably. With default criteria
/// this returns every product in its original order.
#[must_use]
pub fn apply<'a>(products: &'a [Product], criteria: &FilterCriteria) -> Vec<&'a Product> {
    let needle = criteria.search.to_lowercase();

    let mut visible: Vec<&Product> = products
        .iter()
        .filter(|product| criteria.matches(product, &needle))
        .collect();

    if criteria.sort != SortOption::None {
        // `sort_by` is stable: equal keys keep their filtered order.
        visible.sort_by(|a, b| criteria.sort.compare(a, b));
    }

    visible
}

/// Distinct category names in first-seen order.
#[must_use]
pub fn categories(products: &[Product]) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    for product in products {
        let name = product.category.name.as_str();
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use product_store_core::{Price, ProductId};

    use super::*;
    use crate::catalog::types::Category;

    fn product(id: i64, title: &str, price: u32, category: &str) -> Product {
        Product {
            id: ProductId::new(id),
            title: title.to_string(),
            price: Price::from(price),
            description: String::new(),
            images: vec![],
            category: Category::named(category),
            rating: None,
        }
    }

    fn rated(id: i64, rating: Option<f64>) -> Product {
        Product {
            rating,
            ..product(id, "Rated", 10, "Misc")
        }
    }

    fn ids(products: &[&Product]) -> Vec<i64> {
        products.iter().map(|p| p.id.as_i64()).collect()
    }

    #[test]
    fn test_default_criteria_is_identity() {
        let products = vec![
            product(3, "Lamp", 20, "Furniture"),
            product(1, "Chair", 80, "Furniture"),
            product(2, "Shirt", 15, "Clothes"),
        ];

        let visible = apply(&products, &FilterCriteria::all());
        assert_eq!(ids(&visible), vec![3, 1, 2]);
    }

    #[test]
    fn test_search_category_and_price_sort() {
        let products = vec![
            product(1, "Red Shoe", 50, "Shoes"),
            product(2, "Blue Shoe", 30, "Shoes"),
        ];
        let criteria = FilterCriteria::all()
            .with_search("shoe")
            .with_category("Shoes")
            .with_sort(SortOption::PriceAsc);

        let visible = apply(&products, &criteria);
        assert_eq!(ids(&visible), vec![2, 1]);
        assert_eq!(visible[0].price, Price::from(30));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let products = vec![
            product(1, "Classic RED Hoodie", 40, "Clothes"),
            product(2, "Blue Jeans", 60, "Clothes"),
        ];

        let visible = apply(&products, &FilterCriteria::all().with_search("red h"));
        assert_eq!(ids(&visible), vec![1]);
    }

    #[test]
    fn test_category_is_case_sensitive() {
        let products = vec![product(1, "Sneaker", 40, "Shoes")];

        let visible = apply(&products, &FilterCriteria::all().with_category("shoes"));
        assert!(visible.is_empty());
    }

    #[test]
    fn test_empty_category_matches_all() {
        let criteria = FilterCriteria::all().with_category("");
        assert_eq!(criteria.category, None);
    }

    #[test]
    fn test_price_desc_is_stable() {
        let products = vec![
            product(1, "A", 10, "X"),
            product(2, "B", 30, "X"),
            product(3, "C", 10, "X"),
            product(4, "D", 30, "X"),
        ];

        let visible = apply(&products, &FilterCriteria::all().with_sort(SortOption::PriceDesc));
        assert_eq!(ids(&visible), vec![2, 4, 1, 3]);

        let visible = apply(&products, &FilterCriteria::all().with_sort(SortOption::PriceAsc));
        assert_eq!(ids(&visible), vec![1, 3, 2, 4]);
    }

    #[test]
    fn test_rating_desc_puts_unrated_last() {
        let products = vec![
            rated(1, None),
            rated(2, Some(3.5)),
            rated(3, Some(4.8)),
            rated(4, None),
            rated(5, Some(3.5)),
        ];

        let visible = apply(&products, &FilterCriteria::all().with_sort(SortOption::RatingDesc));
        assert_eq!(ids(&visible), vec![3, 2, 5, 1, 4]);
    }

    #[test]
    fn test_apply_does_not_reorder_source() {
        let products = vec![product(1, "A", 30, "X"), product(2, "B", 10, "X")];
        let _ = apply(&products, &FilterCriteria::all().with_sort(SortOption::PriceAsc));
        assert_eq!(products[0].id, ProductId::new(1));
    }

    #[test]
    fn test_sort_option_parsing() {
        assert_eq!("".parse::<SortOption>().unwrap(), SortOption::None);
        assert_eq!("price-asc".parse::<SortOption>().unwrap(), SortOption::PriceAsc);
        assert_eq!(
            "price-high-low".parse::<SortOption>().unwrap(),
            SortOption::PriceDesc
        );
        assert_eq!(
            "rating-high-low".parse::<SortOption>().unwrap(),
            SortOption::RatingDesc
        );
        assert!("cheapest".parse::<SortOption>().is_err());
    }

    #[test]
    fn test_categories_first_seen_order() {
        let products = vec![
            product(1, "A", 1, "Shoes"),
            product(2, "B", 1, "Clothes"),
            product(3, "C", 1, "Shoes"),
        ];
        assert_eq!(categories(&products), vec!["Shoes", "Clothes"]);
    }
}
