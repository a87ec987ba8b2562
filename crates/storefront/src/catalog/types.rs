//! Domain types for the remote catalog service.

use product_store_core::{CategoryId, Price, ProductId};
use serde::{Deserialize, Serialize};

use crate::filters::sanitize_image_url;

/// Product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category ID, when the service reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CategoryId>,
    /// Display name (e.g., "Shoes"). Category filtering matches on this.
    pub name: String,
}

impl Category {
    /// Create a category with only a name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }
}

/// A product as served by the catalog.
///
/// Fields the service sends beyond these are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product ID (unique within the catalog).
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Unit price.
    pub price: Price,
    /// Long-form description.
    #[serde(default)]
    pub description: String,
    /// Image URLs, in display order.
    #[serde(default)]
    pub images: Vec<String>,
    /// Category the product belongs to.
    pub category: Category,
    /// Average rating, when available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

impl Product {
    /// The first image, used as the card / thumbnail image.
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Strip stray brackets and quotes from every image URL.
    #[must_use]
    pub fn with_sanitized_images(mut self) -> Self {
        self.images = self
            .images
            .iter()
            .map(|image| sanitize_image_url(image).to_string())
            .collect();
        self
    }

    /// Check the product against the invariants the cart relies on.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidProduct`] describing the first violated rule.
    pub fn validate(&self) -> Result<(), InvalidProduct> {
        if !self.price.is_valid() {
            return Err(InvalidProduct {
                id: self.id,
                reason: format!("negative price {}", self.price.amount()),
            });
        }
        if self.title.trim().is_empty() {
            return Err(InvalidProduct {
                id: self.id,
                reason: "empty title".to_string(),
            });
        }
        if let Some(rating) = self.rating
            && !rating.is_finite()
        {
            return Err(InvalidProduct {
                id: self.id,
                reason: format!("non-finite rating {rating}"),
            });
        }
        Ok(())
    }
}

/// A product that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid product {id}: {reason}")]
pub struct InvalidProduct {
    /// The offending product.
    pub id: ProductId,
    /// What was wrong with it.
    pub reason: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_service_payload() {
        // Shape returned by the upstream service, including fields we ignore.
        let json = r#"{
            "id": 4,
            "title": "Handmade Fresh Table",
            "slug": "handmade-fresh-table",
            "price": 687,
            "description": "Andy shoes are designed to keeping in...",
            "category": {
                "id": 5,
                "name": "Others",
                "image": "https://placehold.co/600x400",
                "slug": "others"
            },
            "images": ["[\"https://placehold.co/600x400\"]"],
            "creationAt": "2023-01-03T15:58:58.000Z"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new(4));
        assert_eq!(product.price, Price::from(687));
        assert_eq!(product.category.name, "Others");
        assert_eq!(product.category.id, Some(CategoryId::new(5)));
        assert_eq!(product.rating, None);

        let product = product.with_sanitized_images();
        assert_eq!(product.primary_image(), Some("https://placehold.co/600x400"));
    }

    #[test]
    fn test_validate_rejects_negative_price() {
        let json = r#"{"id":1,"title":"Bad","price":-5,"category":{"name":"X"}}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        let err = product.validate().unwrap_err();
        assert_eq!(err.id, ProductId::new(1));
    }

    #[test]
    fn test_validate_rejects_blank_title() {
        let json = r#"{"id":2,"title":"   ","price":5,"category":{"name":"X"}}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        let err = product.validate().unwrap_err();
        assert_eq!(err.reason, "empty title");
    }

    #[test]
    fn test_validate_rejects_non_finite_rating() {
        let json = r#"{"id":3,"title":"Lamp","price":5,"category":{"name":"X"},"rating":4.5}"#;
        let mut product: Product = serde_json::from_str(json).unwrap();
        assert!(product.validate().is_ok());

        product.rating = Some(f64::NAN);
        assert!(product.validate().is_err());
        product.rating = Some(f64::INFINITY);
        assert!(product.validate().is_err());
    }

    #[test]
    fn test_primary_image_empty() {
        let json = r#"{"id":1,"title":"No images","price":5,"category":{"name":"X"}}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.primary_image().is_none());
    }
}
