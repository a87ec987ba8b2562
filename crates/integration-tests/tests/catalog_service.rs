//! Integration tests against the live catalog service.
//!
//! These tests require network access to the catalog service
//! (`STORE_API_URL`, default <https://api.escuelajs.co/api/v1>).
//!
//! Run with: cargo test -p product-store-integration-tests -- --ignored

#![allow(clippy::unwrap_used)]

use product_store::catalog::{CatalogClient, CatalogError, FilterCriteria, SortOption, apply};
use product_store::config::StoreConfig;
use product_store::views::{CatalogViewModel, LoadState, ProductDetailViewModel};
use product_store_core::ProductId;

fn client() -> CatalogClient {
    let config = StoreConfig::from_env().unwrap();
    CatalogClient::new(&config.catalog).unwrap()
}

#[tokio::test]
#[ignore = "Requires network access to the catalog service"]
async fn test_fetch_products() {
    let products = client().get_products().await.unwrap();

    assert!(!products.is_empty());
    for product in &products {
        assert!(product.validate().is_ok());
        for image in &product.images {
            assert!(!image.starts_with('['));
            assert!(!image.ends_with(']'));
            assert!(!image.starts_with('"'));
        }
    }
}

#[tokio::test]
#[ignore = "Requires network access to the catalog service"]
async fn test_sorted_by_price() {
    let products = client().get_products().await.unwrap();
    let criteria = FilterCriteria::all().with_sort(SortOption::PriceAsc);

    let sorted = apply(&products, &criteria);
    assert_eq!(sorted.len(), products.len());
    assert!(sorted.windows(2).all(|pair| match pair {
        [a, b] => a.price <= b.price,
        _ => true,
    }));
}

#[tokio::test]
#[ignore = "Requires network access to the catalog service"]
async fn test_product_detail_roundtrip() {
    let client = client();
    let products = client.get_products().await.unwrap();
    let first = products.first().unwrap();

    let mut model = ProductDetailViewModel::new(first.id);
    model.load(&client).await;
    assert_eq!(model.product().map(|p| p.id), Some(first.id));
}

#[tokio::test]
#[ignore = "Requires network access to the catalog service"]
async fn test_unknown_product() {
    let result = client().get_product(ProductId::new(i64::MAX)).await;
    assert!(matches!(
        result,
        Err(CatalogError::NotFound(_) | CatalogError::Status { .. })
    ));
}

#[tokio::test]
#[ignore = "Requires network access to the catalog service"]
async fn test_catalog_view_loads() {
    let mut model = CatalogViewModel::new();
    model.load(&client()).await;

    assert!(matches!(model.state(), LoadState::Loaded(_)));
    assert!(!model.categories().is_empty());
}
