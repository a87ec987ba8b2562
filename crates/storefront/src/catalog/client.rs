//! Catalog service client implementation.
//!
//! Plain JSON over HTTP with `reqwest`. Caches the product list and
//! individual products using `moka`.

use std::sync::Arc;

use moka::future::Cache;
use product_store_core::ProductId;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use super::cache::{CacheKey, CacheValue};
use super::types::Product;
use super::{CatalogError, CatalogSource};
use crate::config::CatalogConfig;

/// Longest response body excerpt kept in an error.
const ERROR_BODY_CHARS: usize = 200;
/// Longest response body excerpt written to the log.
const LOG_BODY_CHARS: usize = 500;

// =============================================================================
// CatalogClient
// =============================================================================

/// Client for the remote catalog service.
///
/// Cheap to clone; clones share the HTTP connection pool and cache.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    config: CatalogConfig,
    cache: Cache<CacheKey, CacheValue>,
}

impl CatalogClient {
    /// Create a new catalog client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(config.cache_ttl)
            .build();

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            inner: Arc::new(CatalogClientInner {
                client,
                config: config.clone(),
                cache,
            }),
        })
    }

    /// Execute a GET request and decode the JSON body.
    ///
    /// A `404` is reported as [`CatalogError::NotFound`] when `id` is given.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        id: Option<ProductId>,
    ) -> Result<T, CatalogError> {
        let response = self
            .inner
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();

        // Check for rate limiting
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(1);
            return Err(CatalogError::RateLimited(retry_after));
        }

        if status == reqwest::StatusCode::NOT_FOUND
            && let Some(id) = id
        {
            return Err(CatalogError::NotFound(id));
        }

        // Get response body as text first for better error diagnostics
        let response_text = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %excerpt(&response_text, LOG_BODY_CHARS),
                "Catalog service returned non-success status"
            );
            return Err(CatalogError::Status {
                status: status.as_u16(),
                body: excerpt(&response_text, ERROR_BODY_CHARS),
            });
        }

        serde_json::from_str(&response_text).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %excerpt(&response_text, LOG_BODY_CHARS),
                "Failed to parse catalog response"
            );
            CatalogError::Parse(e)
        })
    }

    // =========================================================================
    // Product Methods
    // =========================================================================

    /// Get the full product list.
    ///
    /// Image URLs are sanitized and products that fail validation are
    /// dropped with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the body is not a product list.
    #[instrument(skip(self))]
    pub async fn get_products(&self) -> Result<Vec<Product>, CatalogError> {
        if let Some(CacheValue::Products(products)) =
            self.inner.cache.get(&CacheKey::Products).await
        {
            debug!("Cache hit for products");
            return Ok(products);
        }

        let raw: Vec<Product> = self
            .get_json(&self.inner.config.products_url(), None)
            .await?;

        let products: Vec<Product> = raw
            .into_iter()
            .filter_map(|product| match product.validate() {
                Ok(()) => Some(product.with_sanitized_images()),
                Err(e) => {
                    tracing::warn!(error = %e, "Dropping invalid product from catalog");
                    None
                }
            })
            .collect();

        debug!(count = products.len(), "Fetched products");

        self.inner
            .cache
            .insert(CacheKey::Products, CacheValue::Products(products.clone()))
            .await;

        Ok(products)
    }

    /// Get a single product by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not found, is invalid, or the API
    /// request fails.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        let cache_key = CacheKey::Product(id);

        // Check cache
        if let Some(CacheValue::Product(product)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for product");
            return Ok(*product);
        }

        let product: Product = self
            .get_json(&self.inner.config.product_url(id), Some(id))
            .await?;
        product.validate()?;
        let product = product.with_sanitized_images();

        // Cache the result
        self.inner
            .cache
            .insert(cache_key, CacheValue::Product(Box::new(product.clone())))
            .await;

        Ok(product)
    }

    /// Drop every cached response.
    pub fn invalidate_cache(&self) {
        self.inner.cache.invalidate_all();
    }
}

impl CatalogSource for CatalogClient {
    async fn products(&self) -> Result<Vec<Product>, CatalogError> {
        self.get_products().await
    }

    async fn product(&self, id: ProductId) -> Result<Product, CatalogError> {
        self.get_product(id).await
    }
}

fn excerpt(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use axum::extract::{Path, State};
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::{Value, json};

    use super::*;

    #[derive(Clone, Default)]
    struct Hits(Arc<AtomicUsize>);

    fn catalog_json() -> Value {
        json!([
            {
                "id": 1,
                "title": "Red Shoe",
                "price": 50,
                "description": "A red shoe",
                "images": ["[\"https://img.example.com/red.jpeg\"]"],
                "category": { "id": 4, "name": "Shoes" }
            },
            {
                "id": 2,
                "title": "Broken",
                "price": -3,
                "description": "",
                "images": [],
                "category": { "id": 4, "name": "Shoes" }
            }
        ])
    }

    async fn list(State(hits): State<Hits>) -> Json<Value> {
        hits.0.fetch_add(1, Ordering::SeqCst);
        Json(catalog_json())
    }

    async fn detail(Path(id): Path<i64>) -> axum::response::Response {
        match id {
            1 => Json(catalog_json()[0].clone()).into_response(),
            2 => Json(catalog_json()[1].clone()).into_response(),
            3 => (StatusCode::TOO_MANY_REQUESTS, [("Retry-After", "7")]).into_response(),
            4 => (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").into_response(),
            5 => "not json".into_response(),
            _ => StatusCode::NOT_FOUND.into_response(),
        }
    }

    /// Serve a fake catalog on an ephemeral port.
    async fn spawn_catalog() -> (CatalogClient, Hits) {
        let hits = Hits::default();
        let app = Router::new()
            .route("/api/v1/products", get(list))
            .route("/api/v1/products/{id}", get(detail))
            .with_state(hits.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let config = CatalogConfig::new(&format!("http://{addr}/api/v1")).unwrap();
        (CatalogClient::new(&config).unwrap(), hits)
    }

    #[tokio::test]
    async fn test_get_products_sanitizes_and_drops_invalid() {
        let (client, _) = spawn_catalog().await;

        let products = client.get_products().await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(
            products[0].primary_image(),
            Some("https://img.example.com/red.jpeg")
        );
    }

    #[tokio::test]
    async fn test_get_products_is_cached() {
        let (client, hits) = spawn_catalog().await;

        client.get_products().await.unwrap();
        client.get_products().await.unwrap();
        assert_eq!(hits.0.load(Ordering::SeqCst), 1);

        client.invalidate_cache();
        client.get_products().await.unwrap();
        assert_eq!(hits.0.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_get_product() {
        let (client, _) = spawn_catalog().await;

        let product = client.get_product(ProductId::new(1)).await.unwrap();
        assert_eq!(product.title, "Red Shoe");
    }

    #[tokio::test]
    async fn test_get_product_not_found() {
        let (client, _) = spawn_catalog().await;

        let err = client.get_product(ProductId::new(99)).await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(id) if id == ProductId::new(99)));
    }

    #[tokio::test]
    async fn test_get_product_invalid() {
        let (client, _) = spawn_catalog().await;

        let err = client.get_product(ProductId::new(2)).await.unwrap_err();
        assert!(matches!(err, CatalogError::Invalid(_)));
    }

    #[tokio::test]
    async fn test_rate_limited() {
        let (client, _) = spawn_catalog().await;

        let err = client.get_product(ProductId::new(3)).await.unwrap_err();
        assert!(matches!(err, CatalogError::RateLimited(7)));
    }

    #[tokio::test]
    async fn test_server_error_status() {
        let (client, _) = spawn_catalog().await;

        let err = client.get_product(ProductId::new(4)).await.unwrap_err();
        match err {
            CatalogError::Status { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "upstream exploded");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_unparseable_body() {
        let (client, _) = spawn_catalog().await;

        let err = client.get_product(ProductId::new(5)).await.unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_excerpt_counts_chars() {
        assert_eq!(excerpt("héllo", 2), "hé");
    }
}
