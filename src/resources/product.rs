//! Product resource (`products/`).
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::resources::ProductListParams;
//!
//! let params = ProductListParams {
//!     is_visible: Some(true),
//!     min_inventory_level: Some(0),
//!     ..Default::default()
//! };
//! let products = client.products.list(&ctx, &params).await?;
//! let total = client.products.count(&ctx, &params).await?;
//! println!("{} of {} products", products.len(), *total);
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::clients::{ApiResponse, Context, HttpError, RestClient};
use crate::resources::common::Count;

const PRODUCTS_PATH: &str = "products/";

/// A catalog product.
///
/// Prices are kept as the decimal strings the API sends.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub sku: String,
    pub description: String,
    pub price: String,
    pub cost_price: String,
    pub retail_price: String,
    pub inventory_level: i64,
    pub total_sold: u64,

    /// `available`, `disabled` or `preorder`.
    pub availability: String,

    pub primary_image: PrimaryImage,
}

/// URLs of the product's main image in each rendered size.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PrimaryImage {
    pub standard_url: String,
    pub tiny_url: String,
    pub thumbnail_url: String,
    pub zoom_url: String,
}

/// Filters for [`ProductService::list`] and [`ProductService::count`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_visible: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_inventory_level: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_inventory_level: Option<i64>,
}

/// Operations on `products/`.
#[derive(Debug, Clone)]
pub struct ProductService {
    client: Arc<RestClient>,
}

impl ProductService {
    #[must_use]
    pub const fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }

    /// Lists products matching `params`.
    ///
    /// # Errors
    ///
    /// See [`RestClient::send`].
    pub async fn list(
        &self,
        ctx: &Context,
        params: &ProductListParams,
    ) -> Result<ApiResponse<Vec<Product>>, HttpError> {
        self.client.get(ctx, PRODUCTS_PATH, params).await
    }

    /// Counts products matching `params`.
    ///
    /// # Errors
    ///
    /// See [`RestClient::send`].
    pub async fn count(
        &self,
        ctx: &Context,
        params: &ProductListParams,
    ) -> Result<ApiResponse<u64>, HttpError> {
        let path = format!("{PRODUCTS_PATH}count");
        let response: ApiResponse<Count> = self.client.get(ctx, &path, params).await?;
        Ok(response.map(|c| c.count))
    }

    /// Fetches one product.
    ///
    /// # Errors
    ///
    /// See [`RestClient::send`].
    pub async fn show(&self, ctx: &Context, id: u64) -> Result<ApiResponse<Product>, HttpError> {
        let path = format!("{PRODUCTS_PATH}{id}");
        self.client.get(ctx, &path, &()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::encode_query;

    #[test]
    fn test_product_deserialization() {
        let json = r#"{
            "id": 32,
            "name": "[Sample] Tomorrow is today, Red printed scarf",
            "sku": "",
            "price": "89.0000",
            "inventory_level": 0,
            "availability": "available",
            "primary_image": {
                "id": 247,
                "zoom_url": "https://cdn.example.com/zoom.jpg",
                "thumbnail_url": "https://cdn.example.com/thumb.jpg",
                "standard_url": "https://cdn.example.com/std.jpg",
                "tiny_url": "https://cdn.example.com/tiny.jpg"
            }
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.id, 32);
        assert_eq!(product.price, "89.0000");
        assert_eq!(product.primary_image.tiny_url, "https://cdn.example.com/tiny.jpg");
        assert!(product.description.is_empty());
    }

    #[test]
    fn test_list_params_query() {
        let params = ProductListParams {
            name: Some("Red scarf".to_string()),
            is_visible: Some(true),
            min_inventory_level: Some(0),
            ..Default::default()
        };
        assert_eq!(
            encode_query(&params).unwrap(),
            "is_visible=true&min_inventory_level=0&name=Red%20scarf"
        );
    }
}
