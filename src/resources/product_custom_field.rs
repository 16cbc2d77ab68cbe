//! Custom fields of a product (`products/{product_id}/custom_fields`).

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::clients::{ApiResponse, Context, HttpError, RestClient};
use crate::resources::common::Count;

/// A name/text pair shown on the product page.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ProductCustomField {
    pub id: u64,
    pub product_id: u64,
    pub name: String,
    pub text: String,
}

/// Paging for [`ProductCustomFieldService::list`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductCustomFieldListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Operations on the custom fields of one product.
#[derive(Debug, Clone)]
pub struct ProductCustomFieldService {
    client: Arc<RestClient>,
}

impl ProductCustomFieldService {
    #[must_use]
    pub const fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }

    /// Lists the custom fields of `product_id`.
    ///
    /// # Errors
    ///
    /// See [`RestClient::send`].
    pub async fn list(
        &self,
        ctx: &Context,
        product_id: u64,
        params: &ProductCustomFieldListParams,
    ) -> Result<ApiResponse<Vec<ProductCustomField>>, HttpError> {
        self.client.get(ctx, &service_path(product_id), params).await
    }

    /// Counts the custom fields of `product_id`.
    ///
    /// # Errors
    ///
    /// See [`RestClient::send`].
    pub async fn count(
        &self,
        ctx: &Context,
        product_id: u64,
    ) -> Result<ApiResponse<u64>, HttpError> {
        let path = format!("{}/count", service_path(product_id));
        let response: ApiResponse<Count> = self.client.get(ctx, &path, &()).await?;
        Ok(response.map(|c| c.count))
    }

    /// Fetches one custom field of `product_id`.
    ///
    /// # Errors
    ///
    /// See [`RestClient::send`].
    pub async fn show(
        &self,
        ctx: &Context,
        product_id: u64,
        id: u64,
    ) -> Result<ApiResponse<ProductCustomField>, HttpError> {
        let path = format!("{}/{id}", service_path(product_id));
        self.client.get(ctx, &path, &()).await
    }
}

fn service_path(product_id: u64) -> String {
    format!("products/{product_id}/custom_fields")
}
