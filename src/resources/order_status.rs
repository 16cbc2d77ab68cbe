//! Order status resource (`order_statuses/`).

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::clients::{ApiResponse, Context, HttpError, RestClient};

const ORDER_STATUSES_PATH: &str = "order_statuses/";

/// One of the store's fixed order statuses.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct OrderStatus {
    pub id: u32,
    pub name: String,
    /// Display position.
    pub order: u32,
}

/// Paging for [`OrderStatusService::list`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OrderStatusListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Operations on `order_statuses/`.
#[derive(Debug, Clone)]
pub struct OrderStatusService {
    client: Arc<RestClient>,
}

impl OrderStatusService {
    #[must_use]
    pub const fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }

    /// Lists the order statuses.
    ///
    /// # Errors
    ///
    /// See [`RestClient::send`].
    pub async fn list(
        &self,
        ctx: &Context,
        params: &OrderStatusListParams,
    ) -> Result<ApiResponse<Vec<OrderStatus>>, HttpError> {
        self.client.get(ctx, ORDER_STATUSES_PATH, params).await
    }

    /// Fetches one order status.
    ///
    /// # Errors
    ///
    /// See [`RestClient::send`].
    pub async fn show(
        &self,
        ctx: &Context,
        id: u32,
    ) -> Result<ApiResponse<OrderStatus>, HttpError> {
        let path = format!("{ORDER_STATUSES_PATH}{id}");
        self.client.get(ctx, &path, &()).await
    }
}
