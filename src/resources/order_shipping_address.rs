//! Shipping addresses of an order (`orders/{order_id}/shipping_addresses/`).

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::clients::{ApiResponse, Context, HttpError, RestClient};
use crate::resources::common::{Address, Count};

/// A shipping destination attached to an order.
///
/// The address fields are flattened into the same JSON object as the ids.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct OrderShippingAddress {
    pub id: u64,
    pub order_id: u64,

    #[serde(flatten)]
    pub address: Address,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_method: Option<String>,
}

/// Paging for [`OrderShippingAddressService::list`] and
/// [`OrderShippingAddressService::count`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OrderShippingAddressListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Operations on the shipping addresses of one order.
#[derive(Debug, Clone)]
pub struct OrderShippingAddressService {
    client: Arc<RestClient>,
}

impl OrderShippingAddressService {
    #[must_use]
    pub const fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }

    /// Lists the shipping addresses of `order_id`.
    ///
    /// # Errors
    ///
    /// See [`RestClient::send`].
    pub async fn list(
        &self,
        ctx: &Context,
        order_id: u64,
        params: &OrderShippingAddressListParams,
    ) -> Result<ApiResponse<Vec<OrderShippingAddress>>, HttpError> {
        self.client.get(ctx, &service_path(order_id), params).await
    }

    /// Counts the shipping addresses of `order_id`.
    ///
    /// # Errors
    ///
    /// See [`RestClient::send`].
    pub async fn count(
        &self,
        ctx: &Context,
        order_id: u64,
        params: &OrderShippingAddressListParams,
    ) -> Result<ApiResponse<u64>, HttpError> {
        let path = format!("{}count", service_path(order_id));
        let response: ApiResponse<Count> = self.client.get(ctx, &path, params).await?;
        Ok(response.map(|c| c.count))
    }

    /// Fetches one shipping address of `order_id`.
    ///
    /// # Errors
    ///
    /// See [`RestClient::send`].
    pub async fn show(
        &self,
        ctx: &Context,
        order_id: u64,
        id: u64,
    ) -> Result<ApiResponse<OrderShippingAddress>, HttpError> {
        let path = format!("{}{id}", service_path(order_id));
        self.client.get(ctx, &path, &()).await
    }
}

fn service_path(order_id: u64) -> String {
    format!("orders/{order_id}/shipping_addresses/")
}
