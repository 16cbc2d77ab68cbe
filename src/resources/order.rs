//! Order resource.
//!
//! Orders are listed, counted, fetched, created and edited through
//! [`OrderService`]:
//!
//! - `GET orders/` and `GET orders/count` with [`OrderListParams`]
//! - `GET orders/{id}`
//! - `POST orders/` with an [`OrderBody`]
//! - `PUT orders/{id}` with [`OrderEditParams`]
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::{BigCommerceClient, Context};
//! use bigcommerce_api::resources::OrderListParams;
//!
//! let client = BigCommerceClient::new(config)?;
//! let ctx = Context::background();
//!
//! // Orders placed by guests
//! let params = OrderListParams {
//!     customer_id: Some(0),
//!     ..Default::default()
//! };
//! let orders = client.orders.list(&ctx, &params).await?;
//! for order in orders.iter() {
//!     println!("#{} {} {}", order.id, order.status, order.total_inc_tax);
//! }
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::clients::{ApiResponse, Context, HttpError, RestClient};
use crate::resources::common::{decimal_string, Address, BcTime, Count};

const ORDERS_PATH: &str = "orders/";

/// An order as returned by the API.
///
/// Monetary fields are sent by the API as decimal strings; they are read
/// into `f64` and written back as strings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Order {
    pub id: u64,

    /// `0` for guest orders.
    pub customer_id: u64,

    pub date_created: BcTime,
    pub date_modified: BcTime,

    /// Absent until the order ships.
    pub date_shipped: BcTime,

    pub status_id: u32,

    /// Human-readable status, e.g. `Awaiting Fulfillment`.
    pub status: String,

    #[serde(with = "decimal_string")]
    pub handling_cost_ex_tax: f64,
    #[serde(with = "decimal_string")]
    pub handling_cost_inc_tax: f64,
    #[serde(with = "decimal_string")]
    pub handling_cost_tax: f64,

    #[serde(with = "decimal_string")]
    pub shipping_cost_ex_tax: f64,
    #[serde(with = "decimal_string")]
    pub shipping_cost_inc_tax: f64,
    #[serde(with = "decimal_string")]
    pub shipping_cost_tax: f64,

    #[serde(with = "decimal_string")]
    pub subtotal_ex_tax: f64,
    #[serde(with = "decimal_string")]
    pub subtotal_inc_tax: f64,
    #[serde(with = "decimal_string")]
    pub subtotal_tax: f64,

    #[serde(with = "decimal_string")]
    pub total_ex_tax: f64,
    #[serde(with = "decimal_string")]
    pub total_inc_tax: f64,
    #[serde(with = "decimal_string")]
    pub total_tax: f64,

    #[serde(with = "decimal_string")]
    pub base_shipping_cost: f64,

    #[serde(with = "decimal_string")]
    pub refunded_amount: f64,

    #[serde(with = "decimal_string")]
    pub discount_amount: f64,

    #[serde(with = "decimal_string")]
    pub coupon_discount: f64,

    /// Number of line items.
    pub items_total: u32,

    /// Number of line items shipped so far.
    pub items_shipped: u32,

    pub payment_method: String,
    pub payment_status: String,
    pub ip_address: String,

    pub currency_id: u32,

    /// ISO 4217 currency code.
    pub currency_code: String,

    /// Notes visible to staff only.
    pub staff_notes: String,

    /// Message left by the customer at checkout.
    pub customer_message: String,

    pub shipping_address_count: u32,

    /// `true` when the order has been archived.
    pub is_deleted: bool,

    pub billing_address: Address,

    /// Link to the order's line items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub products: Option<ResourceLink>,

    /// Link to the order's shipping addresses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_addresses: Option<ResourceLink>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupons: Option<ResourceLink>,
}

/// A reference to a sub-resource, as embedded in order replies.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ResourceLink {
    /// Absolute URL of the sub-resource.
    pub url: String,
    /// Path of the sub-resource relative to the API root.
    pub resource: String,
}

/// Filters for [`OrderService::list`] and [`OrderService::count`].
///
/// `None` omits the filter. `Some(0)` is sent as `0`, so guest orders can
/// be selected with `customer_id: Some(0)`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OrderListParams {
    /// Page number, starting at 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Results per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Sort expression, e.g. `date_created:desc`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_total: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_total: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_id: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_date_created: Option<BcTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_date_created: Option<BcTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_date_modified: Option<BcTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_date_modified: Option<BcTime>,

    /// Select archived (`true`) or live (`false`) orders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,
}

/// A line item of a new order.
///
/// Catalog products need `product_id` and `quantity`. Custom products need
/// `name`, `quantity` and one of the prices.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OrderProduct {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    /// Name of a custom product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub quantity: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_inc_tax: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_ex_tax: Option<f64>,
}

/// A shipping destination of a new order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OrderShippingDestination {
    #[serde(flatten)]
    pub address: Address,

    /// Name of the shipping method, e.g. `2-Day`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_method: Option<String>,
}

/// Body of [`OrderService::create`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OrderBody {
    /// Free-form tag identifying the system that created the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_source: Option<String>,

    /// `Some(0)` creates a guest order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_id: Option<u32>,

    pub billing_address: Address,

    pub products: Vec<OrderProduct>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub shipping_addresses: Vec<OrderShippingDestination>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_cost_inc_tax: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_cost_ex_tax: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub handling_cost_inc_tax: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub handling_cost_ex_tax: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_amount: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtotal_ex_tax: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtotal_inc_tax: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_ex_tax: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_inc_tax: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff_notes: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
}

/// Editable fields of an existing order. Only `Some` fields are sent.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OrderEditParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_id: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff_notes: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,
}

/// Operations on `orders/`.
#[derive(Debug, Clone)]
pub struct OrderService {
    client: Arc<RestClient>,
}

impl OrderService {
    /// Creates the service on top of a shared REST client.
    #[must_use]
    pub const fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }

    /// Lists orders matching `params`.
    ///
    /// # Errors
    ///
    /// See [`RestClient::send`].
    pub async fn list(
        &self,
        ctx: &Context,
        params: &OrderListParams,
    ) -> Result<ApiResponse<Vec<Order>>, HttpError> {
        self.client.get(ctx, ORDERS_PATH, params).await
    }

    /// Counts orders matching `params`.
    ///
    /// # Errors
    ///
    /// See [`RestClient::send`].
    pub async fn count(
        &self,
        ctx: &Context,
        params: &OrderListParams,
    ) -> Result<ApiResponse<u64>, HttpError> {
        let path = format!("{ORDERS_PATH}count");
        let response: ApiResponse<Count> = self.client.get(ctx, &path, params).await?;
        Ok(response.map(|c| c.count))
    }

    /// Fetches one order.
    ///
    /// # Errors
    ///
    /// See [`RestClient::send`].
    pub async fn show(&self, ctx: &Context, id: u64) -> Result<ApiResponse<Order>, HttpError> {
        self.client.get(ctx, &order_path(id), &()).await
    }

    /// Creates an order and returns it as stored.
    ///
    /// # Errors
    ///
    /// See [`RestClient::send`].
    pub async fn create(
        &self,
        ctx: &Context,
        body: &OrderBody,
    ) -> Result<ApiResponse<Order>, HttpError> {
        self.client.post(ctx, ORDERS_PATH, body).await
    }

    /// Updates the given fields of an order and returns it as stored.
    ///
    /// # Errors
    ///
    /// See [`RestClient::send`].
    pub async fn edit(
        &self,
        ctx: &Context,
        id: u64,
        params: &OrderEditParams,
    ) -> Result<ApiResponse<Order>, HttpError> {
        self.client.put(ctx, &order_path(id), params).await
    }
}

fn order_path(id: u64) -> String {
    format!("{ORDERS_PATH}{id}")
}
