//! The aggregate client.

use std::sync::Arc;

use crate::clients::{HttpError, RestClient};
use crate::config::ClientConfig;
use crate::resources::{
    OrderService, OrderShippingAddressService, OrderStatusService, ProductCustomFieldService,
    ProductService,
};

/// Entry point to every resource service of one store.
///
/// All services share a single [`RestClient`], so they share the
/// connection pool and the configuration.
///
/// # Example
///
/// ```rust,ignore
/// use bigcommerce_api::{BigCommerceClient, ClientConfig, Context, Endpoint, Password, Username};
/// use std::time::Duration;
///
/// let config = ClientConfig::builder()
///     .endpoint(Endpoint::new("https://store-abc123.mybigcommerce.com")?)
///     .username(Username::new("admin")?)
///     .password(Password::new("api-token"))
///     .build()?;
/// let client = BigCommerceClient::new(config)?;
///
/// let ctx = Context::background().with_timeout(Duration::from_secs(10));
/// let order = client.orders.show(&ctx, 100).await?;
/// println!("{} ({})", order.id, order.status);
/// ```
#[derive(Debug, Clone)]
pub struct BigCommerceClient {
    pub orders: OrderService,
    pub order_statuses: OrderStatusService,
    pub order_shipping_addresses: OrderShippingAddressService,
    pub products: ProductService,
    pub product_custom_fields: ProductCustomFieldService,
}

// Verify BigCommerceClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BigCommerceClient>();
};

impl BigCommerceClient {
    /// Creates a client with its own connection pool.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the HTTP backend cannot be initialized.
    pub fn new(config: ClientConfig) -> Result<Self, HttpError> {
        Ok(Self::from_rest_client(RestClient::new(config)?))
    }

    /// Creates a client around an existing `reqwest::Client`.
    #[must_use]
    pub fn with_http_client(client: reqwest::Client, config: ClientConfig) -> Self {
        Self::from_rest_client(RestClient::with_http_client(client, config))
    }

    fn from_rest_client(rest: RestClient) -> Self {
        let rest = Arc::new(rest);
        Self {
            orders: OrderService::new(Arc::clone(&rest)),
            order_statuses: OrderStatusService::new(Arc::clone(&rest)),
            order_shipping_addresses: OrderShippingAddressService::new(Arc::clone(&rest)),
            products: ProductService::new(Arc::clone(&rest)),
            product_custom_fields: ProductCustomFieldService::new(rest),
        }
    }
}
