//! BigCommerce v2 resources.
//!
//! Each resource has a data struct, a parameter struct for filters and a
//! service that issues the calls. Services share one
//! [`RestClient`](crate::clients::RestClient) through an `Arc` and are
//! normally reached through [`BigCommerceClient`](crate::BigCommerceClient).
//!
//! | Service | Path |
//! |---------|------|
//! | [`OrderService`] | `orders/` |
//! | [`OrderStatusService`] | `order_statuses/` |
//! | [`OrderShippingAddressService`] | `orders/{order_id}/shipping_addresses/` |
//! | [`ProductService`] | `products/` |
//! | [`ProductCustomFieldService`] | `products/{product_id}/custom_fields` |
//!
//! Filter fields are `Option`s. `None` leaves the filter out of the query
//! string, `Some(0)` sends `0`.

mod common;
mod order;
mod order_shipping_address;
mod order_status;
mod product;
mod product_custom_field;

pub use common::{decimal_string, Address, BcTime, BC_TIME_FORMAT};
pub use order::{
    Order, OrderBody, OrderEditParams, OrderListParams, OrderProduct, OrderService,
    OrderShippingDestination, ResourceLink,
};
pub use order_shipping_address::{
    OrderShippingAddress, OrderShippingAddressListParams, OrderShippingAddressService,
};
pub use order_status::{OrderStatus, OrderStatusListParams, OrderStatusService};
pub use product::{PrimaryImage, Product, ProductListParams, ProductService};
pub use product_custom_field::{
    ProductCustomField, ProductCustomFieldListParams, ProductCustomFieldService,
};
