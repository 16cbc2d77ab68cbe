//! REST API client for the BigCommerce v2 API.
//!
//! This module provides a higher-level client built on top of the
//! [`HttpClient`](crate::clients::HttpClient) that runs the whole
//! request/decode pipeline and returns typed data.
//!
//! # Overview
//!
//! - [`RestClient`]: The REST API client with `get()`, `post()` and `put()` methods
//! - [`ApiResponse`]: Decoded data plus response status and headers
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::{ClientConfig, Context, RestClient};
//!
//! let client = RestClient::new(config)?;
//! let count: ApiResponse<serde_json::Value> =
//!     client.get(&Context::background(), "orders/count", &()).await?;
//! ```

mod client;
mod response;

pub use client::RestClient;
pub use response::ApiResponse;
