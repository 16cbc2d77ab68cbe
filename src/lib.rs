//! # BigCommerce API Rust SDK
//!
//! An async client for the BigCommerce v2 REST API: orders, order statuses,
//! order shipping addresses, products and product custom fields, over
//! JSON with HTTP Basic authentication.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`ClientConfig`] and [`ClientConfigBuilder`]
//! - Validated newtypes for the store endpoint and credentials
//! - A request pipeline that builds, sends and decodes every call the same way
//! - Per-call deadlines and cancellation via [`Context`]
//! - Typed resource services grouped in [`BigCommerceClient`]
//!
//! ## Quick Start
//!
//! ```rust
//! use bigcommerce_api::{ClientConfig, Endpoint, Password, Username};
//!
//! let config = ClientConfig::builder()
//!     .endpoint(Endpoint::new("https://store-abc123.mybigcommerce.com").unwrap())
//!     .username(Username::new("admin").unwrap())
//!     .password(Password::new("api-token"))
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Calling the API
//!
//! ```rust,ignore
//! use bigcommerce_api::{BigCommerceClient, Context, HttpError};
//! use bigcommerce_api::resources::OrderListParams;
//!
//! let client = BigCommerceClient::new(config)?;
//! let ctx = Context::background();
//!
//! match client.orders.list(&ctx, &OrderListParams::default()).await {
//!     Ok(orders) => println!("{} orders", orders.len()),
//!     Err(HttpError::Api(error)) => println!("store rejected the call: {error}"),
//!     Err(other) => return Err(other.into()),
//! }
//! ```
//!
//! ## Error Precedence
//!
//! A call returns exactly one outcome, checked in this order:
//! 1. Transport failures, cancellation and deadline expiry
//! 2. Success bodies that cannot be decoded
//! 3. Errors reported by the store ([`HttpError::Api`]), or the status line
//!    ([`HttpError::Status`]) when the error body is not a JSON error list
//! 4. The decoded data
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **One request per call**: No retries, no pagination traversal

pub mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod resources;

// Re-export public types at crate root for convenience
pub use client::BigCommerceClient;
pub use config::{ClientConfig, ClientConfigBuilder, Endpoint, Password, Username};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    relevant_error, ApiError, ApiErrorEntry, ApiResponse, CancelHandle, Context, HttpClient,
    HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    InvalidHttpRequestError, ResponseOutcome, RestClient,
};
