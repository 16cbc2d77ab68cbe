//! HTTP client types for BigCommerce API communication.
//!
//! This module provides the request pipeline shared by every resource
//! service: build a request, execute it under a [`Context`], decode the
//! response into a success or error value.
//!
//! # Overview
//!
//! - [`HttpRequest`] / [`HttpRequestBuilder`]: Transport-ready request with
//!   encoded query, JSON body and the fixed header set
//! - [`HttpClient`]: Sends a request and buffers the response
//! - [`HttpResponse`]: Buffered response with two-branch decoding
//! - [`ResponseOutcome`]: Success value or decoded error value
//! - [`ApiError`]: Errors reported by the store, see [`relevant_error`]
//! - [`Context`]: Deadline and cancellation for one call
//! - [`rest::RestClient`]: Runs the whole pipeline and returns [`rest::ApiResponse`]
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::{Context, HttpClient, HttpMethod, HttpRequest, ApiError};
//!
//! let client = HttpClient::new(config)?;
//! let request = HttpRequest::builder(HttpMethod::Get, "products/")
//!     .query(&params)
//!     .build(client.config())?;
//!
//! let response = client.execute(&Context::background(), request).await?;
//! match response.decode::<Vec<Product>, ApiError>()? {
//!     ResponseOutcome::Success(products) => println!("{} products", products.len()),
//!     ResponseOutcome::Failure(error) => println!("rejected: {error}"),
//! }
//! ```
//!
//! # Retry Behavior
//!
//! None. Every call issues exactly one request.

mod api_error;
mod context;
mod errors;
mod http_client;
mod http_request;
mod http_response;
mod query;
pub mod rest;

pub use api_error::{
    relevant_error, ApiError, ApiErrorDetail, ApiErrorDetails, ApiErrorEntry, ApiErrorProduct,
};
pub use context::{CancelHandle, Context};
pub use errors::{HttpError, HttpStatusError, InvalidHttpRequestError};
pub use http_client::HttpClient;
pub use http_request::{
    HttpMethod, HttpRequest, HttpRequestBuilder, ACCEPT, API_PATH_PREFIX, CONTENT_TYPE,
    USER_AGENT,
};
pub use http_response::{HttpResponse, ResponseOutcome};
pub use query::encode_query;

pub use rest::{ApiResponse, RestClient};
