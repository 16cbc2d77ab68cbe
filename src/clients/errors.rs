//! HTTP-specific error types for the BigCommerce API SDK.
//!
//! # Error Handling
//!
//! Every call returns a single [`HttpError`]. The variants follow a fixed
//! precedence: a construction or transport failure is reported before a
//! decoding failure, which is reported before an API error.
//!
//! - [`HttpError::InvalidRequest`]: The request could not be built
//! - [`HttpError::Network`], [`HttpError::Cancelled`], [`HttpError::DeadlineExceeded`]:
//!   The call never completed
//! - [`HttpError::Decode`]: A body or date could not be decoded
//! - [`HttpError::Api`]: The store reported errors in a JSON body
//! - [`HttpError::Status`]: A non-2xx response without a JSON body
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::HttpError;
//!
//! match client.orders.show(&ctx, 123).await {
//!     Ok(order) => println!("Order {}", order.id),
//!     Err(HttpError::Api(e)) => println!("Store rejected the call: {e}"),
//!     Err(HttpError::Status(e)) => println!("Gateway error: {}", e.status),
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::api_error::ApiError;

/// A non-2xx response whose body was not JSON.
///
/// The message is the HTTP status line, e.g. `500 Internal Server Error`.
///
/// ```rust
/// use bigcommerce_api::clients::HttpStatusError;
///
/// let error = HttpStatusError {
///     code: 502,
///     status: "502 Bad Gateway".to_string(),
/// };
/// assert_eq!(error.to_string(), "502 Bad Gateway");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{status}")]
pub struct HttpStatusError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The status line, code followed by the reason phrase.
    pub status: String,
}

/// Error returned when a request cannot be built.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A GET request was given a body.
    #[error("Cannot send a body with {method}.")]
    UnexpectedBody {
        /// The HTTP method that forbids a body.
        method: String,
    },

    /// The assembled URL could not be parsed.
    #[error("Invalid request URL '{url}': {reason}")]
    InvalidUrl {
        /// The URL that failed to parse.
        url: String,
        /// Why it failed.
        reason: String,
    },

    /// The query parameters could not be encoded.
    #[error("Failed to encode query parameters: {reason}")]
    QueryEncoding {
        /// Why encoding failed.
        reason: String,
    },

    /// The request body could not be serialized to JSON.
    #[error("Failed to encode request body: {reason}")]
    BodyEncoding {
        /// Why encoding failed.
        reason: String,
    },
}

/// Unified error type for a single API call.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request validation or encoding failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The execution context was cancelled.
    #[error("Request cancelled")]
    Cancelled,

    /// The execution context deadline passed before the call completed.
    #[error("Request deadline exceeded")]
    DeadlineExceeded,

    /// The response body could not be decoded.
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// A non-2xx response without a JSON body.
    #[error(transparent)]
    Status(#[from] HttpStatusError),

    /// The store reported one or more errors.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl HttpError {
    /// Returns the HTTP status code when the error came from a response.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status(e) => Some(e.code),
            Self::Api(e) => e.first().map(|entry| entry.status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
