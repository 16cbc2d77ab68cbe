//! Decoded response wrapper.
//!
//! [`ApiResponse`] pairs the decoded data with the status and headers of
//! the response that produced it. It implements `Deref<Target = T>`, so the
//! data can be used directly:
//!
//! ```rust
//! use bigcommerce_api::{ApiResponse, HttpResponse};
//! use std::collections::HashMap;
//!
//! let http = HttpResponse::new(200, HashMap::new(), Vec::new());
//! let response = ApiResponse::new(vec![1, 2, 3], &http);
//!
//! assert_eq!(response.len(), 3);
//! assert_eq!(response.code(), 200);
//! ```

use std::collections::HashMap;
use std::ops::{Deref, DerefMut};

use crate::clients::http_response::HttpResponse;

/// Decoded data plus response metadata.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    data: T,
    code: u16,
    status: String,
    headers: HashMap<String, Vec<String>>,
}

impl<T> ApiResponse<T> {
    /// Wraps `data` with the metadata of `response`.
    #[must_use]
    pub fn new(data: T, response: &HttpResponse) -> Self {
        Self {
            data,
            code: response.code,
            status: response.status.clone(),
            headers: response.headers.clone(),
        }
    }

    /// Consumes the response and returns the data.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Returns a reference to the data.
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub const fn code(&self) -> u16 {
        self.code
    }

    /// Returns the status line, e.g. `200 OK`.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Returns the first value of a response header.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Maps the inner data to a new type, keeping the metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> ApiResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ApiResponse {
            data: f(self.data),
            code: self.code,
            status: self.status,
            headers: self.headers,
        }
    }
}

impl<T> Deref for ApiResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> DerefMut for ApiResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}
