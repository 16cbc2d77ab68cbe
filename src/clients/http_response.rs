//! HTTP response types and response decoding.
//!
//! An [`HttpResponse`] is fully buffered: by the time a caller holds one,
//! the connection that produced it has been released. Decoding follows two
//! branches:
//!
//! - **2xx**: the body is decoded into the success type.
//! - **anything else**: the body is decoded into the error type, but only
//!   when the response declares a JSON content type. A non-JSON error body
//!   (for example an HTML page from a gateway), or a JSON body that does not
//!   match the error type, becomes an [`HttpStatusError`] carrying the status
//!   line instead.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::clients::errors::{HttpError, HttpStatusError};

/// Result of decoding a response into either of two targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseOutcome<T, E> {
    /// The status was 2xx and the body decoded into the success type.
    Success(T),
    /// The status was not 2xx and the JSON body decoded into the error type.
    Failure(E),
}

impl<T, E> ResponseOutcome<T, E> {
    /// Returns `true` for [`ResponseOutcome::Success`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Converts into a `Result`, mapping `Failure` to `Err`.
    ///
    /// # Errors
    ///
    /// Returns the failure value when the outcome is a failure.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }
}

/// A buffered HTTP response from the BigCommerce API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The status line, e.g. `404 Not Found`.
    pub status: String,
    /// Response headers with lowercase names (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, deriving the status line from `code`.
    ///
    /// Header names are expected in lowercase.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bigcommerce_api::HttpResponse;
    /// use std::collections::HashMap;
    ///
    /// let response = HttpResponse::new(404, HashMap::new(), Vec::new());
    /// assert_eq!(response.status, "404 Not Found");
    /// assert!(!response.is_ok());
    /// ```
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: Vec<u8>) -> Self {
        let status = reqwest::StatusCode::from_u16(code)
            .ok()
            .and_then(|s| s.canonical_reason())
            .map_or_else(|| code.to_string(), |reason| format!("{code} {reason}"));

        Self {
            code,
            status,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, looked up case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `Content-Type` header value, if present.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Returns `true` when the response declares a JSON body.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.content_type()
            .is_some_and(|ct| ct.to_ascii_lowercase().contains("application/json"))
    }

    /// Decodes the body into the success type or the error type.
    ///
    /// # Errors
    ///
    /// - [`HttpError::Decode`] if a 2xx body does not match `T`
    /// - [`HttpError::Status`] for a non-2xx response whose body is not
    ///   JSON or does not match `E`
    ///
    /// # Example
    ///
    /// ```rust
    /// use bigcommerce_api::{ApiError, HttpResponse, ResponseOutcome};
    /// use std::collections::HashMap;
    ///
    /// let mut headers = HashMap::new();
    /// headers.insert("content-type".to_string(), vec!["text/html".to_string()]);
    /// let response = HttpResponse::new(500, headers, b"<html></html>".to_vec());
    ///
    /// let err = response.decode::<Vec<u64>, ApiError>().unwrap_err();
    /// assert_eq!(err.to_string(), "500 Internal Server Error");
    /// ```
    pub fn decode<T, E>(&self) -> Result<ResponseOutcome<T, E>, HttpError>
    where
        T: DeserializeOwned,
        E: DeserializeOwned,
    {
        if self.is_ok() {
            return self.decode_body().map(ResponseOutcome::Success);
        }
        self.decode_error_body().map(ResponseOutcome::Failure)
    }

    /// Decodes a 2xx body into `T`; any other status yields `Ok(None)`.
    ///
    /// With no error target nothing is reported for a non-2xx status; the
    /// caller inspects [`HttpResponse::code`].
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Decode`] if a 2xx body does not match `T`.
    pub fn decode_success<T: DeserializeOwned>(&self) -> Result<Option<T>, HttpError> {
        if self.is_ok() {
            return self.decode_body().map(Some);
        }
        Ok(None)
    }

    /// Decodes a non-2xx body into `E`; a 2xx status yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Same as the failure branch of [`HttpResponse::decode`].
    pub fn decode_failure<E: DeserializeOwned>(&self) -> Result<Option<E>, HttpError> {
        if self.is_ok() {
            return Ok(None);
        }
        self.decode_error_body().map(Some)
    }

    fn decode_error_body<E: DeserializeOwned>(&self) -> Result<E, HttpError> {
        if !self.is_json() {
            return Err(self.status_error());
        }
        self.decode_body().map_err(|e| {
            tracing::debug!(status = %self.status, error = %e, "Error body did not decode");
            self.status_error()
        })
    }

    fn status_error(&self) -> HttpError {
        HttpError::Status(HttpStatusError {
            code: self.code,
            status: self.status.clone(),
        })
    }

    fn decode_body<T: DeserializeOwned>(&self) -> Result<T, HttpError> {
        // An empty body reads as JSON null so that `()` and `Option<_>` decode.
        let body: &[u8] = if self.body.iter().all(u8::is_ascii_whitespace) {
            b"null"
        } else {
            &self.body
        };
        Ok(serde_json::from_slice(body)?)
    }
}
