//! HTTP request types for the BigCommerce API SDK.
//!
//! This module provides the [`HttpRequest`] type and its builder. A built
//! request is transport-ready: the URL is absolute, the query string and
//! JSON body are encoded, and the fixed header set is in place.

use std::collections::HashMap;
use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;

use crate::clients::errors::InvalidHttpRequestError;
use crate::clients::query::encode_query;
use crate::config::ClientConfig;

/// Path prefix of the v2 REST API.
pub const API_PATH_PREFIX: &str = "/api/v2/";

/// The `Accept` header sent with every request.
pub const ACCEPT: &str = "application/json; charset=utf-8";

/// The `Content-Type` header sent with every request.
pub const CONTENT_TYPE: &str = "application/json";

/// The `User-Agent` header sent with every request.
pub const USER_AGENT: &str = concat!("bigcommerce-api-rust/", env!("CARGO_PKG_VERSION"));

/// HTTP methods used by the BigCommerce v2 API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
}

impl HttpMethod {
    /// Returns the method name as sent on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Put => Self::PUT,
        }
    }
}

/// A transport-ready request.
///
/// Use [`HttpRequest::builder`] to construct one.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::{ClientConfig, Endpoint, HttpMethod, HttpRequest, Password, Username};
/// use serde_json::json;
///
/// let config = ClientConfig::builder()
///     .endpoint(Endpoint::new("https://example.com").unwrap())
///     .username(Username::new("api").unwrap())
///     .password(Password::new("12345"))
///     .build()
///     .unwrap();
///
/// let request = HttpRequest::builder(HttpMethod::Post, "orders/")
///     .body(&json!({"customer_id": 0}))
///     .build(&config)
///     .unwrap();
///
/// assert_eq!(request.url, "https://example.com/api/v2/orders/");
/// assert_eq!(request.body.as_deref(), Some(r#"{"customer_id":0}"#));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The absolute URL, including the encoded query string.
    pub url: String,
    /// Headers to send.
    pub headers: HashMap<String, String>,
    /// The JSON body, if any. A request without a body sends no payload.
    pub body: Option<String>,
}

impl HttpRequest {
    /// Creates a new builder for a request to `path`, relative to `/api/v2/`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - the method is `Post` or `Put` and there is no body
    /// - the method is `Get` and there is a body
    /// - the URL does not parse
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        match (self.http_method, &self.body) {
            (HttpMethod::Post | HttpMethod::Put, None) => {
                return Err(InvalidHttpRequestError::MissingBody {
                    method: self.http_method.to_string(),
                });
            }
            (HttpMethod::Get, Some(_)) => {
                return Err(InvalidHttpRequestError::UnexpectedBody {
                    method: self.http_method.to_string(),
                });
            }
            _ => {}
        }

        reqwest::Url::parse(&self.url).map_err(|e| InvalidHttpRequestError::InvalidUrl {
            url: self.url.clone(),
            reason: e.to_string(),
        })?;

        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
///
/// Encoding failures are recorded and reported by [`HttpRequestBuilder::build`].
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    query: String,
    body: Option<String>,
    error: Option<InvalidHttpRequestError>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            query: String::new(),
            body: None,
            error: None,
        }
    }

    /// Sets the query parameters from a `Serialize` filter struct.
    ///
    /// Fields that serialize to `null` or `""` are omitted.
    #[must_use]
    pub fn query<Q: Serialize + ?Sized>(mut self, params: &Q) -> Self {
        match encode_query(params) {
            Ok(query) => self.query = query,
            Err(e) => {
                self.error.get_or_insert(e);
            }
        }
        self
    }

    /// Sets the JSON body.
    #[must_use]
    pub fn body<B: Serialize + ?Sized>(mut self, body: &B) -> Self {
        match serde_json::to_string(body) {
            Ok(json) => self.body = Some(json),
            Err(e) => {
                self.error.get_or_insert(InvalidHttpRequestError::BodyEncoding {
                    reason: e.to_string(),
                });
            }
        }
        self
    }

    /// Builds the [`HttpRequest`] against `config`, validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns the first recorded encoding error, or the validation error
    /// from [`HttpRequest::verify`].
    pub fn build(self, config: &ClientConfig) -> Result<HttpRequest, InvalidHttpRequestError> {
        if let Some(error) = self.error {
            return Err(error);
        }

        let mut url = format!(
            "{}{}{}",
            config.endpoint(),
            API_PATH_PREFIX,
            self.path.trim_start_matches('/')
        );
        if !self.query.is_empty() {
            url.push('?');
            url.push_str(&self.query);
        }

        let request = HttpRequest {
            http_method: self.http_method,
            url,
            headers: default_headers(config),
            body: self.body,
        };
        request.verify()?;
        Ok(request)
    }
}

fn default_headers(config: &ClientConfig) -> HashMap<String, String> {
    let credentials = format!(
        "{}:{}",
        config.username().as_ref(),
        config.password().as_ref()
    );

    let mut headers = HashMap::new();
    headers.insert("Accept".to_string(), ACCEPT.to_string());
    headers.insert("Content-Type".to_string(), CONTENT_TYPE.to_string());
    headers.insert("User-Agent".to_string(), USER_AGENT.to_string());
    headers.insert(
        "Authorization".to_string(),
        format!("Basic {}", STANDARD.encode(credentials)),
    );
    headers
}
