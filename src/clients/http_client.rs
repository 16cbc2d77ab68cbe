//! HTTP client for BigCommerce API communication.
//!
//! This module provides the [`HttpClient`] type, the request executor of
//! the SDK. It sends one [`HttpRequest`] under a [`Context`] and returns
//! the fully buffered [`HttpResponse`].

use std::collections::HashMap;
use std::sync::Arc;

use crate::clients::context::Context;
use crate::clients::errors::HttpError;
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::config::ClientConfig;

/// HTTP client for making requests to the BigCommerce API.
///
/// The client executes exactly one request per call: no retries, no
/// rate-limit handling. The response body is read to the end and the
/// connection released before [`HttpClient::execute`] returns, whatever
/// the outcome.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync` and cheap to clone; clones share the
/// connection pool and the configuration.
///
/// # Example
///
/// ```rust,ignore
/// use bigcommerce_api::{Context, HttpClient, HttpMethod, HttpRequest};
///
/// let client = HttpClient::new(config)?;
/// let request = HttpRequest::builder(HttpMethod::Get, "orders/count")
///     .build(client.config())?;
///
/// let response = client.execute(&Context::background(), request).await?;
/// println!("{}", response.status);
/// ```
#[derive(Clone, Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Endpoint and credentials, shared read-only.
    config: Arc<ClientConfig>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client with a rustls-backed connection pool.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the TLS backend cannot be initialized.
    pub fn new(config: ClientConfig) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder().use_rustls_tls().build()?;
        Ok(Self::with_http_client(client, config))
    }

    /// Creates a client around an existing `reqwest::Client`.
    ///
    /// Timeouts, proxies and TLS settings of `client` are kept as-is.
    #[must_use]
    pub fn with_http_client(client: reqwest::Client, config: ClientConfig) -> Self {
        Self {
            client,
            config: Arc::new(config),
        }
    }

    /// Returns the configuration requests are built against.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Sends a request and buffers its response.
    ///
    /// The call is abandoned as soon as `ctx` is cancelled or its deadline
    /// passes; no body is decoded in that case.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - The context is cancelled (`Cancelled`) or expires (`DeadlineExceeded`)
    /// - A connection or transfer error occurs (`Network`)
    ///
    /// A non-2xx status is not an error at this stage.
    pub async fn execute(
        &self,
        ctx: &Context,
        request: HttpRequest,
    ) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        tracing::debug!(method = %request.http_method, url = %request.url, "Sending request");

        let mut req_builder = self.client.request(request.http_method.into(), &request.url);
        for (key, value) in &request.headers {
            req_builder = req_builder.header(key, value);
        }
        if let Some(body) = request.body {
            req_builder = req_builder.body(body);
        }

        // The reqwest response lives only inside this future; it is dropped
        // once the body is buffered or when the context aborts the call.
        let call = async move {
            let res = req_builder.send().await?;
            let code = res.status().as_u16();
            let headers = Self::parse_response_headers(res.headers());
            let body = res.bytes().await?.to_vec();
            Ok::<_, HttpError>(HttpResponse::new(code, headers, body))
        };

        let response = match ctx.run(call).await {
            Ok(result) => result?,
            Err(e) => {
                tracing::warn!(url = %request.url, error = %e, "Request aborted");
                return Err(e);
            }
        };

        if response.is_ok() {
            tracing::debug!(status = %response.status, "Received response");
        } else {
            tracing::warn!(
                url = %request.url,
                status = %response.status,
                "Received non-success response"
            );
        }

        Ok(response)
    }

    /// Parses response headers into a `HashMap` keyed by lowercase name.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::http_request::HttpMethod;
    use crate::config::{Endpoint, Password, Username};

    fn test_config(endpoint: &str) -> ClientConfig {
        ClientConfig::builder()
            .endpoint(Endpoint::new(endpoint).unwrap())
            .username(Username::new("api").unwrap())
            .password(Password::new("12345"))
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }

    #[test]
    fn test_client_exposes_config() {
        let client = HttpClient::new(test_config("https://example.com")).unwrap();
        assert_eq!(client.config().endpoint().as_ref(), "https://example.com");
    }

    #[test]
    fn test_parse_response_headers_lowercases_and_groups() {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.append("Content-Type", "application/json".parse().unwrap());
        headers.append("X-Multi", "a".parse().unwrap());
        headers.append("X-Multi", "b".parse().unwrap());

        let parsed = HttpClient::parse_response_headers(&headers);
        assert_eq!(parsed["content-type"], vec!["application/json".to_string()]);
        assert_eq!(parsed["x-multi"], vec!["a".to_string(), "b".to_string()]);
    }

    #[tokio::test]
    async fn test_cancelled_context_skips_network() {
        // Nothing listens on this port; a cancelled context must not try.
        let config = test_config("http://127.0.0.1:9");
        let client = HttpClient::new(config).unwrap();
        let request = HttpRequest::builder(HttpMethod::Get, "orders/")
            .build(client.config())
            .unwrap();

        let (ctx, handle) = Context::background().with_cancel();
        handle.cancel();

        let result = client.execute(&ctx, request).await;
        assert!(matches!(result, Err(HttpError::Cancelled)));
    }

    #[tokio::test]
    async fn test_connection_failure_is_network_error() {
        let config = test_config("http://127.0.0.1:9");
        let client = HttpClient::new(config).unwrap();
        let request = HttpRequest::builder(HttpMethod::Get, "orders/")
            .build(client.config())
            .unwrap();

        let result = client.execute(&Context::background(), request).await;
        assert!(matches!(result, Err(HttpError::Network(_))));
    }
}
