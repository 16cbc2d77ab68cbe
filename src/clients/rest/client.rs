//! REST client implementation for the BigCommerce v2 API.
//!
//! This module provides the [`RestClient`] type, which runs the full
//! pipeline for one call: build the request, execute it, decode the
//! response and combine the outcome into a single `Result`.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::clients::api_error::{relevant_error, ApiError};
use crate::clients::context::Context;
use crate::clients::errors::HttpError;
use crate::clients::http_client::HttpClient;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::ResponseOutcome;
use crate::clients::rest::ApiResponse;
use crate::config::ClientConfig;

/// REST API client for the BigCommerce v2 API.
///
/// Provides `get`, `post` and `put` with typed query, body and response.
/// Resource services are thin wrappers around these methods.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use bigcommerce_api::{Context, RestClient};
/// use bigcommerce_api::resources::Order;
///
/// let client = RestClient::new(config)?;
/// let order: ApiResponse<Order> = client.get(&Context::background(), "orders/100", &()).await?;
/// ```
#[derive(Clone, Debug)]
pub struct RestClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the HTTP backend cannot be initialized.
    pub fn new(config: ClientConfig) -> Result<Self, HttpError> {
        Ok(Self {
            http_client: HttpClient::new(config)?,
        })
    }

    /// Creates a REST client around an existing `reqwest::Client`.
    #[must_use]
    pub fn with_http_client(client: reqwest::Client, config: ClientConfig) -> Self {
        Self {
            http_client: HttpClient::with_http_client(client, config),
        }
    }

    /// Returns the configuration requests are built against.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        self.http_client.config()
    }

    /// Sends a GET request to `path` with the given query parameters.
    ///
    /// Pass `&()` for no parameters.
    ///
    /// # Errors
    ///
    /// See [`RestClient::send`].
    pub async fn get<T, Q>(
        &self,
        ctx: &Context,
        path: &str,
        query: &Q,
    ) -> Result<ApiResponse<T>, HttpError>
    where
        T: DeserializeOwned + Default,
        Q: Serialize + ?Sized,
    {
        let request = HttpRequest::builder(HttpMethod::Get, path)
            .query(query)
            .build(self.config())?;
        self.send(ctx, request).await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`RestClient::send`].
    pub async fn post<T, B>(
        &self,
        ctx: &Context,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse<T>, HttpError>
    where
        T: DeserializeOwned + Default,
        B: Serialize + ?Sized,
    {
        let request = HttpRequest::builder(HttpMethod::Post, path)
            .body(body)
            .build(self.config())?;
        self.send(ctx, request).await
    }

    /// Sends a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`RestClient::send`].
    pub async fn put<T, B>(
        &self,
        ctx: &Context,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse<T>, HttpError>
    where
        T: DeserializeOwned + Default,
        B: Serialize + ?Sized,
    {
        let request = HttpRequest::builder(HttpMethod::Put, path)
            .body(body)
            .build(self.config())?;
        self.send(ctx, request).await
    }

    /// Executes a built request and decodes the response.
    ///
    /// A 2xx body is decoded into `T`. A non-2xx JSON body is decoded as
    /// [`ApiError`]; when that container is empty the call counts as a
    /// success and `T::default()` is returned.
    ///
    /// # Errors
    ///
    /// In order of precedence:
    /// - [`HttpError::InvalidRequest`], [`HttpError::Network`],
    ///   [`HttpError::Cancelled`], [`HttpError::DeadlineExceeded`]
    /// - [`HttpError::Decode`] for a 2xx body that does not match `T`
    /// - [`HttpError::Api`] for store-reported errors
    /// - [`HttpError::Status`] for a non-2xx response without a JSON error
    ///   list
    pub async fn send<T>(
        &self,
        ctx: &Context,
        request: HttpRequest,
    ) -> Result<ApiResponse<T>, HttpError>
    where
        T: DeserializeOwned + Default,
    {
        let response = self.http_client.execute(ctx, request).await?;

        let data = match response.decode::<T, ApiError>()? {
            ResponseOutcome::Success(data) => data,
            ResponseOutcome::Failure(api_error) => {
                relevant_error(None, api_error)?;
                T::default()
            }
        };

        Ok(ApiResponse::new(data, &response))
    }
}
