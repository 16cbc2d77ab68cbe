//! Configuration types for the BigCommerce API SDK.
//!
//! This module provides the endpoint configuration shared by every resource
//! service of a client.
//!
//! # Overview
//!
//! - [`ClientConfig`]: Store endpoint and Basic-Auth credentials
//! - [`ClientConfigBuilder`]: A builder for constructing [`ClientConfig`] instances
//! - [`Endpoint`]: A validated store URL
//! - [`Username`]: A validated, non-empty API user name
//! - [`Password`]: An API password with masked debug output
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_api::{ClientConfig, Endpoint, Password, Username};
//!
//! let config = ClientConfig::builder()
//!     .endpoint(Endpoint::new("https://example.bigcommerce.com").unwrap())
//!     .username(Username::new("bigcommerce-rust").unwrap())
//!     .password(Password::new("12345"))
//!     .build()
//!     .unwrap();
//! ```
//!
//! The configuration can also be loaded from JSON using the store's wire
//! names:
//!
//! ```rust
//! use bigcommerce_api::ClientConfig;
//!
//! let config: ClientConfig = serde_json::from_str(
//!     r#"{"endpoint":"https://example.com","userName":"api","password":"12345"}"#,
//! ).unwrap();
//! assert_eq!(config.username().as_ref(), "api");
//! ```

mod newtypes;

pub use newtypes::{Endpoint, Password, Username};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Endpoint configuration for the BigCommerce API.
///
/// Holds the store base URL and the HTTP Basic credentials used on every
/// request. A `ClientConfig` is immutable once built; clients share it
/// behind an `Arc`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    endpoint: Endpoint,
    #[serde(rename = "userName")]
    username: Username,
    #[serde(default)]
    password: Password,
}

impl ClientConfig {
    /// Creates a new builder for constructing a `ClientConfig`.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Returns the store endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Returns the API user name.
    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// Returns the API password.
    #[must_use]
    pub const fn password(&self) -> &Password {
        &self.password
    }
}

// Verify ClientConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientConfig>();
};

/// Builder for constructing [`ClientConfig`] instances.
///
/// `endpoint` and `username` are required. `password` defaults to empty.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    endpoint: Option<Endpoint>,
    username: Option<Username>,
    password: Option<Password>,
}

impl ClientConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the store endpoint (required).
    #[must_use]
    pub fn endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Sets the API user name (required).
    #[must_use]
    pub fn username(mut self, username: Username) -> Self {
        self.username = Some(username);
        self
    }

    /// Sets the API password.
    #[must_use]
    pub fn password(mut self, password: Password) -> Self {
        self.password = Some(password);
        self
    }

    /// Builds the [`ClientConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `endpoint` or
    /// `username` are not set.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let endpoint = self
            .endpoint
            .ok_or(ConfigError::MissingRequiredField { field: "endpoint" })?;
        let username = self
            .username
            .ok_or(ConfigError::MissingRequiredField { field: "username" })?;

        Ok(ClientConfig {
            endpoint,
            username,
            password: self.password.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint() -> Endpoint {
        Endpoint::new("https://example.com").unwrap()
    }

    #[test]
    fn test_builder_requires_endpoint() {
        let result = ClientConfigBuilder::new()
            .username(Username::new("api").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "endpoint" })
        ));
    }

    #[test]
    fn test_builder_requires_username() {
        let result = ClientConfigBuilder::new().endpoint(endpoint()).build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "username" })
        ));
    }

    #[test]
    fn test_builder_defaults_password_to_empty() {
        let config = ClientConfig::builder()
            .endpoint(endpoint())
            .username(Username::new("api").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.password().as_ref(), "");
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ClientConfig>();
    }

    #[test]
    fn test_config_debug_masks_password() {
        let config = ClientConfig::builder()
            .endpoint(endpoint())
            .username(Username::new("api").unwrap())
            .password(Password::new("hunter2"))
            .build()
            .unwrap();

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("ClientConfig"));
        assert!(!debug_str.contains("hunter2"));
    }

    #[test]
    fn test_config_json_uses_wire_names() {
        let config: ClientConfig = serde_json::from_str(
            r#"{"endpoint":"https://example.com/","userName":"api","password":"12345"}"#,
        )
        .unwrap();

        assert_eq!(config.endpoint().as_ref(), "https://example.com");
        assert_eq!(config.password().as_ref(), "12345");

        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["userName"], "api");
    }

    #[test]
    fn test_config_json_rejects_empty_username() {
        let result: Result<ClientConfig, _> =
            serde_json::from_str(r#"{"endpoint":"https://example.com","userName":""}"#);
        assert!(result.is_err());
    }
}
