//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated store endpoint, e.g. `https://example.bigcommerce.com`.
///
/// The endpoint must carry a scheme and a host. A trailing slash is trimmed
/// so that request paths can be joined with a single `/`.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::Endpoint;
///
/// let endpoint = Endpoint::new("https://example.bigcommerce.com/").unwrap();
/// assert_eq!(endpoint.as_ref(), "https://example.bigcommerce.com");
/// assert_eq!(endpoint.scheme(), "https");
/// assert_eq!(endpoint.host_name(), "example.bigcommerce.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl Endpoint {
    /// Creates a new validated endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyEndpoint`] if the value is blank and
    /// [`ConfigError::InvalidEndpoint`] if it has no scheme or host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        if url.is_empty() {
            return Err(ConfigError::EmptyEndpoint);
        }

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidEndpoint { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidEndpoint { url: url.clone() });
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(ConfigError::InvalidEndpoint { url: url.clone() });
        }

        // Host ends at port, path, query, or end of string
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start || url[host_end..].contains(['?', '#']) {
            return Err(ConfigError::InvalidEndpoint { url: url.clone() });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl AsRef<str> for Endpoint {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

impl Serialize for Endpoint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.url)
    }
}

impl<'de> Deserialize<'de> for Endpoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated API user name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    /// Creates a new validated user name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyUsername`] if the name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ConfigError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ConfigError::EmptyUsername);
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for Username {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Username {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// An API password (or API token).
///
/// The `Debug` implementation masks the value, displaying only
/// `Password(*****)`. An empty password is allowed.
///
/// ```rust
/// use bigcommerce_api::Password;
///
/// let password = Password::new("12345");
/// assert_eq!(format!("{:?}", password), "Password(*****)");
/// ```
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Password(String);

impl Password {
    /// Wraps a password value.
    #[must_use]
    pub fn new(password: impl Into<String>) -> Self {
        Self(password.into())
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(*****)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let endpoint = Endpoint::new("https://example.com/").unwrap();
        assert_eq!(endpoint.as_ref(), "https://example.com");
    }

    #[test]
    fn test_endpoint_keeps_port_and_path() {
        let endpoint = Endpoint::new("http://127.0.0.1:8080/store").unwrap();
        assert_eq!(endpoint.scheme(), "http");
        assert_eq!(endpoint.host_name(), "127.0.0.1");
        assert_eq!(endpoint.as_ref(), "http://127.0.0.1:8080/store");
    }

    #[test]
    fn test_endpoint_rejects_empty() {
        assert_eq!(Endpoint::new("  "), Err(ConfigError::EmptyEndpoint));
    }

    #[test]
    fn test_endpoint_rejects_missing_scheme() {
        assert!(matches!(
            Endpoint::new("example.com"),
            Err(ConfigError::InvalidEndpoint { .. })
        ));
    }

    #[test]
    fn test_endpoint_rejects_missing_host() {
        assert!(matches!(
            Endpoint::new("https://"),
            Err(ConfigError::InvalidEndpoint { .. })
        ));
    }

    #[test]
    fn test_endpoint_rejects_query_string() {
        assert!(matches!(
            Endpoint::new("https://example.com?x=1"),
            Err(ConfigError::InvalidEndpoint { .. })
        ));
    }

    #[test]
    fn test_endpoint_deserialize_validates() {
        let result: Result<Endpoint, _> = serde_json::from_str(r#""nope""#);
        assert!(result.is_err());

        let endpoint: Endpoint = serde_json::from_str(r#""https://example.com""#).unwrap();
        assert_eq!(endpoint.host_name(), "example.com");
    }

    #[test]
    fn test_username_rejects_empty() {
        assert_eq!(Username::new(""), Err(ConfigError::EmptyUsername));
        assert_eq!(Username::new("api").unwrap().as_ref(), "api");
    }

    #[test]
    fn test_password_debug_is_masked() {
        let password = Password::new("super-secret");
        let debug = format!("{password:?}");
        assert!(!debug.contains("super-secret"));
        assert_eq!(password.as_ref(), "super-secret");
    }
}
