//! Errors reported by the store in a JSON response body.
//!
//! BigCommerce answers a rejected call with a list of `{status, message}`
//! entries, or occasionally a single entry object. [`ApiError`] accepts
//! both shapes. A container with no entries means "no error".

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::clients::errors::HttpError;

/// Product reference attached to an inventory error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiErrorProduct {
    pub id: u64,
    pub name: String,
    pub inventory_level: i64,
    pub url: String,
    pub resource: String,
}

/// One item of [`ApiErrorDetails::errors`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiErrorDetail {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<ApiErrorProduct>,
}

/// Extra context some endpoints attach to an error entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiErrorDetails {
    pub errors: Vec<ApiErrorDetail>,
}

/// A single error reported by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorEntry {
    /// The HTTP status the store associates with this error.
    pub status: u16,
    /// Human readable message.
    #[serde(default)]
    pub message: String,
    /// Additional details, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<ApiErrorDetails>,
}

impl ApiErrorEntry {
    /// Creates an entry without details.
    #[must_use]
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            details: None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ApiErrorBody {
    Many(Vec<ApiErrorEntry>),
    One(ApiErrorEntry),
}

impl From<ApiErrorBody> for ApiError {
    fn from(body: ApiErrorBody) -> Self {
        match body {
            ApiErrorBody::Many(entries) => Self { entries },
            ApiErrorBody::One(entry) => Self {
                entries: vec![entry],
            },
        }
    }
}

/// Ordered list of errors reported by the store.
///
/// The message of the error is the first entry rendered as
/// `"<status> <message>"`.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::ApiError;
///
/// let error: ApiError =
///     serde_json::from_str(r#"[{"status":400,"message":"Bad Request"}]"#).unwrap();
/// assert!(!error.is_empty());
/// assert_eq!(error.to_string(), "400 Bad Request");
///
/// let none: ApiError = serde_json::from_str("[]").unwrap();
/// assert!(none.is_empty());
/// assert_eq!(none.describe(), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ApiErrorBody", into = "Vec<ApiErrorEntry>")]
pub struct ApiError {
    entries: Vec<ApiErrorEntry>,
}

impl ApiError {
    /// Returns `true` when no error was reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns all reported entries in order.
    #[must_use]
    pub fn entries(&self) -> &[ApiErrorEntry] {
        &self.entries
    }

    /// Returns the first reported entry.
    #[must_use]
    pub fn first(&self) -> Option<&ApiErrorEntry> {
        self.entries.first()
    }

    /// Renders the first entry as `"<status> <message>"`, or `""` when empty.
    #[must_use]
    pub fn describe(&self) -> String {
        self.first()
            .map(|entry| format!("{} {}", entry.status, entry.message))
            .unwrap_or_default()
    }
}

impl From<Vec<ApiErrorEntry>> for ApiError {
    fn from(entries: Vec<ApiErrorEntry>) -> Self {
        Self { entries }
    }
}

impl From<ApiError> for Vec<ApiErrorEntry> {
    fn from(error: ApiError) -> Self {
        error.entries
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl std::error::Error for ApiError {}

/// Combines the outcome of a call into the error the caller sees.
///
/// A transport or decoding error always wins. Otherwise an empty
/// `api_error` means the call succeeded, and a non-empty one is the error.
///
/// # Errors
///
/// Returns `http_error` if present, else [`HttpError::Api`] when
/// `api_error` has entries.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::{relevant_error, ApiError, HttpError};
///
/// assert!(relevant_error(None, ApiError::default()).is_ok());
///
/// let result = relevant_error(Some(HttpError::Cancelled), ApiError::default());
/// assert!(matches!(result, Err(HttpError::Cancelled)));
/// ```
pub fn relevant_error(http_error: Option<HttpError>, api_error: ApiError) -> Result<(), HttpError> {
    if let Some(error) = http_error {
        return Err(error);
    }
    if api_error.is_empty() {
        return Ok(());
    }
    Err(HttpError::Api(api_error))
}
