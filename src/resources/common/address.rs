//! Address type shared by orders and shipping addresses.

use serde::{Deserialize, Serialize};

/// A postal address as used for `billing_address` on orders and for
/// order shipping addresses.
///
/// Every field is optional so that partial addresses can be sent on edit
/// and partial data received on read.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::resources::Address;
///
/// let address = Address {
///     first_name: Some("Trishy".to_string()),
///     last_name: Some("Test".to_string()),
///     street_1: Some("Somewhere Live Avenue".to_string()),
///     city: Some("Some Place".to_string()),
///     state: Some("New South Wales".to_string()),
///     zip: Some("2000".to_string()),
///     country: Some("Australia".to_string()),
///     country_iso2: Some("AU".to_string()),
///     ..Default::default()
/// };
///
/// let json = serde_json::to_value(&address).unwrap();
/// assert_eq!(json["street_1"], "Somewhere Live Avenue");
/// assert!(json.get("company").is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Address {
    /// First name of the recipient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// Last name of the recipient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// First street line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_1: Option<String>,

    /// Second street line (apartment, suite).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_2: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// State or province name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Postal code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,

    /// Country name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Two-letter country code (ISO 3166-1 alpha-2).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_iso2: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
