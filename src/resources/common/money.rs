//! Decimal amounts sent by the API as strings.
//!
//! Order totals arrive as `"79.0000"`. The [`decimal_string`] module plugs
//! into `#[serde(with = ...)]` to read them as `f64` and write them back as
//! strings.

/// Serde adapter for `f64` amounts encoded as JSON strings.
///
/// Decoding accepts a string, a bare number or `null`. An empty string and
/// `null` decode to `0.0`.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::resources::decimal_string;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Totals {
///     #[serde(with = "decimal_string")]
///     total_inc_tax: f64,
/// }
///
/// let totals: Totals = serde_json::from_str(r#"{"total_inc_tax":"79.0000"}"#).unwrap();
/// assert!((totals.total_inc_tax - 79.0).abs() < f64::EPSILON);
/// assert_eq!(serde_json::to_string(&totals).unwrap(), r#"{"total_inc_tax":"79"}"#);
/// ```
pub mod decimal_string {
    use serde::{de, Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(f64),
    }

    /// Writes the amount as a string.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(value)
    }

    /// Reads an amount from a string or a number.
    ///
    /// # Errors
    ///
    /// Fails when a non-empty string is not a decimal number.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Raw>::deserialize(deserializer)? {
            None => Ok(0.0),
            Some(Raw::Number(n)) => Ok(n),
            Some(Raw::Text(s)) if s.trim().is_empty() => Ok(0.0),
            Some(Raw::Text(s)) => s
                .trim()
                .parse::<f64>()
                .map_err(|e| de::Error::custom(format!("invalid decimal '{s}': {e}"))),
        }
    }
}
