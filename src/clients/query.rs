//! Query string encoding for filter parameter structs.
//!
//! Parameters are plain `Serialize` structs. Each field is emitted under
//! its serde name unless it serializes to `null` or to an empty string.
//! Filters where zero is meaningful must be `Option<_>`: `Some(0)` encodes
//! as `field=0`, `None` is omitted.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::clients::errors::InvalidHttpRequestError;

/// Encodes `params` as a query string without the leading `?`.
///
/// Keys are sorted. Keys and values are percent-encoded. Arrays are joined
/// with commas. A unit value (`()`) or `None` encodes as an empty string.
///
/// # Errors
///
/// Returns [`InvalidHttpRequestError::QueryEncoding`] if `params` does not
/// serialize to a JSON object, or contains a nested object.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::clients::encode_query;
/// use serde::Serialize;
///
/// #[derive(Serialize, Default)]
/// struct Params {
///     #[serde(skip_serializing_if = "Option::is_none")]
///     customer_id: Option<u64>,
///     #[serde(skip_serializing_if = "Option::is_none")]
///     sku: Option<String>,
/// }
///
/// assert_eq!(encode_query(&Params::default()).unwrap(), "");
///
/// let params = Params { customer_id: Some(0), sku: Some("A B".into()) };
/// assert_eq!(encode_query(&params).unwrap(), "customer_id=0&sku=A%20B");
/// ```
pub fn encode_query<T: Serialize + ?Sized>(params: &T) -> Result<String, InvalidHttpRequestError> {
    let value = serde_json::to_value(params).map_err(|e| InvalidHttpRequestError::QueryEncoding {
        reason: e.to_string(),
    })?;

    let map = match value {
        Value::Null => return Ok(String::new()),
        Value::Object(map) => map,
        other => {
            return Err(InvalidHttpRequestError::QueryEncoding {
                reason: format!("expected a struct or map, got {other}"),
            })
        }
    };

    let mut pairs = BTreeMap::new();
    for (key, val) in map {
        if let Some(encoded) = scalar_to_string(&key, val)? {
            pairs.insert(key, encoded);
        }
    }

    Ok(pairs
        .iter()
        .map(|(key, val)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(val)))
        .collect::<Vec<_>>()
        .join("&"))
}

fn scalar_to_string(key: &str, value: Value) -> Result<Option<String>, InvalidHttpRequestError> {
    let encoded = match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(items) => {
            let values = items
                .into_iter()
                .map(|item| scalar_to_string(key, item))
                .collect::<Result<Vec<_>, _>>()?
                .into_iter()
                .flatten()
                .collect::<Vec<_>>();
            (!values.is_empty()).then(|| values.join(","))
        }
        Value::Object(_) => {
            return Err(InvalidHttpRequestError::QueryEncoding {
                reason: format!("field '{key}' is a nested object"),
            })
        }
    };
    Ok(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize, Default)]
    struct Filters {
        #[serde(skip_serializing_if = "Option::is_none")]
        page: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        status_id: Option<u64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        email: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        is_visible: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        min_total: Option<f64>,
    }

    #[test]
    fn test_all_defaults_encode_empty() {
        assert_eq!(encode_query(&Filters::default()).unwrap(), "");
    }

    #[test]
    fn test_explicit_zero_is_kept() {
        let params = Filters {
            status_id: Some(0),
            ..Default::default()
        };
        assert_eq!(encode_query(&params).unwrap(), "status_id=0");
    }

    #[test]
    fn test_keys_are_sorted() {
        let params = Filters {
            page: Some(2),
            email: Some("a@example.com".to_string()),
            is_visible: Some(true),
            min_total: Some(9.5),
            ..Default::default()
        };
        assert_eq!(
            encode_query(&params).unwrap(),
            "email=a%40example.com&is_visible=true&min_total=9.5&page=2"
        );
    }

    #[test]
    fn test_empty_string_is_omitted() {
        let params = Filters {
            email: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(encode_query(&params).unwrap(), "");
    }

    #[test]
    fn test_unit_and_none_encode_empty() {
        assert_eq!(encode_query(&()).unwrap(), "");
        assert_eq!(encode_query(&None::<Filters>).unwrap(), "");
    }

    #[test]
    fn test_arrays_join_with_commas() {
        #[derive(Serialize)]
        struct Ids {
            ids: Vec<u64>,
        }
        let query = encode_query(&Ids { ids: vec![1, 2, 3] }).unwrap();
        assert_eq!(query, "ids=1%2C2%2C3");
    }

    #[test]
    fn test_scalar_params_are_rejected() {
        assert!(matches!(
            encode_query(&42),
            Err(InvalidHttpRequestError::QueryEncoding { .. })
        ));
    }

    #[test]
    fn test_nested_objects_are_rejected() {
        #[derive(Serialize)]
        struct Inner {
            a: u8,
        }
        #[derive(Serialize)]
        struct Outer {
            inner: Inner,
        }
        assert!(matches!(
            encode_query(&Outer { inner: Inner { a: 1 } }),
            Err(InvalidHttpRequestError::QueryEncoding { .. })
        ));
    }
}
