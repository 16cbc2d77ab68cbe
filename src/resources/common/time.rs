//! Date handling for the BigCommerce v2 API.
//!
//! The API writes dates as fixed-offset RFC 1123 text, for example
//! `Wed, 14 Nov 2012 19:26:23 +0000`, and uses the empty string for
//! "no date".

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// The layout of every date the API reads or writes.
pub const BC_TIME_FORMAT: &str = "%a, %d %b %Y %H:%M:%S %z";

/// An optional timestamp in the API's date format.
///
/// - `""` (or `null`) decodes to an absent value, never to an error.
/// - Any other string must match [`BC_TIME_FORMAT`]; a mismatch is a
///   decoding error.
/// - An absent value, or the zero instant `0001-01-01T00:00:00Z`, encodes
///   as `""`.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::resources::BcTime;
///
/// let shipped: BcTime = serde_json::from_str(r#""""#).unwrap();
/// assert!(shipped.time().is_none());
///
/// let created: BcTime =
///     serde_json::from_str(r#""Wed, 14 Nov 2012 19:26:23 +0000""#).unwrap();
/// assert_eq!(
///     serde_json::to_string(&created).unwrap(),
///     r#""Wed, 14 Nov 2012 19:26:23 +0000""#
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BcTime(Option<DateTime<FixedOffset>>);

impl BcTime {
    /// Wraps a timestamp.
    #[must_use]
    pub const fn new(time: DateTime<FixedOffset>) -> Self {
        Self(Some(time))
    }

    /// The absent value.
    #[must_use]
    pub const fn none() -> Self {
        Self(None)
    }

    /// Returns the timestamp, or `None` when absent or set to the zero
    /// instant.
    #[must_use]
    pub fn time(&self) -> Option<&DateTime<FixedOffset>> {
        self.0.as_ref().filter(|t| !is_zero_instant(t))
    }

    /// Returns `true` when absent or set to the zero instant.
    #[must_use]
    pub fn is_none(&self) -> bool {
        self.time().is_none()
    }

    /// Parses API date text. An empty string yields the absent value.
    ///
    /// # Errors
    ///
    /// Returns a [`chrono::ParseError`] when non-empty text does not match
    /// [`BC_TIME_FORMAT`].
    pub fn parse(text: &str) -> Result<Self, chrono::ParseError> {
        if text.is_empty() {
            return Ok(Self::none());
        }
        DateTime::parse_from_str(text, BC_TIME_FORMAT).map(Self::new)
    }
}

fn is_zero_instant(time: &DateTime<FixedOffset>) -> bool {
    NaiveDate::from_ymd_opt(1, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .is_some_and(|zero| time.with_timezone(&Utc).naive_utc() == zero)
}

impl From<DateTime<FixedOffset>> for BcTime {
    fn from(time: DateTime<FixedOffset>) -> Self {
        Self::new(time)
    }
}

impl From<Option<DateTime<FixedOffset>>> for BcTime {
    fn from(time: Option<DateTime<FixedOffset>>) -> Self {
        Self(time)
    }
}

impl fmt::Display for BcTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(t) if !is_zero_instant(&t) => write!(f, "{}", t.format(BC_TIME_FORMAT)),
            _ => Ok(()),
        }
    }
}

impl Serialize for BcTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BcTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = Option::<String>::deserialize(deserializer)?;
        match text.as_deref() {
            None | Some("") => Ok(Self::none()),
            Some(s) => Self::parse(s)
                .map_err(|e| de::Error::custom(format!("invalid date '{s}': {e}"))),
        }
    }
}
