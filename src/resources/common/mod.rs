//! Types shared across resources.

mod address;
mod money;
mod time;

pub use address::Address;
pub use money::decimal_string;
pub use time::{BcTime, BC_TIME_FORMAT};

use serde::Deserialize;

/// Reply body of the `*/count` endpoints.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub(crate) struct Count {
    pub count: u64,
}
