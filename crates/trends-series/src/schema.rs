// File: crates/trends-series/src/schema.rs
// Summary: Declared CSV layouts and the column names they read.

use serde::{Deserialize, Serialize};

pub const MONTH: &str = "month";
pub const VOLUME: &str = "volume";
/// Alternate header some count files use for the value column.
pub const NUM: &str = "num";
pub const SEASONAL: &str = "seasonal";
pub const GROUP: &str = "group";

/// Which column carries the seasonal indicator.
///
/// Upstream files come in two shapes: category files with a dedicated
/// `seasonal` column next to `group`, and lending-level files that put the
/// indicator in `group`. The shape is declared per chart, never inferred
/// from column order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Schema {
    Standard,
    GroupedSeasonal,
}

impl Schema {
    pub const fn seasonal_column(self) -> &'static str {
        match self {
            Self::Standard => SEASONAL,
            Self::GroupedSeasonal => GROUP,
        }
    }
}
