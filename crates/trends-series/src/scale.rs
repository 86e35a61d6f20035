// File: crates/trends-series/src/scale.rs
// Summary: Unit divisor applied to raw volumes, chosen once per source file.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleUnit {
    Millions,
    Billions,
}

impl ScaleUnit {
    /// Origination count files (`num_*`) plot in millions; dollar volume files in billions.
    pub fn for_source(source: &str) -> Self {
        if source.contains("num_") {
            Self::Millions
        } else {
            Self::Billions
        }
    }

    pub const fn divisor(self) -> f64 {
        match self {
            Self::Millions => 1e6,
            Self::Billions => 1e9,
        }
    }

    /// Suffix appended to value tick labels.
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Millions => "M",
            Self::Billions => "B",
        }
    }

    pub const fn axis_label(self) -> &'static str {
        match self {
            Self::Millions => "Number of originations (in millions)",
            Self::Billions => "Loan volume (in billions of dollars)",
        }
    }

    #[inline]
    pub fn apply(self, raw: f64) -> f64 {
        raw / self.divisor()
    }
}
