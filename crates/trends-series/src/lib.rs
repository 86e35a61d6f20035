// File: crates/trends-series/src/lib.rs
// Summary: Series builder entry point; exports row reading, normalization and partitioning.

pub mod builder;
pub mod domain;
pub mod error;
pub mod month;
pub mod point;
pub mod row;
pub mod scale;
pub mod schema;

pub use builder::{build_series, projected_cutoff, BuildOptions, SeriesSet, PROJECTED_MONTHS};
pub use domain::Domain;
pub use error::{Result, SeriesError};
pub use month::{EpochMonths, MonthFormatter};
pub use point::{Point, Segment};
pub use row::{parse_rows, read_rows, RawRow, RawTable};
pub use scale::ScaleUnit;
pub use schema::Schema;
