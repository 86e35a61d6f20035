// File: crates/trends-chart/src/lib.rs
// Summary: Chart library entry point; exports the line chart model and SVG/PNG rendering.

pub mod axis;
pub mod chart;
pub mod geometry;
pub mod grid;
pub mod scale;
pub mod series;
pub mod text;
pub mod theme;
pub mod types;

pub use axis::{Axis, AxisKind};
pub use chart::{LineChart, ProjectedMarker, RenderOptions};
pub use series::Series;
pub use text::TextShaper;
pub use theme::Theme;
