// File: crates/trends-chart/src/geometry.rs
// Summary: Plot rectangle derived from surface size and insets.

use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PlotRect {
    /// Plot area inside `insets`; `None` when the insets leave no room.
    pub fn inside(width: i32, height: i32, insets: &Insets) -> Option<Self> {
        if width <= insets.hsum() as i32 || height <= insets.vsum() as i32 {
            return None;
        }
        Some(Self {
            left: insets.left as f32,
            top: insets.top as f32,
            right: (width - insets.right as i32) as f32,
            bottom: (height - insets.bottom as i32) as f32,
        })
    }
}
