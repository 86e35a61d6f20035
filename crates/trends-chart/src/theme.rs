// File: crates/trends-chart/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use skia_safe as skia;
use trends_series::Segment;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub marker: skia::Color,
    pub unadjusted: skia::Color,
    pub adjusted: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 230, 230, 232),
            axis_line: skia::Color::from_argb(255, 90, 93, 97),
            axis_label: skia::Color::from_argb(255, 16, 24, 32),
            tick: skia::Color::from_argb(255, 90, 93, 97),
            marker: skia::Color::from_argb(255, 117, 120, 123),
            unadjusted: skia::Color::from_argb(255, 0x7e, 0xb7, 0xe8),
            adjusted: skia::Color::from_argb(255, 0x20, 0xaa, 0x3f),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            marker: skia::Color::from_argb(255, 255, 230, 70),
            unadjusted: skia::Color::from_argb(255, 64, 160, 255),
            adjusted: skia::Color::from_argb(255, 40, 200, 120),
        }
    }

    pub fn stroke_for(&self, segment: Segment) -> skia::Color {
        if segment.adjusted { self.adjusted } else { self.unadjusted }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`.
pub fn find(name: &str) -> Option<Theme> {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name))
}
